//! Data models for the notes pipeline

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::notes::sections::SectionName;

/// Date format used for the metadata block, e.g. "Oct 15, 2024".
pub const MEETING_DATE_FORMAT: &str = "%b %d, %Y";

/// Section label to flat body text, as recovered from a model reply.
///
/// Values are always plain strings of newline-separated bullet lines.
/// Keys that are not known section labels are kept but never rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredNotes {
    sections: BTreeMap<String, String>,
}

impl StructuredNotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placeholder notes with one generic sentence for every known section.
    pub fn placeholder() -> Self {
        SectionName::ALL
            .into_iter()
            .map(|s| (s.label().to_string(), s.placeholder().to_string()))
            .collect()
    }

    pub fn insert(&mut self, label: impl Into<String>, body: impl Into<String>) {
        self.sections.insert(label.into(), body.into());
    }

    pub fn get(&self, section: SectionName) -> Option<&str> {
        self.sections.get(section.label()).map(String::as_str)
    }

    pub fn get_label(&self, label: &str) -> Option<&str> {
        self.sections.get(label).map(String::as_str)
    }

    pub fn contains(&self, section: SectionName) -> bool {
        self.sections.contains_key(section.label())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Known sections present in these notes, in rendering order.
    pub fn known_sections(&self) -> impl Iterator<Item = SectionName> + '_ {
        SectionName::ALL.into_iter().filter(|s| self.contains(*s))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StructuredNotes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            sections: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Caller-supplied meeting details shown in the title block.
///
/// Every field is optional; blanks count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingMetadata {
    pub project_title: Option<String>,
    pub client_name: Option<String>,
    pub meeting_date: Option<String>,
    pub attendees: Option<String>,
    pub contact_info: Option<String>,
}

/// Metadata with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMetadata {
    pub project_title: String,
    pub client_name: String,
    pub meeting_date: String,
    pub attendees: String,
    pub contact_info: String,
}

impl MeetingMetadata {
    /// Fill in defaults, using today's local date when no date was given.
    pub fn resolve(&self) -> ResolvedMetadata {
        self.resolve_on(Local::now().date_naive())
    }

    /// Fill in defaults, using `today` when no date was given.
    pub fn resolve_on(&self, today: NaiveDate) -> ResolvedMetadata {
        ResolvedMetadata {
            project_title: or_default(&self.project_title, "Project Meeting"),
            client_name: or_default(&self.client_name, "Client"),
            meeting_date: match non_blank(&self.meeting_date) {
                Some(date) => date.to_string(),
                None => today.format(MEETING_DATE_FORMAT).to_string(),
            },
            attendees: or_default(&self.attendees, "Meeting attendees"),
            contact_info: or_default(&self.contact_info, "Contact information"),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn or_default(value: &Option<String>, default: &str) -> String {
    non_blank(value).unwrap_or(default).to_string()
}

/// The canonical flattened notes text. Both the text and PDF exports derive
/// from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotes(String);

impl RenderedNotes {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RenderedNotes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
