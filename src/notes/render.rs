//! Render structured notes into the canonical notes text, and classify that
//! text line by line for styled output.

use crate::notes::model::{MeetingMetadata, RenderedNotes, ResolvedMetadata, StructuredNotes};
use crate::notes::sections::SectionName;

/// Fixed marker printed in every title block.
pub const CONFIDENTIAL_MARKER: &str = "CONFIDENTIAL AND PROPRIETARY";

/// Render notes with metadata defaults resolved against today's date.
pub fn render_notes(notes: &StructuredNotes, metadata: &MeetingMetadata) -> RenderedNotes {
    render_resolved(notes, &metadata.resolve())
}

/// Render notes with already-resolved metadata.
///
/// Body sections appear in fixed order; sections missing from `notes` are
/// skipped entirely.
pub fn render_resolved(notes: &StructuredNotes, metadata: &ResolvedMetadata) -> RenderedNotes {
    let mut out = String::new();

    for line in [
        SectionName::TITLE.label(),
        metadata.project_title.as_str(),
        metadata.client_name.as_str(),
        metadata.meeting_date.as_str(),
        metadata.contact_info.as_str(),
        CONFIDENTIAL_MARKER,
    ] {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("Attendees: {}\n\n", metadata.attendees));

    for section in SectionName::body_sections() {
        if let Some(body) = notes.get(section) {
            out.push_str(section.label());
            out.push('\n');
            out.push_str(body);
            out.push_str("\n\n");
        }
    }

    RenderedNotes::new(out)
}

/// Paragraph style assigned to a single notes line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Blank line, rendered as vertical space
    Spacer,
    /// The "Project Kickoff" label
    Title,
    /// A line starting with a known section label
    Section,
    /// Everything else
    Body,
}

/// A trimmed notes line and its style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine<'a> {
    pub style: LineStyle,
    pub text: &'a str,
}

/// Classify one line. The title check runs first: the title label is itself a
/// section label and would otherwise be styled as a heading.
pub fn classify_line(line: &str) -> LineStyle {
    let line = line.trim();

    if line.is_empty() {
        LineStyle::Spacer
    } else if line == SectionName::TITLE.label() {
        LineStyle::Title
    } else if SectionName::ALL
        .iter()
        .any(|section| line.starts_with(section.label()))
    {
        LineStyle::Section
    } else {
        LineStyle::Body
    }
}

/// Split notes text into styled lines.
pub fn layout(text: &str) -> Vec<StyledLine<'_>> {
    text.split('\n')
        .map(|line| StyledLine {
            style: classify_line(line),
            text: line.trim(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn q4_metadata() -> MeetingMetadata {
        MeetingMetadata {
            project_title: Some("Q4 Planning".to_string()),
            client_name: Some("Acme".to_string()),
            meeting_date: Some("Oct 15, 2024".to_string()),
            attendees: Some("A, B".to_string()),
            contact_info: Some("555-0000".to_string()),
        }
    }

    #[test]
    fn renders_title_block_and_present_sections_only() {
        let mut notes = StructuredNotes::new();
        notes.insert("Decisions Made", "● Ship Nov 1");

        let rendered = render_notes(&notes, &q4_metadata());

        assert_eq!(
            rendered.as_str(),
            "Project Kickoff\nQ4 Planning\nAcme\nOct 15, 2024\n555-0000\n\
             CONFIDENTIAL AND PROPRIETARY\nAttendees: A, B\n\n\
             Decisions Made\n● Ship Nov 1\n\n"
        );
    }

    #[test]
    fn sections_render_in_fixed_order_regardless_of_input_order() {
        let notes: StructuredNotes = [
            ("Data & Insights", "● d"),
            ("Client Vision", "● c"),
            ("Decisions Made", "● m"),
            ("Unknown Extra", "● x"),
            ("Project Kickoff", "● k"),
        ]
        .into_iter()
        .collect();

        let rendered = render_notes(&notes, &q4_metadata());
        let text = rendered.as_str();

        let vision = text.find("Client Vision").unwrap();
        let decisions = text.find("Decisions Made").unwrap();
        let data = text.find("Data & Insights").unwrap();
        assert!(vision < decisions && decisions < data);
        assert!(!text.contains("Unknown Extra"));
        assert!(!text.contains("● k"));
        assert_eq!(text.matches("Project Kickoff").count(), 1);
    }

    #[test]
    fn default_metadata_is_rendered() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let resolved = MeetingMetadata::default().resolve_on(today);

        let rendered = render_resolved(&StructuredNotes::new(), &resolved);
        assert_eq!(
            rendered.as_str(),
            "Project Kickoff\nProject Meeting\nClient\nJan 15, 2025\nContact information\n\
             CONFIDENTIAL AND PROPRIETARY\nAttendees: Meeting attendees\n\n"
        );
    }

    #[test]
    fn classification_priority() {
        assert_eq!(classify_line(""), LineStyle::Spacer);
        assert_eq!(classify_line("   "), LineStyle::Spacer);
        assert_eq!(classify_line("Project Kickoff"), LineStyle::Title);
        assert_eq!(classify_line("  Project Kickoff  "), LineStyle::Title);
        assert_eq!(classify_line("Project Kickoff notes"), LineStyle::Section);
        assert_eq!(classify_line("Decisions Made"), LineStyle::Section);
        assert_eq!(classify_line("● Ship Nov 1"), LineStyle::Body);
        assert_eq!(classify_line(CONFIDENTIAL_MARKER), LineStyle::Body);
    }

    #[test]
    fn layout_of_rendered_notes() {
        let mut notes = StructuredNotes::new();
        notes.insert("Decisions Made", "● Ship Nov 1");
        let rendered = render_notes(&notes, &q4_metadata());

        let styles: Vec<_> = layout(rendered.as_str()).iter().map(|l| l.style).collect();
        use LineStyle::*;
        assert_eq!(
            styles,
            vec![
                Title, Body, Body, Body, Body, Body, Body, Spacer, Section, Body, Spacer, Spacer
            ]
        );
    }

    #[test]
    fn relayout_is_stable() {
        let notes = StructuredNotes::placeholder();
        let rendered = render_notes(&notes, &q4_metadata());

        let first = layout(rendered.as_str());
        let rejoined: String = first
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join("\n");
        let second = layout(&rejoined);

        assert_eq!(first, second);
    }
}
