//! Recover structured notes from a model's free-text reply
//!
//! Models wrap JSON in code fences, prepend chatter ("Here are the notes:")
//! and sometimes return lists where a string was asked for. This module
//! locates the JSON object in the reply and flattens every value to a
//! bulleted string.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::notes::model::StructuredNotes;
use crate::notes::sections::SectionName;

/// Prefix for list items flattened into bullet lines.
pub const BULLET: char = '●';

/// Why a model reply could not be turned into notes.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no JSON object found in reply")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("top-level JSON value is not an object")]
    NotAnObject,
}

/// Parse a raw model reply into [`StructuredNotes`].
pub fn sanitize(raw: &str) -> Result<StructuredNotes, ParseError> {
    let text = strip_code_fence(raw);
    let object = locate_object(text)?;

    Ok(object
        .into_iter()
        .map(|(key, value)| (key, flatten_value(value)))
        .collect())
}

/// Like [`sanitize`], but never fails: unparseable replies, and replies that
/// parse to an empty object, yield the placeholder notes.
pub fn sanitize_or_fallback(raw: &str) -> StructuredNotes {
    match sanitize(raw) {
        Ok(notes) if notes.is_empty() => {
            tracing::warn!("Model reply contained no sections, using placeholder notes");
            StructuredNotes::placeholder()
        }
        Ok(notes) => {
            tracing::debug!("Parsed {} sections from model reply", notes.len());
            notes
        }
        Err(e) => {
            tracing::warn!("Falling back to placeholder notes: {}", e);
            tracing::debug!("Unparseable reply: {}", raw);
            StructuredNotes::placeholder()
        }
    }
}

/// Remove a surrounding ```json ... ``` or ``` ... ``` fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest)
        .trim_end();

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Find the JSON object in `text`.
///
/// Each `{` is tried as a start position and parsed as a stream, so the
/// object ends where the JSON grammar says it does: braces inside strings
/// and trailing prose are harmless. The first object carrying a known section
/// key wins. Candidates inside an object that already parsed are skipped. If
/// no object looks like notes, the first candidate's object is used as-is,
/// and a broken first candidate is reported rather than replaced by something
/// nested inside it.
fn locate_object(text: &str) -> Result<Map<String, Value>, ParseError> {
    let mut first_candidate = None;
    let mut parsed_until = 0;

    for (i, (start, _)) in text.match_indices('{').enumerate() {
        if start < parsed_until {
            continue;
        }

        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        let next = stream.next();

        match next {
            Some(Ok(Value::Object(map))) => {
                if has_known_section(&map) {
                    return Ok(map);
                }
                parsed_until = start + stream.byte_offset();
                if i == 0 {
                    first_candidate = Some(Ok(map));
                }
            }
            Some(Err(e)) if i == 0 => first_candidate = Some(Err(ParseError::InvalidJson(e))),
            _ => {}
        }
    }

    first_candidate.unwrap_or_else(|| {
        Err(if is_json_scalar_or_array(text) {
            ParseError::NotAnObject
        } else {
            ParseError::NoJsonObject
        })
    })
}

fn has_known_section(map: &Map<String, Value>) -> bool {
    map.keys().any(|k| SectionName::from_label(k).is_some())
}

fn is_json_scalar_or_array(text: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(text),
        Ok(v) if !v.is_object()
    )
}

/// Coerce any JSON value to a flat body string.
fn flatten_value(value: Value) -> String {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| format!("{BULLET} {}", scalar_text(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => scalar_text(other),
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{
        "Client Vision": "● Core idea: Build mobile app\n● Problem: Users need real-time features",
        "Decisions Made": ["Ship Nov 1", "Hire two engineers"]
    }"#;

    #[test]
    fn plain_object_is_parsed() {
        let notes = sanitize(REPLY).unwrap();
        assert_eq!(
            notes.get(SectionName::ClientVision),
            Some("● Core idea: Build mobile app\n● Problem: Users need real-time features")
        );
    }

    #[test]
    fn fenced_reply_matches_unfenced() {
        let plain = sanitize(REPLY).unwrap();
        let json_fence = sanitize(&format!("```json\n{REPLY}\n```")).unwrap();
        let bare_fence = sanitize(&format!("```\n{REPLY}\n```")).unwrap();

        assert_eq!(json_fence, plain);
        assert_eq!(bare_fence, plain);
    }

    #[test]
    fn list_values_become_bullet_lines() {
        let notes = sanitize(r#"{"Decisions Made": ["a", "b"]}"#).unwrap();
        assert_eq!(notes.get(SectionName::DecisionsMade), Some("● a\n● b"));
    }

    #[test]
    fn every_list_item_gets_a_bullet_even_if_it_has_one() {
        let notes = sanitize(r#"{"Decisions Made": ["● a", "b"]}"#).unwrap();
        assert_eq!(notes.get(SectionName::DecisionsMade), Some("● ● a\n● b"));
    }

    #[test]
    fn scalars_are_coerced_to_text() {
        let notes = sanitize(
            r#"{"Data & Insights": 40, "Decisions Made": true, "Client Vision": null,
                "Cost & Market Positioning": {"price": "$19.99"}}"#,
        )
        .unwrap();

        assert_eq!(notes.get(SectionName::DataAndInsights), Some("40"));
        assert_eq!(notes.get(SectionName::DecisionsMade), Some("true"));
        assert_eq!(notes.get(SectionName::ClientVision), Some(""));
        assert_eq!(
            notes.get(SectionName::CostAndPositioning),
            Some(r#"{"price":"$19.99"}"#)
        );
    }

    #[test]
    fn surrounding_prose_is_ignored() {
        let raw = format!("Sure! Here are your notes:\n{REPLY}\nLet me know if you need more.");
        assert_eq!(sanitize(&raw).unwrap(), sanitize(REPLY).unwrap());
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_the_boundary() {
        let raw = r#"{"Client Vision": "● Use {placeholders} in templates"} trailing } brace"#;
        let notes = sanitize(raw).unwrap();
        assert_eq!(
            notes.get(SectionName::ClientVision),
            Some("● Use {placeholders} in templates")
        );
    }

    #[test]
    fn stray_brace_in_preamble_is_skipped() {
        let raw = r#"I used {your} template: {"Decisions Made": "● Ship Nov 1"}"#;
        let notes = sanitize(raw).unwrap();
        assert_eq!(notes.get(SectionName::DecisionsMade), Some("● Ship Nov 1"));
    }

    #[test]
    fn preamble_object_does_not_hide_notes() {
        let raw = r#"Format {} applied: {"Decisions Made": "● Ship Nov 1"}"#;
        let notes = sanitize(raw).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes.get(SectionName::DecisionsMade), Some("● Ship Nov 1"));
    }

    #[test]
    fn nested_section_key_does_not_replace_outer_object() {
        let raw = r#"{"meta": {"Decisions Made": "x"}} then {"Client Vision": "● Build it"}"#;
        let notes = sanitize(raw).unwrap();
        assert_eq!(notes.get(SectionName::ClientVision), Some("● Build it"));
        assert!(!notes.contains(SectionName::DecisionsMade));
    }

    #[test]
    fn object_without_known_sections_is_kept_when_nothing_better_exists() {
        let notes = sanitize(r#"{"Summary": "● short"}"#).unwrap();
        assert_eq!(notes.get_label("Summary"), Some("● short"));
    }

    #[test]
    fn broken_outer_object_is_not_replaced_by_nested_one() {
        let raw = r#"{"Client Vision": {"x": 1}, oops"#;
        assert!(matches!(sanitize(raw), Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn reply_without_object_is_an_error() {
        assert!(matches!(
            sanitize("I could not process this transcript."),
            Err(ParseError::NoJsonObject)
        ));
        assert!(matches!(sanitize("[1, 2, 3]"), Err(ParseError::NotAnObject)));
        assert!(matches!(sanitize(""), Err(ParseError::NoJsonObject)));
    }

    #[test]
    fn fallback_yields_all_ten_sections() {
        let notes = sanitize_or_fallback("no json here");
        assert_eq!(notes.len(), 10);
        for section in SectionName::ALL {
            assert!(notes.contains(section), "missing {section}");
        }
    }

    #[test]
    fn fallback_passes_good_replies_through() {
        let notes = sanitize_or_fallback(r#"{"Decisions Made": "● Ship Nov 1"}"#);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn empty_object_falls_back_to_placeholders() {
        let notes = sanitize_or_fallback("```json\n{}\n```");
        assert_eq!(notes, StructuredNotes::placeholder());
    }
}
