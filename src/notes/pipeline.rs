//! Transcript to rendered notes orchestration

use crate::llm::{LlmProvider, NotesRequest};
use crate::notes::model::{MeetingMetadata, RenderedNotes, StructuredNotes};
use crate::notes::render::render_notes;
use crate::notes::sanitizer::sanitize_or_fallback;

/// Ask the model for notes and sanitize the reply.
///
/// Never fails: a backend error or an unparseable reply both yield the
/// placeholder notes.
pub async fn extract_structured_content(
    provider: &dyn LlmProvider,
    transcript: &str,
) -> StructuredNotes {
    match provider.extract_notes(NotesRequest { transcript }).await {
        Ok(reply) => sanitize_or_fallback(&reply),
        Err(e) => {
            tracing::warn!("Model request failed, using placeholder notes: {:#}", e);
            StructuredNotes::placeholder()
        }
    }
}

/// Run the whole pipeline for one transcript.
pub async fn generate_meeting_notes(
    provider: &dyn LlmProvider,
    transcript: &str,
    metadata: &MeetingMetadata,
) -> RenderedNotes {
    tracing::info!("Generating structured meeting notes...");
    let notes = extract_structured_content(provider, transcript).await;
    render_notes(&notes, metadata)
}
