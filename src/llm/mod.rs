//! LLM module for meeting-notes
//!
//! Builds the notes prompt and sends it to the configured text-generation
//! backend (Gemini).

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, LlmProvider, NotesRequest};
pub use gemini::GeminiClient;
pub use prompts::build_notes_prompt;
