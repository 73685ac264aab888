//! meeting-notes - Turn meeting transcripts into structured, fixed-format meeting notes
//!
//! The pipeline is: transcript -> prompt -> model reply -> sanitized sections
//! -> rendered notes text -> PDF and text exports.

pub mod cli;
pub mod config;
pub mod export;
pub mod llm;
pub mod notes;

use thiserror::Error;

pub use notes::sanitizer::ParseError;

/// Main error type for meeting-notes
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NotesError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meeting-notes";
