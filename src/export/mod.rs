//! Export module for meeting-notes
//!
//! Writes rendered notes as PDF and plain text, and decides where they go.

pub mod pdf;
pub mod text;

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

pub use pdf::{render_pdf, write_pdf};
pub use text::{read_text, write_text};

/// Where one generation run writes its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub pdf: PathBuf,
    pub text: PathBuf,
}

/// Default PDF filename, e.g. `meeting_notes_20241015_093000.pdf`.
pub fn default_pdf_name(now: DateTime<Local>) -> String {
    format!("meeting_notes_{}.pdf", now.format("%Y%m%d_%H%M%S"))
}

/// `path` if it already ends in `.pdf` (any case), otherwise `path` with
/// `.pdf` appended, so a PDF never lands on a non-PDF file name.
pub fn with_pdf_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|e| e.eq_ignore_ascii_case("pdf")) {
        return path.to_path_buf();
    }

    let mut name = path.as_os_str().to_owned();
    name.push(".pdf");
    PathBuf::from(name)
}

/// Resolve the PDF and text paths for a run.
///
/// An explicit `output` is used as given (gaining a `.pdf` extension if it
/// has none); otherwise a timestamped name inside `output_dir` is used. The
/// text file always sits next to the PDF with a `.txt` extension.
pub fn output_paths(output: Option<&Path>, output_dir: &Path, now: DateTime<Local>) -> OutputPaths {
    let pdf = match output {
        Some(path) => with_pdf_extension(path),
        None => output_dir.join(default_pdf_name(now)),
    };
    let text = pdf.with_extension("txt");

    OutputPaths { pdf, text }
}
