//! Plain-text output: the rendered notes, byte for byte.

use std::path::Path;

use crate::notes::RenderedNotes;
use crate::Result;

pub fn write_text(notes: &RenderedNotes, path: &Path) -> Result<()> {
    std::fs::write(path, notes.as_str())?;
    Ok(())
}

/// Read a notes text file back, e.g. to re-render it as PDF.
pub fn read_text(path: &Path) -> Result<RenderedNotes> {
    Ok(RenderedNotes::new(std::fs::read_to_string(path)?))
}
