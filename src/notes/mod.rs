//! Notes module: the fixed section list, reply sanitizing and rendering.

pub mod model;
pub mod pipeline;
pub mod render;
pub mod sanitizer;
pub mod sections;

pub use model::{MeetingMetadata, RenderedNotes, ResolvedMetadata, StructuredNotes};
pub use pipeline::{extract_structured_content, generate_meeting_notes};
pub use render::{classify_line, layout, render_notes, LineStyle, StyledLine};
pub use sanitizer::{sanitize, sanitize_or_fallback};
pub use sections::SectionName;
