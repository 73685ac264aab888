//! Paginated PDF output
//!
//! Notes text is classified line by line (see [`crate::notes::layout`]) and
//! laid out top to bottom on US Letter pages with three paragraph styles.
//! Layout works in points; printpdf wants millimetres at draw time.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::path::Path;

use crate::config::DocumentSettings;
use crate::notes::{layout, LineStyle, RenderedNotes};
use crate::{NotesError, Result};

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const MARGIN_PT: f32 = 72.0;
const SPACER_PT: f32 = 6.0;
const LEADING: f32 = 1.2;

/// Average Helvetica glyph width as a fraction of the font size.
const REGULAR_CHAR_WIDTH: f32 = 0.5;
const BOLD_CHAR_WIDTH: f32 = 0.55;

/// Font and spacing for one kind of paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub font_size: f32,
    pub space_after: f32,
    pub bold: bool,
}

impl ParagraphStyle {
    /// Style for a classified line; `None` for spacers.
    pub fn for_line(style: LineStyle, settings: &DocumentSettings) -> Option<Self> {
        match style {
            LineStyle::Spacer => None,
            LineStyle::Title => Some(Self {
                font_size: settings.title_font_size,
                space_after: 12.0,
                bold: true,
            }),
            LineStyle::Section => Some(Self {
                font_size: settings.section_font_size,
                space_after: 8.0,
                bold: true,
            }),
            LineStyle::Body => Some(Self {
                font_size: settings.body_font_size,
                space_after: 6.0,
                bold: false,
            }),
        }
    }

    fn max_chars(&self, width_pt: f32) -> usize {
        let factor = if self.bold {
            BOLD_CHAR_WIDTH
        } else {
            REGULAR_CHAR_WIDTH
        };
        ((width_pt / (self.font_size * factor)) as usize).max(1)
    }
}

/// A single text row placed on a page, in points from the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    pub text: String,
    pub style: ParagraphStyle,
    pub x: f32,
    pub y: f32,
}

/// Lay notes out into pages of placed rows.
pub fn paginate(notes: &RenderedNotes, settings: &DocumentSettings) -> Vec<Vec<PlacedRow>> {
    let top = PAGE_HEIGHT_PT - MARGIN_PT;
    let frame_width = PAGE_WIDTH_PT - 2.0 * MARGIN_PT;

    let mut pages = vec![Vec::new()];
    let mut y = top;

    for line in layout(notes.as_str()) {
        let Some(style) = ParagraphStyle::for_line(line.style, settings) else {
            y -= SPACER_PT;
            continue;
        };

        let line_height = style.font_size * LEADING;
        for row in wrap(&pdf_safe_text(line.text), style.max_chars(frame_width)) {
            if y - line_height < MARGIN_PT {
                pages.push(Vec::new());
                y = top;
            }
            y -= line_height;

            if let Some(page) = pages.last_mut() {
                page.push(PlacedRow {
                    text: row,
                    style,
                    x: MARGIN_PT,
                    y,
                });
            }
        }
        y -= style.space_after;
    }

    pages
}

/// Render notes to PDF bytes.
pub fn render_pdf(
    notes: &RenderedNotes,
    title: &str,
    settings: &DocumentSettings,
) -> Result<Vec<u8>> {
    let pages = paginate(notes, settings);

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        pt_to_mm(PAGE_WIDTH_PT),
        pt_to_mm(PAGE_HEIGHT_PT),
        "Layer 1",
    );
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    for (i, rows) in pages.iter().enumerate() {
        let (page, layer) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(pt_to_mm(PAGE_WIDTH_PT), pt_to_mm(PAGE_HEIGHT_PT), "Layer 1")
        };
        let layer = doc.get_page(page).get_layer(layer);

        for row in rows {
            let font: &IndirectFontRef = if row.style.bold { &bold } else { &regular };
            layer.use_text(
                row.text.as_str(),
                row.style.font_size,
                pt_to_mm(row.x),
                pt_to_mm(row.y),
                font,
            );
        }
    }

    tracing::debug!("Laid out notes on {} page(s)", pages.len());
    doc.save_to_bytes().map_err(pdf_err)
}

/// Render notes and write them to `path`.
pub fn write_pdf(
    notes: &RenderedNotes,
    path: &Path,
    settings: &DocumentSettings,
) -> Result<()> {
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Meeting Notes");
    let bytes = render_pdf(notes, title, settings)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn pdf_err(e: printpdf::Error) -> NotesError {
    NotesError::Pdf(e.to_string())
}

fn pt_to_mm(pt: f32) -> Mm {
    Mm(pt * 25.4 / 72.0)
}

/// Characters WinAnsiEncoding places in 0x80-0x9F.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Replace characters the built-in PDF fonts cannot show.
///
/// printpdf writes built-in font text as WinAnsiEncoding, which covers ASCII,
/// Latin-1 and a few typographic extras (`•`, curly quotes, dashes). Filled
/// bullets become `•`, hollow ones `o`, and everything else outside the
/// encoding (including the C1 control code points) becomes `?`.
pub fn pdf_safe_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '●' | '■' => '•',
            '○' => 'o',
            c if c < ' ' => ' ',
            ' '..='~' | '\u{A0}'..='\u{FF}' => c,
            c if WIN_ANSI_EXTRAS.contains(c) => c,
            _ => '?',
        })
        .collect()
}

/// Greedy word wrap to at most `max_chars` characters per row. Words longer
/// than a row are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                rows.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            rows.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars && current_len > 0 {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
