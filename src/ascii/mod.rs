//! ASCII-art banner rendering.
//!
//! Maps characters to fixed five-row block glyphs and concatenates
//! them horizontally with a two-space separator. One font ships today
//! (`standard`). Characters the font does not cover render as the
//! blank glyph rather than erroring.

mod font;

pub use font::{FONT_NAMES, GLYPH_HEIGHT};

use thiserror::Error;

/// Errors produced by the banner renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested font is not in the registry.
    #[error("font \"{requested}\" not available; available fonts: {}", .available.join(", "))]
    UnknownFont {
        requested: String,
        available: Vec<String>,
    },
}

/// Render `text` in the named font.
///
/// Input is uppercased first. The result is always [`GLYPH_HEIGHT`]
/// lines joined with `\n`, each glyph followed by two spaces.
pub fn render(text: &str, font_name: &str) -> Result<String, RenderError> {
    if !FONT_NAMES.contains(&font_name) {
        return Err(RenderError::UnknownFont {
            requested: font_name.to_string(),
            available: FONT_NAMES.iter().map(|n| n.to_string()).collect(),
        });
    }

    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for ch in text.to_uppercase().chars() {
        let glyph = font::standard_glyph(ch).unwrap_or(font::BLANK);
        for (row, line) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(line);
            row.push_str("  ");
        }
    }

    Ok(rows.join("\n"))
}
