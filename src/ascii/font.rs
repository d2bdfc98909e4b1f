//! Glyph tables for the banner renderer.

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Fonts known to the renderer.
pub const FONT_NAMES: &[&str] = &["standard"];

/// The space glyph, also used as the fallback for characters the font
/// does not cover.
pub(crate) const BLANK: [&str; GLYPH_HEIGHT] = ["   "; GLYPH_HEIGHT];

/// Look up a character in the `standard` font.
///
/// Input is expected to be uppercased already; lowercase letters have
/// no entries of their own.
pub(crate) fn standard_glyph(ch: char) -> Option<[&'static str; GLYPH_HEIGHT]> {
    let glyph = match ch {
        'A' => [" █████ ", "██   ██", "███████", "██   ██", "██   ██"],
        'B' => ["██████ ", "██   ██", "██████ ", "██   ██", "██████ "],
        'C' => [" ██████", "██     ", "██     ", "██     ", " ██████"],
        'D' => ["██████ ", "██   ██", "██   ██", "██   ██", "██████ "],
        'E' => ["███████", "██     ", "█████  ", "██     ", "███████"],
        'F' => ["███████", "██     ", "█████  ", "██     ", "██     "],
        'G' => [" ██████", "██     ", "██   ██", "██   ██", " ██████"],
        'H' => ["██   ██", "██   ██", "███████", "██   ██", "██   ██"],
        'I' => ["██", "██", "██", "██", "██"],
        'J' => ["     ██", "     ██", "     ██", "██   ██", " ██████"],
        'K' => ["██   ██", "██  ██ ", "█████  ", "██  ██ ", "██   ██"],
        'L' => ["██     ", "██     ", "██     ", "██     ", "███████"],
        'M' => ["███    ███", "████  ████", "██ ████ ██", "██  ██  ██", "██      ██"],
        'N' => ["███    ██", "████   ██", "██ ██  ██", "██  ██ ██", "██   ████"],
        'O' => [" ██████ ", "██    ██", "██    ██", "██    ██", " ██████ "],
        'P' => ["██████ ", "██   ██", "██████ ", "██     ", "██     "],
        'Q' => [" ██████ ", "██    ██", "██ ██ ██", "██  ████", " ███████"],
        'R' => ["██████ ", "██   ██", "██████ ", "██   ██", "██   ██"],
        'S' => [" ██████", "██     ", " ██████", "      ██", "██████ "],
        'T' => ["████████", "   ██   ", "   ██   ", "   ██   ", "   ██   "],
        'U' => ["██    ██", "██    ██", "██    ██", "██    ██", " ██████ "],
        'V' => ["██    ██", "██    ██", "██    ██", " ██  ██ ", "  ████  "],
        'W' => ["██      ██", "██  ██  ██", "██ ████ ██", "████  ████", "███    ███"],
        'X' => ["██   ██", " ██ ██ ", "  ███  ", " ██ ██ ", "██   ██"],
        'Y' => ["██   ██", " ██ ██ ", "  ███  ", "   ██  ", "   ██  "],
        'Z' => ["███████", "    ██ ", "   ██  ", "  ██   ", "███████"],
        ' ' => BLANK,
        '!' => ["██", "██", "██", "  ", "██"],
        '?' => [" ██████", "      ██", "  █████ ", "        ", "   ██   "],
        '.' => ["  ", "  ", "  ", "  ", "██"],
        ',' => ["  ", "  ", "  ", "██", "█ "],
        '0' => [" ██████ ", "██    ██", "██    ██", "██    ██", " ██████ "],
        '1' => ["   ██   ", " ████   ", "   ██   ", "   ██   ", "███████"],
        '2' => [" ██████ ", "      ██", " ██████ ", "██      ", "███████"],
        '3' => [" ██████ ", "      ██", " ██████ ", "      ██", " ██████ "],
        '4' => ["██    ██", "██    ██", "███████ ", "      ██", "      ██"],
        '5' => ["███████ ", "██      ", "██████  ", "      ██", "███████ "],
        '6' => [" ██████ ", "██      ", "██████  ", "██    ██", " ██████ "],
        '7' => ["███████", "     ██", "    ██ ", "   ██  ", "  ██   "],
        '8' => [" ██████ ", "██    ██", " ██████ ", "██    ██", " ██████ "],
        '9' => [" ██████ ", "██    ██", " ███████", "      ██", " ██████ "],
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
pub(crate) fn standard_chars() -> impl Iterator<Item = char> {
    ('A'..='Z')
        .chain('0'..='9')
        .chain([' ', '!', '?', '.', ','])
}
