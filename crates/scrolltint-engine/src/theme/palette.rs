//! Compiled-in colors for the storefront page.
//!
//! Section entries are listed in document order; each `from` repeats the
//! previous entry's `to` so the background never jumps between sections.

use crate::paint::Rgb;

use super::config::SectionPalette;

pub const DARK_BACKGROUND: Rgb = Rgb::new(0x0d, 0x0b, 0x0a);
pub const LIGHT_TEXT: Rgb = Rgb::new(0xf5, 0xf0, 0xe8);
pub const CREAM: Rgb = Rgb::new(0xf5, 0xef, 0xe6);
pub const DARK_TEXT: Rgb = Rgb::new(0x1c, 0x19, 0x17);
pub const SOFT_GREEN: Rgb = Rgb::new(0xe8, 0xf0, 0xe3);

/// Used when the page root does not define the accent property, or defines
/// something unparseable.
pub const ACCENT_FALLBACK: Rgb = Rgb::new(0xd9, 0xc3, 0xa5);

pub const ACCENT_PROPERTY: &str = "--accent-color";

/// `(anchor key, color before, color after)`.
pub static SECTION_PALETTE: &[(&str, &str, &str)] = &[
    ("collection", "#e8f0e3", "#f3e7e9"),
    ("signature", "#f3e7e9", "#efe3d3"),
    ("notes-top", "#efe3d3", "#f6f0c9"),
    ("notes-heart", "#f6f0c9", "#f2d9dc"),
    ("notes-base", "#f2d9dc", "#e2d4c3"),
    ("atelier", "#e2d4c3", "#2b2320"),
    ("ingredients", "#2b2320", "#e9eef2"),
    ("bestsellers", "#e9eef2", "#f4ebe1"),
    ("gift-sets", "#f4ebe1", "#e7dcef"),
    ("reviews", "#e7dcef", "#f5efe6"),
    ("journal", "#f5efe6", "#dfe8df"),
    ("newsletter", "#dfe8df", "#1a1715"),
];

/// Parses [`SECTION_PALETTE`] into owned entries.
pub fn default_sections() -> Vec<SectionPalette> {
    SECTION_PALETTE
        .iter()
        .map(|&(key, from, to)| SectionPalette::from_hex(key, from, to))
        .collect()
}
