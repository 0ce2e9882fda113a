use std::fmt;
use std::str::FromStr;

use super::parse::{parse_color, ColorParseError};

/// Opaque 8-bit sRGB color as written to a page stylesheet.
///
/// Channels are bytes, so no computed color can carry NaN or out-of-range
/// values into a style write.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        parse_color(s)
    }

    /// Parses `s`, substituting `fallback` when it is malformed.
    pub fn parse_or(s: &str, fallback: Rgb) -> Self {
        match parse_color(s) {
            Ok(c) => c,
            Err(err) => {
                log::warn!("malformed color {s:?} ({err}); using {fallback}");
                fallback
            }
        }
    }

    /// Per-channel linear interpolation in sRGB space, no gamma correction.
    ///
    /// `t` is clamped to `[0, 1]`; NaN is treated as 0. Channels round half
    /// away from zero, so black→white at 0.5 yields 128.
    #[inline]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let ch = |a: u8, b: u8| -> u8 {
            let a = a as f32;
            (a + t * (b as f32 - a)).round() as u8
        };

        Rgb::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f32 {
        fn linear(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.039_28 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
        }

        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }

    /// `#rrggbb`, lowercase.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS functional notation, e.g. `rgb(128, 128, 128)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

/// Interpolates two hex/`rgb()` color strings.
///
/// A malformed endpoint is replaced by black before blending.
pub fn interpolate_color(a: &str, b: &str, factor: f32) -> Rgb {
    let a = Rgb::parse_or(a, Rgb::BLACK);
    let b = Rgb::parse_or(b, Rgb::BLACK);
    a.lerp(b, factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn black_to_white_half_rounds_up() {
        let c = interpolate_color("#000000", "#ffffff", 0.5);
        assert_eq!(c.to_string(), "rgb(128, 128, 128)");
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_clamps_factor() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(b, -3.0), a);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn lerp_nan_factor_holds_start() {
        let a = Rgb::new(1, 2, 3);
        assert_eq!(a.lerp(Rgb::WHITE, f32::NAN), a);
    }

    #[test]
    fn lerp_descending_channel() {
        assert_eq!(Rgb::WHITE.lerp(Rgb::BLACK, 0.25), Rgb::new(191, 191, 191));
    }

    // ── malformed input ───────────────────────────────────────────────────

    #[test]
    fn malformed_endpoint_falls_back_to_black() {
        assert_eq!(interpolate_color("#zzzzzz", "#ffffff", 0.0), Rgb::BLACK);
        assert_eq!(interpolate_color("#ffffff", "nonsense", 1.0), Rgb::BLACK);
    }

    #[test]
    fn parse_or_returns_fallback() {
        let fallback = Rgb::new(9, 9, 9);
        assert_eq!(Rgb::parse_or("", fallback), fallback);
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb::new(245, 239, 230).to_hex(), "#f5efe6");
    }

    #[test]
    fn from_str_roundtrips_through_hex() {
        let c: Rgb = "#C9A96E".parse().unwrap();
        assert_eq!(c.to_hex(), "#c9a96e");
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(Rgb::BLACK.relative_luminance(), 0.0);
        assert!((Rgb::WHITE.relative_luminance() - 1.0).abs() < 1e-5);
    }
}
