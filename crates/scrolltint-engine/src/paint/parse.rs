use std::fmt;

use super::Rgb;

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    InvalidLength,
    InvalidHex,
    InvalidFunc,
    OutOfRange,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ColorParseError::*;
        let msg = match self {
            Empty => "empty color string",
            InvalidLength => "hex color must have 3 or 6 digits",
            InvalidHex => "invalid hex digits",
            InvalidFunc => "invalid rgb()/rgba() function",
            OutOfRange => "channel out of range",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ColorParseError {}

/// Parses a CSS color as produced by authored palettes or computed styles.
///
/// Accepted forms (surrounding whitespace ignored, case-insensitive):
/// - `#rgb`, `#rrggbb` (the `#` is optional)
/// - `rgb(r, g, b)`, `rgba(r, g, b, a)` with integer channels; alpha is ignored
pub fn parse_color(s: &str) -> Result<Rgb, ColorParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(").or_else(|| lower.strip_prefix("rgb(")) {
        let args = args.strip_suffix(')').ok_or(ColorParseError::InvalidFunc)?;
        return parse_rgb_args(args);
    }

    parse_hex(s.strip_prefix('#').unwrap_or(s))
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    let nibble = |c: u8| -> Result<u8, ColorParseError> {
        match c {
            b'0'..=b'9' => Ok(c - b'0'),
            b'a'..=b'f' => Ok(c - b'a' + 10),
            b'A'..=b'F' => Ok(c - b'A' + 10),
            _ => Err(ColorParseError::InvalidHex),
        }
    };

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Ok(Rgb::new(
            nibble(bytes[0])? * 17,
            nibble(bytes[1])? * 17,
            nibble(bytes[2])? * 17,
        )),
        6 => {
            let byte = |i: usize| -> Result<u8, ColorParseError> {
                Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
            };
            Ok(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => Err(ColorParseError::InvalidLength),
    }
}

fn parse_rgb_args(args: &str) -> Result<Rgb, ColorParseError> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorParseError::InvalidFunc);
    }

    let channel = |p: &str| -> Result<u8, ColorParseError> {
        let v: f32 = p.parse().map_err(|_| ColorParseError::InvalidFunc)?;
        if !(0.0..=255.0).contains(&v) {
            return Err(ColorParseError::OutOfRange);
        }
        Ok(v.round() as u8)
    };

    Ok(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(s: &str) -> Rgb {
        parse_color(s).unwrap()
    }

    fn err(s: &str) -> ColorParseError {
        parse_color(s).unwrap_err()
    }

    #[test]
    fn six_digit_hex() {
        assert_eq!(ok("#1a2b3c"), Rgb::new(0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn three_digit_hex() {
        assert_eq!(ok("#fa0"), Rgb::new(255, 170, 0));
    }

    #[test]
    fn hash_is_optional() {
        assert_eq!(ok("ffffff"), Rgb::WHITE);
    }

    #[test]
    fn uppercase_hex() {
        assert_eq!(ok("#ABCDEF"), Rgb::new(0xab, 0xcd, 0xef));
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(ok("  #000000 "), Rgb::BLACK);
    }

    #[test]
    fn rgb_function() {
        assert_eq!(ok("rgb(12, 34, 56)"), Rgb::new(12, 34, 56));
    }

    #[test]
    fn rgb_space_separated() {
        assert_eq!(ok("rgb(12 34 56)"), Rgb::new(12, 34, 56));
    }

    #[test]
    fn rgba_ignores_alpha() {
        assert_eq!(ok("RGBA(1, 2, 3, 0.5)"), Rgb::new(1, 2, 3));
    }

    #[test]
    fn empty() {
        assert_eq!(err("   "), ColorParseError::Empty);
    }

    #[test]
    fn bad_length() {
        assert_eq!(err("#12345"), ColorParseError::InvalidLength);
    }

    #[test]
    fn bad_digit() {
        assert_eq!(err("#12345g"), ColorParseError::InvalidHex);
    }

    #[test]
    fn named_color_rejected() {
        assert_eq!(err("red"), ColorParseError::InvalidHex);
    }

    #[test]
    fn unclosed_function() {
        assert_eq!(err("rgb(1, 2, 3"), ColorParseError::InvalidFunc);
    }

    #[test]
    fn too_few_channels() {
        assert_eq!(err("rgb(1, 2)"), ColorParseError::InvalidFunc);
    }

    #[test]
    fn channel_out_of_range() {
        assert_eq!(err("rgb(1, 2, 300)"), ColorParseError::OutOfRange);
    }

    #[test]
    fn non_numeric_channel() {
        assert_eq!(err("rgb(a, 2, 3)"), ColorParseError::InvalidFunc);
    }
}
