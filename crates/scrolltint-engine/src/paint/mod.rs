//! Color model shared between the theme engine and render surfaces.
//!
//! Scope:
//! - opaque sRGB colors and their interpolation
//! - color string parsing
//! - easing curves for progress values

pub mod color;
pub mod easing;
pub mod parse;

pub use color::{interpolate_color, Rgb};
pub use easing::Easing;
pub use parse::{parse_color, ColorParseError};
