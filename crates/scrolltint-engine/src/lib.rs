//! Scrolltint engine crate.
//!
//! Maps a page's vertical scroll position to a visual theme (background,
//! text color, vignette and blur intensities) and keeps a render surface in
//! sync with it using as few style writes as possible.

pub mod coords;
pub mod paint;
pub mod surface;
pub mod theme;
pub mod time;

pub mod logging;

pub use theme::{ScrollThemeEngine, ThemeConfig, ThemeFrame};
