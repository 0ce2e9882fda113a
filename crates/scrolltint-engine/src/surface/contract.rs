use std::fmt;

use crate::paint::Rgb;

/// Value of a numeric custom property consumed by the page stylesheet.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PropertyValue {
    /// Unitless number (intensities, opacities).
    Number(f32),
    /// Length in CSS pixels.
    Px(f32),
}

/// CSS text, e.g. `0.734` or `4.50px`.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Number(v) => write!(f, "{v:.3}"),
            PropertyValue::Px(v) => write!(f, "{v:.2}px"),
        }
    }
}

/// The page as seen by the theme engine.
///
/// Reads are layout queries; writes are style mutations. Implementations are
/// expected to perform every write they are given: change detection happens in
/// the engine, so counting calls on an implementation counts real writes.
pub trait RenderSurface {
    /// Document coordinate of the viewport top.
    fn scroll_offset(&self) -> f32;

    fn viewport_height(&self) -> f32;

    fn document_height(&self) -> f32;

    /// Top of the anchor element `key` in document coordinates, or `None`
    /// when the page has no such element.
    fn anchor_top(&self, key: &str) -> Option<f32>;

    /// Computed value of a style property on the page root (e.g. a theme
    /// custom property), or `None` when unset.
    fn style_property(&self, name: &str) -> Option<String>;

    /// Writes the page root background color.
    fn set_background(&mut self, color: Rgb);

    /// Writes the text color of every element matched by `targets`.
    fn set_text_color(&mut self, targets: &[String], color: Rgb);

    /// Writes a custom property on the page root.
    fn set_property(&mut self, name: &str, value: PropertyValue);
}
