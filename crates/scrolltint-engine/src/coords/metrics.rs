/// Scroll and layout measurements of the page at one instant, in CSS pixels.
///
/// All positions are document coordinates (origin at the top of the document,
/// +Y down). `scroll_offset` is the document coordinate of the viewport top.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub document_height: f32,
}

impl ScrollMetrics {
    #[inline]
    pub const fn new(scroll_offset: f32, viewport_height: f32, document_height: f32) -> Self {
        Self { scroll_offset, viewport_height, document_height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.scroll_offset.is_finite()
            && self.viewport_height.is_finite()
            && self.document_height.is_finite()
            && self.viewport_height > 0.0
            && self.document_height >= 0.0
    }

    /// Replaces non-finite or negative sizes with zero and a non-finite offset with zero.
    ///
    /// Negative scroll offsets (overscroll) are kept as-is.
    #[inline]
    pub fn sanitized(self) -> Self {
        fn size(v: f32) -> f32 {
            if v.is_finite() { v.max(0.0) } else { 0.0 }
        }

        Self {
            scroll_offset: if self.scroll_offset.is_finite() { self.scroll_offset } else { 0.0 },
            viewport_height: size(self.viewport_height),
            document_height: size(self.document_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_metrics() {
        assert!(ScrollMetrics::new(0.0, 900.0, 5000.0).is_valid());
    }

    #[test]
    fn zero_viewport_is_invalid() {
        assert!(!ScrollMetrics::new(0.0, 0.0, 5000.0).is_valid());
    }

    #[test]
    fn sanitized_replaces_nan() {
        let m = ScrollMetrics::new(f32::NAN, f32::INFINITY, -3.0).sanitized();
        assert_eq!(m, ScrollMetrics::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn sanitized_keeps_overscroll() {
        let m = ScrollMetrics::new(-40.0, 800.0, 4000.0).sanitized();
        assert_eq!(m.scroll_offset, -40.0);
    }
}
