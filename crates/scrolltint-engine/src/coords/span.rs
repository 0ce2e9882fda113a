/// Half-open scroll range `[start, end)` in document coordinates.
///
/// Either bound may be infinite, which is how the first and last zones of a
/// page are expressed.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn from_start_len(start: f32, len: f32) -> Self {
        Self { start, end: start + len }
    }

    /// Everything before `end`.
    #[inline]
    pub const fn ending_at(end: f32) -> Self {
        Self { start: f32::NEG_INFINITY, end }
    }

    /// Everything from `start` onwards.
    #[inline]
    pub const fn starting_at(start: f32) -> Self {
        Self { start, end: f32::INFINITY }
    }

    #[inline]
    pub fn len(self) -> f32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end <= self.start || self.start.is_nan() || self.end.is_nan()
    }

    /// Half-open containment: [start, end).
    #[inline]
    pub fn contains(self, offset: f32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Linear position of `offset` inside the span, clamped to `[0, 1]`.
    ///
    /// An empty span counts as already traversed once `offset >= start`,
    /// so a zero-length transition never divides by zero.
    #[inline]
    pub fn progress(self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        if self.is_empty() {
            return if offset < self.start { 0.0 } else { 1.0 };
        }

        let t = (offset - self.start) / self.len();
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_start_inclusive() {
        assert!(Span::new(10.0, 20.0).contains(10.0));
    }

    #[test]
    fn contains_end_exclusive() {
        assert!(!Span::new(10.0, 20.0).contains(20.0));
    }

    #[test]
    fn open_ended_spans() {
        assert!(Span::ending_at(5.0).contains(-1.0e9));
        assert!(Span::starting_at(5.0).contains(1.0e9));
    }

    // ── progress ──────────────────────────────────────────────────────────

    #[test]
    fn progress_midpoint() {
        assert_eq!(Span::new(100.0, 200.0).progress(150.0), 0.5);
    }

    #[test]
    fn progress_clamps_outside() {
        let s = Span::new(100.0, 200.0);
        assert_eq!(s.progress(0.0), 0.0);
        assert_eq!(s.progress(500.0), 1.0);
    }

    #[test]
    fn zero_length_span_is_complete_at_start() {
        let s = Span::new(300.0, 300.0);
        assert!(s.is_empty());
        assert_eq!(s.progress(299.0), 0.0);
        assert_eq!(s.progress(300.0), 1.0);
    }

    #[test]
    fn progress_of_nan_is_zero() {
        assert_eq!(Span::new(0.0, 1.0).progress(f32::NAN), 0.0);
    }

    #[test]
    fn unbounded_end_progress_stays_zero() {
        assert_eq!(Span::starting_at(10.0).progress(1.0e6), 0.0);
    }
}
