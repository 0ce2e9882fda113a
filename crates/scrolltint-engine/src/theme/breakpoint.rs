use crate::coords::Span;
use crate::paint::{Easing, Rgb};

use super::config::{SectionPalette, TransitionWindow};

/// A section's background transition, resolved against live layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBreakpoint {
    pub section_key: String,
    /// Top of the section's anchor element in document coordinates.
    pub anchor_offset: f32,
    pub transition: Span,
    pub color_from: Rgb,
    pub color_to: Rgb,
    pub easing: Easing,
}

impl ColorBreakpoint {
    #[inline]
    pub fn transition_start(&self) -> f32 {
        self.transition.start
    }

    #[inline]
    pub fn transition_end(&self) -> f32 {
        self.transition.end
    }

    /// Eased blend at `offset`. A zero-length transition is already complete.
    #[inline]
    pub fn color_at(&self, offset: f32) -> Rgb {
        let t = self.easing.apply(self.transition.progress(offset));
        self.color_from.lerp(self.color_to, t)
    }
}

/// Resolves every configured section against the current layout.
///
/// Sections whose anchor is missing (or reports a non-finite position) are
/// skipped. Output keeps configuration order; the table is never sorted.
pub fn build_breakpoint_table<F>(
    sections: &[SectionPalette],
    viewport_height: f32,
    window: TransitionWindow,
    mut anchor_top: F,
) -> Vec<ColorBreakpoint>
where
    F: FnMut(&str) -> Option<f32>,
{
    let lead = viewport_height * window.lead_viewports;
    let span = viewport_height * window.span_viewports;

    sections
        .iter()
        .filter_map(|section| {
            let Some(anchor_offset) = anchor_top(&section.key).filter(|top| top.is_finite()) else {
                log::trace!("section {:?} has no anchor; skipped", section.key);
                return None;
            };

            Some(ColorBreakpoint {
                section_key: section.key.clone(),
                anchor_offset,
                transition: Span::from_start_len(anchor_offset - lead, span),
                color_from: section.from,
                color_to: section.to,
                easing: window.easing,
            })
        })
        .collect()
}

/// Background color for `offset` given a table in document order.
///
/// The first entry whose transition has not ended decides: before its start
/// the color is `color_from`, inside it the eased blend. Past every entry the
/// last `color_to` holds. An empty table yields `fallback`.
pub fn lookup_color(offset: f32, table: &[ColorBreakpoint], fallback: Rgb) -> Rgb {
    let Some(last) = table.last() else {
        return fallback;
    };

    for bp in table {
        if offset < bp.transition.start {
            return bp.color_from;
        }
        if offset < bp.transition.end {
            return bp.color_at(offset);
        }
    }

    last.color_to
}
