use crate::coords::{ScrollMetrics, Span};
use crate::paint::{Easing, Rgb};

use super::config::ZoneTuning;

/// How a zone produces its colors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoneKind {
    /// Constant background and text.
    Fixed { background: Rgb, text: Rgb },
    /// Background and text blend across the zone with a shared easing.
    Eased {
        background: (Rgb, Rgb),
        text: (Rgb, Rgb),
        easing: Easing,
    },
    /// Colors come from the section breakpoint table.
    DataDriven,
}

/// A named stretch of the page with its own coloring rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Zone {
    pub name: &'static str,
    pub span: Span,
    pub kind: ZoneKind,
}

impl Zone {
    /// Background and text at `offset`, or `None` for the data-driven zone.
    pub fn colors_at(&self, offset: f32) -> Option<(Rgb, Rgb)> {
        match self.kind {
            ZoneKind::Fixed { background, text } => Some((background, text)),
            ZoneKind::Eased { background, text, easing } => {
                let t = easing.apply(self.span.progress(offset));
                Some((background.0.lerp(background.1, t), text.0.lerp(text.1, t)))
            }
            ZoneKind::DataDriven => None,
        }
    }
}

/// Lays out the page zones in scroll order.
///
/// Every zone starts where the previous one ends; fraction-based starts are
/// pushed back when a preceding zone already runs past them, so zones never
/// overlap. The first zone is open towards the top, the last towards the end.
pub fn build_zones(
    tuning: &ZoneTuning,
    metrics: ScrollMetrics,
    cream_anchor_top: Option<f32>,
    accent: Rgb,
) -> [Zone; 7] {
    let vh = metrics.viewport_height;
    let dh = metrics.document_height;

    let cream_start = match cream_anchor_top.filter(|top| top.is_finite()) {
        Some(top) => top + tuning.cream_anchor_offset_px,
        None => vh * tuning.cream_fallback_viewports,
    };
    let cream_end = cream_start + vh * tuning.cream_span_viewports;

    let accent_start = (dh * tuning.accent_start_fraction).max(cream_end);
    let accent_end = accent_start + vh * tuning.accent_span_viewports;

    let green_start = (dh * tuning.green_start_fraction).max(accent_end);
    let green_end = green_start + vh * tuning.green_span_viewports;

    let cream = tuning.cream;
    let dark_text = tuning.dark_text;

    [
        Zone {
            name: "pre-content",
            span: Span::ending_at(cream_start),
            kind: ZoneKind::Fixed { background: tuning.dark_background, text: tuning.light_text },
        },
        Zone {
            name: "cream-transition",
            span: Span::new(cream_start, cream_end),
            kind: ZoneKind::Eased {
                background: (tuning.dark_background, cream),
                text: (tuning.light_text, dark_text),
                easing: tuning.cream_easing,
            },
        },
        Zone {
            name: "cream-hold",
            span: Span::new(cream_end, accent_start),
            kind: ZoneKind::Fixed { background: cream, text: dark_text },
        },
        Zone {
            name: "accent-transition",
            span: Span::new(accent_start, accent_end),
            kind: ZoneKind::Eased {
                background: (cream, accent),
                text: (dark_text, dark_text),
                easing: tuning.accent_easing,
            },
        },
        Zone {
            name: "accent-hold",
            span: Span::new(accent_end, green_start),
            kind: ZoneKind::Fixed { background: accent, text: dark_text },
        },
        Zone {
            name: "green-transition",
            span: Span::new(green_start, green_end),
            kind: ZoneKind::Eased {
                background: (accent, tuning.soft_green),
                text: (dark_text, dark_text),
                easing: tuning.green_easing,
            },
        },
        Zone {
            name: "sections",
            span: Span::starting_at(green_end),
            kind: ZoneKind::DataDriven,
        },
    ]
}

/// First zone whose span has not ended at `offset`; the last zone otherwise.
pub fn locate(zones: &[Zone], offset: f32) -> Option<&Zone> {
    zones
        .iter()
        .find(|zone| offset < zone.span.end)
        .or_else(|| zones.last())
}
