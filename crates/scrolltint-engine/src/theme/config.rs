use std::time::Duration;

use crate::coords::Span;
use crate::paint::{Easing, Rgb};
use crate::time::DEFAULT_REFRESH_INTERVAL;

use super::effects::EffectCurve;
use super::palette;

/// One configured page section: the anchor it is keyed on and the background
/// colors before and after its transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPalette {
    pub key: String,
    pub from: Rgb,
    pub to: Rgb,
}

impl SectionPalette {
    pub fn new(key: impl Into<String>, from: Rgb, to: Rgb) -> Self {
        Self { key: key.into(), from, to }
    }

    /// Builds an entry from authored color strings. Malformed colors become black.
    pub fn from_hex(key: impl Into<String>, from: &str, to: &str) -> Self {
        Self::new(key, Rgb::parse_or(from, Rgb::BLACK), Rgb::parse_or(to, Rgb::BLACK))
    }
}

/// Where a section's transition sits relative to its anchor.
///
/// `transition_start = anchor_top - viewport_height * lead_viewports`,
/// `transition_end = transition_start + viewport_height * span_viewports`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransitionWindow {
    pub lead_viewports: f32,
    pub span_viewports: f32,
    pub easing: Easing,
}

impl Default for TransitionWindow {
    fn default() -> Self {
        Self {
            lead_viewports: 0.7,
            span_viewports: 0.5,
            easing: Easing::Power(0.6),
        }
    }
}

/// Hand-tuned zones at the top of the page, before the section table takes over.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneTuning {
    pub dark_background: Rgb,
    pub light_text: Rgb,
    pub cream: Rgb,
    pub dark_text: Rgb,
    pub soft_green: Rgb,

    /// Anchor whose top (plus `cream_anchor_offset_px`) starts the cream transition.
    pub cream_anchor: String,
    pub cream_anchor_offset_px: f32,
    /// Cream start in viewports when the anchor is missing.
    pub cream_fallback_viewports: f32,
    pub cream_span_viewports: f32,
    pub cream_easing: Easing,

    pub accent_property: String,
    pub accent_fallback: Rgb,
    pub accent_start_fraction: f32,
    pub accent_span_viewports: f32,
    pub accent_easing: Easing,

    pub green_start_fraction: f32,
    pub green_span_viewports: f32,
    pub green_easing: Easing,

    /// Background luminance below which section zones switch to light text.
    pub contrast_threshold: f32,
}

impl Default for ZoneTuning {
    fn default() -> Self {
        Self {
            dark_background: palette::DARK_BACKGROUND,
            light_text: palette::LIGHT_TEXT,
            cream: palette::CREAM,
            dark_text: palette::DARK_TEXT,
            soft_green: palette::SOFT_GREEN,

            cream_anchor: "about".to_string(),
            cream_anchor_offset_px: -120.0,
            cream_fallback_viewports: 0.9,
            cream_span_viewports: 0.6,
            cream_easing: Easing::Power(0.7),

            accent_property: palette::ACCENT_PROPERTY.to_string(),
            accent_fallback: palette::ACCENT_FALLBACK,
            accent_start_fraction: 0.12,
            accent_span_viewports: 0.8,
            accent_easing: Easing::Power(0.6),

            green_start_fraction: 0.2,
            green_span_viewports: 0.8,
            green_easing: Easing::Power(0.5),

            contrast_threshold: 0.2,
        }
    }
}

/// Secondary visual effects driven by coarse scroll progress.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectTuning {
    /// `scroll_progress = min(offset / (document_height * fraction), 1)`.
    pub progress_document_fraction: f32,
    /// Quantization step of `scroll_progress`; 0.002 is 0.2%.
    pub bucket_step: f32,
    pub vignette: EffectCurve,
    pub top_vignette: EffectCurve,
    pub video_blur: EffectCurve,
    pub bottom_blur: EffectCurve,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            progress_document_fraction: 0.06,
            bucket_step: 0.002,
            vignette: EffectCurve::new(Span::new(0.0, 0.8), 1.2, Easing::CubicOut),
            top_vignette: EffectCurve::new(Span::new(0.1, 0.6), 1.0, Easing::Smoothstep),
            video_blur: EffectCurve::new(
                Span::new(0.0, 1.0),
                12.0,
                Easing::SmoothExp { weight: 0.6, rate: 4.0 },
            ),
            bottom_blur: EffectCurve::new(Span::new(0.3, 1.0), 8.0, Easing::Smoothstep),
        }
    }
}

/// Names of the custom properties the stylesheet reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNames {
    pub vignette_intensity: String,
    pub top_vignette_opacity: String,
    pub video_blur: String,
    pub bottom_blur: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            vignette_intensity: "--vignette-intensity".to_string(),
            top_vignette_opacity: "--top-vignette-opacity".to_string(),
            video_blur: "--video-blur".to_string(),
            bottom_blur: "--bottom-blur".to_string(),
        }
    }
}

/// Every tuning constant of the engine.
///
/// `ThemeConfig::default()` is the storefront configuration. Section order is
/// the contract: entries must be listed in document order and are never sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    pub sections: Vec<SectionPalette>,
    pub transition: TransitionWindow,
    /// Background for the section zone when no section anchor resolved.
    pub table_fallback: Rgb,
    pub zones: ZoneTuning,
    pub effects: EffectTuning,
    pub properties: PropertyNames,
    /// Selectors of the text-bearing elements that follow the text color.
    pub text_targets: Vec<String>,
    pub refresh_interval: Duration,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            sections: palette::default_sections(),
            transition: TransitionWindow::default(),
            table_fallback: palette::SOFT_GREEN,
            zones: ZoneTuning::default(),
            effects: EffectTuning::default(),
            properties: PropertyNames::default(),
            text_targets: [
                ".site-nav a",
                ".section-title",
                ".section-copy",
                ".product-card__name",
                ".review__body",
                "footer",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl ThemeConfig {
    /// Replaces the section table.
    pub fn with_sections(mut self, sections: Vec<SectionPalette>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }
}
