use crate::coords::ScrollMetrics;
use crate::paint::Rgb;

use super::breakpoint::{lookup_color, ColorBreakpoint};
use super::config::ThemeConfig;
use super::effects::{quantize, scroll_progress, EffectMemo, SecondaryEffects};
use super::zones::{build_zones, locate};

/// Everything the page needs for one scroll position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ThemeFrame {
    pub background: Rgb,
    pub text: Rgb,
    pub effects: SecondaryEffects,
    /// Quantized scroll progress the effects were computed for.
    pub effect_bucket: i64,
    /// Name of the zone that produced the colors.
    pub zone: &'static str,
}

impl ThemeFrame {
    #[inline]
    pub fn vignette_intensity(&self) -> f32 {
        self.effects.vignette_intensity
    }

    #[inline]
    pub fn top_vignette_opacity(&self) -> f32 {
        self.effects.top_vignette_opacity
    }

    #[inline]
    pub fn video_blur_px(&self) -> f32 {
        self.effects.video_blur_px
    }

    #[inline]
    pub fn bottom_blur_px(&self) -> f32 {
        self.effects.bottom_blur_px
    }
}

/// Lazily provides the section breakpoint table.
///
/// The table is only requested when the scroll position is past every
/// hand-tuned zone, so sources may defer building it until then.
pub trait BreakpointSource {
    fn breakpoints(&mut self) -> &[ColorBreakpoint];
}

impl BreakpointSource for Vec<ColorBreakpoint> {
    fn breakpoints(&mut self) -> &[ColorBreakpoint] {
        self
    }
}

/// Layout-dependent inputs of a frame that are not plain metrics.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInputs {
    pub cream_anchor_top: Option<f32>,
    pub accent: Rgb,
}

/// Computes background, text and effect values for `metrics`.
///
/// Zones are scanned in order; the data-driven zone delegates to the section
/// table. In that zone the text color follows background luminance.
pub fn compute_frame<B>(
    config: &ThemeConfig,
    metrics: ScrollMetrics,
    inputs: FrameInputs,
    source: &mut B,
    memo: &mut EffectMemo,
) -> ThemeFrame
where
    B: BreakpointSource + ?Sized,
{
    let metrics = metrics.sanitized();
    let offset = metrics.scroll_offset;
    let tuning = &config.zones;

    let zones = build_zones(tuning, metrics, inputs.cream_anchor_top, inputs.accent);
    let (zone, colors) = match locate(&zones, offset) {
        Some(zone) => (zone.name, zone.colors_at(offset)),
        None => ("sections", None),
    };

    let (background, text) = colors.unwrap_or_else(|| {
        let background = lookup_color(offset, source.breakpoints(), config.table_fallback);
        let text = contrast_text(
            tuning.light_text,
            tuning.dark_text,
            tuning.contrast_threshold,
            background,
        );
        (background, text)
    });

    let progress = scroll_progress(
        offset,
        metrics.document_height,
        config.effects.progress_document_fraction,
    );
    let effect_bucket = quantize(progress, config.effects.bucket_step);
    let effects = memo.get_or_compute(&config.effects, effect_bucket);

    ThemeFrame { background, text, effects, effect_bucket, zone }
}

fn contrast_text(light: Rgb, dark: Rgb, threshold: f32, background: Rgb) -> Rgb {
    if background.relative_luminance() < threshold { light } else { dark }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::theme::config::{SectionPalette, TransitionWindow};
    use crate::theme::breakpoint::build_breakpoint_table;

    const ACCENT: Rgb = Rgb::new(0xc9, 0xa9, 0x6e);

    fn config() -> ThemeConfig {
        ThemeConfig::default().with_sections(vec![
            SectionPalette::from_hex("gallery", "#e8f0e3", "#000000"),
            SectionPalette::from_hex("outro", "#000000", "#ffffff"),
        ])
    }

    fn inputs() -> FrameInputs {
        FrameInputs { cream_anchor_top: Some(1500.0), accent: ACCENT }
    }

    fn table(config: &ThemeConfig) -> Vec<ColorBreakpoint> {
        let window = TransitionWindow::default();
        build_breakpoint_table(&config.sections, 1000.0, window, |key| match key {
            "gallery" => Some(8000.0),
            "outro" => Some(12_000.0),
            _ => None,
        })
    }

    /// Counts how often the table was requested.
    struct Counting<'a> {
        table: &'a [ColorBreakpoint],
        requests: usize,
    }

    impl BreakpointSource for Counting<'_> {
        fn breakpoints(&mut self) -> &[ColorBreakpoint] {
            self.requests += 1;
            self.table
        }
    }

    fn frame_at(offset: f32) -> ThemeFrame {
        let config = config();
        let mut t = table(&config);
        compute_frame(
            &config,
            ScrollMetrics::new(offset, 1000.0, 20_000.0),
            inputs(),
            &mut t,
            &mut EffectMemo::default(),
        )
    }

    #[test]
    fn top_of_page_is_dark() {
        let f = frame_at(0.0);
        let z = &config().zones;
        assert_eq!(f.zone, "pre-content");
        assert_eq!(f.background, z.dark_background);
        assert_eq!(f.text, z.light_text);
        assert_eq!(f.effects, SecondaryEffects::default());
    }

    #[test]
    fn hand_tuned_zones_do_not_touch_the_table() {
        let config = config();
        let t = table(&config);
        let mut source = Counting { table: &t, requests: 0 };
        let mut memo = EffectMemo::default();
        for offset in [0.0, 1500.0, 2500.0, 4400.0] {
            let metrics = ScrollMetrics::new(offset, 1000.0, 20_000.0);
            compute_frame(&config, metrics, inputs(), &mut source, &mut memo);
        }
        assert_eq!(source.requests, 0);

        let metrics = ScrollMetrics::new(9000.0, 1000.0, 20_000.0);
        compute_frame(&config, metrics, inputs(), &mut source, &mut memo);
        assert_eq!(source.requests, 1);
    }

    #[test]
    fn section_zone_delegates_to_table() {
        // gallery transition: 7300..7800; outro: 11_300..11_800.
        let f = frame_at(6000.0);
        assert_eq!(f.zone, "sections");
        assert_eq!(f.background, Rgb::parse("#e8f0e3").unwrap());

        assert_eq!(frame_at(9000.0).background, Rgb::BLACK);
        assert_eq!(frame_at(15_000.0).background, Rgb::WHITE);
    }

    #[test]
    fn section_zone_text_follows_contrast() {
        let z = config().zones;
        assert_eq!(frame_at(9000.0).text, z.light_text);
        assert_eq!(frame_at(15_000.0).text, z.dark_text);
    }

    #[test]
    fn green_zone_meets_first_section_color() {
        // Green transition ends where the data zone begins; both sides are soft green.
        let z = config().zones;
        assert_eq!(frame_at(4799.99).background, z.soft_green);
        assert_eq!(frame_at(4800.0).background, z.soft_green);
    }

    #[test]
    fn empty_table_uses_fallback() {
        let config = config();
        let mut empty: Vec<ColorBreakpoint> = Vec::new();
        let f = compute_frame(
            &config,
            ScrollMetrics::new(9000.0, 1000.0, 20_000.0),
            inputs(),
            &mut empty,
            &mut EffectMemo::default(),
        );
        assert_eq!(f.background, config.table_fallback);
    }

    #[test]
    fn nan_offset_is_treated_as_top() {
        let f = frame_at(f32::NAN);
        assert_eq!(f.zone, "pre-content");
        assert_eq!(f.effect_bucket, 0);
    }

    #[test]
    fn effects_are_independent_of_zone_colors() {
        // 20_000 * 0.06 = 1200px to full progress.
        let f = frame_at(1200.0);
        assert_eq!(f.effect_bucket, 500);
        assert!((f.vignette_intensity() - 1.2).abs() < 1e-5);
        assert_eq!(f.zone, "pre-content");
    }
}
