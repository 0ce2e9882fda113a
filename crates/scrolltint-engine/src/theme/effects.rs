use crate::coords::Span;
use crate::paint::Easing;

use super::config::EffectTuning;

/// One secondary effect as a function of coarse scroll progress.
///
/// The effect is 0 before `window.start`, reaches `max` at `window.end`, and
/// follows `easing` in between.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EffectCurve {
    pub window: Span,
    pub max: f32,
    pub easing: Easing,
}

impl EffectCurve {
    pub const fn new(window: Span, max: f32, easing: Easing) -> Self {
        Self { window, max, easing }
    }

    #[inline]
    pub fn sample(&self, progress: f32) -> f32 {
        self.max * self.easing.apply(self.window.progress(progress))
    }
}

/// Values written to the vignette/blur custom properties.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SecondaryEffects {
    /// 0..=1.2
    pub vignette_intensity: f32,
    /// 0..=1
    pub top_vignette_opacity: f32,
    pub video_blur_px: f32,
    pub bottom_blur_px: f32,
}

/// `min(offset / (document_height * fraction), 1)`, never negative.
///
/// With no scrollable height the page counts as untouched at the top and
/// fully scrolled anywhere else.
pub fn scroll_progress(offset: f32, document_height: f32, fraction: f32) -> f32 {
    let range = document_height * fraction;
    if !(range.is_finite() && range > 0.0) {
        return if offset > 0.0 { 1.0 } else { 0.0 };
    }

    let p = offset / range;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Index of the quantization bucket nearest to `progress`.
pub fn quantize(progress: f32, step: f32) -> i64 {
    if !(step.is_finite() && step > 0.0) || !progress.is_finite() {
        return 0;
    }
    (progress / step).round() as i64
}

/// Evaluates every effect at the center of `bucket`.
///
/// Effects depend only on the bucket, so two frames in the same bucket carry
/// identical values.
pub fn compute_effects(tuning: &EffectTuning, bucket: i64) -> SecondaryEffects {
    let progress = (bucket as f32 * tuning.bucket_step).clamp(0.0, 1.0);

    SecondaryEffects {
        vignette_intensity: tuning.vignette.sample(progress),
        top_vignette_opacity: tuning.top_vignette.sample(progress),
        video_blur_px: tuning.video_blur.sample(progress),
        bottom_blur_px: tuning.bottom_blur.sample(progress),
    }
}

/// Last computed effects, keyed by bucket.
#[derive(Debug, Default, Clone)]
pub struct EffectMemo {
    entry: Option<(i64, SecondaryEffects)>,
}

impl EffectMemo {
    pub fn get_or_compute(&mut self, tuning: &EffectTuning, bucket: i64) -> SecondaryEffects {
        match self.entry {
            Some((b, effects)) if b == bucket => effects,
            _ => {
                let effects = compute_effects(tuning, bucket);
                self.entry = Some((bucket, effects));
                effects
            }
        }
    }
}
