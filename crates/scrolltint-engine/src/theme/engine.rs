use std::time::Instant;

use crate::coords::ScrollMetrics;
use crate::paint::Rgb;
use crate::surface::{PropertyValue, RenderSurface};
use crate::time::FrameScheduler;

use super::breakpoint::{build_breakpoint_table, ColorBreakpoint};
use super::config::ThemeConfig;
use super::frame::{compute_frame, BreakpointSource, FrameInputs, ThemeFrame};
use super::state::{Invalidation, LayoutCache, ThemeState};

/// Which writes an [`apply_frame`](ScrollThemeEngine::apply_frame) call performed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ApplyReport {
    pub background: bool,
    pub text: bool,
    pub effects: bool,
}

impl ApplyReport {
    #[inline]
    pub fn any(self) -> bool {
        self.background || self.text || self.effects
    }
}

/// Maps scroll position to page theme and keeps the page in sync.
///
/// Host wiring:
/// - scroll notification → [`on_scroll`](Self::on_scroll)
/// - resize notification → [`on_resize`](Self::on_resize)
/// - other layout changes → [`notify_layout_changed`](Self::notify_layout_changed)
/// - scheduled animation frame → [`on_animation_frame`](Self::on_animation_frame)
///
/// Bursts of notifications schedule a single frame, and that frame reads the
/// scroll offset current at callback time.
#[derive(Debug)]
pub struct ScrollThemeEngine {
    config: ThemeConfig,
    state: ThemeState,
}

impl ScrollThemeEngine {
    pub fn new(config: ThemeConfig) -> Self {
        let state = ThemeState::new(config.refresh_interval);
        Self { config, state }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    // ── host notifications ────────────────────────────────────────────────

    /// Requests a frame unless one is already pending.
    pub fn on_scroll<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.state.frame_request.request(scheduler)
    }

    /// Drops cached layout and requests a frame.
    pub fn on_resize<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.invalidate(Invalidation::Resize);
        self.state.frame_request.request(scheduler)
    }

    /// Same as a resize, for layout changes the host can observe (sections
    /// added or removed, media finished loading).
    pub fn notify_layout_changed<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        self.invalidate(Invalidation::LayoutChanged);
        self.state.frame_request.request(scheduler)
    }

    /// Drops every layout-derived cache; the next frame re-measures.
    pub fn invalidate(&mut self, cause: Invalidation) {
        log::debug!("theme caches invalidated: {cause}");
        self.state.clear_layout();
        if cause != Invalidation::Periodic {
            self.state.refresh.reset();
        }
    }

    /// Forgets everything, including last applied values, so the next frame
    /// rewrites the page in full.
    pub fn reset(&mut self) {
        log::debug!("theme state reset");
        self.state.reset();
    }

    /// Animation-frame callback: computes the frame for the current scroll
    /// offset and applies it.
    ///
    /// Returns `None` without touching the surface when no frame was requested.
    pub fn on_animation_frame<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        now: Instant,
    ) -> Option<ThemeFrame> {
        if !self.state.frame_request.begin_frame() {
            log::trace!("animation frame without pending request ignored");
            return None;
        }

        let frame = self.compute_frame(&*surface, now);
        self.apply_frame(surface, &frame);
        Some(frame)
    }

    // ── computation ───────────────────────────────────────────────────────

    /// Computes the frame for the surface's current scroll offset, using and
    /// refreshing cached layout.
    pub fn compute_frame<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &S,
        now: Instant,
    ) -> ThemeFrame {
        if self.state.refresh.poll(now) {
            self.invalidate(Invalidation::Periodic);
        }

        let viewport_height = self.state.layout.viewport_height(surface);
        let document_height = self.state.layout.document_height(surface);
        let metrics = ScrollMetrics::new(surface.scroll_offset(), viewport_height, document_height);
        if !metrics.is_valid() {
            log::trace!("degenerate scroll metrics {metrics:?}");
        }

        let cream_anchor = &self.config.zones.cream_anchor;
        let inputs = FrameInputs {
            cream_anchor_top: self.state.layout.anchor_top(surface, cream_anchor),
            accent: self.read_accent(surface),
        };

        let mut table = LazyTable {
            config: &self.config,
            breakpoints: &mut self.state.breakpoints,
            layout: &mut self.state.layout,
            surface,
            viewport_height,
        };

        compute_frame(&self.config, metrics, inputs, &mut table, &mut self.state.effects)
    }

    /// The section table for the current layout, built on first use after
    /// an invalidation.
    pub fn breakpoint_table<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &S,
    ) -> &[ColorBreakpoint] {
        let viewport_height = self.state.layout.viewport_height(surface);
        let table = LazyTable {
            config: &self.config,
            breakpoints: &mut self.state.breakpoints,
            layout: &mut self.state.layout,
            surface,
            viewport_height,
        };
        table.into_breakpoints()
    }

    fn read_accent<S: RenderSurface + ?Sized>(&mut self, surface: &S) -> Rgb {
        let tuning = &self.config.zones;
        let Some(raw) = surface.style_property(&tuning.accent_property) else {
            return tuning.accent_fallback;
        };
        if raw.trim().is_empty() {
            return tuning.accent_fallback;
        }

        match Rgb::parse(&raw) {
            Ok(color) => color,
            Err(err) => {
                if self.state.warned_colors.insert(raw.clone()) {
                    log::warn!(
                        "{} = {raw:?} is not a color ({err}); using {}",
                        tuning.accent_property,
                        tuning.accent_fallback
                    );
                }
                tuning.accent_fallback
            }
        }
    }

    // ── application ───────────────────────────────────────────────────────

    /// Writes `frame` to the surface, skipping every value that equals what
    /// was last applied. Effects are compared by bucket.
    pub fn apply_frame<S: RenderSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        frame: &ThemeFrame,
    ) -> ApplyReport {
        let state = &mut self.state;
        let mut report = ApplyReport::default();

        if state.current_background != Some(frame.background) {
            surface.set_background(frame.background);
            state.current_background = Some(frame.background);
            report.background = true;
        }

        if state.current_text != Some(frame.text) {
            surface.set_text_color(&self.config.text_targets, frame.text);
            state.current_text = Some(frame.text);
            report.text = true;
        }

        if state.last_effect_bucket != Some(frame.effect_bucket) {
            let names = &self.config.properties;
            let e = frame.effects;
            surface.set_property(
                &names.vignette_intensity,
                PropertyValue::Number(e.vignette_intensity),
            );
            surface.set_property(
                &names.top_vignette_opacity,
                PropertyValue::Number(e.top_vignette_opacity),
            );
            surface.set_property(&names.video_blur, PropertyValue::Px(e.video_blur_px));
            surface.set_property(&names.bottom_blur, PropertyValue::Px(e.bottom_blur_px));
            state.last_effect_bucket = Some(frame.effect_bucket);
            report.effects = true;
        }

        if report.any() {
            log::trace!(
                "applied {} frame: bg {} text {} bucket {} ({report:?})",
                frame.zone,
                frame.background,
                frame.text,
                frame.effect_bucket
            );
        }
        report
    }
}

impl Default for ScrollThemeEngine {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

/// Section table that is built from the surface on first request and then
/// kept in engine state.
struct LazyTable<'a, 's, S: RenderSurface + ?Sized> {
    config: &'a ThemeConfig,
    breakpoints: &'a mut Option<Vec<ColorBreakpoint>>,
    layout: &'a mut LayoutCache,
    surface: &'s S,
    viewport_height: f32,
}

impl<'a, S: RenderSurface + ?Sized> LazyTable<'a, '_, S> {
    fn into_breakpoints(self) -> &'a [ColorBreakpoint] {
        let LazyTable { config, breakpoints, layout, surface, viewport_height } = self;
        breakpoints.get_or_insert_with(|| build(config, layout, surface, viewport_height))
    }
}

impl<S: RenderSurface + ?Sized> BreakpointSource for LazyTable<'_, '_, S> {
    fn breakpoints(&mut self) -> &[ColorBreakpoint] {
        let (config, layout, surface, viewport_height) =
            (self.config, &mut *self.layout, self.surface, self.viewport_height);
        self.breakpoints.get_or_insert_with(|| build(config, layout, surface, viewport_height))
    }
}

fn build<S: RenderSurface + ?Sized>(
    config: &ThemeConfig,
    layout: &mut LayoutCache,
    surface: &S,
    viewport_height: f32,
) -> Vec<ColorBreakpoint> {
    let table = build_breakpoint_table(&config.sections, viewport_height, config.transition, |key| {
        layout.anchor_top(surface, key)
    });
    log::debug!(
        "built breakpoint table: {} of {} sections resolved (viewport {viewport_height}px)",
        table.len(),
        config.sections.len()
    );
    table
}
