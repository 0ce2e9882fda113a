use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use crate::paint::Rgb;
use crate::surface::RenderSurface;
use crate::time::{FrameRequest, RefreshTimer};

use super::breakpoint::ColorBreakpoint;
use super::effects::EffectMemo;

/// Why cached layout was dropped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Invalidation {
    /// The viewport was resized.
    Resize,
    /// The host reported a layout change (sections added/removed, content loaded).
    LayoutChanged,
    /// The periodic refresh timer elapsed.
    Periodic,
}

impl fmt::Display for Invalidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Invalidation::Resize => "resize",
            Invalidation::LayoutChanged => "layout change",
            Invalidation::Periodic => "periodic refresh",
        })
    }
}

/// Layout measurements read from the surface, kept until invalidated.
///
/// Scroll offset is deliberately not cached; it is read fresh every frame.
#[derive(Debug, Default, Clone)]
pub struct LayoutCache {
    viewport_height: Option<f32>,
    document_height: Option<f32>,
    anchors: HashMap<String, Option<f32>>,
}

impl LayoutCache {
    pub fn viewport_height<S: RenderSurface + ?Sized>(&mut self, surface: &S) -> f32 {
        *self.viewport_height.get_or_insert_with(|| surface.viewport_height())
    }

    pub fn document_height<S: RenderSurface + ?Sized>(&mut self, surface: &S) -> f32 {
        *self.document_height.get_or_insert_with(|| surface.document_height())
    }

    /// Anchor top, including cached misses.
    pub fn anchor_top<S: RenderSurface + ?Sized>(&mut self, surface: &S, key: &str) -> Option<f32> {
        if let Some(top) = self.anchors.get(key) {
            return *top;
        }
        let top = surface.anchor_top(key);
        self.anchors.insert(key.to_string(), top);
        top
    }

    pub fn is_empty(&self) -> bool {
        self.viewport_height.is_none() && self.document_height.is_none() && self.anchors.is_empty()
    }

    pub fn clear(&mut self) {
        self.viewport_height = None;
        self.document_height = None;
        self.anchors.clear();
    }
}

/// Mutable engine state for one page.
///
/// Holds the last applied values (for write suppression) and every cache
/// derived from layout. One instance lives as long as the page.
#[derive(Debug)]
pub struct ThemeState {
    pub(crate) current_background: Option<Rgb>,
    pub(crate) current_text: Option<Rgb>,
    pub(crate) last_effect_bucket: Option<i64>,

    pub(crate) breakpoints: Option<Vec<ColorBreakpoint>>,
    pub(crate) layout: LayoutCache,
    pub(crate) effects: EffectMemo,

    pub(crate) refresh: RefreshTimer,
    pub(crate) frame_request: FrameRequest,

    /// Malformed color strings already reported, so each is logged once.
    pub(crate) warned_colors: HashSet<String>,
}

impl ThemeState {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            current_background: None,
            current_text: None,
            last_effect_bucket: None,
            breakpoints: None,
            layout: LayoutCache::default(),
            effects: EffectMemo::default(),
            refresh: RefreshTimer::with_interval(refresh_interval),
            frame_request: FrameRequest::new(),
            warned_colors: HashSet::new(),
        }
    }

    pub fn current_background(&self) -> Option<Rgb> {
        self.current_background
    }

    pub fn current_text(&self) -> Option<Rgb> {
        self.current_text
    }

    pub fn last_effect_bucket(&self) -> Option<i64> {
        self.last_effect_bucket
    }

    /// The cached section table, if built since the last invalidation.
    pub fn breakpoints(&self) -> Option<&[ColorBreakpoint]> {
        self.breakpoints.as_deref()
    }

    pub fn layout(&self) -> &LayoutCache {
        &self.layout
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_request.is_pending()
    }

    /// Scroll/resize notifications absorbed by an already pending frame.
    pub fn coalesced_frames(&self) -> u64 {
        self.frame_request.coalesced()
    }

    /// Drops layout-derived caches. Last applied values are kept: the page
    /// still shows them.
    pub(crate) fn clear_layout(&mut self) {
        self.layout.clear();
        self.breakpoints = None;
    }

    /// Back to the freshly constructed state.
    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.refresh.interval());
    }
}
