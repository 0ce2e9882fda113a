use std::cell::Cell;
use std::collections::HashMap;

use crate::paint::Rgb;

use super::contract::{PropertyValue, RenderSurface};

/// Number of style writes a surface has received, by kind.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WriteCounts {
    pub background: usize,
    pub text: usize,
    pub properties: usize,
}

impl WriteCounts {
    #[inline]
    pub fn total(self) -> usize {
        self.background + self.text + self.properties
    }
}

/// In-memory render surface.
///
/// Holds a scripted layout (scroll offset, sizes, anchor positions, style
/// properties) and records every write it receives. Layout reads of anchors
/// are counted so callers can verify caching.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    scroll_offset: f32,
    viewport_height: f32,
    document_height: f32,
    anchors: HashMap<String, f32>,
    style: HashMap<String, String>,

    background: Option<Rgb>,
    text_color: Option<Rgb>,
    text_targets: Vec<String>,
    properties: HashMap<String, PropertyValue>,

    writes: WriteCounts,
    anchor_reads: Cell<usize>,
}

impl RecordingSurface {
    pub fn new(viewport_height: f32, document_height: f32) -> Self {
        Self {
            viewport_height,
            document_height,
            ..Self::default()
        }
    }

    pub fn with_anchor(mut self, key: impl Into<String>, top: f32) -> Self {
        self.set_anchor(key, top);
        self
    }

    pub fn with_style(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    // ── layout scripting ──────────────────────────────────────────────────

    pub fn scroll_to(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    pub fn resize(&mut self, viewport_height: f32, document_height: f32) {
        self.viewport_height = viewport_height;
        self.document_height = document_height;
    }

    pub fn set_anchor(&mut self, key: impl Into<String>, top: f32) {
        self.anchors.insert(key.into(), top);
    }

    pub fn remove_anchor(&mut self, key: &str) {
        self.anchors.remove(key);
    }

    pub fn set_style(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.style.insert(name.into(), value.into());
    }

    // ── observed state ────────────────────────────────────────────────────

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    pub fn text_color(&self) -> Option<Rgb> {
        self.text_color
    }

    /// Targets passed with the most recent text color write.
    pub fn text_targets(&self) -> &[String] {
        &self.text_targets
    }

    pub fn property(&self, name: &str) -> Option<PropertyValue> {
        self.properties.get(name).copied()
    }

    pub fn writes(&self) -> WriteCounts {
        self.writes
    }

    pub fn anchor_reads(&self) -> usize {
        self.anchor_reads.get()
    }
}

impl RenderSurface for RecordingSurface {
    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn document_height(&self) -> f32 {
        self.document_height
    }

    fn anchor_top(&self, key: &str) -> Option<f32> {
        self.anchor_reads.set(self.anchor_reads.get() + 1);
        self.anchors.get(key).copied()
    }

    fn style_property(&self, name: &str) -> Option<String> {
        self.style.get(name).cloned()
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = Some(color);
        self.writes.background += 1;
    }

    fn set_text_color(&mut self, targets: &[String], color: Rgb) {
        self.text_color = Some(color);
        self.text_targets = targets.to_vec();
        self.writes.text += 1;
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) {
        self.properties.insert(name.to_string(), value);
        self.writes.properties += 1;
    }
}
