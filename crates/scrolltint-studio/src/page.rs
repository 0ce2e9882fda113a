//! Synthetic storefront layout used to drive the engine without a browser.

use scrolltint_engine::surface::RecordingSurface;
use scrolltint_engine::ThemeConfig;

/// Height of one page section, in viewports.
const SECTION_VIEWPORTS: f32 = 1.1;

/// Sections above the configured palette: hero, about, story.
const INTRO_SECTIONS: usize = 3;

/// Lays out the intro sections followed by one section per configured
/// palette entry, each anchored at its top.
pub fn storefront(config: &ThemeConfig, viewport_height: f32) -> RecordingSurface {
    let section_h = viewport_height * SECTION_VIEWPORTS;
    let sections = INTRO_SECTIONS + config.sections.len();
    let document_height = section_h * sections as f32;

    let mut surface = RecordingSurface::new(viewport_height, document_height)
        .with_anchor(config.zones.cream_anchor.clone(), section_h)
        .with_style(config.zones.accent_property.clone(), "#c9a96e");

    for (i, section) in config.sections.iter().enumerate() {
        let top = section_h * (INTRO_SECTIONS + i) as f32;
        surface.set_anchor(section.key.clone(), top);
    }

    surface
}

/// Shifts every palette section down by `px`, as late-loading media would.
pub fn push_sections_down(
    surface: &mut RecordingSurface,
    config: &ThemeConfig,
    viewport_height: f32,
    px: f32,
) {
    let section_h = viewport_height * SECTION_VIEWPORTS;
    for (i, section) in config.sections.iter().enumerate() {
        let top = section_h * (INTRO_SECTIONS + i) as f32 + px;
        surface.set_anchor(section.key.clone(), top);
    }
}
