//! Scroll-driven page theme.
//!
//! A frame is computed in two layers:
//! - an ordered list of hand-tuned zones near the top of the page
//!   (dark → cream → accent → soft green), see [`zones`]
//! - past those, a per-section breakpoint table resolved against live
//!   layout, see [`breakpoint`]
//!
//! Vignette and blur intensities are independent curves over a coarse,
//! quantized scroll progress ([`effects`]). [`ScrollThemeEngine`] owns the
//! caches and writes results to a [`RenderSurface`](crate::surface::RenderSurface)
//! only when they change.

pub mod breakpoint;
pub mod config;
pub mod effects;
pub mod engine;
pub mod frame;
pub mod palette;
pub mod state;
pub mod zones;

pub use breakpoint::{build_breakpoint_table, lookup_color, ColorBreakpoint};
pub use config::{
    EffectTuning, PropertyNames, SectionPalette, ThemeConfig, TransitionWindow, ZoneTuning,
};
pub use effects::{EffectCurve, SecondaryEffects};
pub use engine::{ApplyReport, ScrollThemeEngine};
pub use frame::{compute_frame, BreakpointSource, FrameInputs, ThemeFrame};
pub use state::{Invalidation, LayoutCache, ThemeState};
pub use zones::{Zone, ZoneKind};
