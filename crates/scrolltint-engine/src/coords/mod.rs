//! Scroll geometry shared by the theme engine and render surfaces.
//!
//! Canonical space:
//! - CSS pixels
//! - document coordinates, origin at the document top
//! - +Y down

mod metrics;
mod span;

pub use metrics::ScrollMetrics;
pub use span::Span;
