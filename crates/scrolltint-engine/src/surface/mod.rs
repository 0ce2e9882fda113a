//! Render surface boundary.
//!
//! The engine never touches a real page directly. Hosts implement
//! [`RenderSurface`] over their DOM (or any other renderer) and translate
//! platform scroll/resize notifications into engine calls.

mod contract;
mod recording;

pub use contract::{PropertyValue, RenderSurface};
pub use recording::{RecordingSurface, WriteCounts};
