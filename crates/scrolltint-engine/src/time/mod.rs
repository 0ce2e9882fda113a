//! Time subsystem.
//!
//! Provides testable timing utilities without coupling to a host event loop.
//! Intended usage:
//! - one `FrameRequest` per engine, fed by scroll/resize notifications
//! - one `RefreshTimer` per engine, polled with the frame timestamp

mod frame_request;
mod refresh_timer;

pub use frame_request::{FrameRequest, FrameScheduler};
pub use refresh_timer::{RefreshTimer, DEFAULT_REFRESH_INTERVAL};
