/// Host primitive that runs a callback before the next repaint.
///
/// The engine only asks for a frame; the host calls
/// [`ScrollThemeEngine::on_animation_frame`](crate::theme::ScrollThemeEngine::on_animation_frame)
/// when it fires.
pub trait FrameScheduler {
    fn request_animation_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_animation_frame(&mut self) {
        self()
    }
}

/// "Already scheduled" guard that collapses bursts of scroll/resize events
/// into one animation frame.
#[derive(Debug, Default, Clone)]
pub struct FrameRequest {
    pending: bool,
    coalesced: u64,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a frame unless one is already pending.
    ///
    /// Returns `true` when the scheduler was actually invoked.
    pub fn request<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.pending {
            self.coalesced = self.coalesced.wrapping_add(1);
            return false;
        }
        self.pending = true;
        scheduler.request_animation_frame();
        true
    }

    /// Consumes the pending request at the start of a frame callback.
    ///
    /// Returns whether a request was pending.
    pub fn begin_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of requests absorbed by an already pending frame.
    #[inline]
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_schedules_once() {
        let mut scheduled = 0;
        let mut scheduler = || scheduled += 1;
        let mut req = FrameRequest::new();

        assert!(req.request(&mut scheduler));
        assert!(!req.request(&mut scheduler));
        assert!(!req.request(&mut scheduler));

        assert_eq!(scheduled, 1);
        assert_eq!(req.coalesced(), 2);
    }

    #[test]
    fn begin_frame_reopens_the_guard() {
        let mut scheduled = 0;
        let mut scheduler = || scheduled += 1;
        let mut req = FrameRequest::new();

        req.request(&mut scheduler);
        assert!(req.begin_frame());
        assert!(!req.is_pending());
        assert!(req.request(&mut scheduler));

        assert_eq!(scheduled, 2);
    }

    #[test]
    fn spurious_frame_reports_nothing_pending() {
        let mut req = FrameRequest::new();
        assert!(!req.begin_frame());
    }
}
