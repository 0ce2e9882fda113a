use std::time::{Duration, Instant};

/// Default interval between periodic layout re-checks.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Periodic safety net against layout drift the engine cannot observe
/// (late-loading images, fonts swapping in, lazy sections expanding).
///
/// The timer is driven by caller-provided timestamps so it stays testable and
/// never reads the clock itself. The first poll after construction or
/// [`reset`](Self::reset) only arms the baseline.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    last: Option<Instant>,
    interval: Duration,
}

impl RefreshTimer {
    /// Creates a timer with a custom interval. A zero interval makes every
    /// armed poll due.
    pub fn with_interval(interval: Duration) -> Self {
        Self { last: None, interval }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Drops the baseline; the next poll re-arms instead of firing.
    ///
    /// Called whenever caches are invalidated for another reason, so the
    /// periodic check does not fire right after a fresh rebuild.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Returns `true` once per elapsed interval and re-arms the baseline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last {
            None => {
                self.last = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last = Some(now);
                true
            }
            Some(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_only_arms() {
        let mut timer = RefreshTimer::with_interval(Duration::from_secs(2));
        let t0 = Instant::now();
        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + Duration::from_millis(1999)));
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = RefreshTimer::with_interval(Duration::from_secs(2));
        let t0 = Instant::now();
        timer.poll(t0);
        assert!(timer.poll(t0 + Duration::from_secs(2)));
        assert!(!timer.poll(t0 + Duration::from_secs(3)));
        assert!(timer.poll(t0 + Duration::from_secs(4)));
    }

    #[test]
    fn reset_rearms_instead_of_firing() {
        let mut timer = RefreshTimer::with_interval(Duration::from_secs(1));
        let t0 = Instant::now();
        timer.poll(t0);
        timer.reset();
        assert!(!timer.poll(t0 + Duration::from_secs(10)));
        assert!(timer.poll(t0 + Duration::from_secs(11)));
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let mut timer = RefreshTimer::with_interval(Duration::from_secs(1));
        let t0 = Instant::now() + Duration::from_secs(5);
        timer.poll(t0);
        assert!(!timer.poll(t0 - Duration::from_secs(3)));
    }
}
