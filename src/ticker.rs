use std::time::{Duration, Instant};

/// Tick interval for time-tracking accrual, in milliseconds
pub const TICK_MS: u64 = 1000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(TICK_MS)
}

/// Handle for the recurring time-tracking tick. The event loop owns
/// exactly one of these for the lifetime of the session and polls it;
/// the tick stops when its owner drops it, so no timer can outlive the
/// session or run twice.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last_fired: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: Instant::now(),
        }
    }

    /// Whether a full interval has elapsed at `now`. Firing advances the
    /// reference point, so a slow frame yields one tick, not a burst.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_fired) >= self.interval {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// Remaining wait until the next tick, used as the event-poll timeout
    pub fn timeout(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.duration_since(self.last_fired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        assert_eq!(tick_duration(), Duration::from_millis(1000));
    }

    #[test]
    fn test_poll_fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        // Force a known reference point
        ticker.last_fired = start;

        assert!(!ticker.poll(start + Duration::from_millis(500)));
        assert!(ticker.poll(start + Duration::from_secs(1)));
        // Reference advanced; the same instant does not fire again
        assert!(!ticker.poll(start + Duration::from_secs(1)));
        assert!(ticker.poll(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_timeout_counts_down() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_secs(1));
        ticker.last_fired = start;

        assert_eq!(ticker.timeout(start), Duration::from_secs(1));
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(600)),
            Duration::from_millis(400)
        );
        // Past due: no wait
        assert_eq!(ticker.timeout(start + Duration::from_secs(2)), Duration::ZERO);
    }
}
