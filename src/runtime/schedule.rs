//! Fixed-interval timers driven by the event loop.

use std::time::{Duration, Instant};

/// A periodic timer that is due immediately after creation.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now,
        }
    }

    /// Returns true when the timer is due and re-arms it from `now`.
    /// Missed periods are not replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.interval;
        true
    }

    /// Time left until the next firing; zero when already due.
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Fire on the next check regardless of the interval.
    pub fn force(&mut self, now: Instant) {
        self.next_due = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_fires_immediately_then_waits_an_interval() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_secs(3), t0);
        assert!(t.fire(t0));
        assert!(!t.fire(t0 + Duration::from_secs(1)));
        assert_eq!(
            t.until_due(t0 + Duration::from_secs(1)),
            Duration::from_secs(2)
        );
        assert!(t.fire(t0 + Duration::from_secs(3)));
    }

    #[test]
    fn late_ticks_do_not_accumulate() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_secs(1), t0);
        t.fire(t0);
        let late = t0 + Duration::from_secs(10);
        assert!(t.fire(late));
        assert!(!t.fire(late));
        assert_eq!(t.until_due(late + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn force_makes_ticker_due() {
        let t0 = Instant::now();
        let mut t = Ticker::new(Duration::from_secs(60), t0);
        t.fire(t0);
        t.force(t0);
        assert!(t.fire(t0));
    }
}
