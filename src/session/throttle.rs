use std::time::{Duration, Instant};

/// Lets an action through at most once per interval.
#[must_use]
pub struct Throttle {
    interval: Duration,
    last_acquired_at: Option<Instant>,
}

impl Throttle {
    pub const fn new(interval: Duration) -> Self {
        Self { interval, last_acquired_at: None }
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if let Some(last_acquired_at) = self.last_acquired_at
            && now.saturating_duration_since(last_acquired_at) <= self.interval
        {
            return false;
        }
        self.last_acquired_at = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle() {
        let mut throttle = Throttle::new(Duration::from_millis(300));
        let start = Instant::now();
        assert!(throttle.try_acquire(start));
        assert!(!throttle.try_acquire(start + Duration::from_millis(100)));
        assert!(!throttle.try_acquire(start + Duration::from_millis(300)));
        assert!(throttle.try_acquire(start + Duration::from_millis(301)));
        assert!(!throttle.try_acquire(start + Duration::from_millis(302)));
    }
}
