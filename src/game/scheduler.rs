use std::time::Duration;

/// Fixed-interval tick gate driven by frame deltas.
///
/// While disarmed, elapsed time is discarded. While armed, time accumulates
/// until a full interval has passed, at which point one tick fires and the
/// remainder carries into the next interval. A single overlong frame still
/// fires only once; the excess beyond one interval is dropped, never batched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickScheduler {
    armed: bool,
    accumulated: Duration,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the schedule. The first tick is one full interval away.
    pub fn arm(&mut self) {
        self.armed = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.accumulated = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Feed `elapsed` wall time. Returns true when a tick is due.
    pub fn advance(&mut self, elapsed: Duration, interval: Duration) -> bool {
        if !self.armed {
            return false;
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < interval {
            return false;
        }

        let remainder = self.accumulated - interval;
        self.accumulated = if remainder < interval {
            remainder
        } else {
            Duration::ZERO
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(150);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn ticks_over(seconds: f64, hz: f64) -> usize {
        let mut scheduler = TickScheduler::new();
        scheduler.arm();
        let frame = Duration::from_secs_f64(1.0 / hz);
        let frames = (seconds * hz).round() as usize;
        (0..frames)
            .filter(|_| scheduler.advance(frame, INTERVAL))
            .count()
    }

    #[test]
    fn test_disarmed_never_fires() {
        let mut scheduler = TickScheduler::new();
        assert!(!scheduler.advance(ms(1_000), INTERVAL));
        assert!(!scheduler.is_armed());
    }

    #[test]
    fn test_accumulates_until_due() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm();

        assert!(!scheduler.advance(ms(60), INTERVAL));
        assert!(!scheduler.advance(ms(60), INTERVAL));
        assert!(scheduler.advance(ms(30), INTERVAL));
        assert!(!scheduler.advance(ms(100), INTERVAL));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm();

        assert!(scheduler.advance(ms(200), INTERVAL));
        // 50ms left over from the first interval
        assert!(scheduler.advance(ms(100), INTERVAL));
    }

    #[test]
    fn test_overdue_time_is_not_batched() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm();

        assert!(scheduler.advance(ms(1_000), INTERVAL));
        assert!(!scheduler.advance(ms(10), INTERVAL));
    }

    #[test]
    fn test_disarm_drops_accumulated_time() {
        let mut scheduler = TickScheduler::new();
        scheduler.arm();
        scheduler.advance(ms(140), INTERVAL);
        scheduler.disarm();
        scheduler.arm();

        assert!(!scheduler.advance(ms(20), INTERVAL));
    }

    #[test]
    fn test_sub_millisecond_frames_keep_pace() {
        // 3s at 150ms per tick is 20 ticks, whatever the frame rate
        for hz in [60.0, 144.0, 2_000.0] {
            let ticks = ticks_over(3.0, hz);
            assert!((19..=20).contains(&ticks), "{}Hz gave {} ticks", hz, ticks);
        }
    }
}
