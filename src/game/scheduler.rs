//! Fixed-step tick scheduling.
//!
//! Wall-clock time is accumulated and converted into whole ticks, so the
//! simulation runs at the same rate however often the main loop wakes up.

use crate::constants::{MAX_CATCH_UP_TICKS, TICK_INTERVAL_MS};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    max_catch_up: u32,
    accumulated: Duration,
    running: bool,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

impl TickScheduler {
    /// Stopped scheduler with the given tick period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            max_catch_up: MAX_CATCH_UP_TICKS,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin producing ticks. Time from before the start is not counted.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    /// Stop producing ticks and forget any partial tick.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    /// Add `elapsed` wall time and return how many ticks are due.
    ///
    /// At most `MAX_CATCH_UP_TICKS` are returned per call; any further
    /// backlog is dropped.
    pub fn due_ticks(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.period.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= self.period && ticks < self.max_catch_up {
            self.accumulated -= self.period;
            ticks += 1;
        }
        if ticks == self.max_catch_up {
            self.accumulated = Duration::ZERO;
        }
        ticks
    }

    /// Time until the next tick is due, for sizing the input poll timeout.
    /// `None` when stopped.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.running
            .then(|| self.period.saturating_sub(self.accumulated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_stopped_scheduler_never_ticks() {
        let mut sched = TickScheduler::default();
        assert_eq!(sched.period(), ms(20));
        assert!(!sched.is_running());
        assert_eq!(sched.due_ticks(ms(1000)), 0);
        assert_eq!(sched.until_next_tick(), None);
    }

    #[test]
    fn test_accumulates_partial_ticks() {
        let mut sched = TickScheduler::default();
        sched.start();
        assert_eq!(sched.due_ticks(ms(15)), 0);
        assert_eq!(sched.until_next_tick(), Some(ms(5)));
        assert_eq!(sched.due_ticks(ms(15)), 1);
        assert_eq!(sched.due_ticks(ms(30)), 2);
        assert_eq!(sched.until_next_tick(), Some(ms(20)));
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut sched = TickScheduler::default();
        sched.start();
        assert_eq!(sched.due_ticks(ms(5000)), MAX_CATCH_UP_TICKS);
        // Backlog dropped.
        assert_eq!(sched.due_ticks(ms(0)), 0);
    }

    #[test]
    fn test_stop_discards_progress() {
        let mut sched = TickScheduler::default();
        sched.start();
        sched.due_ticks(ms(19));
        sched.stop();
        assert_eq!(sched.due_ticks(ms(19)), 0);

        sched.start();
        assert_eq!(sched.due_ticks(ms(19)), 0);
        assert_eq!(sched.due_ticks(ms(1)), 1);
    }

    #[test]
    fn test_zero_period_is_inert() {
        let mut sched = TickScheduler::new(Duration::ZERO);
        sched.start();
        assert_eq!(sched.due_ticks(ms(100)), 0);
    }
}
