use std::time::Duration;

/// Converts arbitrary elapsed time into a whole number of fixed-length ticks
#[derive(Debug)]
pub struct TickClock {
    period: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        assert!(!period.is_zero(), "Tick period must be non-zero");
        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    /// Add elapsed time, returning how many ticks are now due
    pub fn advance(&mut self, elapsed: &Duration) -> u32 {
        self.accumulated += *elapsed;

        let mut ticks = 0;
        while self.accumulated >= self.period {
            self.accumulated -= self.period;
            ticks += 1;
        }
        ticks
    }

    pub fn until_next_tick(&self) -> Duration {
        self.period - self.accumulated
    }
}
