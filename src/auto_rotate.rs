use std::time::Duration;

/// Interval timer for idle rotation, advanced by the owner's frame clock.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoRotateTimer {
    period: Duration,
    elapsed: Duration,
    running: bool,
}

impl AutoRotateTimer {
    pub fn new(period: Duration) -> Self {
        Self { period, elapsed: Duration::ZERO, running: false }
    }

    /// (Re)starts the interval from zero.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Feeds `dt` into the timer and returns whether a period elapsed.
    ///
    /// Fires at most once per call. Whole periods missed during a stall are dropped
    /// and only the remainder is carried forward.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running || self.period.is_zero() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed < self.period {
            return false;
        }
        let remainder = self.elapsed.as_nanos() % self.period.as_nanos();
        self.elapsed = u64::try_from(remainder).map_or(Duration::ZERO, Duration::from_nanos);
        true
    }
}
