//! Wait-time and throughput statistics for one controller

/// Running totals sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
    /// Sum over frames of (frame delta × vehicles waiting)
    total_wait_time: f64,
    /// Vehicles that have departed
    cars_cleared: u32,
}

/// Read-only copy of the statistics for display
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatsSnapshot {
    pub cars_cleared: u32,
    pub total_wait_time: f64,
    pub average_wait: f64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one frame's worth of waiting. Negative deltas are ignored so the
    /// total never decreases.
    pub fn accumulate<I>(&mut self, delta_secs: f64, waiting: I)
    where
        I: IntoIterator<Item = u32>,
    {
        if delta_secs <= 0.0 || !delta_secs.is_finite() {
            return;
        }
        let queued: u32 = waiting.into_iter().sum();
        self.total_wait_time += delta_secs * queued as f64;
    }

    pub fn record_departure(&mut self) {
        self.cars_cleared += 1;
    }

    pub fn total_wait_time(&self) -> f64 {
        self.total_wait_time
    }

    pub fn cars_cleared(&self) -> u32 {
        self.cars_cleared
    }

    /// Total wait divided by cleared cars, or 0 before anything has cleared
    pub fn average_wait(&self) -> f64 {
        if self.cars_cleared > 0 {
            self.total_wait_time / self.cars_cleared as f64
        } else {
            0.0
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            cars_cleared: self.cars_cleared,
            total_wait_time: self.total_wait_time,
            average_wait: self.average_wait(),
        }
    }
}
