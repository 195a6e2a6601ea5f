//! Timing configuration

use anyhow::{ensure, Result};

use super::types::{DEPARTURE_INTERVAL, FIXED_GREEN_TIME};

/// Target frame rate for the tick loop
pub const DEFAULT_FRAME_RATE: f64 = 30.0;

/// Timing knobs for a race. Defaults reproduce the classic setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Green duration for the fixed timer, in seconds
    pub fixed_green_time: f64,
    /// Minimum spacing between departures, in seconds
    pub departure_interval: f64,
    /// Ticks per second
    pub frame_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_green_time: FIXED_GREEN_TIME,
            departure_interval: DEPARTURE_INTERVAL,
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fixed_green_time.is_finite() && self.fixed_green_time > 0.0,
            "fixed green time must be a positive number of seconds, got {}",
            self.fixed_green_time
        );
        ensure!(
            self.departure_interval.is_finite() && self.departure_interval > 0.0,
            "departure interval must be a positive number of seconds, got {}",
            self.departure_interval
        );
        ensure!(
            self.frame_rate.is_finite() && self.frame_rate > 0.0,
            "frame rate must be positive, got {}",
            self.frame_rate
        );
        Ok(())
    }

    /// Nominal seconds per frame
    pub fn frame_delta(&self) -> f64 {
        1.0 / self.frame_rate
    }
}
