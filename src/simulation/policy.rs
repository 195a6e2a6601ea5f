//! Green-time policies
//!
//! Both policies are pure: the same queue size always yields the same
//! duration.

use super::types::{
    ADAPTIVE_LIGHT_QUEUE, ADAPTIVE_LONG_GREEN, ADAPTIVE_MEDIUM_GREEN, ADAPTIVE_MEDIUM_QUEUE,
    ADAPTIVE_SHORT_GREEN, FIXED_GREEN_TIME,
};

/// How long a direction stays green
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GreenTimePolicy {
    /// Constant duration regardless of demand
    Fixed { duration: f64 },
    /// Duration stepped by queue size, ending early once the queue empties
    Adaptive,
}

impl Default for GreenTimePolicy {
    fn default() -> Self {
        GreenTimePolicy::Fixed {
            duration: FIXED_GREEN_TIME,
        }
    }
}

impl GreenTimePolicy {
    pub fn fixed() -> Self {
        Self::default()
    }

    /// Green duration for a direction whose queue holds `waiting` vehicles
    /// at the moment it becomes active
    pub fn green_time(&self, waiting: u32) -> f64 {
        match self {
            GreenTimePolicy::Fixed { duration } => *duration,
            GreenTimePolicy::Adaptive => adaptive_green_time(waiting),
        }
    }

    /// Whether an empty queue ends the green phase before the timer does
    pub fn ends_early_on_empty(&self) -> bool {
        matches!(self, GreenTimePolicy::Adaptive)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GreenTimePolicy::Fixed { .. } => "FIXED TIMER",
            GreenTimePolicy::Adaptive => "ADAPTIVE",
        }
    }
}

/// Three-bucket threshold lookup
fn adaptive_green_time(waiting: u32) -> f64 {
    if waiting <= ADAPTIVE_LIGHT_QUEUE {
        ADAPTIVE_SHORT_GREEN
    } else if waiting <= ADAPTIVE_MEDIUM_QUEUE {
        ADAPTIVE_MEDIUM_GREEN
    } else {
        ADAPTIVE_LONG_GREEN
    }
}
