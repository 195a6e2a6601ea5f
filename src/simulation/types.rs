//! Core types for the signal race
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;

/// One of the two traffic flows sharing the intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Traffic approaching from the west
    West,
    /// Traffic approaching from the east
    East,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::West => "WEST",
            Direction::East => "EAST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Green-light rotation order within a round
pub const DIRECTIONS: [Direction; 2] = [Direction::West, Direction::East];

/// Minimum spacing between two departures, in simulated seconds
pub const DEPARTURE_INTERVAL: f64 = 0.4;

/// Green duration used by the fixed timer, in simulated seconds
pub const FIXED_GREEN_TIME: f64 = 20.0;

/// Adaptive thresholds: queues up to this size get `ADAPTIVE_SHORT_GREEN`
pub const ADAPTIVE_LIGHT_QUEUE: u32 = 8;
/// Adaptive thresholds: queues up to this size get `ADAPTIVE_MEDIUM_GREEN`
pub const ADAPTIVE_MEDIUM_QUEUE: u32 = 18;

pub const ADAPTIVE_SHORT_GREEN: f64 = 10.0;
pub const ADAPTIVE_MEDIUM_GREEN: f64 = 20.0;
pub const ADAPTIVE_LONG_GREEN: f64 = 30.0;
