//! Standalone signal race simulation
//!
//! This module contains all the scheduling and decision logic and runs
//! independently of the Bevy game engine, so it can be driven from the
//! console or from tests with a synthetic clock.

mod clock;
mod config;
mod controller;
mod policy;
mod scenario;
mod stats;
mod types;
mod world;

pub use clock::{ManualClock, MonotonicClock, SimulationClock, SimulationPhase, TimeSource};
pub use config::{SimConfig, DEFAULT_FRAME_RATE};
pub use controller::{
    ControllerSnapshot, ControllerState, IntersectionController, RoundLabel, TickEvent,
};
pub use policy::GreenTimePolicy;
pub use scenario::{Round, ScenarioCatalog};
pub use stats::{StatsAccumulator, StatsSnapshot};
pub use types::{
    Direction, ADAPTIVE_LIGHT_QUEUE, ADAPTIVE_LONG_GREEN, ADAPTIVE_MEDIUM_GREEN,
    ADAPTIVE_MEDIUM_QUEUE, ADAPTIVE_SHORT_GREEN, DEPARTURE_INTERVAL, DIRECTIONS, FIXED_GREEN_TIME,
};
pub use world::{SimWorld, WorldSnapshot};
