//! Start gate and time sources
//!
//! The core never reads the wall clock itself. Callers pass a monotonic
//! `now` (seconds) into every tick, taken from one of the sources below.

use std::time::Instant;

/// Overall race phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationPhase {
    #[default]
    Idle,
    Running,
    Finished,
}

/// Idle -> Running -> Finished gate shared by both controllers
#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    phase: SimulationPhase,
    started_at: Option<f64>,
    finished_at: Option<f64>,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the gate. Returns false if it was already opened.
    pub fn start(&mut self, now: f64) -> bool {
        if self.phase != SimulationPhase::Idle {
            return false;
        }
        self.phase = SimulationPhase::Running;
        self.started_at = Some(now);
        true
    }

    /// Close the gate. Only a running race can finish.
    pub fn finish(&mut self, now: f64) {
        if self.phase == SimulationPhase::Running {
            self.phase = SimulationPhase::Finished;
            self.finished_at = Some(now);
        }
    }

    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimulationPhase::Running
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SimulationPhase::Finished
    }

    /// Seconds since the start trigger, frozen once the race finishes
    pub fn elapsed(&self, now: f64) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end - start,
            (Some(start), None) => (now - start).max(0.0),
            _ => 0.0,
        }
    }
}

/// Monotonic source of "now" in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Wall-clock source backed by `Instant`, measured from construction
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for MonotonicClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Simulated source that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: f64) -> Self {
        Self { now }
    }

    /// Move forward by `delta_secs`; negative steps are ignored
    pub fn advance(&mut self, delta_secs: f64) {
        if delta_secs > 0.0 {
            self.now += delta_secs;
        }
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}
