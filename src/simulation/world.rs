//! The race world that ties everything together
//!
//! Two controllers share one scenario catalog and one start gate but keep
//! independent state. Both are ticked with the same `now` and frame delta.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::sync::Arc;

use super::clock::{ManualClock, SimulationClock, SimulationPhase, TimeSource};
use super::config::SimConfig;
use super::controller::{ControllerSnapshot, IntersectionController, TickEvent};
use super::policy::GreenTimePolicy;
use super::scenario::ScenarioCatalog;

/// Read-only view of the whole race
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub phase: SimulationPhase,
    pub elapsed: f64,
    pub fixed: ControllerSnapshot,
    pub adaptive: ControllerSnapshot,
}

/// Fixed timer vs adaptive timer on the same scenarios
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub config: SimConfig,
    catalog: Arc<ScenarioCatalog>,
    clock: SimulationClock,
    fixed: IntersectionController,
    adaptive: IntersectionController,
    /// Most recent `now` seen by `start` or `tick`
    pub time: f64,
}

impl Default for SimWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl SimWorld {
    fn new_internal(config: SimConfig, catalog: ScenarioCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let fixed = IntersectionController::new(
            GreenTimePolicy::Fixed {
                duration: config.fixed_green_time,
            },
            Arc::clone(&catalog),
        )
        .with_departure_interval(config.departure_interval);
        let adaptive =
            IntersectionController::new(GreenTimePolicy::Adaptive, Arc::clone(&catalog))
                .with_departure_interval(config.departure_interval);

        Self {
            config,
            catalog,
            clock: SimulationClock::new(),
            fixed,
            adaptive,
            time: 0.0,
        }
    }

    /// The classic two-round race with default timings
    pub fn new() -> Self {
        Self::new_internal(SimConfig::default(), ScenarioCatalog::default())
    }

    /// Build a race with custom timings and scenarios
    pub fn with_config(config: SimConfig, catalog: ScenarioCatalog) -> Result<Self> {
        config.validate().context("invalid simulation config")?;
        Ok(Self::new_internal(config, catalog))
    }

    /// Consume the start trigger. Repeats are ignored.
    pub fn start(&mut self, now: f64) -> bool {
        if !self.clock.start(now) {
            warn!("start trigger ignored, race is {:?}", self.clock.phase());
            return false;
        }
        self.time = now;
        info!(
            "=== RACE STARTED === {} rounds, fixed green {:.0}s, departure every {:.2}s",
            self.catalog.len(),
            self.config.fixed_green_time,
            self.config.departure_interval
        );
        self.fixed.start(now);
        self.adaptive.start(now);
        true
    }

    /// Advance both controllers by one frame
    pub fn tick(&mut self, now: f64, delta_secs: f64) {
        if !self.clock.is_running() {
            return;
        }
        self.time = now;

        self.fixed.accumulate_wait(delta_secs);
        self.adaptive.accumulate_wait(delta_secs);

        for controller in [&mut self.fixed, &mut self.adaptive] {
            if controller.tick(now) == TickEvent::RoundAdvanced {
                debug!(
                    "{}: now on round {}",
                    controller.label(),
                    controller.round_number()
                );
            }
        }

        if self.fixed.is_finished() && self.adaptive.is_finished() {
            self.clock.finish(now);
            info!("=== SIMULATION COMPLETE ===");
            for controller in [&self.fixed, &self.adaptive] {
                let stats = controller.stats();
                info!("{} cars cleared: {}", controller.label(), stats.cars_cleared());
                info!(
                    "{} total wait: {:.0}s",
                    controller.label(),
                    stats.total_wait_time()
                );
                info!(
                    "{} avg wait: {:.2}s",
                    controller.label(),
                    stats.average_wait()
                );
            }
        }
    }

    /// Start (if needed) and tick on a simulated clock until both controllers
    /// finish or `max_seconds` of simulated time pass. Returns whether the
    /// race completed.
    pub fn run_to_completion(
        &mut self,
        clock: &mut ManualClock,
        frame_delta: f64,
        max_seconds: f64,
    ) -> bool {
        self.start(clock.now());
        let deadline = clock.now() + max_seconds;
        while !self.is_over() && clock.now() < deadline {
            clock.advance(frame_delta);
            self.tick(clock.now(), frame_delta);
        }
        self.is_over()
    }

    pub fn phase(&self) -> SimulationPhase {
        self.clock.phase()
    }

    pub fn is_started(&self) -> bool {
        self.clock.phase() != SimulationPhase::Idle
    }

    pub fn is_over(&self) -> bool {
        self.clock.is_finished()
    }

    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    pub fn fixed(&self) -> &IntersectionController {
        &self.fixed
    }

    pub fn adaptive(&self) -> &IntersectionController {
        &self.adaptive
    }

    pub fn snapshot(&self, now: f64) -> WorldSnapshot {
        WorldSnapshot {
            phase: self.clock.phase(),
            elapsed: self.clock.elapsed(now),
            fixed: self.fixed.snapshot(now),
            adaptive: self.adaptive.snapshot(now),
        }
    }

    /// Print a summary of the race state
    pub fn print_summary(&self) {
        let snapshot = self.snapshot(self.time);
        println!("=== Signal Race Summary ===");
        println!(
            "Phase: {:?}, Elapsed: {:.2}s",
            snapshot.phase, snapshot.elapsed
        );
        for controller in [&snapshot.fixed, &snapshot.adaptive] {
            let green = controller
                .active_direction
                .map(|d| d.to_string())
                .unwrap_or_else(|| "None".to_string());
            println!("--- {} ---", controller.label);
            println!(
                "  Round: {}  Green: {} ({}s left)",
                controller.round,
                green,
                controller.time_remaining.floor() as u32
            );
            for (direction, count) in &controller.waiting {
                println!("  {:<5} waiting: {}", direction, count);
            }
            println!(
                "  {:<18} {}",
                "Cars Cleared:", controller.stats.cars_cleared
            );
            println!(
                "  {:<18} {:.0}",
                "Total Wait (s):", controller.stats.total_wait_time
            );
            println!(
                "  {:<18} {:.2}",
                "Avg Wait (s):", controller.stats.average_wait
            );
        }
    }
}
