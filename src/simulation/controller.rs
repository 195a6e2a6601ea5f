//! Per-intersection signal controller
//!
//! Each controller owns its own queue, phase timer and statistics and
//! advances itself through the scenario catalog one green phase at a time.

use log::{debug, info, trace};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::policy::GreenTimePolicy;
use super::scenario::ScenarioCatalog;
use super::stats::{StatsAccumulator, StatsSnapshot};
use super::types::{Direction, DEPARTURE_INTERVAL, DIRECTIONS};

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    /// `round` is 1-based, `direction_index` indexes `DIRECTIONS`
    RoundActive { round: usize, direction_index: usize },
    Finished,
}

/// What a single tick changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing to do (idle or finished)
    Inactive,
    /// Still in the same green phase
    Continued,
    /// Green moved to the next direction within the round
    DirectionChanged,
    /// A new round started
    RoundAdvanced,
    /// The catalog ran out
    Finished,
}

/// Round shown to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundLabel {
    NotStarted,
    Round(usize),
    Finished,
}

impl fmt::Display for RoundLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundLabel::NotStarted => f.write_str("-"),
            RoundLabel::Round(n) => write!(f, "{}", n),
            RoundLabel::Finished => f.write_str("Finished"),
        }
    }
}

/// Read-only view of one controller
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub label: &'static str,
    pub waiting: Vec<(Direction, u32)>,
    pub active_direction: Option<Direction>,
    pub round: RoundLabel,
    pub green_duration: f64,
    pub time_remaining: f64,
    pub stats: StatsSnapshot,
}

/// A signal controller driven by one green-time policy
#[derive(Debug, Clone)]
pub struct IntersectionController {
    policy: GreenTimePolicy,
    catalog: Arc<ScenarioCatalog>,
    departure_interval: f64,
    state: ControllerState,
    waiting: BTreeMap<Direction, u32>,
    /// When the current green phase began
    phase_start: f64,
    green_duration: f64,
    /// Persists across phases and rounds; `None` until the first departure
    last_departure: Option<f64>,
    stats: StatsAccumulator,
}

impl IntersectionController {
    pub fn new(policy: GreenTimePolicy, catalog: Arc<ScenarioCatalog>) -> Self {
        Self {
            policy,
            catalog,
            departure_interval: DEPARTURE_INTERVAL,
            state: ControllerState::Idle,
            waiting: BTreeMap::new(),
            phase_start: 0.0,
            green_duration: 0.0,
            last_departure: None,
            stats: StatsAccumulator::new(),
        }
    }

    pub fn with_departure_interval(mut self, interval: f64) -> Self {
        self.departure_interval = interval;
        self
    }

    /// Idle -> RoundActive(1, 0). Returns false if already started.
    pub fn start(&mut self, now: f64) -> bool {
        if self.state != ControllerState::Idle {
            return false;
        }
        self.begin_round(1, now);
        true
    }

    /// Run the departure step then the advance step
    pub fn tick(&mut self, now: f64) -> TickEvent {
        let (round, direction_index) = match self.state {
            ControllerState::RoundActive {
                round,
                direction_index,
            } => (round, direction_index),
            ControllerState::Idle | ControllerState::Finished => return TickEvent::Inactive,
        };
        let direction = DIRECTIONS[direction_index];

        if self.departure_due(now) {
            let remaining = match self.waiting.get_mut(&direction) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    Some(*count)
                }
                _ => None,
            };
            if let Some(remaining) = remaining {
                self.stats.record_departure();
                self.last_departure = Some(now);
                trace!(
                    "{}: car left {} at {:.2}s, {} still waiting",
                    self.label(),
                    direction,
                    now,
                    remaining
                );
            }
        }

        let timer_up = now - self.phase_start >= self.green_duration;
        let lane_empty = self.waiting_for(direction) == 0;

        if timer_up || (self.policy.ends_early_on_empty() && lane_empty) {
            self.advance(round, direction_index, now)
        } else {
            TickEvent::Continued
        }
    }

    /// Sample the current queue into the wait-time total. Finished
    /// controllers keep sampling their leftover queue until the race ends.
    pub fn accumulate_wait(&mut self, delta_secs: f64) {
        if self.state != ControllerState::Idle {
            self.stats.accumulate(delta_secs, self.waiting.values().copied());
        }
    }

    fn departure_due(&self, now: f64) -> bool {
        match self.last_departure {
            Some(last) => now - last > self.departure_interval,
            None => true,
        }
    }

    fn advance(&mut self, round: usize, direction_index: usize, now: f64) -> TickEvent {
        let next = direction_index + 1;
        if next >= DIRECTIONS.len() {
            self.begin_round(round + 1, now)
        } else {
            self.state = ControllerState::RoundActive {
                round,
                direction_index: next,
            };
            self.activate_phase(now);
            TickEvent::DirectionChanged
        }
    }

    fn begin_round(&mut self, round: usize, now: f64) -> TickEvent {
        let Some(scenario) = self.catalog.round(round) else {
            self.state = ControllerState::Finished;
            info!(
                "{}: finished all {} rounds at {:.2}s",
                self.label(),
                self.catalog.len(),
                now
            );
            return TickEvent::Finished;
        };

        self.waiting = scenario.counts();
        self.state = ControllerState::RoundActive {
            round,
            direction_index: 0,
        };
        info!(
            "{}: round {} begins with {} cars waiting",
            self.label(),
            round,
            scenario.total()
        );
        self.activate_phase(now);
        TickEvent::RoundAdvanced
    }

    fn activate_phase(&mut self, now: f64) {
        self.phase_start = now;
        if let Some(direction) = self.active_direction() {
            self.green_duration = self.policy.green_time(self.waiting_for(direction));
            debug!(
                "{}: {} green for {:.0}s ({} waiting)",
                self.label(),
                direction,
                self.green_duration,
                self.waiting_for(direction)
            );
        }
    }

    pub fn label(&self) -> &'static str {
        self.policy.label()
    }

    pub fn policy(&self) -> GreenTimePolicy {
        self.policy
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == ControllerState::Finished
    }

    pub fn active_direction(&self) -> Option<Direction> {
        match self.state {
            ControllerState::RoundActive {
                direction_index, ..
            } => DIRECTIONS.get(direction_index).copied(),
            _ => None,
        }
    }

    /// 1-based round; `catalog.len() + 1` once finished, 0 before start
    pub fn round_number(&self) -> usize {
        match self.state {
            ControllerState::Idle => 0,
            ControllerState::RoundActive { round, .. } => round,
            ControllerState::Finished => self.catalog.len() + 1,
        }
    }

    pub fn round_label(&self) -> RoundLabel {
        match self.state {
            ControllerState::Idle => RoundLabel::NotStarted,
            ControllerState::RoundActive { round, .. } => RoundLabel::Round(round),
            ControllerState::Finished => RoundLabel::Finished,
        }
    }

    pub fn waiting_for(&self, direction: Direction) -> u32 {
        self.waiting.get(&direction).copied().unwrap_or(0)
    }

    pub fn total_waiting(&self) -> u32 {
        self.waiting.values().sum()
    }

    pub fn green_duration(&self) -> f64 {
        self.green_duration
    }

    pub fn phase_elapsed(&self, now: f64) -> f64 {
        match self.state {
            ControllerState::RoundActive { .. } => (now - self.phase_start).max(0.0),
            _ => 0.0,
        }
    }

    /// max(0, duration - elapsed) while a phase is active, else 0
    pub fn time_remaining(&self, now: f64) -> f64 {
        match self.state {
            ControllerState::RoundActive { .. } => {
                (self.green_duration - self.phase_elapsed(now)).max(0.0)
            }
            _ => 0.0,
        }
    }

    pub fn stats(&self) -> &StatsAccumulator {
        &self.stats
    }

    pub fn snapshot(&self, now: f64) -> ControllerSnapshot {
        ControllerSnapshot {
            label: self.label(),
            waiting: DIRECTIONS
                .iter()
                .map(|d| (*d, self.waiting_for(*d)))
                .collect(),
            active_direction: self.active_direction(),
            round: self.round_label(),
            green_duration: self.green_duration,
            time_remaining: self.time_remaining(now),
            stats: self.stats.snapshot(),
        }
    }
}
