//! Predefined traffic scenarios
//!
//! A catalog is an ordered list of rounds. Rounds are addressed by their
//! 1-based position; asking for a round past the end yields `None`, which
//! controllers read as "no more rounds".

use anyhow::{ensure, Result};
use std::collections::BTreeMap;

use super::types::Direction;

/// Initial waiting-vehicle counts for one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    counts: BTreeMap<Direction, u32>,
}

impl Round {
    pub fn new(west: u32, east: u32) -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(Direction::West, west);
        counts.insert(Direction::East, east);
        Self { counts }
    }

    /// Initial count for a direction (0 if the round doesn't mention it)
    pub fn count(&self, direction: Direction) -> u32 {
        self.counts.get(&direction).copied().unwrap_or(0)
    }

    /// Fresh copy of the counts, used to seed a controller's waiting queue
    pub fn counts(&self) -> BTreeMap<Direction, u32> {
        self.counts.clone()
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Read-only ordered list of rounds
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    rounds: Vec<Round>,
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self {
            rounds: vec![Round::new(10, 5), Round::new(12, 20)],
        }
    }
}

impl ScenarioCatalog {
    pub fn new(rounds: Vec<Round>) -> Result<Self> {
        ensure!(!rounds.is_empty(), "a scenario catalog needs at least one round");
        Ok(Self { rounds })
    }

    /// Look up a round by its 1-based number
    pub fn round(&self, number: usize) -> Option<&Round> {
        number.checked_sub(1).and_then(|index| self.rounds.get(index))
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}
