//! Batch simulation of fixed strategies.
//!
//! A batch plays many independent rounds with the same decision and
//! counts wins. `compare` runs the same door and trial counts once per
//! strategy and returns both results side by side.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{clamp_door_count, DoorPicker, GameRng, Result};
use crate::rules::{Outcome, RoundEngine};

/// A fixed player strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Always move to the remaining closed door.
    Switch,
    /// Always keep the initial pick.
    Stay,
}

impl Strategy {
    /// Whether this strategy switches.
    #[must_use]
    pub const fn switches(self) -> bool {
        matches!(self, Strategy::Switch)
    }

    /// Lowercase strategy name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Switch => "switch",
            Strategy::Stay => "stay",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Win count for one strategy over a batch.
///
/// `wins <= trials` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyResult {
    /// Strategy played.
    pub strategy: Strategy,

    /// Rounds played.
    pub trials: u64,

    /// Rounds won.
    pub wins: u64,
}

impl StrategyResult {
    /// Create an empty result.
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            trials: 0,
            wins: 0,
        }
    }

    /// Count one round.
    pub fn record(&mut self, outcome: Outcome) {
        self.trials += 1;
        if outcome.is_win() {
            self.wins += 1;
        }
    }

    /// Rounds lost.
    #[must_use]
    pub const fn losses(&self) -> u64 {
        self.trials - self.wins
    }

    /// Fraction of rounds won, 0.0 for an empty batch.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.wins as f64 / self.trials as f64
        }
    }
}

/// Switch and stay results for the same door and trial counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Doors per round.
    pub door_count: usize,

    /// Rounds per strategy.
    pub trials: u64,

    /// Always-switch results.
    pub switch: StrategyResult,

    /// Always-stay results.
    pub stay: StrategyResult,
}

/// Runs batches of rounds on an owned engine.
#[derive(Clone, Debug)]
pub struct BatchRunner<P: DoorPicker = GameRng> {
    engine: RoundEngine<P>,
}

impl<P: DoorPicker> BatchRunner<P> {
    /// Create a runner drawing from `picker`.
    pub fn new(picker: P) -> Self {
        Self {
            engine: RoundEngine::new(picker),
        }
    }

    /// Play `trials` rounds with a fixed strategy.
    pub fn run_batch(&mut self, door_count: usize, trials: u64, strategy: Strategy) -> Result<StrategyResult> {
        let door_count = clamp_door_count(door_count);
        let mut result = StrategyResult::new(strategy);

        for _ in 0..trials {
            let outcome = self.engine.play(door_count, strategy.switches())?;
            result.record(outcome);
        }

        info!(
            doors = door_count,
            trials,
            strategy = strategy.name(),
            wins = result.wins,
            "Batch finished"
        );
        Ok(result)
    }

    /// Run an always-switch batch, then an always-stay batch.
    pub fn compare(&mut self, door_count: usize, trials: u64) -> Result<BatchReport> {
        let switch = self.run_batch(door_count, trials, Strategy::Switch)?;
        let stay = self.run_batch(door_count, trials, Strategy::Stay)?;

        Ok(BatchReport {
            door_count: clamp_door_count(door_count),
            trials,
            switch,
            stay,
        })
    }
}
