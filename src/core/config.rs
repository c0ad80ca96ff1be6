//! Session configuration.
//!
//! The console is configured with a `SessionConfig`:
//! - Where the history file lives
//! - How many doors the "classic" menu options use
//! - Optional fixed seed (tests only; the binary always seeds from entropy)
//!
//! Door counts below `MIN_DOORS` are clamped, never rejected. The console
//! refuses counts above `MAX_DOORS`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fewest doors a round can have.
///
/// Below three doors the host has nothing left to open.
pub const MIN_DOORS: usize = 3;

/// Most doors the console accepts for a round or simulation.
pub const MAX_DOORS: usize = 1000;

/// Default history file, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "game_stats.txt";

/// Clamp a requested door count to the playable minimum.
#[must_use]
pub fn clamp_door_count(requested: usize) -> usize {
    if requested < MIN_DOORS {
        tracing::debug!(requested, clamped = MIN_DOORS, "Door count clamped");
        MIN_DOORS
    } else {
        requested
    }
}

/// Configuration for a console session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// History file path.
    pub history_path: PathBuf,

    /// Door count for the fixed-size menu options.
    pub classic_doors: usize,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            classic_doors: MIN_DOORS,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new session config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history file path.
    #[must_use]
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// Set the door count for the fixed-size menu options (clamped).
    #[must_use]
    pub fn with_classic_doors(mut self, doors: usize) -> Self {
        self.classic_doors = clamp_door_count(doors);
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
