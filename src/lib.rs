//! # monty-hall
//!
//! Interactive player and batch simulator for the Monty Hall problem with
//! any number of doors.
//!
//! ## Design Principles
//!
//! 1. **Explicit Rounds**: A round is a staged value passed through the
//!    engine, never hidden engine state.
//!
//! 2. **Owned Randomness**: Engines own their `DoorPicker`, so tests can
//!    pin every draw.
//!
//! 3. **Pluggable Surfaces**: History and console I/O sit behind traits;
//!    the rules never touch a file or a terminal.
//!
//! ## Modules
//!
//! - `core`: Door IDs, RNG, configuration, errors
//! - `rules`: Rounds, the host's reveal, the round engine
//! - `simulation`: Switch vs stay batches
//! - `history`: Append-only record of interactive rounds
//! - `console`: Menu loop, prompts, ASCII doors

pub mod core;
pub mod rules;
pub mod simulation;
pub mod history;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    DoorId, OpenedDoors,
    DoorPicker, GameRng, ScriptedPicker,
    SessionConfig, MAX_DOORS, MIN_DOORS,
    Error, Result,
};

pub use crate::rules::{Outcome, Round, RoundEngine, RoundPhase, OpenAllButOne, RevealPolicy};

pub use crate::simulation::{BatchReport, BatchRunner, Strategy, StrategyResult};

pub use crate::history::{FileHistory, HistoryEntry, HistoryStore, MemoryHistory, Mode};

pub use crate::console::{ConsolePresenter, MenuChoice, Presenter, Session};
