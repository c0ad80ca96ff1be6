//! Core types: doors, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod door;
pub mod rng;
pub mod config;
pub mod error;

pub use door::{DoorId, OpenedDoors};
pub use rng::{DoorPicker, GameRng, ScriptedPicker};
pub use config::{clamp_door_count, SessionConfig, DEFAULT_HISTORY_FILE, MAX_DOORS, MIN_DOORS};
pub use error::{Error, Result};
