//! Error types for rounds, history and the console.

use std::io;

use thiserror::Error;

use super::{DoorId, OpenedDoors};
use crate::rules::RoundPhase;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulator.
///
/// Everything except `Io` is recovered by the console loop.
#[derive(Debug, Error)]
pub enum Error {
    /// Menu input did not name an option.
    #[error("Invalid menu choice: {0:?}")]
    InvalidMenuChoice(String),

    /// A picked door is outside the game.
    #[error("{door} does not exist in a {door_count}-door game")]
    DoorOutOfRange { door: DoorId, door_count: usize },

    /// A round operation was called out of order.
    #[error("Round is in phase {actual:?}, expected {expected:?}")]
    WrongPhase { expected: RoundPhase, actual: RoundPhase },

    /// A reveal policy opened the prize, the pick, a door twice or the wrong
    /// number of doors.
    #[error("Reveal opened an invalid set of doors: {0:?}")]
    InvalidReveal(OpenedDoors),

    /// History could not be read.
    #[error("History unavailable: {0}")]
    HistoryUnavailable(#[source] io::Error),

    /// History could not be appended to.
    #[error("History write failed: {0}")]
    HistoryWrite(#[source] io::Error),

    /// A stored history line did not parse.
    #[error("Malformed history entry: {0:?}")]
    MalformedEntry(String),

    /// Console I/O failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}
