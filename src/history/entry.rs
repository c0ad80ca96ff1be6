//! History entries and their line format.
//!
//! One entry per line:
//!
//! ```text
//! [2026-10-18T09:30:00Z] Mode: Interactive, Doors: 3, Switched: Yes, Result: Win
//! ```
//!
//! The timestamp is whatever sits between the brackets, so older files
//! with other timestamp styles still parse.

use std::str::FromStr;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::core::Error;

/// How a round was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Played through the prompts.
    Interactive,
    /// Played by the batch runner.
    Simulation,
}

impl Mode {
    /// Name used in the history file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Interactive => "Interactive",
            Mode::Simulation => "Simulation",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted round outcome. Immutable once written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the round finished.
    pub timestamp: String,

    /// How it was played.
    pub mode: Mode,

    /// Doors in the round.
    pub door_count: usize,

    /// Whether the player switched.
    pub switched: bool,

    /// Whether the player won the car.
    pub won: bool,
}

impl HistoryEntry {
    /// Create an entry stamped with the current UTC time.
    pub fn now(mode: Mode, door_count: usize, switched: bool, won: bool) -> Self {
        Self {
            timestamp: humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
            mode,
            door_count,
            switched,
            won,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] Mode: {}, Doors: {}, Switched: {}, Result: {}",
            self.timestamp,
            self.mode,
            self.door_count,
            if self.switched { "Yes" } else { "No" },
            if self.won { "Win" } else { "Loss" },
        )
    }
}

impl FromStr for HistoryEntry {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedEntry(line.to_string());

        let rest = line.strip_prefix('[').ok_or_else(malformed)?;
        let (timestamp, fields) = rest.split_once("] ").ok_or_else(malformed)?;

        let mut parts = fields.split(", ");
        let mut field = |key| next_field(&mut parts, key).ok_or_else(malformed);

        let mode = match field("Mode")? {
            "Interactive" => Mode::Interactive,
            "Simulation" => Mode::Simulation,
            _ => return Err(malformed()),
        };
        let door_count: usize = field("Doors")?.parse().map_err(|_| malformed())?;
        let switched = match field("Switched")? {
            "Yes" => true,
            "No" => false,
            _ => return Err(malformed()),
        };
        let won = match field("Result")?.trim_end() {
            "Win" => true,
            "Loss" => false,
            _ => return Err(malformed()),
        };

        Ok(Self {
            timestamp: timestamp.to_string(),
            mode,
            door_count,
            switched,
            won,
        })
    }
}

/// Take the next `Key: value` part, returning the value if the key matches.
fn next_field<'a>(parts: &mut impl Iterator<Item = &'a str>, key: &str) -> Option<&'a str> {
    parts.next()?.strip_prefix(key)?.strip_prefix(": ")
}
