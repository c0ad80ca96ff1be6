//! Door identification.
//!
//! ## DoorId
//!
//! Type-safe door index. Doors are 0-based internally and 1-based
//! everywhere a player sees them.
//!
//! ## OpenedDoors
//!
//! The host's reveal set. Backed by `SmallVec` since a typical game
//! opens a handful of doors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The doors opened by the host, sorted ascending.
pub type OpenedDoors = SmallVec<[DoorId; 8]>;

/// Door identifier.
///
/// Door indices are 0-based: the first door is `DoorId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoorId(pub usize);

impl DoorId {
    /// Create a new door ID.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Create a door ID from the 1-based number a player typed.
    ///
    /// Returns `None` for zero.
    #[must_use]
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }

    /// Get the raw door index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Get the door number shown to players (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 + 1
    }

    /// Iterate over all door IDs for a game with `door_count` doors.
    ///
    /// ```
    /// use monty_hall::core::DoorId;
    ///
    /// let doors: Vec<_> = DoorId::all(3).collect();
    /// assert_eq!(doors, vec![DoorId::new(0), DoorId::new(1), DoorId::new(2)]);
    /// ```
    pub fn all(door_count: usize) -> impl Iterator<Item = DoorId> {
        (0..door_count).map(DoorId)
    }
}

impl std::fmt::Display for DoorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Door {}", self.number())
    }
}
