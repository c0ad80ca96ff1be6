//! A single Monty Hall round as a staged value.
//!
//! A round moves through fixed phases, one engine call each:
//!
//! ```text
//! NotStarted -> PrizeAndPickAssigned -> DoorsRevealed -> DecisionApplied -> Resolved
//! ```
//!
//! Fields are filled in as the round advances and are read-only from
//! outside the crate. `Resolved` is terminal.

use serde::{Deserialize, Serialize};

use crate::core::{clamp_door_count, DoorId, Error, OpenedDoors, Result};

/// Phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Fresh round, nothing assigned.
    NotStarted,
    /// Prize hidden and initial pick made.
    PrizeAndPickAssigned,
    /// Host has opened his doors.
    DoorsRevealed,
    /// Player decided to switch or stay.
    DecisionApplied,
    /// Outcome reported. Terminal.
    Resolved,
}

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The final pick hides the car.
    Win,
    /// The final pick hides a goat.
    Loss,
}

impl Outcome {
    /// Outcome from a win flag.
    #[must_use]
    pub const fn from_win(won: bool) -> Self {
        if won {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Check if this is a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

/// State of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    door_count: usize,
    prize: Option<DoorId>,
    initial_pick: Option<DoorId>,
    opened: OpenedDoors,
    final_pick: Option<DoorId>,
    switched: bool,
    phase: RoundPhase,
}

impl Round {
    /// Create an empty round. Door counts below three are clamped.
    #[must_use]
    pub fn new(door_count: usize) -> Self {
        Self {
            door_count: clamp_door_count(door_count),
            prize: None,
            initial_pick: None,
            opened: OpenedDoors::new(),
            final_pick: None,
            switched: false,
            phase: RoundPhase::NotStarted,
        }
    }

    /// Number of doors in play.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.door_count
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Door hiding the car, once assigned.
    #[must_use]
    pub fn prize(&self) -> Option<DoorId> {
        self.prize
    }

    /// The player's first pick, once assigned.
    #[must_use]
    pub fn initial_pick(&self) -> Option<DoorId> {
        self.initial_pick
    }

    /// Doors opened by the host (empty before the reveal).
    #[must_use]
    pub fn opened(&self) -> &[DoorId] {
        &self.opened
    }

    /// Check if the host opened a door.
    #[must_use]
    pub fn is_opened(&self, door: DoorId) -> bool {
        self.opened.contains(&door)
    }

    /// The door the player ends on, once decided.
    #[must_use]
    pub fn final_pick(&self) -> Option<DoorId> {
        self.final_pick
    }

    /// Whether the player switched. False until decided.
    #[must_use]
    pub fn switched(&self) -> bool {
        self.switched
    }

    /// The one closed door other than the initial pick.
    ///
    /// Available once doors are revealed.
    #[must_use]
    pub fn switch_target(&self) -> Option<DoorId> {
        if self.phase == RoundPhase::NotStarted || self.phase == RoundPhase::PrizeAndPickAssigned {
            return None;
        }
        let pick = self.initial_pick?;
        DoorId::all(self.door_count).find(|&door| door != pick && !self.is_opened(door))
    }

    /// Check if the final pick is the prize.
    ///
    /// Fails before a decision has been applied.
    pub fn is_win(&self) -> Result<bool> {
        match (self.phase, self.final_pick, self.prize) {
            (RoundPhase::DecisionApplied | RoundPhase::Resolved, Some(pick), Some(prize)) => {
                Ok(pick == prize)
            }
            _ => Err(Error::WrongPhase {
                expected: RoundPhase::DecisionApplied,
                actual: self.phase,
            }),
        }
    }

    /// Outcome of a decided round.
    pub fn outcome(&self) -> Result<Outcome> {
        self.is_win().map(Outcome::from_win)
    }

    pub(crate) fn expect_phase(&self, expected: RoundPhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(Error::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    pub(crate) fn check_door(&self, door: DoorId) -> Result<()> {
        if door.index() < self.door_count {
            Ok(())
        } else {
            Err(Error::DoorOutOfRange {
                door,
                door_count: self.door_count,
            })
        }
    }

    pub(crate) fn set_assignment(&mut self, prize: DoorId, pick: DoorId) {
        self.prize = Some(prize);
        self.initial_pick = Some(pick);
        self.phase = RoundPhase::PrizeAndPickAssigned;
    }

    pub(crate) fn set_opened(&mut self, opened: OpenedDoors) {
        self.opened = opened;
        self.phase = RoundPhase::DoorsRevealed;
    }

    pub(crate) fn set_decision(&mut self, switched: bool, final_pick: DoorId) {
        self.switched = switched;
        self.final_pick = Some(final_pick);
        self.phase = RoundPhase::DecisionApplied;
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.phase = RoundPhase::Resolved;
    }
}
