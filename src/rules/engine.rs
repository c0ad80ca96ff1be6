//! Round engine.
//!
//! Owns the random source and the reveal policy, and drives `Round`
//! values through their phases:
//! - `assign`: hide the prize, record the initial pick
//! - `reveal`: host opens all losing doors but one
//! - `apply_decision`: switch or stay
//! - `resolve`: report the outcome exactly once
//!
//! `start_round` and `play` bundle these for simulations.
//!
//! Whatever the policy returns is checked before it is stored: exactly
//! `door_count - 2` distinct doors, all in range, none of them the prize
//! or the pick. A policy breaking that fails with `Error::InvalidReveal`.

use tracing::{debug, warn};

use crate::core::{DoorId, DoorPicker, Error, GameRng, Result};

use super::reveal::{OpenAllButOne, RevealPolicy};
use super::round::{Outcome, Round, RoundPhase};

/// Drives rounds with an owned door picker.
#[derive(Clone, Debug)]
pub struct RoundEngine<P: DoorPicker = GameRng, R: RevealPolicy = OpenAllButOne> {
    picker: P,
    policy: R,
}

impl<P: DoorPicker> RoundEngine<P> {
    /// Create an engine using the standard reveal.
    pub fn new(picker: P) -> Self {
        Self::with_policy(picker, OpenAllButOne)
    }
}

impl<P: DoorPicker, R: RevealPolicy> RoundEngine<P, R> {
    /// Create an engine with a custom reveal policy.
    pub fn with_policy(picker: P, policy: R) -> Self {
        Self { picker, policy }
    }

    /// Access the door picker.
    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    /// Start a round with a random prize and pick, doors already revealed.
    pub fn start_round(&mut self, door_count: usize) -> Result<Round> {
        let mut round = Round::new(door_count);
        let prize = self.picker.pick_door(round.door_count());
        let pick = self.picker.pick_door(round.door_count());
        round.set_assignment(prize, pick);
        self.open_doors(&mut round)?;
        Ok(round)
    }

    /// Start a round with a fixed prize and pick, doors already revealed.
    pub fn start_round_with(&mut self, door_count: usize, prize: DoorId, pick: DoorId) -> Result<Round> {
        let mut round = Round::new(door_count);
        round.check_door(prize)?;
        round.check_door(pick)?;
        round.set_assignment(prize, pick);
        self.open_doors(&mut round)?;
        Ok(round)
    }

    /// Hide the prize at random and record the player's pick.
    ///
    /// Requires `NotStarted`. An out-of-range pick leaves the round untouched.
    pub fn assign(&mut self, round: &mut Round, pick: DoorId) -> Result<()> {
        round.expect_phase(RoundPhase::NotStarted)?;
        round.check_door(pick)?;
        let prize = self.picker.pick_door(round.door_count());
        round.set_assignment(prize, pick);
        debug!(doors = round.door_count(), pick = pick.number(), "Prize and pick assigned");
        Ok(())
    }

    /// Open the host's doors. Requires `PrizeAndPickAssigned`.
    pub fn reveal(&mut self, round: &mut Round) -> Result<()> {
        round.expect_phase(RoundPhase::PrizeAndPickAssigned)?;
        self.open_doors(round)?;
        debug!(opened = round.opened().len(), "Doors revealed");
        Ok(())
    }

    /// Switch to the remaining closed door, or stay. Requires `DoorsRevealed`.
    pub fn apply_decision(&mut self, round: &mut Round, switched: bool) -> Result<()> {
        round.expect_phase(RoundPhase::DoorsRevealed)?;
        let initial = round.initial_pick().ok_or(Error::WrongPhase {
            expected: RoundPhase::DoorsRevealed,
            actual: RoundPhase::NotStarted,
        })?;
        let final_pick = if switched {
            round
                .switch_target()
                .ok_or_else(|| Error::InvalidReveal(round.opened().iter().copied().collect()))?
        } else {
            initial
        };
        round.set_decision(switched, final_pick);
        Ok(())
    }

    /// Report the outcome. Requires `DecisionApplied`; afterwards the round
    /// is `Resolved` and further calls fail.
    pub fn resolve(&mut self, round: &mut Round) -> Result<Outcome> {
        round.expect_phase(RoundPhase::DecisionApplied)?;
        let outcome = round.outcome()?;
        round.mark_resolved();
        debug!(?outcome, switched = round.switched(), "Round resolved");
        Ok(outcome)
    }

    /// Play a full simulated round with a fixed decision.
    pub fn play(&mut self, door_count: usize, switched: bool) -> Result<Outcome> {
        let mut round = self.start_round(door_count)?;
        self.apply_decision(&mut round, switched)?;
        self.resolve(&mut round)
    }

    fn open_doors(&mut self, round: &mut Round) -> Result<()> {
        let (Some(prize), Some(pick)) = (round.prize(), round.initial_pick()) else {
            return Err(Error::WrongPhase {
                expected: RoundPhase::PrizeAndPickAssigned,
                actual: round.phase(),
            });
        };
        let door_count = round.door_count();
        let opened = self.policy.reveal(door_count, prize, pick, &mut self.picker);
        if !is_valid_reveal(&opened, door_count, prize, pick) {
            warn!(doors = door_count, ?opened, "Reveal policy broke the reveal rule");
            return Err(Error::InvalidReveal(opened));
        }
        round.set_opened(opened);
        Ok(())
    }
}

/// Exactly `door_count - 2` distinct in-range doors, none the prize or the pick.
fn is_valid_reveal(opened: &[DoorId], door_count: usize, prize: DoorId, pick: DoorId) -> bool {
    opened.len() == door_count.saturating_sub(2)
        && opened.iter().enumerate().all(|(i, &door)| {
            door.index() < door_count
                && door != prize
                && door != pick
                && !opened[..i].contains(&door)
        })
}
