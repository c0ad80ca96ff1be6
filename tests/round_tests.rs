//! Round engine scenarios.
//!
//! Walks rounds through every phase with scripted and seeded pickers.

use monty_hall::core::{DoorId, GameRng, ScriptedPicker};
use monty_hall::rules::{Outcome, Round, RoundEngine, RoundPhase};
use monty_hall::Error;

fn scripted(doors: &[usize]) -> RoundEngine<ScriptedPicker> {
    RoundEngine::new(ScriptedPicker::new(doors.iter().copied().map(DoorId::new)))
}

/// Prize behind door 1, player on door 2: the host can only open door 3.
#[test]
fn test_three_door_scenario() {
    let mut engine = scripted(&[0, 1]);
    let round = engine.start_round(3).unwrap();
    assert_eq!(round.opened(), &[DoorId::new(2)]);

    let mut switched = round.clone();
    engine.apply_decision(&mut switched, true).unwrap();
    assert_eq!(switched.final_pick(), Some(DoorId::new(0)));
    assert_eq!(engine.resolve(&mut switched).unwrap(), Outcome::Win);

    let mut stayed = round;
    engine.apply_decision(&mut stayed, false).unwrap();
    assert_eq!(stayed.final_pick(), Some(DoorId::new(1)));
    assert_eq!(engine.resolve(&mut stayed).unwrap(), Outcome::Loss);
}

/// Boundary sizes: 3 doors open 1, 10 doors open 8.
#[test]
fn test_reveal_sizes() {
    let mut engine = RoundEngine::new(GameRng::new(42));
    for _ in 0..100 {
        assert_eq!(engine.start_round(3).unwrap().opened().len(), 1);
        assert_eq!(engine.start_round(10).unwrap().opened().len(), 8);
    }
}

/// Every revealed round leaves exactly one door to switch to.
#[test]
fn test_unique_switch_target() {
    let mut engine = RoundEngine::new(GameRng::new(7));
    for doors in 3..=12 {
        for _ in 0..20 {
            let round = engine.start_round(doors).unwrap();
            let pick = round.initial_pick().unwrap();

            let closed_others: Vec<_> = DoorId::all(doors)
                .filter(|&door| door != pick && !round.is_opened(door))
                .collect();
            assert_eq!(closed_others.len(), 1);
            assert_eq!(round.switch_target(), Some(closed_others[0]));
        }
    }
}

/// Final pick follows the decision for every kind of round.
#[test]
fn test_final_pick_invariant() {
    let mut engine = RoundEngine::new(GameRng::new(99));
    for switched in [true, false] {
        for _ in 0..200 {
            let mut round = engine.start_round(5).unwrap();
            let target = round.switch_target();
            engine.apply_decision(&mut round, switched).unwrap();

            let expected = if switched { target } else { round.initial_pick() };
            assert_eq!(round.final_pick(), expected);
            assert_eq!(round.switched(), switched);
        }
    }
}

/// Staying wins exactly when the first pick was right; switching wins
/// exactly when it was wrong.
#[test]
fn test_switch_wins_iff_first_pick_wrong() {
    let mut engine = RoundEngine::new(GameRng::new(1234));
    for _ in 0..500 {
        let round = engine.start_round(4).unwrap();
        let first_right = round.initial_pick() == round.prize();

        let mut switched = round.clone();
        engine.apply_decision(&mut switched, true).unwrap();
        assert_eq!(switched.is_win().unwrap(), !first_right);

        let mut stayed = round;
        engine.apply_decision(&mut stayed, false).unwrap();
        assert_eq!(stayed.is_win().unwrap(), first_right);
    }
}

#[test]
fn test_is_win_idempotent() {
    let mut engine = RoundEngine::new(GameRng::new(5));
    let mut round = engine.start_round(6).unwrap();
    engine.apply_decision(&mut round, true).unwrap();
    engine.resolve(&mut round).unwrap();

    let first = round.is_win().unwrap();
    assert_eq!(round.is_win().unwrap(), first);
    assert_eq!(round.is_win().unwrap(), first);
}

/// Interactive order of operations, one transition per call.
#[test]
fn test_interactive_state_machine() {
    let mut engine = RoundEngine::new(GameRng::new(77));
    let mut round = Round::new(4);
    assert_eq!(round.phase(), RoundPhase::NotStarted);

    engine.assign(&mut round, DoorId::new(2)).unwrap();
    assert_eq!(round.phase(), RoundPhase::PrizeAndPickAssigned);
    assert_eq!(round.initial_pick(), Some(DoorId::new(2)));
    assert!(round.opened().is_empty());

    assert!(matches!(
        engine.apply_decision(&mut round, true),
        Err(Error::WrongPhase { expected: RoundPhase::DoorsRevealed, .. })
    ));

    engine.reveal(&mut round).unwrap();
    assert_eq!(round.phase(), RoundPhase::DoorsRevealed);
    assert_eq!(round.opened().len(), 2);

    engine.apply_decision(&mut round, false).unwrap();
    assert_eq!(round.phase(), RoundPhase::DecisionApplied);

    engine.resolve(&mut round).unwrap();
    assert_eq!(round.phase(), RoundPhase::Resolved);
    assert!(engine.reveal(&mut round).is_err());
}

#[test]
fn test_small_door_counts_clamp() {
    let mut engine = RoundEngine::new(GameRng::new(3));
    for requested in 0..3 {
        let round = engine.start_round(requested).unwrap();
        assert_eq!(round.door_count(), 3);
        assert_eq!(round.opened().len(), 1);
    }
}

#[test]
fn test_start_round_with_rejects_missing_doors() {
    let mut engine = RoundEngine::new(GameRng::new(3));
    assert!(matches!(
        engine.start_round_with(3, DoorId::new(3), DoorId::new(0)),
        Err(Error::DoorOutOfRange { .. })
    ));
    assert!(matches!(
        engine.start_round_with(3, DoorId::new(0), DoorId::new(9)),
        Err(Error::DoorOutOfRange { .. })
    ));
}
