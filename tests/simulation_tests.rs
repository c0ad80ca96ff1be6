//! Statistical checks for batch simulations.

use monty_hall::core::GameRng;
use monty_hall::simulation::{BatchRunner, Strategy};

/// Three doors, 100k trials: switch near 2/3, stay near 1/3.
#[test]
fn test_three_door_win_rates() {
    let mut runner = BatchRunner::new(GameRng::new(42));
    let report = runner.compare(3, 100_000).unwrap();

    assert_eq!(report.switch.trials, 100_000);
    assert_eq!(report.stay.trials, 100_000);
    assert!((report.switch.win_rate() - 2.0 / 3.0).abs() < 0.02, "switch {}", report.switch.win_rate());
    assert!((report.stay.win_rate() - 1.0 / 3.0).abs() < 0.02, "stay {}", report.stay.win_rate());
}

/// n doors: switch near (n-1)/n, stay near 1/n.
#[test]
fn test_n_door_win_rates() {
    let mut runner = BatchRunner::new(GameRng::new(2024));
    for doors in [4usize, 5, 10] {
        let report = runner.compare(doors, 20_000).unwrap();
        let n = doors as f64;

        assert!((report.switch.win_rate() - (n - 1.0) / n).abs() < 0.02);
        assert!((report.stay.win_rate() - 1.0 / n).abs() < 0.02);
    }
}

#[test]
fn test_run_batch_single_strategy() {
    let mut runner = BatchRunner::new(GameRng::new(9));
    let result = runner.run_batch(3, 1_000, Strategy::Stay).unwrap();

    assert_eq!(result.strategy, Strategy::Stay);
    assert_eq!(result.trials, 1_000);
    assert!(result.wins <= result.trials);
    assert_eq!(result.wins + result.losses(), result.trials);
}

#[test]
fn test_same_seed_same_report() {
    let report1 = BatchRunner::new(GameRng::new(11)).compare(5, 500).unwrap();
    let report2 = BatchRunner::new(GameRng::new(11)).compare(5, 500).unwrap();
    assert_eq!(report1, report2);
}
