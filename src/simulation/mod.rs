//! Batch simulations comparing the switch and stay strategies.
//!
//! ## Usage
//!
//! ```
//! use monty_hall::core::GameRng;
//! use monty_hall::simulation::{BatchRunner, Strategy};
//!
//! let mut runner = BatchRunner::new(GameRng::new(42));
//! let report = runner.compare(3, 1_000).unwrap();
//!
//! assert_eq!(report.switch.strategy, Strategy::Switch);
//! assert!(report.switch.wins > report.stay.wins);
//! ```

mod batch;

pub use batch::{BatchReport, BatchRunner, Strategy, StrategyResult};
