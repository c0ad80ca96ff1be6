//! Game rules: rounds, the host's reveal, and the engine tying them together.

mod engine;
mod reveal;
mod round;

pub use engine::RoundEngine;
pub use reveal::{OpenAllButOne, RevealPolicy};
pub use round::{Outcome, Round, RoundPhase};
