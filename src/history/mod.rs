//! Persisted history of played rounds.
//!
//! Only interactive rounds are recorded; simulation batches report their
//! totals on screen and leave no history.

mod entry;
mod store;

pub use entry::{HistoryEntry, Mode};
pub use store::{FileHistory, HistoryStore, MemoryHistory};
