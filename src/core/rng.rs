//! Random door selection.
//!
//! ## Key Features
//!
//! - **Injectable**: Engines take any `DoorPicker`, so tests can script draws
//! - **Deterministic**: Same seed produces identical rounds
//! - **Forkable**: Independent streams for interactive play and batches
//!
//! ## Usage
//!
//! ```
//! use monty_hall::core::{DoorPicker, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let door = rng.pick_door(3);
//! assert!(door.index() < 3);
//!
//! // Same seed, same door
//! let mut rng2 = GameRng::new(42);
//! assert_eq!(rng2.pick_door(3), door);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::DoorId;

/// Source of random door choices.
///
/// `pick_door` must be uniform over `[0, door_count)` and independent
/// across calls. Callers guarantee `door_count >= 1`.
pub trait DoorPicker {
    /// Pick a door uniformly at random.
    fn pick_door(&mut self, door_count: usize) -> DoorId;

    /// Shuffle doors in place, uniformly over all permutations.
    fn shuffle_doors(&mut self, doors: &mut [DoorId]);
}

/// Seeded RNG for door draws.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl DoorPicker for GameRng {
    fn pick_door(&mut self, door_count: usize) -> DoorId {
        DoorId::new(self.gen_range_usize(0..door_count))
    }

    fn shuffle_doors(&mut self, doors: &mut [DoorId]) {
        use rand::seq::SliceRandom;
        doors.shuffle(&mut self.inner);
    }
}

/// Picker that replays a fixed list of doors.
///
/// Draws cycle through `doors`, reduced modulo the requested door count.
/// Shuffles leave the slice untouched, so reveals open the lowest-numbered
/// candidates. Used to pin rounds to a known prize and pick.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
    doors: Vec<DoorId>,
    next: usize,
}

impl ScriptedPicker {
    /// Create a picker that replays `doors` in order.
    pub fn new(doors: impl IntoIterator<Item = DoorId>) -> Self {
        Self {
            doors: doors.into_iter().collect(),
            next: 0,
        }
    }
}

impl DoorPicker for ScriptedPicker {
    fn pick_door(&mut self, door_count: usize) -> DoorId {
        if self.doors.is_empty() {
            return DoorId::new(0);
        }
        let door = self.doors[self.next % self.doors.len()];
        self.next += 1;
        DoorId::new(door.index() % door_count)
    }

    fn shuffle_doors(&mut self, _doors: &mut [DoorId]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick_door(10), rng2.pick_door(10));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_pick_door_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.pick_door(3).index() < 3);
        }
    }

    #[test]
    fn test_pick_door_covers_every_door() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rng.pick_door(5).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_scripted_picker_cycles() {
        let mut picker = ScriptedPicker::new([DoorId::new(0), DoorId::new(4)]);
        assert_eq!(picker.pick_door(10), DoorId::new(0));
        assert_eq!(picker.pick_door(10), DoorId::new(4));
        assert_eq!(picker.pick_door(10), DoorId::new(0));
        // Reduced into range
        assert_eq!(picker.pick_door(3), DoorId::new(1));

        let mut doors: Vec<_> = DoorId::all(4).collect();
        picker.shuffle_doors(&mut doors);
        assert_eq!(doors, DoorId::all(4).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_doors() {
        let mut rng = GameRng::new(42);
        let mut doors: Vec<_> = DoorId::all(10).collect();
        let original = doors.clone();

        rng.shuffle_doors(&mut doors);

        // Same doors, different order (very likely)
        assert_ne!(doors, original);
        doors.sort();
        assert_eq!(doors, original);
    }
}
