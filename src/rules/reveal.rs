//! Host reveal policy.
//!
//! After the player picks, the host opens every losing door except one.
//! Whatever the door count, exactly one closed alternative remains, and
//! that door is where a switching player moves.

use crate::core::{DoorId, DoorPicker, OpenedDoors};

/// Decides which doors the host opens.
pub trait RevealPolicy {
    /// Choose the doors to open for a round.
    ///
    /// Must never open `prize` or `picked`.
    fn reveal(
        &self,
        door_count: usize,
        prize: DoorId,
        picked: DoorId,
        picker: &mut dyn DoorPicker,
    ) -> OpenedDoors;
}

/// Open all losing doors but one.
///
/// Candidates are the doors that are neither the prize nor the pick. They
/// are shuffled and the first `door_count - 2` are opened, so every valid
/// subset is equally likely. When the player picked the prize there is one
/// spare candidate and it stays closed; otherwise every candidate opens.
///
/// Requires `door_count >= 3`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenAllButOne;

impl RevealPolicy for OpenAllButOne {
    fn reveal(
        &self,
        door_count: usize,
        prize: DoorId,
        picked: DoorId,
        picker: &mut dyn DoorPicker,
    ) -> OpenedDoors {
        let mut candidates: OpenedDoors = DoorId::all(door_count)
            .filter(|&door| door != prize && door != picked)
            .collect();

        picker.shuffle_doors(&mut candidates);
        candidates.truncate(door_count.saturating_sub(2));
        candidates.sort_unstable();
        candidates
    }
}
