//! Lane assignment

use beatmap_fmt::NoteEvent;

/// Playable lanes, in the order notes cycle through them
pub const LANES: [u8; 4] = [0, 1, 2, 3];

/// Lane for the note at `index` in the selected sequence
pub fn lane_for(index: usize) -> u8 {
    LANES[index % LANES.len()]
}

/// Turn note times into tap notes, cycling round-robin over the lanes
pub fn assign_lanes(times: &[f64]) -> Vec<NoteEvent> {
    times
        .iter()
        .enumerate()
        .map(|(i, &time)| NoteEvent::tap(time, lane_for(i)))
        .collect()
}
