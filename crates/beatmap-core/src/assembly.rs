//! Beat map assembly

use crate::difficulty::RequestedDifficulty;
use crate::features::AudioFeatures;
use crate::lanes::assign_lanes;
use beatmap_fmt::{BeatMap, BeatMapMetadata};

/// Artist written into every generated map
pub const AUTO_ARTIST: &str = "Auto-detected";

/// Title used when the caller has none
pub const DEFAULT_TITLE: &str = "Unknown";

/// Build the document for the selected note times
///
/// The difficulty label is the requested one; the density estimate never
/// reaches the document.
pub fn assemble(
    title: &str,
    difficulty: RequestedDifficulty,
    features: &AudioFeatures,
    times: &[f64],
) -> BeatMap {
    BeatMap {
        metadata: BeatMapMetadata {
            title: title.to_string(),
            artist: AUTO_ARTIST.to_string(),
            difficulty: difficulty.to_string(),
            duration: features.duration(),
            bpm: whole_bpm(features.tempo()),
        },
        notes: assign_lanes(times),
    }
}

/// Tempo truncated toward zero
pub fn whole_bpm(tempo: f64) -> u32 {
    tempo.trunc() as u32
}
