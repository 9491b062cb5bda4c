//! Timing-event selection
//!
//! Picks the timestamps that become notes for a requested difficulty.

use crate::difficulty::RequestedDifficulty;
use crate::features::AudioFeatures;
use std::cmp::Ordering;

/// Select note times from the extracted features
pub fn select_times(features: &AudioFeatures, difficulty: RequestedDifficulty) -> Vec<f64> {
    select_from(features.beat_times(), features.onset_times(), difficulty)
}

/// Select note times from raw beat and onset timelines
///
/// Both inputs must be sorted ascending.
pub fn select_from(
    beat_times: &[f64],
    onset_times: &[f64],
    difficulty: RequestedDifficulty,
) -> Vec<f64> {
    match difficulty {
        RequestedDifficulty::Easy => beat_times.to_vec(),
        RequestedDifficulty::Normal => onset_times.to_vec(),
        RequestedDifficulty::Hard => merge_unique(beat_times, onset_times),
    }
}

/// Sorted union of two ascending timelines
///
/// Only bit-identical timestamps collapse into one; values a few
/// milliseconds apart stay as separate events.
pub fn merge_unique(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        let next = match a[i].partial_cmp(&b[j]).unwrap_or(Ordering::Equal) {
            Ordering::Less => {
                i += 1;
                a[i - 1]
            }
            Ordering::Greater => {
                j += 1;
                b[j - 1]
            }
            Ordering::Equal => {
                i += 1;
                j += 1;
                a[i - 1]
            }
        };
        push_unique(&mut merged, next);
    }

    for &t in a[i..].iter().chain(&b[j..]) {
        push_unique(&mut merged, t);
    }

    merged
}

fn push_unique(merged: &mut Vec<f64>, t: f64) {
    if merged.last() != Some(&t) {
        merged.push(t);
    }
}
