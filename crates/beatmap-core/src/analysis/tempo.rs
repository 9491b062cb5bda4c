//! Tempo estimation and beat tracking on the onset envelope

use crate::config::AnalysisConfig;

/// Centre of the log-normal tempo prior, in BPM
const PRIOR_BPM: f32 = 120.0;
/// Width of the tempo prior, in octaves
const PRIOR_OCTAVES: f32 = 1.0;

/// Estimate the beat period of an onset envelope, in frames
///
/// Scores every lag inside the configured BPM range by normalised
/// autocorrelation weighted with a log-normal prior around 120 BPM, then
/// refines the best lag with parabolic interpolation. Returns `None` when the
/// envelope carries no periodic energy.
pub fn estimate_period(envelope: &[f32], config: &AnalysisConfig) -> Option<f32> {
    let frame_rate = config.frame_rate();
    let min_lag = ((frame_rate * 60.0 / config.max_bpm).floor() as usize).max(1);
    let max_lag = ((frame_rate * 60.0 / config.min_bpm).ceil() as usize).min(envelope.len() / 2);

    // Need at least one interior lag with neighbours on both sides
    if min_lag + 2 > max_lag {
        return None;
    }

    let scores: Vec<f32> = (min_lag - 1..=max_lag + 1)
        .map(|lag| {
            let bpm = frame_rate * 60.0 / lag as f32;
            correlation_at_lag(envelope, lag) * tempo_prior(bpm)
        })
        .collect();

    // scores[i] belongs to lag `min_lag - 1 + i`; only interior lags compete
    let (best_idx, best_score) = scores[1..scores.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, &s)| (i + 1, s))
        .fold((0, 0.0f32), |best, cur| if cur.1 > best.1 { cur } else { best });

    if best_score <= 0.0 {
        return None;
    }

    // Parabolic refinement around the peak
    let (left, right) = (scores[best_idx - 1], scores[best_idx + 1]);
    let denominator = left - 2.0 * best_score + right;
    let offset = if denominator < 0.0 {
        (0.5 * (left - right) / denominator).clamp(-0.5, 0.5)
    } else {
        0.0
    };

    let lag = (min_lag - 1 + best_idx) as f32 + offset;
    log::debug!(
        "Tempo lag {:.2} frames (score {:.3}) -> {:.2} BPM",
        lag,
        best_score,
        frame_rate * 60.0 / lag
    );

    Some(lag)
}

/// Normalised autocorrelation at a lag
fn correlation_at_lag(envelope: &[f32], lag: usize) -> f32 {
    if lag == 0 || lag >= envelope.len() {
        return 0.0;
    }

    let mut correlation = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;

    for i in 0..envelope.len() - lag {
        correlation += envelope[i] * envelope[i + lag];
        norm_a += envelope[i] * envelope[i];
        norm_b += envelope[i + lag] * envelope[i + lag];
    }

    let norm = (norm_a * norm_b).sqrt();
    if norm > 0.0 {
        correlation / norm
    } else {
        0.0
    }
}

fn tempo_prior(bpm: f32) -> f32 {
    let octaves = (bpm / PRIOR_BPM).log2() / PRIOR_OCTAVES;
    (-0.5 * octaves * octaves).exp()
}

/// Place beats every `period` frames, aligned to the envelope
///
/// The starting phase is the offset whose beat grid collects the most onset
/// energy. Each following beat is predicted one period after the previous one
/// and snapped to the strongest frame within `beat_snap_window * period`.
pub fn track_beats(envelope: &[f32], period: f32, config: &AnalysisConfig) -> Vec<usize> {
    if envelope.is_empty() || period.is_nan() || period < 1.0 {
        return Vec::new();
    }

    let phase = best_phase(envelope, period);
    let window = (config.beat_snap_window * period).round() as usize;

    let mut beats: Vec<usize> = Vec::new();
    let mut predicted = phase as f32;

    while (predicted.round() as usize) < envelope.len() {
        let center = predicted.round() as usize;
        let lo = center.saturating_sub(window);
        let hi = (center + window).min(envelope.len() - 1);

        // Snap to the strongest frame near the prediction
        let snapped = (lo..=hi)
            .filter(|&i| envelope[i] > 0.0)
            .max_by(|&a, &b| envelope[a].total_cmp(&envelope[b]))
            .unwrap_or(center);

        // Keep beats strictly increasing
        if beats.last().map_or(true, |&last| snapped > last) {
            beats.push(snapped);
        }
        predicted = snapped as f32 + period;
    }

    beats
}

/// Grid offset in `[0, period)` frames collecting the most envelope energy
fn best_phase(envelope: &[f32], period: f32) -> usize {
    let steps = period.ceil() as usize;

    (0..steps)
        .map(|phase| {
            let mut energy = 0.0f32;
            let mut pos = phase as f32;
            while (pos.round() as usize) < envelope.len() {
                energy += envelope[pos.round() as usize];
                pos += period;
            }
            (phase, energy)
        })
        .fold((0, f32::NEG_INFINITY), |best, cur| if cur.1 > best.1 { cur } else { best })
        .0
}
