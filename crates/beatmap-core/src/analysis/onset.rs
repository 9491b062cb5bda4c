//! Onset peak picking

use crate::config::AnalysisConfig;

/// Find onset frames in a normalised onset envelope
///
/// A frame is an onset when it is a local maximum above an adaptive
/// threshold (`mean + k * std_dev`, floored at `min_onset_strength`) and at
/// least `min_onset_interval_s` after the previous onset.
pub fn pick_onsets(envelope: &[f32], config: &AnalysisConfig) -> Vec<usize> {
    if envelope.len() < 3 {
        return Vec::new();
    }

    // Adaptive threshold from envelope statistics
    let mean: f32 = envelope.iter().sum::<f32>() / envelope.len() as f32;
    let variance: f32 =
        envelope.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / envelope.len() as f32;
    let threshold = (mean + config.onset_threshold * variance.sqrt()).max(config.min_onset_strength);

    // Minimum spacing in frames
    let min_distance = ((config.min_onset_interval_s * config.frame_rate()) as usize).max(1);

    let mut peaks: Vec<usize> = Vec::new();
    for i in 1..envelope.len() - 1 {
        let is_peak = envelope[i] > threshold
            && envelope[i] > envelope[i - 1]
            && envelope[i] >= envelope[i + 1];
        let spaced = peaks.last().map_or(true, |&last| i - last >= min_distance);

        if is_peak && spaced {
            peaks.push(i);
        }
    }

    peaks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse_envelope(len: usize, positions: &[usize]) -> Vec<f32> {
        let mut env = vec![0.0; len];
        for &p in positions {
            env[p] = 1.0;
            env[p + 1] = 0.4;
        }
        env
    }

    #[test]
    fn test_picks_isolated_peaks() {
        let config = AnalysisConfig::default();
        let env = impulse_envelope(200, &[10, 50, 90, 130]);
        assert_eq!(pick_onsets(&env, &config), vec![10, 50, 90, 130]);
    }

    #[test]
    fn test_enforces_minimum_spacing() {
        let config = AnalysisConfig {
            min_onset_interval_s: 0.2,
            ..Default::default()
        };
        // 0.2s is ~8 frames at the default frame rate
        let env = impulse_envelope(100, &[10, 14, 40]);
        assert_eq!(pick_onsets(&env, &config), vec![10, 40]);
    }

    #[test]
    fn test_flat_envelope_has_no_onsets() {
        let config = AnalysisConfig::default();
        assert!(pick_onsets(&[0.0; 50], &config).is_empty());
        assert!(pick_onsets(&[0.5, 0.5], &config).is_empty());
    }
}
