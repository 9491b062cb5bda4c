//! Sample rate conversion by linear interpolation

/// Resample mono audio from `from_rate` to `to_rate`
///
/// Output length is `ceil(len * to_rate / from_rate)`.
pub fn resample_to_target(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() || from_rate == 0 || to_rate == 0 {
        return samples.to_vec();
    }

    let step = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / step).ceil() as usize;

    (0..output_len)
        .map(|i| interpolate(samples, i as f64 * step))
        .collect()
}

/// Value at fractional position `pos`, which must be below `samples.len()`
fn interpolate(samples: &[f32], pos: f64) -> f32 {
    let idx = (pos.floor() as usize).min(samples.len() - 1);
    let frac = (pos - idx as f64) as f32;
    let left = samples[idx];
    let right = samples.get(idx + 1).copied().unwrap_or(left);
    left + (right - left) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_rate_is_identity() {
        let samples = vec![0.1, -0.2, 0.3];
        assert_eq!(resample_to_target(&samples, 22050, 22050), samples);
    }

    #[test]
    fn test_downsample_halves_length() {
        let samples: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let out = resample_to_target(&samples, 44100, 22050);
        assert_eq!(out.len(), 500);
        assert!((out[10] - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_and_zero_rate() {
        assert!(resample_to_target(&[], 44100, 22050).is_empty());
        assert_eq!(resample_to_target(&[0.5], 0, 22050), vec![0.5]);
    }

    #[test]
    fn test_upsample_interpolates() {
        let out = resample_to_target(&[0.0, 1.0], 1, 2);
        assert_eq!(out.len(), 4);
        assert!((out[1] - 0.5).abs() < 1e-6);
    }
}
