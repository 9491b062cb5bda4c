//! Parameters for the built-in audio analysis
//!
//! Defaults follow the usual librosa settings (22.05 kHz, 2048-point FFT,
//! 512-sample hop).

use crate::error::{BeatMapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    // Audio processing
    pub sample_rate: u32,
    pub fft_size: usize,
    pub hop_size: usize,

    // Tempo search range
    pub min_bpm: f32,
    pub max_bpm: f32,

    // Onset picking
    /// Peaks must exceed `mean + onset_threshold * std_dev` of the envelope
    pub onset_threshold: f32,
    /// Absolute floor for the normalised envelope threshold
    pub min_onset_strength: f32,
    /// Minimum spacing between two onsets, in seconds
    pub min_onset_interval_s: f32,

    // Beat tracking
    /// Search window around each predicted beat, as a fraction of the beat period
    pub beat_snap_window: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050,
            fft_size: 2048,
            hop_size: 512,

            min_bpm: 60.0,
            max_bpm: 200.0,

            onset_threshold: 0.5,
            min_onset_strength: 0.1,
            min_onset_interval_s: 0.05,

            beat_snap_window: 0.1,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(BeatMapError::config("sample_rate must be > 0"));
        }
        if self.hop_size == 0 || self.fft_size < 2 {
            return Err(BeatMapError::config("fft_size must be >= 2 and hop_size > 0"));
        }
        if self.hop_size > self.fft_size {
            return Err(BeatMapError::config("hop_size must not exceed fft_size"));
        }
        if !(self.min_bpm > 0.0 && self.min_bpm < self.max_bpm) {
            return Err(BeatMapError::config("min_bpm must be > 0 and < max_bpm"));
        }
        if !(0.0..0.5).contains(&self.beat_snap_window) {
            return Err(BeatMapError::config("beat_snap_window must be in [0, 0.5)"));
        }
        if self.min_onset_interval_s < 0.0 {
            return Err(BeatMapError::config("min_onset_interval_s must be >= 0"));
        }
        Ok(())
    }

    /// Envelope frames per second
    pub fn frame_rate(&self) -> f32 {
        self.sample_rate as f32 / self.hop_size as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.frame_rate() - 43.066).abs() < 0.01);
    }

    #[test]
    fn test_rejects_inverted_bpm_range() {
        let config = AnalysisConfig {
            min_bpm: 180.0,
            max_bpm: 90.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BeatMapError::Config(_))));
    }

    #[test]
    fn test_rejects_hop_larger_than_frame() {
        let config = AnalysisConfig {
            fft_size: 256,
            hop_size: 512,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
