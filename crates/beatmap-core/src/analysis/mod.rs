//! Built-in feature extraction
//!
//! A small spectral-flux analyser: good enough to turn a song into a playable
//! map without external tools, not a replacement for a dedicated beat tracker.

mod onset;
mod spectrum;
mod tempo;

pub use onset::pick_onsets;
pub use spectrum::{compute_frames, SpectralFrames};
pub use tempo::{estimate_period, track_beats};

use crate::audio::decode_audio;
use crate::config::AnalysisConfig;
use crate::error::{BeatMapError, Result};
use crate::features::{AudioFeatures, FeatureExtractor};
use std::path::Path;

/// Decodes audio and derives features from its spectral flux
#[derive(Debug, Clone)]
pub struct SpectralFluxExtractor {
    config: AnalysisConfig,
}

impl SpectralFluxExtractor {
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyse mono samples at the configured sample rate
    pub fn analyze(&self, samples: &[f32]) -> Result<AudioFeatures> {
        let config = &self.config;

        if samples.is_empty() {
            return Err(BeatMapError::extraction("audio contains no samples"));
        }
        let duration = samples.len() as f64 / config.sample_rate as f64;

        if samples.len() < config.fft_size {
            return Err(BeatMapError::extraction(format!(
                "audio too short to analyse ({:.3}s)",
                duration
            )));
        }

        // Spectral flux envelope and per-frame centroids
        let frames = compute_frames(samples, config);
        let envelope = &frames.onset_envelope;
        log::debug!("Computed {} analysis frames", frames.num_frames());

        let period = estimate_period(envelope, config).ok_or_else(|| {
            BeatMapError::extraction("no rhythmic content detected (silent or too short)")
        })?;
        // Convert beat period in frames to BPM
        let tempo = config.frame_rate() as f64 * 60.0 / period as f64;

        // Frame k is centred on sample k * hop_size
        let to_seconds =
            |frame: usize| frame as f64 * config.hop_size as f64 / config.sample_rate as f64;
        let onset_times: Vec<f64> = pick_onsets(envelope, config)
            .into_iter()
            .map(to_seconds)
            .collect();
        let beat_times: Vec<f64> = track_beats(envelope, period, config)
            .into_iter()
            .map(to_seconds)
            .collect();

        log::info!(
            "Analysis: {:.2} BPM, {} beats, {} onsets",
            tempo,
            beat_times.len(),
            onset_times.len()
        );

        AudioFeatures::new(
            duration,
            tempo,
            beat_times,
            onset_times,
            frames.mean_centroid() as f64,
        )
    }
}

impl Default for SpectralFluxExtractor {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

impl FeatureExtractor for SpectralFluxExtractor {
    fn extract(&self, audio_path: &Path) -> Result<AudioFeatures> {
        // Decode to mono at the analysis rate
        let audio = decode_audio(audio_path, self.config.sample_rate)
            .map_err(|e| BeatMapError::extraction(format!("{:#}", e)))?;

        log::info!(
            "Decoded audio: {:.1}s, {} samples @ {}Hz",
            audio.duration_s(),
            audio.samples.len(),
            audio.sample_rate
        );

        self.analyze(&audio.samples)
    }
}
