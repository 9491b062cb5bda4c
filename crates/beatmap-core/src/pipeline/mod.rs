//! Beat map generation pipeline
//!
//! Extraction, difficulty estimation, note selection, lane assignment and
//! document assembly, run start to finish for one track.

use crate::assembly::assemble;
use crate::difficulty::{EstimatedDifficulty, RequestedDifficulty};
use crate::error::Result;
use crate::features::{AudioFeatures, FeatureExtractor};
use crate::selection::select_times;
use beatmap_fmt::BeatMap;
use std::path::Path;


/// Generated map plus the analysis details worth showing to an operator
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub beat_map: BeatMap,
    /// Informational only; the map carries the requested difficulty
    pub estimated_difficulty: EstimatedDifficulty,
    pub requested_difficulty: RequestedDifficulty,
    pub tempo: f64,
    pub duration: f64,
    pub beat_count: usize,
    pub onset_count: usize,
}

impl GenerationReport {
    pub fn note_count(&self) -> usize {
        self.beat_map.note_count()
    }
}

/// Build a beat map from features that were already extracted
pub fn build_beat_map(
    features: &AudioFeatures,
    title: &str,
    difficulty: RequestedDifficulty,
) -> GenerationReport {
    let estimated = EstimatedDifficulty::from_density(features.beat_density());
    log::info!(
        "Beat density {:.2}/s, estimated difficulty {}",
        features.beat_density(),
        estimated
    );

    let times = select_times(features, difficulty);
    log::info!(
        "Selected {} note times for {} ({} beats, {} onsets)",
        times.len(),
        difficulty,
        features.beat_times().len(),
        features.onset_times().len()
    );

    let beat_map = assemble(title, difficulty, features, &times);

    GenerationReport {
        beat_map,
        estimated_difficulty: estimated,
        requested_difficulty: difficulty,
        tempo: features.tempo(),
        duration: features.duration(),
        beat_count: features.beat_times().len(),
        onset_count: features.onset_times().len(),
    }
}

/// Extract features from an audio file and build its beat map
pub fn generate_beat_map(
    extractor: &dyn FeatureExtractor,
    audio_path: &Path,
    title: &str,
    difficulty: RequestedDifficulty,
) -> Result<GenerationReport> {
    log::info!("Processing: {}", audio_path.display());

    let features = extractor.extract(audio_path)?;
    log::info!(
        "Extracted features: {:.1}s, {:.2} BPM, spectral centroid {:.0} Hz",
        features.duration(),
        features.tempo(),
        features.spectral_centroid()
    );

    Ok(build_beat_map(&features, title, difficulty))
}
