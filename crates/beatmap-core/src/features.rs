//! Audio features consumed by the beat map builder
//!
//! Features come from a [`FeatureExtractor`]. The builder only relies on the
//! invariants checked by [`AudioFeatures::new`].

use crate::error::{BeatMapError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Validated analysis results for one track
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFeatures {
    duration: f64,
    tempo: f64,
    beat_times: Vec<f64>,
    onset_times: Vec<f64>,
    spectral_centroid: f64,
}

impl AudioFeatures {
    /// Build a feature set, rejecting degenerate or malformed analysis output
    pub fn new(
        duration: f64,
        tempo: f64,
        beat_times: Vec<f64>,
        onset_times: Vec<f64>,
        spectral_centroid: f64,
    ) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(BeatMapError::extraction(format!(
                "audio has no usable duration ({duration}s)"
            )));
        }
        if !tempo.is_finite() || tempo <= 0.0 {
            return Err(BeatMapError::extraction(format!(
                "no tempo detected ({tempo} BPM)"
            )));
        }
        check_timeline("beat", &beat_times)?;
        check_timeline("onset", &onset_times)?;

        Ok(Self {
            duration,
            tempo,
            beat_times,
            onset_times,
            spectral_centroid,
        })
    }

    /// Track length in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Tempo in beats per minute
    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    pub fn beat_times(&self) -> &[f64] {
        &self.beat_times
    }

    pub fn onset_times(&self) -> &[f64] {
        &self.onset_times
    }

    /// Mean spectral centroid in Hz
    pub fn spectral_centroid(&self) -> f64 {
        self.spectral_centroid
    }

    /// Beats per second over the whole track
    pub fn beat_density(&self) -> f64 {
        self.beat_times.len() as f64 / self.duration
    }
}

/// Timestamps must be finite, non-negative and strictly increasing
fn check_timeline(kind: &str, times: &[f64]) -> Result<()> {
    if let Some(t) = times.iter().find(|t| !t.is_finite() || **t < 0.0) {
        return Err(BeatMapError::extraction(format!(
            "invalid {kind} timestamp {t}"
        )));
    }
    if let Some(pair) = times.windows(2).find(|w| w[1] <= w[0]) {
        return Err(BeatMapError::extraction(format!(
            "{kind} timestamps not strictly increasing ({} then {})",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

/// Source of [`AudioFeatures`] for an audio file
pub trait FeatureExtractor {
    fn extract(&self, audio_path: &Path) -> Result<AudioFeatures>;
}

/// On-disk analysis document, as written by external analysis scripts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureDocument {
    pub duration: f64,
    pub tempo: f64,
    pub beat_times: Vec<f64>,
    pub onset_times: Vec<f64>,
    #[serde(default)]
    pub spectral_centroid: f64,
}

impl TryFrom<FeatureDocument> for AudioFeatures {
    type Error = BeatMapError;

    fn try_from(doc: FeatureDocument) -> Result<Self> {
        AudioFeatures::new(
            doc.duration,
            doc.tempo,
            doc.beat_times,
            doc.onset_times,
            doc.spectral_centroid,
        )
    }
}

/// Reads precomputed features from a JSON analysis document
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureFile;

impl FeatureExtractor for FeatureFile {
    fn extract(&self, audio_path: &Path) -> Result<AudioFeatures> {
        let file = File::open(audio_path).map_err(|e| {
            BeatMapError::extraction(format!(
                "failed to open feature file {}: {}",
                audio_path.display(),
                e
            ))
        })?;

        let doc: FeatureDocument = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            BeatMapError::extraction(format!(
                "malformed feature file {}: {}",
                audio_path.display(),
                e
            ))
        })?;

        log::info!(
            "Loaded features from {}: {} beats, {} onsets",
            audio_path.display(),
            doc.beat_times.len(),
            doc.onset_times.len()
        );

        AudioFeatures::try_from(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_beat_density() {
        let features =
            AudioFeatures::new(2.0, 120.0, vec![0.5, 1.0, 1.5], vec![0.5], 0.0).unwrap();
        assert_relative_eq!(features.beat_density(), 1.5);
    }

    #[test]
    fn test_zero_duration_is_extraction_error() {
        let err = AudioFeatures::new(0.0, 120.0, vec![], vec![], 0.0).unwrap_err();
        assert!(matches!(err, BeatMapError::Extraction(_)));
    }

    #[test]
    fn test_rejects_missing_tempo() {
        let err = AudioFeatures::new(10.0, 0.0, vec![1.0], vec![1.0], 0.0).unwrap_err();
        assert!(matches!(err, BeatMapError::Extraction(_)));
    }

    #[test]
    fn test_rejects_unsorted_or_negative_times() {
        assert!(AudioFeatures::new(5.0, 100.0, vec![1.0, 1.0], vec![], 0.0).is_err());
        assert!(AudioFeatures::new(5.0, 100.0, vec![], vec![2.0, 1.0], 0.0).is_err());
        assert!(AudioFeatures::new(5.0, 100.0, vec![-0.1], vec![], 0.0).is_err());
        assert!(AudioFeatures::new(5.0, 100.0, vec![], vec![f64::NAN], 0.0).is_err());
    }

    #[test]
    fn test_feature_file_accepts_script_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "duration": 2.0,
                "tempo": 120.4,
                "beat_times": [0.5, 1.0, 1.5],
                "onset_times": [0.5, 0.75, 1.0, 1.25],
                "difficulty": "Easy",
                "beat_count": 3
            }}"#
        )
        .unwrap();

        let features = FeatureFile.extract(file.path()).unwrap();
        assert_relative_eq!(features.tempo(), 120.4);
        assert_eq!(features.beat_times().len(), 3);
        assert_eq!(features.onset_times().len(), 4);
        assert_eq!(features.spectral_centroid(), 0.0);
    }

    #[test]
    fn test_feature_file_zero_duration() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"duration": 0.0, "tempo": 120.0, "beat_times": [], "onset_times": []}}"#
        )
        .unwrap();

        let err = FeatureFile.extract(file.path()).unwrap_err();
        assert!(matches!(err, BeatMapError::Extraction(_)));
    }

    #[test]
    fn test_feature_file_missing() {
        let err = FeatureFile
            .extract(Path::new("/nonexistent/features.json"))
            .unwrap_err();
        assert!(matches!(err, BeatMapError::Extraction(_)));
    }

    #[test]
    fn test_document_keeps_centroid() {
        let doc: FeatureDocument = serde_json::from_str(
            r#"{"duration": 3.0, "tempo": 98.0, "beat_times": [0.5, 1.25],
                "onset_times": [0.25, 0.5, 0.75], "spectral_centroid": 1500.0}"#,
        )
        .unwrap();

        let features = AudioFeatures::try_from(doc).unwrap();
        assert_eq!(features.spectral_centroid(), 1500.0);
        assert_eq!(features.beat_times(), &[0.5, 1.25]);
    }
}
