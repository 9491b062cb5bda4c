//! Beatmap Core - rhythm game beat map generation
//!
//! Turns analysed audio (tempo, beats, onsets) into a lane-assigned beat map
//! for a four-lane tile game.

pub mod analysis;
pub mod assembly;
pub mod audio;
pub mod config;
pub mod difficulty;
pub mod document;
pub mod error;
pub mod features;
pub mod lanes;
pub mod pipeline;
pub mod selection;
pub mod settings;

pub use analysis::SpectralFluxExtractor;
pub use config::AnalysisConfig;
pub use difficulty::{EstimatedDifficulty, RequestedDifficulty};
pub use document::write_beat_map;
pub use error::{BeatMapError, Result};
pub use features::{AudioFeatures, FeatureDocument, FeatureExtractor, FeatureFile};
pub use lanes::LANES;
pub use pipeline::{build_beat_map, generate_beat_map, GenerationReport};
pub use settings::GeneratorSettings;

pub use beatmap_fmt::{BeatMap, BeatMapMetadata, NoteEvent};
