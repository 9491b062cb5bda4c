//! Generator settings file
//!
//! TOML configuration for the command line tool: analysis parameters,
//! default title and difficulty, and an optional beat map store directory.

use crate::assembly::DEFAULT_TITLE;
use crate::config::AnalysisConfig;
use crate::difficulty::RequestedDifficulty;
use crate::error::{BeatMapError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Values used when the caller does not provide them
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            difficulty: default_difficulty(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_difficulty() -> String {
    RequestedDifficulty::default().to_string()
}

/// Beat map store location
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory where generated maps are also cached; disabled when absent
    #[serde(default)]
    pub directory: Option<String>,
}

impl GeneratorSettings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BeatMapError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Parse and validate settings from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let settings: GeneratorSettings = toml::from_str(content)
            .map_err(|e| BeatMapError::config(format!("failed to parse TOML: {}", e)))?;
        settings.analysis.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = GeneratorSettings::parse("").unwrap();
        assert_eq!(settings.defaults.title, "Unknown");
        assert_eq!(settings.defaults.difficulty, "Normal");
        assert!(settings.store.directory.is_none());
        assert_eq!(settings.analysis, AnalysisConfig::default());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml_str = r#"
            [analysis]
            sample_rate = 44100
            max_bpm = 180.0

            [defaults]
            difficulty = "Hard"

            [store]
            directory = "./beatmaps"
        "#;

        let settings = GeneratorSettings::parse(toml_str).unwrap();
        assert_eq!(settings.analysis.sample_rate, 44100);
        assert_eq!(settings.analysis.max_bpm, 180.0);
        assert_eq!(settings.analysis.hop_size, 512);
        assert_eq!(settings.defaults.title, "Unknown");
        assert_eq!(settings.defaults.difficulty, "Hard");
        assert_eq!(settings.store.directory.as_deref(), Some("./beatmaps"));
    }

    #[test]
    fn test_invalid_analysis_section_is_rejected() {
        let toml_str = r#"
            [analysis]
            sample_rate = 0
        "#;
        assert!(matches!(
            GeneratorSettings::parse(toml_str),
            Err(BeatMapError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorSettings::load(Path::new("/nonexistent/bmgen.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
