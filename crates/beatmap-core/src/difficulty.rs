//! Difficulty labels
//!
//! Two separate notions live here: the difficulty *estimated* from how dense
//! the beats are, which is descriptive only, and the difficulty *requested*
//! by the caller, which decides which timing events become notes.

use crate::error::{BeatMapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Beat densities strictly above this are estimated as Hard
pub const HARD_DENSITY_THRESHOLD: f64 = 2.5;
/// Beat densities strictly above this (and not Hard) are estimated as Medium
pub const MEDIUM_DENSITY_THRESHOLD: f64 = 1.5;

/// Difficulty inferred from beat density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatedDifficulty {
    Easy,
    Medium,
    Hard,
}

impl EstimatedDifficulty {
    /// Classify beats-per-second into a label
    pub fn from_density(beat_density: f64) -> Self {
        if beat_density > HARD_DENSITY_THRESHOLD {
            EstimatedDifficulty::Hard
        } else if beat_density > MEDIUM_DENSITY_THRESHOLD {
            EstimatedDifficulty::Medium
        } else {
            EstimatedDifficulty::Easy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EstimatedDifficulty::Easy => "Easy",
            EstimatedDifficulty::Medium => "Medium",
            EstimatedDifficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for EstimatedDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty the caller wants notes generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RequestedDifficulty {
    /// Beats only
    Easy,
    /// Onsets only
    #[default]
    Normal,
    /// Beats and onsets combined
    Hard,
}

impl RequestedDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestedDifficulty::Easy => "Easy",
            RequestedDifficulty::Normal => "Normal",
            RequestedDifficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for RequestedDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestedDifficulty {
    type Err = BeatMapError;

    /// Case-insensitive; anything other than easy/normal/hard is rejected
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(RequestedDifficulty::Easy),
            "normal" => Ok(RequestedDifficulty::Normal),
            "hard" => Ok(RequestedDifficulty::Hard),
            _ => Err(BeatMapError::InvalidDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_density_thresholds() {
        assert_eq!(EstimatedDifficulty::from_density(0.4), EstimatedDifficulty::Easy);
        assert_eq!(EstimatedDifficulty::from_density(1.5), EstimatedDifficulty::Easy);
        assert_eq!(EstimatedDifficulty::from_density(1.500001), EstimatedDifficulty::Medium);
        assert_eq!(EstimatedDifficulty::from_density(2.0), EstimatedDifficulty::Medium);
        assert_eq!(EstimatedDifficulty::from_density(2.5), EstimatedDifficulty::Medium);
        assert_eq!(EstimatedDifficulty::from_density(2.500001), EstimatedDifficulty::Hard);
        assert_eq!(EstimatedDifficulty::from_density(7.0), EstimatedDifficulty::Hard);
    }

    #[test]
    fn test_estimated_labels() {
        assert_eq!(EstimatedDifficulty::Medium.to_string(), "Medium");
        assert_eq!(EstimatedDifficulty::Hard.as_str(), "Hard");
    }

    #[test]
    fn test_parse_requested() {
        assert_eq!("Easy".parse::<RequestedDifficulty>().unwrap(), RequestedDifficulty::Easy);
        assert_eq!("normal".parse::<RequestedDifficulty>().unwrap(), RequestedDifficulty::Normal);
        assert_eq!(" HARD ".parse::<RequestedDifficulty>().unwrap(), RequestedDifficulty::Hard);
        assert_eq!(RequestedDifficulty::default(), RequestedDifficulty::Normal);
    }

    #[test]
    fn test_unknown_requested_is_rejected() {
        let err = "Medium".parse::<RequestedDifficulty>().unwrap_err();
        assert!(matches!(err, BeatMapError::InvalidDifficulty(ref s) if s == "Medium"));
        assert!("".parse::<RequestedDifficulty>().is_err());
    }
}
