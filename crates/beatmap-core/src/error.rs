//! Error type shared by the beat map pipeline

/// Result alias that carries [`BeatMapError`]
pub type Result<T> = std::result::Result<T, BeatMapError>;

#[derive(Debug, thiserror::Error)]
pub enum BeatMapError {
    /// Audio could not be decoded or produced unusable features
    #[error("feature extraction failed: {0}")]
    Extraction(String),

    #[error("invalid difficulty '{0}': expected one of Easy, Normal, Hard")]
    InvalidDifficulty(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BeatMapError {
    pub fn extraction<T: Into<String>>(msg: T) -> Self {
        Self::Extraction(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}
