//! Audio decoding and resampling
//!
//! WAV, MP3, FLAC and OGG go through dedicated pure Rust decoders; other
//! containers (MP4/M4A, AAC, MKV/WebM) fall back to Symphonia.

mod container;
mod decoder;
mod resample;

pub use container::decode_container;
pub use decoder::{decode_audio, AudioData};
pub use resample::resample_to_target;

use std::path::Path;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    Flac,
    Ogg,

    // Decoded through Symphonia
    Mp4,
    Aac,
    Mkv,

    Unknown,
}

impl AudioFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("wav") | Some("wave") => AudioFormat::Wav,
            Some("mp3") => AudioFormat::Mp3,
            Some("flac") => AudioFormat::Flac,
            Some("ogg") | Some("oga") => AudioFormat::Ogg,

            Some("mp4") | Some("m4a") => AudioFormat::Mp4,
            Some("aac") => AudioFormat::Aac,
            Some("mkv") | Some("mka") | Some("webm") => AudioFormat::Mkv,

            _ => AudioFormat::Unknown,
        }
    }

    /// Whether decoding goes through Symphonia
    pub fn is_container(&self) -> bool {
        matches!(self, AudioFormat::Mp4 | AudioFormat::Aac | AudioFormat::Mkv)
    }
}
