//! Directory-backed beat map store
//!
//! Keeps one document per song identifier so a generated map can be reused
//! instead of re-analysing the audio.

use crate::format::BeatMap;
use crate::reader::BeatMapReader;
use crate::writer::BeatMapWriter;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Characters that are not allowed in file names on common platforms
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub struct BeatMapStore {
    base_dir: PathBuf,
    writer: BeatMapWriter,
}

impl BeatMapStore {
    /// Open a store rooted at `base_dir`, creating the directory if needed
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        std::fs::create_dir_all(&base_dir)
            .with_context(|| format!("Failed to create store directory: {}", base_dir.display()))?;

        Ok(Self {
            base_dir,
            writer: BeatMapWriter::new(),
        })
    }

    /// Path where the beat map for `song_id` lives
    pub fn path_for(&self, song_id: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", sanitize_song_id(song_id)))
    }

    /// Save a beat map and return the path it was written to
    pub fn save(&self, song_id: &str, beat_map: &BeatMap) -> Result<PathBuf> {
        let path = self.path_for(song_id);
        self.writer.write(&path, beat_map)?;
        log::info!("Stored beat map for '{}' at {}", song_id, path.display());
        Ok(path)
    }

    /// Load the beat map for `song_id`, or `None` if nothing is stored
    pub fn load(&self, song_id: &str) -> Result<Option<BeatMap>> {
        let path = self.path_for(song_id);
        if !path.exists() {
            return Ok(None);
        }
        BeatMapReader::read(&path).map(Some)
    }

    pub fn contains(&self, song_id: &str) -> bool {
        self.path_for(song_id).exists()
    }

    /// Delete the stored beat map; missing entries are ignored
    pub fn remove(&self, song_id: &str) -> Result<()> {
        let path = self.path_for(song_id);
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to delete beat map: {}", path.display()))?;
        }
        Ok(())
    }
}

/// Replace every character that cannot appear in a file name with `_`
pub fn sanitize_song_id(song_id: &str) -> String {
    song_id
        .chars()
        .map(|c| {
            if c.is_control() || INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}
