//! Beat map writer

use crate::format::BeatMap;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct BeatMapWriter {
    pretty: bool,
}

impl BeatMapWriter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Writer producing single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Write a beat map document, creating parent directories as needed
    pub fn write(&self, path: &Path, beat_map: &BeatMap) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create beat map file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, beat_map)?;
        } else {
            serde_json::to_writer(&mut writer, beat_map)?;
        }
        writer.flush()?;

        log::debug!(
            "Wrote {} notes to {}",
            beat_map.note_count(),
            path.display()
        );

        Ok(())
    }

    /// Render a beat map document to a string
    pub fn to_string(&self, beat_map: &BeatMap) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(beat_map)?
        } else {
            serde_json::to_string(beat_map)?
        };
        Ok(json)
    }
}

impl Default for BeatMapWriter {
    fn default() -> Self {
        Self::new()
    }
}
