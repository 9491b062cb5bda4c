//! Beat map document output

use crate::error::Result;
use beatmap_fmt::BeatMap;
use std::fs;
use std::path::Path;

/// Write the finished beat map as pretty JSON, creating parent directories
///
/// The document is serialized in full before the file is created, so a
/// failed run never leaves a truncated document behind.
pub fn write_beat_map(path: &Path, beat_map: &BeatMap) -> Result<()> {
    let json = serde_json::to_string_pretty(beat_map)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json)?;

    log::info!(
        "Saved beat map with {} notes to {}",
        beat_map.note_count(),
        path.display()
    );

    Ok(())
}
