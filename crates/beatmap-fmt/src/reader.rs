//! Beat map reader

use crate::format::BeatMap;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct BeatMapReader;

impl BeatMapReader {
    /// Read a beat map document
    pub fn read(path: &Path) -> Result<BeatMap> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open beat map file: {}", path.display()))?;

        let beat_map: BeatMap = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid beat map document: {}", path.display()))?;

        Ok(beat_map)
    }

    /// Parse a beat map document from a string
    pub fn parse(json: &str) -> Result<BeatMap> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{BeatMapMetadata, NoteEvent};
    use crate::writer::BeatMapWriter;

    fn sample_map() -> BeatMap {
        BeatMap {
            metadata: BeatMapMetadata {
                title: "Round Trip".to_string(),
                artist: "Auto-detected".to_string(),
                difficulty: "Normal".to_string(),
                duration: 12.5,
                bpm: 128,
            },
            notes: (0..6)
                .map(|i| NoteEvent::tap(i as f64 * 0.25, (i % 4) as u8))
                .collect(),
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("map.json");

        let original = sample_map();
        BeatMapWriter::new().write(&path, &original).unwrap();

        let loaded = BeatMapReader::read(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = BeatMapWriter::compact().to_string(&sample_map()).unwrap();
        assert!(!json.contains('\n'));

        let parsed = BeatMapReader::parse(&json).unwrap();
        assert_eq!(parsed.lanes(), vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = BeatMapReader::read(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open beat map file"));
    }
}
