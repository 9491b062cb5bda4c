//! Beat map document structures
//!
//! Field names are serialized in PascalCase (`Metadata`, `Notes`, `Time`, ...)
//! because the game client binds to those exact keys.

use serde::{Deserialize, Serialize};

/// Complete beat map document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeatMap {
    pub metadata: BeatMapMetadata,
    pub notes: Vec<NoteEvent>,
}

/// Descriptive header of a beat map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeatMapMetadata {
    pub title: String,
    pub artist: String,
    /// Difficulty label the notes were generated for
    pub difficulty: String,
    /// Track length in seconds
    pub duration: f64,
    /// Tempo truncated to whole beats per minute
    pub bpm: u32,
}

/// A single note the player has to hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NoteEvent {
    /// Hit time in seconds from the start of the track
    pub time: f64,
    pub lane: u8,
    /// Hold length in seconds; `None` for tap notes
    pub duration: Option<f64>,
}

impl NoteEvent {
    /// Create a tap note (no hold duration)
    pub fn tap(time: f64, lane: u8) -> Self {
        Self {
            time,
            lane,
            duration: None,
        }
    }

    pub fn is_tap(&self) -> bool {
        self.duration.is_none()
    }
}

impl BeatMap {
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Lane of every note, in note order
    pub fn lanes(&self) -> Vec<u8> {
        self.notes.iter().map(|n| n.lane).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> BeatMap {
        BeatMap {
            metadata: BeatMapMetadata {
                title: "Song".to_string(),
                artist: "Auto-detected".to_string(),
                difficulty: "Hard".to_string(),
                duration: 2.0,
                bpm: 120,
            },
            notes: vec![NoteEvent::tap(0.5, 0), NoteEvent::tap(0.75, 1)],
        }
    }

    #[test]
    fn test_serializes_pascal_case_keys() {
        let value = serde_json::to_value(sample_map()).unwrap();

        assert_eq!(value["Metadata"]["Title"], "Song");
        assert_eq!(value["Metadata"]["Artist"], "Auto-detected");
        assert_eq!(value["Metadata"]["Difficulty"], "Hard");
        assert_eq!(value["Metadata"]["Bpm"], 120);
        assert!(value["Metadata"]["Bpm"].is_u64());
        assert_eq!(value["Notes"][1]["Time"], 0.75);
        assert_eq!(value["Notes"][1]["Lane"], 1);
        assert!(value["Notes"][0]["Duration"].is_null());
    }

    #[test]
    fn test_tap_note_has_no_duration() {
        let note = NoteEvent::tap(1.25, 3);
        assert!(note.is_tap());
        assert_eq!(note.lane, 3);
    }

    #[test]
    fn test_parses_client_document() {
        let json = r#"{
            "Metadata": {"Title": "T", "Artist": "A", "Difficulty": "Easy", "Duration": 60.0, "Bpm": 95},
            "Notes": [{"Time": 1.5, "Lane": 2, "Duration": null}]
        }"#;

        let map: BeatMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.metadata.bpm, 95);
        assert_eq!(map.note_count(), 1);
        assert_eq!(map.lanes(), vec![2]);
        assert!(map.notes[0].is_tap());
    }
}
