//! Run summaries printed after generation

use beatmap_core::GenerationReport;
use std::path::Path;

/// Human-readable summary, one line per fact
pub fn summary_lines(report: &GenerationReport, output_path: &Path) -> Vec<String> {
    vec![
        format!("Tempo: {:.2} BPM", report.tempo),
        format!("Duration: {:.2} seconds", report.duration),
        format!("Beats detected: {}", report.beat_count),
        format!("Onsets detected: {}", report.onset_count),
        format!("Estimated difficulty: {}", report.estimated_difficulty),
        format!(
            "Notes: {} ({})",
            report.note_count(),
            report.requested_difficulty
        ),
        format!("Beat map saved to: {}", output_path.display()),
    ]
}

/// Print the summary to stdout
pub fn print_summary(report: &GenerationReport, output_path: &Path) {
    for line in summary_lines(report, output_path) {
        println!("{}", line);
    }
}

/// Summary as a JSON object, for scripted callers
pub fn json_summary(report: &GenerationReport, output_path: &Path) -> serde_json::Value {
    serde_json::json!({
        "status": "success",
        "output_file": output_path.display().to_string(),
        "title": report.beat_map.metadata.title,
        "tempo": report.tempo,
        "bpm": report.beat_map.metadata.bpm,
        "duration_seconds": report.duration,
        "beat_count": report.beat_count,
        "onset_count": report.onset_count,
        "estimated_difficulty": report.estimated_difficulty.as_str(),
        "difficulty": report.requested_difficulty.as_str(),
        "num_notes": report.note_count(),
    })
}

/// Print the JSON summary to stdout
pub fn print_json_summary(report: &GenerationReport, output_path: &Path) {
    match serde_json::to_string_pretty(&json_summary(report, output_path)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing summary: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beatmap_core::{build_beat_map, AudioFeatures, RequestedDifficulty};

    fn sample_report() -> GenerationReport {
        let features = AudioFeatures::new(
            2.0,
            120.4,
            vec![0.5, 1.0, 1.5],
            vec![0.5, 0.75, 1.0, 1.25],
            0.0,
        )
        .unwrap();
        build_beat_map(&features, "Song", RequestedDifficulty::Hard)
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&sample_report(), Path::new("out/song.json"));

        assert_eq!(lines[0], "Tempo: 120.40 BPM");
        assert_eq!(lines[1], "Duration: 2.00 seconds");
        assert_eq!(lines[2], "Beats detected: 3");
        assert_eq!(lines[4], "Estimated difficulty: Easy");
        assert_eq!(lines[5], "Notes: 5 (Hard)");
        assert!(lines[6].ends_with("song.json"));
    }

    #[test]
    fn test_json_summary() {
        let value = json_summary(&sample_report(), Path::new("song.json"));

        assert_eq!(value["status"], "success");
        assert_eq!(value["bpm"], 120);
        assert_eq!(value["num_notes"], 5);
        assert_eq!(value["difficulty"], "Hard");
        assert_eq!(value["estimated_difficulty"], "Easy");
    }
}
