//! Read/write ladder JSON files.
//!
//! Ladder JSON is the "portable" representation of a generated ladder:
//! - the config that produced it (template-agnostic)
//! - the resolved scale (mode + effective bounds)
//! - precomputed milestones, dense curve samples, and axis labels
//!
//! The schema is defined by `domain::LadderFile` and versioned by `format`,
//! so `ladder plot -f` can re-render a saved file without recomputing.

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::app::pipeline::LadderPreview;
use crate::domain::LadderFile;
use crate::error::AppError;

/// Current ladder JSON schema version.
pub const LADDER_FORMAT: u32 = 1;

/// Write a ladder JSON file.
pub fn write_ladder_json(path: &Path, preview: &LadderPreview) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create ladder JSON '{}': {e}", path.display())))?;

    let ladder = LadderFile {
        tool: "ladder".to_string(),
        format: LADDER_FORMAT,
        created: Local::now().date_naive(),
        config: preview.config.clone(),
        scale: preview.scale,
        milestones: preview.milestones.clone(),
        curve: preview.curve.clone(),
        axis_labels: preview.axis_labels.clone(),
    };

    serde_json::to_writer_pretty(file, &ladder)
        .map_err(|e| AppError::usage(format!("Failed to write ladder JSON: {e}")))?;

    Ok(())
}

/// Read a ladder JSON file.
pub fn read_ladder_json(path: &Path) -> Result<LadderFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open ladder JSON '{}': {e}", path.display())))?;
    let ladder: LadderFile =
        serde_json::from_reader(file).map_err(|e| AppError::usage(format!("Invalid ladder JSON: {e}")))?;

    if ladder.format != LADDER_FORMAT {
        return Err(AppError::usage(format!(
            "Unsupported ladder format {} in '{}' (expected {LADDER_FORMAT}).",
            ladder.format,
            path.display()
        )));
    }

    Ok(ladder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_preview;
    use crate::domain::LadderConfig;

    fn preview() -> LadderPreview {
        build_preview(&LadderConfig {
            start: 1.0,
            target: 1000.0,
            steps: 8,
            tension: 1.2,
            control_points: Vec::new(),
        })
    }

    #[test]
    fn ladder_json_round_trips() {
        let dir = std::env::temp_dir().join("ladder-json-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("ladder.json");

        let preview = preview();
        write_ladder_json(&path, &preview).unwrap();
        let loaded = read_ladder_json(&path).unwrap();

        assert_eq!(loaded.tool, "ladder");
        assert_eq!(loaded.format, LADDER_FORMAT);
        assert_eq!(loaded.config, preview.config);
        assert_eq!(loaded.milestones.len(), preview.milestones.len());
        for (a, b) in loaded.milestones.iter().zip(preview.milestones.iter()) {
            assert_eq!(a.step, b.step);
            assert!((a.value - b.value).abs() < 1e-9);
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unknown_format_is_rejected() {
        let dir = std::env::temp_dir().join("ladder-json-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("future.json");

        let mut ladder = {
            let preview = preview();
            LadderFile {
                tool: "ladder".to_string(),
                format: LADDER_FORMAT,
                created: chrono::Local::now().date_naive(),
                config: preview.config.clone(),
                scale: preview.scale,
                milestones: preview.milestones.clone(),
                curve: preview.curve.clone(),
                axis_labels: preview.axis_labels.clone(),
            }
        };
        ladder.format = 99;
        let file = File::create(&path).unwrap();
        serde_json::to_writer_pretty(file, &ladder).unwrap();

        let err = read_ladder_json(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported ladder format"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = read_ladder_json(Path::new("/nonexistent/ladder.json")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
