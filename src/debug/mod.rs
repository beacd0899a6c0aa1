//! Debug bundle writer for inspecting a config and the template variants.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::app::pipeline::{LadderPreview, build_preview};
use crate::curve::progress_at;
use crate::domain::ControlPoint;
use crate::error::AppError;
use crate::templates::ALL_TEMPLATES;

pub fn write_debug_bundle(preview: &LadderPreview) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir).map_err(|e| AppError::internal(format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("ladder_debug_{ts}.md"));

    let mut file = File::create(&path)
        .map_err(|e| AppError::internal(format!("Failed to create debug file: {e}")))?;

    let config = &preview.config;
    writeln!(file, "# ladder debug bundle")
        .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339())
        .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;
    writeln!(
        file,
        "- config: start={}, target={}, steps={}, tension={:+.3}",
        config.start, config.target, config.steps, config.tension
    )
    .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;
    writeln!(file, "- control_points: {}", fmt_points(&config.control_points))
        .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;
    writeln!(
        file,
        "- resolved: {} [{:.4}, {:.4}]",
        preview.scale.mode.display_name(),
        preview.scale.start,
        preview.scale.target
    )
    .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;
    writeln!(
        file,
        "- pace: {} (halfway progress {:.4})",
        preview.pace.shape.display_name(),
        preview.pace.halfway_progress
    )
    .map_err(|e| AppError::internal(format!("Failed to write debug header: {e}")))?;

    writeln!(file, "\n## Milestones")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| step | t | progress | value |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| - | - | - | - |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    let denom = (preview.milestones.len().saturating_sub(1)).max(1) as f64;
    for m in &preview.milestones {
        let t = m.step as f64 / denom;
        writeln!(
            file,
            "| {} | {:.4} | {:.4} | {:.4} |",
            m.step,
            t,
            progress_at(config, t),
            m.value
        )
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    }

    writeln!(file, "\n## Axis labels")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| t | value | endpoint |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| - | - | - |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    for label in &preview.axis_labels {
        writeln!(
            file,
            "| {:.2} | {:.4} | {} |",
            label.t, label.value, label.is_endpoint
        )
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    }

    // Side-by-side ladders for every catalog template, for shape comparison.
    writeln!(file, "\n## Template ladders")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| template | scale | values |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    writeln!(file, "| - | - | - |")
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    for template in ALL_TEMPLATES {
        let variant = build_preview(&template.config());
        let values: Vec<f64> = variant.milestones.iter().map(|m| m.value).collect();
        writeln!(
            file,
            "| {} | {} | {} |",
            template.display_name(),
            variant.scale.mode.display_name(),
            fmt_vec(&values)
        )
        .map_err(|e| AppError::internal(format!("Failed to write debug: {e}")))?;
    }

    Ok(path)
}

fn fmt_vec(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.2}")).collect();
    format!("[{}]", parts.join(", "))
}

fn fmt_points(points: &[ControlPoint]) -> String {
    if points.is_empty() {
        return "none".to_string();
    }
    let parts: Vec<String> = points
        .iter()
        .map(|p| format!("({:.3}, {:.3})", p.x, p.y))
        .collect();
    parts.join(", ")
}
