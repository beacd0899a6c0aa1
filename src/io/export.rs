//! Export milestones to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::LadderPreview;
use crate::curve::progress_at;
use crate::error::AppError;

/// Write one CSV row per milestone.
pub fn write_milestones_csv(path: &Path, preview: &LadderPreview) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    // Header
    writeln!(file, "step,t,progress,value,increment")
        .map_err(|e| AppError::usage(format!("Failed to write export CSV header: {e}")))?;

    let denom = (preview.milestones.len().saturating_sub(1)).max(1) as f64;
    let mut prev = None;
    for m in &preview.milestones {
        let t = m.step as f64 / denom;
        let progress = progress_at(&preview.config, t);
        let increment = prev.map(|p| m.value - p).unwrap_or(0.0);
        writeln!(
            file,
            "{},{:.6},{:.6},{:.6},{:.6}",
            m.step, t, progress, m.value, increment,
        )
        .map_err(|e| AppError::usage(format!("Failed to write export CSV row: {e}")))?;
        prev = Some(m.value);
    }

    Ok(())
}
