//! Shared "preview pipeline" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! config -> scale resolution -> milestone ladder -> curve samples -> axis labels -> pace
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::curve::{compute_axis_labels, generate_milestone_ladder, resolve_scale, sample_curve};
use crate::domain::{AxisLabel, CurvePoint, LadderConfig, Milestone, ResolvedScale};
use crate::report::{PaceSummary, summarize_pace};

/// All computed outputs for one ladder preview.
#[derive(Debug, Clone)]
pub struct LadderPreview {
    pub config: LadderConfig,
    pub scale: ResolvedScale,
    pub milestones: Vec<Milestone>,
    pub curve: Vec<CurvePoint>,
    pub axis_labels: Vec<AxisLabel>,
    pub pace: PaceSummary,
}

/// Execute the full preview pipeline.
///
/// Infallible: the config is clamped and every stage substitutes usable
/// values for degenerate input, so interactive editing never dead-ends.
pub fn build_preview(config: &LadderConfig) -> LadderPreview {
    let config = config.clone().clamped();

    let scale = resolve_scale(&config);
    let milestones = generate_milestone_ladder(&config);
    let curve = sample_curve(&config);
    let axis_labels = compute_axis_labels(&config);
    let pace = summarize_pace(&config, &milestones);

    LadderPreview {
        config,
        scale,
        milestones,
        curve,
        axis_labels,
        pace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CURVE_SAMPLE_COUNT;
    use crate::domain::ControlPoint;

    #[test]
    fn preview_is_internally_consistent() {
        let config = LadderConfig {
            start: 1.0,
            target: 1000.0,
            steps: 8,
            tension: 1.2,
            control_points: vec![ControlPoint::new(0.3, 0.6)],
        };

        let preview = build_preview(&config);
        assert_eq!(preview.milestones.len(), 8);
        assert_eq!(preview.curve.len(), CURVE_SAMPLE_COUNT);
        assert_eq!(preview.axis_labels.len(), 5);
        assert_eq!(preview.pace.increments.len(), 7);

        let first = preview.milestones.first().unwrap();
        let last = preview.milestones.last().unwrap();
        assert!((first.value - preview.scale.start).abs() < 1e-9);
        assert!((last.value - preview.scale.target).abs() < 1e-9);
    }

    #[test]
    fn preview_clamps_out_of_range_input() {
        let config = LadderConfig {
            start: 0.0,
            target: 100.0,
            steps: 500,
            tension: 9.0,
            control_points: Vec::new(),
        };

        let preview = build_preview(&config);
        assert_eq!(preview.config.steps, 20);
        assert!((preview.config.tension - 2.0).abs() < 1e-12);
        assert_eq!(preview.milestones.len(), 20);
    }

    #[test]
    fn preview_absorbs_degenerate_bounds() {
        let config = LadderConfig {
            start: f64::NAN,
            target: f64::NEG_INFINITY,
            steps: 4,
            tension: 0.0,
            control_points: Vec::new(),
        };

        let preview = build_preview(&config);
        assert!(preview.scale.target > preview.scale.start);
        for m in &preview.milestones {
            assert!(m.value.is_finite());
        }
    }
}
