//! Milestone ladder generation.
//!
//! Walks `t = i/(steps-1)` through the interpolation kernel and maps the
//! resulting progress onto the resolved value range. Invariants upheld for
//! any input, however degenerate:
//!
//! - the output is never empty (`steps <= 1` yields a single milestone at
//!   the effective target)
//! - values are finite and non-decreasing in `step`
//! - the first and last milestones land on the resolved bounds

use crate::domain::{LadderConfig, Milestone};

use super::progress_at;
use super::scale::{resolve_scale, value_at};

/// Generate the discrete milestone ladder for a config.
pub fn generate_milestone_ladder(config: &LadderConfig) -> Vec<Milestone> {
    let scale = resolve_scale(config);

    if config.steps <= 1 {
        // Canonical single-milestone value: the effective target (t = 1).
        let value = value_at(scale, progress_at(config, 1.0));
        return vec![Milestone { step: 0, value }];
    }

    let denom = (config.steps - 1) as f64;
    let mut out = Vec::with_capacity(config.steps);
    let mut floor = f64::NEG_INFINITY;
    for i in 0..config.steps {
        let t = i as f64 / denom;
        let value = value_at(scale, progress_at(config, t));
        // Guard against sub-ulp wobble in powf so the ladder never dips.
        let value = value.max(floor);
        floor = value;
        out.push(Milestone { step: i, value });
    }
    out
}
