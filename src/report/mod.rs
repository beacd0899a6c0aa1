//! Reporting utilities: pace analysis and formatted terminal output.

pub mod format;

pub use format::*;

use crate::curve::progress_at;
use crate::domain::{LadderConfig, Milestone};

/// Halfway progress at or above this classifies as front-loaded.
const FRONT_LOADED_SHARE: f64 = 0.58;
/// Halfway progress at or below this classifies as back-loaded.
const BACK_LOADED_SHARE: f64 = 0.42;

/// Coarse pacing classification shown in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaceShape {
    FrontLoaded,
    Even,
    BackLoaded,
}

impl PaceShape {
    pub fn display_name(self) -> &'static str {
        match self {
            PaceShape::FrontLoaded => "front-loaded",
            PaceShape::Even => "even",
            PaceShape::BackLoaded => "back-loaded",
        }
    }
}

/// Derived pacing facts for one ladder.
#[derive(Debug, Clone)]
pub struct PaceSummary {
    /// Value gained per rung (`len = milestones - 1`).
    pub increments: Vec<f64>,
    /// Normalized progress reached at the halfway position (`t = 0.5`).
    ///
    /// Measured in progress space rather than value space so that a plain
    /// logarithmic ladder still reads as "even".
    pub halfway_progress: f64,
    pub shape: PaceShape,
}

/// Summarize how a ladder paces its progress.
pub fn summarize_pace(config: &LadderConfig, milestones: &[Milestone]) -> PaceSummary {
    let increments = milestones
        .windows(2)
        .map(|w| w[1].value - w[0].value)
        .collect();

    let halfway_progress = progress_at(config, 0.5);
    let shape = if halfway_progress >= FRONT_LOADED_SHARE {
        PaceShape::FrontLoaded
    } else if halfway_progress <= BACK_LOADED_SHARE {
        PaceShape::BackLoaded
    } else {
        PaceShape::Even
    };

    PaceSummary {
        increments,
        halfway_progress,
        shape,
    }
}
