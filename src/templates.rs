//! Goal template catalog.
//!
//! Templates supply ready-made ladder configs for common goal shapes. The
//! catalog is static, read-only data: the engine never mutates it, surfaces
//! only copy a config out and hand it to the pipeline. Ordered mild → bold.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::LadderConfig;

/// Catalog identifier, selectable on the CLI and cycled in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// Even pace from zero, no shaping.
    Steady,
    /// Many small early rungs that widen toward the goal.
    QuickWins,
    /// Gentle start that accelerates across a mid-size range.
    SlowBuild,
    /// Three rungs across three decades, almost everything at the end.
    Ambitious,
}

/// Catalog order used for cycling in the TUI.
pub const ALL_TEMPLATES: [TemplateId; 4] = [
    TemplateId::Steady,
    TemplateId::QuickWins,
    TemplateId::SlowBuild,
    TemplateId::Ambitious,
];

impl TemplateId {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateId::Steady => "Steady",
            TemplateId::QuickWins => "Quick Wins",
            TemplateId::SlowBuild => "Slow Build",
            TemplateId::Ambitious => "Ambitious",
        }
    }

    /// One-line description shown next to the name.
    pub fn summary(self) -> &'static str {
        match self {
            TemplateId::Steady => "even pace, linear range",
            TemplateId::QuickWins => "early momentum across three decades",
            TemplateId::SlowBuild => "flat start, late acceleration",
            TemplateId::Ambitious => "three rungs, back-loaded",
        }
    }

    /// The default ladder config this template supplies.
    pub fn config(self) -> LadderConfig {
        let (start, target, steps, tension) = match self {
            TemplateId::Steady => (0.0, 100.0, 10, 0.0),
            TemplateId::QuickWins => (1.0, 1000.0, 8, 1.2),
            TemplateId::SlowBuild => (5.0, 500.0, 12, -0.8),
            TemplateId::Ambitious => (1.0, 1000.0, 3, -1.5),
        };
        LadderConfig {
            start,
            target,
            steps,
            tension,
            control_points: Vec::new(),
        }
    }

    /// Next catalog entry, wrapping at the end.
    pub fn next(self) -> Self {
        let idx = ALL_TEMPLATES.iter().position(|&t| t == self).unwrap_or(0);
        ALL_TEMPLATES[(idx + 1) % ALL_TEMPLATES.len()]
    }

    /// Previous catalog entry, wrapping at the start.
    pub fn prev(self) -> Self {
        let idx = ALL_TEMPLATES.iter().position(|&t| t == self).unwrap_or(0);
        ALL_TEMPLATES[(idx + ALL_TEMPLATES.len() - 1) % ALL_TEMPLATES.len()]
    }
}
