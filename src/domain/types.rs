//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - driven live from the TUI / CLI flags
//! - exported to JSON/CSV
//! - reloaded later for re-plotting a saved ladder

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Caller-side bounds for the milestone count.
///
/// The engine itself tolerates any count (including 0 and 1); interactive
/// surfaces keep the knob inside this range.
pub const STEPS_MIN: usize = 2;
pub const STEPS_MAX: usize = 20;

/// Interactive surfaces cap the number of warp points; the kernel tolerates
/// any count.
pub const MAX_CONTROL_POINTS: usize = 3;

/// A user-placed warp point in normalized [0,1]×[0,1] curve space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Parse an `x,y` flag value (both in [0,1], best effort).
    ///
    /// Used as a clap value parser, so the error type is `String`.
    pub fn parse_flag(s: &str) -> Result<Self, String> {
        let (xs, ys) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y` (got `{s}`)"))?;
        let x: f64 = xs
            .trim()
            .parse()
            .map_err(|_| format!("invalid x in `{s}`"))?;
        let y: f64 = ys
            .trim()
            .parse()
            .map_err(|_| format!("invalid y in `{s}`"))?;
        if !x.is_finite() || !y.is_finite() {
            return Err(format!("coordinates must be finite (got `{s}`)"));
        }
        Ok(Self { x, y })
    }
}

/// The single configuration entity driving the engine.
///
/// Constructed from CLI flags, a goal template, or TUI edits; every engine
/// call is a pure function of one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Lower bound of the goal range (inclusive).
    pub start: f64,
    /// Upper bound of the goal range. `target <= start` is substituted with
    /// `start + 1` during resolution rather than rejected.
    pub target: f64,
    /// Number of milestones to produce.
    pub steps: usize,
    /// Curve tension in [-2, 2]: 0 = even pace, positive = early momentum,
    /// negative = slow build.
    pub tension: f64,
    /// 0 to 3 warp points; empty means a pure tension curve.
    #[serde(default)]
    pub control_points: Vec<ControlPoint>,
}

impl LadderConfig {
    /// Apply the caller-side domain clamps (steps, tension, point cap).
    pub fn clamped(mut self) -> Self {
        self.steps = self.steps.clamp(STEPS_MIN, STEPS_MAX);
        self.tension = if self.tension.is_finite() {
            self.tension.clamp(-crate::math::TENSION_LIMIT, crate::math::TENSION_LIMIT)
        } else {
            0.0
        };
        self.control_points.truncate(MAX_CONTROL_POINTS);
        self
    }
}

/// Value-axis spacing mode, chosen from the resolved range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    Linear,
    Log,
}

impl ScaleMode {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ScaleMode::Linear => "linear",
            ScaleMode::Log => "logarithmic",
        }
    }
}

/// The range actually used by the generator after defensive substitution.
///
/// `start`/`target` here are the *effective* bounds: degenerate targets are
/// widened by one unit, and logarithmic mode clamps the start up to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScale {
    pub mode: ScaleMode,
    pub start: f64,
    pub target: f64,
}

/// One rung of the generated ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// 0-based step index.
    pub step: usize,
    /// Actual value at this step, non-decreasing in `step`.
    pub value: f64,
}

/// One sample of the continuous curve, both axes normalized to [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// A labeled gridline on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    /// Display value (nice-rounded unless this is an endpoint).
    pub value: f64,
    /// Normalized position along the value axis.
    pub t: f64,
    /// Endpoints report the exact resolved start/target.
    pub is_endpoint: bool,
}

/// A saved ladder file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderFile {
    pub tool: String,
    pub format: u32,
    pub created: NaiveDate,
    pub config: LadderConfig,
    pub scale: ResolvedScale,
    pub milestones: Vec<Milestone>,
    pub curve: Vec<CurvePoint>,
    pub axis_labels: Vec<AxisLabel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_point_flag_parses() {
        let p = ControlPoint::parse_flag("0.25, 0.7").unwrap();
        assert!((p.x - 0.25).abs() < 1e-12);
        assert!((p.y - 0.7).abs() < 1e-12);

        assert!(ControlPoint::parse_flag("0.25").is_err());
        assert!(ControlPoint::parse_flag("a,b").is_err());
        assert!(ControlPoint::parse_flag("nan,0.5").is_err());
    }

    #[test]
    fn config_clamp_applies_caller_bounds() {
        let config = LadderConfig {
            start: 0.0,
            target: 100.0,
            steps: 99,
            tension: -7.5,
            control_points: vec![
                ControlPoint::new(0.1, 0.1),
                ControlPoint::new(0.2, 0.2),
                ControlPoint::new(0.3, 0.3),
                ControlPoint::new(0.4, 0.4),
            ],
        }
        .clamped();

        assert_eq!(config.steps, STEPS_MAX);
        assert!((config.tension + 2.0).abs() < 1e-12);
        assert_eq!(config.control_points.len(), MAX_CONTROL_POINTS);
    }
}
