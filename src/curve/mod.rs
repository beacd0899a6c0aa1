//! Curve engine: milestone ladders, dense curve samples, axis labels.
//!
//! Responsibilities:
//!
//! - resolve the configured range into a scale mode (`scale`)
//! - generate the discrete milestone ladder (`ladder`)
//! - sample the continuous curve and label the value axis (`sample`)
//!
//! Everything here is pure and infallible: degenerate inputs are absorbed by
//! clamping/substitution, never rejected. The ladder and the sampler share
//! `progress_at`, which is what keeps the plotted dots on the plotted line.

pub mod ladder;
pub mod sample;
pub mod scale;

pub use ladder::*;
pub use sample::*;
pub use scale::*;

use crate::domain::LadderConfig;
use crate::math::{clamp01, interpolate};

/// Normalized progress at `t` under the config's shape controls, with both
/// the input position and the output clamped to [0,1].
pub fn progress_at(config: &LadderConfig, t: f64) -> f64 {
    clamp01(interpolate(clamp01(t), &config.control_points, config.tension))
}
