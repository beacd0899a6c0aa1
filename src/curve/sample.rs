//! Dense curve sampling and axis labels.
//!
//! The sampler exists for renderers: a fixed, generous number of normalized
//! points tracing the continuous curve the milestone dots sit on. Axis labels
//! follow the *linear* value scale regardless of curve shape (they label the
//! value axis, not the curve), with interior values snapped to nice numbers
//! and endpoints reported exactly.

use crate::domain::{AxisLabel, CurvePoint, LadderConfig};
use crate::math::round_to_nice_number;

use super::progress_at;
use super::scale::resolve_scale;

/// Fixed sample count for the continuous curve. Generous enough that a
/// terminal chart or an SVG path reads as smooth.
pub const CURVE_SAMPLE_COUNT: usize = 64;

/// Normalized positions labeled on the value axis.
pub const AXIS_LABEL_POSITIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Sample the continuous curve at `CURVE_SAMPLE_COUNT` normalized positions.
///
/// Uses the same kernel path as the ladder generator, so a milestone at
/// `t = i/(steps-1)` lands exactly on this curve. `y` is clamped to [0,1].
pub fn sample_curve(config: &LadderConfig) -> Vec<CurvePoint> {
    let denom = (CURVE_SAMPLE_COUNT - 1) as f64;
    (0..CURVE_SAMPLE_COUNT)
        .map(|i| {
            let x = i as f64 / denom;
            CurvePoint {
                x,
                y: progress_at(config, x),
            }
        })
        .collect()
}

/// Five labeled gridlines at fixed fractions of the value axis.
pub fn compute_axis_labels(config: &LadderConfig) -> Vec<AxisLabel> {
    let scale = resolve_scale(config);
    AXIS_LABEL_POSITIONS
        .iter()
        .map(|&t| {
            let is_endpoint = t == 0.0 || t == 1.0;
            let exact = scale.start + (scale.target - scale.start) * t;
            let value = if is_endpoint {
                exact
            } else {
                round_to_nice_number(exact)
            };
            AxisLabel {
                value,
                t,
                is_endpoint,
            }
        })
        .collect()
}
