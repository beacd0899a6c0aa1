//! Value-axis scale selection and progress→value mapping.
//!
//! The ladder generator and the dense sampler resolve the configured range
//! once, then map normalized progress through the same closed forms:
//!
//! - logarithmic: `value = start * (target/start)^progress`
//! - linear:      `value = start + (target - start) * progress`
//!
//! Logarithmic spacing keeps ratios visually even for goals spanning orders
//! of magnitude (1 → 1000 reads as three equal decades, not one giant leap).

use crate::domain::{LadderConfig, ResolvedScale, ScaleMode};

/// Ratio of `target/start` at or above which milestone spacing switches to
/// multiplicative growth. A ratio of exactly 10 selects logarithmic mode.
pub const LOG_MODE_RATIO: f64 = 10.0;

/// Smallest start honored by logarithmic mode.
const LOG_MIN_START: f64 = 1.0;

/// Resolve the configured range into the effective bounds and scale mode.
///
/// Substitutions applied, in order: non-finite bounds are replaced (start
/// with 0, target with `start + 1`), a target at or below the start becomes
/// `start + 1`, and logarithmic mode clamps the start up to 1. If that clamp
/// would invert the range the mode falls back to linear over the raw bounds.
pub fn resolve_scale(config: &LadderConfig) -> ResolvedScale {
    let start = if config.start.is_finite() { config.start } else { 0.0 };
    let raw_target = if config.target.is_finite() {
        config.target
    } else {
        start + 1.0
    };
    let target = if raw_target > start { raw_target } else { start + 1.0 };

    if start > 0.0 && target / start >= LOG_MODE_RATIO {
        let eff_start = start.max(LOG_MIN_START);
        if target > eff_start {
            return ResolvedScale {
                mode: ScaleMode::Log,
                start: eff_start,
                target,
            };
        }
    }

    ResolvedScale {
        mode: ScaleMode::Linear,
        start,
        target,
    }
}

/// Map normalized progress in [0,1] to a value on the resolved range.
pub fn value_at(scale: ResolvedScale, progress: f64) -> f64 {
    match scale.mode {
        ScaleMode::Log => scale.start * (scale.target / scale.start).powf(progress),
        ScaleMode::Linear => scale.start + (scale.target - scale.start) * progress,
    }
}
