//! "Nice number" rounding for axis labels.
//!
//! Snaps an arbitrary value to the nearest conventionally round number at the
//! matching order of magnitude, so gridlines read 250/500/1000 rather than
//! 247/512/983. Implemented as candidate stepping over a normalized mantissa:
//!
//! - normalize `v` to `frac ∈ [1, 10)` with `v = frac * 10^n`
//! - snap `frac` to the nearest candidate (ties go to the smaller one)
//! - rescale by `10^n`
//!
//! Properties relied on by the axis-label generator: deterministic, monotonic
//! (larger input never produces a smaller output), idempotent, and safe for
//! zero and negatives (negatives mirror through zero).

/// Mantissa candidates per decade. 2.5 keeps labels like 250 stable and 7.5
/// keeps the quarter marks of decade ranges (25/50/75) distinct.
const NICE_CANDIDATES: [f64; 6] = [1.0, 2.0, 2.5, 5.0, 7.5, 10.0];

/// Snap `value` to the nearest nice number at its order of magnitude.
pub fn round_to_nice_number(value: f64) -> f64 {
    if !value.is_finite() || value == 0.0 {
        return 0.0;
    }
    let sign = if value < 0.0 { -1.0 } else { 1.0 };
    let v = value.abs();

    let exp = v.log10().floor() as i32;
    let base = 10f64.powi(exp);
    let frac = v / base;

    let mut best = NICE_CANDIDATES[0];
    let mut best_dist = (frac - best).abs();
    for &candidate in &NICE_CANDIDATES[1..] {
        let dist = (frac - candidate).abs();
        if dist < best_dist {
            best = candidate;
            best_dist = dist;
        }
    }

    sign * best * base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_documented_examples() {
        let cases = [
            (247.0, 250.0),
            (1830.0, 2000.0),
            (512.0, 500.0),
            (983.0, 1000.0),
            (75.0, 75.0),
            (733.5, 750.0),
        ];
        for (input, expected) in cases {
            let got = round_to_nice_number(input);
            assert!(
                (got - expected).abs() < 1e-9,
                "round({input}) should be {expected}, got {got}"
            );
        }
    }

    #[test]
    fn already_nice_values_are_unchanged() {
        for &v in &[1.0, 2.0, 2.5, 5.0, 7.5, 10.0, 25.0, 75.0, 250.0, 1000.0, 0.1, 0.25] {
            let got = round_to_nice_number(v);
            assert!(
                (got - v).abs() < 1e-12 * v.abs().max(1.0),
                "round({v}) moved to {got}"
            );
        }
    }

    #[test]
    fn idempotent_over_a_sweep() {
        let mut x = 0.003;
        while x < 5.0e4 {
            let once = round_to_nice_number(x);
            let twice = round_to_nice_number(once);
            assert!(
                (once - twice).abs() <= once.abs() * 1e-12,
                "round not idempotent at {x}: {once} then {twice}"
            );
            x *= 1.37;
        }
    }

    #[test]
    fn monotonic_over_a_sweep() {
        let mut prev: f64 = 0.0;
        let mut x = 0.01;
        while x < 1.0e5 {
            let v = round_to_nice_number(x);
            assert!(
                v >= prev - prev.abs() * 1e-12,
                "round not monotone at {x}: {v} < {prev}"
            );
            prev = v;
            x *= 1.05;
        }
    }

    #[test]
    fn zero_and_negative_inputs() {
        assert!(round_to_nice_number(0.0).abs() < 1e-15);
        assert!(round_to_nice_number(f64::NAN).abs() < 1e-15);
        let neg = round_to_nice_number(-247.0);
        assert!((neg + 250.0).abs() < 1e-9, "round(-247) should be -250, got {neg}");
    }

    #[test]
    fn ties_resolve_to_the_smaller_candidate() {
        let got = round_to_nice_number(15.0);
        assert!((got - 10.0).abs() < 1e-9, "round(15) should tie down to 10, got {got}");
    }
}
