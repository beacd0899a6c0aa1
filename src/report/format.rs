//! Terminal-facing formatting for ladder previews.
//!
//! We keep formatting code in one place so:
//! - the curve/ladder code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{AxisLabel, LadderConfig, Milestone, ResolvedScale};

use super::PaceSummary;

/// Format the run summary (scale, shape knobs, pace classification).
pub fn format_run_summary(config: &LadderConfig, scale: ResolvedScale, pace: &PaceSummary) -> String {
    let mut out = String::new();

    out.push_str("=== ladder - Milestone Ladder Preview ===\n");
    out.push_str(&format!(
        "Scale: {} [{}, {}]\n",
        scale.mode.display_name(),
        fmt_value(scale.start),
        fmt_value(scale.target),
    ));
    out.push_str(&format!(
        "Steps: {} | tension={:+.2} | control points: {}\n",
        config.steps,
        config.tension,
        config.control_points.len(),
    ));
    out.push_str(&format!(
        "Pace: {} ({:.0}% of progress by halfway)\n",
        pace.shape.display_name(),
        pace.halfway_progress * 100.0,
    ));
    out.push('\n');

    out
}

/// Format the milestone table (value, gain over the previous rung, range share).
pub fn format_milestone_table(milestones: &[Milestone], scale: ResolvedScale) -> String {
    let mut out = String::new();
    out.push_str(format!("{:>4} {:>12} {:>12} {:>7}\n", "step", "value", "gain", "range").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<4} {:-<12} {:-<12} {:-<7}\n", "", "", "", "").trim_end());
    out.push('\n');

    let span = scale.target - scale.start;
    let mut prev = None;
    for m in milestones {
        let gain = match prev {
            Some(p) => fmt_value(m.value - p),
            None => "-".to_string(),
        };
        let share = if span.abs() > f64::EPSILON {
            format!("{:.0}%", (m.value - scale.start) / span * 100.0)
        } else {
            "-".to_string()
        };
        out.push_str(
            format!(
                "{:>4} {:>12} {:>12} {:>7}\n",
                m.step,
                fmt_value(m.value),
                gain,
                share,
            )
            .trim_end(),
        );
        out.push('\n');
        prev = Some(m.value);
    }

    out
}

/// Format the axis guide as a single line. Endpoints are starred.
pub fn format_axis_labels(labels: &[AxisLabel]) -> String {
    let parts: Vec<String> = labels
        .iter()
        .map(|l| {
            let mark = if l.is_endpoint { "*" } else { "" };
            format!("{}{mark}", fmt_value(l.value))
        })
        .collect();
    format!("Axis: {}\n", parts.join(" | "))
}

/// Render a value for humans: two decimals, trailing zeros trimmed.
pub fn fmt_value(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScaleMode;
    use crate::report::PaceShape;

    fn scale() -> ResolvedScale {
        ResolvedScale {
            mode: ScaleMode::Linear,
            start: 0.0,
            target: 100.0,
        }
    }

    #[test]
    fn summary_names_the_scale_and_pace() {
        let config = LadderConfig {
            start: 1.0,
            target: 1000.0,
            steps: 8,
            tension: 1.2,
            control_points: Vec::new(),
        };
        let scale = ResolvedScale {
            mode: ScaleMode::Log,
            start: 1.0,
            target: 1000.0,
        };
        let pace = PaceSummary {
            increments: vec![6.29],
            halfway_progress: 0.82,
            shape: PaceShape::FrontLoaded,
        };

        let text = format_run_summary(&config, scale, &pace);
        assert!(text.starts_with("=== ladder"));
        assert!(text.contains("Scale: logarithmic [1, 1000]"));
        assert!(text.contains("tension=+1.20"));
        assert!(text.contains("front-loaded (82% of progress by halfway)"));
    }

    #[test]
    fn milestone_table_shows_gains_and_shares() {
        let milestones = vec![
            Milestone { step: 0, value: 0.0 },
            Milestone { step: 1, value: 25.0 },
            Milestone { step: 2, value: 100.0 },
        ];

        let text = format_milestone_table(&milestones, scale());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5, "header, rule, and one line per rung");
        assert!(lines[0].contains("step"));
        assert!(lines[2].ends_with("0%"));
        assert!(lines[3].contains("25"));
        assert!(lines[3].ends_with("25%"));
        assert!(lines[4].contains("75"), "gain column shows 100 - 25");
        assert!(lines[4].ends_with("100%"));
    }

    #[test]
    fn axis_line_marks_the_endpoints() {
        let labels = vec![
            AxisLabel { value: 1.0, t: 0.0, is_endpoint: true },
            AxisLabel { value: 250.0, t: 0.25, is_endpoint: false },
            AxisLabel { value: 500.0, t: 0.5, is_endpoint: false },
            AxisLabel { value: 750.0, t: 0.75, is_endpoint: false },
            AxisLabel { value: 1000.0, t: 1.0, is_endpoint: true },
        ];

        let text = format_axis_labels(&labels);
        assert!(text.starts_with("Axis: 1* | 250 | "));
        assert!(text.trim_end().ends_with("1000*"));
    }

    #[test]
    fn fmt_value_trims_trailing_zeros() {
        assert_eq!(fmt_value(250.0), "250");
        assert_eq!(fmt_value(12.5), "12.5");
        assert_eq!(fmt_value(0.25), "0.25");
        assert_eq!(fmt_value(-7.3), "-7.3");
        assert_eq!(fmt_value(-0.001), "0");
    }
}
