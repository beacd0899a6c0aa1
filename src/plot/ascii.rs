//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - dense curve: `-` line
//! - milestone rungs: `o`
//! - left gutter: value-axis labels from the preview's axis labels

use std::collections::HashMap;

use crate::app::pipeline::LadderPreview;
use crate::domain::{AxisLabel, CurvePoint, LadderFile, Milestone, ResolvedScale};
use crate::report::fmt_value;

/// Render a chart for an in-memory preview.
pub fn render_ascii_chart(preview: &LadderPreview, width: usize, height: usize) -> String {
    let markers = milestone_markers(&preview.milestones, &preview.curve);
    render_chart(
        &preview.curve,
        &markers,
        &preview.axis_labels,
        preview.scale,
        preview.config.steps,
        preview.config.tension,
        width,
        height,
    )
}

/// Render a chart from a saved ladder JSON file.
///
/// Works entirely off the saved arrays, so the output cannot drift from what
/// the file's producer computed.
pub fn render_ascii_chart_from_file(file: &LadderFile, width: usize, height: usize) -> String {
    let markers = milestone_markers(&file.milestones, &file.curve);
    render_chart(
        &file.curve,
        &markers,
        &file.axis_labels,
        file.scale,
        file.config.steps,
        file.config.tension,
        width,
        height,
    )
}

fn render_chart(
    curve: &[CurvePoint],
    markers: &[(f64, f64)],
    labels: &[AxisLabel],
    scale: ResolvedScale,
    steps: usize,
    tension: f64,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut grid = vec![vec![' '; width]; height];

    // Draw curve first (so markers can overlay).
    draw_curve(&mut grid, curve);

    for &(x, y) in markers {
        let col = map_x(x, width);
        let row = map_y(y, height);
        grid[row][col] = 'o';
    }

    // Gutter labels sit at the label's normalized height up the value axis.
    let mut gutter: HashMap<usize, String> = HashMap::new();
    for label in labels {
        gutter.insert(map_y(label.t, height), fmt_value(label.value));
    }
    let gutter_width = gutter.values().map(|s| s.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "Ladder: {} [{}, {}] | steps={steps} | tension={tension:+.2}\n",
        scale.mode.display_name(),
        fmt_value(scale.start),
        fmt_value(scale.target),
    ));

    for (row, cells) in grid.into_iter().enumerate() {
        let label = gutter.get(&row).map(String::as_str).unwrap_or("");
        out.push_str(&format!("{label:>gutter_width$} |"));
        out.push_str(&cells.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

/// Marker positions for the milestone rungs, with `y` read off the sampled
/// curve so saved files replot without recomputation.
fn milestone_markers(milestones: &[Milestone], curve: &[CurvePoint]) -> Vec<(f64, f64)> {
    let denom = (milestones.len().saturating_sub(1)).max(1) as f64;
    milestones
        .iter()
        .map(|m| {
            let t = if milestones.len() == 1 {
                1.0
            } else {
                m.step as f64 / denom
            };
            (t, curve_y_at(curve, t))
        })
        .collect()
}

/// Piecewise-linear read of the sampled curve at a normalized position.
fn curve_y_at(curve: &[CurvePoint], x: f64) -> f64 {
    if curve.is_empty() {
        return x.clamp(0.0, 1.0);
    }
    if curve.len() == 1 || x <= curve[0].x {
        return curve[0].y;
    }
    for w in curve.windows(2) {
        let (a, b) = (w[0], w[1]);
        if x <= b.x {
            let span = b.x - a.x;
            if span <= f64::EPSILON {
                return b.y;
            }
            return a.y + (b.y - a.y) * (x - a.x) / span;
        }
    }
    curve[curve.len() - 1].y
}

fn map_x(u: f64, width: usize) -> usize {
    let width = width.max(2);
    (u.clamp(0.0, 1.0) * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, height: usize) -> usize {
    let height = height.max(2);
    // v=1 is the top -> row 0
    ((height as f64 - 1.0) * (1.0 - v.clamp(0.0, 1.0))).round() as usize
}

fn draw_curve(grid: &mut [Vec<char>], curve: &[CurvePoint]) {
    if curve.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for p in curve {
        let x = map_x(p.x, width);
        let y = map_y(p.y, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_preview;
    use crate::domain::LadderConfig;

    fn config() -> LadderConfig {
        LadderConfig {
            start: 0.0,
            target: 100.0,
            steps: 5,
            tension: 0.0,
            control_points: Vec::new(),
        }
    }

    #[test]
    fn chart_golden_snapshot_small() {
        let preview = build_preview(&config());
        let txt = render_ascii_chart(&preview, 12, 5);
        let expected = concat!(
            "Ladder: linear [0, 100] | steps=5 | tension=+0.00\n",
            "100 |          -o\n",
            " 75 |       -o-- \n",
            " 50 |    --o-    \n",
            " 25 | --o-       \n",
            "  0 |o-          \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn saved_file_replots_identically() {
        let preview = build_preview(&config());
        let file = LadderFile {
            tool: "ladder".to_string(),
            format: crate::io::ladder::LADDER_FORMAT,
            created: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            config: preview.config.clone(),
            scale: preview.scale,
            milestones: preview.milestones.clone(),
            curve: preview.curve.clone(),
            axis_labels: preview.axis_labels.clone(),
        };

        let live = render_ascii_chart(&preview, 40, 12);
        let replot = render_ascii_chart_from_file(&file, 40, 12);
        assert_eq!(live, replot);
    }

    #[test]
    fn tiny_dimensions_are_clamped() {
        let preview = build_preview(&config());
        let txt = render_ascii_chart(&preview, 0, 0);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 6, "header plus the minimum five rows");
        for line in &lines[1..] {
            assert!(line.len() >= 10);
        }
    }

    #[test]
    fn curve_read_interpolates_between_samples() {
        let curve = vec![
            CurvePoint { x: 0.0, y: 0.0 },
            CurvePoint { x: 0.5, y: 0.2 },
            CurvePoint { x: 1.0, y: 1.0 },
        ];
        assert!((curve_y_at(&curve, 0.25) - 0.1).abs() < 1e-12);
        assert!((curve_y_at(&curve, 0.75) - 0.6).abs() < 1e-12);
        assert!((curve_y_at(&curve, -1.0) - 0.0).abs() < 1e-12);
        assert!((curve_y_at(&curve, 2.0) - 1.0).abs() < 1e-12);
        assert!((curve_y_at(&[], 0.3) - 0.3).abs() < 1e-12);
    }
}
