//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for the ladder shape (template, range,
//! steps, tension, control points) and re-renders the milestone curve after
//! every edit, so the pace can be tuned by feel.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{build_preview, LadderPreview};
use crate::cli::ShowArgs;
use crate::curve::progress_at;
use crate::domain::{AxisLabel, ControlPoint, LadderConfig, MAX_CONTROL_POINTS, STEPS_MAX, STEPS_MIN};
use crate::error::AppError;
use crate::math::TENSION_LIMIT;
use crate::report::fmt_value;
use crate::templates::TemplateId;

mod plotters_chart;

use plotters_chart::LadderPlottersChart;

/// Start the TUI, seeded from the same shape flags `show` accepts.
pub fn run(args: ShowArgs) -> Result<(), AppError> {
    let template = args.template.unwrap_or(TemplateId::Steady);
    let config = crate::app::config_from_args(&args);

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::internal(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(template, config);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::internal(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::internal(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Number of fixed rows in the settings list; control points follow.
const FIXED_FIELDS: usize = 5;

struct App {
    template: TemplateId,
    config: LadderConfig,
    preview: LadderPreview,
    selected_field: usize,
    status: String,
}

impl App {
    fn new(template: TemplateId, config: LadderConfig) -> Self {
        let preview = build_preview(&config);
        Self {
            template,
            config,
            preview,
            selected_field: 0,
            status: format!("{} — {}", template.display_name(), template.summary()),
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::internal(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::internal(format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::internal(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < self.field_count() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1),
            KeyCode::Right => self.adjust_field(1),
            KeyCode::Char('a') => self.add_control_point(),
            KeyCode::Char('x') => self.remove_control_point(),
            KeyCode::Char('k') => self.nudge_control_point_y(0.05),
            KeyCode::Char('j') => self.nudge_control_point_y(-0.05),
            KeyCode::Char('r') => {
                self.config = self.template.config();
                self.selected_field = 0;
                self.recompute();
                self.status = format!("Reset to {} defaults.", self.template.display_name());
            }
            KeyCode::Char('d') => match crate::debug::write_debug_bundle(&self.preview) {
                Ok(path) => {
                    self.status = format!("Wrote debug bundle: {}", path.display());
                }
                Err(err) => {
                    self.status = format!("Debug write failed: {err}");
                }
            },
            _ => {}
        }
        false
    }

    fn field_count(&self) -> usize {
        FIXED_FIELDS + self.config.control_points.len()
    }

    fn adjust_field(&mut self, delta: i32) {
        match self.selected_field {
            0 => {
                self.template = if delta >= 0 {
                    self.template.next()
                } else {
                    self.template.prev()
                };
                self.config = self.template.config();
                self.recompute();
                self.status = format!("{} — {}", self.template.display_name(), self.template.summary());
            }
            1 => {
                self.config.start = stepped(self.config.start, delta);
                self.recompute();
                self.status = format!("start: {}", fmt_value(self.config.start));
            }
            2 => {
                self.config.target = stepped(self.config.target, delta);
                self.recompute();
                self.status = format!("target: {}", fmt_value(self.config.target));
            }
            3 => {
                let next = if delta >= 0 {
                    self.config.steps.saturating_add(1)
                } else {
                    self.config.steps.saturating_sub(1)
                };
                self.config.steps = next.clamp(STEPS_MIN, STEPS_MAX);
                self.recompute();
                self.status = format!("steps: {}", self.config.steps);
            }
            4 => {
                let next = self.config.tension + 0.1 * delta as f64;
                self.config.tension = next.clamp(-TENSION_LIMIT, TENSION_LIMIT);
                self.recompute();
                self.status = format!("tension: {:+.2}", self.config.tension);
            }
            idx => {
                let i = idx - FIXED_FIELDS;
                if let Some(p) = self.config.control_points.get_mut(i) {
                    p.x = (p.x + 0.05 * delta as f64).clamp(0.0, 1.0);
                    let msg = format!("point {}: ({:.2}, {:.2})", i + 1, p.x, p.y);
                    self.recompute();
                    self.status = msg;
                }
            }
        }
    }

    fn add_control_point(&mut self) {
        if self.config.control_points.len() >= MAX_CONTROL_POINTS {
            self.status = format!("Control point limit reached ({MAX_CONTROL_POINTS}).");
            return;
        }
        self.config.control_points.push(ControlPoint::new(0.5, 0.5));
        self.selected_field = FIXED_FIELDS + self.config.control_points.len() - 1;
        self.recompute();
        self.status = format!(
            "Added control point {} of {MAX_CONTROL_POINTS}.",
            self.config.control_points.len()
        );
    }

    fn remove_control_point(&mut self) {
        if self.config.control_points.is_empty() {
            self.status = "No control points to remove.".to_string();
            return;
        }
        let i = if self.selected_field >= FIXED_FIELDS {
            self.selected_field - FIXED_FIELDS
        } else {
            self.config.control_points.len() - 1
        };
        self.config.control_points.remove(i);
        if self.selected_field >= self.field_count() {
            self.selected_field = self.field_count().saturating_sub(1);
        }
        self.recompute();
        self.status = format!("Removed control point {}.", i + 1);
    }

    fn nudge_control_point_y(&mut self, delta: f64) {
        if self.selected_field < FIXED_FIELDS {
            self.status = "Select a control point row to nudge its y.".to_string();
            return;
        }
        let i = self.selected_field - FIXED_FIELDS;
        if let Some(p) = self.config.control_points.get_mut(i) {
            p.y = (p.y + delta).clamp(0.0, 1.0);
            let msg = format!("point {}: ({:.2}, {:.2})", i + 1, p.x, p.y);
            self.recompute();
            self.status = msg;
        }
    }

    fn recompute(&mut self) {
        self.preview = build_preview(&self.config);
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let scale = self.preview.scale;
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("ladder", Style::default().fg(Color::Cyan)),
            Span::raw(" — milestone curve designer"),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "template: {} | scale: {} [{}, {}] | steps: {} | tension: {:+.2}",
                self.template.display_name(),
                scale.mode.display_name(),
                fmt_value(scale.start),
                fmt_value(scale.target),
                self.preview.config.steps,
                self.preview.config.tension,
            ),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "pace: {} ({:.0}% of progress by halfway) | control points: {}",
                self.preview.pace.shape.display_name(),
                self.preview.pace.halfway_progress * 100.0,
                self.preview.config.control_points.len(),
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(11)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Milestone Curve").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let (curve, milestones, controls, x_bounds, y_bounds) = chart_series(&self.preview);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = LadderPlottersChart {
            curve: &curve,
            milestones: &milestones,
            controls: &controls,
            x_bounds,
            y_bounds,
            x_label: "step position",
            y_label: "value".to_string(),
            scale: self.preview.scale,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(
                frame,
                inner,
                chart_rect,
                insets,
                x_bounds,
                y_bounds,
                &self.preview.axis_labels,
            );
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let config = &self.config;
        let mut items = Vec::new();
        items.push(ListItem::new(format!(
            "Template: {} ({})",
            self.template.display_name(),
            self.template.summary()
        )));
        items.push(ListItem::new(format!("Start: {}", fmt_value(config.start))));
        items.push(ListItem::new(format!("Target: {}", fmt_value(config.target))));
        items.push(ListItem::new(format!("Steps: {}", config.steps)));
        items.push(ListItem::new(format!("Tension: {:+.2}", config.tension)));
        for (i, p) in config.control_points.iter().enumerate() {
            items.push(ListItem::new(format!("Point {}: ({:.2}, {:.2})", i + 1, p.x, p.y)));
        }

        let list = List::new(items)
            .block(Block::default().title("Shape").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  a add pt  x del pt  j/k pt y  r reset  d debug  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Step a range bound by 10% of its magnitude (at least 1), rounding so
/// repeated taps keep the bound integral.
fn stepped(value: f64, delta: i32) -> f64 {
    let step = (value.abs() * 0.1).max(1.0);
    (value + step * delta as f64).round()
}

/// Build chart series for Plotters.
///
/// All series live in normalized curve space; the bounds pad slightly past
/// [0,1] so endpoint markers stay off the frame.
fn chart_series(
    preview: &LadderPreview,
) -> (
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    Vec<(f64, f64)>,
    [f64; 2],
    [f64; 2],
) {
    let curve = preview.curve.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>();

    let count = preview.milestones.len();
    let denom = count.saturating_sub(1).max(1) as f64;
    let milestones = preview
        .milestones
        .iter()
        .map(|m| {
            let t = if count == 1 { 1.0 } else { m.step as f64 / denom };
            (t, progress_at(&preview.config, t))
        })
        .collect::<Vec<_>>();

    let controls = preview
        .config
        .control_points
        .iter()
        .map(|p| (p.x, p.y))
        .collect::<Vec<_>>();

    let pad = 0.05;
    (curve, milestones, controls, [-pad, 1.0 + pad], [-pad, 1.0 + pad])
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

/// Tick labels around the chart rect: step positions along the bottom, the
/// engine's own axis labels (nice-rounded values) down the left gutter.
fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
    labels: &[AxisLabel],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let t = i as f64 / (ticks as f64 - 1.0);
        let u = (t - x_bounds[0]) / (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{t:.2}");
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for label in labels {
        let u = ((label.t - y_bounds[0]) / (y_bounds[1] - y_bounds[0])).clamp(0.0, 1.0);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let text = fmt_value(label.value);
        let text_len = text.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(text.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(text).style(style),
            Rect {
                x: start,
                y,
                width: text_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("step position")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("value")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
