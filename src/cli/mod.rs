//! Command-line parsing for the milestone ladder toolkit.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the curve/engine code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::ControlPoint;
use crate::templates::TemplateId;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "ladder", version, about = "Milestone ladder designer (curve engine + terminal preview)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a ladder, print the milestone table and pace summary, and optionally plot/export.
    Show(ShowArgs),
    /// Render the ASCII chart only (from shape flags or from a saved ladder JSON).
    Plot(PlotArgs),
    /// Launch the interactive TUI designer.
    ///
    /// This uses the same underlying preview pipeline as `ladder show`, but renders
    /// results in a terminal UI using Ratatui.
    Tui(ShowArgs),
    /// Write the ladder JSON and/or milestone CSV without printing the table.
    Export(ShowArgs),
}

/// Common options for shaping, previewing, and exporting a ladder.
#[derive(Debug, Parser, Clone)]
pub struct ShowArgs {
    /// Goal template to start from; explicit flags below override its fields.
    #[arg(short = 't', long, value_enum)]
    pub template: Option<TemplateId>,

    /// Lower bound of the goal range.
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Upper bound of the goal range.
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<f64>,

    /// Number of milestones (clamped to 2..=20).
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Curve tension in [-2, 2]: positive front-loads progress, negative back-loads it.
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub tension: Option<f64>,

    /// Warp point `x,y` in the unit square (repeat up to 3 times).
    #[arg(long = "control", value_name = "X,Y", value_parser = ControlPoint::parse_flag)]
    pub control: Vec<ControlPoint>,

    /// Render an ASCII chart under the table (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the full ladder (config + milestones + curve) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,

    /// Export the milestone table to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,

    /// Write a markdown debug bundle for the shown config.
    #[arg(long)]
    pub debug_bundle: bool,
}

/// Options for plotting.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Re-plot a ladder JSON produced by `ladder show --export` instead of shaping one.
    #[arg(short = 'f', long, value_name = "JSON")]
    pub file: Option<PathBuf>,

    /// Goal template to start from; explicit flags below override its fields.
    #[arg(short = 't', long, value_enum)]
    pub template: Option<TemplateId>,

    /// Lower bound of the goal range.
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Upper bound of the goal range.
    #[arg(long, allow_negative_numbers = true)]
    pub target: Option<f64>,

    /// Number of milestones (clamped to 2..=20).
    #[arg(short = 'n', long)]
    pub steps: Option<usize>,

    /// Curve tension in [-2, 2]: positive front-loads progress, negative back-loads it.
    #[arg(short = 'k', long, allow_negative_numbers = true)]
    pub tension: Option<f64>,

    /// Warp point `x,y` in the unit square (repeat up to 3 times).
    #[arg(long = "control", value_name = "X,Y", value_parser = ControlPoint::parse_flag)]
    pub control: Vec<ControlPoint>,

    /// Chart width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Chart height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}
