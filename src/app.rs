//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - resolves the ladder config (template + flag overrides)
//! - runs the preview pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, PlotArgs, ShowArgs};
use crate::domain::{ControlPoint, LadderConfig};
use crate::error::AppError;
use crate::templates::TemplateId;

pub mod pipeline;

/// Entry point for the `ladder` binary.
pub fn run() -> Result<(), AppError> {
    // We want `ladder` and `ladder -t quick-wins` to behave like `ladder tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Show(args) => handle_show(args, OutputMode::Full),
        Command::Export(args) => handle_show(args, OutputMode::ExportOnly),
        Command::Plot(args) => handle_plot(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    ExportOnly,
}

fn handle_show(args: ShowArgs, mode: OutputMode) -> Result<(), AppError> {
    if mode == OutputMode::ExportOnly && args.export.is_none() && args.export_csv.is_none() {
        return Err(AppError::usage("export needs --export and/or --export-csv."));
    }

    let config = config_from_args(&args);
    let preview = pipeline::build_preview(&config);

    // Print terminal output.
    if mode == OutputMode::Full {
        println!(
            "{}",
            crate::report::format_run_summary(&preview.config, preview.scale, &preview.pace)
        );
        println!(
            "{}",
            crate::report::format_milestone_table(&preview.milestones, preview.scale)
        );
        println!("{}", crate::report::format_axis_labels(&preview.axis_labels));

        if args.plot && !args.no_plot {
            let chart = crate::plot::render_ascii_chart(&preview, args.width, args.height);
            println!("{chart}");
        }
    }

    // Optional exports.
    if let Some(path) = &args.export {
        crate::io::ladder::write_ladder_json(path, &preview)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = &args.export_csv {
        crate::io::export::write_milestones_csv(path, &preview)?;
        println!("Wrote {}", path.display());
    }
    if args.debug_bundle {
        let path = crate::debug::write_debug_bundle(&preview)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn handle_tui(args: ShowArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let chart = match &args.file {
        Some(path) => {
            let file = crate::io::ladder::read_ladder_json(path)?;
            crate::plot::render_ascii_chart_from_file(&file, args.width, args.height)
        }
        None => {
            let config = shape_config(
                args.template,
                args.start,
                args.target,
                args.steps,
                args.tension,
                &args.control,
            );
            let preview = pipeline::build_preview(&config);
            crate::plot::render_ascii_chart(&preview, args.width, args.height)
        }
    };

    println!("{chart}");
    Ok(())
}

/// Build the engine config from `show`/`tui`/`export` flags.
pub fn config_from_args(args: &ShowArgs) -> LadderConfig {
    shape_config(
        args.template,
        args.start,
        args.target,
        args.steps,
        args.tension,
        &args.control,
    )
}

/// Template first, explicit flags win, domain clamps last.
fn shape_config(
    template: Option<TemplateId>,
    start: Option<f64>,
    target: Option<f64>,
    steps: Option<usize>,
    tension: Option<f64>,
    control: &[ControlPoint],
) -> LadderConfig {
    let base = template.unwrap_or(TemplateId::Steady).config();

    LadderConfig {
        start: start.unwrap_or(base.start),
        target: target.unwrap_or(base.target),
        steps: steps.unwrap_or(base.steps),
        tension: tension.unwrap_or(base.tension),
        control_points: if control.is_empty() {
            base.control_points
        } else {
            control.to_vec()
        },
    }
    .clamped()
}

/// Rewrite argv so `ladder` defaults to `ladder tui`.
///
/// Rules:
/// - `ladder`                      -> `ladder tui`
/// - `ladder -t quick-wins ...`    -> `ladder tui -t quick-wins ...`
/// - `ladder --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "plot" | "tui" | "export");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Vec<String> {
        argv.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["ladder"])), args(&["ladder", "tui"]));
        assert_eq!(
            rewrite_args(args(&["ladder", "-t", "ambitious"])),
            args(&["ladder", "tui", "-t", "ambitious"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["ladder", "show", "--steps", "5"])),
            args(&["ladder", "show", "--steps", "5"])
        );
        assert_eq!(rewrite_args(args(&["ladder", "--help"])), args(&["ladder", "--help"]));
    }

    #[test]
    fn explicit_flags_override_the_template() {
        let config = shape_config(
            Some(TemplateId::QuickWins),
            None,
            Some(2000.0),
            Some(5),
            None,
            &[],
        );

        assert!((config.start - 1.0).abs() < 1e-12, "start comes from the template");
        assert!((config.target - 2000.0).abs() < 1e-12);
        assert_eq!(config.steps, 5);
        assert!((config.tension - 1.2).abs() < 1e-12, "tension comes from the template");
    }

    #[test]
    fn shape_flags_are_clamped_at_the_boundary() {
        let config = shape_config(None, None, None, Some(100), Some(-9.0), &[]);
        assert_eq!(config.steps, 20);
        assert!((config.tension + 2.0).abs() < 1e-12);
    }
}
