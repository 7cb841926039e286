mod cli;
mod config;
mod error;
mod handicap;
mod report;
mod store;
mod types;
mod validate;

use crate::error::{FairwayError, Result};
use crate::types::plan::TrainingPlan;
use crate::types::report::HandicapReport;
use crate::types::round::GolfRound;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const VALIDATION: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// Config lives next to the rounds file, so `fairway calc club/rounds.toml`
// picks up `club/fairway.toml`.
fn config_root(rounds_file: &Path) -> &Path {
    match rounds_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Resolve the rounds file, its config root, and the merged config. An
/// explicit path wins; otherwise the configured `[files].rounds` path in
/// the current directory applies.
fn resolve_rounds_source(
    explicit: Option<&Path>,
) -> Result<(PathBuf, PathBuf, types::config::FairwayConfig)> {
    match explicit {
        Some(path) => {
            let root = config_root(path).to_path_buf();
            let loaded = config::load_config(&root)?.unwrap_or_default();
            Ok((path.to_path_buf(), root, loaded))
        }
        None => {
            let root = PathBuf::from(".");
            let loaded = config::load_config(&root)?.unwrap_or_default();
            let path = root.join(loaded.rounds_file());
            Ok((path, root, loaded))
        }
    }
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Calc(cmd) => {
            let (rounds_file, root, loaded) = resolve_rounds_source(cmd.rounds_file.as_deref())?;
            if !rounds_file.exists() {
                return Err(FairwayError::PathNotFound(rounds_file.display().to_string()));
            }

            let rounds = store::load_rounds(&rounds_file)?;
            validate::validate_rounds(&rounds, &loaded.round_bounds())?;

            let index = handicap::calculate(&rounds)?;
            let handicap_report = HandicapReport::new(index, &rounds)?;
            let rendered = report::render(&handicap_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if cmd.save {
                let history_path = root.join(loaded.history_file());
                let record = store::CalculationRecord::new(
                    handicap_report.handicap_index,
                    handicap_report.method,
                    handicap_report.round_count,
                );
                store::append_history(&history_path, &record)?;
                println!("saved to {}", history_path.display());
            }

            if rounds.is_empty() {
                eprintln!("warning: no rounds recorded; the index 0.0 means no data");
                Ok(exit_code::WARNINGS)
            } else if rounds.len() < 5 {
                eprintln!(
                    "warning: only {} round(s) recorded; the index is a rough estimate",
                    rounds.len()
                );
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Add(cmd) => {
            let (rounds_file, _root, loaded) = resolve_rounds_source(cmd.rounds_file.as_deref())?;

            let round = GolfRound {
                course_name: cmd.course,
                score: cmd.score,
                course_rating: cmd.rating,
                slope_rating: cmd.slope,
                played_at: cmd.played_at,
            };
            validate::validate_rounds(std::slice::from_ref(&round), &loaded.round_bounds())?;

            let total = store::append_round(&rounds_file, round)?;
            println!("recorded round {} in {}", total, rounds_file.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rounds(cmd) => {
            let (rounds_file, _root, _loaded) =
                resolve_rounds_source(cmd.rounds_file.as_deref())?;
            if !rounds_file.exists() {
                return Err(FairwayError::PathNotFound(rounds_file.display().to_string()));
            }

            let rounds = store::load_rounds(&rounds_file)?;
            if rounds.is_empty() {
                println!("no rounds recorded");
                return Ok(exit_code::SUCCESS);
            }

            for round in &rounds {
                let differential = round.differential()?;
                let played = round
                    .played_at
                    .map(|date| date.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}: score {}, rating {:.1}, slope {}, differential {:.2}, played {}",
                    round.course_name,
                    round.score,
                    round.course_rating,
                    round.slope_rating,
                    differential,
                    played
                );
            }
            println!("{} round(s)", rounds.len());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Plan(cmd) => {
            let loaded = config::load_config(Path::new("."))?.unwrap_or_default();
            validate::validate_plan(
                cmd.current,
                cmd.target,
                cmd.months,
                loaded.max_timeline_months(),
            )?;

            let plan = TrainingPlan::build(cmd.current, cmd.target, cmd.months);
            let rendered = report::render_plan(&plan, output_format(&cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::History(cmd) => {
            let loaded = config::load_config(&cmd.path)?.unwrap_or_default();
            let history_path = cmd.path.join(loaded.history_file());
            let records = store::load_history(&history_path)?;

            if records.is_empty() {
                println!("history: no saved calculations");
                return Ok(exit_code::SUCCESS);
            }

            for record in &records {
                println!(
                    "{}: index {:.1} ({}, {} round(s))",
                    record.computed_at.format("%Y-%m-%d %H:%M"),
                    record.handicap_index,
                    record.method,
                    record.round_count
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                FairwayError::InvalidSlopeRating(_)
                | FairwayError::InvalidRound(_)
                | FairwayError::InvalidPlan(_) => exit_code::VALIDATION,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
