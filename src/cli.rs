use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fairway",
    version,
    about = "Golf handicap index calculator and round tracker"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the handicap index from a rounds file
    Calc(CalcCommand),
    /// Record one round of golf
    Add(AddCommand),
    /// List recorded rounds with their score differentials
    Rounds(RoundsCommand),
    /// Generate a training plan toward a target handicap
    Plan(PlanCommand),
    /// Show saved handicap calculations
    History(HistoryCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct CalcCommand {
    /// Rounds file (TOML with [[rounds]] entries); defaults to the
    /// configured [files].rounds path in the current directory
    pub rounds_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Append the result to the calculation history
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct AddCommand {
    /// Rounds file to append to (created if missing); defaults to the
    /// configured [files].rounds path in the current directory
    pub rounds_file: Option<PathBuf>,

    #[arg(long)]
    pub course: String,

    /// Gross stroke count
    #[arg(long)]
    pub score: i32,

    /// Course rating
    #[arg(long)]
    pub rating: f64,

    /// Slope rating
    #[arg(long)]
    pub slope: i32,

    /// Date played (YYYY-MM-DD)
    #[arg(long)]
    pub played_at: Option<NaiveDate>,
}

#[derive(Args)]
pub struct RoundsCommand {
    /// Rounds file to list; defaults to the configured [files].rounds
    /// path in the current directory
    pub rounds_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct PlanCommand {
    /// Current handicap index
    #[arg(long)]
    pub current: f64,

    /// Target handicap index (must be lower than current)
    #[arg(long)]
    pub target: f64,

    /// Timeline in months
    #[arg(long)]
    pub months: u32,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct HistoryCommand {
    /// Directory whose configuration and history to read
    #[arg(default_value = ".")]
    pub path: PathBuf,
}
