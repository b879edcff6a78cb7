use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Cadence maintenance interval calculator.
#[derive(Parser)]
#[command(
    name = "cadence",
    version,
    about = "Maintenance-due intervals and preventive alerts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Evaluate distance and time alerts for the current readings.
    Check(CheckArgs),
    /// Show the bracketing boundaries for a reading.
    Boundaries(BoundariesArgs),
    /// List the maintenance points of every periodicity.
    Schedule(ScheduleArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Current odometer reading in kilometers.
    #[arg(short, long)]
    pub odometer: i64,

    /// Current date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `boundaries` subcommand.
#[derive(clap::Args)]
pub struct BoundariesArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Odometer reading to bracket.
    #[arg(short, long)]
    pub odometer: Option<i64>,

    /// Date to bracket (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

/// Arguments for the `schedule` subcommand.
#[derive(clap::Args)]
pub struct ScheduleArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cadence.toml")]
    pub config: PathBuf,

    /// Last date of the time schedule (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub until: Option<NaiveDate>,
}
