use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Miti Bikram Sambat calendar.
#[derive(Parser)]
#[command(name = "miti", version, about = "Bikram Sambat calendar for the terminal")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: miti.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the per-year table directory from config.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show today's Nepali date with tithi and events.
    Today(TodayArgs),
    /// Convert a date between the Gregorian and Bikram Sambat calendars.
    Convert(ConvertArgs),
    /// Render a Bikram Sambat month as a calendar grid.
    Month(MonthArgs),
}

/// Arguments for the `today` subcommand.
#[derive(clap::Args)]
pub struct TodayArgs {
    /// Use this Gregorian date (YYYY-MM-DD) instead of the system clock.
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date to convert, YYYY-MM-DD.
    pub date: String,

    /// Treat the date as Bikram Sambat and convert to Gregorian.
    #[arg(long)]
    pub from_bs: bool,
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Bikram Sambat year (defaults to the current year).
    #[arg(short, long, requires = "month")]
    pub year: Option<i32>,

    /// Bikram Sambat month 1..=12 (defaults to the current month).
    #[arg(short, long, requires = "year")]
    pub month: Option<u8>,

    /// Navigate this many months from the current month (may be negative).
    #[arg(short, long, allow_hyphen_values = true, conflicts_with_all = ["year", "month"])]
    pub offset: Option<i32>,
}
