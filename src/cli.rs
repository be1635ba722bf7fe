use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos calendar-aware date/time toolbox.
#[derive(Parser)]
#[command(name = "kairos", version, about = "Calendar-aware date/time toolbox")]
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
    /// Print a week-aligned month calendar.
    Show(ShowArgs),
    /// Re-render a timestamp in another pattern or time zone.
    Convert(ConvertArgs),
    /// Move a timestamp by calendar and clock deltas.
    Shift(ShiftArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Year of the month to show (defaults to the current year).
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month number to show, carrying past 12 or below 1 (defaults to
    /// the current month).
    #[arg(short, long, allow_negative_numbers = true)]
    pub month: Option<i32>,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date/time string to convert.
    pub input: String,

    /// Pattern the input is written in.
    #[arg(short, long)]
    pub from: Option<String>,

    /// Pattern to render the result in (defaults to the input pattern).
    #[arg(short, long)]
    pub to: Option<String>,

    /// IANA time zone to render in, e.g. Europe/Zurich.
    #[arg(short = 'z', long)]
    pub timezone: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    /// Date/time string to shift.
    pub input: String,

    /// Pattern the input is written in.
    #[arg(short, long)]
    pub from: Option<String>,

    /// Whole years to move by.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub years: i32,

    /// Whole months to move by, carrying across years.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub months: i32,

    /// Whole days to move by, carrying across months.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub days: i32,

    /// Whole hours to move by.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub hours: i32,

    /// Whole minutes to move by.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub minutes: i32,

    /// Whole seconds to move by.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub seconds: i32,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,
}
