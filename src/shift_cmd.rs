//! Shift command: move a timestamp by calendar and clock deltas.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_datetime::{CalendarContext, DateTime};

use crate::cli::ShiftArgs;
use crate::config;

/// Parse a timestamp, apply the requested field deltas, and print it.
pub fn run(args: ShiftArgs) -> Result<()> {
    let _cmd = info_span!("shift").entered();

    // 1. Load project TOML
    let cfg = config::load(&args.config)?;

    // 2. Parse the input
    let from = args.from.unwrap_or_else(|| cfg.defaults.pattern.clone());
    let mut value = DateTime::parse_in(&args.input, &from, CalendarContext::system())
        .with_context(|| format!("failed to parse {:?} as {from:?}", args.input))?;
    info!(instant = %value.instant(), "input parsed");

    // 3. Apply calendar deltas, largest unit first
    if args.years != 0 {
        value.add_years(args.years).context("shifting years")?;
    }
    if args.months != 0 {
        value.add_months(args.months).context("shifting months")?;
    }
    if args.days != 0 {
        value.add_days(args.days).context("shifting days")?;
    }

    // 4. Apply clock deltas on the absolute instant
    if args.hours != 0 {
        value.add_hours(args.hours).context("shifting hours")?;
    }
    if args.minutes != 0 {
        value.add_minutes(args.minutes).context("shifting minutes")?;
    }
    if args.seconds != 0 {
        value.add_seconds(args.seconds).context("shifting seconds")?;
    }

    // 5. Print the shifted instant as ISO-8601 UTC
    println!("{value}");

    Ok(())
}
