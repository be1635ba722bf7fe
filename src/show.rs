//! Show command: print a week-aligned month calendar.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use kairos_datetime::{CalendarContext, DateTime};
use kairos_grid::{complete_weeks, first_day_of_month};

use crate::cli::ShowArgs;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Print a Sunday-first calendar for the requested month.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();

    // 1. Fall back to the current month in the system zone
    let today = DateTime::now();
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());

    // 2. Normalize carried month numbers for the header
    let first = first_day_of_month(year, month, &CalendarContext::utc())
        .with_context(|| format!("no first day for year {year}, month {month}"))?;
    info!(
        year = first.year(),
        month = first.month(),
        "rendering month grid"
    );

    // 3. Build the padded grid
    let grid =
        complete_weeks(year, month).with_context(|| format!("no week grid for {year}-{month}"))?;

    // 4. Print header plus one line per week
    println!("{} {}", MONTH_NAMES[(first.month() - 1) as usize], first.year());
    println!("Su Mo Tu We Th Fr Sa");
    for week in grid.chunks(7) {
        let row = week
            .iter()
            .map(|day| format!("{:>2}", day.day()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{row}");
    }

    Ok(())
}
