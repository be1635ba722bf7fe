//! Week-aligned month grids.

use kairos_datetime::{CalendarContext, DateTime};
use tracing::debug;

use crate::error::GridError;
use crate::month::month_days;

/// Every day of the month padded to complete Sunday-through-Saturday
/// weeks, ascending.
///
/// The first week fills up with the tail of the previous month and the
/// last week with the head of the next one, so the result length is
/// always a multiple of seven. Days resolve at midnight in the
/// Gregorian calendar with UTC readings.
///
/// # Errors
///
/// Returns [`GridError::InvalidMonth`] when the month does not resolve
/// to a representable range of days.
///
/// # Example
///
/// ```ignore
/// use kairos_grid::complete_weeks;
///
/// let grid = complete_weeks(2015, 12).unwrap();
/// assert_eq!(grid.len(), 35);
/// assert_eq!(grid[0].weekday(), 1); // Sunday, November 29
/// assert_eq!(grid[34].weekday(), 7); // Saturday, January 2
/// ```
pub fn complete_weeks(year: i32, month: i32) -> Result<Vec<DateTime>, GridError> {
    let invalid = || GridError::InvalidMonth { year, month };
    let calendar = CalendarContext::utc();

    let days = month_days(year, month, &calendar)?;
    let first = days
        .first()
        .cloned()
        .expect("a month always holds at least one day");
    let last = days
        .last()
        .cloned()
        .expect("a month always holds at least one day");

    let lead = first.weekday() - 1;
    let trail = 7 - last.weekday();
    let mut grid = Vec::with_capacity(days.len() + (lead + trail) as usize);

    // Walk the lead-in backwards so pushes stay ascending: day 0 is the
    // last day of the previous month, day -1 the one before.
    for offset in (1..=lead).rev() {
        let mut day = first.clone();
        day.set_day(1 - offset).map_err(|_| invalid())?;
        grid.push(day);
    }

    grid.extend(days);

    let closing = last.day();
    for offset in 1..=trail {
        let mut day = last.clone();
        day.set_day(closing + offset).map_err(|_| invalid())?;
        grid.push(day);
    }

    debug!(
        year,
        month,
        lead,
        trail,
        weeks = grid.len() / 7,
        "assembled week-aligned grid"
    );
    Ok(grid)
}
