//! Month boundary lookup and per-day expansion.

use kairos_datetime::{CalendarContext, DateComponents, DateTime, DateTimeError};
use tracing::debug;

use crate::error::GridError;

/// First day of the month at midnight in the given calendar context.
///
/// The month number carries instead of wrapping, so month 13 answers
/// January 1 of the following year and month 0 answers December 1 of
/// the preceding one.
///
/// # Errors
///
/// Returns [`DateTimeError::InvalidComponents`] when the components do
/// not resolve to a representable date.
pub fn first_day_of_month(
    year: i32,
    month: i32,
    calendar: &CalendarContext,
) -> Result<DateTime, DateTimeError> {
    let components = DateComponents::new()
        .with_year(year)
        .with_month(month)
        .with_day(1)
        .with_calendar(calendar.clone());
    DateTime::from_components(&components)
}

/// Last day of the month at midnight in the given calendar context.
///
/// Asks for day 0 of the following month, which the component carry
/// rules turn into the closing day of the requested one. February's
/// answer therefore tracks leap years with no length table.
///
/// # Errors
///
/// Returns [`DateTimeError::InvalidComponents`] when the components do
/// not resolve to a representable date.
pub fn last_day_of_month(
    year: i32,
    month: i32,
    calendar: &CalendarContext,
) -> Result<DateTime, DateTimeError> {
    let next = month
        .checked_add(1)
        .ok_or(DateTimeError::InvalidComponents {
            year: Some(year),
            month: Some(month),
            day: None,
        })?;
    let components = DateComponents::new()
        .with_year(year)
        .with_month(next)
        .with_day(0)
        .with_calendar(calendar.clone());
    DateTime::from_components(&components)
}

/// Every day of the month at midnight, ascending.
///
/// The vector holds the month's full day count, 28 through 31. The
/// month number carries the same way as [`first_day_of_month`].
///
/// # Errors
///
/// Returns [`GridError::InvalidMonth`] when the month does not resolve
/// to a representable range of days.
pub fn month_days(
    year: i32,
    month: i32,
    calendar: &CalendarContext,
) -> Result<Vec<DateTime>, GridError> {
    let invalid = || GridError::InvalidMonth { year, month };

    let first = first_day_of_month(year, month, calendar).map_err(|_| invalid())?;
    let last = last_day_of_month(year, month, calendar).map_err(|_| invalid())?;

    let mut days = Vec::with_capacity(last.day() as usize);
    for day in 1..=last.day() {
        let components = DateComponents::new()
            .with_year(first.year())
            .with_month(first.month())
            .with_day(day)
            .with_calendar(calendar.clone());
        days.push(DateTime::from_components(&components).map_err(|_| invalid())?);
    }
    debug!(year, month, len = days.len(), "expanded month into days");
    Ok(days)
}
