//! Optional date components and their resolution to an instant.

use chrono::{DateTime as ChronoDateTime, Days, Months, NaiveDate, NaiveTime, TimeDelta, Utc};

use crate::context::{resolve_local, CalendarContext};
use crate::error::DateTimeError;

/// A set of optional calendar fields plus the context needed to resolve
/// them.
///
/// Missing year, month, and day default to 1; missing time-of-day fields
/// default to 0. Out-of-range values carry into the neighboring field
/// instead of wrapping: month 13 is January of the following year, day 0
/// is the last day of the previous month, hour 24 is midnight of the next
/// day.
///
/// # Example
///
/// ```
/// use kairos_datetime::{CalendarContext, DateComponents, DateTime};
///
/// let components = DateComponents::new()
///     .with_year(2016)
///     .with_month(2)
///     .with_day(29)
///     .with_calendar(CalendarContext::utc());
///
/// let leap_day = DateTime::from_components(&components).unwrap();
/// assert_eq!(leap_day.weekday(), 2); // a Monday
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateComponents {
    year: Option<i32>,
    month: Option<i32>,
    day: Option<i32>,
    hour: Option<i32>,
    minute: Option<i32>,
    second: Option<i32>,
    weekday: Option<i32>,
    calendar: Option<CalendarContext>,
}

impl DateComponents {
    /// Creates an empty component set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Sets the month. Values outside 1..=12 carry into the year.
    pub fn with_month(mut self, month: i32) -> Self {
        self.month = Some(month);
        self
    }

    /// Sets the day of month. Values outside the month carry over; day 0 is
    /// the last day of the previous month.
    pub fn with_day(mut self, day: i32) -> Self {
        self.day = Some(day);
        self
    }

    /// Sets the hour of day.
    pub fn with_hour(mut self, hour: i32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Sets the minute.
    pub fn with_minute(mut self, minute: i32) -> Self {
        self.minute = Some(minute);
        self
    }

    /// Sets the second.
    pub fn with_second(mut self, second: i32) -> Self {
        self.second = Some(second);
        self
    }

    /// Sets the day of week, Sunday = 1 through Saturday = 7.
    ///
    /// Informational only: snapshots taken from a value populate it, and
    /// resolution ignores it in favor of year/month/day.
    pub fn with_weekday(mut self, weekday: i32) -> Self {
        self.weekday = Some(weekday);
        self
    }

    /// Attaches the calendar context required for resolution.
    pub fn with_calendar(mut self, calendar: CalendarContext) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// Returns the year, if set.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the month, if set.
    pub fn month(&self) -> Option<i32> {
        self.month
    }

    /// Returns the day of month, if set.
    pub fn day(&self) -> Option<i32> {
        self.day
    }

    /// Returns the hour, if set.
    pub fn hour(&self) -> Option<i32> {
        self.hour
    }

    /// Returns the minute, if set.
    pub fn minute(&self) -> Option<i32> {
        self.minute
    }

    /// Returns the second, if set.
    pub fn second(&self) -> Option<i32> {
        self.second
    }

    /// Returns the day of week, if set.
    pub fn weekday(&self) -> Option<i32> {
        self.weekday
    }

    /// Returns the attached calendar context, if any.
    pub fn calendar(&self) -> Option<&CalendarContext> {
        self.calendar.as_ref()
    }

    /// Resolves the components to an absolute instant.
    ///
    /// Anchors at January 1 of the year and applies month, day, and
    /// time-of-day as signed offsets, so out-of-range values roll into
    /// neighboring fields rather than wrapping within their own.
    pub(crate) fn resolve(&self) -> Result<ChronoDateTime<Utc>, DateTimeError> {
        let Some(calendar) = &self.calendar else {
            return Err(self.invalid());
        };

        let year = self.year.unwrap_or(1);
        let month = self.month.unwrap_or(1);
        let day = self.day.unwrap_or(1);

        let date = NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|anchor| shift_months(anchor, month - 1))
            .and_then(|anchor| shift_days(anchor, i64::from(day) - 1))
            .ok_or_else(|| self.invalid())?;

        let clock = TimeDelta::hours(i64::from(self.hour.unwrap_or(0)))
            + TimeDelta::minutes(i64::from(self.minute.unwrap_or(0)))
            + TimeDelta::seconds(i64::from(self.second.unwrap_or(0)));
        let naive = date
            .and_time(NaiveTime::MIN)
            .checked_add_signed(clock)
            .ok_or_else(|| self.invalid())?;

        resolve_local(naive, calendar.time_zone()).ok_or_else(|| self.invalid())
    }

    fn invalid(&self) -> DateTimeError {
        DateTimeError::InvalidComponents {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}

fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}
