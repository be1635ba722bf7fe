//! Calendar-aware date/time value.

use std::fmt;

use chrono::{
    DateTime as ChronoDateTime, Datelike, Days, Months, NaiveDateTime, TimeDelta, Timelike, Utc,
};
use chrono_tz::Tz;
use tracing::warn;

use crate::cache::FormatterCache;
use crate::components::DateComponents;
use crate::context::{resolve_local, system_time_zone, CalendarContext, CalendarKind, Locale};
use crate::error::DateTimeError;
use crate::fmt::{DateFormatter, ISO8601_TIMESTAMP};

/// A calendar-aware point in time.
///
/// Pairs an absolute instant with the calendar context (calendar system,
/// time zone, locale) used to read and write calendar fields. Field
/// accessors derive their values from the instant on demand, so the two
/// representations cannot drift apart.
///
/// Writes come in three flavors per field:
/// - `add_*` applies a signed whole-field delta, carrying overflow into
///   higher-order fields instead of wrapping within the field;
/// - `set_*` targets an absolute field value, implemented as the delta from
///   the current reading, and reports failure;
/// - `put_*` is the forgiving form of `set_*`: failures are logged and the
///   value stays unchanged.
///
/// `DateTime` is a plain value with no internal synchronization; clone
/// freely and copy before sharing across threads.
///
/// # Example
///
/// ```
/// use kairos_datetime::{CalendarContext, DateTime, ISO8601_TIMESTAMP};
///
/// let mut dt = DateTime::parse_in(
///     "2016-07-18T09:23:34+00:00",
///     ISO8601_TIMESTAMP,
///     CalendarContext::utc(),
/// )
/// .unwrap();
///
/// dt.set_day(1).unwrap();
/// dt.add_months(2).unwrap();
/// assert_eq!(dt.to_string(), "2016-09-01T09:23:34+00:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    instant: ChronoDateTime<Utc>,
    context: CalendarContext,
}

impl DateTime {
    // ---- Construction ----

    /// Current instant in the system calendar context.
    pub fn now() -> Self {
        Self::now_in(CalendarContext::system())
    }

    /// Current instant in the given context.
    pub fn now_in(context: CalendarContext) -> Self {
        Self {
            instant: Utc::now(),
            context,
        }
    }

    /// Wraps an existing absolute instant in the given context.
    pub fn new(instant: ChronoDateTime<Utc>, context: CalendarContext) -> Self {
        Self { instant, context }
    }

    /// Builds a value from optional components, taking the context they
    /// carry.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when no calendar
    /// context is attached or the components do not resolve to a
    /// representable instant.
    pub fn from_components(components: &DateComponents) -> Result<Self, DateTimeError> {
        let instant = components.resolve()?;
        let context = components
            .calendar()
            .cloned()
            .expect("resolved components always carry a calendar");
        Ok(Self { instant, context })
    }

    /// Parses `input` against a pattern in the system calendar context.
    ///
    /// The formatter comes from the global cache and is bound to the
    /// system zone, so strings without an offset are read as system wall
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidFormat`] when the string does not
    /// match the pattern.
    pub fn parse(input: &str, pattern: &str) -> Result<Self, DateTimeError> {
        Self::parse_in(input, pattern, CalendarContext::system())
    }

    /// Parses `input` against a pattern, attaching the given context.
    ///
    /// The formatter is bound to the context's zone, locale, and calendar
    /// system, so strings without an offset are read as wall clock in that
    /// zone.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidFormat`] when the string does not
    /// match the pattern.
    pub fn parse_in(
        input: &str,
        pattern: &str,
        context: CalendarContext,
    ) -> Result<Self, DateTimeError> {
        let formatter = FormatterCache::global().formatter_for(
            pattern,
            context.time_zone(),
            context.locale(),
            context.kind(),
        );
        let instant = formatter.parse(input)?;
        Ok(Self { instant, context })
    }

    /// Parses `input` with a caller-built formatter, attaching the given
    /// context. The formatter is registered in the global cache for
    /// subsequent pattern-based calls.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidFormat`] when the string does not
    /// match the formatter's pattern.
    pub fn parse_with(
        input: &str,
        formatter: DateFormatter,
        context: CalendarContext,
    ) -> Result<Self, DateTimeError> {
        let shared = FormatterCache::global().insert(formatter);
        let instant = shared.parse(input)?;
        Ok(Self { instant, context })
    }

    // ---- Field access ----

    /// The underlying absolute instant.
    pub fn instant(&self) -> ChronoDateTime<Utc> {
        self.instant
    }

    /// The calendar context.
    pub fn context(&self) -> &CalendarContext {
        &self.context
    }

    /// Calendar year, read in the context time zone.
    pub fn year(&self) -> i32 {
        self.zoned().year()
    }

    /// Month of year, 1 through 12.
    pub fn month(&self) -> i32 {
        self.zoned().month() as i32
    }

    /// Day of month, 1 through 31.
    pub fn day(&self) -> i32 {
        self.zoned().day() as i32
    }

    /// Hour of day, 0 through 23.
    pub fn hour(&self) -> i32 {
        self.zoned().hour() as i32
    }

    /// Minute of hour, 0 through 59.
    pub fn minute(&self) -> i32 {
        self.zoned().minute() as i32
    }

    /// Second of minute, 0 through 59.
    pub fn second(&self) -> i32 {
        self.zoned().second() as i32
    }

    /// Day of week, Sunday = 1 through Saturday = 7.
    pub fn weekday(&self) -> i32 {
        self.zoned().weekday().number_from_sunday() as i32
    }

    /// Time zone used to read and write calendar fields.
    pub fn time_zone(&self) -> Tz {
        self.context.time_zone()
    }

    /// Locale of the calendar context.
    pub fn locale(&self) -> &Locale {
        self.context.locale()
    }

    /// Calendar system of the calendar context.
    pub fn calendar_kind(&self) -> CalendarKind {
        self.context.kind()
    }

    /// Replaces the time zone, reinterpreting the same instant.
    ///
    /// The instant does not move; every calendar field immediately reads
    /// in the new zone.
    pub fn set_time_zone(&mut self, time_zone: Tz) {
        self.context.set_time_zone(time_zone);
    }

    /// Snapshot of every calendar field plus the context.
    ///
    /// Feeding the snapshot back to [`DateTime::from_components`] rebuilds
    /// an equal value.
    pub fn components(&self) -> DateComponents {
        DateComponents::new()
            .with_year(self.year())
            .with_month(self.month())
            .with_day(self.day())
            .with_hour(self.hour())
            .with_minute(self.minute())
            .with_second(self.second())
            .with_weekday(self.weekday())
            .with_calendar(self.context.clone())
    }

    fn zoned(&self) -> ChronoDateTime<Tz> {
        self.instant.with_timezone(&self.context.time_zone())
    }

    // ---- Field deltas ----

    /// Moves by whole years, keeping month, day, and time of day.
    ///
    /// February 29 clamps to February 28 when the target year is not a
    /// leap year.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted date
    /// is not representable.
    pub fn add_years(&mut self, years: i32) -> Result<(), DateTimeError> {
        let target = self.year().checked_add(years);
        years
            .checked_mul(12)
            .and_then(|months| self.shift_months(months))
            .ok_or(DateTimeError::InvalidComponents {
                year: target,
                month: None,
                day: None,
            })
    }

    /// Moves by whole months, carrying across year boundaries and clamping
    /// the day to the target month's length.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted date
    /// is not representable.
    pub fn add_months(&mut self, months: i32) -> Result<(), DateTimeError> {
        let target = self.month().checked_add(months);
        self.shift_months(months)
            .ok_or(DateTimeError::InvalidComponents {
                year: None,
                month: target,
                day: None,
            })
    }

    /// Moves by whole days, carrying across month and year boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted date
    /// is not representable.
    pub fn add_days(&mut self, days: i32) -> Result<(), DateTimeError> {
        let target = self.day().checked_add(days);
        self.shift_days(i64::from(days))
            .ok_or(DateTimeError::InvalidComponents {
                year: None,
                month: None,
                day: target,
            })
    }

    /// Moves by whole hours on the absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn add_hours(&mut self, hours: i32) -> Result<(), DateTimeError> {
        self.shift_time(TimeDelta::hours(i64::from(hours)))
    }

    /// Moves by whole minutes on the absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn add_minutes(&mut self, minutes: i32) -> Result<(), DateTimeError> {
        self.shift_time(TimeDelta::minutes(i64::from(minutes)))
    }

    /// Moves by whole seconds on the absolute instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn add_seconds(&mut self, seconds: i32) -> Result<(), DateTimeError> {
        self.shift_time(TimeDelta::seconds(i64::from(seconds)))
    }

    // ---- Fallible setters ----

    /// Sets the calendar year, preserving the remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the target date
    /// is not representable.
    pub fn set_year(&mut self, year: i32) -> Result<(), DateTimeError> {
        match year.checked_sub(self.year()) {
            Some(delta) => self.add_years(delta),
            None => Err(DateTimeError::InvalidComponents {
                year: Some(year),
                month: None,
                day: None,
            }),
        }
    }

    /// Sets the month of year, preserving the remaining fields.
    ///
    /// The value does not wrap: month 13 lands in January of the following
    /// year, month 0 in December of the preceding one.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the target date
    /// is not representable.
    pub fn set_month(&mut self, month: i32) -> Result<(), DateTimeError> {
        match month.checked_sub(self.month()) {
            Some(delta) => self.add_months(delta),
            None => Err(DateTimeError::InvalidComponents {
                year: None,
                month: Some(month),
                day: None,
            }),
        }
    }

    /// Sets the day of month, preserving the remaining fields.
    ///
    /// The value does not wrap: day 0 is the last day of the previous
    /// month, day 32 of a 31-day month is the first of the next.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the target date
    /// is not representable.
    pub fn set_day(&mut self, day: i32) -> Result<(), DateTimeError> {
        match day.checked_sub(self.day()) {
            Some(delta) => self.add_days(delta),
            None => Err(DateTimeError::InvalidComponents {
                year: None,
                month: None,
                day: Some(day),
            }),
        }
    }

    /// Sets the day of week (Sunday = 1 through Saturday = 7) by moving
    /// whole days, preserving the time of day.
    ///
    /// Values outside 1..=7 keep carrying: weekday 8 is the day after
    /// Saturday.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the target date
    /// is not representable.
    pub fn set_weekday(&mut self, weekday: i32) -> Result<(), DateTimeError> {
        weekday
            .checked_sub(self.weekday())
            .and_then(|delta| self.shift_days(i64::from(delta)))
            .ok_or(DateTimeError::InvalidComponents {
                year: None,
                month: None,
                day: None,
            })
    }

    /// Sets the hour of day, preserving the remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn set_hour(&mut self, hour: i32) -> Result<(), DateTimeError> {
        match hour.checked_sub(self.hour()) {
            Some(delta) => self.add_hours(delta),
            None => Err(self.time_shift_failed()),
        }
    }

    /// Sets the minute of hour, preserving the remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn set_minute(&mut self, minute: i32) -> Result<(), DateTimeError> {
        match minute.checked_sub(self.minute()) {
            Some(delta) => self.add_minutes(delta),
            None => Err(self.time_shift_failed()),
        }
    }

    /// Sets the second of minute, preserving the remaining fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidComponents`] when the shifted
    /// instant is not representable.
    pub fn set_second(&mut self, second: i32) -> Result<(), DateTimeError> {
        match second.checked_sub(self.second()) {
            Some(delta) => self.add_seconds(delta),
            None => Err(self.time_shift_failed()),
        }
    }

    // ---- Silent setters ----

    /// Sets the calendar year, keeping the value unchanged on failure.
    pub fn put_year(&mut self, year: i32) {
        if let Err(e) = self.set_year(year) {
            warn!(year, error = %e, "year not updated");
        }
    }

    /// Sets the month of year, keeping the value unchanged on failure.
    pub fn put_month(&mut self, month: i32) {
        if let Err(e) = self.set_month(month) {
            warn!(month, error = %e, "month not updated");
        }
    }

    /// Sets the day of month, keeping the value unchanged on failure.
    pub fn put_day(&mut self, day: i32) {
        if let Err(e) = self.set_day(day) {
            warn!(day, error = %e, "day not updated");
        }
    }

    /// Sets the day of week, keeping the value unchanged on failure.
    pub fn put_weekday(&mut self, weekday: i32) {
        if let Err(e) = self.set_weekday(weekday) {
            warn!(weekday, error = %e, "weekday not updated");
        }
    }

    /// Sets the hour of day, keeping the value unchanged on failure.
    pub fn put_hour(&mut self, hour: i32) {
        if let Err(e) = self.set_hour(hour) {
            warn!(hour, error = %e, "hour not updated");
        }
    }

    /// Sets the minute of hour, keeping the value unchanged on failure.
    pub fn put_minute(&mut self, minute: i32) {
        if let Err(e) = self.set_minute(minute) {
            warn!(minute, error = %e, "minute not updated");
        }
    }

    /// Sets the second of minute, keeping the value unchanged on failure.
    pub fn put_second(&mut self, second: i32) {
        if let Err(e) = self.set_second(second) {
            warn!(second, error = %e, "second not updated");
        }
    }

    // ---- Formatting ----

    /// Renders the value with the given pattern in UTC.
    pub fn format(&self, pattern: &str) -> String {
        self.format_in(pattern, Tz::UTC)
    }

    /// Renders the value with the given pattern in the system time zone.
    pub fn format_local(&self, pattern: &str) -> String {
        self.format_in(pattern, system_time_zone())
    }

    fn format_in(&self, pattern: &str, time_zone: Tz) -> String {
        let formatter = FormatterCache::global().formatter_for(
            pattern,
            time_zone,
            &Locale::posix(),
            self.context.kind(),
        );
        formatter.format(self.instant)
    }

    // ---- Shift plumbing ----

    /// Shifts the wall-clock date by whole months and remaps the result
    /// into the context zone. Mutates only on success.
    fn shift_months(&mut self, months: i32) -> Option<()> {
        let local = self.zoned().naive_local();
        let shifted = if months >= 0 {
            local.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            local.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        self.apply_local(shifted)
    }

    /// Shifts the wall-clock date by whole days and remaps the result into
    /// the context zone. Mutates only on success.
    fn shift_days(&mut self, days: i64) -> Option<()> {
        let local = self.zoned().naive_local();
        let shifted = if days >= 0 {
            local.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            local.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        self.apply_local(shifted)
    }

    fn apply_local(&mut self, shifted: Option<NaiveDateTime>) -> Option<()> {
        let instant = resolve_local(shifted?, self.context.time_zone())?;
        self.instant = instant;
        Some(())
    }

    fn shift_time(&mut self, delta: TimeDelta) -> Result<(), DateTimeError> {
        match self.instant.checked_add_signed(delta) {
            Some(instant) => {
                self.instant = instant;
                Ok(())
            }
            None => Err(self.time_shift_failed()),
        }
    }

    fn time_shift_failed(&self) -> DateTimeError {
        DateTimeError::InvalidComponents {
            year: None,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for DateTime {
    /// ISO-8601 timestamp in UTC.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(ISO8601_TIMESTAMP))
    }
}
