//! Calendar context: calendar system, time zone, and locale.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime as ChronoDateTime, MappedLocalTime, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;

/// Calendar system used to interpret an instant.
///
/// One working calendar at a time; only the proleptic Gregorian calendar is
/// currently implemented. The kind participates in formatter cache keys so
/// additional calendars can slot in without changing the cache contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarKind {
    /// The proleptic Gregorian calendar.
    #[default]
    Gregorian,
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarKind::Gregorian => write!(f, "gregorian"),
        }
    }
}

/// Locale identifier attached to formatters and contexts.
///
/// The recognized pattern tokens are all numeric, so rendered text does not
/// vary across locales; the identifier still participates in formatter
/// cache identity. Defaults to `en_US_POSIX`, the fixed machine-format
/// locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from an identifier such as `de_CH`.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self(identifier.into())
    }

    /// The fixed `en_US_POSIX` machine-format locale.
    pub fn posix() -> Self {
        Self("en_US_POSIX".to_string())
    }

    /// Returns the locale identifier.
    pub fn identifier(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::posix()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The calendar context carried by every date/time value: the calendar
/// system, the time zone used to read and write calendar fields, and the
/// locale.
///
/// # Example
///
/// ```
/// use kairos_datetime::{CalendarContext, CalendarKind};
///
/// let context = CalendarContext::utc();
/// assert_eq!(context.kind(), CalendarKind::Gregorian);
/// assert_eq!(context.time_zone().name(), "UTC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarContext {
    kind: CalendarKind,
    time_zone: Tz,
    locale: Locale,
}

impl CalendarContext {
    /// Gregorian calendar in the system time zone with the POSIX locale.
    ///
    /// The zone is looked up on each call so long-running processes follow
    /// host zone changes; see [`system_time_zone`].
    pub fn system() -> Self {
        Self {
            kind: CalendarKind::Gregorian,
            time_zone: system_time_zone(),
            locale: Locale::posix(),
        }
    }

    /// Gregorian calendar in UTC with the POSIX locale.
    pub fn utc() -> Self {
        Self {
            kind: CalendarKind::Gregorian,
            time_zone: Tz::UTC,
            locale: Locale::posix(),
        }
    }

    /// Sets the time zone.
    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Sets the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Returns the calendar system.
    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// Returns the time zone.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Returns the locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Replaces the time zone in place.
    pub fn set_time_zone(&mut self, time_zone: Tz) {
        self.time_zone = time_zone;
    }
}

impl Default for CalendarContext {
    fn default() -> Self {
        Self::system()
    }
}

/// Returns the system time zone, falling back to UTC when the host zone
/// cannot be determined or its name is unknown to the bundled database.
pub fn system_time_zone() -> Tz {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| Tz::from_str(&name).ok())
        .unwrap_or(Tz::UTC)
}

/// Maps a wall-clock reading in `tz` to an absolute instant.
///
/// Readings that occur twice (clocks rolled back) take the earlier instant.
/// Readings skipped by a forward transition are retried one hour later.
pub(crate) fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<ChronoDateTime<Utc>> {
    use chrono::TimeZone as _;

    match tz.from_local_datetime(&naive) {
        MappedLocalTime::Single(dt) => Some(dt.with_timezone(&Utc)),
        MappedLocalTime::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        MappedLocalTime::None => {
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            match tz.from_local_datetime(&shifted) {
                MappedLocalTime::Single(dt) => Some(dt.with_timezone(&Utc)),
                MappedLocalTime::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
                MappedLocalTime::None => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn kind_default_is_gregorian() {
        assert_eq!(CalendarKind::default(), CalendarKind::Gregorian);
    }

    #[test]
    fn kind_display() {
        assert_eq!(CalendarKind::Gregorian.to_string(), "gregorian");
    }

    #[test]
    fn locale_default_is_posix() {
        assert_eq!(Locale::default().identifier(), "en_US_POSIX");
    }

    #[test]
    fn locale_display() {
        assert_eq!(Locale::new("de_CH").to_string(), "de_CH");
    }

    #[test]
    fn utc_context() {
        let context = CalendarContext::utc();
        assert_eq!(context.kind(), CalendarKind::Gregorian);
        assert_eq!(context.time_zone(), Tz::UTC);
        assert_eq!(context.locale(), &Locale::posix());
    }

    #[test]
    fn builder_chaining() {
        let context = CalendarContext::utc()
            .with_time_zone(Tz::Europe__Zurich)
            .with_locale(Locale::new("de_CH"));
        assert_eq!(context.time_zone(), Tz::Europe__Zurich);
        assert_eq!(context.locale().identifier(), "de_CH");
    }

    #[test]
    fn set_time_zone_in_place() {
        let mut context = CalendarContext::utc();
        context.set_time_zone(Tz::America__New_York);
        assert_eq!(context.time_zone(), Tz::America__New_York);
    }

    #[test]
    fn system_zone_resolves() {
        // Whatever the host is set to, the lookup must produce a usable zone.
        let tz = system_time_zone();
        assert!(!tz.name().is_empty());
    }

    #[test]
    fn resolve_local_unambiguous() {
        let naive = NaiveDate::from_ymd_opt(2016, 7, 18)
            .unwrap()
            .and_hms_opt(9, 23, 34)
            .unwrap();
        let instant = resolve_local(naive, Tz::UTC).unwrap();
        assert_eq!(instant.to_rfc3339(), "2016-07-18T09:23:34+00:00");
    }

    #[test]
    fn resolve_local_gap_moves_forward() {
        // US spring-forward 2016: 02:30 on March 13 never happened in
        // New York; the mapping retries an hour later.
        let naive = NaiveDate::from_ymd_opt(2016, 3, 13)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let instant = resolve_local(naive, Tz::America__New_York).unwrap();
        assert_eq!(instant.to_rfc3339(), "2016-03-13T07:30:00+00:00");
    }

    #[test]
    fn resolve_local_fold_takes_earlier() {
        // US fall-back 2016: 01:30 on November 6 happened twice in New
        // York; the mapping takes the EDT (earlier) reading.
        let naive = NaiveDate::from_ymd_opt(2016, 11, 6)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let instant = resolve_local(naive, Tz::America__New_York).unwrap();
        assert_eq!(instant.to_rfc3339(), "2016-11-06T05:30:00+00:00");
    }
}
