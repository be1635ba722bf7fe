//! Pattern-based date formatting and parsing.

use chrono::format::{Parsed, StrftimeItems};
use chrono::{DateTime as ChronoDateTime, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::context::{resolve_local, CalendarKind, Locale};
use crate::error::DateTimeError;

/// ISO-8601 timestamp pattern with offset, e.g. `2016-07-18T09:23:34+00:00`.
pub const ISO8601_TIMESTAMP: &str = "yyyy-MM-dd'T'HH:mm:ssZZZZZ";

/// ISO-8601 calendar date pattern, e.g. `2016-07-18`.
pub const ISO8601_DATE: &str = "yyyy-MM-dd";

/// A reusable formatter bound to a pattern, time zone, locale, and calendar
/// system.
///
/// Construction translates the caller-facing pattern once; `format` and
/// `parse` then delegate to the calendar engine. Formatters are immutable
/// and shared through the [`FormatterCache`](crate::FormatterCache) as
/// `Arc<DateFormatter>`.
///
/// # Pattern tokens
///
/// | Token | Meaning |
/// |-------|---------|
/// | `yyyy` | zero-padded year |
/// | `MM` | zero-padded month, 01-12 |
/// | `dd` | zero-padded day of month, 01-31 |
/// | `HH` | zero-padded hour of day, 00-23 |
/// | `mm` | zero-padded minute |
/// | `ss` | zero-padded second |
/// | `ZZZZZ` | offset from UTC with colon, `+00:00` for UTC |
///
/// Text between single quotes is literal; a doubled quote emits one quote.
/// Runs of other letters, and runs of the letters above with a different
/// length, pass through as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
    strftime: String,
    time_zone: Tz,
    locale: Locale,
    kind: CalendarKind,
}

impl DateFormatter {
    /// Creates a formatter for `pattern` bound to the given zone, locale,
    /// and calendar system.
    pub fn new(pattern: &str, time_zone: Tz, locale: Locale, kind: CalendarKind) -> Self {
        Self {
            pattern: pattern.to_string(),
            strftime: translate_pattern(pattern),
            time_zone,
            locale,
            kind,
        }
    }

    /// Returns the caller-facing pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the bound time zone.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Returns the bound locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns the bound calendar system.
    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// Renders `instant` in the formatter's time zone.
    pub fn format(&self, instant: ChronoDateTime<Utc>) -> String {
        instant
            .with_timezone(&self.time_zone)
            .format(&self.strftime)
            .to_string()
    }

    /// Parses `input` against the formatter's pattern.
    ///
    /// When the pattern captures an offset the instant is pinned by the
    /// string itself; otherwise the wall-clock fields are interpreted in
    /// the formatter's zone. A pattern without time tokens parses to
    /// midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidFormat`] when the string does not
    /// match the pattern or the fields do not form a real date.
    pub fn parse(&self, input: &str) -> Result<ChronoDateTime<Utc>, DateTimeError> {
        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, input, StrftimeItems::new(&self.strftime))
            .map_err(|_| self.invalid(input))?;

        if parsed.offset().is_some() {
            let pinned = parsed.to_datetime().map_err(|_| self.invalid(input))?;
            return Ok(pinned.with_timezone(&Utc));
        }

        let date = parsed.to_naive_date().map_err(|_| self.invalid(input))?;
        let time = parsed.to_naive_time().unwrap_or(NaiveTime::MIN);
        let naive = NaiveDateTime::new(date, time);
        resolve_local(naive, self.time_zone).ok_or_else(|| self.invalid(input))
    }

    fn invalid(&self, input: &str) -> DateTimeError {
        DateTimeError::InvalidFormat {
            string: input.to_string(),
            format: self.pattern.clone(),
        }
    }
}

/// Translates a caller-facing pattern into a strftime format string.
///
/// Total: every input produces a usable format string, with unrecognized
/// letter runs carried over as literal text. All parse failures therefore
/// surface when a string is matched, not when a formatter is built.
fn translate_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                // A doubled quote outside a quoted run is one literal quote.
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    out.push('\'');
                    continue;
                }
                while let Some(q) = chars.next() {
                    if q == '\'' {
                        if chars.peek() == Some(&'\'') {
                            chars.next();
                            out.push('\'');
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut out, q);
                }
            }
            c if c.is_ascii_alphabetic() => {
                let mut run = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    run += 1;
                }
                match (c, run) {
                    ('y', 4) => out.push_str("%Y"),
                    ('M', 2) => out.push_str("%m"),
                    ('d', 2) => out.push_str("%d"),
                    ('H', 2) => out.push_str("%H"),
                    ('m', 2) => out.push_str("%M"),
                    ('s', 2) => out.push_str("%S"),
                    ('Z', 5) => out.push_str("%:z"),
                    _ => {
                        for _ in 0..run {
                            out.push(c);
                        }
                    }
                }
            }
            c => push_literal(&mut out, c),
        }
    }
    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc_formatter(pattern: &str) -> DateFormatter {
        DateFormatter::new(pattern, Tz::UTC, Locale::posix(), CalendarKind::Gregorian)
    }

    #[test]
    fn translate_iso_timestamp() {
        assert_eq!(
            translate_pattern(ISO8601_TIMESTAMP),
            "%Y-%m-%dT%H:%M:%S%:z"
        );
    }

    #[test]
    fn translate_iso_date() {
        assert_eq!(translate_pattern(ISO8601_DATE), "%Y-%m-%d");
    }

    #[test]
    fn translate_time_only() {
        assert_eq!(translate_pattern("HH:mm"), "%H:%M");
    }

    #[test]
    fn translate_quoted_literal() {
        assert_eq!(translate_pattern("'at' HH"), "at %H");
    }

    #[test]
    fn translate_doubled_quote_inside_literal() {
        assert_eq!(translate_pattern("'o''clock'"), "o'clock");
    }

    #[test]
    fn translate_doubled_quote_outside_literal() {
        assert_eq!(translate_pattern("''"), "'");
    }

    #[test]
    fn translate_unrecognized_run_is_literal() {
        assert_eq!(translate_pattern("yy-M-d"), "yy-M-d");
    }

    #[test]
    fn translate_escapes_percent() {
        assert_eq!(translate_pattern("yyyy%"), "%Y%%");
    }

    #[test]
    fn format_iso_timestamp() {
        let formatter = utc_formatter(ISO8601_TIMESTAMP);
        let instant = Utc.with_ymd_and_hms(2016, 7, 18, 9, 23, 34).unwrap();
        assert_eq!(formatter.format(instant), "2016-07-18T09:23:34+00:00");
    }

    #[test]
    fn format_in_bound_zone() {
        let formatter = DateFormatter::new(
            ISO8601_TIMESTAMP,
            Tz::Europe__Zurich,
            Locale::posix(),
            CalendarKind::Gregorian,
        );
        let instant = Utc.with_ymd_and_hms(2016, 7, 18, 9, 23, 34).unwrap();
        // Zurich is UTC+2 in July.
        assert_eq!(formatter.format(instant), "2016-07-18T11:23:34+02:00");
    }

    #[test]
    fn parse_with_offset_pins_instant() {
        let formatter = DateFormatter::new(
            ISO8601_TIMESTAMP,
            Tz::Europe__Zurich,
            Locale::posix(),
            CalendarKind::Gregorian,
        );
        // The string carries its own offset, so the bound zone is ignored.
        let instant = formatter.parse("2016-07-18T09:23:34+00:00").unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2016, 7, 18, 9, 23, 34).unwrap()
        );
    }

    #[test]
    fn parse_nonzero_offset() {
        let formatter = utc_formatter(ISO8601_TIMESTAMP);
        let instant = formatter.parse("2016-07-18T11:23:34+02:00").unwrap();
        assert_eq!(
            instant,
            Utc.with_ymd_and_hms(2016, 7, 18, 9, 23, 34).unwrap()
        );
    }

    #[test]
    fn parse_date_only_is_midnight_in_bound_zone() {
        let formatter = DateFormatter::new(
            ISO8601_DATE,
            Tz::Europe__Zurich,
            Locale::posix(),
            CalendarKind::Gregorian,
        );
        let instant = formatter.parse("2016-07-18").unwrap();
        // Midnight in Zurich (UTC+2) is 22:00 the previous day in UTC.
        assert_eq!(instant, Utc.with_ymd_and_hms(2016, 7, 17, 22, 0, 0).unwrap());
    }

    #[test]
    fn parse_mismatched_string() {
        let formatter = utc_formatter(ISO8601_DATE);
        let err = formatter.parse("01-02-2015").unwrap_err();
        assert_eq!(
            err,
            DateTimeError::InvalidFormat {
                string: "01-02-2015".to_string(),
                format: ISO8601_DATE.to_string(),
            }
        );
    }

    #[test]
    fn parse_trailing_garbage() {
        let formatter = utc_formatter(ISO8601_DATE);
        assert!(formatter.parse("2016-07-18x").is_err());
    }

    #[test]
    fn parse_impossible_date() {
        let formatter = utc_formatter(ISO8601_DATE);
        assert!(formatter.parse("2015-02-29").is_err());
    }

    #[test]
    fn parse_quoted_literal_must_match() {
        let formatter = utc_formatter("yyyy-MM-dd'T'HH:mm");
        assert!(formatter.parse("2016-07-18T09:23").is_ok());
        assert!(formatter.parse("2016-07-18 09:23").is_err());
    }

    #[test]
    fn format_then_parse_round_trips() {
        let formatter = utc_formatter(ISO8601_TIMESTAMP);
        let instant = Utc.with_ymd_and_hms(2015, 12, 2, 9, 23, 34).unwrap();
        let rendered = formatter.format(instant);
        assert_eq!(formatter.parse(&rendered).unwrap(), instant);
    }

    #[test]
    fn accessors() {
        let formatter = utc_formatter(ISO8601_DATE);
        assert_eq!(formatter.pattern(), "yyyy-MM-dd");
        assert_eq!(formatter.time_zone(), Tz::UTC);
        assert_eq!(formatter.locale(), &Locale::posix());
        assert_eq!(formatter.kind(), CalendarKind::Gregorian);
    }
}
