//! # kairos-datetime
//!
//! Calendar-aware date/time values with cached pattern formatting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str + pattern"] -->|"DateTime::parse_in()"| B["DateTime"]
//!     C["DateComponents"] -->|"DateTime::from_components()"| B
//!     B -->|".add_months() / .set_day()"| B
//!     B -->|".format()"| D["String"]
//!     E["CalendarContext"] --> B
//!     F["FormatterCache"] -->|"Arc of DateFormatter"| B
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_datetime::{CalendarContext, DateTime, Tz, ISO8601_TIMESTAMP};
//!
//! // Parsing binds the string to a calendar context
//! let mut dt = DateTime::parse_in(
//!     "2016-07-18T09:23:34+00:00",
//!     ISO8601_TIMESTAMP,
//!     CalendarContext::utc(),
//! )
//! .unwrap();
//!
//! // Field writes carry instead of wrapping
//! dt.set_month(13).unwrap(); // → 2017-01-18
//! dt.add_days(-18).unwrap(); // → 2016-12-31
//!
//! // Reading happens in the context zone
//! dt.set_time_zone(Tz::Europe__Zurich);
//! let hour = dt.hour();
//!
//! // Rendering reuses cached formatters
//! let stamp = dt.format(ISO8601_TIMESTAMP);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `datetime` | The calendar-aware value and its field operations |
//! | `components` | Optional field bundle for construction and snapshots |
//! | `context` | Calendar system, time zone, and locale bundle |
//! | `fmt` | Pattern translation, formatting, and parsing |
//! | `cache` | Bounded process-wide formatter cache |
//! | `error` | Error types |

mod cache;
mod components;
mod context;
mod datetime;
mod error;
mod fmt;

pub use cache::{FormatterCache, DEFAULT_CACHE_CAPACITY};
pub use components::DateComponents;
pub use context::{system_time_zone, CalendarContext, CalendarKind, Locale};
pub use datetime::DateTime;
pub use error::DateTimeError;
pub use fmt::{DateFormatter, ISO8601_DATE, ISO8601_TIMESTAMP};

pub use chrono_tz::Tz;
