//! Error types for the kairos-datetime crate.

/// Error type for all fallible operations in the kairos-datetime crate.
///
/// This enum covers string parsing failures and component sets that do not
/// resolve to a representable instant. Variants carry the offending values
/// so callers can report them without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Returned when a string does not match the pattern it was parsed with.
    #[error("invalid date string {string:?} for format {format:?}")]
    InvalidFormat {
        /// The string that failed to parse.
        string: String,
        /// The caller-facing pattern it was matched against.
        format: String,
    },

    /// Returned when a string matches none of the known formats.
    ///
    /// Reserved for format auto-detection; the pattern-based constructors
    /// never produce it.
    #[error("unrecognized date string {string:?}")]
    UnknownFormat {
        /// The string that matched no format.
        string: String,
    },

    /// Returned when date components do not resolve to an instant, either
    /// because no calendar context is attached or because the resolved date
    /// falls outside the representable range.
    ///
    /// Only the fields involved in the failing operation are populated.
    #[error(
        "invalid date components: year {}, month {}, day {}",
        opt_field(.year),
        opt_field(.month),
        opt_field(.day)
    )]
    InvalidComponents {
        /// The year involved in the failure, if any.
        year: Option<i32>,
        /// The month involved in the failure, if any.
        month: Option<i32>,
        /// The day involved in the failure, if any.
        day: Option<i32>,
    },
}

fn opt_field(value: &Option<i32>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}
