//! Error types for the kairos-grid crate.

/// Error type for the fallible grid builders in this crate.
///
/// The day-level detail of the underlying component failure is dropped:
/// a grid is requested per month, so the month is the unit that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Returned when no day grid can be produced for the given month.
    #[error("invalid month {month} for year {year}")]
    InvalidMonth {
        /// The year the grid was requested for.
        year: i32,
        /// The month number the grid was requested for.
        month: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = GridError::InvalidMonth {
            year: 999_999,
            month: 1,
        };
        assert_eq!(err.to_string(), "invalid month 1 for year 999999");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<GridError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<GridError>();
    }

    #[test]
    fn error_is_clone() {
        let err = GridError::InvalidMonth {
            year: 2015,
            month: 13,
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }

    #[test]
    fn error_is_partial_eq() {
        let a = GridError::InvalidMonth {
            year: 2015,
            month: 0,
        };
        let b = GridError::InvalidMonth {
            year: 2015,
            month: 0,
        };
        assert_eq!(a, b);

        let c = GridError::InvalidMonth {
            year: 2016,
            month: 0,
        };
        assert_ne!(a, c);
    }
}
