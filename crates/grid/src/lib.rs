//! # kairos-grid
//!
//! Month grids for calendar views, padded to whole weeks.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month)"] -->|"first_day_of_month()"| B["DateTime"]
//!     A -->|"last_day_of_month()"| B
//!     A -->|"month_days()"| C["Vec of DateTime (28-31)"]
//!     A -->|"complete_weeks()"| D["Vec of DateTime (len % 7 == 0)"]
//!     C --> D
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use kairos_datetime::CalendarContext;
//! use kairos_grid::{complete_weeks, last_day_of_month, month_days};
//!
//! let utc = CalendarContext::utc();
//!
//! // Month boundaries without a day-count table
//! let close = last_day_of_month(2016, 2, &utc).unwrap();
//! assert_eq!(close.day(), 29);
//!
//! // One midnight per day of the month
//! let days = month_days(2015, 12, &utc).unwrap();
//! assert_eq!(days.len(), 31);
//!
//! // Sunday-through-Saturday grid for a calendar view
//! let grid = complete_weeks(2015, 12).unwrap();
//! assert_eq!(grid.len(), 35);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month boundaries and per-day expansion |
//! | `weeks` | Week-aligned grid assembly |
//! | `error` | Error types |

mod error;
mod month;
mod weeks;

pub use error::GridError;
pub use month::{first_day_of_month, last_day_of_month, month_days};
pub use weeks::complete_weeks;
