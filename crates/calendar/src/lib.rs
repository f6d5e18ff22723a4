//! # yuletide-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, bounded to
//! years 1..=9999.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["i64"] -->|"Year::new()"| B["Year (1..=9999)"]
//!     B -->|"YearRange::new()"| C["YearRange"]
//!     B -->|"GregorianDate::christmas()"| D["GregorianDate"]
//!     D -->|".weekday()"| E["Weekday"]
//!     B -->|"is_sunday_christmas()"| F["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use yuletide_calendar::{Weekday, Year, YearRange, christmas_weekday, weekday};
//!
//! let year = Year::new(2022).unwrap();
//! assert_eq!(christmas_weekday(year), Weekday::Sunday);
//!
//! assert_eq!(weekday(2000, 1, 1).unwrap(), Weekday::Saturday);
//!
//! let range = YearRange::from_bounds(2000, 2100).unwrap();
//! assert_eq!(range.len(), 101);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `year` | `Year` newtype and `YearRange` |
//! | `doy` | Leap-year rule and day-of-year tables |
//! | `date` | Gregorian date and day-of-week rule |
//! | `weekday` | `Weekday` enumeration (Monday = 0) |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod weekday;
mod year;

pub use date::{
    CHRISTMAS_DAY, CHRISTMAS_MONTH, GregorianDate, christmas_weekday, is_sunday_christmas, weekday,
};
pub use doy::{day_of_year, days_before_year, days_in_month, is_leap_year};
pub use error::CalendarError;
pub use weekday::{WEEKDAYS, Weekday};
pub use year::{MAX_YEAR, MIN_YEAR, Year, YearRange};
