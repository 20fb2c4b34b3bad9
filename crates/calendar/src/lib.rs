//! # miti-calendar
//!
//! Pure date arithmetic for the Bikram Sambat calendar engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"GregorianDate::new()"| B["GregorianDate (JDN)"]
//!     B -->|".next() / .plus_days()"| B
//!     B -->|".weekday()"| C["Weekday (Sunday = 0)"]
//!     C -->|".name()"| D["localized names"]
//!     E["(year, month)"] -->|"month_after() / month_before()"| E
//!     F["BsDate"] -->|".weekday()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use miti_calendar::{GregorianDate, Weekday, month_after, month_name, numeral};
//!
//! // Civil dates via Julian day numbers
//! let date = GregorianDate::new(2024, 4, 13).unwrap();
//! assert_eq!(date.weekday(), Weekday::Saturday);
//!
//! // Month-step arithmetic carries into the year
//! assert_eq!(month_after(2081, 12).unwrap(), (2082, 1));
//!
//! // Localized display pieces
//! assert_eq!(month_name(1).unwrap(), "बैशाख");
//! assert_eq!(numeral::to_devanagari(2081), "२०८१");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Proleptic-Gregorian civil date backed by a Julian day number |
//! | `bs_date` | Resolved Bikram Sambat date value |
//! | `weekday` | Nepali-week-aligned weekday (Sunday = 0) |
//! | `navigate` | Pure month-step arithmetic on `(year, month)` |
//! | `names` | Localized month names |
//! | `numeral` | Devanagari numeral conversion |
//! | `error` | Error types |

mod bs_date;
mod error;
mod gregorian;
mod names;
mod navigate;
mod weekday;

pub mod numeral;

pub use bs_date::{BsDate, MAX_MONTH_DAYS, MIN_MONTH_DAYS};
pub use error::CalendarError;
pub use gregorian::GregorianDate;
pub use names::month_name;
pub use navigate::{month_after, month_before};
pub use weekday::Weekday;
