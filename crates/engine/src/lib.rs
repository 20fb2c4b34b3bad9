//! # miti-engine
//!
//! Gregorian to Bikram Sambat conversion and display formatting.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["Clock / GregorianDate"] -->|"Converter::convert()"| B["BsDate"]
//!     B -->|"Converter::format()"| C["DayDisplay"]
//!     D["YearStore"] -->|"per-year Arc tables"| E["Converter"]
//!     E -->|"next_month() / prev_month()"| F["MonthRef"]
//!     E -->|"month_table()"| G["MonthTable (grid rows)"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use miti_engine::{Converter, FixedClock};
//! use miti_calendar::GregorianDate;
//! use miti_data::YearStore;
//!
//! let engine = Converter::new(YearStore::new("data"));
//! let clock = FixedClock::new(GregorianDate::new(2024, 4, 13)?);
//!
//! let today = engine.current(&clock)?;            // BS 2081-01-01
//! let display = engine.format(&today)?;           // "१ बैशाख २०८१", tithi, events
//! let blanks = engine.first_weekday_of_month(2081, 1)?.index();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | `Converter`: conversion, navigation, grid queries |
//! | `format` | `DayDisplay` rendering from table annotations |
//! | `clock` | Caller-owned clock seam with a fixed test clock |
//! | `error` | Error types |

mod clock;
mod convert;
mod error;
mod format;

pub use clock::{Clock, FixedClock};
pub use convert::{Converter, MonthRef};
pub use error::EngineError;
pub use format::DayDisplay;

// The consumer surface hands these types straight through.
pub use miti_calendar::{BsDate, CalendarError, GregorianDate, Weekday};
pub use miti_data::{DataError, DayEntry, MonthTable, YearStore, YearTable};
