//! # miti-data
//!
//! Year-table model, validation, and cached store for the Bikram Sambat
//! calendar engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["<dir>/<year>.json"] -->|"serde_json"| B["YearTable"]
//!     B -->|"validate_year_table()"| B
//!     B -->|"publish as Arc"| C["YearStore cache"]
//!     C -->|".get(year)"| D["Arc of YearTable"]
//!     D -->|".month() / .day()"| E["MonthTable / DayEntry"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use miti_data::YearStore;
//!
//! let store = YearStore::new("data");
//! let table = store.get(2081)?;
//! assert_eq!(table.months().len(), 12);
//!
//! // Second call is a cache hit, no re-parse
//! let again = store.get(2081)?;
//! assert_eq!(store.load_count(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `model` | `YearTable`, `MonthTable`, `DayEntry` and the JSON schema |
//! | `store` | `YearStore`: lazy, never-evicted per-year cache |
//! | `validate` | Accumulated invariant validation |
//! | `error` | Error types |

mod error;
mod model;
mod store;
mod validate;

pub use error::DataError;
pub use model::{DayEntry, MonthTable, YearTable};
pub use store::YearStore;
