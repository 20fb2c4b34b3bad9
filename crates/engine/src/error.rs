//! Error types for miti-engine.

use miti_calendar::CalendarError;
use miti_data::DataError;

/// Error type for all fallible operations in the miti-engine crate.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Returned when a Gregorian date falls outside the span covered by
    /// the available year tables.
    #[error(
        "{year:04}-{month:02}-{day:02} is outside the available table span ({span})"
    )]
    OutOfRange {
        /// The year of the unconvertible Gregorian date.
        year: i32,
        /// The month of the unconvertible Gregorian date.
        month: u8,
        /// The day of the unconvertible Gregorian date.
        day: u8,
        /// Human-readable description of the covered span.
        span: String,
    },

    /// Returned when a Bikram Sambat date does not resolve against the
    /// year table it names.
    ///
    /// Dates produced by the converter always resolve against the tables
    /// they were derived from, so this signals a caller-built date that
    /// violates the contract. It is surfaced, never swallowed.
    #[error("date {year}-{month}-{day} does not resolve against its year table")]
    Resolution {
        /// The Bikram Sambat year of the unresolvable date.
        year: i32,
        /// The month of the unresolvable date.
        month: u8,
        /// The day of the unresolvable date.
        day: u8,
    },

    /// Wraps a failure from the year-table store.
    #[error("calendar data error: {0}")]
    Data(#[from] DataError),

    /// Wraps a failure from the date-arithmetic layer.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}
