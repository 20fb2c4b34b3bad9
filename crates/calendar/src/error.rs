//! Error types for the miti-calendar crate.

/// Error type for all fallible operations in the miti-calendar crate.
///
/// This enum covers validation failures for month numbers, day-of-month
/// values, Bikram Sambat years, Gregorian civil dates, weekday indices,
/// and Devanagari numeral strings.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the maximum a month can hold.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a Bikram Sambat year is not a positive number.
    #[error("invalid Bikram Sambat year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a `(year, month, day)` triple does not name a real
    /// proleptic-Gregorian civil date (e.g. April 31 or February 30).
    #[error("invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidGregorian {
        /// The year component of the rejected date.
        year: i32,
        /// The month component of the rejected date.
        month: u8,
        /// The day component of the rejected date.
        day: u8,
    },

    /// Returned when a weekday index is outside 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6, Sunday = 0)")]
    InvalidWeekday {
        /// The invalid weekday index that was provided.
        index: u8,
    },

    /// Returned when a string is not a plain Devanagari numeral.
    #[error("invalid Devanagari numeral: '{text}'")]
    InvalidNumeral {
        /// The text that could not be parsed.
        text: String,
    },
}
