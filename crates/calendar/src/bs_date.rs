//! Resolved Bikram Sambat date.

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// Maximum number of days any Bikram Sambat month has ever held.
pub const MAX_MONTH_DAYS: u8 = 32;

/// Minimum number of days any Bikram Sambat month has ever held.
pub const MIN_MONTH_DAYS: u8 = 29;

/// A resolved date in the Bikram Sambat calendar.
///
/// This is a value produced by conversion, not persisted anywhere: the
/// caller owns it and the engine re-derives a fresh one per query. The day
/// is validated against the historic 1..=32 bound here; whether the day
/// actually exists in the given year's month is only known to the year
/// table the date was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BsDate {
    year: i32,
    month: u8,
    day: u8,
    weekday: Weekday,
}

impl PartialOrd for BsDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BsDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl BsDate {
    /// Creates a new `BsDate` from year, month, day, and weekday.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is not positive,
    /// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, or
    /// [`CalendarError::InvalidDay`] if `day` is outside the historic
    /// 1..=32 bound.
    pub fn new(year: i32, month: u8, day: u8, weekday: Weekday) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::InvalidYear { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        if !(1..=MAX_MONTH_DAYS).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day: MAX_MONTH_DAYS,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            weekday,
        })
    }

    /// Returns the Bikram Sambat year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = बैशाख .. 12 = चैत).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=32).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday (Sunday = 0).
    pub fn weekday(self) -> Weekday {
        self.weekday
    }
}
