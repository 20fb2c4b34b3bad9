//! Proleptic-Gregorian civil date backed by a Julian day number.

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// A civil date in the proleptic Gregorian calendar.
///
/// The date is stored both as `(year, month, day)` components and as its
/// Julian day number, so day arithmetic and weekday derivation are plain
/// integer operations with no month-length tables involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
    jdn: i64,
}

impl PartialOrd for GregorianDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GregorianDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.jdn.cmp(&other.jdn)
    }
}

/// Julian day number of a proleptic-Gregorian `(year, month, day)`.
///
/// Fliegel–Van Flandern arithmetic; truncating division is intentional.
fn jdn_from_ymd(year: i64, month: i64, day: i64) -> i64 {
    let a = (month - 14) / 12;
    (1461 * (year + 4800 + a)) / 4 + (367 * (month - 2 - 12 * a)) / 12
        - (3 * ((year + 4900 + a) / 100)) / 4
        + day
        - 32075
}

/// Inverse of [`jdn_from_ymd`].
fn ymd_from_jdn(jdn: i64) -> (i32, u8, u8) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u8, day as u8)
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    /// Returns [`CalendarError::InvalidGregorian`] if the triple does not
    /// name a real civil date (e.g. April 31, or February 29 in a common
    /// year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let jdn = jdn_from_ymd(i64::from(year), i64::from(month), i64::from(day));
        // Round-tripping through the JDN rejects out-of-range days without
        // a separate month-length table.
        if ymd_from_jdn(jdn) != (year, month, day) {
            return Err(CalendarError::InvalidGregorian { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            jdn,
        })
    }

    /// Creates a `GregorianDate` directly from a Julian day number.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = ymd_from_jdn(jdn);
        Self {
            year,
            month,
            day,
            jdn,
        }
    }

    /// Returns the Julian day number.
    pub fn jdn(self) -> i64 {
        self.jdn
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` as a tuple.
    pub fn ymd(self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// Returns the weekday, Nepali-week-aligned (Sunday = 0).
    pub fn weekday(self) -> Weekday {
        Weekday::from_jdn(self.jdn)
    }

    /// Returns the next civil date.
    pub fn next(self) -> Self {
        Self::from_jdn(self.jdn + 1)
    }

    /// Returns the date `days` days away (negative values go backwards).
    pub fn plus_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn + days)
    }
}

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
