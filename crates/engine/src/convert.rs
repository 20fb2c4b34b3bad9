//! Gregorian to Bikram Sambat conversion.
//!
//! Month lengths in the Bikram Sambat calendar are table-driven, so
//! conversion cannot be a formula: the converter anchors each year table
//! at its Gregorian new-year date and walks the table day by day,
//! cross-checking every entry's `greg_day` against the real civil
//! calendar as it goes.

use tracing::{debug, error};

use miti_calendar::{BsDate, GregorianDate, Weekday, month_after, month_before};
use miti_data::{DataError, MonthTable, YearStore, YearTable};

use crate::clock::Clock;
use crate::error::EngineError;

/// Throughout the era covered by published tables the Bikram Sambat new
/// year falls in Gregorian April, 57 years behind the BS year count. A
/// Gregorian year `gy` therefore overlaps the BS year starting that
/// April (`gy + 57`) and the one started the previous April (`gy + 56`).
const BS_YEAR_OFFSET: i32 = 57;

/// Gregorian month of the Bikram Sambat new year.
const NEW_YEAR_MONTH: u8 = 4;

/// A validated `(year, month)` coordinate with its day count.
///
/// Returned by month navigation so callers can clamp a previously
/// selected day to the new month before any day-level operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    /// Bikram Sambat year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u8,
    /// Number of days in the month per its year table.
    pub days: u8,
}

/// Conversion and lookup engine over a [`YearStore`].
///
/// All queries are synchronous and deterministic for a given data
/// directory; the only side effect is populating the store's cache.
#[derive(Debug)]
pub struct Converter {
    store: YearStore,
}

impl Converter {
    /// Creates a converter over `store`.
    pub fn new(store: YearStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &YearStore {
        &self.store
    }

    /// Converts a Gregorian civil date to its Bikram Sambat date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfRange`] when no available year table
    /// contains `target`, and [`EngineError::Data`] when a candidate
    /// table exists but is corrupt or unreadable. A missing candidate
    /// table only narrows the span; it never aborts the other candidate.
    pub fn convert(&self, target: GregorianDate) -> Result<BsDate, EngineError> {
        let gy = target.year();
        for bs_year in [gy + BS_YEAR_OFFSET, gy + BS_YEAR_OFFSET - 1] {
            let table = match self.store.get(bs_year) {
                Ok(table) => table,
                Err(DataError::NotFound { .. }) => {
                    debug!(bs_year, "no table for candidate year");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            if let Some(date) = scan_table(&table, target)? {
                return Ok(date);
            }
        }

        let (gy, gm, gd) = target.ymd();
        Err(EngineError::OutOfRange {
            year: gy,
            month: gm,
            day: gd,
            span: span_label(self.store.span()),
        })
    }

    /// Converts the clock's current date, i.e. "today's Nepali date".
    ///
    /// # Errors
    ///
    /// Same conditions as [`convert`](Self::convert).
    pub fn current<C: Clock>(&self, clock: &C) -> Result<BsDate, EngineError> {
        self.convert(clock.today())
    }

    /// Converts a Bikram Sambat `(year, month, day)` back to its
    /// Gregorian civil date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] when no table exists for `year` and
    /// [`EngineError::Resolution`] when `(month, day)` does not exist in
    /// that year's table.
    pub fn to_gregorian(&self, year: i32, month: u8, day: u8) -> Result<GregorianDate, EngineError> {
        let table = self.store.get(year)?;
        let month_table = table
            .month(month)
            .ok_or_else(|| resolution(year, month, day))?;
        if day == 0 || usize::from(day) > month_table.len() {
            return Err(resolution(year, month, day));
        }

        let prior_days: i64 = table.months()[..usize::from(month) - 1]
            .iter()
            .map(|m| m.len() as i64)
            .sum();
        Ok(anchor(&table)?.plus_days(prior_days + i64::from(day) - 1))
    }

    /// Moves one Bikram Sambat month forward, validating that the target
    /// month's day count is known.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] when the target year has no table,
    /// which is how navigation discovers the edge of the data span.
    pub fn next_month(&self, year: i32, month: u8) -> Result<MonthRef, EngineError> {
        let (year, month) = month_after(year, month)?;
        self.month_ref(year, month)
    }

    /// Moves one Bikram Sambat month backward, validating that the
    /// target month's day count is known.
    ///
    /// # Errors
    ///
    /// Same conditions as [`next_month`](Self::next_month).
    pub fn prev_month(&self, year: i32, month: u8) -> Result<MonthRef, EngineError> {
        let (year, month) = month_before(year, month)?;
        self.month_ref(year, month)
    }

    /// Returns the weekday of day 1 of a Bikram Sambat month.
    ///
    /// The index doubles as the number of leading blank cells in a
    /// Sunday-first calendar grid.
    ///
    /// # Errors
    ///
    /// Same conditions as [`to_gregorian`](Self::to_gregorian).
    pub fn first_weekday_of_month(&self, year: i32, month: u8) -> Result<Weekday, EngineError> {
        Ok(self.to_gregorian(year, month, 1)?.weekday())
    }

    /// Returns an owned copy of the ordered day entries of a month, for
    /// grid rendering.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] when the year has no table and
    /// [`EngineError::Calendar`] when `month` is not in 1..=12.
    pub fn month_table(&self, year: i32, month: u8) -> Result<MonthTable, EngineError> {
        let table = self.store.get(year)?;
        let month_table = table
            .month(month)
            .ok_or(miti_calendar::CalendarError::InvalidMonth { month })?;
        Ok(month_table.clone())
    }

    fn month_ref(&self, year: i32, month: u8) -> Result<MonthRef, EngineError> {
        let table = self.store.get(year)?;
        let days = table
            .month(month)
            .map(|m| m.len() as u8)
            .ok_or_else(|| resolution(year, month, 1))?;
        Ok(MonthRef { year, month, days })
    }
}

/// The Gregorian date of day 1 of a year table: April of `year - 57`,
/// on the day-of-month the table's first entry records.
fn anchor(table: &YearTable) -> Result<GregorianDate, EngineError> {
    let first = table
        .day(1, 1)
        .expect("validated tables have a first day");
    Ok(GregorianDate::new(
        table.year() - BS_YEAR_OFFSET,
        NEW_YEAR_MONTH,
        first.greg_day,
    )?)
}

/// Walk `table` looking for the entry whose reconstructed civil date is
/// `target`.
///
/// Returns `Ok(None)` when `target` lies outside the table's span, and
/// [`DataError::Corrupt`] when an entry's `greg_day` disagrees with the
/// civil date reconstructed by the day-by-day cursor — a table whose
/// wrap points contradict the Gregorian month lengths must be reported,
/// never silently shifted around.
fn scan_table(table: &YearTable, target: GregorianDate) -> Result<Option<BsDate>, EngineError> {
    let mut cursor = anchor(table)?;
    let total = table.total_days() as i64;
    if target < cursor || target.jdn() >= cursor.jdn() + total {
        return Ok(None);
    }

    for (mi, month) in table.months().iter().enumerate() {
        for (di, entry) in month.days().iter().enumerate() {
            if entry.greg_day != cursor.day() {
                return Err(DataError::Corrupt {
                    year: table.year(),
                    count: 1,
                    details: format!(
                        "month {} day {}: greg_day {} disagrees with civil date {}",
                        mi + 1,
                        di + 1,
                        entry.greg_day,
                        cursor
                    ),
                }
                .into());
            }
            if cursor == target {
                return Ok(Some(BsDate::new(
                    table.year(),
                    (mi + 1) as u8,
                    (di + 1) as u8,
                    cursor.weekday(),
                )?));
            }
            cursor = cursor.next();
        }
    }
    Ok(None)
}

/// Format a store span for the out-of-range error message.
fn span_label(span: Option<(i32, i32)>) -> String {
    match span {
        Some((lo, hi)) => format!("{lo}..={hi}"),
        None => "no tables available".to_string(),
    }
}

/// Build a [`EngineError::Resolution`] and log the contract violation.
pub(crate) fn resolution(year: i32, month: u8, day: u8) -> EngineError {
    error!(year, month, day, "date does not resolve against its year table");
    EngineError::Resolution { year, month, day }
}
