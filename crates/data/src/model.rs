//! Year-table data model.
//!
//! A [`YearTable`] is the immutable per-year calendar definition: twelve
//! months, each an ordered sequence of day entries with display and
//! annotation metadata. Month lengths in the Bikram Sambat calendar are
//! fixed astronomically year by year and published as static tables, so
//! these values are loaded from bundled resources, never computed.

use serde::Deserialize;

/// One day of a Bikram Sambat month.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DayEntry {
    /// Display-ready Devanagari day numeral (e.g. "१").
    pub day: String,

    /// Day-of-month (1..=31) in the Gregorian calendar this entry falls
    /// on, used for conversion anchoring and same-day highlighting.
    pub greg_day: u8,

    /// Whether this day is a public holiday.
    #[serde(default)]
    pub is_holiday: bool,

    /// Lunar-day label, when the source table annotates one.
    #[serde(default)]
    pub tithi: Option<String>,

    /// Event names joined with `/`, when the source table annotates any.
    #[serde(default)]
    pub events: Option<String>,
}

/// One month of a Bikram Sambat year: an ordered sequence of day entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthTable {
    days: Vec<DayEntry>,
}

impl MonthTable {
    /// Returns the ordered day entries.
    pub fn days(&self) -> &[DayEntry] {
        &self.days
    }

    /// Returns the number of days in the month.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the month has no days.
    ///
    /// A validated table never returns `true` here; the accessor exists
    /// because the type is also the deserialization target.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// The immutable calendar definition for one Bikram Sambat year.
///
/// Construction happens only by deserializing a per-year resource; the
/// store validates every invariant before a table is published, and a
/// published table is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearTable {
    year: i32,
    months: Vec<MonthTable>,
}

impl YearTable {
    /// Returns the Bikram Sambat year this table describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ordered months (index 0 = बैशाख .. index 11 = चैत).
    pub fn months(&self) -> &[MonthTable] {
        &self.months
    }

    /// Returns the month at 1-based `month`, if it exists.
    pub fn month(&self, month: u8) -> Option<&MonthTable> {
        self.months.get(usize::from(month).checked_sub(1)?)
    }

    /// Returns the entry for 1-based `(month, day)`, if it exists.
    pub fn day(&self, month: u8, day: u8) -> Option<&DayEntry> {
        self.month(month)?.days().get(usize::from(day).checked_sub(1)?)
    }

    /// Returns the total number of days in the year.
    pub fn total_days(&self) -> usize {
        self.months.iter().map(MonthTable::len).sum()
    }
}
