//! Accumulated validation of year-table invariants.
//!
//! Provides [`ValidationCollector`] for gathering every invariant
//! violation found in one resource into a single [`DataError::Corrupt`],
//! plus the table-level checks the store runs before publishing a table.

use miti_calendar::{MAX_MONTH_DAYS, MIN_MONTH_DAYS, numeral};

use crate::error::DataError;
use crate::model::YearTable;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates invariant violations and converts them into a single
/// [`DataError::Corrupt`].
///
/// Create a collector, push zero or more violation messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or
/// a single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one violation.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no violations have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collector and return `Ok(())` if no violations were
    /// recorded, or `Err(DataError::Corrupt { .. })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self, year: i32) -> Result<(), DataError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DataError::Corrupt {
                year,
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Table-level checks
// ---------------------------------------------------------------------------

/// Validate every invariant a published [`YearTable`] must hold.
///
/// Checks, in order:
/// - the `year` field matches the requested year;
/// - the table has exactly 12 months;
/// - every month's day count is within the historic 29..=32 range;
/// - every day numeral is Devanagari and equals its 1-based position;
/// - every `greg_day` is within 1..=31;
/// - the `greg_day` sequence increments by one everywhere, wrapping to 1
///   only from a value of 28 or more, including across month boundaries.
///
/// # Errors
///
/// Returns [`DataError::Corrupt`] carrying every violation found.
pub(crate) fn validate_year_table(table: &YearTable, requested_year: i32) -> Result<(), DataError> {
    let mut c = ValidationCollector::new();

    if table.year() != requested_year {
        c.push(format!(
            "year field {} does not match requested year {requested_year}",
            table.year()
        ));
    }

    if table.months().len() != 12 {
        c.push(format!("expected 12 months, got {}", table.months().len()));
    }

    for (mi, month) in table.months().iter().enumerate() {
        let month_no = mi + 1;
        let len = month.len();
        if !(usize::from(MIN_MONTH_DAYS)..=usize::from(MAX_MONTH_DAYS)).contains(&len) {
            c.push(format!(
                "month {month_no} has {len} days (must be {MIN_MONTH_DAYS}..={MAX_MONTH_DAYS})"
            ));
        }

        for (di, entry) in month.days().iter().enumerate() {
            let day_no = di + 1;
            match numeral::from_devanagari(&entry.day) {
                Ok(value) if value as usize == day_no => {}
                Ok(value) => c.push(format!(
                    "month {month_no} day {day_no}: numeral '{}' reads {value}",
                    entry.day
                )),
                Err(_) => c.push(format!(
                    "month {month_no} day {day_no}: '{}' is not a Devanagari numeral",
                    entry.day
                )),
            }
            if !(1..=31).contains(&entry.greg_day) {
                c.push(format!(
                    "month {month_no} day {day_no}: greg_day {} out of 1..=31",
                    entry.greg_day
                ));
            }
        }
    }

    // The greg_day chain must advance by one per entry across the whole
    // year, wrapping only at a Gregorian month boundary.
    let mut prev: Option<(usize, usize, u8)> = None;
    for (mi, month) in table.months().iter().enumerate() {
        for (di, entry) in month.days().iter().enumerate() {
            if let Some((pm, pd, pg)) = prev {
                let continues = entry.greg_day == pg.wrapping_add(1);
                let wraps = entry.greg_day == 1 && pg >= 28;
                if !continues && !wraps {
                    c.push(format!(
                        "greg_day chain breaks between month {pm} day {pd} ({pg}) \
                         and month {} day {} ({})",
                        mi + 1,
                        di + 1,
                        entry.greg_day
                    ));
                }
            }
            prev = Some((mi + 1, di + 1, entry.greg_day));
        }
    }

    c.finish(requested_year)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a synthetic year table: 12 months of the given lengths, with
    /// the greg_day chain started at `start_greg_day` inside a 30-day
    /// Gregorian month rhythm.
    fn synthetic_table(year: i32, lengths: [usize; 12], start_greg_day: u8) -> YearTable {
        let mut greg = start_greg_day;
        // Alternate 31/30-day Gregorian months; exact lengths don't matter
        // for chain validation, only that wraps start from >= 28.
        let mut greg_len = 30u8;
        let months: Vec<String> = lengths
            .iter()
            .map(|&len| {
                let days: Vec<String> = (1..=len)
                    .map(|d| {
                        let entry = format!(
                            r#"{{ "day": "{}", "greg_day": {} }}"#,
                            miti_calendar::numeral::to_devanagari(d as u32),
                            greg
                        );
                        if greg == greg_len {
                            greg = 1;
                            greg_len = if greg_len == 30 { 31 } else { 30 };
                        } else {
                            greg += 1;
                        }
                        entry
                    })
                    .collect();
                format!(r#"{{ "days": [{}] }}"#, days.join(", "))
            })
            .collect();
        let json = format!(r#"{{ "year": {year}, "months": [{}] }}"#, months.join(", "));
        serde_json::from_str(&json).expect("synthetic table is valid JSON")
    }

    const REGULAR: [usize; 12] = [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 29, 31];

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert!(c.finish(2081).is_ok());
    }

    #[test]
    fn collector_accumulates() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push("second");
        let err = c.finish(2081).unwrap_err();
        match err {
            DataError::Corrupt {
                year,
                count,
                details,
            } => {
                assert_eq!(year, 2081);
                assert_eq!(count, 2);
                assert_eq!(details, "first; second");
            }
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn valid_table_passes() {
        let table = synthetic_table(2081, REGULAR, 14);
        assert!(validate_year_table(&table, 2081).is_ok());
    }

    #[test]
    fn year_mismatch_detected() {
        let table = synthetic_table(2081, REGULAR, 14);
        let err = validate_year_table(&table, 2082).unwrap_err();
        assert!(err.to_string().contains("does not match requested year"));
    }

    #[test]
    fn short_month_detected() {
        let mut lengths = REGULAR;
        lengths[4] = 28;
        let table = synthetic_table(2081, lengths, 14);
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(
            err.to_string().contains("month 5 has 28 days"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn long_month_detected() {
        let mut lengths = REGULAR;
        lengths[0] = 33;
        let table = synthetic_table(2081, lengths, 14);
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(err.to_string().contains("month 1 has 33 days"));
    }

    #[test]
    fn wrong_month_count_detected() {
        let table: YearTable =
            serde_json::from_str(r#"{ "year": 2081, "months": [] }"#).unwrap();
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(err.to_string().contains("expected 12 months, got 0"));
    }

    // Serialize isn't derived on the model, so corrupt variants are built
    // from patched JSON text.
    #[test]
    fn numeral_mismatch_via_patched_json() {
        let json = format!(
            r#"{{ "year": 2081, "months": [{}] }}"#,
            (0..12)
                .map(|mi| {
                    let days: Vec<String> = (1..=30u32)
                        .map(|d| {
                            // First entry of the first month claims to be day २.
                            let label = if mi == 0 && d == 1 {
                                "२".to_string()
                            } else {
                                miti_calendar::numeral::to_devanagari(d)
                            };
                            let greg = if d <= 17 { d + 13 } else { d - 17 };
                            format!(r#"{{ "day": "{label}", "greg_day": {greg} }}"#)
                        })
                        .collect();
                    format!(r#"{{ "days": [{}] }}"#, days.join(", "))
                })
                .collect::<Vec<_>>()
                .join(", ")
        );
        let table: YearTable = serde_json::from_str(&json).unwrap();
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(
            err.to_string().contains("numeral '२' reads 2"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn chain_break_detected() {
        // greg_day jumps from 20 straight to 25 inside month 1.
        let days: Vec<String> = (1..=30u32)
            .map(|d| {
                let greg = if d <= 7 { d + 13 } else { d + 17 };
                format!(
                    r#"{{ "day": "{}", "greg_day": {} }}"#,
                    miti_calendar::numeral::to_devanagari(d),
                    greg
                )
            })
            .collect();
        let month = format!(r#"{{ "days": [{}] }}"#, days.join(", "));
        let months = vec![month; 12].join(", ");
        let json = format!(r#"{{ "year": 2081, "months": [{months}] }}"#);
        let table: YearTable = serde_json::from_str(&json).unwrap();
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(
            err.to_string().contains("greg_day chain breaks"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn wrap_from_low_value_detected() {
        // A wrap to 1 is only legal from >= 28; starting at day 10 of a
        // fake 15-day Gregorian month must be flagged.
        let days: Vec<String> = (1..=30u32)
            .map(|d| {
                let greg = if d <= 15 { d } else { d - 15 };
                format!(
                    r#"{{ "day": "{}", "greg_day": {} }}"#,
                    miti_calendar::numeral::to_devanagari(d),
                    greg
                )
            })
            .collect();
        let month = format!(r#"{{ "days": [{}] }}"#, days.join(", "));
        let months = vec![month; 12].join(", ");
        let json = format!(r#"{{ "year": 2081, "months": [{months}] }}"#);
        let table: YearTable = serde_json::from_str(&json).unwrap();
        let err = validate_year_table(&table, 2081).unwrap_err();
        assert!(err.to_string().contains("greg_day chain breaks"));
    }

    #[test]
    fn violations_accumulate_across_checks() {
        let mut lengths = REGULAR;
        lengths[2] = 28;
        lengths[7] = 33;
        let table = synthetic_table(2085, lengths, 14);
        let err = validate_year_table(&table, 2081).unwrap_err();
        match err {
            DataError::Corrupt { count, .. } => assert!(count >= 3, "got {count} violations"),
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }
}
