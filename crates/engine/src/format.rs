//! Display formatting for resolved Bikram Sambat dates.

use miti_calendar::{BsDate, month_name, numeral};

use crate::convert::Converter;
use crate::error::EngineError;

/// Display-ready fields for one Bikram Sambat date.
///
/// Everything a renderer needs: Devanagari numerals, localized names,
/// and the day's annotations from its year table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDisplay {
    /// Devanagari day numeral from the table (e.g. "१").
    pub day: String,
    /// Localized month name (e.g. "बैशाख").
    pub month: &'static str,
    /// Devanagari year numeral (e.g. "२०८१").
    pub year: String,
    /// Localized weekday name (e.g. "आइतबार").
    pub weekday: &'static str,
    /// Lunar-day label, empty when the table has none.
    pub tithi: String,
    /// Event names in table order, empty when the table has none.
    pub events: Vec<String>,
}

impl Converter {
    /// Resolves `date`'s table entry into display fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] when `date`'s year has no table and
    /// [`EngineError::Resolution`] when `(month, day)` does not exist in
    /// that table — a contract violation between a caller-built date and
    /// the data it claims to come from.
    pub fn format(&self, date: &BsDate) -> Result<DayDisplay, EngineError> {
        let table = self.store().get(date.year())?;
        let entry = table
            .day(date.month(), date.day())
            .ok_or_else(|| crate::convert::resolution(date.year(), date.month(), date.day()))?;

        Ok(DayDisplay {
            day: entry.day.clone(),
            month: month_name(date.month())?,
            year: numeral::to_devanagari(date.year().unsigned_abs()),
            weekday: date.weekday().name(),
            tithi: entry.tithi.clone().unwrap_or_default(),
            events: split_events(entry.events.as_deref()),
        })
    }
}

/// Split a `/`-joined events field into its ordered names, dropping
/// empty segments.
fn split_events(events: Option<&str>) -> Vec<String> {
    events
        .map(|joined| {
            joined
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_two_events() {
        assert_eq!(
            split_events(Some("Dashain/Tihar")),
            vec!["Dashain".to_string(), "Tihar".to_string()]
        );
    }

    #[test]
    fn split_single_event() {
        assert_eq!(split_events(Some("नयाँ वर्ष")), vec!["नयाँ वर्ष".to_string()]);
    }

    #[test]
    fn split_drops_empty_segments() {
        assert_eq!(
            split_events(Some("/Dashain//Tihar/")),
            vec!["Dashain".to_string(), "Tihar".to_string()]
        );
    }

    #[test]
    fn split_none_is_empty() {
        assert!(split_events(None).is_empty());
    }

    #[test]
    fn split_empty_string_is_empty() {
        assert!(split_events(Some("")).is_empty());
    }
}
