//! Clock seam.
//!
//! The engine never reads the wall clock itself: the caller supplies the
//! current instant through this trait, which keeps every query
//! deterministic under test.

use miti_calendar::GregorianDate;

/// Source of "today" in the Gregorian civil calendar.
pub trait Clock {
    /// Returns the current civil date.
    fn today(&self) -> GregorianDate;
}

/// A clock pinned to a fixed date, for deterministic tests and for
/// queries about an explicit day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: GregorianDate,
}

impl FixedClock {
    /// Creates a clock that always reports `date`.
    pub fn new(date: GregorianDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> GregorianDate {
        self.date
    }
}
