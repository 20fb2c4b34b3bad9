//! Weekday aligned to the Nepali week (Sunday = 0).

use crate::error::CalendarError;

/// Nepali weekday names (index 0 = Sunday).
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "आइतबार",
    "सोमबार",
    "मंगलबार",
    "बुधबार",
    "बिहिबार",
    "शुक्रबार",
    "शनिबार",
];

/// Abbreviated Nepali weekday names used for calendar grid headers.
pub(crate) const WEEKDAY_ABBREVS: [&str; 7] = [
    "आइत",
    "सोम",
    "मंगल",
    "बुध",
    "बिहि",
    "शुक्र",
    "शनि",
];

/// Day of the week, aligned to the Nepali week: Sunday is index 0 and
/// Saturday (the weekly holiday) is index 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// आइतबार (index 0).
    Sunday,
    /// सोमबार (index 1).
    Monday,
    /// मंगलबार (index 2).
    Tuesday,
    /// बुधबार (index 3).
    Wednesday,
    /// बिहिबार (index 4).
    Thursday,
    /// शुक्रबार (index 5).
    Friday,
    /// शनिबार (index 6).
    Saturday,
}

impl Weekday {
    /// Creates a `Weekday` from its Nepali-week index (Sunday = 0).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is not in 0..=6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        match index {
            0 => Ok(Self::Sunday),
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            _ => Err(CalendarError::InvalidWeekday { index }),
        }
    }

    /// Derives the weekday of a Julian day number.
    ///
    /// JDN 0 was a Monday, so `(jdn + 1) % 7` lands Sunday on 0.
    pub(crate) fn from_jdn(jdn: i64) -> Self {
        let index = ((jdn + 1).rem_euclid(7)) as u8;
        Self::from_index(index).expect("rem_euclid(7) is always 0..=6")
    }

    /// Returns the Nepali-week index (0..=6, Sunday = 0).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the full Nepali weekday name (e.g. "आइतबार").
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }

    /// Returns the abbreviated Nepali weekday name (e.g. "आइत").
    pub fn abbrev(self) -> &'static str {
        WEEKDAY_ABBREVS[self.index() as usize]
    }

    /// Returns `true` for Saturday, the weekly holiday in Nepal.
    pub fn is_saturday(self) -> bool {
        self == Self::Saturday
    }
}
