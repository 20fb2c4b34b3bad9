//! Pure month-step arithmetic on `(year, month)` coordinates.

use crate::error::CalendarError;

/// Returns the `(year, month)` pair one Bikram Sambat month after the
/// given one, carrying into the year when the month leaves 1..=12.
///
/// This is pure arithmetic: whether a table exists for the resulting year
/// is the data layer's concern.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_after(year: i32, month: u8) -> Result<(i32, u8), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 12 {
        Ok((year + 1, 1))
    } else {
        Ok((year, month + 1))
    }
}

/// Returns the `(year, month)` pair one Bikram Sambat month before the
/// given one, carrying into the year when the month leaves 1..=12.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_before(year: i32, month: u8) -> Result<(i32, u8), CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 1 {
        Ok((year - 1, 12))
    } else {
        Ok((year, month - 1))
    }
}
