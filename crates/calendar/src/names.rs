//! Localized month names.

use crate::error::CalendarError;

/// Nepali month names (index 0 = बैशाख .. index 11 = चैत).
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "बैशाख",
    "जेठ",
    "असार",
    "साउन",
    "भदौ",
    "असोज",
    "कात्तिक",
    "मंसिर",
    "पुस",
    "माघ",
    "फागुन",
    "चैत",
];

/// Returns the Nepali name of a Bikram Sambat month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn month_name(month: u8) -> Result<&'static str, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(MONTH_NAMES[(month - 1) as usize])
}
