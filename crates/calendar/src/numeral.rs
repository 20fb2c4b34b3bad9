//! Devanagari numeral conversion.

use crate::error::CalendarError;

/// Devanagari digits, index = digit value.
const DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Renders a non-negative number in Devanagari digits.
///
/// ```
/// use miti_calendar::numeral::to_devanagari;
///
/// assert_eq!(to_devanagari(2081), "२०८१");
/// assert_eq!(to_devanagari(7), "७");
/// ```
pub fn to_devanagari(value: u32) -> String {
    value
        .to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

/// Parses a plain Devanagari numeral back into a number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidNumeral`] if `text` is empty, contains
/// a character that is not a Devanagari digit, or overflows `u32`.
pub fn from_devanagari(text: &str) -> Result<u32, CalendarError> {
    let invalid = || CalendarError::InvalidNumeral {
        text: text.to_string(),
    };
    if text.is_empty() {
        return Err(invalid());
    }
    let mut value: u32 = 0;
    for c in text.chars() {
        let digit = DIGITS
            .iter()
            .position(|&d| d == c)
            .ok_or_else(invalid)? as u32;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)?;
    }
    Ok(value)
}
