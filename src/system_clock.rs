use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};

use miti_engine::{Clock, GregorianDate};

/// Wall clock for the engine's caller-supplied-instant seam.
///
/// The engine never reads the clock itself; this is the one place the
/// binary hands it the local civil date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> GregorianDate {
        let now = Local::now().date_naive();
        to_gregorian_date(now).expect("system clock reports a real civil date")
    }
}

/// Parse a `YYYY-MM-DD` CLI argument into a civil date.
pub fn parse_gregorian(text: &str) -> Result<GregorianDate> {
    let parsed = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{text}' (expected YYYY-MM-DD)"))?;
    to_gregorian_date(parsed)
}

fn to_gregorian_date(date: NaiveDate) -> Result<GregorianDate> {
    GregorianDate::new(date.year(), date.month() as u8, date.day() as u8)
        .context("date out of calendar range")
}

/// Parse a `YYYY-MM-DD` CLI argument as a Bikram Sambat triple.
pub fn parse_bs(text: &str) -> Result<(i32, u8, u8)> {
    let invalid = || anyhow::anyhow!("invalid date '{text}' (expected YYYY-MM-DD)");
    let mut parts = text.splitn(3, '-');
    let year: i32 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let month: u8 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    let day: u8 = parts.next().ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
    Ok((year, month, day))
}
