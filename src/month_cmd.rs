//! Month command: render a Bikram Sambat month as a 7-column grid.
//!
//! The layout mirrors the original popup calendar: abbreviated weekday
//! headers, leading blanks up to the month's first weekday, Devanagari
//! day numerals with holiday and today markers, and a footer listing the
//! month's holidays.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use miti_calendar::{BsDate, Weekday, month_name, numeral};
use miti_engine::{Converter, EngineError, MonthTable, YearStore};

use crate::cli::MonthArgs;
use crate::config::MitiConfig;
use crate::system_clock::SystemClock;

/// Run the month command.
pub fn run(args: MonthArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let engine = Converter::new(YearStore::new(&config.data.dir));

    // `today` is best-effort: the grid still renders for a target month
    // when the system date itself is outside the bundled span.
    let today = engine.current(&SystemClock).ok();

    let (year, month) = target_month(&engine, &args, today.as_ref())?;
    let table = engine
        .month_table(year, month)
        .with_context(|| format!("no table for BS {year}"))?;
    let first_weekday = engine
        .first_weekday_of_month(year, month)
        .context("cannot place the month's first day")?;

    render_grid(year, month, &table, first_weekday, today.as_ref())?;
    if config.display.show_events {
        render_holidays(&table);
    }

    Ok(())
}

/// Resolve which `(year, month)` to render.
fn target_month(
    engine: &Converter,
    args: &MonthArgs,
    today: Option<&BsDate>,
) -> Result<(i32, u8)> {
    if let (Some(year), Some(month)) = (args.year, args.month) {
        return Ok((year, month));
    }

    let Some(today) = today else {
        bail!("system date is outside the bundled tables; use --year and --month");
    };
    let (mut year, mut month) = (today.year(), today.month());

    // Offsets walk month by month so every intermediate year is
    // validated against the store, same as the popup's arrow buttons.
    let offset = args.offset.unwrap_or(0);
    for _ in 0..offset.unsigned_abs() {
        let step = if offset > 0 {
            engine.next_month(year, month)
        } else {
            engine.prev_month(year, month)
        };
        match step {
            Ok(target) => (year, month) = (target.year, target.month),
            Err(EngineError::Data(e)) => bail!("{e}"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok((year, month))
}

fn render_grid(
    year: i32,
    month: u8,
    table: &MonthTable,
    first_weekday: Weekday,
    today: Option<&BsDate>,
) -> Result<()> {
    println!(
        "      {} {}",
        month_name(month)?,
        numeral::to_devanagari(year.unsigned_abs())
    );
    for weekday in 0..7u8 {
        let abbrev = Weekday::from_index(weekday)?.abbrev();
        print!("{abbrev}\t");
    }
    println!();

    let mut column = 0u8;
    for _ in 0..first_weekday.index() {
        print!("\t");
        column += 1;
    }

    for (di, entry) in table.days().iter().enumerate() {
        let day = (di + 1) as u8;
        let is_today = today
            .is_some_and(|t| t.year() == year && t.month() == month && t.day() == day);

        let mut cell = entry.day.clone();
        if entry.is_holiday {
            cell.push('*');
        }
        if is_today {
            cell = format!("[{cell}]");
        }
        print!("{cell}\t");

        column += 1;
        if column == 7 {
            println!();
            column = 0;
        }
    }
    if column != 0 {
        println!();
    }
    Ok(())
}

fn render_holidays(table: &MonthTable) {
    let holidays: Vec<_> = table
        .days()
        .iter()
        .filter(|entry| entry.is_holiday)
        .collect();
    if holidays.is_empty() {
        return;
    }

    println!();
    for entry in holidays {
        let events = entry
            .events
            .as_deref()
            .map(|joined| joined.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>().join(", "))
            .unwrap_or_default();
        if events.is_empty() {
            println!("{}*", entry.day);
        } else {
            println!("{}* {events}", entry.day);
        }
    }
}
