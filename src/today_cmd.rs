//! Today command: print the current Nepali date with its annotations.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use miti_engine::{Clock, Converter, YearStore};

use crate::cli::TodayArgs;
use crate::config::MitiConfig;
use crate::system_clock::{SystemClock, parse_gregorian};

/// Run the today command.
pub fn run(args: TodayArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("today").entered();

    let target = match &args.date {
        Some(text) => parse_gregorian(text)?,
        None => SystemClock.today(),
    };

    let engine = Converter::new(YearStore::new(&config.data.dir));
    let date = engine
        .convert(target)
        .with_context(|| format!("cannot resolve {target} to a Nepali date"))?;
    let display = engine.format(&date).context("cannot format Nepali date")?;
    info!(
        year = date.year(),
        month = date.month(),
        day = date.day(),
        "resolved current date"
    );

    // The original panel line: "<day> <month> <year>".
    println!("{} {} {}", display.day, display.month, display.year);
    println!("{}", display.weekday);
    println!("Gregorian: {target}");

    if config.display.show_tithi && !display.tithi.is_empty() {
        println!("तिथि: {}", display.tithi);
    }
    if config.display.show_events {
        for event in &display.events {
            println!("{event}");
        }
    }

    Ok(())
}
