//! Convert command: map a date between the two calendars.

use anyhow::{Context, Result};
use tracing::info_span;

use miti_calendar::numeral;
use miti_engine::{Converter, YearStore};

use crate::cli::ConvertArgs;
use crate::config::MitiConfig;
use crate::system_clock::{parse_bs, parse_gregorian};

/// Run the convert command.
pub fn run(args: ConvertArgs, config: &MitiConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let engine = Converter::new(YearStore::new(&config.data.dir));

    if args.from_bs {
        let (year, month, day) = parse_bs(&args.date)?;
        let greg = engine
            .to_gregorian(year, month, day)
            .with_context(|| format!("cannot resolve BS {year}-{month:02}-{day:02}"))?;
        println!("{greg} ({})", greg.weekday().name());
    } else {
        let target = parse_gregorian(&args.date)?;
        let date = engine
            .convert(target)
            .with_context(|| format!("cannot resolve {target} to a Nepali date"))?;
        let display = engine.format(&date).context("cannot format Nepali date")?;
        println!(
            "{} {} {} ({})",
            numeral::to_devanagari(u32::from(date.day())),
            display.month,
            display.year,
            display.weekday,
        );
        println!(
            "BS {}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        );
    }

    Ok(())
}
