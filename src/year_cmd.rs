//! The `year` subcommand: print a lunar year's month structure.

use anyhow::{Context, Result};
use nongli_date::LunarYear;
use tracing::debug;

use crate::cli::YearArgs;

/// Runs the `year` subcommand.
pub fn run(args: YearArgs) -> Result<()> {
    let year = LunarYear::new(args.year).context("invalid lunar year")?;
    let months = year.months();
    debug!(year = year.year(), n_months = months.len(), "built year structure");

    println!(
        "lunar year {}: New Year on {}, {} months, {} days",
        year.year(),
        year.new_year_solar(),
        months.len(),
        year.total_days()
    );
    for month in months {
        let marker = if month.leap { " (leap)" } else { "" };
        println!("  month {:>2}{marker}: {} days", month.number, month.days);
    }
    Ok(())
}
