//! The `to-lunar`, `to-solar` and `today` subcommands.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use nongli_date::LunarDate;
use tracing::debug;

use crate::cli::{ToLunarArgs, ToSolarArgs};

/// Runs the `to-lunar` subcommand.
pub fn to_lunar(args: ToLunarArgs) -> Result<()> {
    let Some(solar) = NaiveDate::from_ymd_opt(args.year, args.month, args.day) else {
        bail!(
            "{:04}-{:02}-{:02} is not a valid Gregorian date",
            args.year,
            args.month,
            args.day
        );
    };
    let lunar = LunarDate::from_solar(solar).context("conversion failed")?;
    debug!(%solar, %lunar, "converted solar to lunar");
    println!("{lunar}");
    Ok(())
}

/// Runs the `to-solar` subcommand.
pub fn to_solar(args: ToSolarArgs) -> Result<()> {
    let lunar = LunarDate::new(args.year, args.month, args.day, args.leap)
        .context("invalid lunar date")?;
    let solar = lunar.to_solar();
    debug!(%lunar, %solar, "converted lunar to solar");
    println!("{solar}");
    Ok(())
}

/// Runs the `today` subcommand.
pub fn today() -> Result<()> {
    let lunar = LunarDate::today().context("today is outside the supported 1900..=2100 window")?;
    println!("{lunar}");
    Ok(())
}
