use clap::{Parser, Subcommand};

/// Nongli Chinese lunar calendar converter.
#[derive(Parser)]
#[command(
    name = "nongli",
    version,
    about = "Convert between Chinese lunar and Gregorian calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to its lunar equivalent.
    ToLunar(ToLunarArgs),
    /// Convert a lunar date to its Gregorian equivalent.
    ToSolar(ToSolarArgs),
    /// Print today's lunar date.
    Today,
    /// Print the month structure of a lunar year.
    Year(YearArgs),
}

/// Arguments for the `to-lunar` subcommand.
#[derive(clap::Args)]
pub struct ToLunarArgs {
    /// Gregorian year (1900..=2100).
    pub year: i32,

    /// Gregorian month (1..=12).
    pub month: u32,

    /// Gregorian day of month.
    pub day: u32,
}

/// Arguments for the `to-solar` subcommand.
#[derive(clap::Args)]
pub struct ToSolarArgs {
    /// Lunar year (1900..=2100).
    pub year: u16,

    /// Lunar month (1..=12).
    pub month: u8,

    /// Lunar day of month (1..=30).
    pub day: u8,

    /// Interpret the month as the year's leap month.
    #[arg(short, long)]
    pub leap: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year (1900..=2100).
    pub year: u16,
}
