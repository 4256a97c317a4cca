//! Error types for the nongli-date crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the nongli-date crate.
///
/// Covers field validation for lunar dates, range checks on solar dates,
/// ordinals and timestamps, and overflow in day arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LunarDateError {
    /// Returned when a lunar year is outside the table range 1900..=2100.
    #[error("year {year} must be in 1900..=2100")]
    YearOutOfRange {
        /// The invalid year that was provided.
        year: u16,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("month {month} must be in 1..=12")]
    MonthOutOfRange {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("day {day} must be in 1..={max_day} for month {month} of {year}")]
    DayOutOfRange {
        /// The invalid day number that was provided.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The lunar year the day was checked against.
        year: u16,
        /// The actual length of that month.
        max_day: u8,
    },

    /// Returned when a date claims to be in a leap month the year does not have.
    #[error("month {month} is not a leap month in {year}")]
    NotLeapMonth {
        /// The lunar year that was checked.
        year: u16,
        /// The month number that is not leap in that year.
        month: u8,
    },

    /// Returned when a solar date falls outside 1900-01-31..=2100-12-31.
    #[error("solar date {date} must be in 1900-01-31..=2100-12-31")]
    SolarOutOfRange {
        /// The out-of-range solar date.
        date: NaiveDate,
    },

    /// Returned when a proleptic Gregorian ordinal falls outside the
    /// supported window 693626..=767009.
    #[error("ordinal {ordinal} must be in 693626..=767009")]
    OrdinalOutOfRange {
        /// The out-of-range ordinal.
        ordinal: i32,
    },

    /// Returned when a POSIX timestamp cannot be represented as a civil date.
    #[error("timestamp {timestamp} is not representable as a date")]
    TimestampOutOfRange {
        /// The unrepresentable timestamp, in seconds.
        timestamp: i64,
    },

    /// Returned when day arithmetic would leave the supported date window.
    #[error("date arithmetic result out of range")]
    Overflow,

    /// Returned when the leap-month byte of a binary encoding is not 0 or 1.
    #[error("invalid leap-month byte {byte} in encoded date (must be 0 or 1)")]
    InvalidEncoding {
        /// The malformed byte.
        byte: u8,
    },
}
