//! The immutable lunar date value type.

use std::fmt;
use std::ops::Sub;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta};

use crate::convert;
use crate::error::LunarDateError;
use crate::year::LunarYear;
use crate::{MAX_ORDINAL, MIN_ORDINAL};

/// A date in the Chinese lunar calendar, years 1900..=2100.
///
/// Values are immutable and self-contained; every operation that looks like
/// mutation returns a new `LunarDate`. The derived ordering compares the
/// `(year, month, day, leap_month)` tuple lexicographically, and the derived
/// hash agrees with equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarDate {
    year: u16,
    month: u8,
    day: u8,
    leap_month: bool,
}

impl LunarDate {
    /// The earliest representable lunar date, 1900-01-01 (solar 1900-01-31).
    pub const MIN: LunarDate = LunarDate {
        year: 1900,
        month: 1,
        day: 1,
        leap_month: false,
    };

    /// The latest representable lunar date, 2100-12-01 (solar 2100-12-31).
    pub const MAX: LunarDate = LunarDate {
        year: 2100,
        month: 12,
        day: 1,
        leap_month: false,
    };

    /// Creates a `LunarDate` from its four fields.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::YearOutOfRange`],
    /// [`LunarDateError::MonthOutOfRange`] or
    /// [`LunarDateError::DayOutOfRange`] when a field is out of its domain,
    /// and [`LunarDateError::NotLeapMonth`] when `leap_month` is true but
    /// the year's leap month is not `month`.
    pub fn new(year: u16, month: u8, day: u8, leap_month: bool) -> Result<Self, LunarDateError> {
        let lunar_year = LunarYear::new(year)?;
        let max_day = lunar_year.days_in_month(month, leap_month)?;
        if !(1..=max_day).contains(&day) {
            return Err(LunarDateError::DayOutOfRange {
                day,
                month,
                year,
                max_day,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            leap_month,
        })
    }

    /// Creates the `LunarDate` equivalent to a solar date.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::SolarOutOfRange`] if `solar` falls outside
    /// 1900-01-31..=2100-12-31.
    pub fn from_solar(solar: NaiveDate) -> Result<Self, LunarDateError> {
        let (year, month, day, leap_month) = convert::solar_to_lunar(solar)?;
        Ok(Self {
            year,
            month,
            day,
            leap_month,
        })
    }

    /// Creates a `LunarDate` from a proleptic Gregorian ordinal, where
    /// ordinal 1 is solar 0001-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::OrdinalOutOfRange`] if `ordinal` is not in
    /// 693626..=767009.
    pub fn from_ordinal(ordinal: i32) -> Result<Self, LunarDateError> {
        if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return Err(LunarDateError::OrdinalOutOfRange { ordinal });
        }
        let solar = NaiveDate::from_num_days_from_ce_opt(ordinal)
            .expect("ordinals in the supported window are valid dates");
        Self::from_solar(solar)
    }

    /// Creates the `LunarDate` for a POSIX timestamp, interpreted in the
    /// local timezone as [`chrono::Local`] resolves it.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::TimestampOutOfRange`] if the timestamp is
    /// not representable as a date, and [`LunarDateError::SolarOutOfRange`]
    /// if the resulting date falls outside the supported window.
    pub fn from_timestamp(timestamp: i64) -> Result<Self, LunarDateError> {
        let utc = DateTime::from_timestamp(timestamp, 0)
            .ok_or(LunarDateError::TimestampOutOfRange { timestamp })?;
        Self::from_solar(utc.with_timezone(&Local).date_naive())
    }

    /// Creates the `LunarDate` for the current local date.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::SolarOutOfRange`] if the system clock is
    /// outside the supported window.
    pub fn today() -> Result<Self, LunarDateError> {
        Self::from_solar(Local::now().date_naive())
    }

    /// Returns the lunar year (1900..=2100).
    pub fn year(self) -> u16 {
        self.year
    }

    /// Returns the lunar month number (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns true when the date falls in a leap month.
    pub fn is_leap_month(self) -> bool {
        self.leap_month
    }

    /// Returns the equivalent solar date.
    pub fn to_solar(self) -> NaiveDate {
        convert::lunar_to_solar(self.year, self.month, self.day, self.leap_month)
    }

    /// Returns the proleptic Gregorian ordinal of the date, where ordinal 1
    /// is solar 0001-01-01.
    pub fn to_ordinal(self) -> i32 {
        self.to_solar().num_days_from_ce()
    }

    /// Returns the day of the week, where Monday is 0 and Sunday is 6.
    pub fn weekday(self) -> u32 {
        self.to_solar().weekday().num_days_from_monday()
    }

    /// Returns the ISO day of the week, where Monday is 1 and Sunday is 7.
    pub fn isoweekday(self) -> u32 {
        self.to_solar().weekday().number_from_monday()
    }

    /// Returns the ISO calendar tuple `(iso_year, iso_week, iso_weekday)`
    /// of the equivalent solar date.
    pub fn isocalendar(self) -> (i32, u32, u32) {
        let week = self.to_solar().iso_week();
        (week.year(), week.week(), self.isoweekday())
    }

    /// Adds a whole-day offset, truncating any sub-day component of `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::Overflow`] if the result would leave the
    /// supported date window.
    pub fn checked_add(self, delta: TimeDelta) -> Result<Self, LunarDateError> {
        let ordinal = i64::from(self.to_ordinal()) + delta.num_days();
        if !(i64::from(MIN_ORDINAL)..=i64::from(MAX_ORDINAL)).contains(&ordinal) {
            return Err(LunarDateError::Overflow);
        }
        Self::from_ordinal(ordinal as i32)
    }

    /// Subtracts a whole-day offset, truncating any sub-day component of
    /// `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::Overflow`] if the result would leave the
    /// supported date window.
    pub fn checked_sub(self, delta: TimeDelta) -> Result<Self, LunarDateError> {
        self.checked_add(TimeDelta::days(-delta.num_days()))
    }

    /// Returns a copy with the year replaced, re-validated as a fresh
    /// construction.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`LunarDate::new`] would for the combined fields,
    /// e.g. when the current day or leap flag does not exist in `year`.
    pub fn with_year(self, year: u16) -> Result<Self, LunarDateError> {
        Self::new(year, self.month, self.day, self.leap_month)
    }

    /// Returns a copy with the month replaced, re-validated as a fresh
    /// construction.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`LunarDate::new`] would for the combined fields.
    pub fn with_month(self, month: u8) -> Result<Self, LunarDateError> {
        Self::new(self.year, month, self.day, self.leap_month)
    }

    /// Returns a copy with the day replaced, re-validated as a fresh
    /// construction.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`LunarDate::new`] would for the combined fields.
    pub fn with_day(self, day: u8) -> Result<Self, LunarDateError> {
        Self::new(self.year, self.month, day, self.leap_month)
    }

    /// Returns a copy with the leap flag replaced, re-validated as a fresh
    /// construction.
    ///
    /// # Errors
    ///
    /// Fails exactly like [`LunarDate::new`] would for the combined fields.
    pub fn with_leap_month(self, leap_month: bool) -> Result<Self, LunarDateError> {
        Self::new(self.year, self.month, self.day, leap_month)
    }
}

impl Sub for LunarDate {
    type Output = TimeDelta;

    /// Returns the exact day difference `self - other`.
    fn sub(self, other: Self) -> TimeDelta {
        TimeDelta::days(i64::from(self.to_ordinal()) - i64::from(other.to_ordinal()))
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap_month {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}
