//! Lunar year structure: month sequence and month-length queries.

use chrono::NaiveDate;

use crate::error::LunarDateError;
use crate::table;
use crate::{MAX_YEAR, MIN_YEAR};

/// One month of a lunar year: its number, length, and leap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number (1..=12). A leap month shares the number of the
    /// ordinary month it follows.
    pub number: u8,
    /// Length of the month in days (29 or 30).
    pub days: u8,
    /// True for the leap instance of a month.
    pub leap: bool,
}

/// A lunar year in the table range 1900..=2100.
///
/// Wraps a validated year number and answers structural queries (leap
/// month, month lengths, New Year solar date) by decoding the packed
/// calendar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LunarYear(u16);

impl LunarYear {
    /// Creates a `LunarYear` from a year number.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::YearOutOfRange`] if `year` is not in
    /// 1900..=2100.
    pub fn new(year: u16) -> Result<Self, LunarDateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(LunarDateError::YearOutOfRange { year });
        }
        Ok(Self(year))
    }

    /// Creates a `LunarYear` from a zero-based table index.
    pub(crate) fn from_index(index: usize) -> Self {
        Self(MIN_YEAR + index as u16)
    }

    /// Returns the year number (1900..=2100).
    pub fn year(self) -> u16 {
        self.0
    }

    /// Returns the zero-based index into the calendar tables.
    pub(crate) fn index(self) -> usize {
        usize::from(self.0 - MIN_YEAR)
    }

    fn info(self) -> u32 {
        table::YEAR_INFO[self.index()]
    }

    /// Returns the number of the leap month, or `None` when the year has
    /// no leap month.
    pub fn leap_month(self) -> Option<u8> {
        match table::leap_month(self.info()) {
            0 => None,
            m => Some(m),
        }
    }

    /// Returns the solar date of this year's lunar New Year day.
    pub fn new_year_solar(self) -> NaiveDate {
        table::new_year(self.index())
    }

    /// Returns the months of the year in chronological order.
    ///
    /// The sequence holds the 12 ordinary months in ascending order, with
    /// the leap month (if any) inserted immediately after the ordinary
    /// month it follows, for a total of 12 or 13 entries.
    pub fn months(self) -> Vec<LunarMonth> {
        let info = self.info();
        let mask = table::month_mask(info);
        let mut months: Vec<LunarMonth> = (1..=12u8)
            .map(|number| LunarMonth {
                number,
                days: if table::month_is_long(mask, number) { 30 } else { 29 },
                leap: false,
            })
            .collect();
        if let Some(leap) = self.leap_month() {
            months.insert(
                usize::from(leap),
                LunarMonth {
                    number: leap,
                    days: if table::leap_month_is_long(info) { 30 } else { 29 },
                    leap: true,
                },
            );
        }
        months
    }

    /// Returns the length in days of one month of this year.
    ///
    /// Answered by direct table lookup, without building the full month
    /// sequence. Year 2100 month 12 reports a single day: the tables stop
    /// at 2100-12-31 solar, which that month's first day maps to.
    ///
    /// # Errors
    ///
    /// Returns [`LunarDateError::MonthOutOfRange`] if `month` is not in
    /// 1..=12, and [`LunarDateError::NotLeapMonth`] if `leap_month` is true
    /// but this year's leap month is not `month`.
    pub fn days_in_month(self, month: u8, leap_month: bool) -> Result<u8, LunarDateError> {
        if !(1..=12).contains(&month) {
            return Err(LunarDateError::MonthOutOfRange { month });
        }
        let info = self.info();
        if leap_month {
            if self.leap_month() != Some(month) {
                return Err(LunarDateError::NotLeapMonth {
                    year: self.0,
                    month,
                });
            }
            return Ok(if table::leap_month_is_long(info) { 30 } else { 29 });
        }
        if self.0 == MAX_YEAR && month == 12 {
            return Ok(1);
        }
        Ok(if table::month_is_long(table::month_mask(info), month) {
            30
        } else {
            29
        })
    }

    /// Returns the total length of the year in days.
    pub fn total_days(self) -> u16 {
        self.months().iter().map(|m| u16::from(m.days)).sum()
    }
}
