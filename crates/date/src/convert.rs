//! The two conversion algorithms between solar and lunar dates.

use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::trace;

use crate::error::LunarDateError;
use crate::year::LunarYear;
use crate::{MAX_ORDINAL, MIN_ORDINAL, MIN_YEAR};

/// Converts a solar date into validated lunar date fields
/// `(year, month, day, leap_month)`.
///
/// The lunar year is found by looking up the New Year of the solar year,
/// stepping back one year when the date precedes it. The day-of-year offset
/// (1-based, so New Year day itself is month 1 day 1) is then walked through
/// the year's month sequence until it lands inside a month.
///
/// # Errors
///
/// Returns [`LunarDateError::SolarOutOfRange`] if `solar` falls outside
/// 1900-01-31..=2100-12-31.
pub(crate) fn solar_to_lunar(solar: NaiveDate) -> Result<(u16, u8, u8, bool), LunarDateError> {
    if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&solar.num_days_from_ce()) {
        return Err(LunarDateError::SolarOutOfRange { date: solar });
    }
    let mut index = (solar.year() - i32::from(MIN_YEAR)) as usize;
    if solar < LunarYear::from_index(index).new_year_solar() {
        index -= 1;
    }
    let year = LunarYear::from_index(index);
    // 1-based so the New Year day itself lands on day 1 of month 1.
    let mut days_diff = (solar - year.new_year_solar()).num_days() + 1;
    trace!(%solar, lunar_year = year.year(), days_diff, "resolved lunar year");
    for month in year.months() {
        if days_diff > i64::from(month.days) {
            days_diff -= i64::from(month.days);
        } else {
            return Ok((year.year(), month.number, days_diff as u8, month.leap));
        }
    }
    // The month lengths of a year sum to the gap before the next New Year,
    // so the walk always terminates inside the sequence.
    unreachable!("calendar tables are inconsistent for lunar year {}", year.year())
}

/// Converts validated lunar date fields into the equivalent solar date.
///
/// Sums the lengths of every month that chronologically precedes the target
/// (a lower month number, or the ordinary sibling of a target leap month),
/// adds the zero-based day offset, and advances the year's New Year solar
/// date by that many days. Exact inverse of [`solar_to_lunar`].
pub(crate) fn lunar_to_solar(year: u16, month: u8, day: u8, leap_month: bool) -> NaiveDate {
    let lunar_year = LunarYear::from_index(usize::from(year - MIN_YEAR));
    let preceding: i64 = lunar_year
        .months()
        .iter()
        .filter(|m| m.number < month || (m.number == month && !m.leap && leap_month))
        .map(|m| i64::from(m.days))
        .sum();
    lunar_year.new_year_solar() + TimeDelta::days(preceding + i64::from(day) - 1)
}
