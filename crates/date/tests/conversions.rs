use chrono::{Datelike, NaiveDate, TimeDelta};
use nongli_date::{LunarDate, LunarDateError, LunarYear, MAX_YEAR, MIN_YEAR};

const MIN_ORDINAL: i32 = 693_626;
const MAX_ORDINAL: i32 = 767_009;

fn solar(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn ordinal_fixed_values() {
    for (year, month, day, ordinal) in [
        (1900, 1, 1, MIN_ORDINAL),
        (1945, 10, 8, 710_347),
        (2100, 12, 1, MAX_ORDINAL),
    ] {
        let date = LunarDate::new(year, month, day, false).unwrap();
        assert_eq!(date.to_ordinal(), ordinal, "to_ordinal of {date}");
        assert_eq!(LunarDate::from_ordinal(ordinal).unwrap(), date);
    }
}

#[test]
fn solar_fixed_values() {
    for (ly, lm, ld, sy, sm, sd) in [
        (1900, 1, 1, 1900, 1, 31),
        (1945, 10, 8, 1945, 11, 12),
        (1999, 8, 10, 1999, 9, 19),
        (2100, 12, 1, 2100, 12, 31),
    ] {
        let date = LunarDate::new(ly, lm, ld, false).unwrap();
        let expected = solar(sy, sm, sd);
        assert_eq!(date.to_solar(), expected);
        assert_eq!(LunarDate::from_solar(expected).unwrap(), date);
    }
}

#[test]
fn roundtrip_every_convertible_day() {
    // The bijection holds over the whole window: every ordinal maps to a
    // distinct valid lunar date and back.
    let mut previous: Option<LunarDate> = None;
    for ordinal in MIN_ORDINAL..=MAX_ORDINAL {
        let date = LunarDate::from_ordinal(ordinal)
            .unwrap_or_else(|e| panic!("ordinal {ordinal} failed: {e}"));
        assert_eq!(date.to_ordinal(), ordinal, "roundtrip failed for {date}");
        if let Some(prev) = previous {
            assert_ne!(prev, date);
        }
        previous = Some(date);
    }
}

#[test]
fn ordinals_outside_window_rejected() {
    assert_eq!(
        LunarDate::from_ordinal(MIN_ORDINAL - 1).unwrap_err(),
        LunarDateError::OrdinalOutOfRange {
            ordinal: MIN_ORDINAL - 1
        }
    );
    assert_eq!(
        LunarDate::from_ordinal(MAX_ORDINAL + 1).unwrap_err(),
        LunarDateError::OrdinalOutOfRange {
            ordinal: MAX_ORDINAL + 1
        }
    );
    assert_eq!(
        LunarDate::from_ordinal(0).unwrap_err(),
        LunarDateError::OrdinalOutOfRange { ordinal: 0 }
    );
}

#[test]
fn solar_outside_window_rejected() {
    for date in [solar(1900, 1, 30), solar(1899, 12, 31), solar(2101, 1, 1)] {
        assert_eq!(
            LunarDate::from_solar(date).unwrap_err(),
            LunarDateError::SolarOutOfRange { date }
        );
    }
}

#[test]
fn first_days_of_years_roundtrip() {
    // Spot-check whole years: (year, 1, 1) -> ordinal -> date is identity,
    // and the preceding ordinal is the last day of the previous year.
    for year in ((MIN_YEAR + 1)..=MAX_YEAR).step_by(7) {
        let first = LunarDate::new(year, 1, 1, false).unwrap();
        let ordinal = first.to_ordinal();
        assert_eq!(LunarDate::from_ordinal(ordinal).unwrap(), first);

        let last_of_previous = LunarDate::from_ordinal(ordinal - 1).unwrap();
        assert_eq!(last_of_previous.year(), year - 1);
        assert_eq!(last_of_previous.month(), 12);
        assert!(
            last_of_previous.day() == 29 || last_of_previous.day() == 30,
            "month 12 of {} ends on day {}",
            year - 1,
            last_of_previous.day()
        );
        assert_eq!(last_of_previous.to_ordinal(), ordinal - 1);
    }
}

#[test]
fn every_day_of_leap_and_plain_years() {
    // 2017 has leap month 6 (30 days); 2018 has no leap month. Walk both
    // years ordinal by ordinal and check the full field tuple.
    for year in [2017u16, 2018] {
        let months = LunarYear::new(year).unwrap().months();
        let mut ordinal = LunarDate::new(year, 1, 1, false).unwrap().to_ordinal();
        for month in months {
            for day in 1..=month.days {
                let date = LunarDate::new(year, month.number, day, month.leap).unwrap();
                assert_eq!(date.to_ordinal(), ordinal);
                assert_eq!(LunarDate::from_ordinal(ordinal).unwrap(), date);
                ordinal += 1;
            }
        }
    }
}

#[test]
fn new_year_solar_dates() {
    assert_eq!(
        LunarYear::new(2017).unwrap().new_year_solar(),
        solar(2017, 1, 28)
    );
    assert_eq!(
        LunarYear::new(2012).unwrap().new_year_solar(),
        solar(2012, 1, 23)
    );
    assert_eq!(
        LunarYear::new(1900).unwrap().new_year_solar(),
        solar(1900, 1, 31)
    );
}

#[test]
fn year_structure_sums_match_new_year_gaps() {
    for year in MIN_YEAR..MAX_YEAR {
        let this = LunarYear::new(year).unwrap();
        let next = LunarYear::new(year + 1).unwrap();
        let gap = (next.new_year_solar() - this.new_year_solar()).num_days();
        assert_eq!(
            i64::from(this.total_days()),
            gap,
            "month lengths of {year} disagree with the New Year gap"
        );
    }
}

#[test]
fn weekday_fixed_values() {
    // Lunar 2017-06-02 (leap) is solar 2017-07-24, a Monday.
    for i in 0..7u8 {
        let leap = LunarDate::new(2017, 6, 2 + i, true).unwrap();
        assert_eq!(leap.weekday(), u32::from(i));
        assert_eq!(leap.isoweekday(), u32::from(i) + 1);

        // Lunar 2017-01-03 is also a Monday.
        let plain = LunarDate::new(2017, 1, 3 + i, false).unwrap();
        assert_eq!(plain.weekday(), u32::from(i));
        assert_eq!(plain.isoweekday(), u32::from(i) + 1);
    }
}

#[test]
fn weekday_agrees_with_solar() {
    let date = LunarDate::new(2017, 6, 2, true).unwrap();
    assert_eq!(date.to_solar(), solar(2017, 7, 24));
    assert_eq!(date.to_solar().weekday(), chrono::Weekday::Mon);
}

#[test]
fn isocalendar_fixed_values() {
    // Lunar 2003-11-22 is solar 2003-12-15, ISO week 51 of 2003.
    for i in 0..7u8 {
        let date = LunarDate::new(2003, 11, 22 + i, false).unwrap();
        assert_eq!(date.isocalendar(), (2003, 51, u32::from(i) + 1));
    }
    // Solar 2003-12-29 onward belongs to ISO week 1 of 2004.
    for i in 0..7u8 {
        let date = LunarDate::new(2003, 12, 7 + i, false).unwrap();
        assert_eq!(date.isocalendar(), (2004, 1, u32::from(i) + 1));
    }
}

#[test]
fn from_timestamp_matches_from_solar() {
    // 1999-09-19 12:00 UTC; compare against the same local-date resolution
    // chrono performs, so the test holds in any timezone.
    let timestamp = 937_742_400i64;
    let local_date = chrono::DateTime::from_timestamp(timestamp, 0)
        .unwrap()
        .with_timezone(&chrono::Local)
        .date_naive();
    assert_eq!(
        LunarDate::from_timestamp(timestamp).unwrap(),
        LunarDate::from_solar(local_date).unwrap()
    );
}

#[test]
fn from_timestamp_unrepresentable() {
    assert_eq!(
        LunarDate::from_timestamp(i64::MAX).unwrap_err(),
        LunarDateError::TimestampOutOfRange { timestamp: i64::MAX }
    );
}

#[test]
fn today_is_in_range() {
    let today = LunarDate::today().unwrap();
    assert!(today >= LunarDate::MIN);
    assert!(today <= LunarDate::MAX);
    let ordinal = chrono::Local::now().date_naive().num_days_from_ce();
    assert_eq!(today.to_ordinal(), ordinal);
}

#[test]
fn monotonic_within_ordinary_months() {
    // Tuple order follows chronological order as long as the leap flag does
    // not flip: consecutive days inside a month, and month-1-day-1 across
    // years, always sort with their ordinals.
    let d1 = LunarDate::new(2002, 3, 2, false).unwrap();
    let d2 = LunarDate::new(2002, 3, 3, false).unwrap();
    assert!(d1 < d2);
    assert!(d1.to_ordinal() < d2.to_ordinal());

    let y1 = LunarDate::new(2001, 1, 1, false).unwrap();
    let y2 = LunarDate::new(2002, 1, 1, false).unwrap();
    assert!(y1 < y2);
    assert!(y1.to_ordinal() < y2.to_ordinal());

    let ord6 = LunarDate::new(2017, 6, 4, false).unwrap();
    let leap6 = LunarDate::new(2017, 6, 4, true).unwrap();
    assert!(ord6 < leap6);
    assert!(ord6.to_ordinal() < leap6.to_ordinal());
}

#[test]
fn span_between_min_and_max() {
    let span = LunarDate::MAX - LunarDate::MIN;
    assert_eq!(span, TimeDelta::days(73_383));
    assert_eq!(LunarDate::MIN.checked_add(span).unwrap(), LunarDate::MAX);
    assert_eq!(LunarDate::MAX.checked_sub(span).unwrap(), LunarDate::MIN);
}
