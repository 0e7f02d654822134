use chrono::NaiveDate;
use checkdam_calendar::{CalendarError, DayOfYear};

#[test]
fn every_day_of_leap_year_is_valid() {
    for date in NaiveDate::from_ymd_opt(2016, 1, 1).unwrap().iter_days().take(366) {
        let doy = DayOfYear::from_date(date);
        assert_eq!(DayOfYear::new(doy.get()).unwrap(), doy, "date={date}");
    }
}

#[test]
fn known_dates() {
    let cases: &[(i32, u32, u32, u16)] = &[
        (2014, 1, 1, 1),
        (2014, 2, 28, 59),
        (2014, 3, 1, 60),
        (2014, 5, 14, 134),
        (2016, 3, 1, 61),
        (2014, 12, 31, 365),
        (2016, 12, 31, 366),
    ];
    for &(y, m, d, expected) in cases {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(
            DayOfYear::from_date(date).get(),
            expected,
            "DayOfYear::from_date({date}) != {expected}"
        );
    }
}

#[test]
fn out_of_range_rejected() {
    assert_eq!(
        DayOfYear::new(367).unwrap_err(),
        CalendarError::InvalidDoy { doy: 367 }
    );
}
