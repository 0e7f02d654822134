//! Gap detection in daily date series.

use chrono::NaiveDate;

/// Returns the dates between the first and last of `observed` that are absent
/// from it.
///
/// `observed` must be sorted ascending; duplicates are tolerated. An empty or
/// single-element input has no gaps.
pub fn missing_dates(observed: &[NaiveDate]) -> Vec<NaiveDate> {
    let mut gaps = Vec::new();
    for pair in observed.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        let mut day = prev.succ_opt();
        while let Some(d) = day
            && d < next
        {
            gaps.push(d);
            day = d.succ_opt();
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contiguous_has_no_gaps() {
        let dates: Vec<NaiveDate> = ymd(2014, 5, 1).iter_days().take(10).collect();
        assert!(missing_dates(&dates).is_empty());
    }

    #[test]
    fn gaps_found() {
        let observed = [ymd(2014, 5, 1), ymd(2014, 5, 4), ymd(2014, 5, 5)];
        assert_eq!(
            missing_dates(&observed),
            vec![ymd(2014, 5, 2), ymd(2014, 5, 3)]
        );
    }

    #[test]
    fn gap_across_new_year() {
        let observed = [ymd(2014, 12, 30), ymd(2015, 1, 2)];
        assert_eq!(
            missing_dates(&observed),
            vec![ymd(2014, 12, 31), ymd(2015, 1, 1)]
        );
    }

    #[test]
    fn leap_day_is_a_gap() {
        let observed = [ymd(2016, 2, 28), ymd(2016, 3, 1)];
        assert_eq!(missing_dates(&observed), vec![ymd(2016, 2, 29)]);
    }

    #[test]
    fn duplicates_tolerated() {
        let observed = [ymd(2014, 5, 1), ymd(2014, 5, 1), ymd(2014, 5, 2)];
        assert!(missing_dates(&observed).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(missing_dates(&[]).is_empty());
    }
}
