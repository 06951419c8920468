use chrono::{Datelike, NaiveDate, Weekday};

pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the weekdays (Mon-Fri) in the inclusive range `start..=end`.
/// Returns 0 when `start > end`.
pub fn business_days_inclusive(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            count += 1;
        }
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn full_work_week_counts_five() {
        // 2025-01-06 is a Monday, 2025-01-10 a Friday
        assert_eq!(business_days_inclusive(date(2025, 1, 6), date(2025, 1, 10)), 5);
    }

    #[test]
    fn weekend_only_counts_zero() {
        // Saturday through Sunday
        assert_eq!(business_days_inclusive(date(2025, 1, 11), date(2025, 1, 12)), 0);
    }

    #[test]
    fn single_weekday_counts_one() {
        // A Wednesday
        assert_eq!(business_days_inclusive(date(2025, 1, 8), date(2025, 1, 8)), 1);
    }

    #[test]
    fn single_weekend_day_counts_zero() {
        assert_eq!(business_days_inclusive(date(2025, 1, 11), date(2025, 1, 11)), 0);
    }

    #[test]
    fn range_spanning_weekends_skips_them() {
        // Mon 2025-01-06 through Sun 2025-01-19: two full work weeks
        assert_eq!(business_days_inclusive(date(2025, 1, 6), date(2025, 1, 19)), 10);
    }

    #[test]
    fn inverted_range_counts_zero() {
        assert_eq!(business_days_inclusive(date(2025, 1, 10), date(2025, 1, 6)), 0);
    }
}
