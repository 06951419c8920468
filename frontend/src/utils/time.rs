use chrono::{Local, NaiveDateTime};

pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Clock display time, e.g. "09:05".
pub fn clock_time(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

/// Clock display date, e.g. "Monday, January 6, 2025".
pub fn clock_date(now: &NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// The `HH:MM` stamp sent with attendance requests.
pub fn attendance_stamp(now: &NaiveDateTime) -> String {
    now.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn clock_time_is_zero_padded_hour_minute() {
        assert_eq!(clock_time(&at(2025, 1, 6, 9, 5)), "09:05");
    }

    #[test]
    fn clock_date_spells_out_weekday_and_month() {
        assert_eq!(clock_date(&at(2025, 1, 6, 9, 5)), "Monday, January 6, 2025");
    }

    #[test]
    fn attendance_stamp_matches_clock_time_format() {
        assert_eq!(attendance_stamp(&at(2025, 12, 31, 23, 59)), "23:59");
    }
}
