use chrono::{Datelike, Duration, Months, NaiveDate};

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// First day of the month `n` months before the one containing `date`.
pub fn months_back(date: NaiveDate, n: u32) -> NaiveDate {
    month_start(date)
        .checked_sub_months(Months::new(n))
        .unwrap_or(date)
}

/// Sunday and Saturday of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    (start, start + Duration::days(6))
}

/// `true` if both dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_end_handles_leap_february() {
        assert_eq!(month_end(d(2024, 2, 10)), d(2024, 2, 29));
        assert_eq!(month_end(d(2025, 2, 10)), d(2025, 2, 28));
        assert_eq!(month_end(d(2025, 12, 31)), d(2025, 12, 31));
    }

    #[test]
    fn months_back_crosses_year() {
        assert_eq!(months_back(d(2025, 2, 20), 3), d(2024, 11, 1));
        assert_eq!(months_back(d(2025, 2, 20), 0), d(2025, 2, 1));
    }

    #[test]
    fn week_runs_sunday_to_saturday() {
        // 2025-01-15 is a Wednesday
        assert_eq!(week_bounds(d(2025, 1, 15)), (d(2025, 1, 12), d(2025, 1, 18)));
        // Sunday starts its own week
        assert_eq!(week_bounds(d(2025, 1, 12)), (d(2025, 1, 12), d(2025, 1, 18)));
        // Saturday ends it
        assert_eq!(week_bounds(d(2025, 1, 18)), (d(2025, 1, 12), d(2025, 1, 18)));
    }
}
