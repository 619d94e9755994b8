use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingPeriodError {
    #[error("duration must be at least one month")]
    NonPositiveDuration,
    #[error("end date falls outside the supported calendar range")]
    OutOfRange,
}

/// Last calendar day of the given month, honoring leap years.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// End date of a subscription spanning `duration_months` whole calendar
/// months from `start_date`.
///
/// A one-month plan ends on the last day of the start month itself; longer
/// plans advance `duration_months - 1` months (rolling the year as needed)
/// and land on the last day of that month. Never a naive day-count addition.
pub fn period_end(
    start_date: NaiveDate,
    duration_months: i32,
) -> Result<NaiveDate, BillingPeriodError> {
    if duration_months < 1 {
        return Err(BillingPeriodError::NonPositiveDuration);
    }

    let month_index = start_date.month0() + (duration_months - 1) as u32;
    let end_year = start_date.year() + (month_index / 12) as i32;
    let end_month = month_index % 12 + 1;

    last_day_of_month(end_year, end_month).ok_or(BillingPeriodError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Reference implementation that steps month by month instead of using
    /// modular arithmetic. Both must agree on every input.
    fn period_end_by_stepping(start_date: NaiveDate, duration_months: i32) -> NaiveDate {
        let mut year = start_date.year();
        let mut month = start_date.month();
        for _ in 1..duration_months {
            if month == 12 {
                month = 1;
                year += 1;
            } else {
                month += 1;
            }
        }
        last_day_of_month(year, month).unwrap()
    }

    #[test]
    fn one_month_plan_ends_in_start_month() {
        assert_eq!(period_end(date(2024, 1, 15), 1), Ok(date(2024, 1, 31)));
    }

    #[test]
    fn two_month_plan_lands_on_leap_day() {
        assert_eq!(period_end(date(2024, 1, 15), 2), Ok(date(2024, 2, 29)));
    }

    #[test]
    fn two_month_plan_in_non_leap_year() {
        assert_eq!(period_end(date(2023, 1, 15), 2), Ok(date(2023, 2, 28)));
    }

    #[test]
    fn rolls_over_year_boundary() {
        assert_eq!(period_end(date(2024, 11, 2), 3), Ok(date(2025, 1, 31)));
    }

    #[test]
    fn start_on_last_day_of_month() {
        assert_eq!(period_end(date(2024, 3, 31), 1), Ok(date(2024, 3, 31)));
        assert_eq!(period_end(date(2024, 3, 31), 2), Ok(date(2024, 4, 30)));
    }

    #[test]
    fn rejects_zero_and_negative_durations() {
        assert_eq!(
            period_end(date(2024, 1, 15), 0),
            Err(BillingPeriodError::NonPositiveDuration)
        );
        assert_eq!(
            period_end(date(2024, 1, 15), -3),
            Err(BillingPeriodError::NonPositiveDuration)
        );
    }

    #[test]
    fn end_date_is_always_last_day_of_its_month() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                for duration in 1..=25 {
                    let start = date(year, month, 15);
                    let end = period_end(start, duration).unwrap();
                    assert_eq!(
                        Some(end),
                        last_day_of_month(end.year(), end.month()),
                        "start {start} duration {duration}"
                    );
                }
            }
        }
    }

    #[test]
    fn one_month_duration_never_leaves_start_month() {
        for month in 1..=12 {
            let start = date(2024, month, 3);
            let end = period_end(start, 1).unwrap();
            assert_eq!(end.year(), start.year());
            assert_eq!(end.month(), start.month());
        }
    }

    #[test]
    fn modular_arithmetic_agrees_with_month_stepping() {
        for year in [2022, 2023, 2024] {
            for month in 1..=12 {
                for day in [1, 15, 28] {
                    for duration in 1..=36 {
                        let start = date(year, month, day);
                        assert_eq!(
                            period_end(start, duration).unwrap(),
                            period_end_by_stepping(start, duration),
                            "start {start} duration {duration}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn last_day_handles_leap_february() {
        assert_eq!(last_day_of_month(2024, 2), Some(date(2024, 2, 29)));
        assert_eq!(last_day_of_month(2023, 2), Some(date(2023, 2, 28)));
        assert_eq!(last_day_of_month(2024, 12), Some(date(2024, 12, 31)));
    }
}
