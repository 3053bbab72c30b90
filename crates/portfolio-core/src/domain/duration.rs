//! Human-readable project durations
//!
//! A duration is expressed in 30-day months plus leftover days, e.g.
//! `"1 month 1 days"`. Wording is never adjusted for singular counts.

use std::fmt;

use chrono::NaiveDate;

/// Days counted as one month
const DAYS_PER_MONTH: i64 = 30;

/// Months and leftover days between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub months: i64,
    pub days: i64,
}

impl DurationParts {
    /// Split the interval from `start` to `end` into months and days
    ///
    /// The interval may be negative. The remainder is only taken when it is
    /// non-negative, so a negative interval that is not a whole number of
    /// months keeps its total day count.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        let diff_hours = end.signed_duration_since(start).num_hours();

        let months = diff_hours / 24 / DAYS_PER_MONTH;
        let mut days = diff_hours / 24;
        if days % DAYS_PER_MONTH >= 0 {
            days %= DAYS_PER_MONTH;
        }

        Self { months, days }
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { months, days } = *self;
        if months >= 1 && days >= 1 {
            write!(f, "{} month {} days", months, days)
        } else if months >= 1 {
            write!(f, "{} month", months)
        } else if days >= 0 {
            write!(f, "{} days", days)
        } else {
            f.write_str("0 days")
        }
    }
}

/// Format the duration between two dates
pub fn compute(start: NaiveDate, end: NaiveDate) -> String {
    DurationParts::between(start, end).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
    }

    #[test]
    fn test_same_day_is_zero_days() {
        assert_eq!(compute(date("2022-01-01"), date("2022-01-01")), "0 days");
    }

    #[test]
    fn test_one_month_and_one_day() {
        let parts = DurationParts::between(date("2022-01-01"), date("2022-02-01"));
        assert_eq!(parts, DurationParts { months: 1, days: 1 });
        assert_eq!(parts.to_string(), "1 month 1 days");
    }

    #[test]
    fn test_days_only() {
        assert_eq!(compute(date("2022-01-01"), date("2022-01-15")), "14 days");
        assert_eq!(compute(date("2022-11-03"), date("2022-11-18")), "15 days");
    }

    #[test]
    fn test_whole_months_drop_days() {
        assert_eq!(compute(date("2022-01-01"), date("2022-01-31")), "1 month");
        assert_eq!(compute(date("2022-01-01"), date("2022-03-02")), "2 month");
    }

    #[test]
    fn test_one_day_keeps_plural_wording() {
        assert_eq!(compute(date("2022-01-01"), date("2022-01-02")), "1 days");
    }

    #[test]
    fn test_twenty_nine_days_is_not_a_month() {
        assert_eq!(compute(date("2022-01-01"), date("2022-01-30")), "29 days");
    }

    #[test]
    fn test_long_interval() {
        // 365 days: 12 months, 5 leftover days
        assert_eq!(
            compute(date("2021-01-01"), date("2022-01-01")),
            "12 month 5 days"
        );
    }

    #[test]
    fn test_negative_interval_keeps_total_days() {
        let parts = DurationParts::between(date("2022-02-01"), date("2022-01-01"));
        assert_eq!(parts, DurationParts { months: -1, days: -31 });
        assert_eq!(parts.to_string(), "0 days");
    }

    #[test]
    fn test_negative_whole_months() {
        let parts = DurationParts::between(date("2022-01-31"), date("2022-01-01"));
        assert_eq!(parts, DurationParts { months: -1, days: 0 });
        assert_eq!(parts.to_string(), "0 days");
    }

    #[test]
    fn test_short_negative_interval() {
        let parts = DurationParts::between(date("2022-01-15"), date("2022-01-01"));
        assert_eq!(parts, DurationParts { months: 0, days: -14 });
        assert_eq!(parts.to_string(), "0 days");
    }

    #[test]
    fn test_deterministic() {
        let a = compute(date("2020-02-10"), date("2020-07-04"));
        let b = compute(date("2020-02-10"), date("2020-07-04"));
        assert_eq!(a, b);
    }
}
