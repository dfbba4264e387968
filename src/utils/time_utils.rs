use chrono::{Days, Local, NaiveDate};

use crate::domain::ForecastError;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";

    /// Parse a user- or file-supplied `YYYY-MM-DD` string.
    /// Surrounding whitespace is ignored; anything else is a format error.
    pub fn parse_date(text: &str) -> Result<NaiveDate, ForecastError> {
        NaiveDate::parse_from_str(text.trim(), Self::STANDARD_TIME_FORMAT).map_err(|_| {
            ForecastError::DateFormat {
                input: text.to_string(),
            }
        })
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(Self::STANDARD_TIME_FORMAT).to_string()
    }

    /// `start + days`, or `None` past the end of the calendar.
    pub fn add_days(start: NaiveDate, days: i64) -> Option<NaiveDate> {
        if days >= 0 {
            start.checked_add_days(Days::new(days as u64))
        } else {
            start.checked_sub_days(Days::new(days.unsigned_abs()))
        }
    }
}

/// Local calendar date of "now" (the series horizon is measured from here).
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::forecast::ymd;

    #[test]
    fn test_parse_date() {
        assert_eq!(TimeUtils::parse_date("2025-01-01").unwrap(), ymd(2025, 1, 1));
        assert_eq!(TimeUtils::parse_date(" 2025-01-01\n").unwrap(), ymd(2025, 1, 1));
        assert!(matches!(
            TimeUtils::parse_date("2025-02-30"),
            Err(ForecastError::DateFormat { .. })
        ));
        assert!(TimeUtils::parse_date("01/01/2025").is_err());
        assert!(TimeUtils::parse_date("").is_err());
    }

    #[test]
    fn test_add_days_both_directions() {
        let d = ymd(2020, 2, 28);
        assert_eq!(TimeUtils::add_days(d, 1), Some(ymd(2020, 2, 29)));
        assert_eq!(TimeUtils::add_days(d, -59), Some(ymd(2019, 12, 31)));
        assert_eq!(TimeUtils::add_days(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(TimeUtils::format_date(ymd(2010, 7, 19)), "2010-07-19");
    }
}
