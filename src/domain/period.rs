//! `YYYY-MM` period parsing and validation.
//!
//! Periods are kept as plain `String`s everywhere outside this module: the
//! lexicographic ordering of `YYYY-MM` strings already matches chronological
//! order, so callers can compare and sort periods without parsing them.

use crate::errors::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

static PERIOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})-(0[1-9]|1[0-2])$").unwrap());

/// Validates a period string, returning it unchanged on success.
pub fn validate_period(period: &str) -> Result<&str, AppError> {
    if PERIOD_RE.is_match(period) {
        Ok(period)
    } else {
        Err(AppError::invalid_input(format!(
            "period '{period}' is not a valid YYYY-MM period"
        )))
    }
}

/// The inclusive `[start, end)` date range covered by a period, as `DATE`
/// strings suitable for a `date >= $1 AND date < $2` filter.
pub fn period_bounds(period: &str) -> Result<(chrono::NaiveDate, chrono::NaiveDate), AppError> {
    validate_period(period)?;
    let year: i32 = period[0..4].parse().unwrap();
    let month: u32 = period[5..7].parse().unwrap();

    let start = chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::invalid_input(format!("period '{period}' out of range")))?;
    let end = if month == 12 {
        chrono::NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        chrono::NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| AppError::invalid_input(format!("period '{period}' out of range")))?;

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_periods() {
        assert!(validate_period("2024-01").is_ok());
        assert!(validate_period("2024-12").is_ok());
        assert!(validate_period("1999-09").is_ok());
    }

    #[test]
    fn rejects_month_zero() {
        assert!(validate_period("2024-00").is_err());
    }

    #[test]
    fn rejects_month_thirteen() {
        assert!(validate_period("2024-13").is_err());
    }

    #[test]
    fn rejects_two_digit_year() {
        assert!(validate_period("24-01").is_err());
    }

    #[test]
    fn rejects_wrong_separator() {
        assert!(validate_period("2024/01").is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(validate_period("").is_err());
    }

    #[test]
    fn period_bounds_handles_december_rollover() {
        let (start, end) = period_bounds("2024-12").unwrap();
        assert_eq!(start, chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn period_bounds_mid_year() {
        let (start, end) = period_bounds("2024-03").unwrap();
        assert_eq!(start, chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(end, chrono::NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }
}
