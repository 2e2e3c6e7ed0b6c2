//! Date utilities: statement row dates to calendar dates.

use chrono::{Datelike, Local, NaiveDate};

/// Current calendar year in local time. Used for `MM/DD` rows that omit it.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Expand a two-digit year: 00-69 → 20xx, 70-99 → 19xx.
pub fn expand_two_digit_year(yy: u32) -> i32 {
    if yy < 70 { 2000 + yy as i32 } else { 1900 + yy as i32 }
}

/// Parse "MM/DD" with the given year. Returns None for non-dates like 02/30.
pub fn parse_month_day(s: &str, year: i32) -> Option<NaiveDate> {
    let mut it = s.trim().split('/');
    let m: u32 = it.next()?.parse().ok()?;
    let d: u32 = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, m, d)
}

/// Parse "MM/DD/YY" (or "MM/DD/YYYY").
pub fn parse_month_day_year(s: &str) -> Option<NaiveDate> {
    let mut it = s.trim().split('/');
    let m: u32 = it.next()?.parse().ok()?;
    let d: u32 = it.next()?.parse().ok()?;
    let y_raw = it.next()?;
    if it.next().is_some() {
        return None;
    }
    let y: u32 = y_raw.parse().ok()?;
    let year = match y_raw.len() {
        2 => expand_two_digit_year(y),
        4 => y as i32,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, m, d)
}

/// Parse either form; `default_year` applies only when the year is missing.
pub fn parse_statement_date(s: &str, default_year: i32) -> Option<NaiveDate> {
    match s.trim().matches('/').count() {
        1 => parse_month_day(s, default_year),
        2 => parse_month_day_year(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_day_uses_given_year() {
        assert_eq!(parse_month_day("03/05", 2026), Some(ymd(2026, 3, 5)));
        assert_eq!(parse_statement_date("03/05", current_year()), Some(ymd(current_year(), 3, 5)));
    }

    #[test]
    fn test_month_day_year_ignores_default() {
        assert_eq!(parse_statement_date("03/05/24", 1999), Some(ymd(2024, 3, 5)));
        assert_eq!(parse_month_day_year("12/31/99"), Some(ymd(1999, 12, 31)));
        assert_eq!(parse_month_day_year("01/02/2023"), Some(ymd(2023, 1, 2)));
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(parse_month_day("02/30", 2025), None);
        assert_eq!(parse_month_day("13/01", 2025), None);
        assert_eq!(parse_month_day_year("01/02/123"), None);
        assert_eq!(parse_statement_date("0102", 2025), None);
        assert_eq!(parse_statement_date("ab/cd", 2025), None);
    }
}
