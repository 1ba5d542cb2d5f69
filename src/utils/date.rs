use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Default range of the dashboard date pickers.
pub const DEFAULT_START: &str = "2025-04-10";
pub const DEFAULT_END: &str = "2025-04-14";

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_with_whitespace() {
        let d = parse_date(" 2025-04-10 ").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_date("10/04/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }
}
