// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveDateTime};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Seriale Excel (giorni dal 1899-12-30, frazione = ora del giorno).
pub(crate) fn datetime_serial(dt: &NaiveDateTime) -> f64 {
    let duration = *dt - excel_epoch();

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}

pub(crate) fn date_serial(d: &NaiveDate) -> f64 {
    (*d - excel_epoch().date()).num_days() as f64
}

fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        let d = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        assert_eq!(date_serial(&d), 45757.0);

        let dt = d.and_hms_opt(18, 0, 0).unwrap();
        assert_eq!(datetime_serial(&dt), 45757.75);
    }
}
