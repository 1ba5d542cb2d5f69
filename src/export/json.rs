use crate::errors::{AppError, AppResult};
use crate::models::Dashboard;

/// Dashboard in JSON formattato (range, both record sets, aggregate).
pub fn to_json(dash: &Dashboard) -> AppResult<String> {
    serde_json::to_string_pretty(dash)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateRange, FollowupRecord, StatusCountRow};

    #[test]
    fn uses_column_headers_as_keys() {
        let dash = Dashboard {
            range: DateRange::parse("2025-04-10", "2025-04-14").unwrap(),
            ptp: vec![FollowupRecord {
                account_number: Some("0000012345".into()),
                name: Some("JUAN".into()),
                ..Default::default()
            }],
            posted: vec![FollowupRecord::default()],
            ptp_status_counts: vec![StatusCountRow {
                agent_code: Some("A1".into()),
                status_code: Some("PTP1".into()),
                count: 1,
            }],
        };

        let v: serde_json::Value = serde_json::from_str(&to_json(&dash).unwrap()).unwrap();
        assert_eq!(v["range"]["start"], "2025-04-10");
        assert_eq!(v["ptp"][0]["ACCOUNT NUMBER"], "0000012345");
        assert_eq!(v["ptp"][0]["NAME"], "JUAN");
        assert!(v["posted"][0].get("NAME").is_none());
        assert_eq!(v["ptp_status_counts"][0]["Count"], 1);
    }
}
