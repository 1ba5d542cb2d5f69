use super::{date_range::DateRange, record::FollowupRecord, record::RecordSet};
use serde::Serialize;

/// Aggregate row for the "PTP Status Count by Agent" chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountRow {
    #[serde(rename = "AGENT CODE")]
    pub agent_code: Option<String>,
    #[serde(rename = "STATUS CODE")]
    pub status_code: Option<String>,
    #[serde(rename = "Count")]
    pub count: usize,
}

/// Everything one render produces.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub range: DateRange,
    pub ptp: Vec<FollowupRecord>,
    pub posted: Vec<FollowupRecord>,
    pub ptp_status_counts: Vec<StatusCountRow>,
}

impl Dashboard {
    pub fn records(&self, set: RecordSet) -> &[FollowupRecord] {
        match set {
            RecordSet::Ptp => &self.ptp,
            RecordSet::Posted => &self.posted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ptp.is_empty() && self.posted.is_empty()
    }
}
