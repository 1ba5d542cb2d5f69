//! SQL builder for the two dashboard queries.
//!
//! Both queries share projection, joins, date window, owner filter and
//! ordering; they differ only in the status predicate, which is selected by
//! [`RecordSet`]. Every literal is bound as a parameter, so the same text
//! runs unchanged on MySQL (sqlx) and on a SQLite snapshot (rusqlite).

use crate::models::{Column, DateRange, RecordSet};
use chrono::NaiveDate;

/// Status codes counted as posted payments. Stored spelling kept as-is.
pub const POSTED_STATUS_CODES: [&str; 3] = [
    "PAYMENT - UNPOSTED_MISPOSTED PAYMENTS",
    "PAYMENT - CURED",
    "PAYMENT - INSUFFIECIENT PAYMENT",
];

/// Remarks carrying this marker are excluded from posted payments.
pub const EXCLUDED_REMARK_MARKER: &str = "MSPM";

pub const PTP_STATUS_PREFIX: &str = "PTP";

/// Fixed predicates shared by both queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFilters {
    /// Matched as a substring of `debtor.client_name`.
    pub client_segment: String,
    /// Exact match on `followup.remark_by`.
    pub agent: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Date(NaiveDate),
}

/// A ready-to-run statement: SQL text plus positional (`?`) parameters.
#[derive(Debug, Clone)]
pub struct FollowupQuery {
    pub set: RecordSet,
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Result column alias for each projected column; row mappers read by name.
pub(crate) fn alias(column: Column) -> &'static str {
    match column {
        Column::Cycle => "cycle",
        Column::CardCode => "card_code",
        Column::AccountNumber => "account_number",
        Column::Name => "name",
        Column::AgentCode => "agent_code",
        Column::StatusCode => "status_code",
        Column::Remarks => "remarks",
        Column::PtpAmount => "ptp_amount",
        Column::PtpDate => "ptp_date",
        Column::Balance => "balance",
        Column::DispoDate => "dispo_at",
        Column::Placement => "placement",
        Column::IsLocked => "is_locked",
        Column::IsAborted => "is_aborted",
    }
}

fn expression(column: Column) -> &'static str {
    match column {
        Column::Cycle => "CAST(debtor.cycle AS CHAR)",
        Column::CardCode => "CAST(debtor.card_no AS CHAR)",
        Column::AccountNumber => "CAST(debtor.account AS CHAR)",
        Column::Name => "debtor.name",
        Column::AgentCode => "followup.remark_by",
        Column::StatusCode => "followup.status_code",
        Column::Remarks => "followup.remark",
        Column::PtpAmount => "CAST(debtor.ptp_amount AS DECIMAL(18,2))",
        Column::PtpDate => "DATE(debtor.ptp_date)",
        Column::Balance => "CAST(debtor.balance AS DECIMAL(18,2))",
        Column::DispoDate => "followup.datetime",
        Column::Placement => "CAST(debtor.placement AS CHAR)",
        Column::IsLocked => "CAST(debtor.is_locked AS SIGNED)",
        Column::IsAborted => "CAST(debtor.is_aborted AS SIGNED)",
    }
}

pub fn build(set: RecordSet, range: &DateRange, filters: &QueryFilters) -> FollowupQuery {
    let projection = set
        .columns()
        .iter()
        .map(|c| format!("    {} AS {}", expression(*c), alias(*c)))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut predicates: Vec<String> = Vec::new();
    let mut params: Vec<SqlParam> = Vec::new();

    predicates.push("debtor.client_name LIKE ?".into());
    params.push(SqlParam::Text(format!("%{}%", filters.client_segment)));

    match set {
        RecordSet::Ptp => {
            predicates.push("followup.status_code LIKE ?".into());
            params.push(SqlParam::Text(format!("{PTP_STATUS_PREFIX}%")));
        }
        RecordSet::Posted => {
            let slots = vec!["?"; POSTED_STATUS_CODES.len()].join(", ");
            predicates.push(format!("followup.status_code IN ({slots})"));
            params.extend(
                POSTED_STATUS_CODES
                    .iter()
                    .map(|s| SqlParam::Text((*s).to_string())),
            );
        }
    }

    predicates.push("DATE(followup.`date`) BETWEEN ? AND ?".into());
    params.push(SqlParam::Date(range.start()));
    params.push(SqlParam::Date(range.end()));

    predicates.push("followup.remark_by = ?".into());
    params.push(SqlParam::Text(filters.agent.clone()));

    if set == RecordSet::Posted {
        predicates.push("followup.remark NOT LIKE ?".into());
        params.push(SqlParam::Text(format!("%{EXCLUDED_REMARK_MARKER}%")));
    }

    let sql = format!(
        "SELECT DISTINCT\n{projection}\n\
         FROM debtor\n\
         LEFT JOIN debtor_followup ON debtor_followup.debtor_id = debtor.id\n\
         LEFT JOIN followup ON followup.id = debtor_followup.followup_id\n\
         LEFT JOIN `user` ON `user`.id = followup.remark_by_id\n\
         WHERE {}\n\
         ORDER BY dispo_at DESC",
        predicates.join("\n  AND ")
    );

    FollowupQuery { set, sql, params }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters() -> QueryFilters {
        QueryFilters {
            client_segment: "BPI CARDS XDAYS".into(),
            agent: "GTCUSTODIO".into(),
        }
    }

    fn range() -> DateRange {
        DateRange::parse("2025-04-10", "2025-04-14").unwrap()
    }

    #[test]
    fn placeholders_match_params() {
        for set in RecordSet::ALL {
            let q = build(set, &range(), &filters());
            assert_eq!(q.sql.matches('?').count(), q.params.len(), "{set:?}");
        }
    }

    #[test]
    fn ptp_query_filters_on_prefix() {
        let q = build(RecordSet::Ptp, &range(), &filters());
        assert!(q.sql.starts_with("SELECT DISTINCT"));
        assert!(q.sql.contains("followup.status_code LIKE ?"));
        assert!(q.sql.contains("debtor.name AS name"));
        assert!(!q.sql.contains("NOT LIKE"));
        assert!(q.sql.ends_with("ORDER BY dispo_at DESC"));
        assert_eq!(
            q.params,
            vec![
                SqlParam::Text("%BPI CARDS XDAYS%".into()),
                SqlParam::Text("PTP%".into()),
                SqlParam::Date(range().start()),
                SqlParam::Date(range().end()),
                SqlParam::Text("GTCUSTODIO".into()),
            ]
        );
    }

    #[test]
    fn posted_query_lists_statuses_and_excludes_marker() {
        let q = build(RecordSet::Posted, &range(), &filters());
        assert!(q.sql.contains("followup.status_code IN (?, ?, ?)"));
        assert!(q.sql.contains("followup.remark NOT LIKE ?"));
        assert!(!q.sql.contains("debtor.name"));
        assert_eq!(q.params.last(), Some(&SqlParam::Text("%MSPM%".into())));
        assert_eq!(q.params[1], SqlParam::Text("PAYMENT - UNPOSTED_MISPOSTED PAYMENTS".into()));
    }
}
