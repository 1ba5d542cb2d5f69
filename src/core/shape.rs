use crate::models::{FollowupRecord, StatusCountRow};
use std::collections::BTreeMap;

pub const ACCOUNT_NUMBER_WIDTH: usize = 10;

/// Left-pad a numeric account number with zeros to ten characters.
///
/// Anything that is not all ASCII digits, or already ten characters or
/// longer, is returned unchanged.
pub fn pad_account_number(raw: &str) -> String {
    let is_numeric = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    if is_numeric && raw.len() < ACCOUNT_NUMBER_WIDTH {
        format!("{raw:0>width$}", width = ACCOUNT_NUMBER_WIDTH)
    } else {
        raw.to_string()
    }
}

pub fn normalize_account_numbers(records: &mut [FollowupRecord]) {
    for r in records.iter_mut() {
        if let Some(acc) = r.account_number.as_deref() {
            r.account_number = Some(pad_account_number(acc));
        }
    }
}

/// Count rows per (agent code, status code); rows come out in key order.
pub fn status_counts(records: &[FollowupRecord]) -> Vec<StatusCountRow> {
    let mut groups: BTreeMap<(Option<&str>, Option<&str>), usize> = BTreeMap::new();

    for r in records {
        *groups
            .entry((r.agent_code.as_deref(), r.status_code.as_deref()))
            .or_default() += 1;
    }

    groups
        .into_iter()
        .map(|((agent, status), count)| StatusCountRow {
            agent_code: agent.map(str::to_string),
            status_code: status.map(str::to_string),
            count,
        })
        .collect()
}
