mod common;
use chrono::NaiveDate;
use common::{AGENT, init_fixture_db, setup_test_db};
use ptpdash::core::{Fetcher, ReportLogic};
use ptpdash::db::query::{EXCLUDED_REMARK_MARKER, POSTED_STATUS_CODES};
use ptpdash::db::{QueryFilters, RecordStore, SqliteStore, query};
use ptpdash::models::{DateRange, RecordSet};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;

fn filters() -> QueryFilters {
    QueryFilters {
        client_segment: "BPI CARDS XDAYS".into(),
        agent: AGENT.into(),
    }
}

fn range() -> DateRange {
    DateRange::parse("2025-04-10", "2025-04-14").unwrap()
}

fn fixture_store(name: &str) -> SqliteStore {
    let db = setup_test_db(name);
    init_fixture_db(&db);
    SqliteStore::new(db)
}

#[test]
fn ptp_rows_match_prefix_range_and_agent() {
    let store = fixture_store("query_ptp_rows");
    let rows = store
        .fetch(&query::build(RecordSet::Ptp, &range(), &filters()))
        .unwrap();

    assert_eq!(rows.len(), 3);
    for r in &rows {
        assert!(r.status_code.as_deref().unwrap().starts_with("PTP"));
        assert_eq!(r.agent_code.as_deref(), Some(AGENT));
        assert!(range().contains(r.dispo_at.unwrap().date()));
        assert!(r.name.is_some());
    }

    let remarks: Vec<_> = rows.iter().map(|r| r.remarks.as_deref().unwrap()).collect();
    assert_eq!(remarks, vec!["new ptp", "promised again", "promised"]);
}

#[test]
fn ptp_row_fields_are_projected() {
    let store = fixture_store("query_ptp_fields");
    let rows = store
        .fetch(&query::build(RecordSet::Ptp, &range(), &filters()))
        .unwrap();

    let first = &rows[0];
    assert_eq!(first.cycle.as_deref(), Some("Cycle 15"));
    assert_eq!(first.card_code.as_deref(), Some("CH001"));
    assert_eq!(first.account_number.as_deref(), Some("12345"));
    assert_eq!(first.name.as_deref(), Some("JUAN DELA CRUZ"));
    assert_eq!(first.ptp_amount, Some(Decimal::from_str("1500.5").unwrap()));
    assert_eq!(first.ptp_date, NaiveDate::from_ymd_opt(2025, 4, 20));
    assert_eq!(first.balance, Some(Decimal::from(20000)));
    assert_eq!(first.placement.as_deref(), Some("FN-1"));
    assert_eq!(first.is_locked, Some(0));
    assert_eq!(first.is_aborted, Some(0));
}

#[test]
fn posted_rows_exclude_marker_and_other_statuses() {
    let store = fixture_store("query_posted_rows");
    let rows = store
        .fetch(&query::build(RecordSet::Posted, &range(), &filters()))
        .unwrap();

    assert_eq!(rows.len(), 2);
    for r in &rows {
        assert!(POSTED_STATUS_CODES.contains(&r.status_code.as_deref().unwrap()));
        assert!(!r.remarks.as_deref().unwrap().contains(EXCLUDED_REMARK_MARKER));
        assert!(r.name.is_none());
    }
    assert_eq!(rows[0].status_code.as_deref(), Some("PAYMENT - UNPOSTED_MISPOSTED PAYMENTS"));
    assert_eq!(rows[1].status_code.as_deref(), Some("PAYMENT - CURED"));
}

#[test]
fn duplicate_links_are_collapsed() {
    let store = fixture_store("query_distinct");
    let single_day = DateRange::parse("2025-04-10", "2025-04-10").unwrap();
    let rows = store
        .fetch(&query::build(RecordSet::Ptp, &single_day, &filters()))
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn other_agent_sees_only_own_rows() {
    let store = fixture_store("query_other_agent");
    let f = QueryFilters {
        agent: "OTHERAGENT".into(),
        ..filters()
    };
    let rows = store.fetch(&query::build(RecordSet::Ptp, &range(), &f)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].remarks.as_deref(), Some("other agent"));
}

#[test]
fn missing_database_is_a_store_error() {
    let store = SqliteStore::new(setup_test_db("query_missing_db"));
    let err = store
        .fetch(&query::build(RecordSet::Ptp, &range(), &filters()))
        .unwrap_err();
    assert!(err.to_string().starts_with("SQLite error"));
}

#[test]
fn pipeline_shapes_fixture_rows() {
    let fetcher = Fetcher::new(
        fixture_store("query_pipeline"),
        filters(),
        Duration::from_secs(600),
    );
    let dash = ReportLogic::render(
        &fetcher,
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(),
    )
    .unwrap();

    assert_eq!(dash.ptp[0].account_number.as_deref(), Some("0000012345"));
    assert_eq!(dash.ptp[1].account_number.as_deref(), Some("9876543210"));

    let total: usize = dash.ptp_status_counts.iter().map(|c| c.count).sum();
    assert_eq!(total, dash.ptp.len());
    assert_eq!(dash.ptp_status_counts.len(), 2);
    assert_eq!(dash.ptp_status_counts[0].status_code.as_deref(), Some("PTP1"));
    assert_eq!(dash.ptp_status_counts[0].count, 2);
    assert_eq!(dash.ptp_status_counts[1].status_code.as_deref(), Some("PTP2"));
    assert_eq!(dash.ptp_status_counts[1].count, 1);
}
