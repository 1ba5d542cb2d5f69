#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const AGENT: &str = "GTCUSTODIO";

pub fn ptpdash() -> Command {
    cargo_bin_cmd!("ptpdash")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ptpdash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that never exists, so every run uses defaults.
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_ptpdash.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

const SCHEMA: &str = "
CREATE TABLE debtor (
    id          INTEGER PRIMARY KEY,
    cycle       TEXT,
    card_no     TEXT,
    account     INTEGER,
    name        TEXT,
    client_name TEXT,
    ptp_amount  REAL,
    ptp_date    TEXT,
    balance     REAL,
    placement   TEXT,
    is_locked   INTEGER,
    is_aborted  INTEGER
);
CREATE TABLE followup (
    id           INTEGER PRIMARY KEY,
    remark_by    TEXT,
    remark_by_id INTEGER,
    status_code  TEXT,
    remark       TEXT,
    date         TEXT,
    datetime     TEXT
);
CREATE TABLE debtor_followup (
    debtor_id   INTEGER,
    followup_id INTEGER
);
CREATE TABLE user (
    id       INTEGER PRIMARY KEY,
    username TEXT
);
";

/// Build the four-table fixture.
///
/// In 2025-04-10..2025-04-14 for GTCUSTODIO on BPI CARDS XDAYS:
/// - PTP: followups 2 (PTP2), 3 (PTP1), 1 (PTP1), newest first
/// - posted: followups 9 (UNPOSTED_MISPOSTED), 7 (CURED)
///
/// Everything else is excluded by exactly one predicate.
pub fn init_fixture_db(db_path: &str) {
    let conn = Connection::open(db_path).expect("open fixture db");
    conn.execute_batch(SCHEMA).expect("create schema");

    conn.execute_batch(
        "
        INSERT INTO user (id, username) VALUES (1, 'GTCUSTODIO'), (2, 'OTHERAGENT');

        INSERT INTO debtor VALUES
            (1, '202515', 'CH001', 12345,      'JUAN DELA CRUZ', 'BPI CARDS XDAYS',   1500.5, '2025-04-20', 20000,    'FN-1', 0, 0),
            (2, '202507', 'CH002', 9876543210, 'MARIA CLARA',    'BPI CARDS XDAYS 2', 2000,   '2025-04-18', 35000.75, 'FN-2', 1, 0),
            (3, '202501', 'CH003', 555,        'PEDRO PENDUKO',  'OTHER BANK',        100,    '2025-04-19', 900,      'FN-3', 0, 1);

        INSERT INTO followup VALUES
            (1,  'GTCUSTODIO', 1, 'PTP1', 'promised',       '2025-04-10', '2025-04-10 09:00:00'),
            (2,  'GTCUSTODIO', 1, 'PTP2', 'new ptp',        '2025-04-14', '2025-04-14 17:30:00'),
            (3,  'GTCUSTODIO', 1, 'PTP1', 'promised again', '2025-04-12', '2025-04-12 11:00:00'),
            (4,  'GTCUSTODIO', 1, 'PTP1', 'too early',      '2025-04-09', '2025-04-09 10:00:00'),
            (5,  'OTHERAGENT', 2, 'PTP1', 'other agent',    '2025-04-11', '2025-04-11 10:00:00'),
            (6,  'GTCUSTODIO', 1, 'PTP1', 'other client',   '2025-04-11', '2025-04-11 12:00:00'),
            (7,  'GTCUSTODIO', 1, 'PAYMENT - CURED', 'paid in full', '2025-04-11', '2025-04-11 15:00:00'),
            (8,  'GTCUSTODIO', 1, 'PAYMENT - INSUFFIECIENT PAYMENT', 'MSPM partial', '2025-04-12', '2025-04-12 16:00:00'),
            (9,  'GTCUSTODIO', 1, 'PAYMENT - UNPOSTED_MISPOSTED PAYMENTS', 'unposted', '2025-04-13', '2025-04-13 08:15:00'),
            (10, 'GTCUSTODIO', 1, 'PAYMENT - OTHER', 'not a posted status', '2025-04-12', '2025-04-12 09:00:00'),
            (11, 'GTCUSTODIO', 1, 'CALLBACK', 'not a ptp', '2025-04-12', '2025-04-12 09:30:00');

        INSERT INTO debtor_followup (debtor_id, followup_id) VALUES
            (1, 1), (1, 1),
            (1, 2), (2, 3), (1, 4), (1, 5), (3, 6),
            (2, 7), (1, 8), (1, 9), (2, 10), (1, 11);
        ",
    )
    .expect("insert fixture rows");
}

/// Fixture DB with the schema but no rows.
pub fn init_empty_db(db_path: &str) {
    let conn = Connection::open(db_path).expect("open empty db");
    conn.execute_batch(SCHEMA).expect("create schema");
}
