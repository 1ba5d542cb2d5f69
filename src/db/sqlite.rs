//! SQLite snapshot store (same four-table schema as the live database).

use crate::db::query::{FollowupQuery, SqlParam, alias};
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::{Column, FollowupRecord, RecordSet};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use rusqlite::types::{FromSqlError, ToSqlOutput, Type, ValueRef};
use rusqlite::{Connection, OpenFlags, Row, ToSql, params_from_iter};
use std::path::PathBuf;
use std::str::FromStr;

pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open a read-only connection, run `func`, then close the connection
    /// whatever `func` returned.
    fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<T>,
    {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let result = func(&conn);

        if let Err((_, e)) = conn.close() {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to close SQLite connection");
        }

        Ok(result?)
    }
}

impl RecordStore for SqliteStore {
    fn fetch(&self, query: &FollowupQuery) -> AppResult<Vec<FollowupRecord>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&query.sql)?;
            let rows = stmt.query_map(params_from_iter(query.params.iter()), |row| {
                map_row(row, query.set)
            })?;

            let mut out = Vec::new();
            for r in rows {
                out.push(r?);
            }
            Ok(out)
        })
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            SqlParam::Text(s) => s.to_sql(),
            SqlParam::Date(d) => d.to_sql(),
        }
    }
}

/// Mapping riga → FollowupRecord (colonne lette per alias).
fn map_row(row: &Row<'_>, set: RecordSet) -> rusqlite::Result<FollowupRecord> {
    let cycle: Option<String> = row.get(alias(Column::Cycle))?;

    Ok(FollowupRecord {
        cycle: FollowupRecord::cycle_label(cycle.as_deref()),
        card_code: row.get(alias(Column::CardCode))?,
        account_number: row.get(alias(Column::AccountNumber))?,
        name: match set {
            RecordSet::Ptp => row.get(alias(Column::Name))?,
            RecordSet::Posted => None,
        },
        agent_code: row.get(alias(Column::AgentCode))?,
        status_code: row.get(alias(Column::StatusCode))?,
        remarks: row.get(alias(Column::Remarks))?,
        ptp_amount: decimal_at(row, alias(Column::PtpAmount))?,
        ptp_date: row.get(alias(Column::PtpDate))?,
        balance: decimal_at(row, alias(Column::Balance))?,
        dispo_at: row.get(alias(Column::DispoDate))?,
        placement: row.get(alias(Column::Placement))?,
        is_locked: row.get(alias(Column::IsLocked))?,
        is_aborted: row.get(alias(Column::IsAborted))?,
    })
}

/// SQLite keeps DECIMAL columns as INTEGER, REAL or TEXT depending on the value.
fn decimal_at(row: &Row<'_>, name: &str) -> rusqlite::Result<Option<Decimal>> {
    let idx = row.as_ref().column_index(name)?;
    let conversion = |ty: Type, e: Box<dyn std::error::Error + Send + Sync>| {
        rusqlite::Error::FromSqlConversionFailure(idx, ty, e)
    };

    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(i) => Ok(Some(Decimal::from(i))),
        ValueRef::Real(f) => Decimal::from_f64(f)
            .map(Some)
            .ok_or_else(|| conversion(Type::Real, Box::new(FromSqlError::OutOfRange(f as i64)))),
        ValueRef::Text(t) => {
            let s = String::from_utf8_lossy(t);
            Decimal::from_str(s.trim())
                .map(Some)
                .map_err(|e| conversion(Type::Text, Box::new(e)))
        }
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            name.to_string(),
            Type::Blob,
        )),
    }
}
