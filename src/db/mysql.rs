//! Live store: MySQL/MariaDB over the network, through sqlx.
//!
//! The rest of the program is synchronous, so the store owns a small
//! current-thread tokio runtime and blocks on it for each fetch.

use crate::config::MySqlSettings;
use crate::db::query::{FollowupQuery, SqlParam, alias};
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::{Column, FollowupRecord, RecordSet};
use sqlx::mysql::{MySqlConnectOptions, MySqlRow};
use sqlx::{ConnectOptions, Connection, MySqlConnection, Row};
use tokio::runtime::Runtime;

pub struct MySqlStore {
    options: MySqlConnectOptions,
    label: String,
    runtime: Runtime,
}

impl MySqlStore {
    pub fn new(settings: &MySqlSettings) -> AppResult<Self> {
        let options = MySqlConnectOptions::new()
            .host(&settings.host)
            .port(settings.port)
            .username(&settings.user)
            .password(&settings.password)
            .database(&settings.database)
            .disable_statement_logging();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            options,
            label: format!(
                "mysql://{}@{}:{}/{}",
                settings.user, settings.host, settings.port, settings.database
            ),
            runtime,
        })
    }
}

impl RecordStore for MySqlStore {
    fn fetch(&self, query: &FollowupQuery) -> AppResult<Vec<FollowupRecord>> {
        self.runtime.block_on(async {
            let mut conn = MySqlConnection::connect_with(&self.options).await?;

            let result = fetch_rows(&mut conn, query).await;

            if let Err(e) = conn.close().await {
                tracing::warn!(error = %e, store = %self.label, "failed to close MySQL connection");
            }

            result
        })
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}

async fn fetch_rows(
    conn: &mut MySqlConnection,
    query: &FollowupQuery,
) -> AppResult<Vec<FollowupRecord>> {
    let mut q = sqlx::query(&query.sql);
    for p in &query.params {
        q = match p {
            SqlParam::Text(s) => q.bind(s.as_str()),
            SqlParam::Date(d) => q.bind(*d),
        };
    }

    let rows = q.fetch_all(&mut *conn).await?;

    let mut out = Vec::with_capacity(rows.len());
    for row in &rows {
        out.push(map_row(row, query.set)?);
    }
    Ok(out)
}

fn map_row(row: &MySqlRow, set: RecordSet) -> Result<FollowupRecord, sqlx::Error> {
    let cycle: Option<String> = row.try_get(alias(Column::Cycle))?;

    Ok(FollowupRecord {
        cycle: FollowupRecord::cycle_label(cycle.as_deref()),
        card_code: row.try_get(alias(Column::CardCode))?,
        account_number: row.try_get(alias(Column::AccountNumber))?,
        name: match set {
            RecordSet::Ptp => row.try_get(alias(Column::Name))?,
            RecordSet::Posted => None,
        },
        agent_code: row.try_get(alias(Column::AgentCode))?,
        status_code: row.try_get(alias(Column::StatusCode))?,
        remarks: row.try_get(alias(Column::Remarks))?,
        ptp_amount: row.try_get(alias(Column::PtpAmount))?,
        ptp_date: row.try_get(alias(Column::PtpDate))?,
        balance: row.try_get(alias(Column::Balance))?,
        dispo_at: row.try_get(alias(Column::DispoDate))?,
        placement: row.try_get(alias(Column::Placement))?,
        is_locked: row.try_get(alias(Column::IsLocked))?,
        is_aborted: row.try_get(alias(Column::IsAborted))?,
    })
}
