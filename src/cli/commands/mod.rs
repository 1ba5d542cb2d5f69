pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::config::{Config, StoreKind};
use crate::core::Fetcher;
use crate::db::{MySqlStore, RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Build the fetcher for the configured store. No connection is opened here.
pub(crate) fn open_fetcher(cfg: &Config) -> AppResult<Fetcher<Box<dyn RecordStore>>> {
    let store: Box<dyn RecordStore> = match cfg.store {
        StoreKind::Mysql => Box::new(MySqlStore::new(&cfg.mysql)?),
        StoreKind::Sqlite => Box::new(SqliteStore::new(expand_tilde(&cfg.sqlite_path))),
    };

    tracing::debug!(store = %store.describe(), "store selected");
    Ok(Fetcher::new(store, cfg.filters(), cfg.cache_ttl()))
}
