use crate::db::{CacheKey, FetchCache, QueryFilters, RecordStore, query};
use crate::errors::AppResult;
use crate::models::{DateRange, FollowupRecord, RecordSet};
use std::sync::Arc;
use std::time::Duration;

/// Runs the dashboard queries against a store, through the fetch cache.
pub struct Fetcher<S> {
    store: S,
    cache: FetchCache,
    filters: QueryFilters,
}

impl<S: RecordStore> Fetcher<S> {
    pub fn new(store: S, filters: QueryFilters, ttl: Duration) -> Self {
        Self {
            store,
            cache: FetchCache::new(ttl),
            filters,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn fetch(&self, set: RecordSet, range: &DateRange) -> AppResult<Arc<Vec<FollowupRecord>>> {
        let key = CacheKey::new(set, range);

        if let Some(rows) = self.cache.get(&key) {
            tracing::debug!(set = set.id(), %range, rows = rows.len(), "cache hit");
            return Ok(rows);
        }

        let q = query::build(set, range, &self.filters);
        let rows = Arc::new(self.store.fetch(&q)?);

        tracing::info!(
            set = set.id(),
            %range,
            rows = rows.len(),
            store = %self.store.describe(),
            "records fetched"
        );

        self.cache.insert(key, Arc::clone(&rows));
        Ok(rows)
    }
}
