//! Time-bounded cache of fetch results, keyed by (query id, start, end).

use crate::models::{DateRange, FollowupRecord, RecordSet};
use chrono::NaiveDate;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub set: RecordSet,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CacheKey {
    pub fn new(set: RecordSet, range: &DateRange) -> Self {
        Self {
            set,
            start: range.start(),
            end: range.end(),
        }
    }
}

#[derive(Clone)]
pub struct FetchCache {
    inner: Cache<CacheKey, Arc<Vec<FollowupRecord>>>,
}

impl FetchCache {
    /// Only two record sets exist, so a handful of ranges is plenty.
    const MAX_ENTRIES: u64 = 64;

    pub fn new(ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(Self::MAX_ENTRIES)
            .time_to_live(ttl)
            .build();
        Self { inner }
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<Vec<FollowupRecord>>> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: CacheKey, rows: Arc<Vec<FollowupRecord>>) {
        self.inner.insert(key, rows);
    }
}
