use crate::db::query::FollowupQuery;
use crate::errors::AppResult;
use crate::models::FollowupRecord;

/// A read-only source of followup rows.
///
/// Implementations open one connection per call and close it before
/// returning, on success and on failure alike.
pub trait RecordStore {
    fn fetch(&self, query: &FollowupQuery) -> AppResult<Vec<FollowupRecord>>;

    /// Short human-readable description (used in logs and banners).
    fn describe(&self) -> String;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn fetch(&self, query: &FollowupQuery) -> AppResult<Vec<FollowupRecord>> {
        (**self).fetch(query)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
