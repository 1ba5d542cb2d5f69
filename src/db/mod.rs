pub mod cache;
pub mod mysql;
pub mod query;
pub mod sqlite;
pub mod store;

pub use cache::{CacheKey, FetchCache};
pub use mysql::MySqlStore;
pub use query::{FollowupQuery, QueryFilters};
pub use sqlite::SqliteStore;
pub use store::RecordStore;
