pub mod dashboard;
pub mod date_range;
pub mod record;

pub use dashboard::{Dashboard, StatusCountRow};
pub use date_range::DateRange;
pub use record::{Cell, Column, FollowupRecord, RecordSet};
