pub mod fetch;
pub mod report;
pub mod shape;

pub use fetch::Fetcher;
pub use report::ReportLogic;
