//! Core data models for expense-dash
//!
//! - `record`: raw expense records from the data source
//! - `month`: calendar month keys and date parsing
//! - `bucket`: per-project monthly aggregates

pub mod bucket;
pub mod month;
pub mod record;

pub use bucket::{BucketKey, MonthlyBucket};
pub use month::{parse_record_date, YearMonth};
pub use record::{ExpenseRecord, RawAmount};
