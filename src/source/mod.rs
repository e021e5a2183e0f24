//! Expense data sources
//!
//! The dashboard reads the full record collection in one request. A source
//! location starting with `http://` or `https://` is fetched over HTTP, anything
//! else is read as a JSON file.

pub mod file;
pub mod http;

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Settings;
use crate::error::DashResult;
use crate::models::ExpenseRecord;

pub use file::FileSource;
pub use http::HttpSource;

/// Something that can deliver the expense collection
pub trait ExpenseSource: Send + Sync {
    /// Fetch every record; `None` when the payload is `null`
    fn fetch(&self) -> DashResult<Option<Vec<ExpenseRecord>>>;

    /// Human readable location, used in logs and the status bar
    fn describe(&self) -> String;
}

/// Turn a decoded payload array into records, one element at a time
pub fn decode_payload(payload: Option<Vec<Value>>) -> Option<Vec<ExpenseRecord>> {
    payload.map(|items| items.into_iter().map(ExpenseRecord::from_value_lenient).collect())
}

/// Whether `location` names an HTTP endpoint
pub fn is_http(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Open the source named by `location`
pub fn open(location: &str, settings: &Settings) -> DashResult<Arc<dyn ExpenseSource>> {
    let source: Arc<dyn ExpenseSource> = if is_http(location) {
        Arc::new(HttpSource::new(
            location.trim(),
            Duration::from_secs(settings.request_timeout_secs),
        )?)
    } else {
        Arc::new(FileSource::new(location))
    };

    tracing::debug!(source = %source.describe(), "opened data source");
    Ok(source)
}
