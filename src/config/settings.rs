//! User settings for expense-dash
//!
//! Where the data comes from, how long to wait for it, and how it is shown.

use serde::{Deserialize, Serialize};

use super::paths::DashPaths;
use crate::error::{DashError, DashResult};

/// User settings for expense-dash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Expense endpoint URL or path to a JSON file
    #[serde(default = "default_data_source")]
    pub data_source: String,

    /// HTTP request timeout
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Delay between automatic retries after a transport failure
    #[serde(default = "default_reconnect_interval")]
    pub reconnect_interval_secs: u64,

    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Title shown above the chart
    #[serde(default = "default_chart_title")]
    pub chart_title: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_data_source() -> String {
    "http://127.0.0.1:8000/api/gastos".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_reconnect_interval() -> u64 {
    15
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_chart_title() -> String {
    "Monthly Expenses".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_source: default_data_source(),
            request_timeout_secs: default_request_timeout(),
            reconnect_interval_secs: default_reconnect_interval(),
            currency_symbol: default_currency(),
            log_filter: default_log_filter(),
            chart_title: default_chart_title(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &DashPaths) -> DashResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| DashError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| DashError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DashPaths) -> DashResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DashError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| DashError::Io(format!("Failed to write settings file: {}", e)))
    }
}
