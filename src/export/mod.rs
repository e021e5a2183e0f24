//! Export module for expense-dash
//!
//! Writes the current projection in multiple formats:
//! - CSV: the monthly table rows (spreadsheet-compatible)
//! - JSON: statistics, series and rows with schema versioning
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_rows_csv;
pub use json::{export_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
