//! expense-dash - Terminal dashboard for monthly expenses per project
//!
//! This library loads a flat collection of expense records, groups them into
//! per-project monthly buckets and derives the statistics, chart series and
//! table shown by the dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, calendar months and monthly buckets
//! - `source`: HTTP and file data sources
//! - `services`: Ingestion, project registry, selection and the load controller
//! - `reports`: Aggregation, statistics and view projection
//! - `display`: Terminal formatting for CLI output
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers
//! - `tui`: Interactive dashboard
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_dash::config::{DashPaths, Settings};
//! use expense_dash::services::Dataset;
//!
//! let paths = DashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let source = expense_dash::source::open(&settings.data_source, &settings)?;
//! let dataset = Dataset::build(source.fetch()?)?;
//! println!("{} buckets", dataset.report().len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod source;
pub mod tui;

pub use error::{DashError, DashResult};
