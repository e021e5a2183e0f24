//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the dashboard pipeline.

pub mod export;
pub mod report;

use clap::Args;

use crate::error::DashResult;
use crate::services::Dataset;
use crate::source::ExpenseSource;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};

/// Project selection flags shared by the reporting commands
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectFilter {
    /// Only include this project (repeatable)
    #[arg(short, long = "project", value_name = "PROJECT")]
    pub projects: Vec<String>,

    /// Exclude this project (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "PROJECT")]
    pub exclude: Vec<String>,
}

/// Fetch, run the pipeline and apply the filter flags
pub fn load_dataset(source: &dyn ExpenseSource, filter: &ProjectFilter) -> DashResult<Dataset> {
    tracing::info!(source = %source.describe(), "loading expenses");
    let mut dataset = Dataset::build(source.fetch()?)?;
    dataset.apply_filters(&filter.projects, &filter.exclude)?;
    Ok(dataset)
}
