//! Custom error types for expense-dash
//!
//! This module defines the error hierarchy for the dashboard using thiserror.
//! Dataset-level failures (transport, empty payload, no projects) are kept
//! distinct so the UI can show a specific message for each of them.

use thiserror::Error;

/// The main error type for expense-dash operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    /// The data source could not be reached or answered with a failure
    #[error("Error loading data: {0}")]
    Transport(String),

    /// The data source answered successfully but without any records
    #[error("No expense records were returned by the data source")]
    EmptyDataset,

    /// Records were returned but none carries a usable project identifier
    #[error("No projects found in the data")]
    NoProjectsFound,

    /// A selection action referenced a project outside the current dataset
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl DashError {
    /// Create a transport failure from any displayable cause
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport(cause.to_string())
    }

    /// Check if this is a transport failure (retried on reconnect)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if this error halts the pipeline before aggregation
    pub fn is_dataset_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::EmptyDataset | Self::NoProjectsFound | Self::Io(_) | Self::Json(_)
        )
    }

    /// Short message shown in place of the table when loading failed
    pub fn table_message(&self) -> &'static str {
        match self {
            Self::EmptyDataset | Self::NoProjectsFound => "No data available",
            _ => "Failed to load data",
        }
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-dash operations
pub type DashResult<T> = Result<T, DashError>;
