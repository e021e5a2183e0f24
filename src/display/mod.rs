//! Display formatting for terminal output
//!
//! Provides utilities for formatting dashboard data for the CLI, and the
//! number formatting shared with the TUI.

pub mod format;
pub mod series;
pub mod stats;
pub mod table;

pub use format::{format_currency, format_number};
pub use series::format_series;
pub use stats::{format_project_summaries, format_statistics, statistic_cards};
pub use table::{format_monthly_report, format_monthly_table, format_summary_line};
