//! Reports module
//!
//! Derived views over an ingested dataset:
//! - Monthly aggregation per project
//! - Global and selection-scoped statistics
//! - Chart series and table rows for the current selection

pub mod monthly;
pub mod projection;
pub mod statistics;

pub use monthly::{MonthlyReport, RecordParseWarning};
pub use projection::{project_chart, project_table, series_color, ChartSeries, ChartView, SeriesPoint, TableRow, PALETTE};
pub use statistics::{GlobalStatistics, ProjectSummary, SelectionSummary};
