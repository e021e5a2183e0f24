//! JSON Export functionality
//!
//! Exports the current projection with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::reports::{ChartSeries, GlobalStatistics, SelectionSummary, TableRow};
use crate::services::Dataset;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Snapshot of what the dashboard shows for the current selection
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Where the records came from
    pub source: String,

    /// Statistics over the whole dataset
    pub statistics: GlobalStatistics,

    /// Totals over the visible buckets
    pub selection_summary: SelectionSummary,

    pub active_projects: Vec<String>,

    /// Chart series, empty when nothing is selected
    pub series: Vec<ChartSeries>,

    /// Table rows by project then month
    pub rows: Vec<TableRow>,
}

impl DashboardExport {
    pub fn from_dataset(dataset: &Dataset, source: impl Into<String>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            source: source.into(),
            statistics: dataset.global_statistics(),
            selection_summary: dataset.selection_summary(),
            active_projects: dataset
                .selection()
                .active_projects()
                .into_iter()
                .map(String::from)
                .collect(),
            series: dataset.chart().series().to_vec(),
            rows: dataset.table(),
        }
    }
}

/// Write the projection as JSON
pub fn export_json<W: Write>(export: &DashboardExport, writer: &mut W, pretty: bool) -> DashResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)
    } else {
        serde_json::to_writer(&mut *writer, export)
    };
    result.map_err(|e| DashError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| DashError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, RawAmount};

    fn dataset() -> Dataset {
        Dataset::build_in(
            Some(vec![
                ExpenseRecord::new("A", "2024-01-05", RawAmount::text("100")),
                ExpenseRecord::new("A", "2024-01-20", RawAmount::text("50")),
                ExpenseRecord::new("B", "2024-02-01", RawAmount::text("200")),
            ]),
            &Utc,
        )
        .unwrap()
    }

    #[test]
    fn test_json_export() {
        let mut dataset = dataset();
        dataset.selection_mut().set_active("A", false).unwrap();
        let export = DashboardExport::from_dataset(&dataset, "test.json");

        let mut buffer = Vec::new();
        export_json(&export, &mut buffer, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["statistics"]["record_count"], 3);
        assert_eq!(value["selection_summary"]["total_amount"], 200.0);
        assert_eq!(value["active_projects"], serde_json::json!(["B"]));
        assert_eq!(value["rows"][0]["year_month"], "2024-02");
        assert_eq!(value["series"][0]["points"][0]["date"], "2024-02-01");
    }
}
