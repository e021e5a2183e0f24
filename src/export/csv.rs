//! CSV Export functionality
//!
//! Writes the monthly table rows (spreadsheet-compatible).

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::reports::TableRow;

const HEADER: [&str; 6] = [
    "Project",
    "Month",
    "Label",
    "Records",
    "Total Amount",
    "Average Amount",
];

/// Export table rows to CSV
pub fn export_rows_csv<W: Write>(rows: &[TableRow], writer: W) -> DashResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    let to_err = |e: csv::Error| DashError::Export(e.to_string());

    csv.write_record(HEADER).map_err(to_err)?;
    for row in rows {
        csv.write_record([
            row.project.clone(),
            row.year_month.to_string(),
            row.display_label.clone(),
            row.record_count.to_string(),
            row.total_amount.to_string(),
            format!("{:.2}", row.average_amount),
        ])
        .map_err(to_err)?;
    }

    csv.flush().map_err(|e| DashError::Export(e.to_string()))
}
