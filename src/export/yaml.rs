//! YAML Export functionality

use std::io::Write;

use crate::error::{DashError, DashResult};
use crate::export::json::DashboardExport;

/// Write the projection as YAML with a short header
pub fn export_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> DashResult<()> {
    let header = format!(
        "# expense-dash export\n# Generated: {}\n# App Version: {}\n# Source: {}\n\n",
        export.exported_at, export.app_version, export.source
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| DashError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| DashError::Export(e.to_string()))
}
