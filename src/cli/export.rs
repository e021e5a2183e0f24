//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::{load_dataset, ProjectFilter};
use crate::error::{DashError, DashResult};
use crate::export::{export_json, export_rows_csv, export_yaml, DashboardExport};
use crate::source::ExpenseSource;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (table rows only)
    Csv,
    /// JSON format (statistics, series and rows)
    Json,
    /// YAML format (same content, human-readable)
    Yaml,
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filter: ProjectFilter,
}

/// Handle the export command
pub fn handle_export_command(source: &dyn ExpenseSource, args: ExportArgs) -> DashResult<()> {
    let dataset = load_dataset(source, &args.filter)?;

    let file = File::create(&args.output).map_err(|e| {
        DashError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            let rows = dataset.table();
            export_rows_csv(&rows, &mut writer)?;
            println!("{} rows exported to: {}", rows.len(), args.output.display());
        }
        ExportFormat::Json => {
            let export = DashboardExport::from_dataset(&dataset, source.describe());
            export_json(&export, &mut writer, args.pretty)?;
            println!("Dashboard exported to: {}", args.output.display());
        }
        ExportFormat::Yaml => {
            let export = DashboardExport::from_dataset(&dataset, source.describe());
            export_yaml(&export, &mut writer)?;
            println!("Dashboard exported to: {}", args.output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| DashError::Export(e.to_string()))
}
