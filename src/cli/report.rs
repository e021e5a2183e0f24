//! CLI commands for reports
//!
//! Prints the same statistics, series and table the dashboard shows.

use clap::Subcommand;

use super::{load_dataset, ProjectFilter};
use crate::config::Settings;
use crate::display::{
    format_monthly_report, format_project_summaries, format_series, format_statistics,
};
use crate::error::{DashError, DashResult};
use crate::source::ExpenseSource;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Show statistics, the summary line and the monthly table
    Summary {
        #[command(flatten)]
        filter: ProjectFilter,
    },

    /// Show monthly totals per active project
    #[command(alias = "chart")]
    Series {
        #[command(flatten)]
        filter: ProjectFilter,

        /// Print the series as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show lifetime totals per project
    Projects,
}

/// Handle report commands
pub fn handle_report_command(
    source: &dyn ExpenseSource,
    settings: &Settings,
    cmd: ReportCommands,
) -> DashResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary { filter } => {
            let dataset = load_dataset(source, &filter)?;
            println!("{}", format_statistics(&dataset.global_statistics(), symbol));
            println!(
                "{}",
                format_monthly_report(&dataset.table(), &dataset.selection_summary(), symbol)
            );
        }
        ReportCommands::Series { filter, json } => {
            let dataset = load_dataset(source, &filter)?;
            let view = dataset.chart();
            if json {
                let text = serde_json::to_string_pretty(view.series())
                    .map_err(|e| DashError::Export(e.to_string()))?;
                println!("{}", text);
            } else {
                println!("{}", settings.chart_title);
                println!();
                print!("{}", format_series(&view, symbol));
            }
        }
        ReportCommands::Projects => {
            let dataset = load_dataset(source, &ProjectFilter::default())?;
            print!(
                "{}",
                format_project_summaries(&dataset.project_summaries(), symbol)
            );
        }
    }

    Ok(())
}
