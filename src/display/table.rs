//! Monthly table display
//!
//! Formats the projected table rows and the selection summary line.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_currency, ROW_AVERAGE_DIGITS, TOTAL_DIGITS};
use crate::reports::{SelectionSummary, TableRow};

/// Shown instead of the table when no bucket belongs to an active project
pub const EMPTY_TABLE_MESSAGE: &str = "No data available for selected projects";

#[derive(Tabled)]
struct MonthlyLine {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Records")]
    records: usize,
    #[tabled(rename = "Total Amount")]
    total: String,
    #[tabled(rename = "Average Amount")]
    average: String,
}

/// One-sentence description of the visible buckets
pub fn format_summary_line(summary: &SelectionSummary, symbol: &str) -> String {
    format!(
        "Summary: Showing {} monthly aggregations from {} project(s), representing {} individual records with a total value of {}.",
        summary.bucket_count,
        summary.project_count,
        summary.record_count,
        format_currency(summary.total_amount, symbol, TOTAL_DIGITS)
    )
}

/// Render the monthly table
pub fn format_monthly_table(rows: &[TableRow], symbol: &str) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE_MESSAGE.to_string();
    }

    let lines = rows.iter().map(|row| MonthlyLine {
        project: row.project.clone(),
        month: row.display_label.clone(),
        records: row.record_count,
        total: format_currency(row.total_amount, symbol, TOTAL_DIGITS),
        average: format_currency(row.average_amount, symbol, ROW_AVERAGE_DIGITS),
    });

    Table::new(lines)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
        .to_string()
}

/// Summary line followed by the table, or the empty message alone
pub fn format_monthly_report(rows: &[TableRow], summary: &SelectionSummary, symbol: &str) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE_MESSAGE.to_string();
    }
    format!(
        "{}\n\n{}",
        format_summary_line(summary, symbol),
        format_monthly_table(rows, symbol)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::YearMonth;

    fn row(project: &str, ym: &str, count: usize, total: f64) -> TableRow {
        let year_month: YearMonth = ym.parse().unwrap();
        TableRow {
            project: project.into(),
            year_month,
            display_label: year_month.display_label(),
            record_count: count,
            total_amount: total,
            average_amount: total / count as f64,
        }
    }

    #[test]
    fn test_summary_line() {
        let summary = SelectionSummary {
            project_count: 1,
            bucket_count: 1,
            record_count: 1,
            total_amount: 200.0,
        };
        assert_eq!(
            format_summary_line(&summary, "$"),
            "Summary: Showing 1 monthly aggregations from 1 project(s), representing 1 individual records with a total value of $200."
        );
    }

    #[test]
    fn test_table_contents() {
        let rows = vec![row("A", "2024-01", 3, 200.0), row("B", "2024-02", 1, 1234.5)];
        let table = format_monthly_table(&rows, "$");

        assert!(table.contains("Average Amount"));
        assert!(table.contains("January 2024"));
        assert!(table.contains("$66.67"));
        assert!(table.contains("$1,234.5"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_monthly_table(&[], "$"), EMPTY_TABLE_MESSAGE);
        assert_eq!(
            format_monthly_report(&[], &SelectionSummary::default(), "$"),
            EMPTY_TABLE_MESSAGE
        );
    }
}
