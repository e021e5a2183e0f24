//! Statistics display
//!
//! Headline cards for the whole dataset and per-project lifetime totals.

use super::format::{
    format_currency, separator, truncate, HEADLINE_AVERAGE_DIGITS, TOTAL_DIGITS,
};
use crate::reports::{GlobalStatistics, ProjectSummary};

/// Label and value of each headline card, in display order
pub fn statistic_cards(stats: &GlobalStatistics, symbol: &str) -> [(&'static str, String); 4] {
    [
        ("Total Projects", stats.project_count.to_string()),
        ("Total Records", stats.record_count.to_string()),
        (
            "Total Amount",
            format_currency(stats.total_amount, symbol, TOTAL_DIGITS),
        ),
        (
            "Average Amount",
            format_currency(stats.average_amount, symbol, HEADLINE_AVERAGE_DIGITS),
        ),
    ]
}

/// Format the headline statistics as aligned lines
pub fn format_statistics(stats: &GlobalStatistics, symbol: &str) -> String {
    statistic_cards(stats, symbol)
        .iter()
        .map(|(label, value)| format!("{:<16}{:>16}\n", label, value))
        .collect()
}

/// Format per-project totals
pub fn format_project_summaries(summaries: &[ProjectSummary], symbol: &str) -> String {
    if summaries.is_empty() {
        return "No projects found.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.project.chars().count())
        .max()
        .unwrap_or(7)
        .clamp(7, 30);

    let mut output = format!(
        "{:<name_width$}  {:>8}  {:>16}  {:>12}  {}\n",
        "Project",
        "Records",
        "Total",
        "Average",
        "Latest",
        name_width = name_width,
    );
    output.push_str(&separator(name_width + 56));
    output.push('\n');

    for summary in summaries {
        output.push_str(&format!(
            "{:<name_width$}  {:>8}  {:>16}  {:>12}  {}\n",
            truncate(&summary.project, name_width),
            summary.record_count,
            format_currency(summary.total_amount, symbol, TOTAL_DIGITS),
            format_currency(summary.average_amount, symbol, 2),
            summary
                .latest_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
            name_width = name_width,
        ));
    }

    let records: usize = summaries.iter().map(|s| s.record_count).sum();
    let total: f64 = summaries.iter().map(|s| s.total_amount).sum();
    output.push_str(&separator(name_width + 56));
    output.push('\n');
    output.push_str(&format!(
        "{:<name_width$}  {:>8}  {:>16}\n",
        "TOTAL",
        records,
        format_currency(total, symbol, TOTAL_DIGITS),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cards() {
        let stats = GlobalStatistics {
            project_count: 2,
            record_count: 3,
            valid_amount_count: 3,
            total_amount: 350.0,
            average_amount: 350.0 / 3.0,
        };
        let cards = statistic_cards(&stats, "$");
        assert_eq!(cards[0], ("Total Projects", "2".to_string()));
        assert_eq!(cards[2].1, "$350");
        assert_eq!(cards[3].1, "$117");
        assert!(format_statistics(&stats, "$").contains("Total Records"));
    }

    #[test]
    fn test_project_summaries() {
        let summaries = vec![ProjectSummary {
            project: "Casa".into(),
            record_count: 2,
            total_amount: 150.0,
            average_amount: 75.0,
            latest_date: NaiveDate::from_ymd_opt(2024, 1, 20),
        }];
        let output = format_project_summaries(&summaries, "$");
        assert!(output.contains("Casa"));
        assert!(output.contains("2024-01-20"));
        assert!(output.contains("$150"));
        assert_eq!(format_project_summaries(&[], "$"), "No projects found.");
    }
}
