//! Chart series as text, for the CLI

use super::format::{format_bar, format_currency, TOTAL_DIGITS};
use crate::reports::ChartView;

const BAR_WIDTH: usize = 30;

/// Render each series as one bar per month, scaled to the largest total
pub fn format_series(view: &ChartView, symbol: &str) -> String {
    if let Some(message) = view.message() {
        return message.to_string();
    }

    let max = view.max_total();
    let mut output = String::new();
    for series in view.series() {
        output.push_str(&format!("{} ({})\n", series.project, series.color));
        for point in &series.points {
            output.push_str(&format!(
                "  {:<9} {} {:>14}  ({} records)\n",
                point.year_month.short_label(),
                format_bar(point.total_amount, max, BAR_WIDTH),
                format_currency(point.total_amount, symbol, TOTAL_DIGITS),
                point.record_count,
            ));
        }
        output.push('\n');
    }
    output
}
