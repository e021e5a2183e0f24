//! Records behind one monthly table row

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Row, Table},
    Frame,
};

use crate::display::format::{truncate, TOTAL_DIGITS};
use crate::display::format_currency;
use crate::models::ExpenseRecord;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the detail dialog for the table row at `row`
pub fn render(frame: &mut Frame, app: &App, row: usize) {
    let Some(dataset) = app.dataset() else {
        return;
    };
    let rows = dataset.table();
    let Some(selected) = rows.get(row) else {
        return;
    };

    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let symbol = app.settings.currency_symbol.as_str();
    let records = dataset.bucket_records(selected);
    let lines: Vec<Row> = records
        .iter()
        .map(|record| record_row(record, symbol))
        .collect();

    let title = format!(
        " {} · {} ({} records) ",
        selected.project, selected.display_label, selected.record_count
    );

    let table = Table::new(
        lines,
        [
            Constraint::Length(26),
            Constraint::Min(20),
            Constraint::Length(14),
        ],
    )
    .header(
        Row::new(vec!["Date", "Description", "Amount"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(table, area);
}

fn record_row(record: &ExpenseRecord, symbol: &str) -> Row<'static> {
    let amount = match record.amount.parse() {
        Some(value) => format_currency(value, symbol, TOTAL_DIGITS),
        None => "-".to_string(),
    };
    Row::new(vec![
        record.date.clone().unwrap_or_default(),
        truncate(record.description.as_deref().unwrap_or(""), 40),
        amount,
    ])
}
