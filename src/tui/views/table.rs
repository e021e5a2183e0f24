//! Monthly aggregation table
//!
//! Summary line above one row per (project, month) bucket of the active
//! projects.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::render_message;
use crate::display::format::{ROW_AVERAGE_DIGITS, TOTAL_DIGITS};
use crate::display::format_currency;
use crate::display::table::{format_summary_line, EMPTY_TABLE_MESSAGE};
use crate::tui::app::{App, FocusedPanel};

const TITLE: &str = "Monthly Aggregation";

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(err) = app.dashboard.failure() {
        render_message(frame, area, TITLE, err.table_message(), Color::Red);
        return;
    }

    let Some(dataset) = app.dataset() else {
        render_message(frame, area, TITLE, "Loading...", Color::Gray);
        return;
    };

    let rows = dataset.table();
    if rows.is_empty() {
        render_message(frame, area, TITLE, EMPTY_TABLE_MESSAGE, Color::Gray);
        return;
    }

    let focused = app.focused_panel == FocusedPanel::Table;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(format!(" {} ", TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let summary = format_summary_line(&dataset.selection_summary(), symbol);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(summary, Style::default().fg(Color::Gray))))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let header = Row::new(vec![
        "Project",
        "Month",
        "Records",
        "Total Amount",
        "Average Amount",
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let table_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                row.project.clone(),
                row.display_label.clone(),
                row.record_count.to_string(),
                format_currency(row.total_amount, symbol, TOTAL_DIGITS),
                format_currency(row.average_amount, symbol, ROW_AVERAGE_DIGITS),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(12),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(16),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = if focused {
        TableState::default().with_selected(Some(app.selected_row_index))
    } else {
        TableState::default()
    };

    frame.render_stateful_widget(table, chunks[1], &mut state);
}
