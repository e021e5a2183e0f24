//! Status bar view
//!
//! Shows the data source, load state, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::display::format::truncate;
use crate::tui::app::App;

const HINTS: &str = " q:Quit  ?:Help  r:Reload ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let (state, state_color) = if app.dashboard.is_loading() {
        ("LOADING", Color::Yellow)
    } else if app.dashboard.failure().is_some() {
        ("OFFLINE", Color::Red)
    } else {
        ("LIVE", Color::Green)
    };

    spans.push(Span::styled(
        format!(" {} ", state),
        Style::default().fg(state_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        truncate(&app.source_label, 40),
        Style::default().fg(Color::Cyan),
    ));

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + HINTS.len());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
