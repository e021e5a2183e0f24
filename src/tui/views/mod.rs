//! TUI Views module
//!
//! Statistics header, project filters, chart, monthly table and status bar.

pub mod chart;
pub mod filters;
pub mod stats;
pub mod status_bar;
pub mod table;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    stats::render(frame, app, layout.stats);
    filters::render(frame, app, layout.filters);
    chart::render(frame, app, layout.chart);
    table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::BucketDetail(row) => dialogs::bucket_detail::render(frame, app, row),
    }

    if let Some(notification) = app.notifications.current() {
        let widget = NotificationWidget::new(notification);
        let area = widget.area(frame.area());
        frame.render_widget(widget, area);
    }
}

/// Parse a `#rrggbb` colour
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Color::White;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::White,
    }
}

/// Render a centred message inside a titled block
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_height = area.height.saturating_sub(2);
    let mut lines = vec![String::new(); (inner_height / 2).saturating_sub(1) as usize];
    lines.push(message.to_string());

    let paragraph = Paragraph::new(lines.join("\n"))
        .block(block)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::PALETTE;

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#1f77b4"), Color::Rgb(0x1f, 0x77, 0xb4));
        assert_eq!(hex_color("nope"), Color::White);
        assert!(PALETTE.iter().all(|c| hex_color(c) != Color::White));
    }
}
