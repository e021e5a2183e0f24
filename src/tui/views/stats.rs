//! Statistic cards across the top of the screen

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::statistic_cards;
use crate::tui::app::App;
use crate::tui::layout::stat_cards;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app
        .dataset()
        .map(|d| d.global_statistics())
        .unwrap_or_default();
    let loaded = app.dataset().is_some();

    let cards = statistic_cards(&stats, &app.settings.currency_symbol);
    for ((label, value), card_area) in cards.into_iter().zip(stat_cards(area)) {
        let value = if loaded { value } else { "-".to_string() };
        render_card(frame, card_area, label, value);
    }
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label.to_string(), Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        area,
    );
}
