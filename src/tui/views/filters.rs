//! Project filter list
//!
//! One checkbox per project. Active projects are drawn in their series colour.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::hex_color;
use crate::display::format::truncate;
use crate::reports::series_color;
use crate::tui::app::{App, FocusedPanel};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Filters;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Projects ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let Some(dataset) = app.dataset() else {
        frame.render_widget(block, area);
        return;
    };

    let blocked = app.dashboard.failure().is_some();
    let name_width = area.width.saturating_sub(8) as usize;
    let mut active_position = 0;

    let items: Vec<ListItem> = dataset
        .selection()
        .entries()
        .map(|(project, active)| {
            let style = if blocked {
                Style::default().fg(Color::DarkGray)
            } else if active {
                let color = hex_color(series_color(active_position));
                active_position += 1;
                Style::default().fg(color)
            } else {
                Style::default().fg(Color::Gray)
            };
            let checkbox = if active { "[x] " } else { "[ ] " };
            ListItem::new(Line::from(vec![
                Span::styled(checkbox, style),
                Span::styled(truncate(project, name_width), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected_project_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
