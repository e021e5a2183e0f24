//! Layout definitions for the TUI
//!
//! Statistics header on top, project filters on the left, chart above the
//! monthly table on the right, status bar at the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Four statistic cards
    pub stats: Rect,
    /// Project filter list
    pub filters: Rect,
    pub chart: Rect,
    /// Summary line and monthly table
    pub table: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Stats
                Constraint::Min(10),   // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(28), // Filters (fixed width)
                Constraint::Min(40),    // Chart and table
            ])
            .split(vertical[1]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(horizontal[1]);

        Self {
            stats: vertical[0],
            filters: horizontal[0],
            chart: main[0],
            table: main[1],
            status_bar: vertical[2],
        }
    }
}

/// Split the stats strip into four equal cards
pub fn stat_cards(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.stats.height, 4);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.filters.width, 28);
        assert_eq!(layout.chart.x, 28);
        assert!(layout.table.y > layout.chart.y);
    }

    #[test]
    fn test_centered_rect_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 60, outer);
        assert_eq!(inner.width, 60);
        assert!(inner.x >= 19 && inner.x <= 21);
    }
}
