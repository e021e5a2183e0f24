//! Monthly totals chart
//!
//! One line per active project. The x axis counts months, the y axis is
//! the monthly total.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::{hex_color, render_message};
use crate::display::format_number;
use crate::models::YearMonth;
use crate::reports::ChartView;
use crate::tui::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.settings.chart_title.as_str();

    if let Some(err) = app.dashboard.failure() {
        render_message(frame, area, title, &err.to_string(), Color::Red);
        return;
    }

    let Some(dataset) = app.dataset() else {
        render_message(frame, area, title, "Loading...", Color::Gray);
        return;
    };

    let view = dataset.chart();
    if let Some(message) = view.message() {
        render_message(frame, area, title, message, Color::Yellow);
        return;
    }

    render_series(frame, area, title, &view, &app.settings.currency_symbol);
}

fn render_series(frame: &mut Frame, area: Rect, title: &str, view: &ChartView, symbol: &str) {
    let Some((first, last)) = view.month_range() else {
        return;
    };

    let points: Vec<Vec<(f64, f64)>> = view
        .series()
        .iter()
        .map(|series| {
            series
                .points
                .iter()
                .map(|p| (p.year_month.ordinal() as f64, p.total_amount))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = view
        .series()
        .iter()
        .zip(&points)
        .map(|(series, data)| {
            Dataset::default()
                .name(series.project.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(hex_color(series.color)))
                .data(data)
        })
        .collect();

    let (x_min, x_max) = x_bounds(first, last);
    let y_max = y_upper_bound(view.max_total());

    let x_labels: Vec<Span> = month_labels(first, last)
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
        .iter()
        .map(|v| Span::raw(format!("{}{}", symbol, format_number(*v, 0))))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", title),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .title("Month")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Total")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// X bounds for the month range; a single month is padded on both sides
fn x_bounds(first: YearMonth, last: YearMonth) -> (f64, f64) {
    let (lo, hi) = (first.ordinal() as f64, last.ordinal() as f64);
    if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

fn y_upper_bound(max_total: f64) -> f64 {
    if max_total > 0.0 && max_total.is_finite() {
        max_total * 1.1
    } else {
        1.0
    }
}

/// First, middle and last month, labelled like `Jan 2024`
fn month_labels(first: YearMonth, last: YearMonth) -> Vec<String> {
    let mid = (first.ordinal() + last.ordinal()) / 2;
    let middle = YearMonth::new(mid.div_euclid(12) as i32, (mid.rem_euclid(12) + 1) as u32);

    let mut labels = vec![first.short_label()];
    if let Some(middle) = middle.filter(|m| *m != first && *m != last) {
        labels.push(middle.short_label());
    }
    if last != first {
        labels.push(last.short_label());
    }
    labels
}
