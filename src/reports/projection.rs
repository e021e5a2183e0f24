//! View projection
//!
//! Turns the monthly buckets and the current selection into chart series and
//! table rows. Both are recomputed on every selection change.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::YearMonth;
use crate::reports::monthly::MonthlyReport;
use crate::services::selection::SelectionState;

/// Series colours, indexed by position in the active-project list
pub const PALETTE: [&str; 15] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5",
];

/// Colour for the series at `index`, cycling through the palette
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// One point of a chart series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// First day of the bucket's month (x)
    pub date: NaiveDate,
    pub year_month: YearMonth,
    /// Monthly total (y)
    pub total_amount: f64,
    pub record_count: usize,
    pub project: String,
}

/// Monthly totals of one active project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub project: String,
    /// Hex colour from [`PALETTE`]
    pub color: &'static str,
    /// Points ascending by month
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn max_total(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.total_amount)
            .fold(0.0, f64::max)
    }
}

/// What the chart area should show
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// No project is active
    NoSelection,
    /// Active projects exist but none has a bucket
    NoDataForSelection,
    /// At least one series to draw
    Series(Vec<ChartSeries>),
}

impl ChartView {
    /// Message to render instead of a chart, if any
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoSelection => Some("Please select at least one project to display the chart"),
            Self::NoDataForSelection => Some("No data found for selected projects"),
            Self::Series(_) => None,
        }
    }

    pub fn series(&self) -> &[ChartSeries] {
        match self {
            Self::Series(series) => series,
            _ => &[],
        }
    }

    /// Month range spanned by all series
    pub fn month_range(&self) -> Option<(YearMonth, YearMonth)> {
        let months = self.series().iter().flat_map(|s| s.points.iter().map(|p| p.year_month));
        let (min, max) = months.fold((None, None), |(lo, hi): (Option<YearMonth>, Option<YearMonth>), m| {
            (
                Some(lo.map_or(m, |lo| lo.min(m))),
                Some(hi.map_or(m, |hi| hi.max(m))),
            )
        });
        min.zip(max)
    }

    /// Largest monthly total across all series
    pub fn max_total(&self) -> f64 {
        self.series().iter().map(ChartSeries::max_total).fold(0.0, f64::max)
    }
}

/// Build the chart series for the active projects
pub fn project_chart(report: &MonthlyReport, selection: &SelectionState) -> ChartView {
    let active = selection.active_projects();
    if active.is_empty() {
        return ChartView::NoSelection;
    }

    let mut series = Vec::new();
    for (index, project) in active.iter().enumerate() {
        let mut buckets: Vec<_> = report.for_project(project).collect();
        if buckets.is_empty() {
            continue;
        }
        buckets.sort_by_key(|b| b.year_month);

        series.push(ChartSeries {
            project: project.to_string(),
            color: series_color(index),
            points: buckets
                .into_iter()
                .map(|b| SeriesPoint {
                    date: b.year_month.first_day(),
                    year_month: b.year_month,
                    total_amount: b.total_amount,
                    record_count: b.record_count,
                    project: b.project.clone(),
                })
                .collect(),
        });
    }

    if series.is_empty() {
        ChartView::NoDataForSelection
    } else {
        ChartView::Series(series)
    }
}

/// One line of the monthly table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub project: String,
    pub year_month: YearMonth,
    pub display_label: String,
    pub record_count: usize,
    pub total_amount: f64,
    pub average_amount: f64,
}

/// Buckets of the active projects, by project then month
pub fn project_table(report: &MonthlyReport, selection: &SelectionState) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = report
        .buckets()
        .iter()
        .filter(|b| selection.is_active(&b.project))
        .map(|b| TableRow {
            project: b.project.clone(),
            year_month: b.year_month,
            display_label: b.display_label.clone(),
            record_count: b.record_count,
            total_amount: b.total_amount,
            average_amount: b.average_amount,
        })
        .collect();

    rows.sort_by(|a, b| {
        a.project
            .cmp(&b.project)
            .then_with(|| a.year_month.cmp(&b.year_month))
    });
    rows
}
