//! Dataset statistics
//!
//! Global statistics cover the raw dataset and ignore the selection. Unlike
//! bucket totals they exclude invalid amounts from both the sum and the count.
//! The selection summary covers only the monthly buckets of active projects.

use chrono::{Local, NaiveDate, TimeZone};
use serde::Serialize;

use crate::models::{parse_record_date, ExpenseRecord};
use crate::reports::monthly::MonthlyReport;
use crate::services::registry::ProjectSet;
use crate::services::selection::SelectionState;

/// Headline statistics of the full dataset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GlobalStatistics {
    /// Number of distinct projects
    pub project_count: usize,
    /// Number of records, valid or not
    pub record_count: usize,
    /// Records with a parsable amount
    pub valid_amount_count: usize,
    /// Sum of parsable amounts
    pub total_amount: f64,
    /// `total_amount / valid_amount_count`, or 0
    pub average_amount: f64,
}

impl GlobalStatistics {
    pub fn compute(records: &[ExpenseRecord], projects: &ProjectSet) -> Self {
        let valid: Vec<f64> = records.iter().filter_map(|r| r.amount.parse()).collect();
        let total_amount: f64 = valid.iter().sum();
        let average_amount = if valid.is_empty() {
            0.0
        } else {
            total_amount / valid.len() as f64
        };

        Self {
            project_count: projects.len(),
            record_count: records.len(),
            valid_amount_count: valid.len(),
            total_amount,
            average_amount,
        }
    }
}

/// Totals over the buckets of the active projects
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SelectionSummary {
    /// Number of active projects
    pub project_count: usize,
    /// Number of monthly buckets shown
    pub bucket_count: usize,
    /// Sum of bucket record counts
    pub record_count: usize,
    /// Sum of bucket totals
    pub total_amount: f64,
}

impl SelectionSummary {
    pub fn compute(report: &MonthlyReport, selection: &SelectionState) -> Self {
        let mut summary = Self {
            project_count: selection.active_projects().len(),
            ..Self::default()
        };

        for bucket in report.buckets().iter().filter(|b| selection.is_active(&b.project)) {
            summary.bucket_count += 1;
            summary.record_count += bucket.record_count;
            summary.total_amount += bucket.total_amount;
        }

        summary
    }

    /// True when there is nothing to summarise
    pub fn is_empty(&self) -> bool {
        self.bucket_count == 0
    }
}

/// Lifetime totals of one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub project: String,
    pub record_count: usize,
    /// Sum of amounts (invalid amounts add zero)
    pub total_amount: f64,
    pub average_amount: f64,
    /// Most recent valid record date
    pub latest_date: Option<NaiveDate>,
}

impl ProjectSummary {
    /// One summary per project, in project order, using the local time zone
    pub fn compute_all(records: &[ExpenseRecord], projects: &ProjectSet) -> Vec<Self> {
        Self::compute_all_in(records, projects, &Local)
    }

    pub fn compute_all_in<Tz: TimeZone>(
        records: &[ExpenseRecord],
        projects: &ProjectSet,
        tz: &Tz,
    ) -> Vec<Self> {
        let mut summaries: Vec<Self> = projects
            .iter()
            .map(|project| Self {
                project: project.to_string(),
                record_count: 0,
                total_amount: 0.0,
                average_amount: 0.0,
                latest_date: None,
            })
            .collect();

        for record in records {
            let Some(slot) = record.project_id().and_then(|p| projects.index_of(p)) else {
                continue;
            };
            let summary = &mut summaries[slot];
            summary.record_count += 1;
            summary.total_amount += record.amount.value_or_zero();

            let date = record.date.as_deref().and_then(|raw| parse_record_date(raw, tz));
            if date > summary.latest_date {
                summary.latest_date = date;
            }
        }

        for summary in &mut summaries {
            if summary.record_count > 0 {
                summary.average_amount = summary.total_amount / summary.record_count as f64;
            }
        }

        summaries
    }
}
