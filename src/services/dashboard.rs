//! Dashboard controller
//!
//! `Dataset` holds everything derived from one successful load. `Dashboard`
//! owns the current dataset, the last failure and a load generation counter:
//! a finished load is only committed if no newer load was started after it.

use chrono::TimeZone;

use crate::error::{DashError, DashResult};
use crate::models::{ExpenseRecord, MonthlyBucket};
use crate::reports::{
    project_chart, project_table, ChartView, GlobalStatistics, MonthlyReport, ProjectSummary,
    SelectionSummary, TableRow,
};
use crate::services::ingest::RecordSet;
use crate::services::registry::ProjectSet;
use crate::services::selection::SelectionState;

/// Derived state of one ingested payload
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: RecordSet,
    report: MonthlyReport,
    projects: ProjectSet,
    selection: SelectionState,
}

impl Dataset {
    /// Run the full pipeline over a fetched payload
    pub fn build(payload: Option<Vec<ExpenseRecord>>) -> DashResult<Self> {
        Self::build_with(payload, MonthlyReport::generate)
    }

    /// Same as [`Dataset::build`], resolving dates in `tz`
    pub fn build_in<Tz: TimeZone>(payload: Option<Vec<ExpenseRecord>>, tz: &Tz) -> DashResult<Self> {
        Self::build_with(payload, |records| MonthlyReport::generate_in(records, tz))
    }

    fn build_with(
        payload: Option<Vec<ExpenseRecord>>,
        aggregate: impl FnOnce(&[ExpenseRecord]) -> MonthlyReport,
    ) -> DashResult<Self> {
        let records = RecordSet::ingest(payload)?;
        let projects = ProjectSet::from_records(records.records())?;
        let report = aggregate(records.records());
        let selection = SelectionState::initialize(&projects);

        tracing::info!(
            records = records.len(),
            projects = projects.len(),
            buckets = report.len(),
            skipped = report.warnings().len(),
            "dataset built"
        );

        Ok(Self {
            records,
            report,
            projects,
            selection,
        })
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn report(&self) -> &MonthlyReport {
        &self.report
    }

    pub fn projects(&self) -> &ProjectSet {
        &self.projects
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn global_statistics(&self) -> GlobalStatistics {
        GlobalStatistics::compute(self.records.records(), &self.projects)
    }

    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary::compute(&self.report, &self.selection)
    }

    pub fn project_summaries(&self) -> Vec<ProjectSummary> {
        ProjectSummary::compute_all(self.records.records(), &self.projects)
    }

    pub fn chart(&self) -> ChartView {
        project_chart(&self.report, &self.selection)
    }

    pub fn table(&self) -> Vec<TableRow> {
        project_table(&self.report, &self.selection)
    }

    /// Records folded into a table row's bucket
    pub fn bucket_records(&self, row: &TableRow) -> Vec<&ExpenseRecord> {
        self.report
            .get(&row.project, row.year_month)
            .map(|bucket: &MonthlyBucket| {
                bucket
                    .record_indices
                    .iter()
                    .filter_map(|&i| self.records.get(i))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Restrict the selection to `include` (if non-empty), then drop `exclude`
    pub fn apply_filters(&mut self, include: &[String], exclude: &[String]) -> DashResult<()> {
        if !include.is_empty() {
            self.selection.deselect_all();
            for project in include {
                self.selection.set_active(project, true)?;
            }
        }
        for project in exclude {
            self.selection.set_active(project, false)?;
        }
        Ok(())
    }
}

/// Identifies one load request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A new dataset replaced the previous one
    Committed,
    /// The load failed; the previous dataset is kept
    Failed,
    /// A newer load was started; the result was discarded
    Stale,
}

/// Owner of all mutable dashboard state
#[derive(Debug, Default)]
pub struct Dashboard {
    dataset: Option<Dataset>,
    failure: Option<DashError>,
    generation: u64,
    pending: Option<LoadTicket>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load; any earlier outstanding ticket becomes stale
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.pending = Some(ticket);
        tracing::debug!(generation = ticket.0, "load started");
        ticket
    }

    /// Finish a load with the fetched payload or the fetch error
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        fetched: DashResult<Option<Vec<ExpenseRecord>>>,
    ) -> LoadOutcome {
        self.complete_with(ticket, fetched.and_then(Dataset::build))
    }

    /// Finish a load with an already built dataset (or the pipeline error)
    pub fn complete_with(&mut self, ticket: LoadTicket, built: DashResult<Dataset>) -> LoadOutcome {
        if self.pending != Some(ticket) {
            tracing::debug!(
                generation = ticket.0,
                current = self.generation,
                "discarding stale load"
            );
            return LoadOutcome::Stale;
        }
        self.pending = None;

        match built {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.failure = None;
                LoadOutcome::Committed
            }
            Err(err) => {
                if err.is_dataset_failure() {
                    tracing::warn!(generation = ticket.0, "load failed: {}", err);
                } else {
                    tracing::error!(generation = ticket.0, "load failed: {}", err);
                }
                self.failure = Some(err);
                LoadOutcome::Failed
            }
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Mutable dataset access; refused while a failure is displayed
    pub fn dataset_mut(&mut self) -> Option<&mut Dataset> {
        if self.failure.is_some() {
            return None;
        }
        self.dataset.as_mut()
    }

    pub fn failure(&self) -> Option<&DashError> {
        self.failure.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawAmount;
    use chrono::Utc;

    fn rec(project: &str, date: &str, amount: &str) -> ExpenseRecord {
        ExpenseRecord::new(project, date, RawAmount::text(amount))
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            rec("A", "2024-01-05", "100"),
            rec("A", "2024-01-20", "50"),
            rec("B", "2024-02-01", "200"),
        ]
    }

    #[test]
    fn test_build_pipeline() {
        let dataset = Dataset::build_in(Some(sample()), &Utc).unwrap();
        assert_eq!(dataset.projects().as_slice(), ["A", "B"]);
        assert_eq!(dataset.report().len(), 2);
        assert_eq!(dataset.selection().active_projects(), vec!["A", "B"]);
        assert_eq!(dataset.table().len(), 2);
    }

    #[test]
    fn test_build_failures() {
        assert_eq!(Dataset::build_in(None, &Utc), Err(DashError::EmptyDataset));

        let mut orphan = rec("", "2024-01-01", "1");
        orphan.project = None;
        assert_eq!(
            Dataset::build_in(Some(vec![orphan]), &Utc),
            Err(DashError::NoProjectsFound)
        );
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let first = Dataset::build_in(Some(sample()), &Utc).unwrap();
        let second = Dataset::build_in(Some(sample()), &Utc).unwrap();
        assert_eq!(first.report(), second.report());
        assert_eq!(first.projects(), second.projects());
    }

    #[test]
    fn test_apply_filters() {
        let mut dataset = Dataset::build_in(Some(sample()), &Utc).unwrap();
        dataset.apply_filters(&[], &["A".to_string()]).unwrap();
        assert_eq!(dataset.selection().active_projects(), vec!["B"]);

        dataset.apply_filters(&["A".to_string()], &[]).unwrap();
        assert_eq!(dataset.selection().active_projects(), vec!["A"]);

        assert_eq!(
            dataset.apply_filters(&["nope".to_string()], &[]),
            Err(DashError::UnknownProject("nope".into()))
        );
    }

    #[test]
    fn test_bucket_records() {
        let dataset = Dataset::build_in(Some(sample()), &Utc).unwrap();
        let rows = dataset.table();
        let records = dataset.bucket_records(&rows[0]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].date.as_deref(), Some("2024-01-20"));
    }

    #[test]
    fn test_commit_replaces_state_and_resets_selection() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_load();
        assert!(dashboard.is_loading());
        let built = Dataset::build_in(Some(sample()), &Utc);
        assert_eq!(dashboard.complete_with(ticket, built), LoadOutcome::Committed);
        assert!(!dashboard.is_loading());

        dashboard
            .dataset_mut()
            .unwrap()
            .selection_mut()
            .deselect_all();

        let ticket = dashboard.begin_load();
        let built = Dataset::build_in(Some(sample()), &Utc);
        dashboard.complete_with(ticket, built);
        assert_eq!(
            dashboard.dataset().unwrap().selection().active_projects(),
            vec!["A", "B"]
        );
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut dashboard = Dashboard::new();
        let old = dashboard.begin_load();
        let new = dashboard.begin_load();

        let fresh = Dataset::build_in(Some(vec![rec("NEW", "2024-05-01", "1")]), &Utc);
        assert_eq!(dashboard.complete_with(new, fresh), LoadOutcome::Committed);

        let old_data = Dataset::build_in(Some(sample()), &Utc);
        assert_eq!(dashboard.complete_with(old, old_data), LoadOutcome::Stale);
        assert_eq!(dashboard.dataset().unwrap().projects().as_slice(), ["NEW"]);
    }

    #[test]
    fn test_failure_keeps_previous_dataset() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_load();
        dashboard.complete_with(ticket, Dataset::build_in(Some(sample()), &Utc));

        let ticket = dashboard.begin_load();
        let outcome = dashboard.complete_load(ticket, Err(DashError::transport("offline")));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(dashboard.failure().unwrap().is_transport());
        assert!(dashboard.dataset().is_some());
        assert!(dashboard.dataset_mut().is_none());

        let ticket = dashboard.begin_load();
        let outcome = dashboard.complete_with(ticket, Dataset::build_in(Some(sample()), &Utc));
        assert_eq!(outcome, LoadOutcome::Committed);
        assert!(dashboard.failure().is_none());
        assert!(dashboard.dataset_mut().is_some());
    }

    #[test]
    fn test_empty_payload_fails_load() {
        let mut dashboard = Dashboard::new();
        let ticket = dashboard.begin_load();
        let outcome = dashboard.complete_load(ticket, Ok(Some(Vec::new())));
        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(dashboard.failure(), Some(&DashError::EmptyDataset));
    }
}
