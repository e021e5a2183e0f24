//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Dataset state lives in the [`Dashboard`]; the App adds cursor positions,
//! dialogs, notifications and the reconnect timer.

use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::{DashError, DashResult};
use crate::reports::TableRow;
use crate::services::{Dashboard, Dataset, LoadOutcome, LoadTicket};

use super::widgets::{Notification, NotificationKind, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Filters,
    Table,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    /// Records behind the table row at this index
    BucketDetail(usize),
}

/// Main application state
pub struct App {
    pub settings: Settings,

    /// Where records are loaded from, for the status bar
    pub source_label: String,

    pub dashboard: Dashboard,

    pub should_quit: bool,

    pub focused_panel: FocusedPanel,

    pub active_dialog: ActiveDialog,

    /// Cursor in the project filter list
    pub selected_project_index: usize,

    /// Cursor in the monthly table
    pub selected_row_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    pub notifications: NotificationQueue,

    reload_requested: bool,

    /// When the last failed load finished
    failed_at: Option<Instant>,
}

impl App {
    /// Create a new App; the first load is requested immediately
    pub fn new(settings: Settings, source_label: impl Into<String>) -> Self {
        Self {
            settings,
            source_label: source_label.into(),
            dashboard: Dashboard::new(),
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            selected_project_index: 0,
            selected_row_index: 0,
            status_message: None,
            notifications: NotificationQueue::default(),
            reload_requested: true,
            failed_at: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dashboard.dataset()
    }

    /// Table rows for the current selection
    pub fn table_rows(&self) -> Vec<TableRow> {
        self.dataset().map(Dataset::table).unwrap_or_default()
    }

    pub fn project_count(&self) -> usize {
        self.dataset().map_or(0, |d| d.projects().len())
    }

    // Loading

    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Consume a pending reload request and start a load
    pub fn take_reload_request(&mut self) -> Option<LoadTicket> {
        if !std::mem::take(&mut self.reload_requested) {
            return None;
        }
        self.set_status("Loading...");
        Some(self.dashboard.begin_load())
    }

    /// Apply a finished load
    pub fn apply_load(&mut self, ticket: LoadTicket, result: DashResult<Dataset>) -> LoadOutcome {
        self.apply_load_at(ticket, result, Instant::now())
    }

    pub fn apply_load_at(
        &mut self,
        ticket: LoadTicket,
        result: DashResult<Dataset>,
        now: Instant,
    ) -> LoadOutcome {
        let was_disconnected = self.dashboard.failure().is_some_and(DashError::is_transport);
        let outcome = self.dashboard.complete_with(ticket, result);

        match outcome {
            LoadOutcome::Committed => {
                self.failed_at = None;
                self.selected_project_index = self
                    .selected_project_index
                    .min(self.project_count().saturating_sub(1));
                self.selected_row_index = 0;
                if matches!(self.active_dialog, ActiveDialog::BucketDetail(_)) {
                    self.active_dialog = ActiveDialog::None;
                }
                if was_disconnected {
                    self.notifications.push(Notification::new(
                        "Connection restored",
                        NotificationKind::Success,
                        now,
                    ));
                }
                let records = self.dataset().map_or(0, |d| d.records().len());
                self.set_status(format!("Loaded {} records", records));
            }
            LoadOutcome::Failed => {
                self.failed_at = Some(now);
                if let Some(err) = self.dashboard.failure() {
                    let message = err.to_string();
                    self.notifications
                        .push(Notification::new(message, NotificationKind::Error, now));
                }
                self.clear_status();
            }
            LoadOutcome::Stale => {}
        }

        outcome
    }

    /// Periodic housekeeping
    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    /// Expire notifications and retry a transport failure once the
    /// reconnect interval has passed
    pub fn on_tick_at(&mut self, now: Instant) {
        self.notifications.remove_expired(now);

        let retry_due = self.failed_at.is_some_and(|at| {
            now.duration_since(at) >= Duration::from_secs(self.settings.reconnect_interval_secs)
        });
        let disconnected = self.dashboard.failure().is_some_and(DashError::is_transport);

        if retry_due && disconnected && !self.dashboard.is_loading() {
            tracing::info!("retrying data source after transport failure");
            self.failed_at = None;
            self.request_reload();
        }
    }

    // Selection

    /// Run a selection change, refused while a failure is shown
    fn change_selection(&mut self, change: impl FnOnce(&mut Dataset) -> DashResult<()>) {
        let Some(dataset) = self.dashboard.dataset_mut() else {
            self.notifications
                .info("Reload with 'r' before changing the selection");
            return;
        };
        match change(dataset) {
            Ok(()) => {
                let rows = self.table_rows().len();
                self.selected_row_index = self.selected_row_index.min(rows.saturating_sub(1));
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Toggle the project under the cursor
    pub fn toggle_selected_project(&mut self) {
        let index = self.selected_project_index;
        self.change_selection(|dataset| {
            let Some(project) = dataset.projects().get(index).map(str::to_string) else {
                return Ok(());
            };
            dataset.selection_mut().toggle(&project).map(|_| ())
        });
    }

    pub fn select_all(&mut self) {
        self.change_selection(|dataset| {
            dataset.selection_mut().select_all();
            Ok(())
        });
    }

    pub fn deselect_all(&mut self) {
        self.change_selection(|dataset| {
            dataset.selection_mut().deselect_all();
            Ok(())
        });
    }

    // Navigation

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Filters => FocusedPanel::Table,
            FocusedPanel::Table => FocusedPanel::Filters,
        };
    }

    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Filters => {
                if self.selected_project_index + 1 < self.project_count() {
                    self.selected_project_index += 1;
                }
            }
            FocusedPanel::Table => {
                if self.selected_row_index + 1 < self.table_rows().len() {
                    self.selected_row_index += 1;
                }
            }
        }
    }

    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Filters => {
                self.selected_project_index = self.selected_project_index.saturating_sub(1)
            }
            FocusedPanel::Table => {
                self.selected_row_index = self.selected_row_index.saturating_sub(1)
            }
        }
    }

    // Dialogs

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Open the detail dialog for the row under the cursor
    pub fn open_bucket_detail(&mut self) {
        if self.dashboard.failure().is_some() {
            return;
        }
        if self.selected_row_index < self.table_rows().len() {
            self.open_dialog(ActiveDialog::BucketDetail(self.selected_row_index));
        }
    }
}
