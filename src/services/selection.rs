//! Project selection state
//!
//! Tracks which projects are active for display. The state is rebuilt with
//! every dataset, so selections never outlive the projects they refer to.

use crate::error::{DashError, DashResult};
use crate::services::registry::ProjectSet;

/// Active flag per project, kept in project sort order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    entries: Vec<(String, bool)>,
}

impl SelectionState {
    /// Every project starts active
    pub fn initialize(projects: &ProjectSet) -> Self {
        Self {
            entries: projects.iter().map(|p| (p.to_string(), true)).collect(),
        }
    }

    /// Set one project's flag
    pub fn set_active(&mut self, project: &str, active: bool) -> DashResult<()> {
        let entry = self.entry_mut(project)?;
        entry.1 = active;
        Ok(())
    }

    /// Flip one project's flag, returning the new value
    pub fn toggle(&mut self, project: &str) -> DashResult<bool> {
        let entry = self.entry_mut(project)?;
        entry.1 = !entry.1;
        Ok(entry.1)
    }

    pub fn select_all(&mut self) {
        self.entries.iter_mut().for_each(|(_, active)| *active = true);
    }

    pub fn deselect_all(&mut self) {
        self.entries.iter_mut().for_each(|(_, active)| *active = false);
    }

    /// Active projects in project sort order
    pub fn active_projects(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(project, _)| project.as_str())
            .collect()
    }

    pub fn is_active(&self, project: &str) -> bool {
        self.entries
            .iter()
            .any(|(p, active)| *active && p == project)
    }

    /// True when no project is active
    pub fn is_empty(&self) -> bool {
        !self.entries.iter().any(|(_, active)| *active)
    }

    /// All projects with their flags
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(p, active)| (p.as_str(), *active))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn entry_mut(&mut self, project: &str) -> DashResult<&mut (String, bool)> {
        self.entries
            .iter_mut()
            .find(|(p, _)| p == project)
            .ok_or_else(|| DashError::UnknownProject(project.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, RawAmount};

    fn projects(names: &[&str]) -> ProjectSet {
        let records: Vec<_> = names
            .iter()
            .map(|n| ExpenseRecord::new(*n, "2024-01-01", RawAmount::Number(1.0)))
            .collect();
        ProjectSet::from_records(&records).unwrap()
    }

    #[test]
    fn test_initialize_all_active() {
        let selection = SelectionState::initialize(&projects(&["B", "A", "C"]));
        assert_eq!(selection.active_projects(), vec!["A", "B", "C"]);
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_set_active_keeps_order() {
        let mut selection = SelectionState::initialize(&projects(&["A", "B", "C"]));
        selection.set_active("B", false).unwrap();
        assert_eq!(selection.active_projects(), vec!["A", "C"]);
        assert!(!selection.is_active("B"));

        selection.set_active("B", true).unwrap();
        assert_eq!(selection.active_projects(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_select_and_deselect_all() {
        let mut selection = SelectionState::initialize(&projects(&["A", "B"]));
        selection.deselect_all();
        assert!(selection.is_empty());
        assert!(selection.active_projects().is_empty());

        selection.select_all();
        assert_eq!(selection.active_projects().len(), 2);
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionState::initialize(&projects(&["A"]));
        assert!(!selection.toggle("A").unwrap());
        assert!(selection.toggle("A").unwrap());
    }

    #[test]
    fn test_unknown_project_rejected() {
        let mut selection = SelectionState::initialize(&projects(&["A"]));
        assert_eq!(
            selection.set_active("Z", false),
            Err(DashError::UnknownProject("Z".into()))
        );
        assert!(selection.toggle("Z").is_err());
        assert_eq!(selection.active_projects(), vec!["A"]);
    }
}
