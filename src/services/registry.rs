//! Project registry
//!
//! Derives the sorted set of distinct project identifiers of a dataset.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::error::{DashError, DashResult};
use crate::models::ExpenseRecord;

/// Sorted, duplicate-free list of non-empty project identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ProjectSet {
    projects: Vec<String>,
}

impl ProjectSet {
    /// Build the set from records; `NoProjectsFound` if none has a project
    pub fn from_records(records: &[ExpenseRecord]) -> DashResult<Self> {
        let distinct: BTreeSet<&str> = records.iter().filter_map(|r| r.project_id()).collect();

        if distinct.is_empty() {
            return Err(DashError::NoProjectsFound);
        }

        Ok(Self {
            projects: distinct.into_iter().map(str::to_string).collect(),
        })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.projects
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(String::as_str)
    }

    pub fn contains(&self, project: &str) -> bool {
        self.index_of(project).is_some()
    }

    /// Position of a project in sort order
    pub fn index_of(&self, project: &str) -> Option<usize> {
        self.projects
            .binary_search_by(|p| p.as_str().cmp(project))
            .ok()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.projects.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
