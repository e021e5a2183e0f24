//! Record ingestion
//!
//! Only dataset-level checks happen here. Malformed individual records are
//! left for the aggregation pass to skip.

use crate::error::{DashError, DashResult};
use crate::models::ExpenseRecord;

/// A non-empty collection of records fetched from the data source
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordSet {
    records: Vec<ExpenseRecord>,
}

impl RecordSet {
    /// Accept a fetched payload; absent or empty payloads are `EmptyDataset`
    pub fn ingest(payload: Option<Vec<ExpenseRecord>>) -> DashResult<Self> {
        match payload {
            Some(records) if !records.is_empty() => {
                tracing::debug!(records = records.len(), "ingested expense records");
                Ok(Self { records })
            }
            _ => Err(DashError::EmptyDataset),
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawAmount;

    #[test]
    fn test_absent_payload_is_empty_dataset() {
        assert_eq!(RecordSet::ingest(None), Err(DashError::EmptyDataset));
    }

    #[test]
    fn test_empty_payload_is_empty_dataset() {
        assert_eq!(RecordSet::ingest(Some(Vec::new())), Err(DashError::EmptyDataset));
    }

    #[test]
    fn test_malformed_records_are_kept() {
        let records = vec![
            ExpenseRecord::default(),
            ExpenseRecord::new("A", "not-a-date", RawAmount::text("x")),
        ];
        let set = RecordSet::ingest(Some(records)).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get(1).is_some());
    }
}
