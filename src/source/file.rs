//! JSON file source for offline use

use std::path::PathBuf;

use serde_json::Value;

use super::{decode_payload, ExpenseSource};
use crate::error::{DashError, DashResult};
use crate::models::ExpenseRecord;

/// Reads the record array from a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExpenseSource for FileSource {
    fn fetch(&self) -> DashResult<Option<Vec<ExpenseRecord>>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            DashError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let payload: Option<Vec<Value>> = serde_json::from_str(&contents)?;
        let records = decode_payload(payload);
        tracing::debug!(
            path = %self.path.display(),
            records = records.as_ref().map_or(0, Vec::len),
            "read expense file"
        );
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawAmount;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> FileSource {
        let path = dir.path().join("gastos.json");
        std::fs::write(&path, contents).unwrap();
        FileSource::new(path)
    }

    #[test]
    fn test_reads_wire_names() {
        let dir = TempDir::new().unwrap();
        let source = write(
            &dir,
            r#"[{"proyecto": "A", "fecha": "2024-01-05", "monto": "100", "descripcion": "x"},
                {"project": "B", "date": "2024-02-01", "amount": 200}]"#,
        );

        let records = source.fetch().unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].project_id(), Some("A"));
        assert_eq!(records[0].amount, RawAmount::text("100"));
        assert_eq!(records[0].description.as_deref(), Some("x"));
        assert_eq!(records[1].amount, RawAmount::Number(200.0));
    }

    #[test]
    fn test_odd_element_does_not_fail_the_file() {
        let dir = TempDir::new().unwrap();
        let source = write(
            &dir,
            r#"[{"proyecto": "A", "fecha": "2024-01-05", "monto": "100"}, "junk"]"#,
        );

        let records = source.fetch().unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], ExpenseRecord::default());

        let dataset = crate::services::Dataset::build_in(Some(records), &chrono::Utc).unwrap();
        assert_eq!(dataset.global_statistics().record_count, 2);
        assert_eq!(dataset.report().len(), 1);
        assert_eq!(dataset.report().warnings().len(), 1);
    }

    #[test]
    fn test_null_payload() {
        let dir = TempDir::new().unwrap();
        assert_eq!(write(&dir, "null").fetch().unwrap(), None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("absent.json"));
        assert!(matches!(source.fetch(), Err(DashError::Io(_))));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = TempDir::new().unwrap();
        let source = write(&dir, "[{");
        assert!(matches!(source.fetch(), Err(DashError::Json(_))));
    }
}
