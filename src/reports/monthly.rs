//! Monthly aggregation
//!
//! Buckets records by (project, calendar month). A record whose date cannot be
//! resolved is skipped with a warning; the rest of the batch still aggregates.

use chrono::{Local, TimeZone};
use std::collections::{BTreeSet, HashMap};

use crate::models::{parse_record_date, BucketKey, ExpenseRecord, MonthlyBucket, YearMonth};

/// A record excluded from aggregation because of its date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordParseWarning {
    /// Position of the record in the dataset
    pub index: usize,
    /// The date value as received (None if missing)
    pub raw_date: Option<String>,
}

impl RecordParseWarning {
    pub fn message(&self) -> String {
        match &self.raw_date {
            Some(raw) => format!("Invalid date found in record {}: {:?}", self.index, raw),
            None => format!("Record {} has no date", self.index),
        }
    }
}

/// Monthly buckets of a dataset
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthlyReport {
    /// Buckets in first-appearance order
    buckets: Vec<MonthlyBucket>,
    /// Records skipped because of their date
    warnings: Vec<RecordParseWarning>,
}

impl MonthlyReport {
    /// Aggregate using the local time zone
    pub fn generate(records: &[ExpenseRecord]) -> Self {
        Self::generate_in(records, &Local)
    }

    /// Aggregate resolving dates in `tz`
    pub fn generate_in<Tz: TimeZone>(records: &[ExpenseRecord], tz: &Tz) -> Self {
        let mut index: HashMap<BucketKey, usize> = HashMap::new();
        let mut buckets: Vec<MonthlyBucket> = Vec::new();
        let mut warnings = Vec::new();

        for (position, record) in records.iter().enumerate() {
            let date = match record.date.as_deref().and_then(|raw| parse_record_date(raw, tz)) {
                Some(date) => date,
                None => {
                    let warning = RecordParseWarning {
                        index: position,
                        raw_date: record.date.clone(),
                    };
                    tracing::warn!("{}", warning.message());
                    warnings.push(warning);
                    continue;
                }
            };

            let Some(project) = record.project_id() else {
                tracing::debug!(record = position, "skipping record without project");
                continue;
            };

            let key = BucketKey::new(project, YearMonth::from_date(date));
            let slot = *index.entry(key).or_insert_with_key(|key| {
                buckets.push(MonthlyBucket::new(key.project.clone(), key.year_month));
                buckets.len() - 1
            });

            buckets[slot].add(position, record.amount.value_or_zero());
        }

        // Averages are derived once every record has been folded in
        for bucket in &mut buckets {
            bucket.finalize();
        }

        tracing::debug!(
            buckets = buckets.len(),
            skipped = warnings.len(),
            "aggregated monthly data"
        );

        Self { buckets, warnings }
    }

    pub fn buckets(&self) -> &[MonthlyBucket] {
        &self.buckets
    }

    pub fn warnings(&self) -> &[RecordParseWarning] {
        &self.warnings
    }

    /// Look up a single bucket
    pub fn get(&self, project: &str, year_month: YearMonth) -> Option<&MonthlyBucket> {
        self.buckets
            .iter()
            .find(|b| b.project == project && b.year_month == year_month)
    }

    /// Buckets of one project, in no particular order
    pub fn for_project<'a>(&'a self, project: &'a str) -> impl Iterator<Item = &'a MonthlyBucket> + 'a {
        self.buckets.iter().filter(move |b| b.project == project)
    }

    /// Distinct months present in the report
    pub fn months(&self) -> BTreeSet<YearMonth> {
        self.buckets.iter().map(|b| b.year_month).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
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

    fn ym(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            rec("A", "2024-01-05", "100"),
            rec("A", "2024-01-20", "50"),
            rec("B", "2024-02-01", "200"),
        ]
    }

    #[test]
    fn test_example_dataset() {
        let report = MonthlyReport::generate_in(&sample(), &Utc);
        assert_eq!(report.len(), 2);

        let a = report.get("A", ym("2024-01")).unwrap();
        assert_eq!(a.record_count, 2);
        assert_eq!(a.total_amount, 150.0);
        assert_eq!(a.average_amount, 75.0);
        assert_eq!(a.display_label, "January 2024");

        let b = report.get("B", ym("2024-02")).unwrap();
        assert_eq!(b.record_count, 1);
        assert_eq!(b.total_amount, 200.0);
        assert_eq!(b.average_amount, 200.0);
    }

    #[test]
    fn test_invalid_date_is_skipped_not_fatal() {
        let mut records = sample();
        records.insert(1, rec("A", "not-a-date", "999"));

        let report = MonthlyReport::generate_in(&records, &Utc);
        assert_eq!(report.len(), 2);
        assert_eq!(report.get("A", ym("2024-01")).unwrap().total_amount, 150.0);
        assert_eq!(
            report.warnings(),
            [RecordParseWarning {
                index: 1,
                raw_date: Some("not-a-date".into())
            }]
        );
    }

    #[test]
    fn test_missing_date_is_a_warning() {
        let mut record = rec("A", "", "1");
        record.date = None;
        let report = MonthlyReport::generate_in(&[record], &Utc);
        assert!(report.is_empty());
        assert_eq!(report.warnings().len(), 1);
        assert_eq!(report.warnings()[0].message(), "Record 0 has no date");
    }

    #[test]
    fn test_invalid_amount_counts_as_zero() {
        let records = vec![
            rec("A", "2024-03-01", "abc"),
            ExpenseRecord::new("A", "2024-03-02", RawAmount::Missing),
            rec("A", "2024-03-03", "30"),
        ];
        let report = MonthlyReport::generate_in(&records, &Utc);
        let bucket = report.get("A", ym("2024-03")).unwrap();
        assert_eq!(bucket.record_count, 3);
        assert_eq!(bucket.total_amount, 30.0);
        assert_eq!(bucket.average_amount, 10.0);
    }

    #[test]
    fn test_records_without_project_form_no_bucket() {
        let mut orphan = rec("", "2024-01-01", "10");
        orphan.project = None;
        let records = vec![orphan, rec("", "2024-01-01", "10"), rec("A", "2024-01-01", "5")];
        let report = MonthlyReport::generate_in(&records, &Utc);
        assert_eq!(report.len(), 1);
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn test_one_bucket_per_key_and_none_empty() {
        let records = vec![
            rec("A", "2024-01-31", "1"),
            rec("A", "2024-01-01T08:00:00Z", "1"),
            rec("B", "2024-01-15", "1"),
            rec("A", "2024-02-01", "1"),
        ];
        let report = MonthlyReport::generate_in(&records, &Utc);

        let keys: BTreeSet<_> = report.buckets().iter().map(|b| b.key()).collect();
        assert_eq!(keys.len(), report.len());
        assert_eq!(report.len(), 3);
        assert!(report.buckets().iter().all(|b| b.record_count > 0));
        assert_eq!(report.get("A", ym("2024-01")).unwrap().record_indices, vec![0, 1]);
        assert_eq!(report.months().len(), 2);
        assert_eq!(report.for_project("A").count(), 2);
    }

    #[test]
    fn test_regeneration_is_idempotent() {
        let records = sample();
        assert_eq!(
            MonthlyReport::generate_in(&records, &Utc),
            MonthlyReport::generate_in(&records, &Utc)
        );
    }
}
