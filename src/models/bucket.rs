//! Monthly aggregate per project

use serde::Serialize;
use std::fmt;

use super::month::YearMonth;

/// Key of a monthly bucket: one bucket per (project, month)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey {
    pub project: String,
    pub year_month: YearMonth,
}

impl BucketKey {
    pub fn new(project: impl Into<String>, year_month: YearMonth) -> Self {
        Self {
            project: project.into(),
            year_month,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.project, self.year_month)
    }
}

/// Aggregated expenses of one project in one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBucket {
    /// Project identifier
    pub project: String,

    /// Calendar month
    pub year_month: YearMonth,

    /// "January 2024"
    pub display_label: String,

    /// Number of records folded into this bucket
    pub record_count: usize,

    /// Sum of parsed amounts (invalid amounts add zero)
    pub total_amount: f64,

    /// `total_amount / record_count`
    pub average_amount: f64,

    /// Positions of the contributing records in the ingested dataset
    #[serde(skip)]
    pub record_indices: Vec<usize>,
}

impl MonthlyBucket {
    /// Create an empty bucket; the label is computed once here
    pub fn new(project: impl Into<String>, year_month: YearMonth) -> Self {
        Self {
            project: project.into(),
            year_month,
            display_label: year_month.display_label(),
            record_count: 0,
            total_amount: 0.0,
            average_amount: 0.0,
            record_indices: Vec::new(),
        }
    }

    pub fn key(&self) -> BucketKey {
        BucketKey::new(self.project.clone(), self.year_month)
    }

    /// Fold one record into the bucket
    pub fn add(&mut self, record_index: usize, amount: f64) {
        self.record_count += 1;
        self.total_amount += amount;
        self.record_indices.push(record_index);
    }

    /// Recompute the average from count and total
    pub fn finalize(&mut self) {
        self.average_amount = if self.record_count > 0 {
            self.total_amount / self.record_count as f64
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        let key = BucketKey::new("A", YearMonth::new(2024, 1).unwrap());
        assert_eq!(key.to_string(), "A|2024-01");

        let bucket = MonthlyBucket::new("A", YearMonth::new(2024, 1).unwrap());
        assert_eq!(bucket.key(), key);
    }

    #[test]
    fn test_add_and_finalize() {
        let mut bucket = MonthlyBucket::new("A", YearMonth::new(2024, 1).unwrap());
        assert_eq!(bucket.display_label, "January 2024");

        bucket.finalize();
        assert_eq!(bucket.average_amount, 0.0);

        bucket.add(0, 100.0);
        bucket.add(3, 50.0);
        bucket.finalize();

        assert_eq!(bucket.record_count, 2);
        assert_eq!(bucket.total_amount, 150.0);
        assert_eq!(bucket.average_amount, 75.0);
        assert_eq!(bucket.record_indices, vec![0, 3]);
    }
}
