//! Dataset-level trust report and verdict.
//!
//! Collects the per-column records in input-column order and reduces their
//! trust labels to one dataset verdict. The report converts to an Arrow
//! `RecordBatch`, which gives it the same CSV/JSON/Parquet export paths as
//! any other table.

// Verdict thresholds compare counts against row fractions
#![allow(clippy::cast_precision_loss)]

use std::sync::Arc;

use arrow::{
    array::{ArrayRef, BooleanArray, Float64Array, RecordBatch, StringArray, UInt64Array},
    datatypes::{DataType, Field, Schema},
};
use serde::Serialize;

use crate::{
    column::collect_columns,
    dataset::{ArrowDataset, Dataset},
    error::Result,
    trust::{classify_column, ColumnRecord, TrustLevel},
};

/// Fraction of high-risk columns beyond which a dataset is not reliable.
pub const HIGH_RISK_COLUMN_FRACTION: f64 = 0.4;

/// Overall judgment for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetVerdict {
    /// No high-risk columns.
    Safe,
    /// At least one high-risk column.
    NeedsCleaning,
    /// More than 40% of columns are high risk.
    NotReliable,
}

impl DatasetVerdict {
    /// Derives the verdict from column records.
    ///
    /// Only `High Risk` records count; the boundary is strict, so a dataset
    /// with exactly 40% high-risk columns still lands on needs-cleaning.
    pub fn from_records(records: &[ColumnRecord]) -> Self {
        let high_risk = records
            .iter()
            .filter(|r| r.trust == TrustLevel::HighRisk)
            .count();

        if high_risk as f64 > records.len() as f64 * HIGH_RISK_COLUMN_FRACTION {
            Self::NotReliable
        } else if high_risk > 0 {
            Self::NeedsCleaning
        } else {
            Self::Safe
        }
    }

    /// Human-readable verdict line.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Safe => "Dataset is safe for analysis",
            Self::NeedsCleaning => "Dataset needs cleaning",
            Self::NotReliable => "Dataset is NOT reliable",
        }
    }
}

impl std::fmt::Display for DatasetVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for DatasetVerdict {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Trust analysis report: one record per input column, in input order.
///
/// The verdict is always derived from the records at the moment it is asked
/// for; the report stores no separate verdict state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustReport {
    /// Column records in input-column order.
    pub records: Vec<ColumnRecord>,
}

impl TrustReport {
    /// Wraps already-classified records.
    pub fn from_records(records: Vec<ColumnRecord>) -> Self {
        Self { records }
    }

    /// Analyzes every column of a dataset.
    ///
    /// # Errors
    ///
    /// Analysis itself cannot fail; the `Result` mirrors the rest of the
    /// dataset-facing API.
    pub fn from_dataset(dataset: &ArrowDataset) -> Result<Self> {
        let total_rows = dataset.len();
        let records = collect_columns(dataset)
            .iter()
            .map(|column| classify_column(column, total_rows))
            .collect();

        Ok(Self::from_records(records))
    }

    /// Dataset verdict, recomputed from the records.
    pub fn verdict(&self) -> DatasetVerdict {
        DatasetVerdict::from_records(&self.records)
    }

    /// Number of column records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the report covers no columns.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of high-risk columns.
    pub fn high_risk_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.trust == TrustLevel::HighRisk)
            .count()
    }

    /// Records that need attention (high risk or needs cleaning).
    pub fn problem_columns(&self) -> Vec<&ColumnRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.trust, TrustLevel::HighRisk | TrustLevel::NeedsCleaning))
            .collect()
    }

    /// Looks up a record by column name.
    pub fn column(&self, name: &str) -> Option<&ColumnRecord> {
        self.records.iter().find(|r| r.column == name)
    }

    /// Renders the report as an Arrow batch with the nine report columns.
    ///
    /// # Errors
    ///
    /// Returns an error if batch construction fails.
    pub fn to_batch(&self) -> Result<RecordBatch> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("column", DataType::Utf8, false),
            Field::new("data_type", DataType::Utf8, false),
            Field::new("missing_count", DataType::UInt64, false),
            Field::new("missing_percent", DataType::Float64, false),
            Field::new("distorted", DataType::Boolean, false),
            Field::new("unstable", DataType::Boolean, false),
            Field::new("outlier_count", DataType::UInt64, false),
            Field::new("trust", DataType::Utf8, false),
            Field::new("remarks", DataType::Utf8, false),
        ]));

        let columns: Vec<ArrayRef> = vec![
            Arc::new(StringArray::from(
                self.records.iter().map(|r| r.column.clone()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                self.records
                    .iter()
                    .map(|r| r.data_type.as_str())
                    .collect::<Vec<_>>(),
            )),
            Arc::new(UInt64Array::from(
                self.records
                    .iter()
                    .map(|r| r.missing_count as u64)
                    .collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(
                self.records.iter().map(|r| r.missing_percent).collect::<Vec<_>>(),
            )),
            Arc::new(BooleanArray::from(
                self.records.iter().map(|r| r.distorted).collect::<Vec<_>>(),
            )),
            Arc::new(BooleanArray::from(
                self.records.iter().map(|r| r.unstable).collect::<Vec<_>>(),
            )),
            Arc::new(UInt64Array::from(
                self.records
                    .iter()
                    .map(|r| r.outlier_count as u64)
                    .collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                self.records.iter().map(|r| r.trust.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                self.records.iter().map(|r| r.remarks.clone()).collect::<Vec<_>>(),
            )),
        ];

        RecordBatch::try_new(schema, columns).map_err(crate::Error::Arrow)
    }

    /// Writes the report as CSV, reusing the dataset writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch cannot be built or the file cannot be
    /// written.
    pub fn to_csv(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        ArrowDataset::from_batch(self.to_batch()?)?.to_csv(path)
    }

    /// JSON value with the records and the verdict.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "columns": self.records,
            "verdict": self.verdict().message(),
        })
    }
}

/// Analyzes a dataset and returns its trust report.
///
/// Convenience wrapper around [`TrustReport::from_dataset`].
///
/// # Errors
///
/// See [`TrustReport::from_dataset`].
///
/// # Example
///
/// ```
/// use confiar::{analyze_dataset, ArrowDataset};
///
/// let csv = "s_no,age\n1,25\n2,31\n3,28\n4,27\n";
/// let dataset = ArrowDataset::from_csv_str(csv).unwrap();
/// let report = analyze_dataset(&dataset).unwrap();
///
/// assert_eq!(report.len(), 2);
/// println!("{}", report.verdict());
/// ```
pub fn analyze_dataset(dataset: &ArrowDataset) -> Result<TrustReport> {
    TrustReport::from_dataset(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust::ColumnType;

    fn record(name: &str, trust: TrustLevel) -> ColumnRecord {
        ColumnRecord {
            column: name.to_string(),
            data_type: ColumnType::Numeric,
            missing_count: 0,
            missing_percent: 0.0,
            distorted: false,
            unstable: false,
            outlier_count: 0,
            trust,
            remarks: "Column is reliable".to_string(),
        }
    }

    fn records_with_high_risk(total: usize, high_risk: usize) -> Vec<ColumnRecord> {
        (0..total)
            .map(|i| {
                let trust = if i < high_risk {
                    TrustLevel::HighRisk
                } else {
                    TrustLevel::Reliable
                };
                record(&format!("col_{i}"), trust)
            })
            .collect()
    }

    #[test]
    fn test_verdict_safe_without_high_risk() {
        let records = records_with_high_risk(5, 0);
        assert_eq!(DatasetVerdict::from_records(&records), DatasetVerdict::Safe);
    }

    #[test]
    fn test_verdict_needs_cleaning_with_any_high_risk() {
        let records = records_with_high_risk(5, 1);
        assert_eq!(
            DatasetVerdict::from_records(&records),
            DatasetVerdict::NeedsCleaning
        );
    }

    #[test]
    fn test_verdict_boundary_is_strict() {
        // Exactly 40% high risk stays at needs-cleaning
        let at_boundary = records_with_high_risk(10, 4);
        assert_eq!(
            DatasetVerdict::from_records(&at_boundary),
            DatasetVerdict::NeedsCleaning
        );

        let over_boundary = records_with_high_risk(10, 5);
        assert_eq!(
            DatasetVerdict::from_records(&over_boundary),
            DatasetVerdict::NotReliable
        );
    }

    #[test]
    fn test_ignored_columns_do_not_count_as_high_risk() {
        let records = vec![
            record("id", TrustLevel::Ignored),
            record("age", TrustLevel::Reliable),
        ];
        assert_eq!(DatasetVerdict::from_records(&records), DatasetVerdict::Safe);
    }

    #[test]
    fn test_empty_report_is_safe() {
        let report = TrustReport::from_records(Vec::new());
        assert!(report.is_empty());
        assert_eq!(report.verdict(), DatasetVerdict::Safe);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(DatasetVerdict::Safe.message(), "Dataset is safe for analysis");
        assert_eq!(DatasetVerdict::NeedsCleaning.message(), "Dataset needs cleaning");
        assert_eq!(
            DatasetVerdict::NotReliable.to_string(),
            "Dataset is NOT reliable"
        );
    }

    #[test]
    fn test_report_covers_every_column_in_order() {
        let csv = "s_no,age,city\n1,25,Lima\n2,31,Cusco\n3,28,Lima\n";
        let dataset = ArrowDataset::from_csv_str(csv)
            .ok()
            .unwrap_or_else(|| panic!("Should parse CSV"));

        let report = analyze_dataset(&dataset)
            .ok()
            .unwrap_or_else(|| panic!("Should analyze"));

        let names: Vec<&str> = report.records.iter().map(|r| r.column.as_str()).collect();
        assert_eq!(names, vec!["s_no", "age", "city"]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let csv = "s_no,age,note\n1,25,a\n2,31,\n3,28,c\n4,29,d\n";
        let dataset = ArrowDataset::from_csv_str(csv)
            .ok()
            .unwrap_or_else(|| panic!("Should parse CSV"));

        let first = analyze_dataset(&dataset)
            .ok()
            .unwrap_or_else(|| panic!("Should analyze"));
        let second = analyze_dataset(&dataset)
            .ok()
            .unwrap_or_else(|| panic!("Should analyze"));

        assert_eq!(first, second);
        assert_eq!(first.verdict(), second.verdict());
    }

    #[test]
    fn test_high_risk_count_and_problem_columns() {
        let records = vec![
            record("a", TrustLevel::Reliable),
            record("b", TrustLevel::NeedsCleaning),
            record("c", TrustLevel::HighRisk),
            record("d", TrustLevel::Ignored),
        ];
        let report = TrustReport::from_records(records);

        assert_eq!(report.high_risk_count(), 1);
        assert_eq!(report.problem_columns().len(), 2);
        assert!(report.column("b").is_some());
        assert!(report.column("zzz").is_none());
    }

    #[test]
    fn test_to_batch_has_report_schema() {
        let report = TrustReport::from_records(records_with_high_risk(3, 1));
        let batch = report
            .to_batch()
            .ok()
            .unwrap_or_else(|| panic!("Should build batch"));

        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 9);

        let fields: Vec<&str> = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(
            fields,
            vec![
                "column",
                "data_type",
                "missing_count",
                "missing_percent",
                "distorted",
                "unstable",
                "outlier_count",
                "trust",
                "remarks"
            ]
        );
    }

    #[test]
    fn test_report_csv_round_trip() {
        let dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = dir.path().join("trust_report.csv");

        let report = TrustReport::from_records(records_with_high_risk(4, 2));
        report
            .to_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write report"));

        let loaded = ArrowDataset::from_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read report back"));
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded.schema().fields().len(), 9);
    }

    #[test]
    fn test_json_value_shape() {
        let report = TrustReport::from_records(records_with_high_risk(2, 2));
        let json = report.to_json_value();

        assert_eq!(json["verdict"], "Dataset is NOT reliable");
        assert_eq!(
            json["columns"]
                .as_array()
                .unwrap_or_else(|| panic!("columns should be an array"))
                .len(),
            2
        );
        assert_eq!(json["columns"][0]["trust"], "High Risk");
    }
}
