//! Column trust scoring.
//!
//! Classifies one column at a time: identifier detection first, then
//! numeric/categorical resolution (with symbol-stripping coercion for text),
//! then distribution-based scoring. Every column yields exactly one
//! [`ColumnRecord`]; heuristic failures degrade to a trust label instead of
//! aborting the run.

// Statistical thresholds compare counts against row fractions
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

use crate::{
    column::{ColumnSeries, ColumnValues},
    stats::DistributionStats,
};

/// Minimum fraction of distinct non-missing values for an identifier.
pub const IDENTIFIER_UNIQUENESS_RATIO: f64 = 0.9;

/// Minimum fraction of entries that must parse for a text column to count
/// as numeric.
pub const CONVERSION_SUCCESS_RATIO: f64 = 0.9;

/// Missing percentage at which a column becomes high risk.
pub const HIGH_MISSING_PERCENT: f64 = 30.0;

/// Missing percentage at which a column needs cleaning.
pub const MODERATE_MISSING_PERCENT: f64 = 5.0;

/// Fraction of total rows beyond which an outlier count is high risk.
pub const OUTLIER_ROW_FRACTION: f64 = 0.1;

/// Trust verdict for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustLevel {
    /// Excluded from scoring (identifier columns).
    Ignored,
    /// Safe to use as-is.
    Reliable,
    /// Usable after cleanup.
    NeedsCleaning,
    /// Too degraded to trust.
    HighRisk,
}

impl TrustLevel {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignored => "Ignored",
            Self::Reliable => "Reliable",
            Self::NeedsCleaning => "Needs Cleaning",
            Self::HighRisk => "High Risk",
        }
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for TrustLevel {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Role assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Serial or index column, excluded from statistics.
    Identifier,
    /// Natively numeric.
    Numeric,
    /// Text that parsed as numeric after symbol stripping.
    NumericConverted,
    /// Text that stays text.
    Categorical,
    /// None of the recognized roles. The classifier does not currently
    /// produce this; it completes the role vocabulary for consumers.
    Other,
}

impl ColumnType {
    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "Identifier",
            Self::Numeric => "Numeric",
            Self::NumericConverted => "Numeric (converted)",
            Self::Categorical => "Categorical",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Classification record for one column.
///
/// `distorted`, `unstable`, and `outlier_count` carry information only for
/// Numeric / Numeric (converted) columns; for every other role they hold
/// their defaults and do not influence `trust`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnRecord {
    /// Column name.
    pub column: String,
    /// Assigned role.
    pub data_type: ColumnType,
    /// Count of missing entries.
    pub missing_count: usize,
    /// Missing share of all rows, as a percentage rounded to 2 decimals.
    pub missing_percent: f64,
    /// Skew magnitude exceeded the limit.
    pub distorted: bool,
    /// Standard deviation exceeded the interquartile range.
    pub unstable: bool,
    /// Values outside the IQR fence.
    pub outlier_count: usize,
    /// Trust verdict.
    pub trust: TrustLevel,
    /// Human-readable justification.
    pub remarks: String,
}

/// Outcome of the per-column state machine, before record assembly.
enum ColumnAssessment {
    Identifier,
    Categorical,
    EmptyNumeric { column_type: ColumnType },
    Scored {
        column_type: ColumnType,
        stats: DistributionStats,
    },
}

/// Decides whether a column is a serial/index column.
///
/// Fails closed for non-numeric columns. Requires at least 90% distinct
/// non-missing values, then checks that the sorted values form an arithmetic
/// progression (every consecutive difference identical; any constant step
/// qualifies). Fewer than two non-missing values is never an identifier.
pub fn is_identifier(column: &ColumnSeries, total_rows: usize) -> bool {
    let ColumnValues::Numeric(values) = column.values() else {
        return false;
    };

    let mut sorted: Vec<f64> = values.iter().flatten().copied().collect();
    sorted.sort_by(f64::total_cmp);

    if sorted.len() < 2 {
        return false;
    }

    let distinct = 1 + sorted.windows(2).filter(|w| w[0] != w[1]).count();
    if (distinct as f64) < total_rows as f64 * IDENTIFIER_UNIQUENESS_RATIO {
        return false;
    }

    let step = sorted[1] - sorted[0];
    sorted.windows(2).all(|w| w[1] - w[0] == step)
}

/// Reinterprets a text column as numeric.
///
/// Strips the literal characters `$`, `,`, and `%` from each entry and
/// parses the remainder; entries that fail to parse (or parse to NaN) become
/// missing. The success ratio counts parsed entries over ALL entries, so
/// originally-missing values count as failures.
pub fn coerce_numeric(values: &[Option<String>]) -> (Vec<Option<f64>>, f64) {
    if values.is_empty() {
        return (Vec::new(), 0.0);
    }

    let coerced: Vec<Option<f64>> = values
        .iter()
        .map(|value| value.as_deref().and_then(parse_stripped))
        .collect();

    let parsed = coerced.iter().filter(|v| v.is_some()).count();
    let ratio = parsed as f64 / values.len() as f64;

    (coerced, ratio)
}

fn parse_stripped(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',' | '%')).collect();

    match cleaned.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Some(v),
        _ => None,
    }
}

/// Classifies one column into its record.
///
/// `total_rows` is the table's row count; every column of one table shares
/// it. Exactly one record comes back regardless of the column's content.
pub fn classify_column(column: &ColumnSeries, total_rows: usize) -> ColumnRecord {
    let missing_count = column.missing_count();
    let missing_percent = if total_rows > 0 {
        missing_count as f64 / total_rows as f64 * 100.0
    } else {
        0.0
    };

    let assessment = assess(column, total_rows);
    build_record(column.name(), missing_count, missing_percent, total_rows, assessment)
}

fn assess(column: &ColumnSeries, total_rows: usize) -> ColumnAssessment {
    if is_identifier(column, total_rows) {
        return ColumnAssessment::Identifier;
    }

    let (column_type, numeric_values): (ColumnType, Vec<f64>) = match column.values() {
        ColumnValues::Numeric(values) => (
            ColumnType::Numeric,
            values.iter().flatten().copied().collect(),
        ),
        ColumnValues::Text(values) => {
            let (coerced, success_ratio) = coerce_numeric(values);
            if success_ratio >= CONVERSION_SUCCESS_RATIO {
                (
                    ColumnType::NumericConverted,
                    coerced.iter().flatten().copied().collect(),
                )
            } else {
                return ColumnAssessment::Categorical;
            }
        }
    };

    match DistributionStats::from_values(&numeric_values) {
        Some(stats) => ColumnAssessment::Scored { column_type, stats },
        None => ColumnAssessment::EmptyNumeric { column_type },
    }
}

fn build_record(
    name: &str,
    missing_count: usize,
    missing_percent: f64,
    total_rows: usize,
    assessment: ColumnAssessment,
) -> ColumnRecord {
    let (data_type, distorted, unstable, outlier_count, trust, remarks) = match assessment {
        ColumnAssessment::Identifier => (
            ColumnType::Identifier,
            false,
            false,
            0,
            TrustLevel::Ignored,
            "Identifier column",
        ),
        ColumnAssessment::Categorical => (
            ColumnType::Categorical,
            false,
            false,
            0,
            missing_trust(missing_percent),
            "Categorical column",
        ),
        ColumnAssessment::EmptyNumeric { column_type } => (
            column_type,
            false,
            false,
            0,
            TrustLevel::HighRisk,
            "All values missing",
        ),
        ColumnAssessment::Scored { column_type, stats } => {
            let distorted = stats.is_distorted();
            let unstable = stats.is_unstable();
            let outlier_count = stats.outlier_count;

            // First match wins
            let (trust, remarks) = if missing_percent >= HIGH_MISSING_PERCENT {
                (TrustLevel::HighRisk, "Too many missing values")
            } else if outlier_count as f64 > total_rows as f64 * OUTLIER_ROW_FRACTION {
                (TrustLevel::HighRisk, "Too many outliers")
            } else if distorted || unstable || missing_percent >= MODERATE_MISSING_PERCENT {
                (TrustLevel::NeedsCleaning, "Distribution issues detected")
            } else {
                (TrustLevel::Reliable, "Column is reliable")
            };

            (column_type, distorted, unstable, outlier_count, trust, remarks)
        }
    };

    ColumnRecord {
        column: name.to_string(),
        data_type,
        missing_count,
        missing_percent: round_percent(missing_percent),
        distorted,
        unstable,
        outlier_count,
        trust,
        remarks: remarks.to_string(),
    }
}

/// Trust by missing share alone, for columns without usable statistics.
fn missing_trust(missing_percent: f64) -> TrustLevel {
    if missing_percent >= HIGH_MISSING_PERCENT {
        TrustLevel::HighRisk
    } else if missing_percent >= MODERATE_MISSING_PERCENT {
        TrustLevel::NeedsCleaning
    } else {
        TrustLevel::Reliable
    }
}

/// Rounds the emitted percentage to 2 decimals. Threshold comparisons always
/// use the unrounded value.
fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_series(name: &str, values: Vec<Option<f64>>) -> ColumnSeries {
        ColumnSeries::new(name, ColumnValues::Numeric(values))
    }

    fn text_series(name: &str, values: Vec<Option<&str>>) -> ColumnSeries {
        ColumnSeries::new(
            name,
            ColumnValues::Text(values.into_iter().map(|v| v.map(String::from)).collect()),
        )
    }

    fn present(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    // --- identifier detection ---

    #[test]
    fn test_consecutive_serial_is_identifier() {
        let column = numeric_series("s_no", present(&[1.0, 2.0, 3.0, 4.0, 5.0]));
        assert!(is_identifier(&column, 5));

        let record = classify_column(&column, 5);
        assert_eq!(record.data_type, ColumnType::Identifier);
        assert_eq!(record.trust, TrustLevel::Ignored);
        assert_eq!(record.remarks, "Identifier column");
        assert!(!record.distorted);
        assert!(!record.unstable);
        assert_eq!(record.outlier_count, 0);
    }

    #[test]
    fn test_constant_step_progression_is_identifier() {
        let column = numeric_series("code", present(&[10.0, 20.0, 30.0, 40.0]));
        assert!(is_identifier(&column, 4));
    }

    #[test]
    fn test_unordered_serial_is_identifier() {
        // Detection sorts before differencing
        let column = numeric_series("id", present(&[3.0, 1.0, 4.0, 2.0]));
        assert!(is_identifier(&column, 4));
    }

    #[test]
    fn test_gap_violation_is_not_identifier() {
        let column = numeric_series("id", present(&[1.0, 2.0, 4.0, 5.0]));
        assert!(!is_identifier(&column, 4));
    }

    #[test]
    fn test_low_uniqueness_is_not_identifier() {
        let column = numeric_series("id", present(&[1.0, 1.0, 1.0, 2.0]));
        assert!(!is_identifier(&column, 4));
    }

    #[test]
    fn test_text_column_is_never_identifier() {
        let column = text_series("id", vec![Some("1"), Some("2"), Some("3")]);
        assert!(!is_identifier(&column, 3));
    }

    #[test]
    fn test_single_value_is_not_identifier() {
        // One non-missing value leaves no differences to inspect
        let column = numeric_series("id", present(&[3.0]));
        assert!(!is_identifier(&column, 1));
    }

    #[test]
    fn test_small_serial_is_still_identifier() {
        let values: Vec<Option<f64>> = (1..=10).map(|i| Some(f64::from(i))).collect();
        let column = numeric_series("s_no", values);
        let record = classify_column(&column, 10);
        assert_eq!(record.trust, TrustLevel::Ignored);
    }

    // --- numeric coercion ---

    #[test]
    fn test_coerce_strips_currency_symbols() {
        let values = vec![
            Some("$1,200".to_string()),
            Some("45%".to_string()),
            Some(" 3.5 ".to_string()),
        ];
        let (coerced, ratio) = coerce_numeric(&values);
        assert_eq!(coerced, vec![Some(1200.0), Some(45.0), Some(3.5)]);
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_coerce_failures_become_missing() {
        let values = vec![
            Some("$10".to_string()),
            Some("abc".to_string()),
            None,
            Some("20".to_string()),
        ];
        let (coerced, ratio) = coerce_numeric(&values);
        assert_eq!(coerced, vec![Some(10.0), None, None, Some(20.0)]);
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_coerce_counts_original_missing_as_failure() {
        let values = vec![Some("1".to_string()), None, None, None];
        let (_, ratio) = coerce_numeric(&values);
        assert!((ratio - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_coerce_rejects_nan_literal() {
        let values = vec![Some("NaN".to_string()), Some("nan".to_string())];
        let (coerced, ratio) = coerce_numeric(&values);
        assert_eq!(coerced, vec![None, None]);
        assert!(ratio.abs() < 1e-12);
    }

    #[test]
    fn test_coerce_empty_input() {
        let (coerced, ratio) = coerce_numeric(&[]);
        assert!(coerced.is_empty());
        assert!(ratio.abs() < 1e-12);
    }

    // --- type resolution ---

    #[test]
    fn test_text_at_threshold_converts() {
        // 9 of 10 parse: exactly 0.9
        let mut values: Vec<Option<&str>> = (1..=9).map(|_| Some("5")).collect();
        values.push(Some("n/a"));
        let record = classify_column(&text_series("price", values), 10);
        assert_eq!(record.data_type, ColumnType::NumericConverted);
    }

    #[test]
    fn test_text_below_threshold_is_categorical() {
        // 8 of 10 parse: 0.8
        let mut values: Vec<Option<&str>> = (1..=8).map(|_| Some("5")).collect();
        values.push(Some("n/a"));
        values.push(Some("n/a"));
        let record = classify_column(&text_series("price", values), 10);
        assert_eq!(record.data_type, ColumnType::Categorical);
        assert_eq!(record.remarks, "Categorical column");
    }

    #[test]
    fn test_converted_column_is_scored() {
        let values = vec![
            Some("$100"),
            Some("$102"),
            Some("$101"),
            Some("$103"),
            Some("$100"),
            Some("$102"),
        ];
        let record = classify_column(&text_series("price", values), 6);
        assert_eq!(record.data_type, ColumnType::NumericConverted);
        assert_eq!(record.trust, TrustLevel::Reliable);
        assert_eq!(record.remarks, "Column is reliable");
    }

    // --- categorical trust tiers ---

    #[test]
    fn test_categorical_reliable_with_low_missing() {
        let values = vec![Some("red"), Some("blue"), Some("green"), Some("red")];
        let record = classify_column(&text_series("color", values), 4);
        assert_eq!(record.data_type, ColumnType::Categorical);
        assert_eq!(record.trust, TrustLevel::Reliable);
    }

    #[test]
    fn test_categorical_needs_cleaning_at_moderate_missing() {
        // 1 of 10 missing: 10%
        let mut values: Vec<Option<&str>> = (0..9).map(|_| Some("x")).collect();
        values.push(None);
        let record = classify_column(&text_series("color", values), 10);
        assert_eq!(record.trust, TrustLevel::NeedsCleaning);
        assert_eq!(record.remarks, "Categorical column");
    }

    #[test]
    fn test_categorical_high_risk_at_heavy_missing() {
        // 4 of 10 missing: 40%
        let mut values: Vec<Option<&str>> = (0..6).map(|_| Some("x")).collect();
        values.extend([None, None, None, None]);
        let record = classify_column(&text_series("color", values), 10);
        assert_eq!(record.trust, TrustLevel::HighRisk);
        assert_eq!(record.missing_percent, 40.0);
    }

    #[test]
    fn test_all_missing_text_is_high_risk_categorical() {
        let record = classify_column(&text_series("notes", vec![None, None, None]), 3);
        assert_eq!(record.data_type, ColumnType::Categorical);
        assert_eq!(record.trust, TrustLevel::HighRisk);
        assert_eq!(record.remarks, "Categorical column");
        assert_eq!(record.missing_percent, 100.0);
    }

    // --- empty numeric ---

    #[test]
    fn test_all_missing_numeric_column() {
        let record = classify_column(&numeric_series("score", vec![None, None, None]), 3);
        assert_eq!(record.data_type, ColumnType::Numeric);
        assert_eq!(record.trust, TrustLevel::HighRisk);
        assert_eq!(record.remarks, "All values missing");
        assert_eq!(record.missing_count, 3);
        assert_eq!(record.missing_percent, 100.0);
    }

    // --- statistical scoring ---

    fn ages() -> Vec<Option<f64>> {
        present(&[25.0, 30.0, 28.0, 27.0, 26.0, 29.0, 31.0, 24.0, 28.0, 27.0])
    }

    #[test]
    fn test_benign_numeric_column_is_reliable() {
        let record = classify_column(&numeric_series("age", ages()), 10);
        assert_eq!(record.data_type, ColumnType::Numeric);
        assert_eq!(record.trust, TrustLevel::Reliable);
        assert_eq!(record.remarks, "Column is reliable");
        assert!(!record.distorted);
        assert!(!record.unstable);
        assert_eq!(record.outlier_count, 0);
    }

    #[test]
    fn test_heavy_missing_wins_over_distribution() {
        // 4 of 10 missing with a benign distribution underneath
        let values = vec![
            Some(25.0),
            Some(30.0),
            Some(28.0),
            Some(27.0),
            Some(26.0),
            Some(29.0),
            None,
            None,
            None,
            None,
        ];
        let record = classify_column(&numeric_series("salary", values), 10);
        assert_eq!(record.trust, TrustLevel::HighRisk);
        assert_eq!(record.remarks, "Too many missing values");
        assert_eq!(record.missing_percent, 40.0);
    }

    #[test]
    fn test_outlier_share_above_tenth_is_high_risk() {
        // 17 tight values plus 3 extremes in 20 rows: 3 > 2
        let mut values: Vec<Option<f64>> = (10..=26).map(|i| Some(f64::from(i))).collect();
        values.extend([Some(1000.0), Some(1000.0), Some(1000.0)]);
        let record = classify_column(&numeric_series("amount", values), 20);
        assert_eq!(record.trust, TrustLevel::HighRisk);
        assert_eq!(record.remarks, "Too many outliers");
        assert_eq!(record.outlier_count, 3);
    }

    #[test]
    fn test_skewed_column_needs_cleaning() {
        // Right-skewed but with every value inside the IQR fence, so the
        // distortion flag decides the label
        let values = present(&[1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 3.0, 5.0, 8.0, 9.0]);
        let record = classify_column(&numeric_series("spend", values), 10);
        assert_eq!(record.trust, TrustLevel::NeedsCleaning);
        assert_eq!(record.remarks, "Distribution issues detected");
        assert!(record.distorted);
        assert_eq!(record.outlier_count, 0);
    }

    #[test]
    fn test_moderate_missing_needs_cleaning() {
        // 2 of 20 missing: 10%, distribution benign. The steps vary, so the
        // column cannot pass for an identifier despite being fully distinct.
        let heights = [
            150.0, 152.0, 153.0, 155.0, 158.0, 160.0, 161.0, 163.0, 165.0, 168.0, 170.0, 171.0,
            173.0, 175.0, 178.0, 180.0, 181.0, 183.0,
        ];
        let mut values = present(&heights);
        values.extend([None, None]);
        let record = classify_column(&numeric_series("height", values), 20);
        assert_eq!(record.trust, TrustLevel::NeedsCleaning);
        assert_eq!(record.remarks, "Distribution issues detected");
        assert!(!record.distorted);
        assert!(!record.unstable);
    }

    #[test]
    fn test_missing_percent_rounds_to_two_decimals() {
        let record = classify_column(&numeric_series("v", vec![Some(1.0), Some(2.0), None]), 3);
        assert_eq!(record.missing_percent, 33.33);
    }

    #[test]
    fn test_trust_labels_render() {
        assert_eq!(TrustLevel::NeedsCleaning.to_string(), "Needs Cleaning");
        assert_eq!(TrustLevel::HighRisk.as_str(), "High Risk");
        assert_eq!(ColumnType::NumericConverted.to_string(), "Numeric (converted)");
        assert_eq!(ColumnType::Other.as_str(), "Other");
    }

    #[test]
    fn test_record_serializes_with_labels() {
        let record = classify_column(&numeric_series("age", ages()), 10);
        let json = serde_json::to_value(&record)
            .ok()
            .unwrap_or_else(|| panic!("Should serialize record"));
        assert_eq!(json["data_type"], "Numeric");
        assert_eq!(json["trust"], "Reliable");
        assert_eq!(json["remarks"], "Column is reliable");
    }
}
