//! Column materialization.
//!
//! Converts one Arrow column into the flat value sequence the trust engine
//! scores: natively numeric columns become `Vec<Option<f64>>`, everything
//! else becomes `Vec<Option<String>>`. Nulls are missing values; float NaN
//! is normalized to missing as well.

// Widening i64/u64 into f64 is deliberate for statistics
#![allow(clippy::cast_precision_loss)]

use arrow::{
    array::{
        Array, BooleanArray, Float32Array, Float64Array, Int16Array, Int32Array, Int64Array,
        Int8Array, LargeStringArray, StringArray, UInt16Array, UInt32Array, UInt64Array,
        UInt8Array,
    },
    datatypes::DataType,
    util::display::array_value_to_string,
};

use crate::dataset::{ArrowDataset, Dataset};

/// The values of one materialized column.
#[derive(Debug, Clone)]
pub enum ColumnValues {
    /// Column whose native type is numeric (integers, floats, booleans).
    Numeric(Vec<Option<f64>>),
    /// Column materialized as text.
    Text(Vec<Option<String>>),
}

/// One named column pulled out of a dataset, in row order.
#[derive(Debug, Clone)]
pub struct ColumnSeries {
    name: String,
    values: ColumnValues,
}

impl ColumnSeries {
    /// Builds a series directly from values. Mostly useful in tests.
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column values.
    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    /// Number of entries, missing included.
    pub fn len(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    /// True when the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the column's native type is numeric.
    pub fn is_native_numeric(&self) -> bool {
        matches!(self.values, ColumnValues::Numeric(_))
    }

    /// Count of missing entries.
    pub fn missing_count(&self) -> usize {
        match &self.values {
            ColumnValues::Numeric(v) => v.iter().filter(|x| x.is_none()).count(),
            ColumnValues::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }
}

/// Whether an Arrow type materializes as native numeric.
///
/// Booleans count as numeric (true maps to 1.0), matching how dataframe
/// libraries classify them.
fn is_numeric_type(data_type: &DataType) -> bool {
    matches!(
        data_type,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
            | DataType::Boolean
    )
}

/// Materializes every column of the dataset, in schema order.
///
/// All returned series share the dataset's row count.
pub fn collect_columns(dataset: &ArrowDataset) -> Vec<ColumnSeries> {
    let schema = dataset.schema();

    schema
        .fields()
        .iter()
        .enumerate()
        .map(|(col_idx, field)| {
            let values = if is_numeric_type(field.data_type()) {
                ColumnValues::Numeric(numeric_values(dataset, col_idx))
            } else {
                ColumnValues::Text(text_values(dataset, col_idx))
            };
            ColumnSeries::new(field.name().clone(), values)
        })
        .collect()
}

fn numeric_values(dataset: &ArrowDataset, col_idx: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(dataset.len());

    for batch in dataset.iter() {
        let array = batch.column(col_idx);

        for i in 0..array.len() {
            if array.is_null(i) {
                out.push(None);
            } else if let Some(arr) = array.as_any().downcast_ref::<Float64Array>() {
                out.push(finite_or_missing(arr.value(i)));
            } else if let Some(arr) = array.as_any().downcast_ref::<Float32Array>() {
                out.push(finite_or_missing(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<Int64Array>() {
                out.push(Some(arr.value(i) as f64));
            } else if let Some(arr) = array.as_any().downcast_ref::<Int32Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<Int16Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<Int8Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<UInt64Array>() {
                out.push(Some(arr.value(i) as f64));
            } else if let Some(arr) = array.as_any().downcast_ref::<UInt32Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<UInt16Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<UInt8Array>() {
                out.push(Some(f64::from(arr.value(i))));
            } else if let Some(arr) = array.as_any().downcast_ref::<BooleanArray>() {
                out.push(Some(if arr.value(i) { 1.0 } else { 0.0 }));
            } else {
                out.push(None);
            }
        }
    }

    out
}

/// NaN carries no usable magnitude; treat it as a missing entry.
fn finite_or_missing(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value)
    }
}

fn text_values(dataset: &ArrowDataset, col_idx: usize) -> Vec<Option<String>> {
    let mut out = Vec::with_capacity(dataset.len());

    for batch in dataset.iter() {
        let array = batch.column(col_idx);

        for i in 0..array.len() {
            if array.is_null(i) {
                out.push(None);
            } else if let Some(arr) = array.as_any().downcast_ref::<StringArray>() {
                out.push(Some(arr.value(i).to_string()));
            } else if let Some(arr) = array.as_any().downcast_ref::<LargeStringArray>() {
                out.push(Some(arr.value(i).to_string()));
            } else {
                // Dates, timestamps, decimals and other exotic types go
                // through Arrow's own rendering.
                out.push(Some(
                    array_value_to_string(array, i).unwrap_or_else(|_| String::from("?")),
                ));
            }
        }
    }

    out
}
