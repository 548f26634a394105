//! Dataset types for confiar.
//!
//! Provides the [`Dataset`] trait and [`ArrowDataset`] implementation that
//! the trust engine analyzes. Tables are held as Arrow `RecordBatch`es and
//! can be loaded from and saved to CSV, JSON Lines, and Parquet.

use std::{path::Path, sync::Arc};

use arrow::{array::RecordBatch, datatypes::SchemaRef};
use parquet::{
    arrow::{arrow_reader::ParquetRecordBatchReaderBuilder, ArrowWriter},
    file::properties::WriterProperties,
};

use crate::error::{Error, Result};

/// A table that can be handed to the trust engine.
///
/// Datasets provide access to tabular data stored as Arrow RecordBatches.
/// All implementations must be thread-safe (Send + Sync).
pub trait Dataset: Send + Sync {
    /// Returns the total number of rows in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a single row as a RecordBatch with one row.
    ///
    /// Returns `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<RecordBatch>;

    /// Returns the schema of the dataset.
    fn schema(&self) -> SchemaRef;

    /// Returns an iterator over all RecordBatches in the dataset.
    fn iter(&self) -> Box<dyn Iterator<Item = RecordBatch> + Send + '_>;

    /// Returns the number of batches in the dataset.
    fn num_batches(&self) -> usize;

    /// Returns a specific batch by index.
    fn get_batch(&self, index: usize) -> Option<&RecordBatch>;
}

/// An in-memory dataset backed by Arrow RecordBatches.
///
/// This is the table representation consumed by
/// [`analyze_dataset`](crate::report::analyze_dataset): an ordered set of
/// named columns that all share one row count.
///
/// # Example
///
/// ```no_run
/// use confiar::{ArrowDataset, Dataset};
///
/// let dataset = ArrowDataset::from_csv("orders.csv").unwrap();
/// println!("Loaded {} rows", dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct ArrowDataset {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
    row_count: usize,
}

impl ArrowDataset {
    /// Creates a new ArrowDataset from a vector of RecordBatches.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batches vector is empty
    /// - The batches have inconsistent schemas
    pub fn new(batches: Vec<RecordBatch>) -> Result<Self> {
        if batches.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let schema = batches[0].schema();

        // Verify all batches have the same schema
        for (i, batch) in batches.iter().enumerate().skip(1) {
            if batch.schema() != schema {
                return Err(Error::schema_mismatch(format!(
                    "Batch {} has different schema than batch 0",
                    i
                )));
            }
        }

        let row_count = batches.iter().map(|b| b.num_rows()).sum();

        Ok(Self {
            batches,
            schema,
            row_count,
        })
    }

    /// Creates an ArrowDataset from a single RecordBatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch schemas are inconsistent (cannot happen
    /// for a single batch, retained for parity with [`ArrowDataset::new`]).
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        Self::new(vec![batch])
    }

    /// Loads a dataset from a CSV file.
    ///
    /// The schema is inferred from the first 1000 rows; empty fields become
    /// nulls, which the trust engine treats as missing values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file is not valid CSV
    /// - The file contains no rows
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Loads a dataset from a CSV file with options.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    /// * `options` - CSV parsing options
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the file contains no rows.
    pub fn from_csv_with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        use std::io::{BufReader, Seek, SeekFrom};

        use arrow_csv::{reader::Format, ReaderBuilder};

        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let mut buf_reader = BufReader::new(file);

        // Get schema (infer or use provided)
        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            // Infer schema from file
            let mut format = Format::default().with_header(options.has_header);
            if let Some(delim) = options.delimiter {
                format = format.with_delimiter(delim);
            }
            let (inferred, _) = format
                .infer_schema(&mut buf_reader, Some(1000))
                .map_err(Error::Arrow)?;

            // Reset file position
            buf_reader
                .seek(SeekFrom::Start(0))
                .map_err(|e| Error::io(e, path))?;

            Arc::new(inferred)
        };

        let mut builder = ReaderBuilder::new(schema)
            .with_batch_size(options.batch_size)
            .with_header(options.has_header);

        if let Some(delim) = options.delimiter {
            builder = builder.with_delimiter(delim);
        }

        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Self::new(batches)
    }

    /// Loads a dataset from a CSV string.
    ///
    /// A header row is assumed. Useful for small inline tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid CSV or has no data rows.
    pub fn from_csv_str(data: &str) -> Result<Self> {
        use std::io::Cursor;

        use arrow_csv::{reader::Format, ReaderBuilder};

        // Infer schema
        let mut cursor_for_infer = Cursor::new(data.as_bytes());
        let format = Format::default().with_header(true);
        let (inferred, _) = format
            .infer_schema(&mut cursor_for_infer, Some(1000))
            .map_err(Error::Arrow)?;

        let schema = Arc::new(inferred);
        let cursor = Cursor::new(data.as_bytes());

        let builder = ReaderBuilder::new(schema)
            .with_batch_size(8192)
            .with_header(true);

        let reader = builder.build(cursor).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Self::new(batches)
    }

    /// Saves the dataset to a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        use arrow_csv::WriterBuilder;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let mut writer = WriterBuilder::new().with_header(true).build(file);

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }

        Ok(())
    }

    /// Loads a dataset from a Parquet file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be opened
    /// - The file is not valid Parquet
    /// - The file contains no row groups
    pub fn from_parquet(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(Error::Parquet)?;

        let reader = builder.build().map_err(Error::Parquet)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Self::new(batches)
    }

    /// Saves the dataset to a Parquet file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created
    /// - Writing fails
    pub fn to_parquet(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let props = WriterProperties::builder().build();
        let mut writer =
            ArrowWriter::try_new(file, self.schema.clone(), Some(props)).map_err(Error::Parquet)?;

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Parquet)?;
        }

        writer.close().map_err(Error::Parquet)?;
        Ok(())
    }

    /// Loads a dataset from a JSON Lines (JSONL) file.
    ///
    /// Each line in the file should be a valid JSON object representing a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_with_options(path, JsonOptions::default())
    }

    /// Loads a dataset from a JSON Lines file with options.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the file contains no rows.
    pub fn from_json_with_options(path: impl AsRef<Path>, options: JsonOptions) -> Result<Self> {
        use std::io::BufReader;

        use arrow_json::ReaderBuilder;

        let path = path.as_ref();

        // Get schema (infer or use provided)
        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            // Infer schema from file
            let infer_file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
            let infer_reader = BufReader::new(infer_file);
            let (inferred, _) = arrow_json::reader::infer_json_schema(infer_reader, Some(1000))
                .map_err(Error::Arrow)?;
            Arc::new(inferred)
        };

        // Open file for reading
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let buf_reader = BufReader::new(file);

        let builder = ReaderBuilder::new(schema).with_batch_size(options.batch_size);
        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyDataset);
        }

        Self::new(batches)
    }

    /// Saves the dataset to a JSON Lines (JSONL) file.
    ///
    /// Each row is written as a single JSON object on its own line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        use std::io::BufWriter;

        use arrow_json::LineDelimitedWriter;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;
        let buf_writer = BufWriter::new(file);

        let mut writer = LineDelimitedWriter::new(buf_writer);

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }

        writer.finish().map_err(Error::Arrow)?;

        Ok(())
    }

    /// Returns the underlying batches.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Consumes the dataset and returns the underlying batches.
    pub fn into_batches(self) -> Vec<RecordBatch> {
        self.batches
    }

    /// Returns an iterator over rows as single-row RecordBatches.
    pub fn rows(&self) -> RowIterator<'_> {
        RowIterator {
            dataset: self,
            current_batch: 0,
            current_row: 0,
        }
    }

    /// Finds the batch and local row index for a global row index.
    fn find_row(&self, global_index: usize) -> Option<(usize, usize)> {
        if global_index >= self.row_count {
            return None;
        }

        let mut remaining = global_index;
        for (batch_idx, batch) in self.batches.iter().enumerate() {
            let batch_rows = batch.num_rows();
            if remaining < batch_rows {
                return Some((batch_idx, remaining));
            }
            remaining -= batch_rows;
        }

        None
    }
}

impl Dataset for ArrowDataset {
    fn len(&self) -> usize {
        self.row_count
    }

    fn get(&self, index: usize) -> Option<RecordBatch> {
        let (batch_idx, local_idx) = self.find_row(index)?;
        let batch = &self.batches[batch_idx];
        Some(batch.slice(local_idx, 1))
    }

    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = RecordBatch> + Send + '_> {
        Box::new(self.batches.iter().cloned())
    }

    fn num_batches(&self) -> usize {
        self.batches.len()
    }

    fn get_batch(&self, index: usize) -> Option<&RecordBatch> {
        self.batches.get(index)
    }
}

/// Iterator over individual rows of a dataset.
pub struct RowIterator<'a> {
    dataset: &'a ArrowDataset,
    current_batch: usize,
    current_row: usize,
}

impl Iterator for RowIterator<'_> {
    type Item = RecordBatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_batch >= self.dataset.batches.len() {
                return None;
            }

            let batch = &self.dataset.batches[self.current_batch];
            if self.current_row < batch.num_rows() {
                let row = batch.slice(self.current_row, 1);
                self.current_row += 1;
                return Some(row);
            }

            self.current_batch += 1;
            self.current_row = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut remaining = 0;
        for batch in self.dataset.batches.iter().skip(self.current_batch) {
            remaining += batch.num_rows();
        }
        if self.current_batch < self.dataset.batches.len() {
            remaining -= self.current_row;
        }
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowIterator<'_> {}

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row.
    pub has_header: bool,
    /// Delimiter character (default is comma).
    pub delimiter: Option<u8>,
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<arrow::datatypes::Schema>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None, // Use default comma
            batch_size: 8192,
            schema: None,
        }
    }
}

impl CsvOptions {
    /// Creates new CSV options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the file has a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: arrow::datatypes::Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Options for JSON/JSONL parsing.
#[derive(Debug, Clone)]
pub struct JsonOptions {
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<arrow::datatypes::Schema>,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            batch_size: 8192,
            schema: None,
        }
    }
}

impl JsonOptions {
    /// Creates new JSON options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: arrow::datatypes::Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::uninlined_format_args
)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Float64Array, Int64Array, StringArray},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;

    fn create_test_batch(start: i64, count: usize) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("order_id", DataType::Int64, false),
            Field::new("region", DataType::Utf8, false),
            Field::new("amount", DataType::Float64, false),
        ]));

        let ids: Vec<i64> = (start..start + count as i64).collect();
        let regions: Vec<String> = ids.iter().map(|i| format!("region_{}", i % 4)).collect();
        let amounts: Vec<f64> = ids.iter().map(|i| *i as f64 * 9.75).collect();

        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(ids)),
                Arc::new(StringArray::from(regions)),
                Arc::new(Float64Array::from(amounts)),
            ],
        )
        .ok()
        .unwrap_or_else(|| panic!("Failed to create test batch"))
    }

    #[test]
    fn test_new_with_single_batch() {
        let batch = create_test_batch(0, 10);
        let dataset = ArrowDataset::new(vec![batch])
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.num_batches(), 1);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_new_with_multiple_batches() {
        let batches = vec![
            create_test_batch(0, 5),
            create_test_batch(5, 5),
            create_test_batch(10, 3),
        ];
        let dataset = ArrowDataset::new(batches)
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        assert_eq!(dataset.len(), 13);
        assert_eq!(dataset.num_batches(), 3);
    }

    #[test]
    fn test_new_empty_fails() {
        let result = ArrowDataset::new(vec![]);
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_new_schema_mismatch_fails() {
        let batch_a = create_test_batch(0, 5);

        let other_schema = Arc::new(Schema::new(vec![Field::new(
            "different",
            DataType::Utf8,
            false,
        )]));
        let batch_b = RecordBatch::try_new(
            other_schema,
            vec![Arc::new(StringArray::from(vec!["x", "y"]))],
        )
        .ok()
        .unwrap_or_else(|| panic!("Should create batch"));

        let result = ArrowDataset::new(vec![batch_a, batch_b]);
        assert!(matches!(result, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_get_row_across_batches() {
        let batches = vec![create_test_batch(0, 5), create_test_batch(5, 5)];
        let dataset = ArrowDataset::new(batches)
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        let row = dataset
            .get(7)
            .unwrap_or_else(|| panic!("Row 7 should exist"));
        assert_eq!(row.num_rows(), 1);

        let ids = row
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap_or_else(|| panic!("Should be Int64Array"));
        assert_eq!(ids.value(0), 7);

        assert!(dataset.get(10).is_none());
    }

    #[test]
    fn test_rows_iterator() {
        let dataset = ArrowDataset::new(vec![create_test_batch(0, 4), create_test_batch(4, 2)])
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        let rows: Vec<RecordBatch> = dataset.rows().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.num_rows() == 1));
        assert_eq!(dataset.rows().len(), 6);
    }

    #[test]
    fn test_from_csv_str() {
        let csv = "order_id,amount,region\n1,10.5,north\n2,20.0,south\n3,15.25,north\n";
        let dataset = ArrowDataset::from_csv_str(csv)
            .ok()
            .unwrap_or_else(|| panic!("Should parse CSV"));

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.schema().fields().len(), 3);
    }

    #[test]
    fn test_from_csv_str_empty_fields_are_null() {
        let csv = "a,b\n1,\n2,x\n";
        let dataset = ArrowDataset::from_csv_str(csv)
            .ok()
            .unwrap_or_else(|| panic!("Should parse CSV"));

        let batch = dataset
            .get_batch(0)
            .unwrap_or_else(|| panic!("Should have a batch"));
        assert_eq!(batch.column(1).null_count(), 1);
    }

    #[test]
    fn test_csv_round_trip() {
        let dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = dir.path().join("orders.csv");

        let dataset = ArrowDataset::from_batch(create_test_batch(0, 20))
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));
        dataset
            .to_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write CSV"));

        let loaded = ArrowDataset::from_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read CSV"));
        assert_eq!(loaded.len(), 20);
        assert_eq!(loaded.schema().fields().len(), 3);
    }

    #[test]
    fn test_csv_with_delimiter_option() {
        let dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = dir.path().join("orders.tsv");

        std::fs::write(&path, "a;b\n1;2\n3;4\n")
            .ok()
            .unwrap_or_else(|| panic!("Should write file"));

        let options = CsvOptions::new().with_delimiter(b';');
        let dataset = ArrowDataset::from_csv_with_options(&path, options)
            .ok()
            .unwrap_or_else(|| panic!("Should read delimited file"));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.schema().fields().len(), 2);
    }

    #[test]
    fn test_parquet_round_trip() {
        let dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = dir.path().join("orders.parquet");

        let dataset = ArrowDataset::from_batch(create_test_batch(0, 50))
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));
        dataset
            .to_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write parquet"));

        let loaded = ArrowDataset::from_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read parquet"));
        assert_eq!(loaded.len(), 50);
        assert_eq!(loaded.schema(), dataset.schema());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = dir.path().join("orders.jsonl");

        let dataset = ArrowDataset::from_batch(create_test_batch(0, 8))
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));
        dataset
            .to_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write JSONL"));

        let loaded = ArrowDataset::from_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read JSONL"));
        assert_eq!(loaded.len(), 8);
    }

    #[test]
    fn test_from_csv_missing_file() {
        let result = ArrowDataset::from_csv("/nonexistent/orders.csv");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_csv_options_builders() {
        let schema = Schema::new(vec![Field::new("a", DataType::Int64, true)]);
        let options = CsvOptions::new()
            .with_header(false)
            .with_delimiter(b'\t')
            .with_batch_size(128)
            .with_schema(schema);

        assert!(!options.has_header);
        assert_eq!(options.delimiter, Some(b'\t'));
        assert_eq!(options.batch_size, 128);
        assert!(options.schema.is_some());
    }

    #[test]
    fn test_json_options_builders() {
        let options = JsonOptions::new().with_batch_size(64);
        assert_eq!(options.batch_size, 64);
        assert!(options.schema.is_none());
    }

    #[test]
    fn test_batches_accessors() {
        let dataset = ArrowDataset::new(vec![create_test_batch(0, 3), create_test_batch(3, 3)])
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        assert_eq!(dataset.batches().len(), 2);
        assert!(dataset.get_batch(1).is_some());
        assert!(dataset.get_batch(2).is_none());

        let batches = dataset.into_batches();
        assert_eq!(batches.len(), 2);
    }
}
