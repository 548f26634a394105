//! confiar - Data Trust Scoring and Column Classification in Pure Rust
//!
//! Assesses whether a tabular dataset is trustworthy enough for downstream
//! analysis. Each column is classified by role (identifier, numeric,
//! converted numeric, categorical), scored on missing values, skew,
//! dispersion, and outliers, and labeled with a trust verdict. The column
//! verdicts reduce to one dataset verdict.
//!
//! # Design Principles
//!
//! 1. **Total analysis** - every column yields a record; defects degrade to
//!    trust labels, never to errors
//! 2. **Pure Rust** - no Python, no FFI
//! 3. **Ecosystem aligned** - Arrow 53, Parquet 53
//!
//! # Quick Start
//!
//! ```no_run
//! use confiar::{analyze_dataset, ArrowDataset};
//!
//! let dataset = ArrowDataset::from_csv("data/orders.csv").unwrap();
//! let report = analyze_dataset(&dataset).unwrap();
//!
//! for record in &report.records {
//!     println!("{}: {} ({})", record.column, record.trust, record.remarks);
//! }
//! println!("{}", report.verdict());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::redundant_clone,
        clippy::too_many_lines,
        clippy::float_cmp,
        clippy::similar_names,
        clippy::unreadable_literal
    )
)]
// Allow some pedantic lints for cleaner code
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::map_unwrap_or)]

/// CLI module for command-line interface
pub mod cli;
pub mod column;
pub mod dataset;
pub mod error;
pub mod report;
pub mod samples;
pub mod stats;
pub mod trust;

// Re-exports for convenience
// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use column::{collect_columns, ColumnSeries, ColumnValues};
pub use dataset::{ArrowDataset, CsvOptions, Dataset, JsonOptions};
pub use error::{Error, Result};
pub use report::{analyze_dataset, DatasetVerdict, TrustReport};
pub use stats::DistributionStats;
pub use trust::{
    classify_column, coerce_numeric, is_identifier, ColumnRecord, ColumnType, TrustLevel,
};
