//! Error types for confiar.

use std::path::PathBuf;

/// Result type alias for confiar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in confiar operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arrow error during data processing.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet error during file operations.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Unsupported file format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unsupported format name or extension.
        format: String,
    },

    /// Schema mismatch between batches of one dataset.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch {
        /// Description of the schema mismatch.
        message: String,
    },

    /// Empty dataset error.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Output formatting error (JSON serialization and the like).
    #[error("Format error: {0}")]
    Format(String),
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io(io_err, "/path/to/file");
        assert!(err.to_string().contains("/path/to/file"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_invalid_config() {
        let err = Error::invalid_config("delimiter must be one byte");
        assert!(err.to_string().contains("delimiter must be one byte"));
    }

    #[test]
    fn test_unsupported_format() {
        let err = Error::unsupported_format("xlsx");
        assert!(err.to_string().contains("xlsx"));
    }

    #[test]
    fn test_schema_mismatch() {
        let err = Error::schema_mismatch("expected Int64, got Utf8");
        assert!(err.to_string().contains("expected Int64, got Utf8"));
    }

    #[test]
    fn test_empty_dataset() {
        let err = Error::EmptyDataset;
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_format_error() {
        let err = Error::Format("unexpected token".to_string());
        assert!(err.to_string().contains("unexpected token"));
    }
}
