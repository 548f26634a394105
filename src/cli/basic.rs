//! Basic CLI commands for dataset inspection and sample data.

use std::path::{Path, PathBuf};

use crate::{dataset::CsvOptions, samples, ArrowDataset, Dataset};

/// Load a dataset from a file path based on extension.
pub(crate) fn load_dataset(path: &PathBuf) -> crate::Result<ArrowDataset> {
    load_dataset_with_delimiter(path, None)
}

/// Load a dataset, optionally overriding the CSV delimiter.
///
/// The delimiter only applies to CSV input and must be a single ASCII
/// character (for example `;` or a tab).
pub(crate) fn load_dataset_with_delimiter(
    path: &PathBuf,
    delimiter: Option<&str>,
) -> crate::Result<ArrowDataset> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "parquet" => ArrowDataset::from_parquet(path),
        "csv" => match delimiter {
            Some(d) => {
                let options = CsvOptions::new().with_delimiter(parse_delimiter(d)?);
                ArrowDataset::from_csv_with_options(path, options)
            }
            None => ArrowDataset::from_csv(path),
        },
        "json" | "jsonl" => ArrowDataset::from_json(path),
        ext => Err(crate::Error::unsupported_format(ext)),
    }
}

/// Save a dataset to a file path based on extension.
pub(crate) fn save_dataset(dataset: &ArrowDataset, path: &PathBuf) -> crate::Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "parquet" => dataset.to_parquet(path),
        "csv" => dataset.to_csv(path),
        "json" | "jsonl" => dataset.to_json(path),
        ext => Err(crate::Error::unsupported_format(ext)),
    }
}

/// Get format name from file extension.
pub(crate) fn get_format(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => "Parquet",
        Some("csv") => "CSV",
        Some("json" | "jsonl") => "JSON",
        _ => "Unknown",
    }
}

fn parse_delimiter(raw: &str) -> crate::Result<u8> {
    let mut bytes = raw.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) if b.is_ascii() => Ok(b),
        _ => Err(crate::Error::invalid_config(format!(
            "Delimiter must be a single ASCII character, got '{raw}'"
        ))),
    }
}

/// Display dataset information.
pub(crate) fn cmd_info(path: &PathBuf) -> crate::Result<()> {
    let dataset = load_dataset(path)?;

    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!("File: {}", path.display());
    println!("Format: {}", get_format(path));
    println!("Rows: {}", dataset.len());
    println!("Batches: {}", dataset.num_batches());
    println!("Columns: {}", dataset.schema().fields().len());
    println!("Size: {} bytes", file_size);
    println!("\nFields:");
    for field in dataset.schema().fields() {
        println!("  {}: {}", field.name(), field.data_type());
    }

    Ok(())
}

/// Write the embedded sample dataset to a file.
pub(crate) fn cmd_sample(path: &PathBuf) -> crate::Result<()> {
    let dataset = samples::customer_orders()?;
    save_dataset(&dataset, path)?;

    println!(
        "Sample dataset written to {} ({} rows)",
        path.display(),
        dataset.len()
    );

    Ok(())
}
