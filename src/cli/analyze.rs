//! Trust analysis CLI commands.

use std::path::PathBuf;

use arrow::util::pretty::print_batches;

use crate::report::TrustReport;

use super::basic::load_dataset_with_delimiter;

/// Analyze a dataset and print its trust report.
pub(crate) fn cmd_analyze(
    path: &PathBuf,
    format: &str,
    delimiter: Option<&str>,
    export: Option<&PathBuf>,
) -> crate::Result<()> {
    let dataset = load_dataset_with_delimiter(path, delimiter)?;
    let report = TrustReport::from_dataset(&dataset)?;

    if format == "json" {
        let json_str = serde_json::to_string_pretty(&report.to_json_value())
            .map_err(|e| crate::Error::Format(e.to_string()))?;
        println!("{json_str}");
    } else {
        println!("\n=== DATA TRUST ANALYSIS REPORT ===\n");
        print_batches(&[report.to_batch()?]).map_err(crate::Error::Arrow)?;
        println!("\nFinal Verdict: {}", report.verdict());
    }

    if let Some(export_path) = export {
        report.to_csv(export_path)?;
        println!("\nReport saved to {}", export_path.display());
    }

    Ok(())
}

/// Write the trust report to a file, or print it as JSON without one.
pub(crate) fn cmd_report(
    path: &PathBuf,
    output: Option<&PathBuf>,
    delimiter: Option<&str>,
) -> crate::Result<()> {
    let dataset = load_dataset_with_delimiter(path, delimiter)?;
    let report = TrustReport::from_dataset(&dataset)?;

    let Some(output_path) = output else {
        let json_str = serde_json::to_string_pretty(&report.to_json_value())
            .map_err(|e| crate::Error::Format(e.to_string()))?;
        println!("{json_str}");
        return Ok(());
    };

    let ext = output_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match ext {
        "csv" => report.to_csv(output_path)?,
        "json" => {
            let json_str = serde_json::to_string_pretty(&report.to_json_value())
                .map_err(|e| crate::Error::Format(e.to_string()))?;
            std::fs::write(output_path, json_str)
                .map_err(|e| crate::Error::io(e, output_path))?;
        }
        ext => return Err(crate::Error::unsupported_format(ext)),
    }

    println!("Trust report written to: {}", output_path.display());

    Ok(())
}
