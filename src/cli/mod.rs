//! confiar CLI - Data Trust Scoring and Column Classification
//!
//! Command-line interface for confiar operations.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod analyze;
mod basic;

/// confiar - Data Trust Scoring and Column Classification in Pure Rust
#[derive(Parser)]
#[command(name = "confiar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a dataset and print its trust report
    Analyze {
        /// Path to dataset file
        path: PathBuf,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
        /// CSV delimiter (single ASCII character, CSV input only)
        #[arg(long)]
        delimiter: Option<String>,
        /// Also save the report as CSV to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Write the trust report to a file
    Report {
        /// Path to dataset file
        path: PathBuf,
        /// Output file for the report (csv or json by extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// CSV delimiter (single ASCII character, CSV input only)
        #[arg(long)]
        delimiter: Option<String>,
    },
    /// Display dataset information
    Info {
        /// Path to dataset file
        path: PathBuf,
    },
    /// Write the embedded sample dataset to a file
    Sample {
        /// Destination file (csv, parquet, json)
        path: PathBuf,
    },
}

/// Run the confiar CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            path,
            format,
            delimiter,
            export,
        } => analyze::cmd_analyze(&path, &format, delimiter.as_deref(), export.as_ref()),
        Commands::Report {
            path,
            output,
            delimiter,
        } => analyze::cmd_report(&path, output.as_ref(), delimiter.as_deref()),
        Commands::Info { path } => basic::cmd_info(&path),
        Commands::Sample { path } => basic::cmd_sample(&path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
