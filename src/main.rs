//! confiar CLI - Data Trust Scoring and Column Classification
//!
//! Command-line interface for confiar operations.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::process::ExitCode;

fn main() -> ExitCode {
    confiar::cli::run()
}
