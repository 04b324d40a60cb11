//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the analysis pipeline
//! - prints the report

use clap::Parser;

use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `readage` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    let report = pipeline::run_analysis(&cli.file)?;
    println!("{}", crate::report::format_report(&report));
    Ok(())
}
