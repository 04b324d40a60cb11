//! Command-line parsing.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! counting/scoring code.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "readage",
    version,
    about = "Readability metrics (ARI, Flesch-Kincaid, SMOG, Coleman-Liau) and reading ages for a text file"
)]
pub struct Cli {
    /// Path to the text file to analyze.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}
