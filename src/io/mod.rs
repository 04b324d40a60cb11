//! Input/output helpers.
//!
//! - text file ingest (`ingest`)

pub mod ingest;

pub use ingest::*;
