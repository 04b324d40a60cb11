//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the lexical counts derived from the text (`TextCounts`)
//! - the metric enumeration (`Metric`) and per-metric results (`MetricReading`)
//! - the final aggregate consumed by the reporter (`Report`)

pub mod types;

pub use types::*;
