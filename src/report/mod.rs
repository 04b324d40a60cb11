//! Report assembly: the average reading age and terminal output.

pub mod format;

pub use format::format_report;

use crate::domain::MetricReading;

/// Mean of the four reading ages, zeros included.
pub fn average_age(readings: &[MetricReading; 4]) -> f64 {
    let sum: u32 = readings.iter().map(|r| r.age).sum();
    f64::from(sum) / 4.0
}
