//! Readability metrics.
//!
//! - raw score formulas (`formula`)
//! - score-to-age lookup (`age`)
//!
//! `compute_readings` is the single entry point: it checks the counts are
//! scoreable, then evaluates all four metrics in report order.

pub mod age;
pub mod formula;

use crate::domain::{Metric, MetricReading, TextCounts};
use crate::error::AppError;

/// Score all four metrics against `counts`.
///
/// Fails with exit code 3 when `counts` has no words or no sentences, since
/// the formulas divide by both.
pub fn compute_readings(counts: &TextCounts) -> Result<[MetricReading; 4], AppError> {
    if counts.words == 0 {
        return Err(AppError::new(
            3,
            "No words to score: the input is empty or contains only whitespace.",
        ));
    }
    if counts.sentences == 0 {
        return Err(AppError::new(3, "No sentence fragments to score."));
    }

    Ok(Metric::ALL.map(|metric| {
        let score = formula::score(metric, counts);
        MetricReading {
            metric,
            score,
            age: age::age_for_score(score),
        }
    }))
}
