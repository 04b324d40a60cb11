//! Raw score formulas.
//!
//! All four formulas read the same `TextCounts`. The caller checks that
//! words and sentences are non-zero before any formula runs, so the
//! divisions here are safe.

use crate::domain::{Metric, TextCounts};

/// Compute the raw score of `metric` from `counts`.
pub fn score(metric: Metric, counts: &TextCounts) -> f64 {
    let words = counts.words as f64;
    let sentences = counts.sentences as f64;
    let characters = counts.characters as f64;
    let syllables = counts.syllables as f64;
    let polysyllables = counts.polysyllables as f64;

    match metric {
        Metric::Ari => 4.71 * (characters / words) + 0.5 * (words / sentences) - 21.43,
        Metric::FleschKincaid => {
            0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
        }
        Metric::Smog => 1.043 * (polysyllables * (30.0 / sentences)).sqrt() + 3.1291,
        Metric::ColemanLiau => {
            // L and S are per-100-words averages.
            let l = characters / words * 100.0;
            let s = sentences / words * 100.0;
            0.0588 * l - 0.296 * s - 15.8
        }
    }
}
