//! Syllable estimation.
//!
//! Approximates syllable counts by rewriting text with an ordered rule chain
//! (`rewrite`) and counting the vowels that remain. The heuristic has known
//! quirks that are kept as-is so scores stay stable:
//!
//! - `y` pairs with a neighboring vowel but is dropped by the final filter,
//!   so "happy" counts one syllable
//! - "you" counts one syllable wherever it appears, even inside a word
//! - a run of digits counts one syllable
//! - a standalone "th" token counts one syllable

pub mod rewrite;

use rewrite::{apply_chain, TEXT_CHAIN, WORD_CHAIN};

/// A word is a polysyllable once it reaches this many vowel groups.
const POLYSYLLABLE_THRESHOLD: usize = 3;

/// Estimate the total syllable count of `text`.
pub fn total_syllables(text: &str) -> usize {
    apply_chain(&TEXT_CHAIN, text).chars().count()
}

/// Count how many of `words` are polysyllables.
///
/// Each word contributes at most one, no matter how many vowel groups it has.
pub fn polysyllable_count(words: &[&str]) -> usize {
    words
        .iter()
        .filter(|word| vowel_groups(word) >= POLYSYLLABLE_THRESHOLD)
        .count()
}

/// Count vowel groups in a single word after pair-collapsing.
///
/// Unlike the text-level count, `y` counts as a vowel here.
fn vowel_groups(word: &str) -> usize {
    apply_chain(&WORD_CHAIN, word)
        .chars()
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
        .count()
}
