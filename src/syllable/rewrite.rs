//! Ordered regex rewrite rules.
//!
//! Each chain is applied front to back, each rule rewriting the full output
//! of the previous one. The order is normative: the "you" rule must run
//! before vowel pairs collapse, and uppercase vowels must be normalized
//! before the final consonant strip.

use std::sync::LazyLock;

use regex_lite::Regex;

/// One rewrite step: replace every match of `pattern` with `replacement`.
pub struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("rewrite pattern should compile"),
            replacement,
        }
    }

    /// Apply this rule once over the whole input.
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Run `rules` in order, feeding each one the output of the previous.
pub fn apply_chain(rules: &[Rewrite], text: &str) -> String {
    rules.iter().fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Whole-text chain used for the total syllable count.
///
/// After the chain runs, every remaining character stands for one syllable.
pub static TEXT_CHAIN: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        // Silent word-final e.
        Rewrite::new(r"e\b", ""),
        Rewrite::new("you", "a"),
        // Adjacent vowel pairs read as one syllable.
        Rewrite::new("[aeiouy]{2}", "a"),
        Rewrite::new(",", ""),
        Rewrite::new("[AEIOUY]", "a"),
        // A bare "th" word still gets one syllable.
        Rewrite::new(" th ", " a "),
        // A number reads as one syllable per digit run.
        Rewrite::new("[0-9]+", "a"),
        Rewrite::new("[^aeiou]", ""),
    ]
});

/// Per-word chain used to decide whether a word is a polysyllable.
pub static WORD_CHAIN: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r"e\b", ""),
        Rewrite::new("[aeiouy]{2}", "a"),
    ]
});
