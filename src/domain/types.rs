//! Shared domain types.
//!
//! These types are intentionally plain data: the pipeline fills them in once
//! per run, and only the reporter reads the finished `Report`.

/// Lexical counts derived from the loaded text.
///
/// `words` and `sentences` must both be positive before any score is
/// computed; the metric calculator enforces that precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCounts {
    /// Whitespace-delimited word tokens (empty tokens are never counted).
    pub words: usize,
    /// Sentence fragments: one more than the number of `.` `!` `?` in the
    /// text, so this is at least 1 even for an empty string.
    pub sentences: usize,
    /// Characters excluding the space character `' '`; punctuation and
    /// non-space whitespace are counted.
    pub characters: usize,
    /// Heuristic whole-text syllable estimate.
    pub syllables: usize,
    /// Words with at least three vowel groups (0 or 1 per word).
    pub polysyllables: usize,
}

/// The four readability formulas the tool computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Ari,
    FleschKincaid,
    Smog,
    ColemanLiau,
}

impl Metric {
    /// All metrics, in report order.
    pub const ALL: [Metric; 4] = [
        Metric::Ari,
        Metric::FleschKincaid,
        Metric::Smog,
        Metric::ColemanLiau,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Metric::Ari => "Automated Readability Index",
            Metric::FleschKincaid => "Flesch–Kincaid readability tests",
            Metric::Smog => "Simple Measure of Gobbledygook",
            Metric::ColemanLiau => "Coleman–Liau index",
        }
    }
}

/// Score and mapped reading age for a single metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricReading {
    pub metric: Metric,
    /// Raw score, unclamped; short texts can legitimately go negative.
    pub score: f64,
    /// Reading age from the lookup table; 0 when the score maps to no bracket.
    pub age: u32,
}

/// Everything computed in one run, consumed only by the reporter.
#[derive(Debug, Clone)]
pub struct Report {
    /// The loaded text with its lines joined (no separators).
    pub text: String,
    pub counts: TextCounts,
    /// One reading per metric, in `Metric::ALL` order.
    pub readings: [MetricReading; 4],
    /// Arithmetic mean of the four ages, fallback zeros included.
    pub average_age: f64,
}
