//! The analysis pipeline behind the CLI.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load -> count -> score -> assemble
//!
//! Tests drive a whole run through `run_analysis` without spawning a process.

use std::path::Path;

use crate::domain::{Report, TextCounts};
use crate::error::AppError;

/// Execute the full analysis for the file at `path`.
pub fn run_analysis(path: &Path) -> Result<Report, AppError> {
    // 1) Load the text, joining lines with no separator.
    let text = crate::io::load_text(path)?;

    // 2) Count words, sentences, characters, syllables, polysyllables.
    //    Every counter reads the same joined text.
    let counts = {
        let words = crate::lex::word_tokens(&text);
        TextCounts {
            words: words.len(),
            sentences: crate::lex::count_sentences(&text),
            characters: crate::lex::count_characters(&text),
            syllables: crate::syllable::total_syllables(&text),
            polysyllables: crate::syllable::polysyllable_count(&words),
        }
    };

    // 3) Score all four metrics. This rejects input with nothing to score.
    let readings = crate::metrics::compute_readings(&counts)?;

    // 4) Assemble the report.
    let average_age = crate::report::average_age(&readings);
    Ok(Report {
        text,
        counts,
        readings,
        average_age,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;
    use std::fs;
    use tempfile::tempdir;

    fn analyze(contents: &str) -> Result<Report, AppError> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, contents).unwrap();
        run_analysis(&path)
    }

    #[test]
    fn scores_a_small_text_end_to_end() {
        let report = analyze("The cat sat. It was happy!").unwrap();

        assert_eq!(report.text, "The cat sat. It was happy!");
        assert_eq!(report.counts.words, 6);
        assert_eq!(report.counts.sentences, 3);
        assert_eq!(report.counts.characters, 21);
        assert_eq!(report.counts.syllables, 5);
        assert_eq!(report.counts.polysyllables, 0);

        let [ari, fk, smog, cl] = &report.readings;
        assert_eq!(ari.metric, Metric::Ari);
        assert!((ari.score - (-3.945)).abs() < 1e-9);
        assert_eq!(ari.age, 0);
        assert!((fk.score - (-4.976666666666666)).abs() < 1e-9);
        assert_eq!(fk.age, 0);
        assert!((smog.score - 3.1291).abs() < 1e-12);
        assert_eq!(smog.age, 9);
        assert!((cl.score - (-10.02)).abs() < 1e-9);
        assert_eq!(cl.age, 0);

        assert!((report.average_age - 2.25).abs() < 1e-12);
    }

    #[test]
    fn whitespace_only_input_fails_with_exit_code_3() {
        let err = analyze("   \n\t\n").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn words_merge_across_line_breaks() {
        let report = analyze("hel\nlo there.").unwrap();
        assert_eq!(report.text, "hello there.");
        assert_eq!(report.counts.words, 2);
    }
}
