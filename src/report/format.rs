//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the counting and scoring code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::Report;

/// Format the full report: echoed text, counts, one line per metric, and the
/// average reading age.
///
/// The returned string has no trailing newline; the caller prints it with
/// `println!`.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("The text is:\n");
    out.push_str(&report.text);
    out.push_str("\n\n");

    out.push_str(&format!("Words: {}\n", report.counts.words));
    out.push_str(&format!("Sentences: {}\n", report.counts.sentences));
    out.push_str(&format!("Characters: {}\n", report.counts.characters));
    out.push_str(&format!("Syllables: {}\n", report.counts.syllables));
    out.push_str(&format!("Polysyllables: {}\n", report.counts.polysyllables));
    out.push('\n');

    for reading in &report.readings {
        out.push_str(&format!(
            "{}: {:.2} (about {}-year-olds).\n",
            reading.metric.display_name(),
            reading.score,
            reading.age
        ));
    }
    out.push('\n');

    out.push_str(&format!(
        "This text should be understood in average by {:.2}-year-olds.",
        report.average_age
    ));

    out
}
