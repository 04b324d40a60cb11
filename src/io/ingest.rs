//! Text ingest.
//!
//! Reads the input file line by line and joins the lines with no separator.
//! A word split across a line break therefore merges into a single token, and
//! line breaks never count as whitespace or characters downstream.
//!
//! I/O failures are fatal (exit code 2): nothing is counted before the whole
//! file has been read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::AppError;

/// Read the file at `path` into a single string with line breaks removed.
pub fn load_text(path: &Path) -> Result<String, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(2, format!("Failed to open '{}': {e}", path.display()))
    })?;

    let mut text = String::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| {
            AppError::new(2, format!("Failed to read '{}': {e}", path.display()))
        })?;
        text.push_str(&line);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn joins_lines_without_separator() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "split.txt", "foo\nbar\n");
        assert_eq!(load_text(&path).unwrap(), "foobar");
    }

    #[test]
    fn strips_crlf_line_endings() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "crlf.txt", "one\r\ntwo\r\n");
        assert_eq!(load_text(&path).unwrap(), "onetwo");
    }

    #[test]
    fn empty_file_yields_empty_text() {
        let dir = tempdir().unwrap();
        let path = write_fixture(&dir, "empty.txt", "");
        assert_eq!(load_text(&path).unwrap(), "");
    }

    #[test]
    fn missing_file_maps_to_exit_code_2() {
        let dir = tempdir().unwrap();
        let err = load_text(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
