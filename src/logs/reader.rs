//! Log file reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error_handling::LogReadError;

/// Whether a run can proceed without a given log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Open or read failure aborts the run.
    Required,
    /// Open or read failure is logged and the log counts as empty.
    Optional,
}

/// Reads every line of a log file.
///
/// Returns `Ok(None)` when an optional log cannot be opened or read. Bytes
/// that are not valid UTF-8 are replaced rather than failing the read.
///
/// # Errors
///
/// `LogReadError::MissingPrimary` if a required log cannot be opened, and
/// `LogReadError::Io` if reading a required log fails after it was opened.
pub fn read_log(path: &Path, requirement: Requirement) -> Result<Option<Vec<String>>, LogReadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return match requirement {
                Requirement::Required => Err(LogReadError::MissingPrimary {
                    path: path.to_path_buf(),
                    source,
                }),
                Requirement::Optional => {
                    warn!(
                        "Optional log {} not readable ({}), continuing without it",
                        path.display(),
                        source
                    );
                    Ok(None)
                }
            };
        }
    };

    match read_lines(file) {
        Ok(lines) => {
            debug!("Read {} lines from {}", lines.len(), path.display());
            Ok(Some(lines))
        }
        Err(source) => match requirement {
            Requirement::Required => Err(LogReadError::Io {
                path: path.to_path_buf(),
                source,
            }),
            Requirement::Optional => {
                warn!(
                    "Optional log {} could not be read ({}), continuing without it",
                    path.display(),
                    source
                );
                Ok(None)
            }
        },
    }
}

fn read_lines(file: File) -> std::io::Result<Vec<String>> {
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        lines.push(line.trim_end_matches(['\n', '\r']).to_string());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_all_lines() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "first\r\nsecond\nthird").expect("Failed to write");

        let lines = read_log(file.path(), Requirement::Required)
            .expect("read should succeed")
            .expect("file exists");
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_required_log_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = read_log(&dir.path().join("absent.log"), Requirement::Required);
        assert!(matches!(result, Err(LogReadError::MissingPrimary { .. })));
    }

    #[test]
    fn test_missing_optional_log_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = read_log(&dir.path().join("absent.log"), Requirement::Optional)
            .expect("optional log should not fail");
        assert!(result.is_none());
    }

    #[test]
    fn test_unreadable_optional_log_is_empty() {
        // A directory opens fine on Linux but fails on the first read
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = read_log(dir.path(), Requirement::Optional)
            .expect("optional log should not fail");
        assert!(result.is_none());
    }

    #[test]
    fn test_unreadable_required_log_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = read_log(dir.path(), Requirement::Required);
        assert!(matches!(result, Err(LogReadError::Io { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"1.2.3.4 \xff\xfe bytes\n")
            .expect("Failed to write");

        let lines = read_log(file.path(), Requirement::Required)
            .expect("read should succeed")
            .expect("file exists");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("1.2.3.4 "));
    }
}
