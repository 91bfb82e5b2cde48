//! Domain list loading
//!
//! Reads the input file into an ordered list of domain strings. Two
//! formats are recognized by extension: `.csv` (first column of each
//! record) and `.txt` (one domain per line). Anything else is a fatal
//! input error, raised before any network activity.

use crate::{InputError, InputResult};
use std::fs;
use std::path::Path;

/// Reads the domain list from a `.csv` or `.txt` file
///
/// Domains are taken as-is: no validation, no normalization. Blank lines
/// and empty records are skipped.
///
/// # Arguments
///
/// * `path` - Path to the input file
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The ordered domain list
/// * `Err(InputError)` - Missing file, read failure, or unsupported extension
pub fn read_domains(path: &Path) -> InputResult<Vec<String>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => read_csv(path),
        Some("txt") => read_txt(path),
        _ => Err(InputError::UnsupportedExtension {
            path: path.display().to_string(),
        }),
    }
}

/// Reads the first column of each CSV record
fn read_csv(path: &Path) -> InputResult<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut domains = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(first) = record.get(0) {
            if !first.is_empty() {
                domains.push(first.to_string());
            }
        }
    }
    Ok(domains)
}

/// Reads one domain per line, trimmed
fn read_txt(path: &Path) -> InputResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_read_csv_first_column() {
        let file = temp_file_with(".csv", "a.com,1,extra\nb.com,2\nc.com\n");
        let domains = read_domains(file.path()).unwrap();
        assert_eq!(domains, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_read_csv_skips_empty_records() {
        let file = temp_file_with(".csv", "a.com\n\nb.com\n");
        let domains = read_domains(file.path()).unwrap();
        assert_eq!(domains, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_read_txt_one_per_line_trimmed() {
        let file = temp_file_with(".txt", "a.com\n  b.com  \n\nc.com");
        let domains = read_domains(file.path()).unwrap();
        assert_eq!(domains, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file_with(".json", "[]");
        let err = read_domains(file.path()).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedExtension { .. }));
    }

    #[test]
    fn test_no_extension() {
        let err = read_domains(Path::new("domains")).unwrap_err();
        assert!(matches!(err, InputError::UnsupportedExtension { .. }));
    }

    #[test]
    fn test_missing_txt_file() {
        let err = read_domains(Path::new("/nonexistent/domains.txt")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }

    #[test]
    fn test_missing_csv_file() {
        let err = read_domains(Path::new("/nonexistent/domains.csv")).unwrap_err();
        assert!(matches!(err, InputError::Csv(_)));
    }

    #[test]
    fn test_order_preserved() {
        let file = temp_file_with(".txt", "z.com\na.com\nm.com\n");
        let domains = read_domains(file.path()).unwrap();
        assert_eq!(domains, vec!["z.com", "a.com", "m.com"]);
    }
}
