//! Result CSV writer

use crate::probe::ProbeOutcome;
use crate::{OutputError, OutputResult};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// One row of the result CSV: `(domain, status[, url])`
///
/// Errored domains serialize the same as not-found ones, with no URL.
#[derive(Debug, Clone)]
pub struct ProbeRecord {
    pub domain: String,
    pub status: &'static str,
    pub url: Option<String>,
}

impl ProbeRecord {
    /// Builds the row for a domain's probe outcome
    pub fn new(domain: String, outcome: &ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Found { url, .. } => Self {
                domain,
                status: "Found",
                url: Some(url.clone()),
            },
            ProbeOutcome::NotFound | ProbeOutcome::Errored { .. } => Self {
                domain,
                status: "Not found",
                url: None,
            },
        }
    }
}

/// Returns the dated result file name, `<YYYY-MM-DD>_result.csv`
pub fn result_file_name(date: NaiveDate) -> String {
    format!("{}_result.csv", date.format("%Y-%m-%d"))
}

/// Writes the result rows to `<directory>/<date>_result.csv`
///
/// Creates the directory if absent. A rerun on the same date overwrites
/// the previous file.
///
/// # Arguments
///
/// * `records` - The ordered result rows
/// * `date` - Date stamp for the file name
/// * `directory` - Output directory
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(OutputError)` - Directory creation or write failure
pub fn write_results(
    records: &[ProbeRecord],
    date: NaiveDate,
    directory: &Path,
) -> OutputResult<PathBuf> {
    fs::create_dir_all(directory).map_err(|source| OutputError::CreateDir {
        path: directory.display().to_string(),
        source,
    })?;

    let file_path = directory.join(result_file_name(date));
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(&file_path)?;

    for record in records {
        match &record.url {
            Some(url) => {
                writer.write_record([record.domain.as_str(), record.status, url.as_str()])?
            }
            None => writer.write_record([record.domain.as_str(), record.status])?,
        }
    }
    writer.flush()?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn test_result_file_name() {
        assert_eq!(result_file_name(sample_date()), "2026-08-29_result.csv");
    }

    #[test]
    fn test_record_from_found() {
        let record = ProbeRecord::new(
            "a.com".to_string(),
            &ProbeOutcome::Found {
                url: "https://www.a.com/security.txt".to_string(),
                path_index: 1,
            },
        );
        assert_eq!(record.status, "Found");
        assert_eq!(record.url.as_deref(), Some("https://www.a.com/security.txt"));
    }

    #[test]
    fn test_record_from_error_matches_not_found() {
        let errored = ProbeRecord::new(
            "a.com".to_string(),
            &ProbeOutcome::Errored {
                url: "https://www.a.com/security.txt".to_string(),
                message: "connection failed".to_string(),
            },
        );
        assert_eq!(errored.status, "Not found");
        assert!(errored.url.is_none());
    }

    #[test]
    fn test_write_results_mixed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            ProbeRecord::new(
                "a.com".to_string(),
                &ProbeOutcome::Found {
                    url: "https://www.a.com/.well-known/security.txt".to_string(),
                    path_index: 0,
                },
            ),
            ProbeRecord::new("b.com".to_string(), &ProbeOutcome::NotFound),
        ];

        let path = write_results(&records, sample_date(), dir.path()).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "a.com,Found,https://www.a.com/.well-known/security.txt\nb.com,Not found\n"
        );
    }

    #[test]
    fn test_write_results_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("de");
        let path = write_results(&[], sample_date(), &nested).unwrap();
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_same_date_rerun_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let first = vec![ProbeRecord::new("a.com".to_string(), &ProbeOutcome::NotFound)];
        let second = vec![ProbeRecord::new("b.com".to_string(), &ProbeOutcome::NotFound)];

        write_results(&first, sample_date(), dir.path()).unwrap();
        let path = write_results(&second, sample_date(), dir.path()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "b.com,Not found\n");
    }
}
