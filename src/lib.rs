//! sectxt-survey: a security.txt presence survey tool
//!
//! This crate checks a list of domains for a published `security.txt` file
//! at a set of well-known paths, tallies the outcomes, writes them to a
//! dated CSV, and renders pie charts summarizing the run.

pub mod input;
pub mod output;
pub mod probe;
pub mod survey;

use thiserror::Error;

/// Main error type for survey operations
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading the domain list
///
/// All of these are fatal: the run aborts before any network activity.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("File extension not supported for {path}: provide a .csv or .txt file")]
    UnsupportedExtension { path: String },

    #[error("Failed to parse CSV input: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised while writing the result artifacts
///
/// These are reported but never escalate to the process exit status; the
/// console summary has already been printed by the time they can occur.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to render visualisation: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for input operations
pub type InputResult<T> = std::result::Result<T, InputError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use input::read_domains;
pub use output::{render_charts, write_results, ProbeRecord, RunStats};
pub use probe::{build_http_client, ProbeOutcome, ProbeTargets, Prober};
pub use survey::{run_survey, SurveyReport};
