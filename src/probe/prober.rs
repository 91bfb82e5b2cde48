//! Per-domain probe logic

use super::build_http_client;
use crate::Result;
use reqwest::Client;

/// Where to look for security.txt on each domain
///
/// An explicit value rather than a process-wide constant so that tests can
/// point the prober at a stub server with its own scheme and paths.
#[derive(Debug, Clone)]
pub struct ProbeTargets {
    /// URL scheme, `https` in production
    pub scheme: String,

    /// Prefix prepended to the domain when building the host, `www.` in production
    pub host_prefix: String,

    /// Ordered candidate path prefixes, tried first to last
    pub paths: Vec<String>,

    /// The well-known file name
    pub filename: String,
}

impl Default for ProbeTargets {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host_prefix: "www.".to_string(),
            paths: vec!["/.well-known/".to_string(), "/".to_string()],
            filename: "security.txt".to_string(),
        }
    }
}

impl ProbeTargets {
    /// Builds the candidate URL for a domain and path index
    pub fn candidate_url(&self, domain: &str, path_index: usize) -> String {
        format!(
            "{}://{}{}{}{}",
            self.scheme, self.host_prefix, domain, self.paths[path_index], self.filename
        )
    }
}

/// Result of probing one domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// A candidate URL answered with a success status
    Found {
        /// The URL that answered
        url: String,
        /// Index into the candidate path list
        path_index: usize,
    },

    /// Every candidate URL answered with a non-success status
    NotFound,

    /// A transport error aborted the path walk
    Errored {
        /// The URL being checked when the error occurred
        url: String,
        /// Error description
        message: String,
    },
}

/// Probes domains for a security.txt file
pub struct Prober {
    client: Client,
    targets: ProbeTargets,
}

impl Prober {
    /// Creates a prober with the given targets
    pub fn new(targets: ProbeTargets) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self { client, targets })
    }

    /// Returns the configured probe targets
    pub fn targets(&self) -> &ProbeTargets {
        &self.targets
    }

    /// Probes one domain, walking the candidate paths in order
    ///
    /// Stops at the first success status, recording the path and URL.
    /// A non-success status moves on to the next path. A transport error
    /// (DNS failure, timeout, connection refused, TLS) aborts the walk
    /// immediately, without retry.
    pub async fn probe(&self, domain: &str) -> ProbeOutcome {
        for path_index in 0..self.targets.paths.len() {
            let url = self.targets.candidate_url(domain, path_index);
            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!("Found at {}", url);
                    return ProbeOutcome::Found { url, path_index };
                }
                Ok(response) => {
                    tracing::debug!("Nothing found at {} ({})", url, response.status());
                }
                Err(e) => {
                    let message = describe_error(&e);
                    tracing::debug!("Error checking {}: {}", url, message);
                    return ProbeOutcome::Errored { url, message };
                }
            }
        }
        ProbeOutcome::NotFound
    }
}

/// Classifies a reqwest error into a short description
fn describe_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "connection failed".to_string()
    } else {
        e.to_string()
    }
}
