//! Running statistics for a survey
//!
//! The aggregator keeps counters updated as the prober emits outcomes.
//! Transport errors land in the not-found bucket for row and invariant
//! purposes (so `found + not_found == total` always holds) while a
//! distinct errored counter keeps them visible in the summary.

use crate::probe::ProbeOutcome;

/// Per-path hit counts
///
/// The candidate path set is fixed for a run, so this is an ordered list
/// of paths with a same-length array of counts indexed in parallel.
#[derive(Debug, Clone)]
pub struct PathTally {
    paths: Vec<String>,
    counts: Vec<u64>,
}

impl PathTally {
    /// Creates a tally with all counts at zero
    pub fn new(paths: &[String]) -> Self {
        Self {
            paths: paths.to_vec(),
            counts: vec![0; paths.len()],
        }
    }

    /// Increments the count for one path
    pub fn record_hit(&mut self, path_index: usize) {
        self.counts[path_index] += 1;
    }

    /// Returns the hit counts, in path order
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Iterates over (path, count) pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.paths
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

/// Counters for one survey run
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Domains probed
    pub total: u64,

    /// Domains where a candidate URL answered with success
    pub found: u64,

    /// Domains where no candidate URL answered with success, errored included
    pub not_found: u64,

    /// Domains whose path walk was aborted by a transport error
    pub errored: u64,

    /// Hits per candidate path
    pub path_tally: PathTally,
}

impl RunStats {
    /// Creates empty statistics for the given candidate paths
    pub fn new(paths: &[String]) -> Self {
        Self {
            total: 0,
            found: 0,
            not_found: 0,
            errored: 0,
            path_tally: PathTally::new(paths),
        }
    }

    /// Records one probe outcome
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.total += 1;
        match outcome {
            ProbeOutcome::Found { path_index, .. } => {
                self.found += 1;
                self.path_tally.record_hit(*path_index);
            }
            ProbeOutcome::NotFound => {
                self.not_found += 1;
            }
            ProbeOutcome::Errored { .. } => {
                self.not_found += 1;
                self.errored += 1;
            }
        }
    }

    /// Domains that completed the path walk without a transport error
    pub fn checked_without_errors(&self) -> u64 {
        self.total - self.errored
    }

    /// Prints the run summary to stdout
    pub fn print_summary(&self) {
        println!("\nTotal domains checked for security.txt: {}", self.total);
        println!("Found: {}", self.found);
        println!("Not found: {}", self.not_found);
        println!("Error checking domain: {}", self.errored);
        for (path, count) in self.path_tally.iter() {
            println!("Number of times security.txt found in {}: {}", path, count);
        }
    }
}
