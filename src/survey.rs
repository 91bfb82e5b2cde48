//! Survey batch loop
//!
//! Probes each domain strictly sequentially, one request in flight at a
//! time, collecting the result rows and running statistics.

use crate::output::{ProbeRecord, RunStats};
use crate::probe::Prober;

/// Everything a finished survey produced, short of the artifacts on disk
#[derive(Debug)]
pub struct SurveyReport {
    /// Final counters and per-path tally
    pub stats: RunStats,

    /// Ordered result rows, one per input domain
    pub records: Vec<ProbeRecord>,
}

/// Probes every domain in order and aggregates the outcomes
///
/// Domains are taken as-is from the input; a probe that hits a transport
/// error is recovered locally and the loop moves on to the next domain.
pub async fn run_survey(prober: &Prober, domains: &[String]) -> SurveyReport {
    let mut stats = RunStats::new(&prober.targets().paths);
    let mut records = Vec::with_capacity(domains.len());

    for domain in domains {
        let outcome = prober.probe(domain).await;
        stats.record(&outcome);
        records.push(ProbeRecord::new(domain.clone(), &outcome));
    }

    SurveyReport { stats, records }
}
