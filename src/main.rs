//! sectxt-survey main entry point
//!
//! This is the command-line interface for the security.txt survey tool.

use clap::Parser;
use sectxt_survey::{read_domains, render_charts, run_survey, write_results, ProbeTargets, Prober};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// sectxt-survey: check domains for a published security.txt
///
/// Probes every domain in the input list for a security.txt file at the
/// well-known paths, writes a dated result CSV, and renders a pie chart
/// visualisation of the outcomes.
#[derive(Parser, Debug)]
#[command(name = "sectxt-survey")]
#[command(version = "1.0.0")]
#[command(about = "Check domains for a published security.txt", long_about = None)]
struct Cli {
    /// File with domains to check. Available formats: .csv, .txt
    #[arg(short, long, default_value = "domains.csv")]
    file: PathBuf,

    /// Echo each probe attempt to the console
    #[arg(short, long)]
    verbose: bool,

    /// Directory to save the output files in, joined under the top-level
    /// data folder. Could be a top level domain like DE, CO.UK or COM.
    #[arg(short, long)]
    directory: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    // Load the domain list; any input error is fatal and happens before
    // the first network request
    let domains = match read_domains(&cli.file) {
        Ok(domains) => domains,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e.into());
        }
    };
    tracing::info!(
        "Loaded {} domains from {}",
        domains.len(),
        cli.file.display()
    );

    // Probe every domain sequentially
    let prober = Prober::new(ProbeTargets::default())?;
    let report = run_survey(&prober, &domains).await;

    // Print all counters
    report.stats.print_summary();

    // Write the artifacts; failures here are logged, never escalated
    let date = chrono::Local::now().date_naive();
    let directory = Path::new("data").join(&cli.directory);

    match write_results(&report.records, date, &directory) {
        Ok(path) => println!("\nResults saved to {}", path.display()),
        Err(e) => tracing::error!("{}", e),
    }
    match render_charts(&report.stats, date, &directory) {
        Ok(path) => println!("Visualisation saved to {}", path.display()),
        Err(e) => tracing::error!("{}", e),
    }

    Ok(())
}

/// Sets up the tracing subscriber based on the verbose flag
///
/// Verbose mode surfaces the per-probe debug events.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sectxt_survey=debug,info")
    } else {
        EnvFilter::new("sectxt_survey=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
