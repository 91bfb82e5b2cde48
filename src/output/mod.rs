//! Output module for survey results
//!
//! This module handles:
//! - Aggregating probe outcomes into run statistics
//! - Writing the dated result CSV
//! - Rendering the pie chart visualisation

mod chart;
mod csv_writer;
pub mod stats;

pub use chart::{chart_file_name, render_charts};
pub use csv_writer::{result_file_name, write_results, ProbeRecord};
pub use stats::{PathTally, RunStats};
