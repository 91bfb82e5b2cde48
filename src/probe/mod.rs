//! HTTP probing for security.txt candidates
//!
//! This module contains the per-domain probe logic:
//! - Building the HTTP client with a proper user agent
//! - The ordered candidate-path walk over each domain
//! - Transport error classification

mod client;
mod prober;

pub use client::build_http_client;
pub use prober::{ProbeOutcome, ProbeTargets, Prober};
