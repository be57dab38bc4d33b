//! Processing pipeline.
//!
//! Ties the parser, the uptime engine and result ordering together. Input
//! is validated in full before any uptime is computed, so a run either
//! yields every station's result or an error.

use crate::config::UptimeConfig;
use crate::error::Result;
use crate::models::{StationUptime, UptimeStats};
use crate::output::order_results;
use crate::parser::{ParsedInput, parse_file, parse_input};
use crate::uptime::compute;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Output of one complete run
#[derive(Debug, Clone)]
pub struct UptimeRun {
    /// Station results in the configured output order
    pub results: Vec<StationUptime>,
    pub stats: UptimeStats,
}

/// Parse and process an input file
pub fn process_file(path: &Path, config: &UptimeConfig) -> Result<UptimeRun> {
    let parsed = parse_file(path, config)?;
    Ok(process_parsed(parsed, config))
}

/// Parse and process input text
pub fn process_input(text: &str, config: &UptimeConfig) -> Result<UptimeRun> {
    let parsed = parse_input(text, config)?;
    Ok(process_parsed(parsed, config))
}

/// Compute uptime for already validated input
pub fn process_parsed(parsed: ParsedInput, config: &UptimeConfig) -> UptimeRun {
    let start_time = Instant::now();

    let mut results = compute(&parsed.network, &parsed.reports, config);
    let stats = UptimeStats::collect(
        &parsed.network,
        &parsed.reports,
        parsed.ignored_reports,
        &results,
    );
    order_results(&mut results, config.output_order);

    info!(
        "Computed uptime for {} stations in {}us",
        results.len(),
        start_time.elapsed().as_micros()
    );

    UptimeRun { results, stats }
}
