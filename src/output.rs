//! Result rendering.
//!
//! Results go to stdout as `station_id percentage` lines. The optional run
//! summary is coloured and goes to stderr so it never mixes with results.

use crate::config::OutputOrder;
use crate::models::{StationUptime, UptimeStats};
use colored::*;
use std::cmp::Ordering;
use std::io::{self, Write};

/// Put results in the configured order
///
/// Declaration order is what the engine already produces.
pub fn order_results(results: &mut [StationUptime], order: OutputOrder) {
    match order {
        OutputOrder::Declaration => {}
        OutputOrder::StationId => {
            results.sort_by(|a, b| compare_station_ids(&a.station_id, &b.station_id))
        }
    }
}

/// Compare ids numerically when both are all digits, lexically otherwise
///
/// Numeric ids sort before non-numeric ones.
pub fn compare_station_ids(a: &str, b: &str) -> Ordering {
    let is_numeric = |s: &str| !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit());

    match (is_numeric(a), is_numeric(b)) {
        (true, true) => {
            let a_digits = a.trim_start_matches('0');
            let b_digits = b.trim_start_matches('0');
            a_digits
                .len()
                .cmp(&b_digits.len())
                .then_with(|| a_digits.cmp(b_digits))
                .then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

/// Render all results as output lines
pub fn render_results(results: &[StationUptime]) -> String {
    results
        .iter()
        .map(|r| format!("{} {}\n", r.station_id, r.percentage))
        .collect()
}

/// Write all results in one go
pub fn write_results<W: Write>(writer: &mut W, results: &[StationUptime]) -> io::Result<()> {
    writer.write_all(render_results(results).as_bytes())?;
    writer.flush()
}

/// Build the human-readable run summary
pub fn format_summary(stats: &UptimeStats, results: &[StationUptime]) -> String {
    let mut lines = vec![
        format!("{}", "Uptime Summary".bright_green().bold()),
        format!(
            "  {} {}",
            "Stations:".bright_cyan(),
            stats.stations.to_string().bright_white()
        ),
        format!(
            "  {} {}",
            "Chargers:".bright_cyan(),
            stats.chargers.to_string().bright_white()
        ),
        format!(
            "  {} {}",
            "Reports:".bright_cyan(),
            stats.reports.to_string().bright_white()
        ),
    ];

    if stats.ignored_reports > 0 {
        lines.push(format!(
            "  {} {}",
            "Ignored reports:".bright_yellow(),
            stats.ignored_reports.to_string().bright_yellow().bold()
        ));
    }
    if stats.stations_without_reports > 0 {
        lines.push(format!(
            "  {} {}",
            "Stations without reports:".bright_red(),
            stats.stations_without_reports.to_string().bright_red().bold()
        ));
    }

    lines.push(format!(
        "  {} {}",
        "Fully up stations:".bright_cyan(),
        stats.fully_up_stations.to_string().bright_white()
    ));
    lines.push(format!(
        "  {} {:.1}%",
        "Mean uptime:".bright_cyan(),
        UptimeStats::mean_percentage(results)
    ));

    for result in results {
        lines.push(format!(
            "    {} {}% ({} of {} over {} reports)",
            result.station_id.bright_white(),
            result.percentage,
            result.covered,
            result.window,
            result.report_count
        ));
    }

    lines.join("\n")
}

/// Print the run summary to stderr
pub fn print_summary(stats: &UptimeStats, results: &[StationUptime]) {
    eprintln!("{}", format_summary(stats, results));
}
