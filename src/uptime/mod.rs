//! Uptime engine.
//!
//! Computes, for every declared station, the share of its reporting window
//! during which at least one of its chargers was up. The engine is a pure
//! function of the station network, the validated reports and the
//! configuration; it never fails.
//!
//! Per station:
//! - the working set is every report of any charger the station lists
//! - the window runs from the earliest start to the latest end in that set
//! - up intervals are merged so overlapping up time counts once
//! - the percentage is `floor(100 * covered / window)`

pub mod carve;
pub mod merge;
pub mod window;

#[cfg(test)]
pub mod tests;

use self::carve::carved_up_intervals;
use self::merge::{Interval, covered_duration, merge_intervals};
use self::window::{reporting_window, uptime_percentage};

use crate::config::{DownReportPolicy, UptimeConfig};
use crate::constants::MAX_PERCENTAGE;
use crate::models::{ChargerReport, StationConfig, StationNetwork, StationUptime};
use tracing::debug;

/// Compute uptime for every station, in declaration order
pub fn compute(
    network: &StationNetwork,
    reports: &[ChargerReport],
    config: &UptimeConfig,
) -> Vec<StationUptime> {
    let working_sets = group_by_station(network, reports);

    network
        .stations()
        .iter()
        .zip(working_sets)
        .map(|(station, working_set)| station_uptime(station, &working_set, config.down_reports))
        .collect()
}

/// Attribute each report to every station listing its charger
fn group_by_station<'a>(
    network: &StationNetwork,
    reports: &'a [ChargerReport],
) -> Vec<Vec<&'a ChargerReport>> {
    let mut working_sets = vec![Vec::new(); network.len()];
    for report in reports {
        for &position in network.station_positions(report.charger_id()) {
            working_sets[position].push(report);
        }
    }
    working_sets
}

/// Uptime of a single station from its working set
pub fn station_uptime(
    station: &StationConfig,
    working_set: &[&ChargerReport],
    policy: DownReportPolicy,
) -> StationUptime {
    let Some(window) = reporting_window(working_set) else {
        debug!("Station {} has no reports", station.station_id);
        return StationUptime::unreported(station.station_id.clone());
    };

    let up_intervals = up_intervals(working_set, policy);

    let (covered, percentage) = if window.is_empty() {
        // Instantaneous window: up at that instant counts as fully up
        let percentage = if up_intervals.is_empty() {
            0
        } else {
            MAX_PERCENTAGE
        };
        (0, percentage)
    } else if up_intervals.is_empty() {
        (0, 0)
    } else {
        let merged = merge_intervals(up_intervals);
        let covered = covered_duration(&merged);
        debug_assert!(covered <= window.len());
        (covered, uptime_percentage(covered, window.len()))
    };

    debug!(
        "Station {}: {} reports, window [{}, {}], covered {} -> {}%",
        station.station_id,
        working_set.len(),
        window.start,
        window.end,
        covered,
        percentage
    );

    StationUptime {
        station_id: station.station_id.clone(),
        percentage,
        covered,
        window: window.len(),
        report_count: working_set.len(),
    }
}

fn up_intervals(working_set: &[&ChargerReport], policy: DownReportPolicy) -> Vec<Interval> {
    match policy {
        DownReportPolicy::Ignore => working_set
            .iter()
            .filter(|r| r.is_up())
            .map(|&r| Interval::from(r))
            .collect(),
        DownReportPolicy::CarveOut => carved_up_intervals(working_set),
    }
}
