//! Tests for the uptime engine
//!
//! Covers the documented scenarios, edge-case policies and the properties
//! the merge must preserve regardless of input order.


use crate::config::UptimeConfig;
use crate::models::{ChargerReport, StationNetwork, StationUptime};
use crate::uptime::compute;

/// Build a network from `(station, chargers)` pairs
pub fn network(stations: &[(&str, &[&str])]) -> StationNetwork {
    let mut network = StationNetwork::new();
    for (station_id, chargers) in stations {
        network.declare(station_id, chargers.iter().copied());
    }
    network
}

/// Build reports from `(charger, start, end, up)` tuples
pub fn reports(rows: &[(&str, u64, u64, bool)]) -> Vec<ChargerReport> {
    rows.iter()
        .map(|&(charger, start, end, up)| ChargerReport::new(charger, start, end, up).unwrap())
        .collect()
}

/// `(station_id, percentage)` pairs from a default-config run
pub fn percentages(
    stations: &[(&str, &[&str])],
    rows: &[(&str, u64, u64, bool)],
) -> Vec<(String, u8)> {
    percentages_with(stations, rows, &UptimeConfig::default())
}

pub fn percentages_with(
    stations: &[(&str, &[&str])],
    rows: &[(&str, u64, u64, bool)],
    config: &UptimeConfig,
) -> Vec<(String, u8)> {
    compute(&network(stations), &reports(rows), config)
        .into_iter()
        .map(|StationUptime { station_id, percentage, .. }| (station_id, percentage))
        .collect()
}

/// Expected `(station_id, percentage)` pairs
pub fn expected(pairs: &[(&str, u8)]) -> Vec<(String, u8)> {
    pairs.iter().map(|&(id, p)| (id.to_string(), p)).collect()
}
