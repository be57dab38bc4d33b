//! Core data structures for station uptime calculation.
//!
//! Defines the charger report record, station declarations, the station
//! network index built by the parser, and the per-station results and run
//! statistics produced by the uptime engine.

use crate::error::{Result, UptimeError};
use std::collections::HashMap;

// =============================================================================
// Charger Reports
// =============================================================================

/// One availability report for a single charger
///
/// Covers the closed interval `[start, end]` during which the charger was
/// asserted up or down. Zero-length reports (`start == end`) are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargerReport {
    charger_id: String,
    start: u64,
    end: u64,
    up: bool,
}

impl ChargerReport {
    /// Create a new report, rejecting `start > end`
    ///
    /// The returned error carries line 0; callers that know the source line
    /// attach it with [`UptimeError::at_line`].
    pub fn new(charger_id: impl Into<String>, start: u64, end: u64, up: bool) -> Result<Self> {
        if start > end {
            return Err(UptimeError::InvalidTimeRange {
                line: 0,
                start,
                end,
            });
        }

        Ok(Self {
            charger_id: charger_id.into(),
            start,
            end,
            up,
        })
    }

    pub fn charger_id(&self) -> &str {
        &self.charger_id
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn is_up(&self) -> bool {
        self.up
    }
}

// =============================================================================
// Station Declarations
// =============================================================================

/// A station and the chargers it is composed of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationConfig {
    pub station_id: String,

    /// Charger ids in first declaration order, without duplicates
    pub charger_ids: Vec<String>,
}

impl StationConfig {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            charger_ids: Vec::new(),
        }
    }

    /// Add a charger, returning false if it was already listed
    pub fn add_charger(&mut self, charger_id: impl Into<String>) -> bool {
        let charger_id = charger_id.into();
        if self.contains(&charger_id) {
            return false;
        }
        self.charger_ids.push(charger_id);
        true
    }

    pub fn contains(&self, charger_id: &str) -> bool {
        self.charger_ids.iter().any(|id| id == charger_id)
    }
}

/// All declared stations, indexed for charger lookups
///
/// Stations keep their first declaration order. A charger may be listed by
/// more than one station; its reports then count toward each of them.
#[derive(Debug, Clone, Default)]
pub struct StationNetwork {
    stations: Vec<StationConfig>,
    station_index: HashMap<String, usize>,
    charger_index: HashMap<String, Vec<usize>>,
}

impl StationNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station with its chargers
    ///
    /// Redeclaring a station id replaces its charger set; the station keeps
    /// its first position. Returns the size of the new charger set.
    pub fn declare<I, S>(&mut self, station_id: &str, charger_ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let position = match self.station_index.get(station_id) {
            Some(&position) => {
                self.release_chargers(position);
                position
            }
            None => {
                self.stations.push(StationConfig::new(station_id));
                let position = self.stations.len() - 1;
                self.station_index.insert(station_id.to_string(), position);
                position
            }
        };

        let mut added = 0;
        for charger_id in charger_ids {
            let charger_id = charger_id.into();
            if self.stations[position].add_charger(charger_id.clone()) {
                self.charger_index
                    .entry(charger_id)
                    .or_default()
                    .push(position);
                added += 1;
            }
        }
        added
    }

    /// Drop a station's chargers from the charger index and clear its set
    fn release_chargers(&mut self, position: usize) {
        for charger_id in std::mem::take(&mut self.stations[position].charger_ids) {
            if let Some(positions) = self.charger_index.get_mut(&charger_id) {
                positions.retain(|&p| p != position);
                if positions.is_empty() {
                    self.charger_index.remove(&charger_id);
                }
            }
        }
    }

    /// Stations in first declaration order
    pub fn stations(&self) -> &[StationConfig] {
        &self.stations
    }

    pub fn station(&self, station_id: &str) -> Option<&StationConfig> {
        self.station_index
            .get(station_id)
            .map(|&position| &self.stations[position])
    }

    /// Whether any station lists this charger
    pub fn is_declared_charger(&self, charger_id: &str) -> bool {
        self.charger_index.contains_key(charger_id)
    }

    /// Declaration positions of the stations listing this charger
    pub fn station_positions(&self, charger_id: &str) -> &[usize] {
        self.charger_index
            .get(charger_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of distinct charger ids across all stations
    pub fn charger_count(&self) -> usize {
        self.charger_index.len()
    }
}

// =============================================================================
// Results
// =============================================================================

/// Uptime result for one station
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationUptime {
    pub station_id: String,

    /// Floored uptime percentage in `[0, 100]`
    pub percentage: u8,

    /// Time with at least one charger up, after merging overlaps
    pub covered: u64,

    /// Length of the reporting window
    pub window: u64,

    /// Reports attributed to this station
    pub report_count: usize,
}

impl StationUptime {
    /// Result for a station without any reports
    pub fn unreported(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            percentage: 0,
            covered: 0,
            window: 0,
            report_count: 0,
        }
    }
}

/// Aggregate statistics for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UptimeStats {
    pub stations: usize,
    pub chargers: usize,
    pub reports: usize,
    pub ignored_reports: usize,
    pub stations_without_reports: usize,
    pub fully_up_stations: usize,
}

impl UptimeStats {
    /// Collect statistics from parser output and engine results
    pub fn collect(
        network: &StationNetwork,
        reports: &[ChargerReport],
        ignored_reports: usize,
        results: &[StationUptime],
    ) -> Self {
        Self {
            stations: network.len(),
            chargers: network.charger_count(),
            reports: reports.len(),
            ignored_reports,
            stations_without_reports: results.iter().filter(|r| r.report_count == 0).count(),
            fully_up_stations: results
                .iter()
                .filter(|r| r.percentage == crate::constants::MAX_PERCENTAGE)
                .count(),
        }
    }

    /// Mean uptime across stations, 0 when there are none
    pub fn mean_percentage(results: &[StationUptime]) -> f64 {
        if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.percentage as f64).sum::<f64>() / results.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_rejects_inverted_range() {
        let err = ChargerReport::new("1000", 100, 0, true).unwrap_err();
        assert!(matches!(
            err,
            UptimeError::InvalidTimeRange {
                start: 100,
                end: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_duration_report_is_valid() {
        let report = ChargerReport::new("1000", 100, 100, true).unwrap();
        assert_eq!(report.start(), report.end());
        assert!(report.is_up());
        assert_eq!(report.charger_id(), "1000");
    }

    #[test]
    fn test_station_collapses_duplicate_chargers() {
        let mut station = StationConfig::new("0");
        assert!(station.add_charger("1000"));
        assert!(station.add_charger("1001"));
        assert!(!station.add_charger("1000"));
        assert_eq!(station.charger_ids, vec!["1000", "1001"]);
    }

    #[test]
    fn test_network_redeclaration_replaces_chargers() {
        let mut network = StationNetwork::new();
        network.declare("0", ["1000", "1003"]);
        network.declare("1", ["1001"]);
        let added = network.declare("0", ["1000", "1002"]);

        assert_eq!(added, 2);
        assert_eq!(network.len(), 2);
        assert_eq!(network.stations()[0].station_id, "0");
        assert_eq!(network.stations()[0].charger_ids, vec!["1000", "1002"]);
        assert_eq!(network.station_positions("1000"), &[0]);
        assert!(!network.is_declared_charger("1003"));
        assert_eq!(network.charger_count(), 3);
    }

    #[test]
    fn test_redeclaration_keeps_shared_charger_for_other_station() {
        let mut network = StationNetwork::new();
        network.declare("A", ["shared"]);
        network.declare("B", ["shared"]);
        network.declare("A", ["a1"]);

        assert_eq!(network.station_positions("shared"), &[1]);
        assert_eq!(network.station_positions("a1"), &[0]);
    }

    #[test]
    fn test_charger_shared_between_stations() {
        let mut network = StationNetwork::new();
        network.declare("A", ["shared", "a1"]);
        network.declare("B", ["shared"]);

        assert_eq!(network.station_positions("shared"), &[0, 1]);
        assert!(network.is_declared_charger("a1"));
        assert!(!network.is_declared_charger("missing"));
        assert!(network.station_positions("missing").is_empty());
    }

    #[test]
    fn test_stats_collection() {
        let mut network = StationNetwork::new();
        network.declare("0", ["1000"]);
        network.declare("1", ["1001"]);
        let reports = vec![ChargerReport::new("1000", 0, 100, true).unwrap()];
        let results = vec![
            StationUptime {
                station_id: "0".to_string(),
                percentage: 100,
                covered: 100,
                window: 100,
                report_count: 1,
            },
            StationUptime::unreported("1"),
        ];

        let stats = UptimeStats::collect(&network, &reports, 2, &results);
        assert_eq!(stats.stations, 2);
        assert_eq!(stats.chargers, 2);
        assert_eq!(stats.reports, 1);
        assert_eq!(stats.ignored_reports, 2);
        assert_eq!(stats.stations_without_reports, 1);
        assert_eq!(stats.fully_up_stations, 1);
        assert_eq!(UptimeStats::mean_percentage(&results), 50.0);
        assert_eq!(UptimeStats::mean_percentage(&[]), 0.0);
    }
}
