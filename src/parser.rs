//! Input file parsing and validation.
//!
//! Splits the input into its `[Stations]` and `[Charger Availability
//! Reports]` sections, builds the station network and validates every
//! report line. The first problem aborts parsing; nothing partial is
//! returned.

use crate::config::{UnknownChargerPolicy, UptimeConfig};
use crate::constants::{
    DOWN_TOKEN, MIN_STATION_TOKENS, REPORT_TOKENS, REPORTS_SECTION, STATIONS_SECTION, UP_TOKEN,
};
use crate::error::{Result, UptimeError};
use crate::models::{ChargerReport, StationNetwork};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Validated parser output
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    pub network: StationNetwork,
    pub reports: Vec<ChargerReport>,

    /// Reports dropped under `UnknownChargerPolicy::Ignore`
    pub ignored_reports: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Stations,
    Reports,
}

/// A non-blank content line with its 1-based line number
type NumberedLine<'a> = (usize, &'a str);

/// Read an input file fully into memory and parse it
pub fn parse_file(path: &Path, config: &UptimeConfig) -> Result<ParsedInput> {
    let text = fs::read_to_string(path).map_err(|source| UptimeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());
    parse_input(&text, config)
}

/// Parse input text into a station network and a list of reports
pub fn parse_input(text: &str, config: &UptimeConfig) -> Result<ParsedInput> {
    for section in [STATIONS_SECTION, REPORTS_SECTION] {
        if !text.lines().any(|line| line.trim() == section) {
            return Err(UptimeError::missing_section(section));
        }
    }

    let (station_lines, report_lines) = split_sections(text)?;
    debug!(
        "Found {} station lines and {} report lines",
        station_lines.len(),
        report_lines.len()
    );

    let mut network = StationNetwork::new();
    for (line_no, line) in station_lines {
        let (station_id, charger_ids) = parse_station_line(line).map_err(|e| e.at_line(line_no))?;
        if network.station(station_id).is_some() {
            debug!(
                "Station {} redeclared on line {}, replacing its chargers",
                station_id, line_no
            );
        }
        network.declare(station_id, charger_ids);
    }

    let mut reports = Vec::with_capacity(report_lines.len());
    let mut ignored_reports = 0;
    for (line_no, line) in report_lines {
        let report = parse_report_line(line).map_err(|e| e.at_line(line_no))?;

        if !network.is_declared_charger(report.charger_id()) {
            match config.unknown_chargers {
                UnknownChargerPolicy::Reject => {
                    return Err(UptimeError::UnknownChargerReference {
                        line: line_no,
                        charger_id: report.charger_id().to_string(),
                    });
                }
                UnknownChargerPolicy::Ignore => {
                    warn!(
                        "Ignoring report on line {} for undeclared charger {}",
                        line_no,
                        report.charger_id()
                    );
                    ignored_reports += 1;
                    continue;
                }
            }
        }

        reports.push(report);
    }

    info!(
        "Parsed {} stations, {} chargers and {} reports",
        network.len(),
        network.charger_count(),
        reports.len()
    );

    Ok(ParsedInput {
        network,
        reports,
        ignored_reports,
    })
}

/// Assign every non-blank line to the section header above it
///
/// Lines before the first header belong to no section and are skipped.
fn split_sections(text: &str) -> Result<(Vec<NumberedLine<'_>>, Vec<NumberedLine<'_>>)> {
    let mut current = None;
    let mut seen_stations = false;
    let mut seen_reports = false;
    let mut station_lines = Vec::new();
    let mut report_lines = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if line == STATIONS_SECTION || line == REPORTS_SECTION {
            let (section, seen) = if line == STATIONS_SECTION {
                (Section::Stations, &mut seen_stations)
            } else {
                (Section::Reports, &mut seen_reports)
            };
            if *seen {
                return Err(UptimeError::malformed(
                    line_no,
                    format!("duplicate section header {}", line),
                ));
            }
            *seen = true;
            current = Some(section);
            continue;
        }

        match current {
            Some(Section::Stations) => station_lines.push((line_no, line)),
            Some(Section::Reports) => report_lines.push((line_no, line)),
            None => warn!("Skipping line {} before the first section header", line_no),
        }
    }

    Ok((station_lines, report_lines))
}

/// Parse `station_id charger_id+`
///
/// Errors carry line 0 and are relocated by the caller.
pub fn parse_station_line(line: &str) -> Result<(&str, Vec<&str>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_STATION_TOKENS {
        return Err(UptimeError::malformed(
            0,
            format!(
                "station line needs a station id and at least one charger, found {} token(s)",
                tokens.len()
            ),
        ));
    }

    Ok((tokens[0], tokens[1..].to_vec()))
}

/// Parse `charger_id start end true|false`
///
/// Errors carry line 0 and are relocated by the caller.
pub fn parse_report_line(line: &str) -> Result<ChargerReport> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != REPORT_TOKENS {
        return Err(UptimeError::malformed(
            0,
            format!(
                "report line needs {} tokens, found {}",
                REPORT_TOKENS,
                tokens.len()
            ),
        ));
    }

    let start = parse_timestamp(tokens[1], "start")?;
    let end = parse_timestamp(tokens[2], "end")?;
    let up = parse_up_token(tokens[3])?;

    ChargerReport::new(tokens[0], start, end, up)
}

fn parse_timestamp(token: &str, field: &str) -> Result<u64> {
    token.parse::<u64>().map_err(|_| {
        UptimeError::malformed(
            0,
            format!("{} time '{}' is not a non-negative integer", field, token),
        )
    })
}

fn parse_up_token(token: &str) -> Result<bool> {
    match token {
        UP_TOKEN => Ok(true),
        DOWN_TOKEN => Ok(false),
        _ => Err(UptimeError::InvalidBooleanToken {
            line: 0,
            token: token.to_string(),
        }),
    }
}
