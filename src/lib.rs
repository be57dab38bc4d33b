//! Station Uptime Library
//!
//! Computes, for each charging station in a network, the percentage of its
//! reporting window during which at least one of its chargers was up.
//!
//! This library provides tools for:
//! - Parsing the `[Stations]` / `[Charger Availability Reports]` input format
//!   with strict line-level validation
//! - Merging overlapping up-intervals per station so shared up time counts once
//! - Floored integer uptime percentages with explicit empty and
//!   instantaneous window policies
//! - Deterministic output ordering and an optional run summary

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod processor;
pub mod uptime;

// Re-export commonly used types
pub use config::UptimeConfig;
pub use error::{Result, UptimeError};
pub use models::{ChargerReport, StationConfig, StationNetwork, StationUptime, UptimeStats};
pub use processor::{UptimeRun, process_file, process_input};
