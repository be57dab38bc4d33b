//! Configuration management for uptime calculation.
//!
//! Collects the policy decisions that the input format leaves open: what to
//! do with reports for undeclared chargers, whether down reports override
//! up time, and the order stations are emitted in.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Handling of reports whose charger is not declared by any station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownChargerPolicy {
    /// Abort parsing with `UnknownChargerReference`
    #[default]
    Reject,
    /// Drop the report and log a warning
    Ignore,
}

/// How down reports affect covered time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DownReportPolicy {
    /// Down reports only widen the reporting window
    #[default]
    Ignore,
    /// A down report removes overlapping up time reported earlier by the same charger
    CarveOut,
}

/// Order in which station results are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputOrder {
    /// First declaration order in the `[Stations]` section
    #[default]
    Declaration,
    /// Station id order, numeric ids compared as numbers
    StationId,
}

/// Main configuration for a station uptime run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UptimeConfig {
    /// Policy for reports referencing undeclared chargers
    pub unknown_chargers: UnknownChargerPolicy,

    /// Policy for down reports during coverage calculation
    pub down_reports: DownReportPolicy,

    /// Output ordering of station results
    pub output_order: OutputOrder,

    /// Print a run summary to stderr after the results
    pub summary: bool,
}

impl UptimeConfig {
    /// Skip reports for undeclared chargers instead of failing
    pub fn with_ignored_unknown_chargers(mut self) -> Self {
        self.unknown_chargers = UnknownChargerPolicy::Ignore;
        self
    }

    /// Let down reports remove earlier up time of the same charger
    pub fn with_down_carve_out(mut self) -> Self {
        self.down_reports = DownReportPolicy::CarveOut;
        self
    }

    /// Emit stations sorted by id
    pub fn with_output_order(mut self, order: OutputOrder) -> Self {
        self.output_order = order;
        self
    }

    /// Enable the stderr run summary
    pub fn with_summary(mut self) -> Self {
        self.summary = true;
        self
    }

    /// Log the effective configuration
    pub fn log_effective(&self) {
        debug!(
            "Uptime config: unknown_chargers={:?}, down_reports={:?}, output_order={:?}, summary={}",
            self.unknown_chargers, self.down_reports, self.output_order, self.summary
        );
    }
}
