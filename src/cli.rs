//! Command-line interface components.

use crate::config::{OutputOrder, UptimeConfig};
use crate::constants::DEFAULT_LOG_LEVEL;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "station-uptime")]
#[command(about = "Compute charging station uptime percentages from charger availability reports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input file with [Stations] and [Charger Availability Reports] sections
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Skip reports for chargers no station declares instead of failing
    #[arg(long)]
    pub ignore_unknown_chargers: bool,

    /// Let a down report remove earlier up time reported by the same charger
    #[arg(long)]
    pub down_overrides_up: bool,

    /// Emit stations sorted by id instead of declaration order
    #[arg(long)]
    pub sort_by_id: bool,

    /// Print a run summary to stderr
    #[arg(long)]
    pub summary: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the run configuration from the flags
    pub fn to_config(&self) -> UptimeConfig {
        let mut config = UptimeConfig::default();
        if self.ignore_unknown_chargers {
            config = config.with_ignored_unknown_chargers();
        }
        if self.down_overrides_up {
            config = config.with_down_carve_out();
        }
        if self.sort_by_id {
            config = config.with_output_order(OutputOrder::StationId);
        }
        if self.summary {
            config = config.with_summary();
        }
        config
    }

    /// Log level implied by `-q` and the `-v` count
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
