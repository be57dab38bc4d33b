//! Application constants for the station uptime calculator
//!
//! Section headers, literal tokens, exit codes and logging defaults used
//! throughout the parser, engine and command-line driver.

// =============================================================================
// Input Format
// =============================================================================

/// Header line opening the station declarations
pub const STATIONS_SECTION: &str = "[Stations]";

/// Header line opening the charger availability reports
pub const REPORTS_SECTION: &str = "[Charger Availability Reports]";

/// Literal token marking a report as up
pub const UP_TOKEN: &str = "true";

/// Literal token marking a report as down
pub const DOWN_TOKEN: &str = "false";

/// Minimum tokens on a station line: the station id plus one charger
pub const MIN_STATION_TOKENS: usize = 2;

/// Exact token count of a report line: charger, start, end, up flag
pub const REPORT_TOKENS: usize = 4;

// =============================================================================
// Uptime Calculation
// =============================================================================

/// Scale of the reported uptime value
pub const PERCENT_SCALE: u128 = 100;

/// Upper bound of a station uptime percentage
pub const MAX_PERCENTAGE: u8 = 100;

// =============================================================================
// Driver
// =============================================================================

/// The only thing written to stdout when a run fails
pub const ERROR_OUTPUT: &str = "ERROR";

/// Process exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code for any failed run
pub const EXIT_FAILURE: i32 = 1;

/// Crate name used as the tracing filter target
pub const LOG_TARGET: &str = "station_uptime";

/// Log level used when neither `-v` nor `-q` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
