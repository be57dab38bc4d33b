//! Reporting window bounds and percentage arithmetic.

use super::merge::Interval;
use crate::constants::{MAX_PERCENTAGE, PERCENT_SCALE};
use crate::models::ChargerReport;

/// Span from the earliest start to the latest end across the reports
///
/// Down reports count toward the bounds the same as up reports. Returns
/// `None` for an empty working set.
pub fn reporting_window(reports: &[&ChargerReport]) -> Option<Interval> {
    let start = reports.iter().map(|r| r.start()).min()?;
    let end = reports.iter().map(|r| r.end()).max()?;
    Some(Interval::new(start, end))
}

/// `floor(100 * covered / window)`, clamped to `[0, 100]`
///
/// A zero-length window yields 0; callers decide the instantaneous case
/// before getting here.
pub fn uptime_percentage(covered: u64, window: u64) -> u8 {
    if window == 0 {
        return 0;
    }
    let scaled = covered as u128 * PERCENT_SCALE / window as u128;
    scaled.min(MAX_PERCENTAGE as u128) as u8
}
