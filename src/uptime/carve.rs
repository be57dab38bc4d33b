//! Down-report carve-out for `DownReportPolicy::CarveOut`.
//!
//! Each charger's reports are replayed in start order, up before down on a
//! tied start. A down report removes the parts of that charger's already
//! collected up intervals that fall inside it; up reports that start later
//! are unaffected.

use super::merge::Interval;
use crate::models::ChargerReport;
use std::collections::BTreeMap;

/// Up intervals of every charger in the working set, after carving
pub fn carved_up_intervals(reports: &[&ChargerReport]) -> Vec<Interval> {
    let mut by_charger: BTreeMap<&str, Vec<&ChargerReport>> = BTreeMap::new();
    for &report in reports {
        by_charger.entry(report.charger_id()).or_default().push(report);
    }

    by_charger
        .into_values()
        .flat_map(carve_charger)
        .collect()
}

fn carve_charger(mut reports: Vec<&ChargerReport>) -> Vec<Interval> {
    reports.sort_by_key(|r| (r.start(), !r.is_up()));

    let mut up: Vec<Interval> = Vec::new();
    for report in reports {
        let interval = Interval::from(report);
        if report.is_up() {
            up.push(interval);
        } else {
            up = up
                .into_iter()
                .flat_map(|existing| subtract(existing, interval))
                .collect();
        }
    }
    up
}

/// Parts of `interval` outside `down`
fn subtract(interval: Interval, down: Interval) -> Vec<Interval> {
    if interval.end <= down.start || interval.start >= down.end {
        return vec![interval];
    }

    let mut remaining = Vec::with_capacity(2);
    if interval.start < down.start {
        remaining.push(Interval::new(interval.start, down.start));
    }
    if interval.end > down.end {
        remaining.push(Interval::new(down.end, interval.end));
    }
    remaining
}
