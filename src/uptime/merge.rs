//! Interval merging for covered-time calculation.
//!
//! Up-intervals from every charger of a station are sorted and folded into
//! a disjoint set so that overlapping up time is counted once.

use crate::models::ChargerReport;

/// Closed time interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "interval start {} after end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// True for zero-length intervals
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<&ChargerReport> for Interval {
    fn from(report: &ChargerReport) -> Self {
        Self::new(report.start(), report.end())
    }
}

/// Merge intervals into a sorted, disjoint set
///
/// Sorting is by start, then end, so the result does not depend on input
/// order. Intervals that overlap or touch (`next.start <= current.end`) are
/// joined.
pub fn merge_intervals(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        match merged.last_mut() {
            Some(current) if interval.start <= current.end => {
                current.end = current.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Total length of a disjoint interval set
pub fn covered_duration(merged: &[Interval]) -> u64 {
    merged.iter().map(Interval::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intervals(pairs: &[(u64, u64)]) -> Vec<Interval> {
        pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_intervals(Vec::new()).is_empty());
        assert_eq!(covered_duration(&[]), 0);
    }

    #[test]
    fn test_merge_overlapping() {
        let merged = merge_intervals(intervals(&[(0, 60), (40, 100)]));
        assert_eq!(merged, intervals(&[(0, 100)]));
        assert_eq!(covered_duration(&merged), 100);
    }

    #[test]
    fn test_merge_touching() {
        let merged = merge_intervals(intervals(&[(50, 100), (0, 50)]));
        assert_eq!(merged, intervals(&[(0, 100)]));
    }

    #[test]
    fn test_merge_keeps_gaps() {
        let merged = merge_intervals(intervals(&[(75, 100), (0, 50)]));
        assert_eq!(merged, intervals(&[(0, 50), (75, 100)]));
        assert_eq!(covered_duration(&merged), 75);
    }

    #[test]
    fn test_merge_contained_interval() {
        let merged = merge_intervals(intervals(&[(0, 100), (20, 30), (10, 10)]));
        assert_eq!(merged, intervals(&[(0, 100)]));
    }

    #[test]
    fn test_zero_length_intervals_add_nothing() {
        let merged = merge_intervals(intervals(&[(5, 5), (10, 10), (10, 10)]));
        assert_eq!(merged, intervals(&[(5, 5), (10, 10)]));
        assert_eq!(covered_duration(&merged), 0);
    }

    #[test]
    fn test_interval_from_report() {
        let report = ChargerReport::new("c", 3, 9, false).unwrap();
        let interval = Interval::from(&report);
        assert_eq!(interval.len(), 6);
        assert!(!interval.is_empty());
    }
}
