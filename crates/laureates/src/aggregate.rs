// File: crates/laureates/src/aggregate.rs
// Summary: Per-group, per-year laureate counts.
// Notes:
// - Grouping goes through ordered maps, so series come out in `CategoryGroup`
//   order and points in ascending year. Callers that only need set semantics
//   can ignore the order.

use std::collections::BTreeMap;

use log::debug;

use crate::classify::{CategoryGroup, Classifier};
use crate::record::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearCount {
    pub year: i32,
    pub count: u32,
}

/// Counts for one group. Every point has `count >= 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedSeries {
    pub group: CategoryGroup,
    pub points: Vec<YearCount>,
}

impl AggregatedSeries {
    /// Number of records folded into this series.
    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.count as u64).sum()
    }

    pub fn max_count(&self) -> Option<u32> {
        self.points.iter().map(|p| p.count).max()
    }

    /// Points as `(x, y)` pairs for plotting.
    pub fn to_xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.year as f64, p.count as f64)).collect()
    }
}

/// Classify each record, then count records per `(group, year)`.
/// Groups with no records produce no series.
pub fn aggregate<'a, I>(records: I, classifier: &Classifier) -> Vec<AggregatedSeries>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut by_group: BTreeMap<CategoryGroup, BTreeMap<i32, u32>> = BTreeMap::new();
    let mut n = 0usize;
    for r in records {
        let group = classifier.classify(&r.category);
        *by_group.entry(group).or_default().entry(r.year).or_insert(0) += 1;
        n += 1;
    }

    let out: Vec<AggregatedSeries> = by_group
        .into_iter()
        .map(|(group, years)| AggregatedSeries {
            group,
            points: years.into_iter().map(|(year, count)| YearCount { year, count }).collect(),
        })
        .collect();
    debug!("aggregated {} records into {} series", n, out.len());
    out
}

/// Largest per-year count across all series.
pub fn max_count(series: &[AggregatedSeries]) -> Option<u32> {
    series.iter().filter_map(AggregatedSeries::max_count).max()
}

/// Earliest and latest year among the records.
pub fn year_extent<'a, I>(records: I) -> Option<(i32, i32)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().fold(None, |acc, r| match acc {
        None => Some((r.year, r.year)),
        Some((lo, hi)) => Some((lo.min(r.year), hi.max(r.year))),
    })
}
