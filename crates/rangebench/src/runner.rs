//! Timed passes over a workload

use std::time::{Duration, Instant};

use anyhow::Result;
use rangecache::{cached_range_sum, cached_update, range_sum, update, CacheStats, RangeSumCache};

use crate::workload::Query;

/// Outcome of one pass
#[derive(Debug)]
pub struct PassReport {
    /// Wall time for the whole pass
    pub elapsed: Duration,
    /// Wrapping sum of every range result, for cross-checking passes
    pub checksum: i64,
    /// Number of range queries answered
    pub ranges: usize,
    /// Number of updates applied
    pub updates: usize,
}

/// Run every query against the array directly
pub fn run_uncached(mut array: Vec<i64>, queries: &[Query]) -> Result<PassReport> {
    run(queries, |query| match *query {
        Query::Range(key) => range_sum(&array, key).map(Some),
        Query::Update { index, value } => update(&mut array, index, value).map(|_| None),
    })
}

/// Run every query through a fresh cache of `capacity` entries
pub fn run_cached(
    mut array: Vec<i64>,
    queries: &[Query],
    capacity: usize,
) -> Result<(PassReport, CacheStats)> {
    let mut cache = RangeSumCache::new(capacity)?;

    let report = run(queries, |query| match *query {
        Query::Range(key) => cached_range_sum(&mut cache, &array, key).map(Some),
        Query::Update { index, value } => {
            cached_update(&mut cache, &mut array, index, value).map(|_| None)
        }
    })?;

    Ok((report, cache.stats().clone()))
}

fn run<F>(queries: &[Query], mut step: F) -> Result<PassReport>
where
    F: FnMut(&Query) -> rangecache::Result<Option<i64>>,
{
    let mut checksum = 0i64;
    let mut ranges = 0;
    let mut updates = 0;

    let start = Instant::now();
    for query in queries {
        match step(query)? {
            Some(sum) => {
                checksum = checksum.wrapping_add(sum);
                ranges += 1;
            }
            None => updates += 1,
        }
    }

    Ok(PassReport {
        elapsed: start.elapsed(),
        checksum,
        ranges,
        updates,
    })
}
