//! Random arrays and query streams

use anyhow::{ensure, Result};
use rand::Rng;
use rangecache::RangeKey;

/// One step of a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Sum an inclusive range
    Range(RangeKey),
    /// Overwrite one element
    Update { index: usize, value: i64 },
}

/// Array of `len` values drawn uniformly from `1..=max_value`
pub fn generate_array<R: Rng>(rng: &mut R, len: usize, max_value: i64) -> Result<Vec<i64>> {
    ensure!(max_value >= 1, "max value must be at least 1, got {}", max_value);
    Ok((0..len).map(|_| rng.gen_range(1..=max_value)).collect())
}

/// `count` queries over an array of `len` elements.
///
/// Each query is a range with probability `range_ratio`, otherwise an update.
pub fn generate_queries<R: Rng>(
    rng: &mut R,
    len: usize,
    count: usize,
    range_ratio: f64,
    max_value: i64,
) -> Result<Vec<Query>> {
    ensure!(len > 0, "array must not be empty");
    ensure!(
        (0.0..=1.0).contains(&range_ratio),
        "range ratio must be within [0, 1], got {}",
        range_ratio
    );
    ensure!(max_value >= 1, "max value must be at least 1, got {}", max_value);

    let mut queries = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.gen_bool(range_ratio) {
            let start = rng.gen_range(0..len);
            let end = rng.gen_range(start..len);
            queries.push(Query::Range(RangeKey::new(start, end)?));
        } else {
            queries.push(Query::Update {
                index: rng.gen_range(0..len),
                value: rng.gen_range(1..=max_value),
            });
        }
    }

    Ok(queries)
}
