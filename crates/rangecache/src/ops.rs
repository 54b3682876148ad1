//! Array operations, plain and cached
//!
//! The array stays with the caller. The cached variants consult or invalidate
//! a [`RangeSumCache`] around the plain ones.

use crate::cache::RangeSumCache;
use crate::error::{Error, Result};
use crate::key::RangeKey;

/// Sum `array[start..=end]` without caching
pub fn range_sum(array: &[i64], key: RangeKey) -> Result<i64> {
    check_index(array, key.end())?;

    array[key.start()..=key.end()]
        .iter()
        .try_fold(0i64, |acc, &value| acc.checked_add(value))
        .ok_or(Error::Overflow(key))
}

/// Write `value` at `index` without caching
pub fn update(array: &mut [i64], index: usize, value: i64) -> Result<()> {
    check_index(array, index)?;
    array[index] = value;
    Ok(())
}

/// Sum a range, answering from `cache` when possible and filling it on a miss
pub fn cached_range_sum(cache: &mut RangeSumCache, array: &[i64], key: RangeKey) -> Result<i64> {
    if let Some(sum) = cache.get(key) {
        return Ok(sum);
    }

    let sum = range_sum(array, key)?;
    cache.put(key, sum);
    Ok(sum)
}

/// Write `value` at `index` and drop every cached range covering it
pub fn cached_update(
    cache: &mut RangeSumCache,
    array: &mut [i64],
    index: usize,
    value: i64,
) -> Result<()> {
    update(array, index, value)?;
    cache.invalidate(index);
    Ok(())
}

fn check_index(array: &[i64], index: usize) -> Result<()> {
    if index >= array.len() {
        return Err(Error::OutOfBounds {
            index,
            len: array.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(start: usize, end: usize) -> RangeKey {
        RangeKey::new(start, end).unwrap()
    }

    #[test]
    fn test_range_sum_inclusive() {
        let array = [1, 2, 3, 4, 5];

        assert_eq!(range_sum(&array, key(0, 4)), Ok(15));
        assert_eq!(range_sum(&array, key(1, 3)), Ok(9));
        assert_eq!(range_sum(&array, key(2, 2)), Ok(3));
    }

    #[test]
    fn test_range_sum_out_of_bounds() {
        let array = [1, 2, 3];

        assert_eq!(
            range_sum(&array, key(1, 3)),
            Err(Error::OutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_range_sum_overflow() {
        let array = [i64::MAX, 1];

        assert_eq!(range_sum(&array, key(0, 1)), Err(Error::Overflow(key(0, 1))));
    }

    #[test]
    fn test_update_bounds() {
        let mut array = [0; 3];

        assert_eq!(update(&mut array, 2, 9), Ok(()));
        assert_eq!(array, [0, 0, 9]);
        assert!(update(&mut array, 3, 1).is_err());
    }

    #[test]
    fn test_cached_range_sum_fills_cache() {
        let mut cache = RangeSumCache::new(4).unwrap();
        let array = [1, 2, 3, 4];

        assert_eq!(cached_range_sum(&mut cache, &array, key(0, 3)), Ok(10));
        assert_eq!(cached_range_sum(&mut cache, &array, key(0, 3)), Ok(10));

        assert_eq!(cache.stats().misses(), 1);
        assert_eq!(cache.stats().hits(), 1);
    }

    #[test]
    fn test_cached_update_invalidates_stale_sum() {
        let mut cache = RangeSumCache::new(4).unwrap();
        let mut array = vec![1, 2, 3, 4];

        cached_range_sum(&mut cache, &array, key(0, 1)).unwrap();
        cached_range_sum(&mut cache, &array, key(2, 3)).unwrap();
        cached_update(&mut cache, &mut array, 1, 20).unwrap();

        assert!(!cache.contains(key(0, 1)));
        assert!(cache.contains(key(2, 3)));
        assert_eq!(cached_range_sum(&mut cache, &array, key(0, 1)), Ok(21));
    }

    #[test]
    fn test_failed_cached_ops_leave_cache_untouched() {
        let mut cache = RangeSumCache::new(4).unwrap();
        let mut array = vec![1, 2];

        cached_range_sum(&mut cache, &array, key(0, 1)).unwrap();

        assert!(cached_range_sum(&mut cache, &array, key(1, 5)).is_err());
        assert!(cached_update(&mut cache, &mut array, 9, 0).is_err());
        assert_eq!(cache.len(), 1);
        assert_eq!(array, vec![1, 2]);
    }
}
