use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rangecache::{cached_range_sum, cached_update, range_sum, RangeKey, RangeSumCache};

const ARRAY_LEN: usize = 10_000;

fn test_array() -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..ARRAY_LEN).map(|_| rng.gen_range(1..=1000)).collect()
}

fn hot_keys(count: usize) -> Vec<RangeKey> {
    let mut rng = StdRng::seed_from_u64(11);
    (0..count)
        .map(|_| {
            let start = rng.gen_range(0..ARRAY_LEN);
            let end = rng.gen_range(start..ARRAY_LEN);
            RangeKey::new(start, end).unwrap()
        })
        .collect()
}

fn bench_cached_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_sum");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    let array = test_array();
    let keys = hot_keys(100);

    group.bench_function("uncached", |b| {
        let mut counter = 0;
        b.iter(|| {
            black_box(range_sum(&array, keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.bench_function("cached_hot", |b| {
        let mut cache = RangeSumCache::new(1000).unwrap();
        for key in &keys {
            cached_range_sum(&mut cache, &array, *key).unwrap();
        }

        let mut counter = 0;
        b.iter(|| {
            black_box(cached_range_sum(&mut cache, &array, keys[counter % 100]).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_70_30(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("70_query_30_update_cached", |b| {
        let mut array = test_array();
        let keys = hot_keys(100);
        let mut cache = RangeSumCache::new(1000).unwrap();

        let mut counter = 0usize;
        b.iter(|| {
            if counter % 10 < 7 {
                black_box(cached_range_sum(&mut cache, &array, keys[counter % 100]).unwrap());
            } else {
                cached_update(&mut cache, &mut array, (counter * 31) % ARRAY_LEN, 1).unwrap();
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_invalidate_full_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("invalidate");
    group.sample_size(50);

    group.bench_function("scan_1000_entries_no_match", |b| {
        let mut cache = RangeSumCache::new(1000).unwrap();
        for i in 0..1000 {
            cache.put(RangeKey::single(i), 0);
        }

        b.iter(|| {
            black_box(cache.invalidate(ARRAY_LEN));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_hit,
    bench_mixed_70_30,
    bench_invalidate_full_cache
);
criterion_main!(benches);
