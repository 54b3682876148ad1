//! RangeBench - compares plain and cached range-sum workloads

mod runner;
mod workload;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use crate::runner::{run_cached, run_uncached};
use crate::workload::{generate_array, generate_queries};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of array elements
    #[arg(short = 'n', long, default_value_t = 100_000)]
    size: usize,

    /// Number of queries in the workload
    #[arg(short, long, default_value_t = 50_000)]
    queries: usize,

    /// Cache capacity (number of ranges)
    #[arg(short, long, default_value_t = 1000)]
    capacity: usize,

    /// Probability that a query is a range sum rather than an update
    #[arg(short, long, default_value_t = 0.7)]
    range_ratio: f64,

    /// Largest generated element value
    #[arg(short, long, default_value_t = 1000)]
    max_value: i64,

    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("Starting RangeBench v{}", env!("CARGO_PKG_VERSION"));
    info!(
        size = args.size,
        queries = args.queries,
        capacity = args.capacity,
        range_ratio = args.range_ratio,
        seed,
        "generating workload"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let array = generate_array(&mut rng, args.size, args.max_value)?;
    let queries = generate_queries(
        &mut rng,
        args.size,
        args.queries,
        args.range_ratio,
        args.max_value,
    )?;

    let plain = run_uncached(array.clone(), &queries)?;
    info!(elapsed = ?plain.elapsed, "uncached pass finished");

    let (cached, stats) = run_cached(array, &queries, args.capacity)?;
    info!(elapsed = ?cached.elapsed, "cached pass finished");

    if plain.checksum != cached.checksum {
        error!(
            plain = plain.checksum,
            cached = cached.checksum,
            "cached pass returned different sums"
        );
        anyhow::bail!("checksum mismatch between uncached and cached passes");
    }

    let plain_secs = plain.elapsed.as_secs_f64();
    let cached_secs = cached.elapsed.as_secs_f64();

    println!("Workload:              {} ranges, {} updates", plain.ranges, plain.updates);
    println!("Time without cache:    {:.2} s", plain_secs);
    println!("Time with LRU cache:   {:.2} s", cached_secs);
    if cached_secs > 0.0 {
        println!("Speedup:               {:.2}x", plain_secs / cached_secs);
    }
    println!(
        "Cache:                 {} hits, {} misses ({:.1}% hit rate)",
        stats.hits(),
        stats.misses(),
        stats.hit_ratio() * 100.0
    );
    println!(
        "                       {} evictions, {} invalidations",
        stats.evictions(),
        stats.invalidations()
    );

    Ok(())
}
