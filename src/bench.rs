use std::time::{Duration, Instant};

use tracing::info;

use crate::aggregate::concat;
use crate::error::Result;
use crate::partition::interleaved;
use crate::pool::PartitionPool;
use crate::range::{make_range, RangeSpec};
use crate::worker::filter_primes;
use crate::{Int, N_THREADS};

pub const SEQUENTIAL_LABEL: &str = "Single-threaded";
pub const THREADED_LABEL: &str = "Multithreaded";

/// Outcome of one timed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub label: &'static str,
    pub elapsed: Duration,
    pub primes: Vec<Int>,
}

/// Generates `[1, limit)` and filters it on the calling thread. Range
/// generation is part of the timed section.
pub fn run_sequential(limit: Int) -> Result<RunReport> {
    let started = Instant::now();

    let mut values = make_range(RangeSpec::new(1, limit, 1))?;
    filter_primes(&mut values);

    let elapsed = started.elapsed();
    info!(limit, primes = values.len(), ?elapsed, "sequential run finished");

    Ok(RunReport {
        label: SEQUENTIAL_LABEL,
        elapsed,
        primes: values,
    })
}

/// Filters `[1, limit)` across `N_THREADS` interleaved partitions.
pub fn run_threaded(limit: Int) -> Result<RunReport> {
    run_partitioned(limit, N_THREADS)
}

/// Threaded run with an explicit partition count. Partition generation, thread
/// launch, join and concatenation are all inside the timed section.
pub fn run_partitioned(limit: Int, n_threads: Int) -> Result<RunReport> {
    let started = Instant::now();

    let pool = PartitionPool::spawn(&interleaved(limit, n_threads))?;
    let primes = concat(pool.join()?);

    let elapsed = started.elapsed();
    info!(
        limit,
        threads = n_threads,
        primes = primes.len(),
        ?elapsed,
        "threaded run finished"
    );

    Ok(RunReport {
        label: THREADED_LABEL,
        elapsed,
        primes,
    })
}
