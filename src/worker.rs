use std::thread;
use std::time::Instant;

use tracing::debug;

use crate::error::{BenchError, Result};
use crate::primality::is_prime;
use crate::Int;

/// Drops every non-prime from `values` in place, keeping the relative order of
/// the survivors.
pub fn filter_primes(values: &mut Vec<Int>) -> &mut Vec<Int> {
    values.retain(|&x| is_prime(x));
    values
}

/// A dedicated thread that owns one partition and returns it filtered.
pub struct Worker {
    pub id: usize,
    thread: Option<thread::JoinHandle<Vec<Int>>>,
}

impl Worker {
    /// Spawns a thread that filters `values` down to its primes.
    pub fn spawn(id: usize, values: Vec<Int>) -> Result<Worker> {
        Worker::execute(id, values, |mut values| {
            filter_primes(&mut values);
            values
        })
    }

    /// Spawns a thread that runs `job` over `values`.
    pub fn execute<F>(id: usize, values: Vec<Int>, job: F) -> Result<Worker>
    where
        F: FnOnce(Vec<Int>) -> Vec<Int> + Send + 'static,
    {
        let thread = thread::Builder::new()
            .name(format!("prime-worker-{id}"))
            .spawn(move || {
                let started = Instant::now();
                let scanned = values.len();
                let values = job(values);
                debug!(
                    worker = id,
                    scanned,
                    retained = values.len(),
                    elapsed = ?started.elapsed(),
                    "worker finished"
                );
                values
            })
            .map_err(|source| BenchError::Spawn { id, source })?;

        Ok(Worker {
            id,
            thread: Some(thread),
        })
    }

    /// Blocks until the thread exits. Joining twice yields an empty partition.
    pub fn join(&mut self) -> Result<Vec<Int>> {
        match self.thread.take() {
            Some(thread) => thread
                .join()
                .map_err(|_| BenchError::WorkerPanicked { id: self.id }),
            None => Ok(Vec::new()),
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
