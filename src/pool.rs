use tracing::debug;

use crate::error::Result;
use crate::range::{make_range, RangeSpec};
use crate::worker::Worker;
use crate::Int;

/// Fixed set of workers, one per pre-computed partition.
///
/// Partitions are generated up front and moved into their threads, so there is
/// no shared queue and nothing to synchronize while filtering. Dropping the
/// pool joins any worker that was not joined explicitly.
pub struct PartitionPool {
    workers: Vec<Worker>,
}

impl PartitionPool {
    pub fn spawn(partitions: &[RangeSpec]) -> Result<PartitionPool> {
        let mut workers = Vec::with_capacity(partitions.len());

        for (id, spec) in partitions.iter().enumerate() {
            let values = make_range(*spec)?;
            debug!(
                worker = id,
                start = spec.start,
                step = spec.step,
                len = values.len(),
                "spawning worker"
            );
            workers.push(Worker::spawn(id, values)?);
        }

        Ok(PartitionPool { workers })
    }

    /// Wraps already spawned workers.
    pub fn from_workers(workers: Vec<Worker>) -> PartitionPool {
        PartitionPool { workers }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Blocks until every worker has finished and returns their partitions in
    /// worker order. Every thread is joined even when one of them panicked; the
    /// first failure is returned.
    pub fn join(mut self) -> Result<Vec<Vec<Int>>> {
        let mut parts = Vec::with_capacity(self.workers.len());
        let mut failure = None;

        for worker in &mut self.workers {
            match worker.join() {
                Ok(part) => parts.push(part),
                Err(e) => {
                    if failure.is_none() {
                        failure = Some(e);
                    }
                }
            }
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(parts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BenchError;

    #[test]
    fn joins_partitions_in_worker_order() {
        let partitions = [RangeSpec::new(1, 12, 2), RangeSpec::new(2, 12, 2)];
        let pool = PartitionPool::spawn(&partitions).unwrap();
        assert_eq!(pool.size(), 2);
        let parts = pool.join().unwrap();
        assert_eq!(parts, vec![vec![3, 5, 7, 11], vec![2]]);
    }

    #[test]
    fn zero_step_partition_fails_before_spawning() {
        let partitions = [RangeSpec::new(1, 12, 0)];
        assert!(matches!(
            PartitionPool::spawn(&partitions),
            Err(BenchError::ZeroStep { .. })
        ));
    }

    #[test]
    fn panicked_worker_fails_the_join() {
        let workers = vec![
            Worker::spawn(0, vec![2, 3, 4]).unwrap(),
            Worker::execute(1, vec![5], |_| panic!("worker failure")).unwrap(),
        ];
        let err = PartitionPool::from_workers(workers).join().unwrap_err();
        assert!(matches!(err, BenchError::WorkerPanicked { id: 1 }));
    }

    #[test]
    fn dropping_unjoined_pool_waits_for_workers() {
        let pool = PartitionPool::spawn(&[RangeSpec::new(0, 1000, 1)]).unwrap();
        drop(pool);
    }
}
