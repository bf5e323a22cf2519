use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("range step must be non-zero (start {start}, end {end})")]
    ZeroStep { start: u32, end: u32 },

    #[error("failed to spawn worker {id}: {source}")]
    Spawn {
        id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker {id} panicked before returning its partition")]
    WorkerPanicked { id: usize },

    #[error("console write failed: {0}")]
    Io(#[from] std::io::Error),
}
