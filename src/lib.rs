//! Trial-division prime search, run once on the calling thread and once split
//! across a fixed pool of threads by residue class, with both runs timed.

pub mod aggregate;
pub mod bench;
pub mod console;
pub mod error;
pub mod partition;
pub mod pool;
pub mod primality;
pub mod range;
pub mod worker;

pub use bench::{run_sequential, run_threaded, RunReport};
pub use error::{BenchError, Result};
pub use primality::is_prime;
pub use range::{make_range, RangeSpec};

/// Value domain of the search.
pub type Int = u32;

/// Number of worker threads used by the threaded run.
pub const N_THREADS: Int = 4;

/// Default exclusive upper bound of the search.
pub const LIMIT: Int = 30_000_000;
