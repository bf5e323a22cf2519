use crate::range::RangeSpec;
use crate::Int;

/// Splits `[1, limit)` into `n_threads` interleaved ranges: range `i` starts at
/// `1 + i` and strides by `n_threads`, so each covers one residue class.
///
/// Returns no ranges when `n_threads` is zero.
pub fn interleaved(limit: Int, n_threads: Int) -> Vec<RangeSpec> {
    (0..n_threads)
        .map(|i| RangeSpec::new(1 + i, limit, n_threads))
        .collect()
}
