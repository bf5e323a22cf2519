use crate::error::{BenchError, Result};
use crate::Int;

/// Half-open range `[start, end)` walked in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSpec {
    pub start: Int,
    pub end: Int,
    pub step: Int,
}

impl RangeSpec {
    /// `[0, end)` with a step of one.
    pub fn up_to(end: Int) -> Self {
        RangeSpec {
            start: 0,
            end,
            step: 1,
        }
    }

    pub fn new(start: Int, end: Int, step: Int) -> Self {
        RangeSpec { start, end, step }
    }

    /// Number of values `make_range` produces for this spec.
    pub fn len(&self) -> usize {
        if self.step == 0 || self.start >= self.end {
            return 0;
        }
        ((self.end - self.start - 1) / self.step + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Eagerly collects every value of `spec`. An inverted or empty range gives an
/// empty vector; a zero step is rejected.
pub fn make_range(spec: RangeSpec) -> Result<Vec<Int>> {
    if spec.step == 0 {
        return Err(BenchError::ZeroStep {
            start: spec.start,
            end: spec.end,
        });
    }

    let mut values = Vec::with_capacity(spec.len());
    let mut i = spec.start;
    while i < spec.end {
        values.push(i);
        match i.checked_add(spec.step) {
            Some(next) => i = next,
            None => break,
        }
    }
    Ok(values)
}
