use crate::Int;

/// Concatenates filtered partitions in the order given.
pub fn concat(parts: Vec<Vec<Int>>) -> Vec<Int> {
    let total = parts.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    for part in parts {
        result.extend(part);
    }
    result
}
