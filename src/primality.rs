use crate::Int;

/// Trial division by every integer in `[2, floor(sqrt(x))]`.
///
/// 0 and 1 are not prime.
pub fn is_prime(x: Int) -> bool {
    if x < 2 {
        return false;
    }
    let n = u64::from(x);
    let mut i: u64 = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
