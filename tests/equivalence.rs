use std::collections::BTreeSet;

use prime_bench::bench::run_partitioned;
use prime_bench::{run_sequential, run_threaded, Int};
use proptest::prelude::*;

fn as_set(primes: &[Int]) -> BTreeSet<Int> {
    primes.iter().copied().collect()
}

#[test]
fn threaded_matches_sequential_at_fixed_limits() {
    for limit in [0, 1, 2, 3, 4, 5, 17, 100, 1_000, 65_537, 200_000] {
        let sequential = run_sequential(limit).expect("sequential run");
        let threaded = run_threaded(limit).expect("threaded run");
        assert_eq!(
            sequential.primes.len(),
            threaded.primes.len(),
            "prime count differs at limit {limit}"
        );
        assert_eq!(as_set(&sequential.primes), as_set(&threaded.primes));
    }
}

#[test]
fn sequential_result_is_sorted() {
    let report = run_sequential(10_000).expect("sequential run");
    assert!(report.primes.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(report.primes.len(), 1_229);
}

proptest! {
    #[test]
    fn threaded_matches_sequential(limit in 0u32..50_000) {
        let sequential = run_sequential(limit).unwrap();
        let threaded = run_threaded(limit).unwrap();
        prop_assert_eq!(as_set(&sequential.primes), as_set(&threaded.primes));
        prop_assert_eq!(sequential.primes.len(), threaded.primes.len());
    }

    #[test]
    fn any_partition_count_matches_sequential(limit in 0u32..5_000, threads in 1u32..12) {
        let sequential = run_sequential(limit).unwrap();
        let partitioned = run_partitioned(limit, threads).unwrap();
        let mut sorted = partitioned.primes.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sequential.primes, sorted);
    }
}
