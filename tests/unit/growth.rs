//! Growth of the work done: exponential for the naive recursion, polynomial
//! for everything else.
//!
//! Counted in subproblem visits rather than time, so the results don't depend
//! on the machine.

use delins::distance::{memoized_with_visits, naive_with_visits};
use delins::harness::{disjoint_pair, growth_profile};
use delins::{Limits, Variant};

fn binomial(n: u64, k: u64) -> u64 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[test]
fn naive_visits_on_disjoint_input_follow_the_closed_form() {
    // f(i, j) = 1 + f(i-1, j) + f(i, j-1), f(0, j) = f(i, 0) = 1
    // solves to 2·C(i+j, i) - 1
    for n in 0..=9 {
        let (s, t) = disjoint_pair(n);
        let (d, visits) = naive_with_visits(&s, &t);
        assert_eq!(d, 2 * n);
        assert_eq!(visits, 2 * binomial(2 * n as u64, n as u64) - 1, "n = {}", n);
    }
}

#[test]
fn naive_visits_roughly_quadruple_per_step() {
    let visits: Vec<u64> = (1..=9)
        .map(|n| {
            let (s, t) = disjoint_pair(n);
            naive_with_visits(&s, &t).1
        })
        .collect();
    for pair in visits.windows(2) {
        assert!(pair[1] >= 3 * pair[0], "{} -> {}", pair[0], pair[1]);
    }
}

#[test]
fn memoized_visits_each_cell_once() {
    for n in [1, 5, 20, 60] {
        let (s, t) = disjoint_pair(n);
        let (d, visits) = memoized_with_visits(&s, &t);
        assert_eq!(d, 2 * n);
        // every cell but the corner, which only base cases border
        assert_eq!(visits, ((n + 1) * (n + 1) - 1) as u64);
    }
}

#[test]
fn memoized_only_walks_the_diagonal_on_identical_input() {
    let s = b"ABCDEFGHIJ";
    let (d, visits) = memoized_with_visits(s, s);
    assert_eq!(d, 0);
    assert_eq!(visits, 11);
}

#[test]
fn growth_profile_reports_every_size_for_polynomial_variants() {
    let sizes: Vec<usize> = (0..=200).step_by(50).collect();
    for variant in [Variant::Memoized, Variant::Tabulated, Variant::SpaceOptimized] {
        let points = growth_profile(variant, &sizes, &Limits::default());
        assert_eq!(points.len(), sizes.len());
        for point in points {
            assert_eq!(point.distance, 2 * point.size);
        }
    }
}

#[test]
fn naive_profile_is_cut_short_by_the_limit() {
    let limits = Limits {
        naive_max_combined_len: 12,
    };
    let sizes: Vec<usize> = (0..=10).collect();
    let points = growth_profile(Variant::Naive, &sizes, &limits);
    assert_eq!(points.len(), 7);
    assert_eq!(points.last().map(|p| p.size), Some(6));
}
