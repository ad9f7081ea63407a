//! Differential testing: every variant against the oracles.
//!
//! If a variant and the oracle disagree, the oracle is right.

use super::common::{dna_seq, seq, short_seq};
use super::oracles::{oracle_distance, oracle_lcs_brute};
use delins::harness::{compare, cross_check};
use delins::{memoized, naive, space_optimized, tabulated, Limits, Variant};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Naive recursion matches the brute-force oracle.
    #[test]
    fn diff_naive_vs_brute_force(s in short_seq(), t in short_seq()) {
        let expected = s.len() + t.len() - 2 * oracle_lcs_brute(&s, &t);
        prop_assert_eq!(naive(&s, &t), expected);
    }

    /// Every variant matches the LCS oracle on naive-sized input.
    #[test]
    fn diff_all_variants_vs_oracle(s in short_seq(), t in short_seq()) {
        let expected = oracle_distance(&s, &t);
        for variant in Variant::ALL {
            prop_assert_eq!(delins::distance(&s, &t, variant), expected, "{}", variant);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Polynomial variants match the oracle on longer input.
    #[test]
    fn diff_polynomial_variants_vs_oracle(s in dna_seq(), t in dna_seq()) {
        let expected = oracle_distance(&s, &t);
        prop_assert_eq!(memoized(&s, &t), expected);
        prop_assert_eq!(tabulated(&s, &t), expected);
        prop_assert_eq!(space_optimized(&s, &t), expected);
    }

    /// Binary alphabet: lots of matches, lots of ties between branches.
    #[test]
    fn diff_binary_alphabet(s in seq(b"01", 40), t in seq(b"01", 40)) {
        prop_assert_eq!(space_optimized(&s, &t), oracle_distance(&s, &t));
        prop_assert_eq!(memoized(&s, &t), oracle_distance(&s, &t));
    }

    /// The harness comparison agrees with the oracle, skipping what the
    /// limits rule out.
    #[test]
    fn diff_harness_compare(s in seq(b"ABC", 20), t in seq(b"ABC", 20)) {
        let comparison = compare(&s, &t, &Limits::default());
        prop_assert_eq!(comparison.agreed(), Ok(oracle_distance(&s, &t)));
        let naive_ran = comparison.measurements[0].result.is_ok();
        prop_assert_eq!(naive_ran, s.len() + t.len() <= 25);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Bulk cross-check over a batch of random pairs.
    #[test]
    fn diff_cross_check_batch(pairs in prop::collection::vec((short_seq(), short_seq()), 1..50)) {
        prop_assert_eq!(cross_check(&pairs, &Limits::default(), true), Ok(pairs.len()));
    }
}
