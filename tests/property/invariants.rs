//! Algebraic laws of the distance, checked on random input.

use super::common::{dna_seq, short_seq};
use delins::{build_table, naive, space_optimized, tabulated};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// d(S, ε) = |S| and d(ε, T) = |T|.
    #[test]
    fn prop_empty_side(s in dna_seq()) {
        prop_assert_eq!(space_optimized(&s, &[]), s.len());
        prop_assert_eq!(space_optimized(&[], &s), s.len());
    }

    /// d(S, S) = 0.
    #[test]
    fn prop_identity(s in dna_seq()) {
        prop_assert_eq!(space_optimized(&s, &s), 0);
        prop_assert_eq!(tabulated(&s, &s), 0);
    }

    /// d(S, T) = d(T, S).
    #[test]
    fn prop_symmetry(s in dna_seq(), t in dna_seq()) {
        prop_assert_eq!(space_optimized(&s, &t), space_optimized(&t, &s));
    }

    /// |m - n| <= d <= m + n, and d has the parity of m + n.
    #[test]
    fn prop_bounds_and_parity(s in dna_seq(), t in dna_seq()) {
        let d = space_optimized(&s, &t);
        let (m, n) = (s.len(), t.len());
        prop_assert!(d >= m.abs_diff(n));
        prop_assert!(d <= m + n);
        prop_assert_eq!(d % 2, (m + n) % 2);
    }

    /// Appending one symbol to T moves the distance by exactly one.
    #[test]
    fn prop_append_moves_by_one(s in dna_seq(), t in dna_seq(), c in prop::sample::select(b"ACGT".to_vec())) {
        let before = space_optimized(&s, &t);
        let mut extended = t.clone();
        extended.push(c);
        let after = space_optimized(&s, &extended);
        prop_assert_eq!(before.abs_diff(after), 1);
    }

    /// Triangle inequality.
    #[test]
    fn prop_triangle(a in dna_seq(), b in dna_seq(), c in dna_seq()) {
        let ac = space_optimized(&a, &c);
        let ab = space_optimized(&a, &b);
        let bc = space_optimized(&b, &c);
        prop_assert!(ac <= ab + bc);
    }

    /// Every table cell holds the distance between the matching prefixes.
    #[test]
    fn prop_table_cells_are_prefix_distances(s in short_seq(), t in short_seq()) {
        let table = build_table(&s, &t);
        prop_assert_eq!(table.rows(), s.len() + 1);
        prop_assert_eq!(table.cols(), t.len() + 1);
        for i in 0..=s.len() {
            for j in 0..=t.len() {
                prop_assert_eq!(table.get(i, j), naive(&s[..i], &t[..j]), "cell ({}, {})", i, j);
            }
        }
        prop_assert_eq!(table.result(), naive(&s, &t));
    }
}
