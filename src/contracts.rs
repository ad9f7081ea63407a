// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance engine.
//!
//! Debug-mode assertions that verify the properties every variant must obey.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Turn a wrong number into a panic at the point it was produced
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                          |
//! |----------------------------|---------------------------------------------------|
//! | `check_distance_bounds`    | `\|m - n\| <= d <= m + n`, `d ≡ m + n (mod 2)`    |
//! | `check_table_well_formed`  | base row/column and the cell recurrence           |
//! | `check_rolling_width`      | rolling rows hold exactly `min(m, n) + 1` cells   |
//!
//! The parity rule falls out of `d = m + n - 2·LCS(S, T)`: every symbol that
//! isn't part of a longest common subsequence is deleted from one side or
//! inserted from the other.

use crate::distance::DpTable;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// The worked example `d("ABC", "XYZ") = 6` sits exactly on the upper bound,
/// `d("AB", "ABC") = 1` exactly on the lower bound.
const _: () = {
    const M: usize = 3;
    const N: usize = 3;
    const DISJOINT: usize = 6;
    // INVARIANT: disjoint_alphabets_hit_upper_bound
    assert!(DISJOINT == M + N);

    const PREFIX_M: usize = 2;
    const PREFIX_N: usize = 3;
    const PREFIX: usize = 1;
    // INVARIANT: prefix_hits_lower_bound
    assert!(PREFIX == PREFIX_N - PREFIX_M);
};

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a distance is plausible for inputs of these lengths.
///
/// # Panics (debug builds only)
/// Panics if `d` is below the length difference, above the total length, or
/// has the wrong parity.
#[inline]
pub fn check_distance_bounds(m: usize, n: usize, d: usize) {
    // INVARIANT: length_diff_lower_bound
    debug_assert!(
        d >= m.abs_diff(n),
        "Contract violation: distance {} < |{} - {}|",
        d,
        m,
        n
    );
    // INVARIANT: delete_all_insert_all_upper_bound
    debug_assert!(
        d <= m + n,
        "Contract violation: distance {} > {} + {}",
        d,
        m,
        n
    );
    // INVARIANT: parity_matches_total_length
    debug_assert!(
        (m + n - d.min(m + n)) % 2 == 0,
        "Contract violation: distance {} has wrong parity for lengths {} and {}",
        d,
        m,
        n
    );
}

/// Length of a longest common subsequence, recovered from a distance.
///
/// Only meaningful for a `d` that already passed [`check_distance_bounds`].
pub fn lcs_len(m: usize, n: usize, d: usize) -> usize {
    (m + n - d) / 2
}

// ============================================================================
// TABLE CONTRACTS
// ============================================================================

/// Check that a fully built table satisfies the recurrence.
///
/// Cell `(i, j)` must be `j` on row 0, `i` on column 0, the diagonal
/// predecessor when `S[i-1] == T[j-1]`, and otherwise
/// `1 + min(above, left)`.
///
/// # Panics (debug builds only)
/// Panics on the first cell that disagrees.
#[inline]
pub fn check_table_well_formed<T: PartialEq>(s: &[T], t: &[T], table: &DpTable) {
    debug_assert_eq!(table.rows(), s.len() + 1, "Contract violation: table rows");
    debug_assert_eq!(table.cols(), t.len() + 1, "Contract violation: table cols");

    if !cfg!(debug_assertions) {
        return;
    }

    for j in 0..table.cols() {
        debug_assert_eq!(
            table.get(0, j),
            j,
            "Contract violation: row 0 must count insertions at column {}",
            j
        );
    }
    for i in 0..table.rows() {
        debug_assert_eq!(
            table.get(i, 0),
            i,
            "Contract violation: column 0 must count deletions at row {}",
            i
        );
    }

    for i in 1..table.rows() {
        for j in 1..table.cols() {
            let expected = if s[i - 1] == t[j - 1] {
                table.get(i - 1, j - 1)
            } else {
                1 + table.get(i - 1, j).min(table.get(i, j - 1))
            };
            debug_assert_eq!(
                table.get(i, j),
                expected,
                "Contract violation: cell ({}, {}) breaks the recurrence",
                i,
                j
            );
        }
    }
}

/// Check that a rolling row is sized by the shorter input.
#[inline]
pub fn check_rolling_width(shorter: usize, row_len: usize) {
    debug_assert_eq!(
        row_len,
        shorter + 1,
        "Contract violation: rolling row has {} cells, expected {}",
        row_len,
        shorter + 1
    );
}
