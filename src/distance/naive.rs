// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Uncached recursion: the recurrence, transcribed.
//!
//! `suffix_distance(i, j)` is the cost of turning `S[i..]` into `T[j..]`. When
//! the heads match they cost nothing; otherwise we either delete `S[i]` or
//! insert `T[j]` and take whichever branch is cheaper. Nothing is remembered,
//! so the same `(i, j)` is recomputed once for every path that reaches it.
//! With no shared symbols that's `O(2^(m+n))` calls.
//!
//! It returns the right answer for any input, eventually. Keep it for small
//! inputs and as the baseline every other variant is checked against.

use crate::contracts::check_distance_bounds;

/// Delete/insert distance by plain recursion.
pub fn naive<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    naive_with_visits(s, t).0
}

/// Same as [`naive`], also returning how many subproblems were visited.
///
/// Every call counts, including repeats. This is the number that grows
/// exponentially.
pub fn naive_with_visits<T: PartialEq>(s: &[T], t: &[T]) -> (usize, u64) {
    let mut visits = 0;
    let d = suffix_distance(s, t, 0, 0, &mut visits);
    check_distance_bounds(s.len(), t.len(), d);
    (d, visits)
}

fn suffix_distance<T: PartialEq>(s: &[T], t: &[T], i: usize, j: usize, visits: &mut u64) -> usize {
    *visits += 1;

    // S exhausted: insert the rest of T
    if i == s.len() {
        return t.len() - j;
    }
    // T exhausted: delete the rest of S
    if j == t.len() {
        return s.len() - i;
    }

    if s[i] == t[j] {
        return suffix_distance(s, t, i + 1, j + 1, visits);
    }

    let delete = suffix_distance(s, t, i + 1, j, visits);
    let insert = suffix_distance(s, t, i, j + 1, visits);
    1 + delete.min(insert)
}
