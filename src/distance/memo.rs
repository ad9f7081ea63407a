// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-down recursion with a per-call cache.
//!
//! Same subproblems as the naive variant, `(i, j)` meaning "turn `S[i..]` into
//! `T[j..]`", but each one is solved once and stored. That brings the cost
//! down to `O(m·n)` time and `O(m·n)` memo cells.
//!
//! The walk uses an explicit worklist instead of native recursion. The
//! dependency graph only points forward (`(i+1, j)`, `(i, j+1)`,
//! `(i+1, j+1)`), so a depth-first stack of pending pairs visits it in the
//! same order a recursive implementation would, without tying the largest
//! input we can handle to the size of the thread's call stack.

use crate::contracts::check_distance_bounds;
use crate::types::Footprint;

/// Dense `(m+1) x (n+1)` cache. `None` means not yet solved.
struct MemoTable {
    cols: usize,
    cells: Vec<Option<usize>>,
}

impl MemoTable {
    fn new(m: usize, n: usize) -> Self {
        Self {
            cols: n + 1,
            cells: vec![None; (m + 1) * (n + 1)],
        }
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> Option<usize> {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, d: usize) {
        // INVARIANT: each cell is written at most once
        debug_assert!(self.get(i, j).is_none(), "memo cell ({}, {}) solved twice", i, j);
        self.cells[i * self.cols + j] = Some(d);
    }
}

/// Delete/insert distance by memoized top-down evaluation.
pub fn memoized<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    solve(s, t).0
}

/// Same as [`memoized`], also returning how many distinct subproblems were
/// solved. Never more than `(m+1)·(n+1)`.
pub fn memoized_with_visits<T: PartialEq>(s: &[T], t: &[T]) -> (usize, u64) {
    let (d, visits, _) = solve(s, t);
    (d, visits)
}

/// Same as [`memoized`], also reporting the cache size.
pub fn memoized_with_footprint<T: PartialEq>(s: &[T], t: &[T]) -> (usize, Footprint) {
    let (d, _, footprint) = solve(s, t);
    (d, footprint)
}

fn solve<T: PartialEq>(s: &[T], t: &[T]) -> (usize, u64, Footprint) {
    let (m, n) = (s.len(), t.len());
    let mut memo = MemoTable::new(m, n);
    let footprint = Footprint {
        cells: memo.cells.len(),
    };
    let mut visits = 0u64;
    let mut pending = vec![(0usize, 0usize)];

    while let Some(&(i, j)) = pending.last() {
        if memo.get(i, j).is_some() {
            pending.pop();
            continue;
        }

        let solved = if i == m {
            Some(n - j)
        } else if j == n {
            Some(m - i)
        } else if s[i] == t[j] {
            match memo.get(i + 1, j + 1) {
                Some(d) => Some(d),
                None => {
                    pending.push((i + 1, j + 1));
                    None
                }
            }
        } else {
            match (memo.get(i + 1, j), memo.get(i, j + 1)) {
                (Some(delete), Some(insert)) => Some(1 + delete.min(insert)),
                (delete, insert) => {
                    if insert.is_none() {
                        pending.push((i, j + 1));
                    }
                    if delete.is_none() {
                        pending.push((i + 1, j));
                    }
                    None
                }
            }
        };

        if let Some(d) = solved {
            memo.set(i, j, d);
            visits += 1;
            pending.pop();
        }
    }

    let Some(d) = memo.get(0, 0) else {
        unreachable!("worklist drained without solving (0, 0)");
    };
    check_distance_bounds(m, n, d);
    (d, visits, footprint)
}
