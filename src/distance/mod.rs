// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delete/insert edit distance: four strategies, one answer.
//!
//! The distance is the fewest single-symbol deletions and insertions that turn
//! `S` into `T`. No substitutions, so changing one symbol costs two. The
//! recurrence, over prefix lengths `i` of `S` and `j` of `T`:
//!
//! ```text
//! d(0, j) = j
//! d(i, 0) = i
//! d(i, j) = d(i-1, j-1)                       if S[i-1] == T[j-1]
//!         = 1 + min(d(i-1, j), d(i, j-1))     otherwise
//! ```
//!
//! | Variant           | Time          | Auxiliary space    | Module    |
//! |-------------------|---------------|--------------------|-----------|
//! | `NaiveRecursive`  | `O(2^(m+n))`  | `O(m+n)` stack     | `naive`   |
//! | `MemoizedRecursive`| `O(m·n)`     | `O(m·n)` cache     | `memo`    |
//! | `TabulatedDp`     | `O(m·n)`      | `O(m·n)` table     | `table`   |
//! | `SpaceOptimizedDp`| `O(m·n)`      | `O(min(m, n))`     | `rolling` |
//!
//! Every function here is pure. Nothing outlives a call, so all of them are
//! safe to run from any number of threads at once.

mod memo;
mod naive;
mod rolling;
mod table;

pub use memo::{memoized, memoized_with_footprint, memoized_with_visits};
pub use naive::{naive, naive_with_visits};
pub use rolling::{space_optimized, space_optimized_with_footprint};
pub use table::{build_table, tabulated, tabulated_with_footprint, DpTable};

use crate::config::Limits;
use crate::error::DistanceError;
use crate::types::{Footprint, Variant};

/// One way of computing the distance.
///
/// The four implementations are interchangeable: a caller holding any
/// `EditDistance` gets the same number back.
pub trait EditDistance {
    /// Which of the four this is.
    fn variant(&self) -> Variant;

    /// Distance from `s` to `t`.
    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize;
}

/// Uncached recursion.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveRecursive;

/// Recursion with a per-call cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedRecursive;

/// Full-table bottom-up fill.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedDp;

/// Two rolling rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceOptimizedDp;

impl EditDistance for NaiveRecursive {
    fn variant(&self) -> Variant {
        Variant::Naive
    }

    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize {
        naive(s, t)
    }
}

impl EditDistance for MemoizedRecursive {
    fn variant(&self) -> Variant {
        Variant::Memoized
    }

    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize {
        memoized(s, t)
    }
}

impl EditDistance for TabulatedDp {
    fn variant(&self) -> Variant {
        Variant::Tabulated
    }

    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize {
        tabulated(s, t)
    }
}

impl EditDistance for SpaceOptimizedDp {
    fn variant(&self) -> Variant {
        Variant::SpaceOptimized
    }

    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize {
        space_optimized(s, t)
    }
}

impl EditDistance for Variant {
    fn variant(&self) -> Variant {
        *self
    }

    fn distance<T: PartialEq>(&self, s: &[T], t: &[T]) -> usize {
        let d = match self {
            Variant::Naive => naive(s, t),
            Variant::Memoized => memoized(s, t),
            Variant::Tabulated => tabulated(s, t),
            Variant::SpaceOptimized => space_optimized(s, t),
        };
        tracing::debug!(variant = %self, s_len = s.len(), t_len = t.len(), distance = d, "computed");
        d
    }
}

impl Variant {
    /// Distance plus the auxiliary cells this variant allocated.
    ///
    /// The naive variant allocates nothing; its cost is all call stack.
    pub fn distance_with_footprint<T: PartialEq>(self, s: &[T], t: &[T]) -> (usize, Footprint) {
        match self {
            Variant::Naive => (naive(s, t), Footprint::default()),
            Variant::Memoized => memoized_with_footprint(s, t),
            Variant::Tabulated => tabulated_with_footprint(s, t),
            Variant::SpaceOptimized => space_optimized_with_footprint(s, t),
        }
    }
}

/// Distance from `s` to `t` using the chosen variant.
///
/// Total for every pair of finite inputs. The naive variant will get there,
/// but not quickly; see [`distance_checked`] for a guarded call.
pub fn distance<T: PartialEq>(s: &[T], t: &[T], variant: Variant) -> usize {
    variant.distance(s, t)
}

/// Like [`distance`], but refuses to start an exponential variant on input
/// larger than `limits` allows.
pub fn distance_checked<T: PartialEq>(
    s: &[T],
    t: &[T],
    variant: Variant,
    limits: &Limits,
) -> Result<usize, DistanceError> {
    limits.check(variant, s.len(), t.len())?;
    Ok(variant.distance(s, t))
}

/// Byte-wise distance between two strings.
///
/// Symbols are bytes, so a multi-byte character counts as several symbols.
pub fn str_distance(s: &str, t: &str, variant: Variant) -> usize {
    distance(s.as_bytes(), t.as_bytes(), variant)
}
