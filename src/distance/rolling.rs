// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tabulation in `O(min(m, n))` space.
//!
//! The key insight: each row of the table depends only on the row above it.
//! Keep two rows, `previous` and `current`, and swap them when a row is done.
//!
//! Rows are sized by the shorter input. If `S` is the longer one we swap the
//! roles of `S` and `T` first. That's free: a deletion from one side is an
//! insertion from the other, so `d(S, T) = d(T, S)`.

use crate::contracts::{check_distance_bounds, check_rolling_width};
use crate::types::Footprint;

/// Delete/insert distance with two rolling rows.
pub fn space_optimized<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    space_optimized_with_footprint(s, t).0
}

/// Same as [`space_optimized`], also reporting the cells held by both rows.
pub fn space_optimized_with_footprint<T: PartialEq>(s: &[T], t: &[T]) -> (usize, Footprint) {
    let (shorter, longer) = if s.len() > t.len() { (t, s) } else { (s, t) };
    let width = shorter.len() + 1;

    // Row 0 of the conceptual table
    let mut previous: Vec<usize> = (0..width).collect();
    let mut current = vec![0; width];
    check_rolling_width(shorter.len(), previous.len());
    check_rolling_width(shorter.len(), current.len());

    for (j, long_symbol) in longer.iter().enumerate() {
        current[0] = j + 1;
        for i in 1..width {
            current[i] = if *long_symbol == shorter[i - 1] {
                previous[i - 1]
            } else {
                1 + previous[i].min(current[i - 1])
            };
        }
        // INVARIANT: after the swap, `previous` holds row j + 1
        std::mem::swap(&mut previous, &mut current);
    }

    let d = previous[shorter.len()];
    check_distance_bounds(s.len(), t.len(), d);
    (d, Footprint { cells: 2 * width })
}
