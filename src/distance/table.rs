// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bottom-up tabulation over the full table.
//!
//! Cell `(i, j)` holds the distance between the length-`i` prefix of `S` and
//! the length-`j` prefix of `T`. Row 0 counts insertions, column 0 counts
//! deletions, and every other cell needs only its left, upper and upper-left
//! neighbours, so filling rows top to bottom and each row left to right always
//! reads finished cells. No recursion, no stack depth to worry about.
//!
//! This is the reference the other variants are measured against.

use crate::contracts::{check_distance_bounds, check_table_well_formed};
use crate::types::Footprint;

/// A filled `(m+1) x (n+1)` table, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DpTable {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Number of rows, `|S| + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|T| + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance between `S[..i]` and `T[..j]`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, d: usize) {
        self.cells[i * self.cols + j] = d;
    }

    /// The bottom-right cell: the distance between the whole inputs.
    pub fn result(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// One row of the table.
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            cells: self.cells.len(),
        }
    }
}

/// Fill the whole table for `S` and `T`.
pub fn build_table<T: PartialEq>(s: &[T], t: &[T]) -> DpTable {
    let (m, n) = (s.len(), t.len());
    let mut table = DpTable::zeroed(m + 1, n + 1);

    for j in 0..=n {
        table.set(0, j, j);
    }
    for i in 0..=m {
        table.set(i, 0, i);
    }

    // INVARIANT: row-major fill, so (i-1, *) and (i, j-1) are final before (i, j)
    for i in 1..=m {
        for j in 1..=n {
            let d = if s[i - 1] == t[j - 1] {
                table.get(i - 1, j - 1)
            } else {
                let delete = table.get(i - 1, j);
                let insert = table.get(i, j - 1);
                1 + delete.min(insert)
            };
            table.set(i, j, d);
        }
    }

    check_table_well_formed(s, t, &table);
    table
}

/// Delete/insert distance by full-table tabulation.
pub fn tabulated<T: PartialEq>(s: &[T], t: &[T]) -> usize {
    tabulated_with_footprint(s, t).0
}

/// Same as [`tabulated`], also reporting the table size.
pub fn tabulated_with_footprint<T: PartialEq>(s: &[T], t: &[T]) -> (usize, Footprint) {
    let table = build_table(s, t);
    let d = table.result();
    check_distance_bounds(s.len(), t.len(), d);
    (d, table.footprint())
}
