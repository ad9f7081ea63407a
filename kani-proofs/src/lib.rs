// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the delins dynamic programs.
//!
//! This standalone crate carries the full-table fill and the two-row fill
//! and proves that, for every input up to a few symbols, they never panic
//! and give the same answer.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither fill indexes out of bounds
//! 2. **Equivalence**: rolling rows == full table, either argument order
//! 3. **Bounds**: |m - n| <= d <= m + n, with the parity of m + n

/// Longest input the proofs enumerate symbolically.
pub const MAX_LEN: usize = 4;

// ============================================================================
// FULL TABLE (copied from src/distance/table.rs)
// ============================================================================

/// Prefix-table fill, `(m+1) x (n+1)` cells, row-major.
pub fn table_distance(s: &[u8], t: &[u8]) -> usize {
    let (m, n) = (s.len(), t.len());
    let cols = n + 1;
    let mut cells = vec![0usize; (m + 1) * cols];

    for j in 0..=n {
        cells[j] = j;
    }
    for i in 1..=m {
        cells[i * cols] = i;
        for j in 1..=n {
            cells[i * cols + j] = if s[i - 1] == t[j - 1] {
                cells[(i - 1) * cols + j - 1]
            } else {
                1 + cells[(i - 1) * cols + j].min(cells[i * cols + j - 1])
            };
        }
    }
    cells[m * cols + n]
}

// ============================================================================
// ROLLING ROWS (copied from src/distance/rolling.rs)
// ============================================================================

/// Two-row fill, rows sized by the shorter input.
pub fn rolling_distance(s: &[u8], t: &[u8]) -> usize {
    let (shorter, longer) = if s.len() > t.len() { (t, s) } else { (s, t) };
    let width = shorter.len() + 1;

    let mut previous: Vec<usize> = (0..width).collect();
    let mut current = vec![0; width];

    for (j, long_symbol) in longer.iter().enumerate() {
        current[0] = j + 1;
        for i in 1..width {
            current[i] = if *long_symbol == shorter[i - 1] {
                previous[i - 1]
            } else {
                1 + previous[i].min(current[i - 1])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[shorter.len()]
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic sequence of symbolic length, over a two-symbol alphabet so
    /// matches are as likely as mismatches.
    fn any_sequence() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut buf = [0u8; MAX_LEN];
        for slot in buf.iter_mut() {
            *slot = kani::any_where(|&c: &u8| c < 2);
        }
        (buf, len)
    }

    /// Verify the rolling fill equals the full table for every short pair.
    #[kani::proof]
    #[kani::unwind(6)] // MAX_LEN + 2
    fn verify_rolling_matches_table() {
        let (s, m) = any_sequence();
        let (t, n) = any_sequence();
        let (s, t) = (&s[..m], &t[..n]);

        let table = table_distance(s, t);
        kani::assert(rolling_distance(s, t) == table, "rolling must match table");
        kani::assert(rolling_distance(t, s) == table, "role swap must not change the answer");
    }

    /// Verify the distance bounds and parity.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_bounds_and_parity() {
        let (s, m) = any_sequence();
        let (t, n) = any_sequence();
        let d = rolling_distance(&s[..m], &t[..n]);

        let low = if m > n { m - n } else { n - m };
        kani::assert(d >= low, "distance below |m - n|");
        kani::assert(d <= m + n, "distance above m + n");
        kani::assert(d % 2 == (m + n) % 2, "distance parity must match m + n");
    }

    /// Verify identical inputs cost nothing.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_identity() {
        let (s, m) = any_sequence();
        kani::assert(rolling_distance(&s[..m], &s[..m]) == 0, "d(S, S) must be 0");
    }
}
