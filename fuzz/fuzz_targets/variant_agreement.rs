// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-variant agreement.
//!
//! All four variants compute the same number by different roads. Any input
//! where two of them disagree is a bug in at least one.

#![no_main]

use arbitrary::Arbitrary;
use delins::harness::agree;
use delins::{space_optimized, Limits};
use libfuzzer_sys::fuzz_target;

/// Fuzz input: two byte sequences
#[derive(Debug, Arbitrary)]
struct PairInput {
    source: Vec<u8>,
    target: Vec<u8>,
}

/// Naive recursion gets only tiny inputs; everything else gets all of it.
const LIMITS: Limits = Limits {
    naive_max_combined_len: 14,
};

fuzz_target!(|input: PairInput| {
    // Cap lengths to avoid timeouts
    let s = &input.source[..input.source.len().min(300)];
    let t = &input.target[..input.target.len().min(300)];

    let d = match agree(s, t, &LIMITS) {
        Ok(d) => d,
        Err(e) => panic!("{}", e),
    };

    let (m, n) = (s.len(), t.len());
    assert!(d >= m.abs_diff(n) && d <= m + n, "d={} out of bounds for {}x{}", d, m, n);
    assert_eq!(d % 2, (m + n) % 2, "parity broken for {}x{}", m, n);
    assert_eq!(space_optimized(t, s), d, "not symmetric");
});
