// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::distance::EditDistance;
use crate::types::Variant;

/// Every variant's answer for one pair, in [`Variant::ALL`] order.
///
/// Runs the naive variant too, so keep inputs small.
pub fn all_distances(s: &[u8], t: &[u8]) -> [usize; 4] {
    Variant::ALL.map(|variant| variant.distance(s, t))
}

/// Assert all four variants agree and return the shared distance.
///
/// This is the canonical implementation used across all tests.
pub fn assert_all_agree(s: &[u8], t: &[u8]) -> usize {
    let distances = all_distances(s, t);
    assert!(
        distances.iter().all(|&d| d == distances[0]),
        "variants disagree on {:?} -> {:?}: {:?}",
        String::from_utf8_lossy(s),
        String::from_utf8_lossy(t),
        distances
    );
    distances[0]
}

/// A string of `len` symbols cycling through `alphabet`.
pub fn cycle(alphabet: &[u8], len: usize) -> Vec<u8> {
    alphabet.iter().copied().cycle().take(len).collect()
}

/// Deterministic pseudo-random sequence (xorshift), for inputs too long to
/// hand-write and too large for proptest shrinking to be useful.
pub fn pseudo_random(alphabet: &[u8], len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % alphabet.len() as u64) as usize]
        })
        .collect()
}
