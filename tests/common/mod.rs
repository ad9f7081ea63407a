//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export canonical test utilities from delins::testing
pub use delins::testing::{all_distances, assert_all_agree, cycle, pseudo_random};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sequences over a small alphabet, so random pairs share plenty of symbols.
pub fn seq(alphabet: &'static [u8], max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(alphabet.to_vec()), 0..=max_len)
}

/// Short enough for the naive variant.
pub fn short_seq() -> impl Strategy<Value = Vec<u8>> {
    seq(b"ABC", 8)
}

/// Long enough to be interesting for the polynomial variants.
pub fn dna_seq() -> impl Strategy<Value = Vec<u8>> {
    seq(b"ACGT", 80)
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Opening lines of three public-domain novels, used as experiment texts.
pub const PASSAGES: [(&str, &str); 3] = [
    (
        "austen.txt",
        "It is a truth universally acknowledged, that a single man in possession \
         of a good fortune, must be in want of a wife.",
    ),
    (
        "melville.txt",
        "Call me Ishmael. Some years ago, never mind how long precisely, having \
         little or no money in my purse.",
    ),
    (
        "dickens.txt",
        "It was the best of times, it was the worst of times, it was the age of \
         wisdom, it was the age of foolishness.",
    ),
];
