// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Delete/insert edit distance, four ways.
//!
//! The distance between `S` and `T` is the fewest single-symbol deletions and
//! insertions that turn one into the other. Substitution isn't an operation,
//! so it always equals `|S| + |T| - 2·LCS(S, T)`.
//!
//! Four strategies compute it, and they must all agree:
//!
//! ```text
//! ┌──────────────────┐   cache    ┌───────────────────┐
//! │  NaiveRecursive  │──────────▶│ MemoizedRecursive │
//! │  O(2^(m+n))      │            │ O(m·n) / O(m·n)   │
//! └──────────────────┘            └───────────────────┘
//!          │ same recurrence, bottom-up
//!          ▼
//! ┌──────────────────┐  two rows  ┌───────────────────┐
//! │   TabulatedDp    │──────────▶│ SpaceOptimizedDp  │
//! │  O(m·n) / O(m·n) │            │ O(m·n) / O(min)   │
//! └──────────────────┘            └───────────────────┘
//! ```
//!
//! Around the engine: `contracts` (debug-build invariants), `harness`
//! (cross-validation and timing), `cases` (worked examples), and `config`
//! (limits for the exponential variant).
//!
//! # Usage
//!
//! ```
//! use delins::{distance, EditDistance, SpaceOptimizedDp, Variant};
//!
//! assert_eq!(distance(b"HELLO", b"WORLD", Variant::Tabulated), 8);
//! assert_eq!(SpaceOptimizedDp.distance(b"AB", b"ABC"), 1);
//! ```

pub mod cases;
pub mod config;
pub mod contracts;
pub mod distance;
mod error;
pub mod harness;
pub mod testing;
mod types;

pub use config::{HarnessConfig, Limits};
pub use distance::{
    build_table, distance, distance_checked, memoized, naive, space_optimized, str_distance,
    tabulated, DpTable, EditDistance, MemoizedRecursive, NaiveRecursive, SpaceOptimizedDp,
    TabulatedDp,
};
pub use error::DistanceError;
pub use types::{Footprint, Variant};
