// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared vocabulary: which strategy ran, and what it cost in memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DistanceError;

/// One of the four interchangeable strategies.
///
/// All four compute the same number. They differ only in how long it takes
/// and how much memory they hold while doing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Plain recursion over `(i, j)`, no cache. Exponential.
    #[serde(rename = "naive")]
    Naive,
    /// Same recursion with a per-call `(i, j)` cache.
    #[serde(rename = "memo")]
    Memoized,
    /// Bottom-up fill of the full `(m+1) x (n+1)` table.
    #[serde(rename = "dp")]
    Tabulated,
    /// Two rolling rows sized by the shorter input.
    #[serde(rename = "dpopt")]
    SpaceOptimized,
}

impl Variant {
    /// Every variant, slowest first.
    pub const ALL: [Variant; 4] = [
        Variant::Naive,
        Variant::Memoized,
        Variant::Tabulated,
        Variant::SpaceOptimized,
    ];

    /// Short stable name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::Memoized => "memo",
            Variant::Tabulated => "dp",
            Variant::SpaceOptimized => "dpopt",
        }
    }

    /// Human-readable label for tables.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Naive => "Recursive",
            Variant::Memoized => "Memoized",
            Variant::Tabulated => "Tabulated DP",
            Variant::SpaceOptimized => "Optimized DP",
        }
    }

    /// Only the uncached recursion blows up with input size.
    pub fn is_exponential(self) -> bool {
        matches!(self, Variant::Naive)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naive" | "recursive" | "rec" => Ok(Variant::Naive),
            "memo" | "memoized" | "memoization" => Ok(Variant::Memoized),
            "dp" | "tabulated" | "table" => Ok(Variant::Tabulated),
            "dpopt" | "space-optimized" | "space_optimized" | "optimized" | "rolling" => {
                Ok(Variant::SpaceOptimized)
            }
            _ => Err(DistanceError::UnknownVariant(s.to_string())),
        }
    }
}

/// Auxiliary DP cells allocated by a single call.
///
/// Counts cells, not bytes. The recursion stack is not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Footprint {
    pub cells: usize,
}
