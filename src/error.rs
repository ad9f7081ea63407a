// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the engine.
//!
//! The four distance functions themselves cannot fail: every pair of finite
//! sequences has a distance. What can go wrong is everything around them. A
//! caller asks for the exponential variant on input it will never finish, a
//! harness gets a variant name it doesn't know, or cross-validation catches two
//! variants disagreeing (which is a bug, never a user error).

use std::fmt;

use crate::types::Variant;

/// Error type for guarded calls and harness operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// The variant would run too long on input this size.
    InputTooLarge {
        variant: Variant,
        combined_len: usize,
        limit: usize,
    },
    /// A variant name that matches none of the four.
    UnknownVariant(String),
    /// Two or more variants returned different distances for the same input.
    Disagreement {
        s_len: usize,
        t_len: usize,
        results: Vec<(Variant, usize)>,
    },
    /// Variants disagreed on a pair of named texts in an experiment.
    TextsDisagree {
        from: String,
        to: String,
        s_len: usize,
        t_len: usize,
        results: Vec<(Variant, usize)>,
    },
}

fn list_results(results: &[(Variant, usize)]) -> String {
    results
        .iter()
        .map(|(variant, d)| format!("{}={}", variant, d))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::InputTooLarge {
                variant,
                combined_len,
                limit,
            } => {
                write!(
                    f,
                    "{} refused: combined length {} exceeds limit {}",
                    variant, combined_len, limit
                )
            }
            DistanceError::UnknownVariant(name) => {
                write!(
                    f,
                    "unknown variant '{}' (expected one of: naive, memo, dp, dpopt)",
                    name
                )
            }
            DistanceError::Disagreement {
                s_len,
                t_len,
                results,
            } => {
                write!(
                    f,
                    "variants disagree on |S|={} |T|={}: {}",
                    s_len,
                    t_len,
                    list_results(results)
                )
            }
            DistanceError::TextsDisagree {
                from,
                to,
                s_len,
                t_len,
                results,
            } => {
                write!(
                    f,
                    "variants disagree on {} (|S|={}) → {} (|T|={}): {}",
                    from,
                    s_len,
                    to,
                    t_len,
                    list_results(results)
                )
            }
        }
    }
}

impl std::error::Error for DistanceError {}
