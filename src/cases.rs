// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Worked examples with known answers.
//!
//! Small enough to check by hand, and together they hit every branch of the
//! recurrence: empty inputs on either side, a pure insertion, a pure deletion,
//! and inputs with nothing in common.

use serde::Serialize;

use crate::distance::{distance, EditDistance};
use crate::types::Variant;

/// A scenario with its expected distance and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedExample {
    pub source: &'static str,
    pub target: &'static str,
    pub expected: usize,
    pub justification: &'static str,
}

pub const WORKED_EXAMPLES: &[WorkedExample] = &[
    WorkedExample {
        source: "",
        target: "AB",
        expected: 2,
        justification: "2 inserts",
    },
    WorkedExample {
        source: "AB",
        target: "",
        expected: 2,
        justification: "2 deletes",
    },
    WorkedExample {
        source: "AB",
        target: "ABC",
        expected: 1,
        justification: "1 insert",
    },
    WorkedExample {
        source: "ABC",
        target: "AB",
        expected: 1,
        justification: "1 delete",
    },
    WorkedExample {
        source: "AB",
        target: "XYZ",
        expected: 5,
        justification: "2 deletes + 3 inserts",
    },
    WorkedExample {
        source: "ABC",
        target: "XYZ",
        expected: 6,
        justification: "3 deletes + 3 inserts",
    },
    WorkedExample {
        source: "HELLO",
        target: "WORLD",
        expected: 8,
        justification: "keep one 'L' or 'O', 4 deletes + 4 inserts",
    },
];

/// Strings compared against each other in the pairwise matrix.
pub const PAIRWISE_STRINGS: [&str; 4] = ["", "AB", "ABC", "XYZ"];

/// Result of running one worked example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseOutcome {
    pub source: &'static str,
    pub target: &'static str,
    pub expected: usize,
    pub actual: usize,
    pub justification: &'static str,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }
}

/// Run every worked example through `variant`.
pub fn verify_worked_examples(variant: Variant) -> Vec<CaseOutcome> {
    WORKED_EXAMPLES
        .iter()
        .map(|case| CaseOutcome {
            source: case.source,
            target: case.target,
            expected: case.expected,
            actual: variant.distance(case.source.as_bytes(), case.target.as_bytes()),
            justification: case.justification,
        })
        .collect()
}

/// Distance for every ordered pair of distinct [`PAIRWISE_STRINGS`].
pub fn pairwise_matrix(variant: Variant) -> Vec<(&'static str, &'static str, usize)> {
    let mut out = Vec::with_capacity(PAIRWISE_STRINGS.len() * (PAIRWISE_STRINGS.len() - 1));
    for (i, s) in PAIRWISE_STRINGS.iter().enumerate() {
        for (j, t) in PAIRWISE_STRINGS.iter().enumerate() {
            if i != j {
                out.push((*s, *t, distance(s.as_bytes(), t.as_bytes(), variant)));
            }
        }
    }
    out
}
