// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the text experiment.
//!
//! Arbitrary UTF-8 texts go through every ordered pair and every variant the
//! limits allow. The records must agree pair by pair and never include the
//! naive variant on texts past the limit.

#![no_main]

use arbitrary::Arbitrary;
use delins::harness::{records_agree, Experiment, NamedText};
use delins::{Limits, Variant};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ExperimentInput {
    texts: Vec<String>,
}

const LIMITS: Limits = Limits {
    naive_max_combined_len: 12,
};

fuzz_target!(|input: ExperimentInput| {
    let texts: Vec<NamedText> = input
        .texts
        .into_iter()
        .take(4)
        .enumerate()
        .map(|(i, text)| NamedText {
            name: format!("text{}", i),
            text: text.chars().take(64).collect(),
        })
        .collect();

    let records = Experiment::new(&texts, Variant::ALL.to_vec(), 1, LIMITS).run(|_| {});

    if let Err(e) = records_agree(&records) {
        panic!("{}", e);
    }
    for record in &records {
        assert_ne!(record.from, record.to);
        let from = texts.iter().find(|t| t.name == record.from).map_or(0, |t| t.text.len());
        let to = texts.iter().find(|t| t.name == record.to).map_or(0, |t| t.text.len());
        assert_eq!((record.from_len, record.to_len), (from, to));
        if record.variant == Variant::Naive {
            assert!(from + to <= LIMITS.naive_max_combined_len);
        }
    }
});
