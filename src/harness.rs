// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cross-validation and timing around the four variants.
//!
//! Nothing here computes a distance of its own. It runs the variants side by
//! side, checks that they agree, and times them:
//!
//! - [`compare`]: every variant on one pair, with wall-clock timings
//! - [`cross_check`]: agreement over many pairs, spread over threads with the
//!   `parallel` feature
//! - [`Experiment`]: every ordered pair of named texts, every selected variant,
//!   repeated and averaged
//! - [`growth_profile`]: timings at increasing sizes of worst-case input, to
//!   watch polynomial and exponential growth diverge
//!
//! The naive variant is skipped, never run, on inputs the [`Limits`] rule out.

use serde::Serialize;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::{Limits, DEFAULT_MAX_TEXT_LEN};
use crate::distance::EditDistance;
use crate::error::DistanceError;
use crate::types::Variant;

// ============================================================================
// SINGLE-PAIR COMPARISON
// ============================================================================

/// One variant's run on one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub variant: Variant,
    /// The distance, or why the variant was not run.
    pub result: Result<usize, DistanceError>,
    pub elapsed: Duration,
}

/// Every variant's run on one pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub s_len: usize,
    pub t_len: usize,
    pub measurements: Vec<Measurement>,
}

impl Comparison {
    /// The distance every variant that ran agreed on.
    pub fn agreed(&self) -> Result<usize, DistanceError> {
        let results: Vec<(Variant, usize)> = self
            .measurements
            .iter()
            .filter_map(|m| m.result.as_ref().ok().map(|d| (m.variant, *d)))
            .collect();

        match results.first() {
            Some(&(_, first)) if results.iter().all(|&(_, d)| d == first) => Ok(first),
            _ => Err(DistanceError::Disagreement {
                s_len: self.s_len,
                t_len: self.t_len,
                results,
            }),
        }
    }
}

/// Run every variant on `s` and `t`, timing each.
pub fn compare<T: PartialEq>(s: &[T], t: &[T], limits: &Limits) -> Comparison {
    let measurements = Variant::ALL
        .into_iter()
        .map(|variant| {
            if let Err(e) = limits.check(variant, s.len(), t.len()) {
                tracing::warn!(%variant, "skipped: {}", e);
                return Measurement {
                    variant,
                    result: Err(e),
                    elapsed: Duration::ZERO,
                };
            }
            let start = Instant::now();
            let d = variant.distance(s, t);
            Measurement {
                variant,
                result: Ok(d),
                elapsed: start.elapsed(),
            }
        })
        .collect();

    Comparison {
        s_len: s.len(),
        t_len: t.len(),
        measurements,
    }
}

// ============================================================================
// BULK AGREEMENT
// ============================================================================

/// Distance all permitted variants agree on for one pair.
pub fn agree<T: PartialEq>(s: &[T], t: &[T], limits: &Limits) -> Result<usize, DistanceError> {
    let results: Vec<(Variant, usize)> = Variant::ALL
        .into_iter()
        .filter(|v| limits.allows(*v, s.len(), t.len()))
        .map(|v| (v, v.distance(s, t)))
        .collect();

    let first = results[0].1;
    if results.iter().all(|&(_, d)| d == first) {
        Ok(first)
    } else {
        Err(DistanceError::Disagreement {
            s_len: s.len(),
            t_len: t.len(),
            results,
        })
    }
}

/// Check that all variants agree on every pair.
///
/// Returns the number of pairs checked, or the first disagreement found. With
/// `parallel` set (and the feature built in) pairs are checked across threads,
/// so "first" means first found, not first in order.
pub fn cross_check<T, P>(pairs: &[(P, P)], limits: &Limits, parallel: bool) -> Result<usize, DistanceError>
where
    T: PartialEq,
    P: AsRef<[T]> + Sync,
{
    let check = |(s, t): &(P, P)| agree(s.as_ref(), t.as_ref(), limits).map(drop);

    #[cfg(feature = "parallel")]
    {
        if parallel {
            pairs.par_iter().try_for_each(check)?;
            tracing::debug!(pairs = pairs.len(), "cross-check passed (parallel)");
            return Ok(pairs.len());
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    pairs.iter().try_for_each(check)?;
    tracing::debug!(pairs = pairs.len(), "cross-check passed");
    Ok(pairs.len())
}

/// Every ordered pair of strings over `alphabet` up to `max_len` symbols.
///
/// Grows as `(|alphabet|^(max_len+1))^2`, so keep both small.
pub fn exhaustive_pairs(alphabet: &[u8], max_len: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut words: Vec<Vec<u8>> = vec![Vec::new()];
    let mut frontier: Vec<Vec<u8>> = vec![Vec::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|w| {
                alphabet.iter().map(move |&c| {
                    let mut next = w.clone();
                    next.push(c);
                    next
                })
            })
            .collect();
        words.extend(frontier.iter().cloned());
    }

    let mut pairs = Vec::with_capacity(words.len() * words.len());
    for s in &words {
        for t in &words {
            pairs.push((s.clone(), t.clone()));
        }
    }
    pairs
}

// ============================================================================
// TEXT EXPERIMENT
// ============================================================================

/// A text under test, with the name it's reported by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedText {
    pub name: String,
    pub text: String,
}

/// Size of a text, as a reader and as the engine sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Symbols the engine compares.
    pub bytes: usize,
    pub chars: usize,
    pub words: usize,
}

pub fn text_stats(text: &str) -> TextStats {
    TextStats {
        bytes: text.len(),
        chars: text.chars().count(),
        words: text.split_whitespace().count(),
    }
}

/// The first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// One row of experiment output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentRecord {
    pub from: String,
    pub to: String,
    /// Symbols of `from` actually compared, after truncation.
    pub from_len: usize,
    pub to_len: usize,
    #[serde(rename = "algo")]
    pub variant: Variant,
    pub distance: usize,
    /// Mean over `runs` repetitions.
    pub time_ms: f64,
    pub runs: usize,
}

/// Every ordered pair of distinct texts through every selected variant.
///
/// Each text is cut to its first `max_text_len` characters before it is
/// compared ([`DEFAULT_MAX_TEXT_LEN`] unless set with
/// [`Experiment::with_max_text_len`]).
#[derive(Debug, Clone)]
pub struct Experiment<'a> {
    texts: &'a [NamedText],
    variants: Vec<Variant>,
    repeat: usize,
    limits: Limits,
    max_text_len: usize,
}

impl<'a> Experiment<'a> {
    /// Repeated variants are dropped, first occurrence wins.
    pub fn new(texts: &'a [NamedText], variants: Vec<Variant>, repeat: usize, limits: Limits) -> Self {
        let mut unique = Vec::with_capacity(variants.len());
        for variant in variants {
            if !unique.contains(&variant) {
                unique.push(variant);
            }
        }
        Self {
            texts,
            variants: unique,
            repeat: repeat.max(1),
            limits,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Text `i` as the variants see it.
    fn compared(&self, i: usize) -> &'a [u8] {
        let texts: &'a [NamedText] = self.texts;
        truncate_chars(&texts[i].text, self.max_text_len).as_bytes()
    }

    /// `(from, to, variant)` for every run the limits permit.
    pub fn jobs(&self) -> Vec<(usize, usize, Variant)> {
        let mut jobs = Vec::new();
        for i in 0..self.texts.len() {
            for j in 0..self.texts.len() {
                if i == j {
                    continue;
                }
                let (s_len, t_len) = (self.compared(i).len(), self.compared(j).len());
                for &variant in &self.variants {
                    if self.limits.allows(variant, s_len, t_len) {
                        jobs.push((i, j, variant));
                    }
                }
            }
        }
        jobs
    }

    /// Run every job, calling `observe` as each record completes.
    pub fn run(&self, mut observe: impl FnMut(&ExperimentRecord)) -> Vec<ExperimentRecord> {
        let jobs = self.jobs();
        let pairs = self.texts.len() * self.texts.len().saturating_sub(1);
        let skipped = pairs * self.variants.len() - jobs.len();
        if skipped > 0 {
            tracing::warn!(skipped, "exponential runs skipped: input too large");
        }
        for text in self.texts {
            let chars = text.text.chars().count();
            if chars > self.max_text_len {
                tracing::info!(text = %text.name, chars, kept = self.max_text_len, "text truncated");
            }
        }
        tracing::info!(jobs = jobs.len(), repeat = self.repeat, "starting experiment");

        let mut records = Vec::with_capacity(jobs.len());
        for (i, j, variant) in jobs {
            let (from, to) = (&self.texts[i], &self.texts[j]);
            let (s, t) = (self.compared(i), self.compared(j));

            let mut total = Duration::ZERO;
            let mut d = 0;
            for _ in 0..self.repeat {
                let start = Instant::now();
                d = variant.distance(s, t);
                total += start.elapsed();
            }

            let record = ExperimentRecord {
                from: from.name.clone(),
                to: to.name.clone(),
                from_len: s.len(),
                to_len: t.len(),
                variant,
                distance: d,
                time_ms: total.as_secs_f64() * 1000.0 / self.repeat as f64,
                runs: self.repeat,
            };
            tracing::info!(from = %record.from, to = %record.to, %variant, distance = d, time_ms = record.time_ms, "measured");
            observe(&record);
            records.push(record);
        }
        records
    }
}

/// Mean time per variant across a set of records, in [`Variant::ALL`] order.
pub fn mean_time_by_variant(records: &[ExperimentRecord]) -> Vec<(Variant, f64)> {
    Variant::ALL
        .into_iter()
        .filter_map(|variant| {
            let times: Vec<f64> = records
                .iter()
                .filter(|r| r.variant == variant)
                .map(|r| r.time_ms)
                .collect();
            if times.is_empty() {
                None
            } else {
                Some((variant, times.iter().sum::<f64>() / times.len() as f64))
            }
        })
        .collect()
}

/// Check that every pair of texts got the same distance from every variant.
pub fn records_agree(records: &[ExperimentRecord]) -> Result<(), DistanceError> {
    for record in records {
        let results: Vec<(Variant, usize)> = records
            .iter()
            .filter(|r| r.from == record.from && r.to == record.to)
            .map(|r| (r.variant, r.distance))
            .collect();
        if results.iter().any(|&(_, d)| d != record.distance) {
            return Err(DistanceError::TextsDisagree {
                from: record.from.clone(),
                to: record.to.clone(),
                s_len: record.from_len,
                t_len: record.to_len,
                results,
            });
        }
    }
    Ok(())
}

// ============================================================================
// GROWTH PROFILE
// ============================================================================

/// Timing for one input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    /// Length of each input; the pair has `2 * size` symbols in total.
    pub size: usize,
    pub distance: usize,
    pub time_us: f64,
}

/// Worst-case pair of a given size: two runs with no symbol in common.
pub fn disjoint_pair(size: usize) -> (Vec<u8>, Vec<u8>) {
    (vec![b'A'; size], vec![b'B'; size])
}

/// Time `variant` on disjoint inputs of each size.
///
/// Stops at the first size the limits rule out, so the naive variant yields
/// a shorter profile.
pub fn growth_profile(variant: Variant, sizes: &[usize], limits: &Limits) -> Vec<GrowthPoint> {
    let mut points = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if !limits.allows(variant, size, size) {
            tracing::warn!(%variant, size, "profile stopped: input too large");
            break;
        }
        let (s, t) = disjoint_pair(size);
        let start = Instant::now();
        let distance = variant.distance(&s, &t);
        let time_us = start.elapsed().as_secs_f64() * 1_000_000.0;
        points.push(GrowthPoint {
            size,
            distance,
            time_us,
        });
    }
    points
}
