// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Harness configuration.
//!
//! The engine itself takes no configuration. The harness needs a little:
//! how large an input the naive variant may be given, how much of each text
//! the experiment compares, how many times to repeat each timed run, and which
//! color theme to draw with.
//!
//! # Precedence (lowest to highest)
//!
//! 1. Built-in defaults
//! 2. JSON config file (`--config path.json`)
//! 3. Environment: `DELINS_NAIVE_LIMIT`, `DELINS_MAX_LEN`, `DELINS_REPEAT`,
//!    `DELINS_THEME`
//! 4. Command-line flags

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::DistanceError;
use crate::types::Variant;

/// Default ceiling on `|S| + |T|` for the naive variant.
///
/// Past this the uncached recursion stops finishing in well under a second.
pub const DEFAULT_NAIVE_LIMIT: usize = 25;

/// Default number of characters kept from each experiment text.
///
/// The table-backed variants allocate `(m + 1)(n + 1)` cells, so whole books
/// are out of reach.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1000;

/// Default number of timed repetitions per experiment cell.
pub const DEFAULT_REPEAT: usize = 3;

pub const ENV_NAIVE_LIMIT: &str = "DELINS_NAIVE_LIMIT";
pub const ENV_MAX_LEN: &str = "DELINS_MAX_LEN";
pub const ENV_REPEAT: &str = "DELINS_REPEAT";
pub const ENV_THEME: &str = "DELINS_THEME";

/// Input-size guard for exponential variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    pub naive_max_combined_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            naive_max_combined_len: DEFAULT_NAIVE_LIMIT,
        }
    }
}

impl Limits {
    /// No ceiling at all. The naive variant runs on anything.
    pub fn unbounded() -> Self {
        Self {
            naive_max_combined_len: usize::MAX,
        }
    }

    /// Would `variant` be allowed to run on inputs of these lengths?
    pub fn allows(&self, variant: Variant, s_len: usize, t_len: usize) -> bool {
        !variant.is_exponential() || s_len.saturating_add(t_len) <= self.naive_max_combined_len
    }

    /// Like [`Limits::allows`], with the reason attached.
    pub fn check(&self, variant: Variant, s_len: usize, t_len: usize) -> Result<(), DistanceError> {
        if self.allows(variant, s_len, t_len) {
            Ok(())
        } else {
            Err(DistanceError::InputTooLarge {
                variant,
                combined_len: s_len.saturating_add(t_len),
                limit: self.naive_max_combined_len,
            })
        }
    }
}

/// Everything the command-line harness can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HarnessConfig {
    pub limits: Limits,
    /// Characters kept from the start of each experiment text.
    pub max_text_len: usize,
    /// Timed repetitions per measurement; the mean is reported.
    pub repeat: usize,
    /// "dark" or "light"; `None` means detect.
    pub theme: Option<String>,
    /// Spread independent pairs across threads when the feature is built in.
    pub parallel: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            repeat: DEFAULT_REPEAT,
            theme: None,
            parallel: true,
        }
    }
}

impl HarnessConfig {
    /// Parse a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Overlay values from the process environment.
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values from `lookup`. Unparseable values are logged and skipped.
    pub fn apply_env_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup(ENV_NAIVE_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(limit) => self.limits.naive_max_combined_len = limit,
                Err(_) => tracing::warn!(key = ENV_NAIVE_LIMIT, value = %raw, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_MAX_LEN) {
            match raw.trim().parse::<usize>() {
                Ok(len) => self.max_text_len = len,
                Err(_) => tracing::warn!(key = ENV_MAX_LEN, value = %raw, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_REPEAT) {
            match raw.trim().parse::<usize>() {
                Ok(repeat) if repeat > 0 => self.repeat = repeat,
                _ => tracing::warn!(key = ENV_REPEAT, value = %raw, "ignoring invalid value"),
            }
        }

        if let Some(raw) = lookup(ENV_THEME) {
            self.theme = Some(raw);
        }

        self
    }
}
