// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the delins command-line harness.
//!
//! The harness is a thin shell over the library: compute one distance, race
//! the four variants on one pair, check the worked examples, or run the
//! pairwise text experiment and growth profile.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use delins::Variant;

#[derive(Parser)]
#[command(
    name = "delins",
    about = "Delete/insert edit distance, four ways",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file (limits, repeat count, theme)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Largest |S| + |T| the naive variant may run on
    #[arg(long, global = true)]
    pub naive_limit: Option<usize>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute one distance
    Distance {
        /// Source sequence
        source: String,

        /// Target sequence
        target: String,

        /// naive, memo, dp or dpopt
        #[arg(short = 'a', long, default_value = "dpopt")]
        variant: Variant,

        /// Run the naive variant even past the size limit
        #[arg(long)]
        force: bool,
    },

    /// Run all four variants on one pair and compare timings
    Compare {
        /// Source sequence
        source: String,

        /// Target sequence
        target: String,
    },

    /// Print the pairwise matrix and check the worked examples
    Cases {
        /// Variant to check (default: all four)
        #[arg(short = 'a', long)]
        variant: Option<Variant>,
    },

    /// Distance between the contents of two files, printed as "distance,micros"
    Files {
        /// File holding the source text
        source: PathBuf,

        /// File holding the target text
        target: PathBuf,

        /// naive, memo, dp or dpopt
        #[arg(short = 'a', long, default_value = "dpopt")]
        variant: Variant,
    },

    /// Every ordered pair of texts through every selected variant
    Experiment {
        /// Text files to compare (at least two)
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        /// Variants to run (repeatable; default: all four, naive only where small enough)
        #[arg(short = 'a', long = "variant")]
        variants: Vec<Variant>,

        /// Timed repetitions per measurement
        #[arg(short, long)]
        repeat: Option<usize>,

        /// Characters kept from the start of each text (default 1000)
        #[arg(long)]
        max_len: Option<usize>,

        /// Write records as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Time a variant on worst-case inputs of growing size
    Profile {
        /// naive, memo, dp or dpopt
        #[arg(short = 'a', long, default_value = "naive")]
        variant: Variant,

        /// Largest input length per side
        #[arg(long, default_value = "12")]
        max: usize,

        /// Step between sizes
        #[arg(long, default_value = "1")]
        step: usize,
    },

    /// Cross-check all variants on every pair of short strings
    Verify {
        /// Symbols to build strings from
        #[arg(long, default_value = "AB")]
        alphabet: String,

        /// Longest string length
        #[arg(long, default_value = "5")]
        max_len: usize,
    },
}
