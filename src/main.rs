// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use delins::cases::{pairwise_matrix, verify_worked_examples};
use delins::harness::{
    compare, cross_check, exhaustive_pairs, growth_profile, mean_time_by_variant, records_agree,
    text_stats, Experiment, ExperimentRecord, NamedText,
};
use delins::{distance_checked, HarnessConfig, Limits, Variant};

mod cli;
use cli::display::{self, *};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins unless
/// `-v` was given.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the config file, then the environment, then flags.
fn load_config(cli: &Cli) -> Result<HarnessConfig> {
    let config = match &cli.config {
        Some(path) => HarnessConfig::from_file(path).map_err(anyhow::Error::msg)?,
        None => HarnessConfig::default(),
    };
    let mut config = config.apply_env();
    if let Some(limit) = cli.naive_limit {
        config.limits.naive_max_combined_len = limit;
    }

    if let Some(name) = &config.theme {
        match Theme::parse(name) {
            Some(theme) => display::set_theme(theme),
            None => tracing::warn!(theme = %name, "unknown theme, detecting instead"),
        }
    }

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Distance {
            source,
            target,
            variant,
            force,
        } => run_distance(&source, &target, variant, force, &config),
        Commands::Compare { source, target } => run_compare(&source, &target, &config),
        Commands::Cases { variant } => run_cases(variant),
        Commands::Files {
            source,
            target,
            variant,
        } => run_files(&source, &target, variant, &config),
        Commands::Experiment {
            files,
            variants,
            repeat,
            max_len,
            json,
        } => {
            let mut config = config;
            if let Some(len) = max_len {
                config.max_text_len = len;
            }
            run_experiment(&files, variants, repeat, json.as_deref(), &config)
        }
        Commands::Profile { variant, max, step } => run_profile(variant, max, step, &config),
        Commands::Verify { alphabet, max_len } => run_verify(&alphabet, max_len, &config),
    }
}

fn run_distance(
    source: &str,
    target: &str,
    variant: Variant,
    force: bool,
    config: &HarnessConfig,
) -> Result<()> {
    let limits = if force {
        Limits::unbounded()
    } else {
        config.limits
    };

    let start = Instant::now();
    let d = distance_checked(source.as_bytes(), target.as_bytes(), variant, &limits)
        .map_err(|e| anyhow::anyhow!("{} (pass --force to run anyway)", e))?;
    let elapsed = start.elapsed();

    println!(
        "{} → {} = {}  {}{}",
        quoted(source, 32),
        quoted(target, 32),
        themed(BRIGHT_CYAN, &[BOLD], &d.to_string()),
        variant_label(variant),
        duration_us(elapsed)
    );
    Ok(())
}

fn run_compare(source: &str, target: &str, config: &HarnessConfig) -> Result<()> {
    let comparison = compare(source.as_bytes(), target.as_bytes(), &config.limits);

    title(&format!(
        "{} → {}",
        quoted(source, 24),
        quoted(target, 24)
    ));
    section_top("VARIANTS");
    for m in &comparison.measurements {
        let outcome = match &m.result {
            Ok(d) => format!("{} {}", pad_left(&d.to_string(), 8), duration_us(m.elapsed)),
            Err(e) => note(&e.to_string()),
        };
        row(&format!(" {} {}", variant_label(m.variant), outcome));
    }

    section_mid("RESULT");
    let agreed = comparison.agreed();
    match &agreed {
        Ok(d) => row(&format!(" {} all variants agree: {}", pass_mark(true), d)),
        Err(e) => row(&format!(" {} {}", pass_mark(false), e)),
    }
    section_bot();

    agreed.map(drop).map_err(anyhow::Error::from)
}

fn run_cases(variant: Option<Variant>) -> Result<()> {
    let variants = match variant {
        Some(v) => vec![v],
        None => Variant::ALL.to_vec(),
    };

    let mut failures = 0;
    for variant in variants {
        section_top(&format!("WORKED EXAMPLES · {}", variant.label()));
        for outcome in verify_worked_examples(variant) {
            if !outcome.passed() {
                failures += 1;
            }
            row(&format!(
                " {} {} → {} {} {}",
                pass_mark(outcome.passed()),
                pad_right(&quoted(outcome.source, 10), 9),
                pad_right(&quoted(outcome.target, 10), 9),
                pad_left(&format!("{} (want {})", outcome.actual, outcome.expected), 14),
                note(outcome.justification)
            ));
        }

        section_mid("PAIRWISE");
        for (s, t, d) in pairwise_matrix(variant) {
            row(&format!(
                "   {} → {} {}",
                pad_right(&quoted(s, 10), 9),
                pad_right(&quoted(t, 10), 9),
                pad_left(&d.to_string(), 4)
            ));
        }
        section_bot();
    }

    if failures > 0 {
        bail!("{} worked example(s) failed", failures);
    }
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_files(source: &Path, target: &Path, variant: Variant, config: &HarnessConfig) -> Result<()> {
    let s = read_text(source)?;
    let t = read_text(target)?;

    let start = Instant::now();
    let d = distance_checked(s.as_bytes(), t.as_bytes(), variant, &config.limits)?;
    let micros = start.elapsed().as_micros();

    println!("{},{}", d, micros);
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn run_experiment(
    files: &[PathBuf],
    variants: Vec<Variant>,
    repeat: Option<usize>,
    json: Option<&Path>,
    config: &HarnessConfig,
) -> Result<()> {
    let texts = files
        .iter()
        .map(|path| {
            Ok(NamedText {
                name: file_name(path),
                text: read_text(path)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let variants = if variants.is_empty() {
        Variant::ALL.to_vec()
    } else {
        variants
    };
    let experiment = Experiment::new(&texts, variants, repeat.unwrap_or(config.repeat), config.limits)
        .with_max_text_len(config.max_text_len);

    section_top("TEXTS");
    for text in &texts {
        let stats = text_stats(&text.text);
        let kept = stats.chars.min(config.max_text_len);
        row(&format!(
            " {} {} words {} chars {}",
            pad_right(&text.name, 24),
            pad_left(&stats.words.to_string(), 10),
            pad_left(&stats.chars.to_string(), 10),
            note(&format!("{} compared", kept))
        ));
    }
    section_bot();

    #[cfg(feature = "parallel")]
    let progress = {
        let pb = ProgressBar::new(experiment.jobs().len() as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
            )?
            .progress_chars("━━╸"),
        );
        pb.set_prefix("Measuring");
        pb
    };

    let records = experiment.run(|record| {
        #[cfg(feature = "parallel")]
        {
            progress.set_message(format!("{} → {}", record.from, record.to));
            progress.inc(1);
        }
        #[cfg(not(feature = "parallel"))]
        tracing::debug!(from = %record.from, to = %record.to, "done");
    });

    #[cfg(feature = "parallel")]
    progress.finish_and_clear();

    print_records(&records);

    if let Some(path) = json {
        let out = serde_json::to_string_pretty(&records)?;
        fs::write(path, out).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), records = records.len(), "results written");
    }

    records_agree(&records)?;
    Ok(())
}

fn print_records(records: &[ExperimentRecord]) {
    section_top("RESULTS");
    for r in records {
        row(&format!(
            " {} {} {} {}{}",
            pad_right(&format!("{} ({})", r.from, r.from_len), 20),
            pad_right(&format!("{} ({})", r.to, r.to_len), 20),
            variant_label(r.variant),
            pad_left(&r.distance.to_string(), 8),
            timing_us(r.time_ms * 1000.0)
        ));
    }

    section_mid("MEAN TIME");
    for (variant, mean_ms) in mean_time_by_variant(records) {
        row(&format!(
            " {} {}",
            variant_label(variant),
            timing_us(mean_ms * 1000.0)
        ));
    }
    section_bot();
}

fn run_profile(variant: Variant, max: usize, step: usize, config: &HarnessConfig) -> Result<()> {
    if step == 0 {
        bail!("--step must be at least 1");
    }
    let sizes: Vec<usize> = (0..=max).step_by(step).collect();
    let points = growth_profile(variant, &sizes, &config.limits);

    section_top(&format!("GROWTH · {}", variant.label()));
    let mut previous: Option<f64> = None;
    for point in &points {
        let ratio = match previous {
            Some(prev) if prev > 0.0 => format!("×{:.1}", point.time_us / prev),
            _ => String::new(),
        };
        row(&format!(
            " n={} d={} {} {}",
            pad_left(&point.size.to_string(), 6),
            pad_left(&point.distance.to_string(), 6),
            timing_us(point.time_us),
            note(&ratio)
        ));
        previous = Some(point.time_us);
    }
    if points.len() < sizes.len() {
        row(&note(&format!(
            " stopped at n={}: past the naive limit of {}",
            sizes[points.len()],
            config.limits.naive_max_combined_len
        )));
    }
    section_bot();
    Ok(())
}

fn run_verify(alphabet: &str, max_len: usize, config: &HarnessConfig) -> Result<()> {
    if alphabet.is_empty() {
        bail!("--alphabet must not be empty");
    }
    let pairs = exhaustive_pairs(alphabet.as_bytes(), max_len);
    let checked = cross_check(&pairs, &config.limits, config.parallel)?;
    println!(
        "{} {} pairs over {:?} up to length {}: all variants agree",
        pass_mark(true),
        checked,
        alphabet,
        max_len
    );
    Ok(())
}
