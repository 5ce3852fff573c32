// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs::{self, File};
use std::io::BufReader;
#[cfg(feature = "parallel")]
use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::Parser;

use bkspell::binary::{decode_tree, is_index};
use bkspell::dictionary::{load_words_with, LoadOptions, LoadReport};
use bkspell::{sort_by_distance, SearchResult, SpellChecker};

mod cli;
use cli::display;
use cli::{Cli, Commands, MetricChoice};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Build {
            dict,
            output,
            metric,
            fold,
        } => run_build(&dict, &output, metric, fold),
        Commands::Search {
            source,
            queries,
            tolerance,
            limit,
            metric,
            json,
        } => run_search(&source, &queries, tolerance, limit, metric, json),
        Commands::Inspect { file, metric } => run_inspect(&file, metric),
        Commands::Dump { file } => run_dump(&file),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_build(dict: &str, output: &str, metric: MetricChoice, fold: bool) -> Result<()> {
    let checker = SpellChecker::with_metric(metric);
    let report = load_dictionary(dict, &checker, LoadOptions { fold })?;
    display::print_load_report(&report);

    if checker.is_empty() {
        bail!("{} contains no words", dict);
    }

    let bytes = checker
        .to_bytes()
        .with_context(|| format!("Cannot encode {} as an index", dict))?;
    fs::write(output, &bytes).with_context(|| format!("Failed to write {}", output))?;
    println!("wrote {} ({} bytes)", output, bytes.len());
    Ok(())
}

fn run_search(
    source: &str,
    queries: &[String],
    tolerance: usize,
    limit: usize,
    metric: MetricChoice,
    json: bool,
) -> Result<()> {
    let checker = open_source(source, metric)?;

    let batches = checker.search_batch(queries, tolerance);
    let batches: Vec<Vec<SearchResult>> = batches
        .into_iter()
        .map(|results| rank_for_display(results, limit))
        .collect();

    if json {
        let out: Vec<serde_json::Value> = queries
            .iter()
            .zip(&batches)
            .map(|(query, results)| serde_json::json!({ "query": query, "results": results }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (query, results) in queries.iter().zip(&batches) {
            display::print_results(query, tolerance, results);
        }
    }
    Ok(())
}

fn run_inspect(file: &str, metric: MetricChoice) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file))?;
    let (header, tree) = decode_tree(&bytes).with_context(|| format!("Invalid index {}", file))?;
    let report = bkspell::verify_tree(&tree, &metric)
        .with_context(|| format!("{} was not built with the {:?} metric", file, metric))?;

    display::print_verification(file, &report);
    println!("  format v{}, folded: {}", header.version, header.flags.is_folded());
    Ok(())
}

fn run_dump(file: &str) -> Result<()> {
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file))?;
    let (_, tree) = decode_tree(&bytes).with_context(|| format!("Invalid index {}", file))?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

/// Open a `.bksp` index or build a checker from a word list on the fly.
///
/// A folded index comes back as a folding checker, so queries fold too.
fn open_source(source: &str, metric: MetricChoice) -> Result<SpellChecker<MetricChoice>> {
    let bytes = fs::read(source).with_context(|| format!("Failed to read {}", source))?;

    if is_index(&bytes) {
        let (header, tree) =
            decode_tree(&bytes).with_context(|| format!("Invalid index {}", source))?;
        let checker = SpellChecker::from_tree(tree, metric)
            .with_context(|| format!("{} was not built with the {:?} metric", source, metric))?;
        return Ok(if header.flags.is_folded() {
            checker.folded()
        } else {
            checker
        });
    }

    let checker = SpellChecker::with_metric(metric);
    load_dictionary(source, &checker, LoadOptions::default())?;
    Ok(checker)
}

fn load_dictionary(
    path: &str,
    checker: &SpellChecker<MetricChoice>,
    options: LoadOptions,
) -> Result<LoadReport> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
    let reader = BufReader::new(file);

    #[cfg(feature = "parallel")]
    let report = load_with_spinner(reader, checker, options);
    #[cfg(not(feature = "parallel"))]
    let report = load_words_with(reader, checker, options, |_| {});

    report.with_context(|| format!("Failed to read {}", path))
}

#[cfg(feature = "parallel")]
fn load_with_spinner<R: BufRead>(
    reader: R,
    checker: &SpellChecker<MetricChoice>,
    options: LoadOptions,
) -> io::Result<LoadReport> {
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    spinner.set_prefix("Loading");

    let report = load_words_with(reader, checker, options, |report| {
        if report.total() % 10_000 == 0 {
            spinner.set_message(format!("{} words", report.added));
            spinner.tick();
        }
    });
    spinner.finish_and_clear();
    report
}

/// Closest first, then alphabetical; `limit == 0` keeps everything.
fn rank_for_display(mut results: Vec<SearchResult>, limit: usize) -> Vec<SearchResult> {
    sort_by_distance(&mut results);
    if limit > 0 {
        results.truncate(limit);
    }
    results
}
