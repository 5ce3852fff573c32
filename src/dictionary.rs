// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading word lists into a checker.
//!
//! One word per line, the `/usr/share/dict/words` shape. Lines are trimmed;
//! blank lines and repeats are counted rather than treated as failures, since
//! real word lists are full of both.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::checker::SpellChecker;
use crate::error::SpellError;
use crate::fuzzy::Metric;

/// How to treat each line before adding it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Switch the checker to folding (see [`SpellChecker::folded`]) before
    /// the first line, so later queries fold the same way.
    pub fold: bool,
}

/// What happened to each word offered to a checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub added: usize,
    pub duplicates: usize,
    pub empty: usize,
}

impl LoadReport {
    pub fn record(&mut self, outcome: &Result<(), SpellError>) {
        match outcome {
            Ok(()) => self.added += 1,
            Err(SpellError::DuplicateWord { .. }) => self.duplicates += 1,
            Err(SpellError::EmptyWord) => self.empty += 1,
        }
    }

    /// Lines seen, whatever happened to them.
    pub fn total(&self) -> usize {
        self.added + self.duplicates + self.empty
    }
}

/// Add every line of `reader` to `checker`.
pub fn load_words<R, M>(
    reader: R,
    checker: &SpellChecker<M>,
    options: LoadOptions,
) -> io::Result<LoadReport>
where
    R: BufRead,
    M: Metric,
{
    load_words_with(reader, checker, options, |_| {})
}

/// Like [`load_words`], calling `on_line` with the running tally after each line.
pub fn load_words_with<R, M, F>(
    reader: R,
    checker: &SpellChecker<M>,
    options: LoadOptions,
    mut on_line: F,
) -> io::Result<LoadReport>
where
    R: BufRead,
    M: Metric,
    F: FnMut(&LoadReport),
{
    if options.fold {
        checker.enable_folding();
    }

    let mut report = LoadReport::default();
    for line in reader.lines() {
        let line = line?;
        report.record(&checker.add(line.trim()));
        on_line(&report);
    }

    log::debug!(
        "loaded word list: {} added, {} duplicates, {} empty",
        report.added,
        report.duplicates,
        report.empty
    );
    Ok(report)
}

/// Open `path` and [`load_words`] from it.
pub fn load_file<P, M>(path: P, checker: &SpellChecker<M>, options: LoadOptions) -> io::Result<LoadReport>
where
    P: AsRef<Path>,
    M: Metric,
{
    let file = File::open(path)?;
    load_words(BufReader::new(file), checker, options)
}
