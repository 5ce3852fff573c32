// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bkspell command-line interface.
//!
//! Four subcommands: `build` turns a word list into a `.bksp` index, `search`
//! queries an index or a plain word list, `inspect` verifies an index and
//! prints its shape, `dump` prints the tree as JSON.

pub mod display;

use bkspell::{DamerauLevenshtein, Levenshtein, Metric};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "bkspell",
    about = "Spell checking over a BK-tree with true Damerau-Levenshtein distance",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a .bksp index from a word list (one word per line)
    Build {
        /// Word list to index
        #[arg(short, long)]
        dict: String,

        /// Output .bksp file
        #[arg(short, long)]
        output: String,

        /// Distance the index is built with
        #[arg(long, value_enum, default_value_t = MetricChoice::Damerau)]
        metric: MetricChoice,

        /// Lowercase and strip diacritics before indexing (queries are folded too)
        #[arg(long)]
        fold: bool,
    },

    /// Find words within a tolerance of each query
    Search {
        /// .bksp index or plain word list
        source: String,

        /// Words to look up
        #[arg(required = true)]
        queries: Vec<String>,

        /// Maximum edit distance
        #[arg(short, long, default_value = "1")]
        tolerance: usize,

        /// Maximum number of results per query (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Distance to search with; must match the one the index was built with
        #[arg(long, value_enum, default_value_t = MetricChoice::Damerau)]
        metric: MetricChoice,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify a .bksp index and print its shape
    Inspect {
        /// Path to .bksp file
        file: String,

        /// Distance the index was built with
        #[arg(long, value_enum, default_value_t = MetricChoice::Damerau)]
        metric: MetricChoice,
    },

    /// Print a .bksp index as JSON
    Dump {
        /// Path to .bksp file
        file: String,
    },
}

/// Distances selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricChoice {
    /// True Damerau-Levenshtein (transpositions cost 1)
    Damerau,
    /// Levenshtein (transpositions cost 2)
    Levenshtein,
}

impl Metric for MetricChoice {
    fn distance(&self, a: &str, b: &str) -> usize {
        match self {
            MetricChoice::Damerau => DamerauLevenshtein.distance(a, b),
            MetricChoice::Levenshtein => Levenshtein.distance(a, b),
        }
    }
}
