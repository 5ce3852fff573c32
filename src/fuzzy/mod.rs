// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: edit distances and the `Metric` seam the tree is built on.
//!
//! Two distances ship here. True Damerau–Levenshtein is the default because
//! transposed letters are the most common typo. Plain Levenshtein is there for
//! callers who want swaps to cost two edits.

mod damerau;
mod levenshtein;

pub use damerau::damerau_levenshtein;
pub use levenshtein::levenshtein;

/// A distance between two strings, used for every insertion and query.
///
/// # Contract
///
/// Implementations must be deterministic, symmetric, and return 0 exactly when
/// the two strings are equal. The BK-tree also assumes the triangle inequality
/// `d(a, c) <= d(a, b) + d(b, c)`. Nothing checks it at runtime: a distance that
/// breaks it still builds a valid tree, but searches may miss real matches.
///
/// Any `Fn(&str, &str) -> usize` is a metric:
///
/// ```
/// use bkspell::{Metric, SpellChecker};
///
/// let by_length = |a: &str, b: &str| a.len().abs_diff(b.len());
/// assert_eq!(by_length.distance("ab", "abcd"), 2);
///
/// let checker = SpellChecker::with_metric(bkspell::levenshtein);
/// checker.add("mellow").unwrap();
/// ```
pub trait Metric {
    fn distance(&self, a: &str, b: &str) -> usize;
}

impl<F> Metric for F
where
    F: Fn(&str, &str) -> usize,
{
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        self(a, b)
    }
}

/// The default metric: [`damerau_levenshtein`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamerauLevenshtein;

impl Metric for DamerauLevenshtein {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        damerau_levenshtein(a, b)
    }
}

/// [`levenshtein`] as a metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl Metric for Levenshtein {
    #[inline]
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }
}
