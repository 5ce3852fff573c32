//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::checker::SpellChecker;
use crate::fuzzy::{DamerauLevenshtein, Metric};
use crate::types::{sort_by_distance, SearchResult};

/// The small dictionary most tests start from.
pub const SAMPLE_WORDS: &[&str] = &["sail", "mail", "rail", "snape"];

/// A default-metric checker holding `words`, inserted in order.
///
/// Panics if any word is rejected; test fixtures should be clean.
pub fn checker_with(words: &[&str]) -> SpellChecker<DamerauLevenshtein> {
    let checker = SpellChecker::new();
    for word in words {
        checker
            .add(word)
            .unwrap_or_else(|e| panic!("fixture word '{}' rejected: {}", word, e));
    }
    checker
}

/// Linear-scan oracle: what a search must return, ignoring the tree.
pub fn brute_force_search<M: Metric + ?Sized>(
    words: &[String],
    query: &str,
    tolerance: usize,
    metric: &M,
) -> Vec<SearchResult> {
    sorted_results(
        words
            .iter()
            .filter_map(|word| {
                let distance = metric.distance(word, query);
                (distance <= tolerance).then(|| SearchResult::new(word.clone(), distance))
            })
            .collect(),
    )
}

/// Results in a canonical order, for comparing as sets.
pub fn sorted_results(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    sort_by_distance(&mut results);
    results
}
