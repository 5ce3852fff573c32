// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for insertion and search.
//!
//! Arbitrary insertion sequences must always leave a verifiable tree, and
//! every search must agree with a linear scan.

#![no_main]

use arbitrary::Arbitrary;
use bkspell::{damerau_levenshtein, SpellChecker};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Session {
    words: Vec<String>,
    query: String,
    tolerance: u8,
}

fuzz_target!(|session: Session| {
    let checker = SpellChecker::new();
    let mut stored = Vec::new();
    for word in session.words.iter().take(64) {
        let word: String = word.chars().take(16).collect();
        if checker.add(&word).is_ok() {
            stored.push(word);
        }
    }

    checker.verify().expect("tree built by insertion must verify");

    let query: String = session.query.chars().take(16).collect();
    let tolerance = usize::from(session.tolerance % 6);

    let mut found: Vec<String> = checker
        .search(&query, tolerance)
        .into_iter()
        .map(|r| r.word)
        .collect();
    found.sort();

    let mut expected: Vec<String> = stored
        .into_iter()
        .filter(|w| damerau_levenshtein(w, &query) <= tolerance)
        .collect();
    expected.sort();

    assert_eq!(found, expected, "query {:?} tolerance {}", query, tolerance);
});
