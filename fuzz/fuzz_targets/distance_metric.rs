// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the distance functions.
//!
//! The tree's pruning is only correct if the distance is a metric. A single
//! asymmetric pair or triangle violation means silently missed suggestions.

#![no_main]

use arbitrary::Arbitrary;
use bkspell::{damerau_levenshtein, levenshtein};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Triple {
    a: String,
    b: String,
    c: String,
}

/// Cap by characters, not bytes, so slicing never splits a code point.
fn capped(s: &str) -> String {
    s.chars().take(40).collect()
}

fuzz_target!(|input: Triple| {
    let a = capped(&input.a);
    let b = capped(&input.b);
    let c = capped(&input.c);

    let ab = damerau_levenshtein(&a, &b);
    let ba = damerau_levenshtein(&b, &a);
    let bc = damerau_levenshtein(&b, &c);
    let ac = damerau_levenshtein(&a, &c);

    assert_eq!(ab, ba, "asymmetric: {:?} {:?}", a, b);
    assert_eq!(ab == 0, a == b, "identity broken: {:?} {:?}", a, b);
    assert!(ac <= ab + bc, "triangle: {:?} {:?} {:?}", a, b, c);

    let (la, lb) = (a.chars().count(), b.chars().count());
    assert!(ab >= la.abs_diff(lb));
    assert!(ab <= la.max(lb));
    assert!(ab <= levenshtein(&a, &b));
});
