// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! True (unrestricted) Damerau–Levenshtein distance.
//!
//! The optimal string alignment variant forbids editing a substring twice, so
//! `"CA" -> "ABC"` costs 3 there. The unrestricted version lets a transposed
//! pair take part in later edits and gets 2. That difference is what makes it a
//! real metric, and the BK-tree's pruning needs the triangle inequality.
//!
//! # Algorithm
//!
//! Lowrance–Wagner: an `(n + 2) x (m + 2)` table whose outer border holds the
//! sentinel `n + m`, plus a map from character to the last row of `a` where it
//! appeared. The transposition candidate jumps back to that row and to the last
//! column in the current row where `a[i]` matched, paying for everything skipped
//! in between.
//!
//! The "last seen" lookup is keyed by `char`, so there is no alphabet size limit.

use std::collections::HashMap;

/// Minimum number of insertions, deletions, substitutions and adjacent
/// transpositions turning `a` into `b`, counted in `char`s.
///
/// ```
/// use bkspell::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("CA", "ABC"), 2);
/// assert_eq!(damerau_levenshtein("seven", "eight"), 5);
/// ```
pub fn damerau_levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let sentinel = n + m;
    let mut table = Table::new(n + 2, m + 2);

    table.set(0, 0, sentinel);
    for i in 0..=n {
        table.set(i + 1, 0, sentinel);
        table.set(i + 1, 1, i);
    }
    for j in 0..=m {
        table.set(0, j + 1, sentinel);
        table.set(1, j + 1, j);
    }

    // Last row (1-based) of `a` holding each character; 0 means not seen yet.
    let mut last_row: HashMap<char, usize> = HashMap::new();

    for i in 1..=n {
        // Last column (1-based) in this row where a[i-1] matched b.
        let mut last_match_col = 0;

        for j in 1..=m {
            let k = last_row.get(&b[j - 1]).copied().unwrap_or(0);
            let l = last_match_col;

            let cost = if a[i - 1] == b[j - 1] {
                last_match_col = j;
                0
            } else {
                1
            };

            let substitution = table.get(i, j) + cost;
            let insertion = table.get(i + 1, j) + 1;
            let deletion = table.get(i, j + 1) + 1;
            // k < i and l < j always hold, so the gap counts cannot underflow.
            let transposition = table.get(k, l) + (i - k - 1) + 1 + (j - l - 1);

            table.set(
                i + 1,
                j + 1,
                substitution.min(insertion).min(deletion).min(transposition),
            );
        }

        last_row.insert(a[i - 1], i);
    }

    table.get(n + 1, m + 1)
}

/// Row-major DP table in one allocation.
struct Table {
    cells: Vec<usize>,
    width: usize,
}

impl Table {
    fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![0; rows * cols],
            width: cols,
        }
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> usize {
        self.cells[row * self.width + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        self.cells[row * self.width + col] = value;
    }
}
