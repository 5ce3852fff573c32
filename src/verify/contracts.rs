// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the tree's insertion and search paths.
//!
//! Debug-mode assertions only: zero-cost in release builds, loud in tests.
//! Each one checks a local slice of the invariants `check_structure` and
//! `verify_tree` check globally, right where the code could break them.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                     | Invariant                                      |
//! |------------------------------|------------------------------------------------|
//! | `check_new_child`            | child distance = metric(parent, child) > 0     |
//! | `check_sibling_distances`    | siblings have distinct distances               |
//! | `check_search_results`       | every result is within tolerance               |

use crate::fuzzy::Metric;
use crate::types::{Node, SearchResult};

/// A freshly linked child carries the metric's distance from its parent.
#[inline]
pub fn check_new_child<M: Metric + ?Sized>(parent: &Node, child: &Node, metric: &M) {
    debug_assert!(
        child.distance > 0,
        "Contract violation: child '{}' of '{}' linked at distance 0",
        child.word,
        parent.word
    );
    debug_assert_eq!(
        metric.distance(&parent.word, &child.word),
        child.distance,
        "Contract violation: child '{}' of '{}' stores the wrong distance",
        child.word,
        parent.word
    );
}

/// No two children of `parent` share a distance.
#[inline]
pub fn check_sibling_distances(parent: &Node, nodes: &[Node]) {
    if cfg!(debug_assertions) {
        let mut distances: Vec<usize> = parent
            .children
            .iter()
            .map(|child| nodes[child.index()].distance)
            .collect();
        distances.sort_unstable();
        let before = distances.len();
        distances.dedup();
        debug_assert_eq!(
            before,
            distances.len(),
            "Contract violation: children of '{}' share a distance",
            parent.word
        );
    }
}

/// Search never reports a word outside the tolerance.
#[inline]
pub fn check_search_results(results: &[SearchResult], tolerance: usize) {
    for result in results {
        debug_assert!(
            result.distance <= tolerance,
            "Contract violation: '{}' returned at distance {} > tolerance {}",
            result.word,
            result.distance,
            tolerance
        );
    }
}
