// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What can be wrong with a tree, and what a healthy one looks like.

use serde::Serialize;

/// Error type for invariant violations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A child handle points outside the arena.
    #[error("node {parent} lists child {child} but the tree has {len} nodes")]
    DanglingChild {
        parent: usize,
        child: usize,
        len: usize,
    },
    /// The root appears in some node's child list.
    #[error("root is listed as a child of node {parent}")]
    RootHasParent { parent: usize },
    /// A node appears in two child lists.
    #[error("node {node} has two parents ({first} and {second})")]
    MultipleParents {
        node: usize,
        first: usize,
        second: usize,
    },
    /// Some nodes cannot be reached from the root (orphans or cycles).
    #[error("only {reachable} of {total} nodes are reachable from the root")]
    Unreachable { reachable: usize, total: usize },
    /// A stored word is the empty string.
    #[error("node {node} stores an empty word")]
    EmptyWord { node: usize },
    /// The root claims a nonzero distance from a parent it doesn't have.
    #[error("root has distance {distance}, expected 0")]
    RootDistance { distance: usize },
    /// A non-root node at distance 0 would be a duplicate of its parent.
    #[error("node {node} has distance 0 from its parent")]
    ZeroDistanceChild { node: usize },
    /// Two siblings share a distance, so insertion could not have produced them.
    #[error("node {parent} has more than one child at distance {distance}")]
    DuplicateChildDistance { parent: usize, distance: usize },
    /// The stored distance disagrees with the metric.
    #[error("node {node} ('{word}') records distance {recorded} from its parent but the metric gives {actual}")]
    DistanceMismatch {
        node: usize,
        word: String,
        recorded: usize,
        actual: usize,
    },
}

/// Shape of a tree that passed verification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    pub node_count: usize,
    /// Number of levels; 0 for an empty tree, 1 for a lone root.
    pub depth: usize,
    pub max_fanout: usize,
    pub leaf_count: usize,
    /// Whether stored distances were re-checked against a metric.
    pub distances_checked: bool,
}
