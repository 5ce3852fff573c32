// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a BK-tree.
//!
//! The tree lives in an arena: a `Vec<Node>` where node 0 is the root and every
//! node lists its children by `NodeId`. No pointers, no `Box` chains, no cycles
//! to worry about, and the whole thing serializes as a flat array.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Node**: `word` is never empty. The root has `distance = 0`; every other
//!   node has `distance = metric(parent.word, word) > 0`, fixed when it was inserted.
//!
//! - **Children**: distinct `distance` values among siblings. Insertion descends
//!   into a sibling with the same distance instead of adding a new one.
//!
//! - **Arena**: every `NodeId` in a child list is in bounds, every non-root node
//!   has exactly one parent, and everything is reachable from node 0.
//!
//! `verify::check_structure` and `verify::verify_tree` check all of these.

use serde::{Deserialize, Serialize};

/// Handle to a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);

    /// Position in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// One stored word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) word: String,
    /// Distance to the parent's word. Zero for the root.
    pub(crate) distance: usize,
    /// Child handles in insertion order.
    #[serde(default)]
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn root(word: &str) -> Self {
        Self::child(word, 0)
    }

    pub(crate) fn child(word: &str, distance: usize) -> Self {
        Self {
            word: word.to_string(),
            distance,
            children: Vec::new(),
        }
    }

    /// Build a node from raw parts. Nothing is validated until the node is
    /// handed to [`BkTree::from_nodes`](crate::BkTree::from_nodes).
    pub fn from_parts(word: impl Into<String>, distance: usize, children: Vec<NodeId>) -> Self {
        Self {
            word: word.into(),
            distance,
            children,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One match: a stored word and its distance to the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    pub word: String,
    pub distance: usize,
}

impl SearchResult {
    pub fn new(word: impl Into<String>, distance: usize) -> Self {
        Self {
            word: word.into(),
            distance,
        }
    }
}

/// Closest first, ties alphabetical.
///
/// Searches return tree order; this is the order for showing or comparing
/// results.
pub fn sort_by_distance(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| a.word.cmp(&b.word))
    });
}
