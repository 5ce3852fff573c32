// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The BK-tree: insertion and tolerance-bounded search.
//!
//! Each child is filed under its distance from the parent. At search time, if
//! the query is `d` away from a node, the triangle inequality says a match
//! within `t` of the query can only sit under a child filed at a distance in
//! `[d - t, d + t]`. Everything else is skipped without a metric call.
//!
//! The tree doesn't own a metric. Callers pass the same one to every call;
//! [`SpellChecker`](crate::SpellChecker) is what pins it down.

use serde::{Deserialize, Serialize};

use crate::error::SpellError;
use crate::fuzzy::Metric;
use crate::types::{Node, NodeId, SearchResult};
use crate::verify::{check_structure, contracts, InvariantError};

/// An arena-backed BK-tree. Empty until the first insertion creates the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TreeRecord")]
pub struct BkTree {
    nodes: Vec<Node>,
}

/// Unchecked wire shape; deserializing a `BkTree` goes through `from_nodes`.
#[derive(Deserialize)]
struct TreeRecord {
    nodes: Vec<Node>,
}

impl TryFrom<TreeRecord> for BkTree {
    type Error = InvariantError;

    fn try_from(record: TreeRecord) -> Result<Self, Self::Error> {
        BkTree::from_nodes(record.nodes)
    }
}

impl BkTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an arena after checking its structure. Stored distances are
    /// taken on trust; use [`verify_tree`](crate::verify_tree) to check them.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self, InvariantError> {
        check_structure(&nodes)?;
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// All nodes in arena (insertion) order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(Node::word)
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Insert `word`, returning the handle of the new node.
    ///
    /// The first word becomes the root. After that, the walk starts at the root:
    /// compute `d = metric(node, word)`, stop with `DuplicateWord` if `d == 0`,
    /// follow the child filed under `d` if there is one, otherwise hang a new
    /// leaf there. Exactly one node is added on success, none on error.
    pub fn insert<M: Metric + ?Sized>(
        &mut self,
        word: &str,
        metric: &M,
    ) -> Result<NodeId, SpellError> {
        if word.is_empty() {
            return Err(SpellError::EmptyWord);
        }

        if self.nodes.is_empty() {
            self.nodes.push(Node::root(word));
            log::debug!("bk-tree root set to '{}'", word);
            return Ok(NodeId::ROOT);
        }

        let mut current = NodeId::ROOT;
        loop {
            let node = &self.nodes[current.index()];
            let distance = metric.distance(&node.word, word);
            if distance == 0 {
                log::debug!("rejected '{}': duplicate of '{}'", word, node.word);
                return Err(SpellError::DuplicateWord {
                    word: word.to_string(),
                });
            }

            let next = node
                .children
                .iter()
                .copied()
                .find(|child| self.nodes[child.index()].distance == distance);

            match next {
                Some(child) => current = child,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(Node::child(word, distance));
                    self.nodes[current.index()].children.push(id);

                    let parent = &self.nodes[current.index()];
                    contracts::check_new_child(parent, &self.nodes[id.index()], metric);
                    contracts::check_sibling_distances(parent, &self.nodes);
                    return Ok(id);
                }
            }
        }
    }

    /// Every stored word within `tolerance` of `query`, with its distance.
    ///
    /// Results come in depth-first pre-order with children in insertion order.
    /// They are not sorted by distance.
    pub fn search<M: Metric + ?Sized>(
        &self,
        query: &str,
        tolerance: usize,
        metric: &M,
    ) -> Vec<SearchResult> {
        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return found;
        }

        let mut visited = 0usize;
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            visited += 1;

            let distance = metric.distance(&node.word, query);
            if distance <= tolerance {
                found.push(SearchResult::new(node.word.clone(), distance));
            }

            let low = distance.saturating_sub(tolerance);
            let high = distance.saturating_add(tolerance);
            // Pushed in reverse so the stack pops them in insertion order.
            for &child in node.children.iter().rev() {
                if (low..=high).contains(&self.nodes[child.index()].distance) {
                    stack.push(child);
                }
            }
        }

        log::trace!(
            "search '{}' (tolerance {}): visited {} of {} nodes, {} matches",
            query,
            tolerance,
            visited,
            self.nodes.len(),
            found.len()
        );
        contracts::check_search_results(&found, tolerance);
        found
    }

    /// Exact lookup: is a word at distance 0 from `word` stored?
    ///
    /// Follows the single child filed under the current distance, so this is
    /// one root-to-leaf walk rather than a full search.
    pub fn contains<M: Metric + ?Sized>(&self, word: &str, metric: &M) -> bool {
        if word.is_empty() || self.nodes.is_empty() {
            return false;
        }

        let mut current = NodeId::ROOT;
        loop {
            let node = &self.nodes[current.index()];
            let distance = metric.distance(&node.word, word);
            if distance == 0 {
                return true;
            }
            match node
                .children
                .iter()
                .copied()
                .find(|child| self.nodes[child.index()].distance == distance)
            {
                Some(child) => current = child,
                None => return false,
            }
        }
    }
}
