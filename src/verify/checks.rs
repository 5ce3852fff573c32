// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-tree checks.
//!
//! `check_structure` looks only at the arena: bounds, parentage, reachability,
//! sibling distances. It runs on every decoded or deserialized tree.
//! `verify_tree` adds one metric call per edge to confirm each stored distance.

use std::collections::HashSet;

use super::types::{InvariantError, VerificationReport};
use crate::fuzzy::Metric;
use crate::tree::BkTree;
use crate::types::{Node, NodeId};

/// Check arena invariants without a metric.
pub fn check_structure(nodes: &[Node]) -> Result<VerificationReport, InvariantError> {
    let total = nodes.len();
    if total == 0 {
        return Ok(VerificationReport::default());
    }

    let mut parent_of: Vec<Option<usize>> = vec![None; total];
    let mut report = VerificationReport {
        node_count: total,
        ..VerificationReport::default()
    };

    for (index, node) in nodes.iter().enumerate() {
        if node.word.is_empty() {
            return Err(InvariantError::EmptyWord { node: index });
        }

        let mut distances = HashSet::with_capacity(node.children.len());
        for &child in &node.children {
            let child = child.index();
            if child >= total {
                return Err(InvariantError::DanglingChild {
                    parent: index,
                    child,
                    len: total,
                });
            }
            if child == NodeId::ROOT.index() {
                return Err(InvariantError::RootHasParent { parent: index });
            }
            if let Some(first) = parent_of[child] {
                return Err(InvariantError::MultipleParents {
                    node: child,
                    first,
                    second: index,
                });
            }
            parent_of[child] = Some(index);

            let distance = nodes[child].distance;
            if distance == 0 {
                return Err(InvariantError::ZeroDistanceChild { node: child });
            }
            if !distances.insert(distance) {
                return Err(InvariantError::DuplicateChildDistance {
                    parent: index,
                    distance,
                });
            }
        }

        report.max_fanout = report.max_fanout.max(node.children.len());
        if node.is_leaf() {
            report.leaf_count += 1;
        }
    }

    let root = &nodes[NodeId::ROOT.index()];
    if root.distance != 0 {
        return Err(InvariantError::RootDistance {
            distance: root.distance,
        });
    }

    // Single parents and a parentless root make this walk finite: a cycle
    // would have to pass through a node with two parents.
    let mut reachable = 0;
    let mut stack = vec![(NodeId::ROOT, 1usize)];
    while let Some((id, level)) = stack.pop() {
        reachable += 1;
        report.depth = report.depth.max(level);
        for &child in &nodes[id.index()].children {
            stack.push((child, level + 1));
        }
    }

    if reachable != total {
        return Err(InvariantError::Unreachable { reachable, total });
    }

    Ok(report)
}

/// Check arena invariants and confirm every stored distance against `metric`.
pub fn verify_tree<M: Metric + ?Sized>(
    tree: &BkTree,
    metric: &M,
) -> Result<VerificationReport, InvariantError> {
    let nodes = tree.nodes();
    let mut report = check_structure(nodes)?;

    for parent in nodes {
        for &child in &parent.children {
            let node = &nodes[child.index()];
            let actual = metric.distance(&parent.word, &node.word);
            if actual != node.distance {
                return Err(InvariantError::DistanceMismatch {
                    node: child.index(),
                    word: node.word.clone(),
                    recorded: node.distance,
                    actual,
                });
            }
        }
    }

    report.distances_checked = true;
    Ok(report)
}
