//! Best-attachment scoring for newly requested blocks.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use super::ancestry::build_ancestry_map;
use super::recipe::compute_minimal_recipe;
use super::resources::collect_produced_resources;
use crate::parse::FlowGraph;
use crate::parse::types::{Flow, FlowNode, OperationType};
use crate::rules::{self, ResourceKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentResult {
    pub attach_to_node_id: Option<String>,
    pub satisfied_resources: BTreeSet<ResourceKind>,
    pub missing_resources: BTreeSet<ResourceKind>,
    pub remaining_recipe: Vec<OperationType>,
    pub score: usize,
}

impl AttachmentResult {
    /// "No attachment needed": the target has no prerequisites to satisfy.
    fn detached() -> Self {
        AttachmentResult {
            attach_to_node_id: None,
            satisfied_resources: BTreeSet::new(),
            missing_resources: BTreeSet::new(),
            remaining_recipe: Vec::new(),
            score: 0,
        }
    }
}

/// Pick the terminal node whose ancestry satisfies the most of the
/// target's required resources.
///
/// Candidates are the terminal nodes; a fully cyclic flow has none, in
/// which case every node is a candidate rather than the search returning
/// nothing. Strictly higher score wins; among equal nonzero scores the
/// candidate further down the canvas (greater y) wins, approximating
/// "attach to the end of the longest satisfying chain".
pub fn find_best_attachment_node(target: OperationType, flow: &Flow) -> AttachmentResult {
    let Some(rule) = rules::rule(target) else {
        return AttachmentResult::detached();
    };
    if rule.requires.is_empty() {
        return AttachmentResult::detached();
    }
    let required: BTreeSet<ResourceKind> = rule.requires.iter().map(|r| r.resource).collect();

    if flow.nodes.is_empty() {
        return AttachmentResult {
            attach_to_node_id: None,
            satisfied_resources: BTreeSet::new(),
            missing_resources: required,
            remaining_recipe: compute_minimal_recipe(rule.default_recipe, &BTreeSet::new()),
            score: 0,
        };
    }

    let graph = FlowGraph::build(flow);
    let ancestry = build_ancestry_map(&graph);
    let node_types = flow.node_types();

    let mut candidates: Vec<&FlowNode> = flow
        .nodes
        .iter()
        .filter(|n| graph.is_terminal(&n.id))
        .collect();
    if candidates.is_empty() {
        candidates = flow.nodes.iter().collect();
    }

    let empty = HashSet::new();
    let mut best: Option<(&FlowNode, BTreeSet<ResourceKind>, usize)> = None;
    for node in candidates {
        let ancestors = ancestry.get(&node.id).unwrap_or(&empty);
        // The candidate's own outputs count: attaching below it puts it
        // upstream of the new block.
        let resources = collect_produced_resources(
            std::iter::once(node.id.as_str()).chain(ancestors.iter().map(String::as_str)),
            &node_types,
        );
        let score = required.iter().filter(|r| resources.contains(r)).count();
        let better = match &best {
            None => true,
            Some((current, _, best_score)) => {
                score > *best_score
                    || (score == *best_score && score > 0 && node.position.y > current.position.y)
            }
        };
        if better {
            best = Some((node, resources, score));
        }
    }

    let Some((winner, resources, score)) = best else {
        return AttachmentResult::detached();
    };

    AttachmentResult {
        attach_to_node_id: Some(winner.id.clone()),
        satisfied_resources: required.intersection(&resources).copied().collect(),
        missing_resources: required.difference(&resources).copied().collect(),
        remaining_recipe: compute_minimal_recipe(rule.default_recipe, &resources),
        score,
    }
}
