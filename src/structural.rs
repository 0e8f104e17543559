//! Structural pre-pass over a flow snapshot (S001–S005).
//!
//! Reports shape problems the analysis engine itself tolerates: dangling
//! edges contribute no ancestry, cycles terminate, duplicate ids shadow
//! each other. The studio decides how to surface these findings; nothing
//! here blocks analysis.

use std::collections::HashSet;

use petgraph::algo::is_cyclic_directed;
use serde::{Deserialize, Serialize};

use crate::parse::FlowGraph;
use crate::parse::types::Flow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuralIssue {
    pub code: String,
    pub message: String,
    pub node_id: Option<String>,
}

impl std::fmt::Display for StructuralIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node_id {
            Some(id) => write!(f, "[{}] {} (node '{}')", self.code, self.message, id),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl StructuralIssue {
    fn new(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        StructuralIssue {
            code: code.into(),
            message: message.into(),
            node_id,
        }
    }
}

/// Run all structural checks. Returns all issues found.
pub fn check_structure(flow: &Flow) -> Vec<StructuralIssue> {
    let mut issues = Vec::new();

    s001_unique_node_ids(flow, &mut issues);
    s002_edges_reference_existing_nodes(flow, &mut issues);
    s003_no_duplicate_edges(flow, &mut issues);
    s004_no_self_loops(flow, &mut issues);
    s005_no_cycles(flow, &mut issues);

    issues
}

fn s001_unique_node_ids(flow: &Flow, issues: &mut Vec<StructuralIssue>) {
    let mut seen = HashSet::new();
    for node in &flow.nodes {
        if !seen.insert(node.id.as_str()) {
            issues.push(StructuralIssue::new(
                "S001",
                format!("Duplicate node id '{}'", node.id),
                Some(node.id.clone()),
            ));
        }
    }
}

fn s002_edges_reference_existing_nodes(flow: &Flow, issues: &mut Vec<StructuralIssue>) {
    let ids: HashSet<&str> = flow.nodes.iter().map(|n| n.id.as_str()).collect();
    for edge in &flow.edges {
        if !ids.contains(edge.source.as_str()) {
            issues.push(StructuralIssue::new(
                "S002",
                format!(
                    "Edge '{}' references unknown source node '{}'",
                    edge.id, edge.source
                ),
                None,
            ));
        }
        if !ids.contains(edge.target.as_str()) {
            issues.push(StructuralIssue::new(
                "S002",
                format!(
                    "Edge '{}' references unknown target node '{}'",
                    edge.id, edge.target
                ),
                None,
            ));
        }
    }
}

fn s003_no_duplicate_edges(flow: &Flow, issues: &mut Vec<StructuralIssue>) {
    let mut seen = HashSet::new();
    for edge in &flow.edges {
        let key = (
            edge.source.clone(),
            edge.target.clone(),
            edge.source_handle.clone(),
            edge.target_handle.clone(),
        );
        if !seen.insert(key) {
            issues.push(StructuralIssue::new(
                "S003",
                format!("Duplicate edge from '{}' to '{}'", edge.source, edge.target),
                None,
            ));
        }
    }
}

fn s004_no_self_loops(flow: &Flow, issues: &mut Vec<StructuralIssue>) {
    for edge in &flow.edges {
        if edge.source == edge.target {
            issues.push(StructuralIssue::new(
                "S004",
                format!("Self-loop detected on node '{}'", edge.source),
                Some(edge.source.clone()),
            ));
        }
    }
}

fn s005_no_cycles(flow: &Flow, issues: &mut Vec<StructuralIssue>) {
    let graph = FlowGraph::build(flow);
    if is_cyclic_directed(&graph.graph) {
        issues.push(StructuralIssue::new(
            "S005",
            "Flow graph contains a cycle",
            None,
        ));
    }
}
