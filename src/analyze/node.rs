//! Per-node prerequisite validation.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::recipe::compute_minimal_recipe;
use super::resources::collect_produced_resources;
use crate::parse::types::{FlowNode, OperationType};
use crate::rules::{self, Requirement, ResourceKind, Severity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeValidationIssue {
    pub resource: ResourceKind,
    pub severity: Severity,
    pub message: String,
    pub remediation: String,
    pub suggested_blocks: Vec<OperationType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeValidationResult {
    pub node_id: String,
    pub node_type: OperationType,
    pub severity: Severity,
    pub issues: Vec<NodeValidationIssue>,
    pub credit_cost: u64,
    pub auto_fix_recipe: Vec<OperationType>,
}

/// Validate one node against the resources its ancestors produce.
///
/// Nodes whose type has no rule entry are always valid and cost nothing.
pub fn validate_node(
    node: &FlowNode,
    ancestors: &HashSet<String>,
    node_types: &HashMap<&str, OperationType>,
) -> NodeValidationResult {
    let Some(rule) = rules::rule(node.op) else {
        return NodeValidationResult {
            node_id: node.id.clone(),
            node_type: node.op,
            severity: Severity::Valid,
            issues: Vec::new(),
            credit_cost: 0,
            auto_fix_recipe: Vec::new(),
        };
    };

    let available = collect_produced_resources(ancestors.iter().map(String::as_str), node_types);

    let mut severity = Severity::Valid;
    let mut issues = Vec::new();
    for req in rule.requires {
        if available.contains(&req.resource) {
            continue;
        }
        issues.push(issue_for(req));
        severity = severity.max(req.severity);
    }

    NodeValidationResult {
        node_id: node.id.clone(),
        node_type: node.op,
        severity,
        issues,
        // Execution cost, charged whether or not the node is currently
        // satisfiable.
        credit_cost: rule.credit_cost,
        auto_fix_recipe: compute_minimal_recipe(rule.default_recipe, &available),
    }
}

fn issue_for(req: &Requirement) -> NodeValidationIssue {
    let blocks = req
        .satisfied_by
        .iter()
        .map(|op| op.label())
        .collect::<Vec<_>>()
        .join(" or ");
    NodeValidationIssue {
        resource: req.resource,
        severity: req.severity,
        message: format!("Missing {}", req.label),
        remediation: format!("Add a {} block upstream", blocks),
        suggested_blocks: req.satisfied_by.to_vec(),
    }
}
