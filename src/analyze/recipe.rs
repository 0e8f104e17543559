//! Minimal prerequisite recipe computation and block placement.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::resources::collect_produced_resources;
use crate::parse::types::{Flow, OperationType, Position};
use crate::rules::{self, ResourceKind};

/// Vertical distance between stacked prerequisite blocks on the canvas.
const STACK_GAP: f64 = 120.0;

/// Walk the default recipe in order, dropping steps whose outputs are
/// already covered and keeping the rest.
///
/// A step is also kept when one of its outputs was produced by an earlier
/// step of the same recipe, pruned or not: such a step is a settlement
/// barrier (wait-for-balance after faucet) and dropping it would leave the
/// generated plan racing the ledger. Steps with no rule entry are skipped
/// outright.
pub fn compute_minimal_recipe(
    default_recipe: &[OperationType],
    available: &BTreeSet<ResourceKind>,
) -> Vec<OperationType> {
    let mut simulated = available.clone();
    let mut recipe_outputs: BTreeSet<ResourceKind> = BTreeSet::new();
    let mut retained = Vec::new();

    for &step in default_recipe {
        let Some(rule) = rules::rule(step) else {
            continue;
        };
        let produces_needed = rule.produces.iter().any(|r| !simulated.contains(r));
        let confirms_recipe_output = rule.produces.iter().any(|r| recipe_outputs.contains(r));
        if produces_needed || confirms_recipe_output {
            retained.push(step);
        }
        for &resource in rule.produces {
            simulated.insert(resource);
            recipe_outputs.insert(resource);
        }
    }

    retained
}

/// Loose whole-flow variant: counts resources produced anywhere in the
/// flow, regardless of ancestry. Used for "what would I still need to add"
/// prompts rather than strict upstream validation.
pub fn prerequisite_recipe(target: OperationType, flow: &Flow) -> Vec<OperationType> {
    let Some(rule) = rules::rule(target) else {
        return Vec::new();
    };
    let node_types = flow.node_types();
    let available =
        collect_produced_resources(flow.nodes.iter().map(|n| n.id.as_str()), &node_types);
    compute_minimal_recipe(rule.default_recipe, &available)
}

/// A prerequisite block planned for insertion at a canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedBlock {
    #[serde(rename = "type")]
    pub op: OperationType,
    pub position: Position,
}

/// Stack recipe steps vertically above the target, earliest step topmost.
/// Purely geometric; no resource logic.
pub fn prerequisite_positions(recipe: &[OperationType], target: Position) -> Vec<PlannedBlock> {
    let len = recipe.len();
    recipe
        .iter()
        .enumerate()
        .map(|(i, &op)| PlannedBlock {
            op,
            position: Position {
                x: target.x,
                y: target.y - STACK_GAP * (len - i) as f64,
            },
        })
        .collect()
}
