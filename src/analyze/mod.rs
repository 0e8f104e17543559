//! Prerequisite analysis over a flow snapshot.
//!
//! Pure and synchronous: the engine reads the snapshot, never mutates it,
//! and always recomputes from scratch. Debouncing and re-run policy belong
//! to the caller.

pub mod ancestry;
pub mod attach;
pub mod node;
pub mod recipe;
pub mod resources;

pub use ancestry::build_ancestry_map;
pub use attach::{AttachmentResult, find_best_attachment_node};
pub use node::{NodeValidationIssue, NodeValidationResult, validate_node};
pub use recipe::{
    PlannedBlock, compute_minimal_recipe, prerequisite_positions, prerequisite_recipe,
};
pub use resources::collect_produced_resources;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::parse::FlowGraph;
use crate::parse::types::Flow;
use crate::rules::Severity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowValidationResult {
    pub severity: Severity,
    /// Keyed by node id. BTreeMap keeps serialization deterministic.
    pub node_results: BTreeMap<String, NodeValidationResult>,
    pub total_credit_cost: u64,
    /// Milliseconds since the Unix epoch.
    pub analyzed_at: u64,
}

/// Validate every node of the flow against its ancestry.
///
/// The ancestry map and the node-type lookup are built once and shared by
/// all per-node checks. The result fully replaces any previous one; two
/// calls on the same snapshot differ only in `analyzed_at`.
pub fn analyze_flow(flow: &Flow) -> FlowValidationResult {
    let graph = FlowGraph::build(flow);
    let ancestry = build_ancestry_map(&graph);
    let node_types = flow.node_types();

    let empty = HashSet::new();
    let mut severity = Severity::Valid;
    let mut total_credit_cost = 0u64;
    let mut node_results = BTreeMap::new();
    for n in &flow.nodes {
        let ancestors = ancestry.get(&n.id).unwrap_or(&empty);
        let result = validate_node(n, ancestors, &node_types);
        severity = severity.max(result.severity);
        total_credit_cost += result.credit_cost;
        node_results.insert(n.id.clone(), result);
    }

    FlowValidationResult {
        severity,
        node_results,
        total_credit_cost,
        analyzed_at: now_millis(),
    }
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
