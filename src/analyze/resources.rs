//! Aggregation of resources produced by a set of nodes.

use std::collections::{BTreeSet, HashMap};

use crate::parse::types::OperationType;
use crate::rules::{self, ResourceKind};

/// Union of the `produces` sets of the given nodes' rules.
///
/// Ids missing from the type lookup and types with no rule entry are
/// skipped, so unregistered operation types in a flow contribute nothing
/// rather than erroring.
pub fn collect_produced_resources<'a>(
    node_ids: impl IntoIterator<Item = &'a str>,
    node_types: &HashMap<&str, OperationType>,
) -> BTreeSet<ResourceKind> {
    let mut produced = BTreeSet::new();
    for id in node_ids {
        let Some(&op) = node_types.get(id) else {
            continue;
        };
        let Some(rule) = rules::rule(op) else {
            continue;
        };
        produced.extend(rule.produces.iter().copied());
    }
    produced
}
