//! petgraph-based directed graph wrapper for the visual flow.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use super::types::Flow;

pub struct FlowGraph {
    pub graph: DiGraph<String, ()>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl FlowGraph {
    /// Build the graph from a flow snapshot.
    ///
    /// Tolerant by contract: an edge referencing a node id that does not
    /// exist is skipped, contributing no ancestry. Structural problems are
    /// reported separately by `structural::check_structure`.
    pub fn build(flow: &Flow) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &flow.nodes {
            let id = node.id.clone();
            let idx = graph.add_node(id.clone());
            node_indices.insert(id, idx);
        }

        for edge in &flow.edges {
            let source_idx = node_indices.get(&edge.source);
            let target_idx = node_indices.get(&edge.target);
            if let (Some(&s), Some(&t)) = (source_idx, target_idx) {
                graph.add_edge(s, t, ());
            }
        }

        FlowGraph { graph, node_indices }
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return 0;
        };
        self.graph
            .neighbors_directed(idx, petgraph::Direction::Outgoing)
            .count()
    }

    /// A terminal node has no outgoing edge.
    pub fn is_terminal(&self, node_id: &str) -> bool {
        self.outgoing_count(node_id) == 0
    }
}
