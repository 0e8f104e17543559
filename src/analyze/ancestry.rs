//! Ancestor sets via backward BFS over the flow graph.

use std::collections::{HashMap, HashSet};

use petgraph::visit::{Bfs, Reversed};

use crate::parse::FlowGraph;

/// For every node, the set of node ids reachable by following edges
/// backward, excluding the node itself.
///
/// The BFS visit map guarantees each node is processed at most once, so a
/// cyclic graph terminates; a node on a cycle through itself still does not
/// appear in its own ancestor set.
pub fn build_ancestry_map(graph: &FlowGraph) -> HashMap<String, HashSet<String>> {
    let mut map = HashMap::with_capacity(graph.node_indices.len());
    for (id, &idx) in &graph.node_indices {
        let reversed = Reversed(&graph.graph);
        let mut ancestors = HashSet::new();
        let mut bfs = Bfs::new(reversed, idx);
        while let Some(nx) = bfs.next(reversed) {
            if nx != idx {
                ancestors.insert(graph.graph[nx].clone());
            }
        }
        map.insert(id.clone(), ancestors);
    }
    map
}
