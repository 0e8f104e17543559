use analyzer::parse::types::{Flow, FlowEdge, FlowNode, NodeData, OperationType, Position};

// =============================================================================
// Flow builders
// =============================================================================

pub fn node(id: &str, op: OperationType, x: f64, y: f64) -> FlowNode {
    FlowNode {
        id: id.into(),
        op,
        position: Position { x, y },
        data: NodeData {
            label: op.label().to_string(),
            ..NodeData::default()
        },
    }
}

pub fn edge(source: &str, target: &str) -> FlowEdge {
    FlowEdge {
        id: format!("{source}-{target}"),
        source: source.into(),
        target: target.into(),
        source_handle: None,
        target_handle: None,
    }
}

pub fn flow(nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) -> Flow {
    Flow {
        id: "test-flow".into(),
        name: "Test Flow".into(),
        nodes,
        edges,
    }
}

/// GenerateKeys → Faucet → WaitForBalance, laid out top to bottom.
pub fn funding_chain() -> Flow {
    flow(
        vec![
            node("keys", OperationType::GenerateKeys, 240.0, 0.0),
            node("faucet", OperationType::Faucet, 240.0, 120.0),
            node("wait", OperationType::WaitForBalance, 240.0, 240.0),
        ],
        vec![edge("keys", "faucet"), edge("faucet", "wait")],
    )
}
