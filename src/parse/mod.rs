//! Parse phase: JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::FlowGraph;
pub use types::*;

use crate::error::AnalyzerError;

/// Deserialize a flow JSON string into a `Flow` struct.
pub fn parse(json: &str) -> Result<Flow, AnalyzerError> {
    serde_json::from_str::<Flow>(json).map_err(|e| AnalyzerError::Parse(e.to_string()))
}

/// Parse JSON and build the graph in one step.
pub fn parse_and_build(json: &str) -> Result<(Flow, FlowGraph), AnalyzerError> {
    let flow = parse(json)?;
    let graph = FlowGraph::build(&flow);
    Ok((flow, graph))
}
