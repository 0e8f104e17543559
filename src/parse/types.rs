//! Rust types mirroring `shared/model/flow.ts`.
//!
//! These types are the serde target for the frontend flow JSON.
//! SYNC NOTE: Keep this file aligned with `shared/model/flow.ts`.
//! When the operation palette changes, also review the rule table in
//! `src/rules.rs` and the frontend block registry.

use serde::{Deserialize, Serialize};

// =============================================================================
// TOP-LEVEL FLOW
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub name: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

// =============================================================================
// NODES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type")]
    pub op: OperationType,
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

/// Node payload. `config` is the block's form state, opaque to the
/// analyzer; only the editor and the executor read it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub config: serde_json::Value,
}

/// Operation kind of a block on the canvas.
///
/// `Unknown` absorbs node types this build does not know about, so flows
/// saved by a newer studio still parse and analyze (such nodes are treated
/// as always-valid, see `rules`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperationType {
    GenerateKeys,
    Faucet,
    WaitForBalance,
    NetworkStatus,
    AddCredits,
    CreateIdentity,
    CreateTokenAccount,
    CreateDataAccount,
    SendTokens,
    WriteData,
    QueryAccount,
    Unknown,
}

impl<'de> Deserialize<'de> for OperationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OperationType::parse(&s))
    }
}

impl OperationType {
    /// Unregistered strings map to `Unknown` rather than failing.
    pub fn parse(s: &str) -> OperationType {
        match s {
            "generateKeys" => OperationType::GenerateKeys,
            "faucet" => OperationType::Faucet,
            "waitForBalance" => OperationType::WaitForBalance,
            "networkStatus" => OperationType::NetworkStatus,
            "addCredits" => OperationType::AddCredits,
            "createIdentity" => OperationType::CreateIdentity,
            "createTokenAccount" => OperationType::CreateTokenAccount,
            "createDataAccount" => OperationType::CreateDataAccount,
            "sendTokens" => OperationType::SendTokens,
            "writeData" => OperationType::WriteData,
            "queryAccount" => OperationType::QueryAccount,
            _ => OperationType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::GenerateKeys => "generateKeys",
            OperationType::Faucet => "faucet",
            OperationType::WaitForBalance => "waitForBalance",
            OperationType::NetworkStatus => "networkStatus",
            OperationType::AddCredits => "addCredits",
            OperationType::CreateIdentity => "createIdentity",
            OperationType::CreateTokenAccount => "createTokenAccount",
            OperationType::CreateDataAccount => "createDataAccount",
            OperationType::SendTokens => "sendTokens",
            OperationType::WriteData => "writeData",
            OperationType::QueryAccount => "queryAccount",
            OperationType::Unknown => "unknown",
        }
    }

    /// Display name used in issue messages and remediation hints.
    pub fn label(&self) -> &'static str {
        match self {
            OperationType::GenerateKeys => "Generate Keys",
            OperationType::Faucet => "Faucet",
            OperationType::WaitForBalance => "Wait for Balance",
            OperationType::NetworkStatus => "Network Status",
            OperationType::AddCredits => "Add Credits",
            OperationType::CreateIdentity => "Create Identity",
            OperationType::CreateTokenAccount => "Create Token Account",
            OperationType::CreateDataAccount => "Create Data Account",
            OperationType::SendTokens => "Send Tokens",
            OperationType::WriteData => "Write Data",
            OperationType::QueryAccount => "Query Account",
            OperationType::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Flow {
    /// Node-id → operation-type lookup, built once per analysis pass.
    pub fn node_types(&self) -> std::collections::HashMap<&str, OperationType> {
        self.nodes
            .iter()
            .map(|n| (n.id.as_str(), n.op))
            .collect()
    }
}
