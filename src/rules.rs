//! Operation rule table.
//!
//! One rule per operation type: the abstract resources the operation
//! requires before it can execute, the resources it produces once it has
//! run, the canonical prerequisite chain used for auto-fix suggestions,
//! and the credit fee charged on execution.
//!
//! The table is keyed by `OperationType`, so adding a block to the palette
//! is a compile-checked, single-point change here. Operations the table
//! does not know (`Unknown`) are treated as always-valid by the analyzer.

use serde::{Deserialize, Serialize};

use crate::parse::types::OperationType as Op;

/// Abstract precondition/postcondition tag linking operations together,
/// e.g. an ACME balance on the lite token account or purchased credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Keypair,
    AcmeBalance,
    Credits,
    OraclePrice,
    Identity,
    TokenAccount,
    DataAccount,
}

/// Severity of an unmet requirement. Merged with `max`: one error anywhere
/// outranks any number of warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Valid,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub resource: ResourceKind,
    /// Human-readable description used in "Missing ..." messages.
    pub label: &'static str,
    pub severity: Severity,
    /// Block types that produce `resource`.
    pub satisfied_by: &'static [Op],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRule {
    pub requires: &'static [Requirement],
    pub produces: &'static [ResourceKind],
    /// Canonical prerequisite chain, earliest step first. Never includes
    /// the operation itself.
    pub default_recipe: &'static [Op],
    pub credit_cost: u64,
}

const KEYPAIR_REQ: Requirement = Requirement {
    resource: ResourceKind::Keypair,
    label: "a signing keypair",
    severity: Severity::Error,
    satisfied_by: &[Op::GenerateKeys],
};

const BALANCE_REQ: Requirement = Requirement {
    resource: ResourceKind::AcmeBalance,
    label: "a funded lite token account",
    severity: Severity::Error,
    satisfied_by: &[Op::Faucet, Op::WaitForBalance],
};

const CREDITS_REQ: Requirement = Requirement {
    resource: ResourceKind::Credits,
    label: "purchased credits",
    severity: Severity::Error,
    satisfied_by: &[Op::AddCredits],
};

const IDENTITY_REQ: Requirement = Requirement {
    resource: ResourceKind::Identity,
    label: "an identity (ADI)",
    severity: Severity::Error,
    satisfied_by: &[Op::CreateIdentity],
};

const GENERATE_KEYS: OperationRule = OperationRule {
    requires: &[],
    produces: &[ResourceKind::Keypair],
    default_recipe: &[],
    credit_cost: 0,
};

const FAUCET: OperationRule = OperationRule {
    requires: &[KEYPAIR_REQ],
    produces: &[ResourceKind::AcmeBalance],
    default_recipe: &[Op::GenerateKeys],
    credit_cost: 0,
};

// Re-produces the balance it waits on: the settlement barrier for the
// asynchronous faucet deposit.
const WAIT_FOR_BALANCE: OperationRule = OperationRule {
    requires: &[Requirement {
        resource: ResourceKind::AcmeBalance,
        label: "a pending faucet deposit",
        severity: Severity::Warning,
        satisfied_by: &[Op::Faucet],
    }],
    produces: &[ResourceKind::AcmeBalance],
    default_recipe: &[Op::GenerateKeys, Op::Faucet],
    credit_cost: 0,
};

const NETWORK_STATUS: OperationRule = OperationRule {
    requires: &[],
    produces: &[ResourceKind::OraclePrice],
    default_recipe: &[],
    credit_cost: 0,
};

const ADD_CREDITS: OperationRule = OperationRule {
    requires: &[
        KEYPAIR_REQ,
        BALANCE_REQ,
        // The route falls back to querying the oracle itself, hence warning.
        Requirement {
            resource: ResourceKind::OraclePrice,
            label: "the current credit oracle price",
            severity: Severity::Warning,
            satisfied_by: &[Op::NetworkStatus],
        },
    ],
    produces: &[ResourceKind::Credits],
    default_recipe: &[Op::GenerateKeys, Op::Faucet, Op::WaitForBalance],
    credit_cost: 0,
};

const CREATE_IDENTITY: OperationRule = OperationRule {
    requires: &[KEYPAIR_REQ, CREDITS_REQ],
    produces: &[ResourceKind::Identity],
    default_recipe: &[Op::GenerateKeys, Op::Faucet, Op::WaitForBalance, Op::AddCredits],
    credit_cost: 5000,
};

const CREATE_TOKEN_ACCOUNT: OperationRule = OperationRule {
    requires: &[IDENTITY_REQ, CREDITS_REQ],
    produces: &[ResourceKind::TokenAccount],
    default_recipe: &[
        Op::GenerateKeys,
        Op::Faucet,
        Op::WaitForBalance,
        Op::AddCredits,
        Op::CreateIdentity,
    ],
    credit_cost: 2500,
};

const CREATE_DATA_ACCOUNT: OperationRule = OperationRule {
    requires: &[IDENTITY_REQ, CREDITS_REQ],
    produces: &[ResourceKind::DataAccount],
    default_recipe: &[
        Op::GenerateKeys,
        Op::Faucet,
        Op::WaitForBalance,
        Op::AddCredits,
        Op::CreateIdentity,
    ],
    credit_cost: 2500,
};

const SEND_TOKENS: OperationRule = OperationRule {
    requires: &[BALANCE_REQ, CREDITS_REQ],
    produces: &[],
    default_recipe: &[Op::GenerateKeys, Op::Faucet, Op::WaitForBalance, Op::AddCredits],
    credit_cost: 300,
};

const WRITE_DATA: OperationRule = OperationRule {
    requires: &[
        Requirement {
            resource: ResourceKind::DataAccount,
            label: "a data account",
            severity: Severity::Error,
            satisfied_by: &[Op::CreateDataAccount],
        },
        CREDITS_REQ,
    ],
    produces: &[],
    default_recipe: &[
        Op::GenerateKeys,
        Op::Faucet,
        Op::WaitForBalance,
        Op::AddCredits,
        Op::CreateIdentity,
        Op::CreateDataAccount,
    ],
    credit_cost: 100,
};

const QUERY_ACCOUNT: OperationRule = OperationRule {
    requires: &[],
    produces: &[],
    default_recipe: &[],
    credit_cost: 0,
};

/// Look up the rule for an operation type.
pub fn rule(op: Op) -> Option<&'static OperationRule> {
    match op {
        Op::GenerateKeys => Some(&GENERATE_KEYS),
        Op::Faucet => Some(&FAUCET),
        Op::WaitForBalance => Some(&WAIT_FOR_BALANCE),
        Op::NetworkStatus => Some(&NETWORK_STATUS),
        Op::AddCredits => Some(&ADD_CREDITS),
        Op::CreateIdentity => Some(&CREATE_IDENTITY),
        Op::CreateTokenAccount => Some(&CREATE_TOKEN_ACCOUNT),
        Op::CreateDataAccount => Some(&CREATE_DATA_ACCOUNT),
        Op::SendTokens => Some(&SEND_TOKENS),
        Op::WriteData => Some(&WRITE_DATA),
        Op::QueryAccount => Some(&QUERY_ACCOUNT),
        Op::Unknown => None,
    }
}
