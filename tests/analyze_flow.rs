//! Flow-level validation: severity precedence, cost accounting, tolerance.

mod helpers;

use analyzer::analyze::analyze_flow;
use analyzer::parse;
use analyzer::parse::types::OperationType as Op;
use analyzer::rules::{ResourceKind, Severity};
use helpers::{edge, flow, funding_chain, node};

#[test]
fn empty_flow_is_valid() {
    let result = analyze_flow(&flow(vec![], vec![]));
    assert_eq!(result.severity, Severity::Valid);
    assert_eq!(result.total_credit_cost, 0);
    assert!(result.node_results.is_empty());
}

#[test]
fn lite_onboarding_fixture_is_valid() {
    let f = parse::parse(include_str!("fixtures/lite_onboarding.json")).expect("Should parse");
    let result = analyze_flow(&f);
    assert_eq!(result.severity, Severity::Valid);
    assert_eq!(result.total_credit_cost, 5000);
    assert!(result.node_results.values().all(|r| r.issues.is_empty()));
}

#[test]
fn error_beats_warning_in_severity_merge() {
    // AddCredits fed only by GenerateKeys: balance missing (error), oracle
    // price missing (warning), keypair satisfied.
    let f = flow(
        vec![
            node("keys", Op::GenerateKeys, 0.0, 0.0),
            node("credits", Op::AddCredits, 0.0, 120.0),
        ],
        vec![edge("keys", "credits")],
    );
    let result = analyze_flow(&f);
    let credits = &result.node_results["credits"];
    assert_eq!(credits.severity, Severity::Error);
    assert_eq!(credits.issues.len(), 2);
    assert_eq!(result.severity, Severity::Error);
}

#[test]
fn unmet_warning_alone_yields_warning() {
    let f = flow(
        vec![
            node("keys", Op::GenerateKeys, 0.0, 0.0),
            node("faucet", Op::Faucet, 0.0, 120.0),
            node("credits", Op::AddCredits, 0.0, 240.0),
        ],
        vec![edge("keys", "faucet"), edge("faucet", "credits")],
    );
    let result = analyze_flow(&f);
    let credits = &result.node_results["credits"];
    assert_eq!(credits.severity, Severity::Warning);
    assert_eq!(credits.issues.len(), 1);
    assert_eq!(credits.issues[0].resource, ResourceKind::OraclePrice);
    assert_eq!(result.severity, Severity::Warning);
}

#[test]
fn issue_text_names_missing_resource_and_fix() {
    let f = flow(vec![node("faucet", Op::Faucet, 0.0, 0.0)], vec![]);
    let result = analyze_flow(&f);
    let issue = &result.node_results["faucet"].issues[0];
    assert_eq!(issue.message, "Missing a signing keypair");
    assert_eq!(issue.remediation, "Add a Generate Keys block upstream");
    assert_eq!(issue.suggested_blocks, vec![Op::GenerateKeys]);
}

#[test]
fn unknown_type_is_always_valid() {
    let f = parse::parse(include_str!("fixtures/unknown_type.json")).unwrap();
    let result = analyze_flow(&f);
    let mystery = &result.node_results["mystery"];
    assert_eq!(mystery.node_type, Op::Unknown);
    assert_eq!(mystery.severity, Severity::Valid);
    assert!(mystery.issues.is_empty());
    assert_eq!(mystery.credit_cost, 0);
    assert!(mystery.auto_fix_recipe.is_empty());
}

#[test]
fn total_cost_includes_unsatisfied_nodes() {
    // Orphan error-severity nodes still contribute their execution cost.
    let f = flow(
        vec![
            node("identity", Op::CreateIdentity, 0.0, 0.0),
            node("tokens", Op::CreateTokenAccount, 0.0, 120.0),
        ],
        vec![],
    );
    let result = analyze_flow(&f);
    assert_eq!(result.severity, Severity::Error);
    assert_eq!(result.total_credit_cost, 7500);
}

#[test]
fn analyze_is_idempotent_modulo_timestamp() {
    let f = funding_chain();
    let first = analyze_flow(&f);
    let second = analyze_flow(&f);
    assert_eq!(first.node_results, second.node_results);
    assert_eq!(first.total_credit_cost, second.total_credit_cost);
    assert_eq!(first.severity, second.severity);
}

#[test]
fn auto_fix_recipe_for_orphan_add_credits() {
    let f = flow(vec![node("credits", Op::AddCredits, 0.0, 0.0)], vec![]);
    let result = analyze_flow(&f);
    assert_eq!(
        result.node_results["credits"].auto_fix_recipe,
        vec![Op::GenerateKeys, Op::Faucet, Op::WaitForBalance]
    );
}
