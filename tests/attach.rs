//! Best-attachment scoring.

mod helpers;

use analyzer::analyze::find_best_attachment_node;
use analyzer::parse::types::OperationType as Op;
use analyzer::rules::ResourceKind;
use helpers::{edge, flow, funding_chain, node};

#[test]
fn empty_flow_reports_everything_missing() {
    let result = find_best_attachment_node(Op::CreateIdentity, &flow(vec![], vec![]));
    assert_eq!(result.attach_to_node_id, None);
    assert_eq!(result.score, 0);
    assert!(result.satisfied_resources.is_empty());
    assert_eq!(
        result.missing_resources.iter().copied().collect::<Vec<_>>(),
        [ResourceKind::Keypair, ResourceKind::Credits]
    );
    assert_eq!(
        result.remaining_recipe,
        vec![Op::GenerateKeys, Op::Faucet, Op::WaitForBalance, Op::AddCredits]
    );
}

#[test]
fn target_without_requirements_needs_no_attachment() {
    let result = find_best_attachment_node(Op::GenerateKeys, &funding_chain());
    assert_eq!(result.attach_to_node_id, None);
    assert_eq!(result.score, 0);
    assert!(result.missing_resources.is_empty());
    assert!(result.remaining_recipe.is_empty());
}

#[test]
fn unknown_target_needs_no_attachment() {
    let result = find_best_attachment_node(Op::Unknown, &funding_chain());
    assert_eq!(result.attach_to_node_id, None);
}

#[test]
fn attaches_to_the_satisfying_terminal() {
    let result = find_best_attachment_node(Op::AddCredits, &funding_chain());
    insta::assert_json_snapshot!("attach_add_credits_to_funding_chain", result);
}

#[test]
fn higher_score_beats_canvas_position() {
    // A lone keypair block low on the canvas loses to a funded chain
    // ending higher up.
    let f = flow(
        vec![
            node("solo-keys", Op::GenerateKeys, 0.0, 900.0),
            node("keys", Op::GenerateKeys, 400.0, 0.0),
            node("faucet", Op::Faucet, 400.0, 120.0),
        ],
        vec![edge("keys", "faucet")],
    );
    let result = find_best_attachment_node(Op::AddCredits, &f);
    assert_eq!(result.attach_to_node_id.as_deref(), Some("faucet"));
    assert_eq!(result.score, 2);
}

#[test]
fn equal_scores_prefer_the_lower_candidate() {
    let f = flow(
        vec![
            node("top", Op::GenerateKeys, 0.0, 100.0),
            node("bottom", Op::GenerateKeys, 0.0, 300.0),
        ],
        vec![],
    );
    let result = find_best_attachment_node(Op::Faucet, &f);
    assert_eq!(result.attach_to_node_id.as_deref(), Some("bottom"));
    assert_eq!(result.score, 1);
    assert!(result.missing_resources.is_empty());
}

#[test]
fn cyclic_flow_still_finds_a_candidate() {
    // No terminal exists; every node becomes a candidate.
    let f = flow(
        vec![
            node("a", Op::GenerateKeys, 0.0, 0.0),
            node("b", Op::GenerateKeys, 0.0, 200.0),
        ],
        vec![edge("a", "b"), edge("b", "a")],
    );
    let result = find_best_attachment_node(Op::Faucet, &f);
    assert_eq!(result.attach_to_node_id.as_deref(), Some("b"));
}
