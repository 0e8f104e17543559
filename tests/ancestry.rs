//! Ancestor-set computation over flow graphs.

mod helpers;

use std::collections::HashSet;

use analyzer::analyze::build_ancestry_map;
use analyzer::parse::FlowGraph;
use analyzer::parse::types::OperationType as Op;
use helpers::{edge, flow, funding_chain, node};

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut ids: Vec<&str> = set.iter().map(String::as_str).collect();
    ids.sort();
    ids
}

#[test]
fn linear_chain_ancestry() {
    let map = build_ancestry_map(&FlowGraph::build(&funding_chain()));
    assert!(map["keys"].is_empty());
    assert_eq!(sorted(&map["faucet"]), ["keys"]);
    assert_eq!(sorted(&map["wait"]), ["faucet", "keys"]);
}

#[test]
fn diamond_ancestry() {
    let f = flow(
        vec![
            node("a", Op::GenerateKeys, 0.0, 0.0),
            node("b", Op::Faucet, -120.0, 120.0),
            node("c", Op::NetworkStatus, 120.0, 120.0),
            node("d", Op::AddCredits, 0.0, 240.0),
        ],
        vec![edge("a", "b"), edge("a", "c"), edge("b", "d"), edge("c", "d")],
    );
    let map = build_ancestry_map(&FlowGraph::build(&f));
    assert_eq!(sorted(&map["b"]), ["a"]);
    assert_eq!(sorted(&map["d"]), ["a", "b", "c"]);
}

#[test]
fn cycle_terminates_and_excludes_self() {
    let f = flow(
        vec![
            node("a", Op::Faucet, 0.0, 0.0),
            node("b", Op::WaitForBalance, 0.0, 120.0),
        ],
        vec![edge("a", "b"), edge("b", "a")],
    );
    let map = build_ancestry_map(&FlowGraph::build(&f));
    assert_eq!(sorted(&map["a"]), ["b"]);
    assert_eq!(sorted(&map["b"]), ["a"]);
}

#[test]
fn dangling_edge_contributes_no_ancestors() {
    let f = flow(vec![node("a", Op::Faucet, 0.0, 0.0)], vec![edge("ghost", "a")]);
    let map = build_ancestry_map(&FlowGraph::build(&f));
    assert!(map["a"].is_empty());
}
