//! Unit tests for mob-walk.

use mob_core::{NodeId, SimRng};
use mob_topo::RoutingTable;

use crate::{PathGenerator, WalkError};

fn node(id: u32) -> NodeId {
    NodeId(id)
}

#[test]
fn immediate_absorption_yields_single_element_path() {
    let mut table = RoutingTable::new();
    table.push(node(1), None, None, 1.0);
    let mut walker = PathGenerator::new(&table, SimRng::new(0));
    assert_eq!(walker.random_path(node(1)).unwrap(), [node(1)]);
}

#[test]
fn deterministic_route_is_seed_independent() {
    // 1 → 2 → 3 → absorbed, probability 1 at every step.
    let mut table = RoutingTable::new();
    table.push(node(1), None, Some(node(2)), 1.0);
    table.push(node(2), Some(node(1)), Some(node(3)), 1.0);
    table.push(node(3), Some(node(2)), None, 1.0);
    for seed in 0..50 {
        let mut walker = PathGenerator::new(&table, SimRng::new(seed));
        assert_eq!(walker.random_path(node(1)).unwrap(), [node(1), node(2), node(3)]);
    }
}

#[test]
fn previous_hop_steers_the_walk() {
    // Node 2 routes by where the walker came from: arriving from 1 it
    // continues to 3, arriving from 3 it bounces back to 1.
    let mut table = RoutingTable::new();
    table.push(node(1), None, Some(node(2)), 1.0);
    table.push(node(2), Some(node(1)), Some(node(3)), 1.0);
    table.push(node(3), Some(node(2)), Some(node(2)), 1.0);
    table.push(node(2), Some(node(3)), Some(node(1)), 1.0);
    table.push(node(1), Some(node(2)), None, 1.0);
    let mut walker = PathGenerator::new(&table, SimRng::new(7));
    assert_eq!(
        walker.random_path(node(1)).unwrap(),
        [node(1), node(2), node(3), node(2), node(1)]
    );
}

#[test]
fn branching_walk_visits_only_listed_hops() {
    let mut table = RoutingTable::new();
    table.push(node(1), None, Some(node(2)), 0.5);
    table.push(node(1), None, None, 0.5);
    table.push(node(2), Some(node(1)), None, 1.0);
    for seed in 0..100 {
        let mut walker = PathGenerator::new(&table, SimRng::new(seed));
        let path = walker.random_path(node(1)).unwrap();
        assert!(path == [node(1)] || path == [node(1), node(2)]);
    }
}

#[test]
fn missing_entry_is_fatal() {
    let table = RoutingTable::new();
    let mut walker = PathGenerator::new(&table, SimRng::new(0));
    let err = walker.random_path(node(1)).unwrap_err();
    assert!(matches!(err, WalkError::MissingEntry { node: NodeId(1), prev: None }));
}

#[test]
fn zero_matching_intervals_is_fatal() {
    // A zero-width interval can never contain the draw.
    let mut table = RoutingTable::new();
    table.push(node(1), None, Some(node(2)), 0.0);
    let mut walker = PathGenerator::new(&table, SimRng::new(0));
    let err = walker.random_path(node(1)).unwrap_err();
    assert!(matches!(err, WalkError::IntervalMismatch { matches: 0, .. }));
}

#[test]
fn overlapping_intervals_are_fatal() {
    // A negative probability folds the running bounds back on themselves,
    // so every draw lands in two intervals.
    let mut table = RoutingTable::new();
    table.push(node(1), None, Some(node(2)), 1.0);
    table.push(node(1), None, Some(node(3)), -1.0);
    table.push(node(1), None, None, 1.0);
    let mut walker = PathGenerator::new(&table, SimRng::new(0));
    let err = walker.random_path(node(1)).unwrap_err();
    assert!(matches!(err, WalkError::IntervalMismatch { matches: 2, .. }));
}
