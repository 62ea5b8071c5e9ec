//! Tests for the single shortest-path strategies.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{route, RouteOutcome, Strategy};
use crate::error::Error;
use crate::generator::generate_with;
use crate::graph::{AdjacencyList, Graph};

fn graph_from(entries: &[(&str, &[&str])]) -> Graph {
    let adj_list: AdjacencyList = entries
        .iter()
        .map(|(node, neighbors)| {
            (
                (*node).to_string(),
                neighbors.iter().map(|n| (*n).to_string()).collect(),
            )
        })
        .collect();
    Graph::from_adjacency(&adj_list)
}

fn build_diamond() -> Graph {
    graph_from(&[
        ("node_0", &["node_1", "node_2"]),
        ("node_1", &["node_0", "node_2"]),
        ("node_2", &["node_0", "node_1", "node_3"]),
        ("node_3", &["node_2"]),
    ])
}

fn single_path(outcome: RouteOutcome) -> Vec<String> {
    match outcome {
        RouteOutcome::Single(path) => path,
        RouteOutcome::Many(_) => panic!("expected a single-path outcome"),
    }
}

#[test]
fn test_spf_diamond() {
    let graph = build_diamond();
    let path = single_path(
        route(&graph, Strategy::ShortestPathSpf, "node_0", "node_3", None).unwrap(),
    );
    assert_eq!(path, vec!["node_0", "node_2", "node_3"]);
}

#[test]
fn test_bf_diamond_same_length_as_spf() {
    let graph = build_diamond();
    let spf = single_path(
        route(&graph, Strategy::ShortestPathSpf, "node_0", "node_3", None).unwrap(),
    );
    let bf = single_path(
        route(&graph, Strategy::ShortestPathBf, "node_0", "node_3", None).unwrap(),
    );
    assert_eq!(spf.len(), bf.len());
    assert_eq!(bf.first().map(String::as_str), Some("node_0"));
    assert_eq!(bf.last().map(String::as_str), Some("node_3"));
}

#[test]
fn test_shortest_length_matches_enumeration_minimum() {
    let graph = build_diamond();
    let spf = single_path(
        route(&graph, Strategy::ShortestPathSpf, "node_1", "node_3", None).unwrap(),
    );
    let all = match route(&graph, Strategy::AllSimplePaths, "node_1", "node_3", None).unwrap() {
        RouteOutcome::Many(paths) => paths,
        RouteOutcome::Single(_) => unreachable!(),
    };
    let min_len = all.iter().map(Vec::len).min().unwrap();
    assert_eq!(spf.len(), min_len);
}

#[test]
fn test_returned_path_follows_edges() {
    let graph = build_diamond();
    for strategy in [Strategy::ShortestPathSpf, Strategy::ShortestPathBf] {
        let path = single_path(route(&graph, strategy, "node_1", "node_3", None).unwrap());
        for window in path.windows(2) {
            assert!(
                graph.neighbors(&window[0]).any(|n| *n == window[1]),
                "{} -> {} is not an edge",
                window[0],
                window[1]
            );
        }
    }
}

#[test]
fn test_no_path_is_an_error() {
    let graph = graph_from(&[
        ("node_0", &["node_1"]),
        ("node_1", &["node_0"]),
        ("node_5", &[]),
    ]);
    for strategy in [Strategy::ShortestPathSpf, Strategy::ShortestPathBf] {
        let err = route(&graph, strategy, "node_0", "node_5", None).unwrap_err();
        assert!(matches!(
            err,
            Error::NoPathFound { source, destination }
                if source == "node_0" && destination == "node_5"
        ));
    }
}

#[test]
fn test_spf_and_bf_agree_on_random_topologies() {
    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = Graph::from_adjacency(&generate_with(12, false, &mut rng));

        let spf = route(&graph, Strategy::ShortestPathSpf, "node_0", "node_11", None);
        let bf = route(&graph, Strategy::ShortestPathBf, "node_0", "node_11", None);

        match (spf, bf) {
            (Ok(spf), Ok(bf)) => {
                assert_eq!(single_path(spf).len(), single_path(bf).len(), "seed {seed}");
            }
            (Err(Error::NoPathFound { .. }), Err(Error::NoPathFound { .. })) => {}
            (spf, bf) => panic!("divergent outcomes for seed {seed}: {spf:?} vs {bf:?}"),
        }
    }
}
