//! Single shortest-path algorithms over unit-weight topologies.
//!
//! Both algorithms return one minimum-hop path. On an unweighted graph they
//! agree on path length; the paths themselves may differ when several
//! minimum-hop routes exist, since each algorithm settles predecessors in its
//! own (deterministic) order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Dijkstra over unit weights (min-heap keyed by hop count, lexicographic
/// tie-break).
///
/// # Errors
///
/// [`Error::NoPathFound`] if the destination is unreachable.
pub(super) fn dijkstra(graph: &Graph, source: &str, destination: &str) -> Result<Vec<String>> {
    if source == destination {
        return Ok(vec![source.to_string()]);
    }

    let mut dist: BTreeMap<&str, usize> = BTreeMap::new();
    let mut prev: BTreeMap<&str, &str> = BTreeMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0);
    heap.push(Reverse((0usize, source)));

    while let Some(Reverse((hops, node))) = heap.pop() {
        // Stale heap entry for an already-settled node.
        if dist.get(node).is_some_and(|&best| hops > best) {
            continue;
        }
        if node == destination {
            break;
        }
        for neighbor in graph.neighbors(node) {
            let neighbor = neighbor.as_str();
            let next = hops + 1;
            if dist.get(neighbor).is_none_or(|&best| next < best) {
                dist.insert(neighbor, next);
                prev.insert(neighbor, node);
                heap.push(Reverse((next, neighbor)));
            }
        }
    }

    reconstruct(&prev, source, destination).ok_or_else(|| no_path(source, destination))
}

/// Bellman-Ford over unit weights: up to |V| - 1 relaxation rounds, nodes and
/// neighbors visited in lexicographic order.
///
/// # Errors
///
/// [`Error::NoPathFound`] if the destination is unreachable.
pub(super) fn bellman_ford(graph: &Graph, source: &str, destination: &str) -> Result<Vec<String>> {
    if source == destination {
        return Ok(vec![source.to_string()]);
    }

    let mut dist: BTreeMap<&str, usize> = BTreeMap::new();
    let mut prev: BTreeMap<&str, &str> = BTreeMap::new();
    dist.insert(source, 0);

    for _ in 1..graph.node_count() {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&hops) = dist.get(node.as_str()) else {
                continue;
            };
            for neighbor in graph.neighbors(node) {
                let next = hops + 1;
                if dist.get(neighbor.as_str()).is_none_or(|&best| next < best) {
                    dist.insert(neighbor.as_str(), next);
                    prev.insert(neighbor.as_str(), node.as_str());
                    changed = true;
                }
            }
        }
        // Fixed point: further rounds cannot relax anything.
        if !changed {
            break;
        }
    }

    reconstruct(&prev, source, destination).ok_or_else(|| no_path(source, destination))
}

/// Walks the predecessor map back from the destination. `None` when the
/// destination was never reached.
fn reconstruct(
    prev: &BTreeMap<&str, &str>,
    source: &str,
    destination: &str,
) -> Option<Vec<String>> {
    let mut path = vec![destination.to_string()];
    let mut node = destination;
    while node != source {
        node = *prev.get(node)?;
        path.push(node.to_string());
    }
    path.reverse();
    Some(path)
}

fn no_path(source: &str, destination: &str) -> Error {
    Error::NoPathFound {
        source: source.to_string(),
        destination: destination.to_string(),
    }
}
