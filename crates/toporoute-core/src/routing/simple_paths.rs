//! Simple-path enumeration (depth-first, cutoff-bounded).

use crate::graph::Graph;

/// Enumerates every simple path from `source` to `destination` with at most
/// `cutoff` hops, sorted ascending by hop count. The sort is stable, so
/// equal-length paths keep discovery order (depth-first, neighbors in
/// lexicographic order).
///
/// `source == destination` yields the trivial single-node path. An
/// unreachable destination yields an empty list.
pub(super) fn enumerate(
    graph: &Graph,
    source: &str,
    destination: &str,
    cutoff: usize,
) -> Vec<Vec<String>> {
    let mut paths = Vec::new();
    let mut current = vec![source.to_string()];
    visit(graph, source, destination, cutoff, &mut current, &mut paths);
    paths.sort_by_key(Vec::len);
    paths
}

fn visit(
    graph: &Graph,
    node: &str,
    destination: &str,
    cutoff: usize,
    current: &mut Vec<String>,
    paths: &mut Vec<Vec<String>>,
) {
    if node == destination {
        paths.push(current.clone());
        return;
    }
    // current.len() nodes on the path means current.len() - 1 hops used;
    // extending past the cutoff cannot reach the destination in budget.
    if current.len() > cutoff {
        return;
    }
    for neighbor in graph.neighbors(node) {
        if current.iter().any(|n| n == neighbor) {
            continue;
        }
        current.push(neighbor.clone());
        visit(graph, neighbor, destination, cutoff, current, paths);
        current.pop();
    }
}
