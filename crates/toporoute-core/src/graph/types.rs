//! Graph types for in-memory topologies.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;

/// Adjacency-list representation of a topology.
///
/// Maps each node label to its neighbor labels. Insertion-ordered so that
/// generated topologies serialize with keys in node-index order. The mapping
/// is treated as a hint, not a contract: missing reverse entries, duplicate
/// neighbors, and self-references are all tolerated by [`Graph::from_adjacency`].
pub type AdjacencyList = IndexMap<String, Vec<String>>;

/// An undirected, unweighted, loop-free simple graph.
///
/// Stored as adjacency sets, so parallel edges collapse and neighbor
/// iteration is deterministic (lexicographic). Immutable once built; safe to
/// share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an adjacency list.
    ///
    /// Every listed neighbor relation becomes an undirected edge, with the
    /// reverse direction inserted regardless of whether the input lists it.
    /// A label appearing only as someone else's neighbor still becomes a
    /// node. Self-references are dropped. Always succeeds; an empty input
    /// produces an empty graph.
    #[must_use]
    pub fn from_adjacency(adj_list: &AdjacencyList) -> Self {
        let mut graph = Self::default();
        for (node, neighbors) in adj_list {
            graph.adjacency.entry(node.clone()).or_default();
            for neighbor in neighbors {
                graph.add_edge(node, neighbor);
            }
        }
        graph
    }

    fn add_edge(&mut self, a: &str, b: &str) {
        // No self-loops.
        if a == b {
            return;
        }
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Returns true if the graph contains the given node.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Iterates over a node's neighbors in lexicographic order.
    ///
    /// Empty iterator for isolated or unknown nodes.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = &String> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Iterates over all node labels in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.adjacency.keys()
    }

    /// Returns the total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}
