//! Path-finding strategies over undirected topologies.
//!
//! Four strategies are exposed, selected by their wire name:
//!
//! | wire name            | result                                            |
//! |----------------------|---------------------------------------------------|
//! | `all_simple_paths`   | every simple path within the hop cutoff, sorted   |
//! | `all_cheapest_paths` | every simple path, sorted ascending by hop count  |
//! | `sortest_path_spf`   | single shortest path (Dijkstra, unit weights)     |
//! | `sortest_path_bf`    | single shortest path (Bellman-Ford, unit weights) |
//!
//! The `sortest_path_*` spellings are part of the wire contract and must not
//! be corrected.

mod shortest;
mod simple_paths;

#[cfg(test)]
mod shortest_tests;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// A named path-finding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Enumerate every simple path within the hop cutoff.
    AllSimplePaths,
    /// Enumerate every simple path in ascending hop-count order. Unweighted
    /// edges make this behaviorally identical to [`Strategy::AllSimplePaths`]
    /// with an unbounded cutoff.
    AllCheapestPaths,
    /// Single shortest path via Dijkstra over unit weights.
    ShortestPathSpf,
    /// Single shortest path via Bellman-Ford over unit weights.
    ShortestPathBf,
}

impl Strategy {
    /// Wire name of the strategy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllSimplePaths => "all_simple_paths",
            Self::AllCheapestPaths => "all_cheapest_paths",
            Self::ShortestPathSpf => "sortest_path_spf",
            Self::ShortestPathBf => "sortest_path_bf",
        }
    }

    /// Returns true for strategies that yield a list of paths rather than a
    /// single one.
    #[must_use]
    pub fn enumerates(self) -> bool {
        matches!(self, Self::AllSimplePaths | Self::AllCheapestPaths)
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Error> {
        match s {
            "all_simple_paths" => Ok(Self::AllSimplePaths),
            "all_cheapest_paths" => Ok(Self::AllCheapestPaths),
            "sortest_path_spf" => Ok(Self::ShortestPathSpf),
            "sortest_path_bf" => Ok(Self::ShortestPathBf),
            other => Err(Error::InvalidStrategy(other.to_string())),
        }
    }
}

/// Result of a routing request.
///
/// Serialized untagged so the wire shape matches the strategy: single-path
/// strategies produce an array of node labels, enumeration strategies an
/// array of arrays (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteOutcome {
    /// All paths found by an enumeration strategy, ascending by hop count.
    Many(Vec<Vec<String>>),
    /// The single path found by a shortest-path strategy.
    Single(Vec<String>),
}

/// Computes route(s) between `source` and `destination`.
///
/// `cutoff` bounds the hop count for path enumeration; unset or larger than
/// the node count collapses to the node count, which no simple path can
/// exceed anyway.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `source` or `destination` is absent
/// - [`Error::NoPathFound`] if a single-path strategy finds no route;
///   enumeration strategies report this as an empty list instead
pub fn route(
    graph: &Graph,
    strategy: Strategy,
    source: &str,
    destination: &str,
    cutoff: Option<usize>,
) -> Result<RouteOutcome> {
    for node in [source, destination] {
        if !graph.contains(node) {
            return Err(Error::NodeNotFound(node.to_string()));
        }
    }

    let node_count = graph.node_count();
    let cutoff = cutoff.map_or(node_count, |c| c.min(node_count));

    tracing::debug!(
        strategy = strategy.as_str(),
        source,
        destination,
        cutoff,
        "computing route"
    );

    match strategy {
        Strategy::AllSimplePaths => Ok(RouteOutcome::Many(simple_paths::enumerate(
            graph,
            source,
            destination,
            cutoff,
        ))),
        Strategy::AllCheapestPaths => Ok(RouteOutcome::Many(simple_paths::enumerate(
            graph,
            source,
            destination,
            node_count,
        ))),
        Strategy::ShortestPathSpf => {
            shortest::dijkstra(graph, source, destination).map(RouteOutcome::Single)
        }
        Strategy::ShortestPathBf => {
            shortest::bellman_ford(graph, source, destination).map(RouteOutcome::Single)
        }
    }
}

/// String-keyed entry point: parses the strategy name, then delegates to
/// [`route`].
///
/// # Errors
///
/// [`Error::InvalidStrategy`] for an unrecognized name, plus everything
/// [`route`] returns.
pub fn route_named(
    graph: &Graph,
    strategy: &str,
    source: &str,
    destination: &str,
    cutoff: Option<usize>,
) -> Result<RouteOutcome> {
    route(graph, strategy.parse()?, source, destination, cutoff)
}
