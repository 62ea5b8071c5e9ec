//! Request and response types for the TopoRoute REST API.

use serde::{Deserialize, Serialize};
use toporoute_core::AdjacencyList;

/// Body of `POST /get_routes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Source node label.
    pub source: String,
    /// Destination node label.
    pub destination: String,
    /// Wire name of the routing strategy (`all_simple_paths`,
    /// `all_cheapest_paths`, `sortest_path_spf`, `sortest_path_bf`).
    pub routing_logic: String,
    /// Undirected topology as an adjacency list.
    pub adj_list: AdjacencyList,
    /// Optional hop-count limit for path enumeration; values beyond the node
    /// count are clamped to it.
    #[serde(default)]
    pub cutoff: Option<usize>,
}

/// Error payload returned on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description.
    pub error: String,
}
