//! In-memory topology module.
//!
//! Provides the adjacency-list wire representation and the undirected simple
//! [`Graph`] built from it.
//!
//! # Example
//!
//! ```rust
//! use toporoute_core::graph::{AdjacencyList, Graph};
//!
//! let mut adj_list = AdjacencyList::new();
//! adj_list.insert("node_0".to_string(), vec!["node_1".to_string()]);
//!
//! let graph = Graph::from_adjacency(&adj_list);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

mod types;


pub use types::{AdjacencyList, Graph};
