//! # TopoRoute Core
//!
//! Random topology generation and path-finding over undirected, unweighted
//! simple graphs.
//!
//! The crate has three pieces:
//!
//! - [`generator`]: produces a random adjacency list over `node_<i>` labeled
//!   nodes, with a best-effort option to avoid isolated nodes
//! - [`graph`]: builds an immutable in-memory [`Graph`] from an adjacency list
//! - [`routing`]: computes one or all paths between two nodes using a named
//!   strategy
//!
//! All computation is synchronous and stateless; callers may share a built
//! [`Graph`] across threads freely.
//!
//! ## Quick Start
//!
//! ```rust
//! use toporoute_core::{generate, route, Graph, Strategy};
//!
//! let adj_list = generate(8, true);
//! let graph = Graph::from_adjacency(&adj_list);
//!
//! let outcome = route(&graph, Strategy::AllSimplePaths, "node_0", "node_3", None)?;
//! # Ok::<(), toporoute_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod generator;
pub mod graph;
pub mod routing;


pub use error::{Error, Result};
pub use generator::{generate, generate_with, node_label};
pub use graph::{AdjacencyList, Graph};
pub use routing::{route, route_named, RouteOutcome, Strategy};
