//! TopoRoute Server - HTTP layer over the routing engine.
//!
//! All routing logic lives in `toporoute-core`; this crate only marshals
//! JSON requests, maps core errors to HTTP statuses, and owns process
//! startup. The service is stateless: every request carries its own
//! topology.

#![warn(missing_docs)]

pub mod handlers;

pub use handlers::{build_router, get_routes, health_check, ErrorResponse, RouteRequest};
