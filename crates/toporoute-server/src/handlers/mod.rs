//! HTTP handlers for the TopoRoute REST API.
//!
//! - `routes`: path computation over a submitted topology
//! - `health`: liveness probe

pub mod health;
pub mod routes;
mod types;

pub use health::health_check;
pub use routes::get_routes;
pub use types::{ErrorResponse, RouteRequest};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the service router with all routes and layers.
#[must_use]
pub fn build_router() -> Router {
    Router::new()
        .route("/get_routes", post(get_routes))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
