//! Route computation handler.

use axum::http::StatusCode;
use axum::Json;

use toporoute_core::{route_named, Error, Graph, RouteOutcome};

use super::types::{ErrorResponse, RouteRequest};

/// Computes path(s) between two nodes of the submitted topology.
///
/// The graph is built fresh from the request's adjacency list; nothing is
/// shared between requests. Path search runs on the blocking pool since it
/// is CPU-bound.
///
/// # Errors
///
/// - 400 for an unrecognized `routing_logic`
/// - 404 when source or destination is absent, or a single-path strategy
///   finds no route
/// - 500 if the routing task panics
pub async fn get_routes(
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteOutcome>, (StatusCode, Json<ErrorResponse>)> {
    tracing::info!(
        source = %request.source,
        destination = %request.destination,
        routing_logic = %request.routing_logic,
        nodes = request.adj_list.len(),
        "route request received"
    );

    let outcome = tokio::task::spawn_blocking(move || {
        let graph = Graph::from_adjacency(&request.adj_list);
        route_named(
            &graph,
            &request.routing_logic,
            &request.source,
            &request.destination,
            request.cutoff,
        )
    })
    .await
    .map_err(|e| internal_error(&e))?
    .map_err(error_response)?;

    Ok(Json(outcome))
}

/// Maps core errors to HTTP statuses with a structured body.
fn error_response(err: Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        Error::InvalidStrategy(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
        Error::NodeNotFound(_) | Error::NoPathFound { .. } => StatusCode::NOT_FOUND,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// Logs the full error server-side and returns a generic 500 body.
fn internal_error(err: &dyn std::fmt::Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(error = %err, "routing task failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "routing: internal error".to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strategy_maps_to_400() {
        let (status, Json(body)) = error_response(Error::InvalidStrategy("bogus".to_string()));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("bogus"));
    }

    #[test]
    fn test_node_not_found_maps_to_404() {
        let (status, _) = error_response(Error::NodeNotFound("node_9".to_string()));
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_no_path_maps_to_404() {
        let (status, _) = error_response(Error::NoPathFound {
            source: "a".to_string(),
            destination: "b".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_does_not_leak_details() {
        let (status, Json(body)) = internal_error(&"task panicked with sensitive data");
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.error.contains("panicked"));
    }
}
