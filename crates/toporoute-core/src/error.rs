//! Error types for toporoute-core.

use std::fmt;

/// Routing and topology error types.
// Implemented by hand rather than via `thiserror` because the derive treats
// any field named `source` as the error source, and `NoPathFound::source` is
// a plain `String` node label, not a nested error.
#[derive(Debug)]
pub enum Error {
    /// Unrecognized routing strategy name.
    InvalidStrategy(String),

    /// Source or destination node absent from the graph.
    NodeNotFound(String),

    /// No path connects source to destination.
    NoPathFound {
        /// Source node label of the failed request.
        source: String,
        /// Destination node label of the failed request.
        destination: String,
    },

    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStrategy(name) => {
                write!(f, "Invalid routing strategy: '{name}'")
            }
            Self::NodeNotFound(node) => {
                write!(f, "Node '{node}' not found in the graph")
            }
            Self::NoPathFound {
                source,
                destination,
            } => {
                write!(f, "No path found from '{source}' to '{destination}'")
            }
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Result type alias for routing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_strategy_display() {
        let err = Error::InvalidStrategy("bogus_strategy".to_string());
        assert_eq!(err.to_string(), "Invalid routing strategy: 'bogus_strategy'");
    }

    #[test]
    fn test_node_not_found_display() {
        let err = Error::NodeNotFound("node_9".to_string());
        assert_eq!(err.to_string(), "Node 'node_9' not found in the graph");
    }

    #[test]
    fn test_no_path_found_display() {
        let err = Error::NoPathFound {
            source: "node_0".to_string(),
            destination: "node_5".to_string(),
        };
        assert_eq!(err.to_string(), "No path found from 'node_0' to 'node_5'");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
