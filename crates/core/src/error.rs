//! Errors raised while validating and lowering a composition.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Composition has no bounds.")]
    MissingBounds,
    #[error("Composition bounds are invalid: {0}")]
    InvalidBounds(String),
    #[error("Composition has no children to render.")]
    EmptyComposition,
    #[error("Composition has no absOrigin; node positions cannot be resolved.")]
    MissingAbsOrigin,
    #[error("Node '{node_id}' is nested deeper than the limit of {limit}.")]
    TooDeep { node_id: String, limit: usize },
    #[error("Malformed composition JSON: {0}")]
    Json(#[from] serde_json::Error),
}
