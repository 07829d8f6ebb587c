use scenemark_layout::LayoutError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Node '{parent}' has no child at index {index}")]
    MissingNode { parent: String, index: usize },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid SVG '{file}': {message}")]
    Svg { file: String, message: String },

    #[error("Node '{node_id}' is nested deeper than the limit of {limit}")]
    TooDeep { node_id: String, limit: usize },
}
