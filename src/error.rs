use scenemark_core::BuildError;
use scenemark_render_html::RenderError;
use thiserror::Error;

/// The error type of every public pipeline entry point.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Refusing to write asset '{0}' outside the output directory")]
    UnsafeAssetName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
