//! HTML backends for the scenemark IR.
//!
//! [`HtmlRenderer`] walks a [`DocumentIr`](scenemark_ir::DocumentIr) and
//! produces either content markup (utility classes, shared classes, vector
//! assets) or a debug overlay of hit-testable boxes. Every call to
//! [`HtmlRenderer::render`] owns its caches; renderers hold no mutable state.

pub mod assets;
mod context;
pub mod document;
mod element;
pub mod error;
mod mask;
pub mod options;
mod renderer;
pub mod semantic;
pub mod svg;

pub use error::RenderError;
pub use options::{OutputFormat, RenderMode, RenderOptions};
pub use renderer::{HtmlRenderer, RenderOutput, SvgAsset};

#[cfg(test)]
mod renderer_test;
