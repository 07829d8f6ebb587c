//! scenemark compiles design-tool scene graphs into static HTML and CSS.
//!
//! A composition is validated and lowered into the render IR
//! ([`scenemark_core`]), then rendered by one of the HTML backends
//! ([`scenemark_render_html`]). [`PipelineBuilder`] wires both halves
//! together with the injected asset and font collaborators.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{DocumentPipeline, OutputFormat, PipelineBuilder, RenderConfig, RenderMode};

pub use scenemark_core::{BuildError, Composition, LoweredComposition};
pub use scenemark_ir::DocumentIr;
pub use scenemark_render_html::{RenderError, RenderOutput, SvgAsset};
pub use scenemark_traits::{
    AssetKind, AssetUrlProvider, FontCollector, FontRequest, GoogleFontsCollector,
    MapAssetProvider, NoFontCollector, PrefixAssetProvider,
};
