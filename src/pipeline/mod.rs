//! Pipeline construction and orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder for a [`DocumentPipeline`]
//! - [`RenderConfig`]: every knob the pipeline exposes
//! - [`DocumentPipeline`]: immutable, shareable across threads
//!
//! # Example
//!
//! ```ignore
//! use scenemark::{PipelineBuilder, RenderMode};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_mode(RenderMode::Content)
//!     .with_title("Landing page")
//!     .build()?;
//!
//! let output = pipeline.render_json(&std::fs::read_to_string("scene.json")?)?;
//! pipeline.write_output(&output, "out")?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::{OutputFormat, RenderConfig, RenderMode};
pub use orchestrator::DocumentPipeline;
