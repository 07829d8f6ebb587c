#![allow(dead_code)]

pub mod fixtures;
pub mod html_assertions;

use scenemark::{DocumentPipeline, PipelineBuilder, PipelineError, RenderOutput};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Renders a composition with the default pipeline.
pub fn render(composition: &Value) -> Result<RenderOutput, PipelineError> {
    render_with(PipelineBuilder::new(), composition)
}

/// Renders a composition with a customized builder.
pub fn render_with(builder: PipelineBuilder, composition: &Value) -> Result<RenderOutput, PipelineError> {
    init_logger();
    let pipeline: DocumentPipeline = builder.build()?;
    pipeline.render_json(&composition.to_string())
}
