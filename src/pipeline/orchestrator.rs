use super::config::{OutputFormat, RenderConfig};
use crate::error::PipelineError;
use scenemark_core::{lower_composition, Composition, LoweredComposition};
use scenemark_ir::DocumentIr;
use scenemark_render_html::svg::is_safe_asset_name;
use scenemark_render_html::{HtmlRenderer, RenderOutput};
use std::fs;
use std::path::{Path, PathBuf};

/// The configured compiler. Immutable after construction and `Send + Sync`,
/// so one pipeline can serve builds on several threads.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    config: RenderConfig,
    renderer: HtmlRenderer,
}

impl DocumentPipeline {
    pub(crate) fn new(config: RenderConfig, renderer: HtmlRenderer) -> Self {
        Self { config, renderer }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Parses, validates, and lowers a composition JSON document.
    pub fn lower_json(&self, json: &str) -> Result<LoweredComposition, PipelineError> {
        let composition = Composition::from_json(json)?;
        self.lower(&composition)
    }

    pub fn lower(&self, composition: &Composition) -> Result<LoweredComposition, PipelineError> {
        let lowered = lower_composition(composition, &self.config.lower_options())?;
        if self.config.debug_ir {
            log::debug!("Lowered IR: {}", serde_json::to_string_pretty(&lowered.document)?);
        }
        Ok(lowered)
    }

    /// Renders a composition JSON document.
    pub fn render_json(&self, json: &str) -> Result<RenderOutput, PipelineError> {
        let lowered = self.lower_json(json)?;
        self.render_lowered(&lowered)
    }

    pub fn render_composition(&self, composition: &Composition) -> Result<RenderOutput, PipelineError> {
        let lowered = self.lower(composition)?;
        self.render_lowered(&lowered)
    }

    pub fn render_lowered(&self, lowered: &LoweredComposition) -> Result<RenderOutput, PipelineError> {
        Ok(self.renderer.render(&lowered.document, &lowered.fonts)?)
    }

    /// Renders an already lowered IR document. No fonts are known, so no
    /// font links are produced.
    pub fn render_ir(&self, document: &DocumentIr) -> Result<RenderOutput, PipelineError> {
        Ok(self.renderer.render(document, &[])?)
    }

    /// Renders a serialized IR document.
    pub fn render_ir_json(&self, json: &str) -> Result<RenderOutput, PipelineError> {
        let document: DocumentIr = serde_json::from_str(json)?;
        self.render_ir(&document)
    }

    /// Writes `index.html`, `styles.css` (fragments only), and every SVG
    /// asset below `dir`. Returns the written paths.
    pub fn write_output<P: AsRef<Path>>(
        &self,
        output: &RenderOutput,
        dir: P,
    ) -> Result<Vec<PathBuf>, PipelineError> {
        let dir = dir.as_ref();
        if let Some(asset) = output.assets.iter().find(|asset| !is_safe_asset_name(&asset.file)) {
            return Err(PipelineError::UnsafeAssetName(asset.file.clone()));
        }
        fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(output.assets.len() + 2);

        let index = dir.join("index.html");
        fs::write(&index, &output.html)?;
        written.push(index);

        if self.config.output == OutputFormat::Fragment {
            let styles = dir.join("styles.css");
            fs::write(&styles, &output.css_text)?;
            written.push(styles);
        }

        if !output.assets.is_empty() {
            fs::create_dir_all(dir.join("svgs"))?;
        }
        for asset in &output.assets {
            let path = dir.join(asset.path());
            fs::write(&path, &asset.markup)?;
            written.push(path);
        }
        log::info!("Wrote {} files to '{}'", written.len(), dir.display());
        Ok(written)
    }
}
