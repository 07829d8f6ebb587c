use super::config::{OutputFormat, RenderConfig, RenderMode};
use super::orchestrator::DocumentPipeline;
use crate::error::PipelineError;
use scenemark_render_html::HtmlRenderer;
use scenemark_traits::{AssetUrlProvider, FontCollector, NoFontCollector};
use std::sync::Arc;

/// A builder for creating a `DocumentPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: RenderConfig,
    asset_provider: Option<Arc<dyn AssetUrlProvider>>,
    font_collector: Option<Arc<dyn FontCollector>>,
}

impl PipelineBuilder {
    /// Creates a builder with the default configuration: content mode, a
    /// standalone document, utilities and transform simplification enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.config.output = output;
        self
    }

    /// Minimum repeat count for promoting a residual block to a shared
    /// class. `build` rejects values below 2.
    pub fn with_shared_class_threshold(mut self, threshold: usize) -> Self {
        self.config.shared_class_threshold = threshold;
        self
    }

    pub fn with_utility_classes(mut self, enabled: bool) -> Self {
        self.config.utility_classes = enabled;
        self
    }

    pub fn with_simplify_transforms(mut self, enabled: bool) -> Self {
        self.config.simplify_transforms = enabled;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    pub fn with_extra_css(mut self, css: impl Into<String>) -> Self {
        self.config.extra_css = Some(css.into());
        self
    }

    /// Logs the lowered IR as JSON at `debug` level.
    pub fn with_debug_ir(mut self, enabled: bool) -> Self {
        self.config.debug_ir = enabled;
        self
    }

    /// Rewrites `images/…` and `svgs/…` references through `provider`.
    pub fn with_asset_provider(mut self, provider: Arc<dyn AssetUrlProvider>) -> Self {
        self.asset_provider = Some(provider);
        self
    }

    /// Produces the `<head>` links for the fonts a document uses.
    pub fn with_font_collector(mut self, collector: Arc<dyn FontCollector>) -> Self {
        self.font_collector = Some(collector);
        self
    }

    /// Validates the configuration and creates the `DocumentPipeline`.
    pub fn build(self) -> Result<DocumentPipeline, PipelineError> {
        if self.config.shared_class_threshold < 2 {
            return Err(PipelineError::Config(format!(
                "shared_class_threshold must be at least 2, got {}",
                self.config.shared_class_threshold
            )));
        }
        if self.config.max_depth == 0 {
            return Err(PipelineError::Config("max_depth must be at least 1".to_string()));
        }

        let collector = self.font_collector.unwrap_or_else(|| Arc::new(NoFontCollector));
        let mut renderer =
            HtmlRenderer::new(self.config.render_options()).with_font_collector(collector);
        if let Some(provider) = self.asset_provider {
            renderer = renderer.with_asset_provider(provider);
        }
        log::debug!("Built pipeline: {:?}", self.config);
        Ok(DocumentPipeline::new(self.config, renderer))
    }
}
