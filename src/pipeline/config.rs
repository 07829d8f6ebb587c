use scenemark_core::lower::DEFAULT_MAX_DEPTH;
use scenemark_core::LowerOptions;
use scenemark_render_html::RenderOptions;

pub use scenemark_render_html::{OutputFormat, RenderMode};

/// Everything that shapes one pipeline's output.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub mode: RenderMode,
    pub output: OutputFormat,
    /// Residual blocks occurring at least this often become shared classes.
    /// Must be 2 or more.
    pub shared_class_threshold: usize,
    pub utility_classes: bool,
    pub simplify_transforms: bool,
    /// Nesting limit for both lowering and rendering.
    pub max_depth: usize,
    pub title: String,
    /// Rules appended verbatim to the generated stylesheet.
    pub extra_css: Option<String>,
    /// Log the lowered IR as JSON at `debug` level.
    pub debug_ir: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            output: OutputFormat::default(),
            shared_class_threshold: 2,
            utility_classes: true,
            simplify_transforms: true,
            max_depth: DEFAULT_MAX_DEPTH,
            title: "Untitled".to_string(),
            extra_css: None,
            debug_ir: false,
        }
    }
}

impl RenderConfig {
    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            mode: self.mode,
            format: self.output,
            shared_class_threshold: self.shared_class_threshold,
            utility_classes: self.utility_classes,
            simplify_transforms: self.simplify_transforms,
            max_depth: self.max_depth,
            title: self.title.clone(),
            extra_css: self.extra_css.clone(),
        }
    }

    pub(crate) fn lower_options(&self) -> LowerOptions {
        LowerOptions { max_depth: self.max_depth }
    }
}
