//! Per-renderer settings.

/// Which backend renders the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Paint, text, and vector assets with optimized CSS.
    #[default]
    Content,
    /// Layout boxes only, tagged with layer ids for hit testing.
    Debug,
}

/// How the markup is packaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// A standalone page with the CSS inlined in `<head>`.
    #[default]
    Document,
    /// The root element only; CSS and head links are returned separately.
    Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub format: OutputFormat,
    /// Minimum number of identical residual blocks before they are promoted
    /// to a shared class.
    pub shared_class_threshold: usize,
    pub utility_classes: bool,
    pub simplify_transforms: bool,
    pub max_depth: usize,
    pub title: String,
    /// Appended verbatim after the generated rules.
    pub extra_css: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: RenderMode::Content,
            format: OutputFormat::Document,
            shared_class_threshold: 2,
            utility_classes: true,
            simplify_transforms: true,
            max_depth: 256,
            title: "Untitled".to_string(),
            extra_css: None,
        }
    }
}
