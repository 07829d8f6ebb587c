//! State owned by a single render call.
use crate::options::{RenderMode, RenderOptions};
use crate::renderer::SvgAsset;
use scenemark_optimize::{simplify_transform, UtilityExtractor};
use scenemark_style::Declarations;
use std::collections::HashSet;

/// Properties that survive into the debug overlay: box geometry and the
/// text metrics that size hugging text boxes.
const DEBUG_ALLOW_LIST: &[&str] = &[
    "position", "left", "top", "right", "bottom", "inset", "width", "height", "min-width",
    "min-height", "margin", "margin-left", "margin-top", "margin-right", "margin-bottom",
    "display", "flex-direction", "flex-wrap", "gap", "row-gap", "column-gap",
    "justify-content", "align-items", "align-self", "flex-grow", "flex-shrink", "flex-basis",
    "padding", "box-sizing", "transform", "transform-origin", "z-index", "font-family",
    "font-size", "font-weight", "font-style", "line-height", "letter-spacing", "white-space",
    "text-align", "text-transform",
];

pub(crate) fn is_debug_property(prop: &str) -> bool {
    DEBUG_ALLOW_LIST.contains(&prop)
}

pub(crate) struct BuildContext<'a> {
    pub options: &'a RenderOptions,
    utilities: UtilityExtractor,
    assets: Vec<SvgAsset>,
    asset_files: HashSet<String>,
}

impl<'a> BuildContext<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            utilities: UtilityExtractor::new(),
            assets: Vec::new(),
            asset_files: HashSet::new(),
        }
    }

    pub fn is_debug(&self) -> bool {
        self.options.mode == RenderMode::Debug
    }

    /// Turns an element's final declarations into utility classes and a
    /// residual inline block, according to the render mode.
    pub fn finish_css(&mut self, mut css: Declarations) -> (Vec<String>, String) {
        if self.is_debug() {
            css.retain(|prop, _| is_debug_property(prop));
            return (Vec::new(), css.to_css());
        }
        if self.options.simplify_transforms {
            simplify_transform(&mut css);
        }
        let text = css.to_css();
        if !self.options.utility_classes {
            return (Vec::new(), text);
        }
        let extracted = self.utilities.extract(&text);
        (extracted.class_names.clone(), extracted.remaining_css.clone())
    }

    /// Records an SVG asset once per file name.
    pub fn register_svg(&mut self, file: &str, markup: &str) {
        if self.asset_files.insert(file.to_string()) {
            self.assets.push(SvgAsset { file: file.to_string(), markup: markup.to_string() });
        }
    }

    pub fn utility_stylesheet(&self) -> String {
        self.utilities.stylesheet()
    }

    pub fn into_assets(self) -> Vec<SvgAsset> {
        let (hits, misses) = self.utilities.cache_stats();
        log::debug!(
            "Utility extraction: {} classes used, {} cache hits, {} misses",
            self.utilities.used_count(),
            hits,
            misses
        );
        self.assets
    }
}
