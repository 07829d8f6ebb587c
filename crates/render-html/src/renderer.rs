//! The node renderer: IR tree to element tree to HTML.
use crate::assets::{image_references, rewrite_asset_urls};
use crate::context::BuildContext;
use crate::document::{base_css, join_css, wrap_document};
use crate::element::{Body, Element};
use crate::mask::{cover_css, flow_container_css, mask_clip, vector_mask_css, MaskClip};
use crate::options::{OutputFormat, RenderMode, RenderOptions};
use crate::semantic::semantic_class;
use crate::svg::{silhouette, validate_svg};
use crate::RenderError;
use scenemark_ir::{DocumentIr, LayoutInfo, NodeContent, NodeKind, RenderNodeIR};
use scenemark_layout::{
    compose_box, segment_siblings, Axis, BoxLayout, RenderItem, SegmentParams, SiblingInfo,
};
use scenemark_optimize::SharedClassPool;
use scenemark_style::{normalize_length, Declarations, Dimension, FlexDirection};
use scenemark_traits::{AssetUrlProvider, FontCollector, FontRequest, NoFontCollector};
use scenemark_types::{Point, Size};
use std::sync::Arc;

/// A vector asset referenced as `svgs/<file>` by the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgAsset {
    pub file: String,
    pub markup: String,
}

impl SvgAsset {
    /// Path relative to the output directory.
    pub fn path(&self) -> String {
        format!("svgs/{}", self.file)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// A full page, or the root element alone for fragments.
    pub html: String,
    pub css_text: String,
    pub head_links: Vec<String>,
    pub assets: Vec<SvgAsset>,
    pub fonts: Vec<FontRequest>,
    /// Image files (`<hash>.png`) referenced from `images/`.
    pub images: Vec<String>,
}

/// Renders IR documents to HTML. Immutable; each [`render`](Self::render)
/// call builds its own caches.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    options: RenderOptions,
    asset_provider: Option<Arc<dyn AssetUrlProvider>>,
    font_collector: Arc<dyn FontCollector>,
}

impl HtmlRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, asset_provider: None, font_collector: Arc::new(NoFontCollector) }
    }

    pub fn with_asset_provider(mut self, provider: Arc<dyn AssetUrlProvider>) -> Self {
        self.asset_provider = Some(provider);
        self
    }

    pub fn with_font_collector(mut self, collector: Arc<dyn FontCollector>) -> Self {
        self.font_collector = collector;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render(
        &self,
        document: &DocumentIr,
        fonts: &[FontRequest],
    ) -> Result<RenderOutput, RenderError> {
        let mut ctx = BuildContext::new(&self.options);
        let root = build_root(&mut ctx, document)?;

        let pool = match self.options.mode {
            RenderMode::Debug => SharedClassPool::default(),
            RenderMode::Content => {
                let mut residuals = Vec::new();
                root.collect_residuals(&mut residuals);
                SharedClassPool::from_residuals(residuals, self.options.shared_class_threshold)
            }
        };

        let mut body = String::new();
        root.write_html(&pool, &mut body);
        let utility_css = ctx.utility_stylesheet();
        let assets = ctx.into_assets();
        let mut css_text = join_css([
            base_css(self.options.mode),
            utility_css.as_str(),
            pool.stylesheet().as_str(),
            self.options.extra_css.as_deref().unwrap_or_default(),
        ]);
        let images = image_references([body.as_str(), css_text.as_str()]);
        if let Some(provider) = &self.asset_provider {
            body = rewrite_asset_urls(&body, provider.as_ref(), &assets);
            css_text = rewrite_asset_urls(&css_text, provider.as_ref(), &assets);
        }
        let head_links = self.font_collector.head_links(fonts);

        log::info!(
            "Rendered {} nodes in {:?} mode: {} shared classes, {} svg assets",
            document.node_count(),
            self.options.mode,
            pool.len(),
            assets.len()
        );

        let html = match self.options.format {
            OutputFormat::Document => {
                wrap_document(&self.options.title, &head_links, &css_text, &body)
            }
            OutputFormat::Fragment => body,
        };
        Ok(RenderOutput { html, css_text, head_links, assets, fonts: fonts.to_vec(), images })
    }
}

/// The container whose children are being rendered.
struct Parent<'a> {
    id: &'a str,
    layout: &'a LayoutInfo,
    /// Size of the content box, when it is fixed.
    size: Option<Size>,
}

fn build_root(ctx: &mut BuildContext<'_>, document: &DocumentIr) -> Result<Element, RenderError> {
    let size = document.bounds.size();
    let mut css = Declarations::new();
    css.set("width", normalize_length(size.width));
    css.set("height", normalize_length(size.height));

    let class = if ctx.is_debug() { "debug-root" } else { "scene" };
    let mut root = Element::div().with_class(class);
    apply_css(ctx, &mut root, css);

    let root_layout = LayoutInfo::default();
    let parent = Parent { id: "root", layout: &root_layout, size: Some(size) };
    root.body = Body::Children(render_children(ctx, &parent, &document.children, 0)?);
    Ok(root)
}

fn apply_css(ctx: &mut BuildContext<'_>, element: &mut Element, css: Declarations) {
    let (classes, residual) = ctx.finish_css(css);
    element.classes.extend(classes);
    element.residual = residual;
}

fn render_children(
    ctx: &mut BuildContext<'_>,
    parent: &Parent<'_>,
    children: &[RenderNodeIR],
    depth: usize,
) -> Result<Vec<Element>, RenderError> {
    let auto_layout = parent.layout.is_auto_layout();
    let siblings: Vec<SiblingInfo> = children
        .iter()
        .map(|child| SiblingInfo {
            is_mask: child.is_mask,
            visible: child.visible,
            in_flow: auto_layout && !child.layout.is_absolute(),
            breaks_mask: child.breaks_mask,
        })
        .collect();
    let params = SegmentParams {
        parent_is_auto_layout: auto_layout,
        item_spacing: parent.layout.item_spacing.unwrap_or(0.0),
        item_reverse_z_index: parent.layout.item_reverse_z_index,
        axis: match parent.layout.flex_direction {
            Some(FlexDirection::Column | FlexDirection::ColumnReverse) => Axis::Vertical,
            _ => Axis::Horizontal,
        },
    };

    let child_at = |index: usize| {
        children.get(index).ok_or_else(|| RenderError::MissingNode {
            parent: parent.id.to_string(),
            index,
        })
    };

    let mut elements = Vec::with_capacity(children.len());
    for item in segment_siblings(&siblings, &params) {
        match item {
            RenderItem::Node { index, item_css } => {
                elements.push(render_node(ctx, child_at(index)?, &item_css, depth)?);
            }
            RenderItem::Masked { mask_index, node_indices, container_css } => {
                let mask = child_at(mask_index)?;
                let members = node_indices
                    .into_iter()
                    .map(child_at)
                    .collect::<Result<Vec<_>, _>>()?;
                elements.push(render_masked(ctx, parent, mask, &members, container_css, depth)?);
            }
        }
    }
    Ok(elements)
}

fn render_masked(
    ctx: &mut BuildContext<'_>,
    parent: &Parent<'_>,
    mask: &RenderNodeIR,
    members: &[&RenderNodeIR],
    container_css: Declarations,
    depth: usize,
) -> Result<Element, RenderError> {
    let in_flow = parent.layout.is_auto_layout() && !mask.layout.is_absolute();
    let (mut css, origin, area) = if in_flow {
        match flow_container_css(mask, parent.layout) {
            Some((css, size)) => (css, Some(Point::default()), Some(size)),
            None => {
                log::debug!(
                    "Mask '{}' in an auto-layout parent has an auto size; segment is not clipped",
                    mask.id
                );
                (Declarations::from_iter([("display", "contents")]), None, None)
            }
        }
    } else {
        let origin = Point { x: mask.layout.left, y: mask.layout.top };
        (cover_css(), Some(origin), parent.size)
    };
    css.extend(&container_css);
    let mut container = Element::div();

    if ctx.is_debug() {
        // The outline of an in-flow mask must not take a flex slot of its own.
        let overlay = if in_flow {
            Declarations::from_iter([("position", "absolute"), ("left", "0"), ("top", "0")])
        } else {
            Declarations::new()
        };
        container.push_child(render_node(ctx, mask, &overlay, depth)?);
    } else if let Some(origin) = origin {
        match mask_clip(mask, origin, area) {
            MaskClip::Vector { file, markup } => match validate_svg(&file, &markup) {
                Ok(()) => {
                    ctx.register_svg(&file, &markup);
                    css.extend(&vector_mask_css(mask, &file, origin));
                }
                Err(e) => log::warn!("{}; segment of mask '{}' is not clipped", e, mask.id),
            },
            MaskClip::Css(clip) => css.extend(&clip),
            MaskClip::None => {}
        }
    }

    for member in members {
        container.push_child(render_node(ctx, member, &Declarations::new(), depth)?);
    }
    apply_css(ctx, &mut container, css);
    Ok(container)
}

fn content_size(layout: &LayoutInfo) -> Option<Size> {
    if let Some(wrapper) = &layout.wrapper {
        return Some(Size { width: wrapper.content_width, height: wrapper.content_height });
    }
    match (layout.width, layout.height) {
        (Dimension::Px(width), Dimension::Px(height)) => Some(Size { width, height }),
        _ => None,
    }
}

fn render_node(
    ctx: &mut BuildContext<'_>,
    node: &RenderNodeIR,
    item_css: &Declarations,
    depth: usize,
) -> Result<Element, RenderError> {
    let depth = depth + 1;
    if depth > ctx.options.max_depth {
        return Err(RenderError::TooDeep {
            node_id: node.id.to_string(),
            limit: ctx.options.max_depth,
        });
    }

    let paint = Declarations::parse(&node.style.box_css);
    let mut boxed = compose_box(&node.id, &node.layout, &paint)?;
    boxed.slot_mut().extend(item_css);

    let mut content = Element::div();
    if ctx.is_debug() {
        content.classes.push("debug-box".to_string());
        if node.is_mask {
            content.classes.push("debug-mask".to_string());
        }
        content.attrs.push(("data-layer-id", node.id.to_string()));
    } else if let Some(class) = semantic_class(node.name.as_deref()) {
        content.classes.push(class);
    }

    match node.kind {
        NodeKind::Frame => {
            let parent = Parent {
                id: node.id.as_str(),
                layout: &node.layout,
                size: content_size(&node.layout),
            };
            let children = render_children(ctx, &parent, node.children(), depth)?;
            if !children.is_empty() {
                content.body = Body::Children(children);
            }
        }
        NodeKind::Text => {
            if let NodeContent::Text { html } = &node.content {
                content.body = Body::Html(html.clone());
            }
            if ctx.is_debug() {
                content.classes.push("debug-text".to_string());
            }
        }
        NodeKind::Svg => render_svg(ctx, node, &mut content),
        NodeKind::Shape => {}
    }

    match boxed {
        BoxLayout::Single(css) => {
            apply_css(ctx, &mut content, css);
            Ok(content)
        }
        BoxLayout::Wrapper { outer, inner } => {
            apply_css(ctx, &mut content, inner);
            let mut slot = Element::div();
            if ctx.is_debug() {
                slot.classes.push("debug-slot".to_string());
            }
            apply_css(ctx, &mut slot, outer);
            slot.push_child(content);
            Ok(slot)
        }
    }
}

fn render_svg(ctx: &mut BuildContext<'_>, node: &RenderNodeIR, content: &mut Element) {
    let (file, markup) = match &node.content {
        NodeContent::Svg { file, markup: Some(markup) } => (file, markup),
        NodeContent::Svg { file, markup: None } => {
            log::warn!("Vector '{}' has no markup; rendering a placeholder", file);
            content.attrs.push(("data-missing-svg", file.clone()));
            return;
        }
        _ => {
            log::warn!("Vector node '{}' carries no svg content", node.id);
            return;
        }
    };

    if ctx.is_debug() {
        match silhouette(file, markup) {
            Ok(svg) => content.body = Body::Html(svg),
            Err(e) => {
                log::warn!("{}; rendering a placeholder", e);
                content.attrs.push(("data-missing-svg", file.clone()));
            }
        }
        return;
    }

    match validate_svg(file, markup) {
        Ok(()) => {
            ctx.register_svg(file, markup);
            content.push_child(
                Element::new("img").with_attr("src", format!("svgs/{}", file)).with_attr("alt", ""),
            );
        }
        Err(e) => {
            log::warn!("{}; rendering a placeholder", e);
            content.attrs.push(("data-missing-svg", file.clone()));
        }
    }
}
