use crate::options::{OutputFormat, RenderMode, RenderOptions};
use crate::renderer::HtmlRenderer;
use crate::RenderError;
use scenemark_ir::{
    CenterStrategy, DocumentIr, LayoutInfo, NodeContent, NodeKind, Origin, RenderNodeIR,
    StyleInfo, Transform2x2, WrapperInfo,
};
use scenemark_layout::LayoutError;
use scenemark_style::{Dimension, Display, FlexDirection, Position};
use scenemark_traits::{FontRequest, GoogleFontsCollector, PrefixAssetProvider};
use scenemark_types::{NodeId, Rect};
use std::sync::Arc;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn node(id: &str, kind: NodeKind, left: f64, top: f64, w: f64, h: f64, css: &str) -> RenderNodeIR {
    RenderNodeIR {
        id: NodeId::new(id),
        name: None,
        kind,
        layout: LayoutInfo {
            left,
            top,
            width: Dimension::Px(w),
            height: Dimension::Px(h),
            ..Default::default()
        },
        style: StyleInfo { box_css: css.to_string(), ..Default::default() },
        content: NodeContent::Empty,
        visible: true,
        is_mask: false,
        breaks_mask: false,
    }
}

fn frame(id: &str, w: f64, h: f64, children: Vec<RenderNodeIR>) -> RenderNodeIR {
    let mut frame = node(id, NodeKind::Frame, 0.0, 0.0, w, h, "");
    frame.content = NodeContent::Children { nodes: children };
    frame
}

fn svg_node(id: &str, file: &str, markup: Option<&str>) -> RenderNodeIR {
    let mut svg = node(id, NodeKind::Svg, 0.0, 0.0, 24.0, 24.0, "");
    svg.content = NodeContent::Svg { file: file.to_string(), markup: markup.map(str::to_string) };
    svg
}

fn rotated(id: &str, degrees: f64, css: &str) -> RenderNodeIR {
    let (s, c) = degrees.to_radians().sin_cos();
    let mut rotated = node(id, NodeKind::Shape, 10.0, 10.0, 120.0, 120.0, css);
    rotated.layout.transform_2x2 = Transform2x2 { a: c, b: s, c: -s, d: c };
    rotated.layout.origin = Origin::CENTER;
    rotated.layout.wrapper = Some(WrapperInfo {
        content_width: 100.0,
        content_height: 60.0,
        center_strategy: Some(CenterStrategy::Translate),
    });
    rotated
}

fn document(children: Vec<RenderNodeIR>) -> DocumentIr {
    DocumentIr { bounds: Rect::new(0.0, 0.0, 400.0, 300.0), children }
}

fn options(mode: RenderMode, format: OutputFormat) -> RenderOptions {
    RenderOptions { mode, format, ..Default::default() }
}

fn render_fragment(children: Vec<RenderNodeIR>) -> crate::RenderOutput {
    HtmlRenderer::new(options(RenderMode::Content, OutputFormat::Fragment))
        .render(&document(children), &[])
        .unwrap()
}

const ICON: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M0 0h24v24H0z" fill="#123"/></svg>"##;

#[test]
fn test_document_output_wraps_markup_and_styles() {
    init_logger();
    let output = HtmlRenderer::new(RenderOptions { title: "Landing".into(), ..Default::default() })
        .render(&document(vec![node("1:1", NodeKind::Shape, 0.0, 0.0, 8.0, 8.0, "background:#f00;")]), &[])
        .unwrap();
    assert!(output.html.starts_with("<!DOCTYPE html>"));
    assert!(output.html.contains("<title>Landing</title>"));
    assert!(output.html.contains(&output.css_text));
    assert!(output.css_text.contains(".scene{position:relative;overflow:hidden}"));
    assert!(output.html.contains(r#"<div class="scene w-[400px] h-75">"#));
}

#[test]
fn test_fragment_is_root_element_only() {
    init_logger();
    let output = render_fragment(vec![node("1:1", NodeKind::Shape, 0.0, 0.0, 8.0, 8.0, "")]);
    assert!(output.html.starts_with(r#"<div class="scene"#));
    assert!(output.html.ends_with("</div>"));
    assert!(!output.html.contains("<style>"));
}

#[test]
fn test_identical_residuals_share_one_class() {
    init_logger();
    let paint = "background:#fff;border-radius:4px;";
    let output = render_fragment(vec![
        node("1:1", NodeKind::Shape, 10.0, 10.0, 40.0, 40.0, paint),
        node("1:2", NodeKind::Shape, 10.0, 10.0, 40.0, 40.0, paint),
        node("1:3", NodeKind::Shape, 10.0, 10.0, 40.0, 40.0, paint),
        node("1:4", NodeKind::Shape, 10.0, 10.0, 40.0, 40.0, "background:#000;"),
    ]);
    assert_eq!(output.html.matches("sc-1").count(), 3);
    assert!(!output.html.contains("sc-2"));
    assert_eq!(output.css_text.matches(".sc-1{left:10px;top:10px;background:#fff;}").count(), 1);
    assert!(output.html.contains(r#"style="left:10px;top:10px;background:#000;""#));
    assert!(output.html.contains("rounded"));
}

#[test]
fn test_utility_classes_can_be_disabled() {
    init_logger();
    let output = HtmlRenderer::new(RenderOptions {
        format: OutputFormat::Fragment,
        utility_classes: false,
        ..Default::default()
    })
    .render(&document(vec![node("1:1", NodeKind::Shape, 5.0, 6.0, 8.0, 8.0, "")]), &[])
    .unwrap();
    assert!(output
        .html
        .contains(r#"style="position:absolute;left:5px;top:6px;width:8px;height:8px;z-index:1;""#));
}

#[test]
fn test_semantic_class_from_layer_name() {
    init_logger();
    let mut titled = node("1:1", NodeKind::Shape, 0.0, 0.0, 8.0, 8.0, "");
    titled.name = Some("Hero Card".into());
    let mut generic = node("1:2", NodeKind::Shape, 0.0, 0.0, 8.0, 8.0, "");
    generic.name = Some("Rectangle 4".into());
    let output = render_fragment(vec![titled, generic]);
    assert!(output.html.contains(r#"class="hero-card absolute"#));
    assert!(!output.html.contains("rectangle"));
}

#[test]
fn test_svg_nodes_emit_img_and_register_asset_once() {
    init_logger();
    let output = render_fragment(vec![
        svg_node("2:1", "2-1.svg", Some(ICON)),
        svg_node("2:2", "2-1.svg", Some(ICON)),
    ]);
    assert_eq!(output.html.matches(r#"<img src="svgs/2-1.svg" alt="">"#).count(), 2);
    assert_eq!(output.assets.len(), 1);
    assert_eq!(output.assets[0].path(), "svgs/2-1.svg");
    assert_eq!(output.assets[0].markup, ICON);
}

#[test]
fn test_missing_or_invalid_svg_degrades_to_placeholder() {
    init_logger();
    let output = render_fragment(vec![
        svg_node("2:1", "2-1.svg", None),
        svg_node("2:2", "2-2.svg", Some("<div>not svg</div>")),
    ]);
    assert!(output.html.contains(r#"data-missing-svg="2-1.svg""#));
    assert!(output.html.contains(r#"data-missing-svg="2-2.svg""#));
    assert!(!output.html.contains("<img"));
    assert!(output.assets.is_empty());
}

#[test]
fn test_text_body_is_emitted() {
    init_logger();
    let mut text = node("3:1", NodeKind::Text, 0.0, 0.0, 100.0, 20.0, "color:#111;");
    text.content = NodeContent::Text { html: "Fish &amp; chips".into() };
    let output = render_fragment(vec![text]);
    assert!(output.html.contains(">Fish &amp; chips</div>"));
}

#[test]
fn test_rotated_node_moves_shadow_to_wrapper() {
    init_logger();
    let output = render_fragment(vec![rotated(
        "4:1",
        30.0,
        "background:#fff;box-shadow:4px 4px 8px rgba(0,0,0,.5);",
    )]);
    assert!(output.html.contains("filter:drop-shadow(4px 4px 8px rgba(0,0,0,.5))"));
    assert!(!output.html.contains("box-shadow"));
    assert!(output.html.contains("rotate(30deg)"));
    assert!(!output.html.contains("matrix("));
}

#[test]
fn test_unrotated_shadow_stays_on_box() {
    init_logger();
    let output = render_fragment(vec![node(
        "4:2",
        NodeKind::Shape,
        0.0,
        0.0,
        10.0,
        10.0,
        "box-shadow:4px 4px 8px rgba(0,0,0,.5);",
    )]);
    assert!(output.html.contains("box-shadow:4px 4px 8px rgba(0,0,0,.5)"));
    assert!(!output.html.contains("filter"));
}

#[test]
fn test_wrapper_without_center_strategy_fails() {
    init_logger();
    let mut broken = rotated("4:3", 30.0, "");
    if let Some(wrapper) = broken.layout.wrapper.as_mut() {
        wrapper.center_strategy = None;
    }
    let err = HtmlRenderer::new(RenderOptions::default())
        .render(&document(vec![broken]), &[])
        .unwrap_err();
    assert_eq!(
        err,
        RenderError::Layout(LayoutError::MissingCenterStrategy { node_id: "4:3".into() })
    );
}

#[test]
fn test_masked_segment_clips_members() {
    init_logger();
    let mut mask = node("5:1", NodeKind::Shape, 10.0, 20.0, 100.0, 50.0, "background:#000;border-radius:8px;");
    mask.is_mask = true;
    let member = node("5:2", NodeKind::Shape, 0.0, 0.0, 200.0, 100.0, "background:#f00;");
    let mut hidden = node("5:3", NodeKind::Shape, 0.0, 0.0, 5.0, 5.0, "background:#0f0;");
    hidden.visible = false;
    let mut after = node("5:4", NodeKind::Shape, 0.0, 0.0, 5.0, 5.0, "background:#00f;");
    after.breaks_mask = true;

    let output = render_fragment(vec![frame("5:0", 200.0, 100.0, vec![mask, member, hidden, after])]);
    assert!(output.html.contains("clip-path:inset(20px 90px 30px 10px round 8px)"));
    assert!(!output.html.contains("background:#000"));
    assert!(!output.html.contains("background:#0f0"));
    assert!(output.html.contains("background:#f00"));
    assert!(output.html.contains("background:#00f"));
}

#[test]
fn test_vector_mask_registers_asset() {
    init_logger();
    let mut mask = svg_node("6:1", "6-1.svg", Some(ICON));
    mask.is_mask = true;
    let member = node("6:2", NodeKind::Shape, 0.0, 0.0, 24.0, 24.0, "background:#f00;");
    let output = render_fragment(vec![mask, member]);
    assert!(output.html.contains("mask:url(svgs/6-1.svg) no-repeat 0 0 / 24px 24px"));
    assert_eq!(output.assets.len(), 1);
    assert!(!output.html.contains("<img"));
}

#[test]
fn test_negative_spacing_overlaps_flow_items() {
    init_logger();
    let mut row = frame("7:0", 200.0, 40.0, vec![]);
    row.layout.display = Display::Flex;
    row.layout.flex_direction = Some(FlexDirection::Row);
    row.layout.item_spacing = Some(-8.0);
    let mut items = Vec::new();
    for i in 1..=3 {
        let mut item = node(&format!("7:{}", i), NodeKind::Shape, 0.0, 0.0, 40.0, 40.0, "");
        item.layout.position = Position::Relative;
        items.push(item);
    }
    row.content = NodeContent::Children { nodes: items };

    let output = render_fragment(vec![row]);
    assert_eq!(output.html.matches("-ml-2").count(), 2);
    assert!(output.html.contains("z-[2]"));
    assert!(output.html.contains("z-[3]"));
}

#[test]
fn test_debug_mode_emits_layer_boxes() {
    init_logger();
    let mut text = node("3:1", NodeKind::Text, 0.0, 0.0, 100.0, 20.0, "color:#111;font-size:14px;");
    text.content = NodeContent::Text { html: "Hi".into() };
    let output = HtmlRenderer::new(options(RenderMode::Debug, OutputFormat::Fragment))
        .render(
            &document(vec![
                node("1:1", NodeKind::Shape, 0.0, 0.0, 8.0, 8.0, "background:#f00;"),
                text,
                svg_node("2:1", "2-1.svg", Some(ICON)),
            ]),
            &[],
        )
        .unwrap();
    assert!(output.html.starts_with(r#"<div class="debug-root""#));
    assert!(output.html.contains(r#"class="debug-box" data-layer-id="1:1""#));
    assert!(output.html.contains(r#"class="debug-box debug-text" data-layer-id="3:1""#));
    assert!(output.html.contains("font-size:14px"));
    assert!(!output.html.contains("background"));
    assert!(!output.html.contains("color:#111"));
    assert!(output.html.contains(r#"class="debug-svg""#));
    assert!(!output.html.contains("#123"));
    assert!(output.assets.is_empty());
    assert!(output.css_text.contains(".debug-box{"));
}

#[test]
fn test_debug_wrapper_marks_slot_and_keeps_matrix() {
    init_logger();
    let output = HtmlRenderer::new(options(RenderMode::Debug, OutputFormat::Fragment))
        .render(&document(vec![rotated("4:1", 30.0, "")]), &[])
        .unwrap();
    assert!(output.html.contains(r#"<div class="debug-slot" style="position:absolute;left:10px;top:10px;width:120px;height:120px;z-index:1;"><div class="debug-box" data-layer-id="4:1""#));
    assert!(output.html.contains("matrix("));
}

#[test]
fn test_debug_mask_is_rendered_and_tagged() {
    init_logger();
    let mut mask = node("5:1", NodeKind::Shape, 0.0, 0.0, 10.0, 10.0, "");
    mask.is_mask = true;
    let member = node("5:2", NodeKind::Shape, 0.0, 0.0, 10.0, 10.0, "");
    let output = HtmlRenderer::new(options(RenderMode::Debug, OutputFormat::Fragment))
        .render(&document(vec![mask, member]), &[])
        .unwrap();
    assert!(output.html.contains(r#"class="debug-box debug-mask" data-layer-id="5:1""#));
    assert!(output.html.contains(r#"data-layer-id="5:2""#));
}

#[test]
fn test_depth_limit_is_enforced() {
    init_logger();
    let leaf = node("8:3", NodeKind::Shape, 0.0, 0.0, 1.0, 1.0, "");
    let tree = frame("8:1", 10.0, 10.0, vec![frame("8:2", 10.0, 10.0, vec![leaf])]);
    let renderer = HtmlRenderer::new(RenderOptions { max_depth: 2, ..Default::default() });
    let err = renderer.render(&document(vec![tree.clone()]), &[]).unwrap_err();
    assert_eq!(err, RenderError::TooDeep { node_id: "8:3".into(), limit: 2 });

    let renderer = HtmlRenderer::new(RenderOptions { max_depth: 3, ..Default::default() });
    assert!(renderer.render(&document(vec![tree]), &[]).is_ok());
}

#[test]
fn test_asset_provider_and_font_links() {
    init_logger();
    let renderer = HtmlRenderer::new(RenderOptions::default())
        .with_asset_provider(Arc::new(PrefixAssetProvider::new("https://cdn.test")))
        .with_font_collector(Arc::new(GoogleFontsCollector::new()));
    let fonts = vec![FontRequest { family: "Inter".into(), weight: 400, italic: false }];
    let output = renderer
        .render(&document(vec![svg_node("2:1", "2-1.svg", Some(ICON))]), &fonts)
        .unwrap();
    assert!(output.html.contains(r#"<img src="https://cdn.test/svgs/2-1.svg" alt="">"#));
    assert_eq!(output.head_links.len(), 3);
    assert!(output.html.contains("fonts.googleapis.com/css2?family=Inter"));
    assert_eq!(output.fonts, fonts);
}

#[test]
fn test_extra_css_is_appended() {
    init_logger();
    let output = HtmlRenderer::new(RenderOptions {
        extra_css: Some(".scene{outline:1px solid red}".into()),
        ..Default::default()
    })
    .render(&document(vec![]), &[])
    .unwrap();
    assert!(output.css_text.ends_with(".scene{outline:1px solid red}"));
}

#[test]
fn test_render_is_deterministic() {
    init_logger();
    let build = || {
        vec![
            node("1:1", NodeKind::Shape, 3.0, 4.0, 10.0, 10.0, "background:#fff;"),
            rotated("1:2", 45.0, "background:#fff;"),
        ]
    };
    assert_eq!(render_fragment(build()), render_fragment(build()));
}

#[test]
fn test_deserialized_ir_cannot_register_escaping_asset_names() {
    init_logger();
    let ir = serde_json::to_string(&document(vec![svg_node("2:9", "../../x.svg", Some(ICON))])).unwrap();
    let parsed: DocumentIr = serde_json::from_str(&ir).unwrap();
    let output = HtmlRenderer::new(options(RenderMode::Content, OutputFormat::Fragment))
        .render(&parsed, &[])
        .unwrap();
    assert!(output.assets.is_empty());
    assert!(output.html.contains(r#"data-missing-svg="../../x.svg""#));
    assert!(!output.html.contains("<img"));
}

fn style_with<'a>(html: &'a str, needle: &str) -> Option<&'a str> {
    html.split("style=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .find(|style| style.contains(needle))
}

#[test]
fn test_mask_in_horizontal_frame_keeps_its_flow_slot() {
    init_logger();
    let mut row = frame("8:0", 200.0, 50.0, vec![]);
    row.layout.left = 10.0;
    row.layout.top = 10.0;
    row.layout.display = Display::Flex;
    row.layout.flex_direction = Some(FlexDirection::Row);
    let mut items = Vec::new();
    for (id, css, is_mask) in [
        ("8:1", "background:#f00;", false),
        ("8:2", "background:#000;border-radius:4px;", true),
        ("8:3", "background:#00f;", false),
    ] {
        let mut item = node(id, NodeKind::Shape, 0.0, 0.0, 50.0, 50.0, css);
        item.layout.position = Position::Relative;
        item.is_mask = is_mask;
        items.push(item);
    }
    row.content = NodeContent::Children { nodes: items };

    let output = HtmlRenderer::new(RenderOptions {
        format: OutputFormat::Fragment,
        utility_classes: false,
        ..Default::default()
    })
    .render(&document(vec![row]), &[])
    .unwrap();

    let segment = style_with(&output.html, "clip-path").unwrap();
    assert!(segment.contains("clip-path:inset(0 round 4px)"));
    assert!(segment.contains("position:relative"));
    assert!(segment.contains("width:50px"));
    assert!(segment.contains("display:flex"));
    assert!(segment.contains("flex-direction:row"));
    assert!(!segment.contains("width:100%"));
    assert!(!output.html.contains("position:absolute;left:0;top:0"));
    let red = output.html.find("background:#f00").unwrap();
    let blue = output.html.find("background:#00f").unwrap();
    let clip = output.html.find("clip-path").unwrap();
    assert!(red < clip && clip < blue, "segment sits between the red and blue slots");
}

#[test]
fn test_debug_mask_in_flow_does_not_take_a_slot() {
    init_logger();
    let mut row = frame("9:0", 200.0, 50.0, vec![]);
    row.layout.left = 10.0;
    row.layout.top = 10.0;
    row.layout.display = Display::Flex;
    let mut mask = node("9:1", NodeKind::Shape, 0.0, 0.0, 50.0, 50.0, "");
    mask.layout.position = Position::Relative;
    mask.is_mask = true;
    let mut member = node("9:2", NodeKind::Shape, 0.0, 0.0, 50.0, 50.0, "");
    member.layout.position = Position::Relative;
    row.content = NodeContent::Children { nodes: vec![mask, member] };

    let output = HtmlRenderer::new(RenderOptions {
        mode: RenderMode::Debug,
        format: OutputFormat::Fragment,
        utility_classes: false,
        ..Default::default()
    })
    .render(&document(vec![row]), &[])
    .unwrap();
    let overlay = style_with(&output.html, "position:absolute;left:0;top:0").unwrap();
    assert!(overlay.contains("width:50px"));
    assert!(!overlay.contains("width:100%"));
    assert!(output.html.contains(r#"data-layer-id="9:1""#));
}
