//! Text nodes: segment styling, alignment, and auto-resize behavior.
use super::paint::top_solid;
use crate::model::{FontName, Metric, MetricUnit, TextData, TextSegment};
use quick_xml::escape::escape;
use scenemark_ir::{LayoutInfo, NodeContent};
use scenemark_style::{
    css_color, format_number, format_percent, normalize_length, Declarations, Dimension, Display,
    FlexDirection, FontStyle, FontWeight, JustifyContent,
};
use scenemark_traits::FontRequest;
use std::collections::BTreeSet;

pub(crate) fn lower_text(
    text: &TextData,
    layout: &mut LayoutInfo,
    css: &mut Declarations,
    fonts: &mut BTreeSet<FontRequest>,
) -> NodeContent {
    apply_box_behavior(text, layout, css);

    let implicit;
    let segments: &[TextSegment] = if text.segments.is_empty() {
        implicit = [TextSegment {
            characters: text.characters.clone(),
            font_name: None,
            font_size: None,
            font_weight: None,
            fills: Vec::new(),
            line_height: None,
            letter_spacing: None,
            text_decoration: None,
            text_case: None,
        }];
        &implicit
    } else {
        &text.segments
    };

    if let [only] = segments {
        css.extend(&segment_css(only, fonts));
        return NodeContent::Text { html: escape(only.characters.as_str()).into_owned() };
    }

    let html = segments
        .iter()
        .map(|segment| {
            let style = segment_css(segment, fonts).to_css();
            let body = escape(segment.characters.as_str());
            if style.is_empty() {
                body.into_owned()
            } else {
                format!(r#"<span style="{}">{}</span>"#, escape(style.as_str()), body)
            }
        })
        .collect::<String>();
    NodeContent::Text { html }
}

fn apply_box_behavior(text: &TextData, layout: &mut LayoutInfo, css: &mut Declarations) {
    let auto_resize = text.text_auto_resize.as_deref().unwrap_or("NONE");
    let wrapped = layout.wrapper.is_some();
    match auto_resize {
        "WIDTH_AND_HEIGHT" => {
            css.set("white-space", "pre");
            if !wrapped {
                layout.width = Dimension::Auto;
                layout.height = Dimension::Auto;
            }
        }
        "HEIGHT" => {
            css.set("white-space", "pre-wrap");
            if !wrapped {
                layout.height = Dimension::Auto;
            }
        }
        "TRUNCATE" => {
            css.set("white-space", "nowrap");
            css.set("overflow", "hidden");
            css.set("text-overflow", "ellipsis");
        }
        _ => css.set("white-space", "pre-wrap"),
    }

    match text.text_align_horizontal.as_deref() {
        Some("CENTER") => css.set("text-align", "center"),
        Some("RIGHT") => css.set("text-align", "right"),
        Some("JUSTIFIED") => css.set("text-align", "justify"),
        _ => {}
    }

    let justify = match text.text_align_vertical.as_deref() {
        Some("CENTER") => Some(JustifyContent::Center),
        Some("BOTTOM") => Some(JustifyContent::FlexEnd),
        _ => None,
    };
    if let Some(justify) = justify.filter(|_| !layout.height.is_auto()) {
        layout.display = Display::Flex;
        layout.flex_direction = Some(FlexDirection::Column);
        layout.justify_content = Some(justify);
    }
}

fn font_weight(segment: &TextSegment, font: &FontName) -> FontWeight {
    if let Some(weight) = segment.font_weight {
        return FontWeight(weight);
    }
    FontWeight::from_style_name(&font.style).unwrap_or_else(|| {
        log::debug!("Unrecognized font style '{}'; using weight 400", font.style);
        FontWeight::REGULAR
    })
}

fn segment_css(segment: &TextSegment, fonts: &mut BTreeSet<FontRequest>) -> Declarations {
    let mut css = Declarations::new();
    if let Some(font) = &segment.font_name {
        let weight = font_weight(segment, font);
        let style = FontStyle::from_style_name(&font.style);
        css.set("font-family", format!("'{}'", font.family.replace('\'', "\\'")));
        css.set("font-weight", weight.0.to_string());
        if style == FontStyle::Italic {
            css.set("font-style", style.as_css());
        }
        fonts.insert(FontRequest::new(font.family.clone(), weight, style));
    } else if let Some(weight) = segment.font_weight {
        css.set("font-weight", weight.to_string());
    }
    if let Some(size) = segment.font_size {
        css.set("font-size", normalize_length(size));
    }
    if let Some(line_height) = segment.line_height.as_ref().and_then(line_height) {
        css.set("line-height", line_height);
    }
    if let Some(spacing) = segment.letter_spacing.as_ref().and_then(letter_spacing) {
        css.set("letter-spacing", spacing);
    }
    match segment.text_decoration.as_deref() {
        Some("UNDERLINE") => css.set("text-decoration", "underline"),
        Some("STRIKETHROUGH") => css.set("text-decoration", "line-through"),
        _ => {}
    }
    match segment.text_case.as_deref() {
        Some("UPPER") => css.set("text-transform", "uppercase"),
        Some("LOWER") => css.set("text-transform", "lowercase"),
        Some("TITLE") => css.set("text-transform", "capitalize"),
        _ => {}
    }
    let fills: Vec<_> = segment.fills.iter().filter(|p| p.visible).collect();
    if let Some(color) = top_solid(&fills) {
        css.set("color", css_color(&color));
    }
    css
}

fn line_height(metric: &Metric) -> Option<String> {
    match metric.unit {
        MetricUnit::Auto => Some("normal".to_string()),
        MetricUnit::Pixels => Some(normalize_length(metric.value)),
        MetricUnit::Percent => Some(format_percent(metric.value / 100.0)),
    }
}

fn letter_spacing(metric: &Metric) -> Option<String> {
    match metric.unit {
        MetricUnit::Auto => None,
        MetricUnit::Pixels => Some(normalize_length(metric.value)),
        MetricUnit::Percent if metric.value.abs() < 1e-10 => Some("0".to_string()),
        MetricUnit::Percent => Some(format!("{}em", format_number(metric.value / 100.0))),
    }
}
