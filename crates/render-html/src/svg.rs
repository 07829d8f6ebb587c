//! SVG markup checks and the stroke-only silhouette used by the debug overlay.
use crate::RenderError;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use scenemark_style::Declarations;
use std::io::Cursor;

const SHAPE_ELEMENTS: &[&[u8]] = &[
    b"path", b"rect", b"circle", b"ellipse", b"line", b"polyline", b"polygon",
];

fn svg_error(file: &str, message: impl ToString) -> RenderError {
    RenderError::Svg { file: file.to_string(), message: message.to_string() }
}

/// Whether `file` can be written as `svgs/<file>`: a bare name made of
/// `[A-Za-z0-9_.-]` that is not hidden and never climbs directories.
pub fn is_safe_asset_name(file: &str) -> bool {
    !file.is_empty()
        && !file.starts_with('.')
        && !file.contains("..")
        && file.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Checks that `file` is a safe asset name and that `markup` is well-formed
/// XML whose root element is `<svg>`.
pub fn validate_svg(file: &str, markup: &str) -> Result<(), RenderError> {
    if !is_safe_asset_name(file) {
        return Err(svg_error(file, "file name is not a plain asset name"));
    }
    let mut reader = Reader::from_str(markup);
    let mut saw_root = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if !saw_root => {
                if e.local_name().as_ref() != b"svg" {
                    return Err(svg_error(file, "root element is not <svg>"));
                }
                saw_root = true;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(svg_error(file, e)),
            _ => {}
        }
    }
    if saw_root {
        Ok(())
    } else {
        Err(svg_error(file, "no root element"))
    }
}

/// Rewrites `markup` into an outline-only rendering: every fill becomes
/// `none`, shapes without a stroke get `stroke="currentColor"`, and the root
/// element gains the `debug-svg` class.
pub fn silhouette(file: &str, markup: &str) -> Result<String, RenderError> {
    validate_svg(file, markup)?;

    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(false);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut is_root = true;

    loop {
        let event = match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => Event::Start(outline_element(&e, is_root)),
            Ok(Event::Empty(e)) => Event::Empty(outline_element(&e, is_root)),
            Ok(Event::Decl(_)) | Ok(Event::DocType(_)) | Ok(Event::PI(_)) => continue,
            Ok(other) => other,
            Err(e) => return Err(svg_error(file, e)),
        };
        if matches!(event, Event::Start(_) | Event::Empty(_)) {
            is_root = false;
        }
        writer.write_event(event).map_err(|e| svg_error(file, e))?;
    }

    String::from_utf8(writer.into_inner().into_inner()).map_err(|e| svg_error(file, e))
}

fn outline_element(element: &BytesStart<'_>, is_root: bool) -> BytesStart<'static> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut out = BytesStart::new(name);

    let mut has_fill = false;
    let mut has_stroke = false;
    let mut has_class = false;
    for attr in element.attributes().filter_map(Result::ok) {
        let key = attr.key.as_ref();
        match key {
            b"fill" => {
                has_fill = true;
                out.push_attribute(("fill", "none"));
            }
            b"stroke" => {
                has_stroke = true;
                out.push_attribute(Attribute::from((key, attr.value.as_ref())));
            }
            b"style" => {
                let raw = String::from_utf8_lossy(&attr.value);
                let mut style = Declarations::parse(&raw);
                if style.contains("fill") {
                    style.set_in_place("fill", "none");
                }
                has_stroke |= style.contains("stroke");
                out.push_attribute(("style", style.to_css().as_str()));
            }
            b"class" if is_root => {
                has_class = true;
                let raw = String::from_utf8_lossy(&attr.value);
                out.push_attribute(("class", format!("{} debug-svg", raw).as_str()));
            }
            _ => out.push_attribute(Attribute::from((key, attr.value.as_ref()))),
        }
    }

    if is_root {
        if !has_class {
            out.push_attribute(("class", "debug-svg"));
        }
        if !has_fill {
            out.push_attribute(("fill", "none"));
        }
    } else if SHAPE_ELEMENTS.contains(&element.local_name().as_ref()) && !has_stroke {
        out.push_attribute(("stroke", "currentColor"));
        out.push_attribute(("vector-effect", "non-scaling-stroke"));
    }
    out
}
