//! Extraction of reusable utility classes from declaration blocks.
use crate::scale::{font_size_name, font_weight_name, outline_width_step, radius_name, spacing_step};
use crate::selector::escape_class;
use itertools::Itertools;
use scenemark_style::parsers::px_token;
use scenemark_style::Declarations;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// The result of extracting utilities from one declaration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtilityClasses {
    pub class_names: Vec<String>,
    /// The declarations no utility covers, in canonical form.
    pub remaining_css: String,
}

/// Discrete properties: exact value to class name.
const KEYWORD_CLASSES: &[(&str, &str, &str)] = &[
    ("display", "flex", "flex"),
    ("display", "block", "block"),
    ("display", "inline-flex", "inline-flex"),
    ("display", "inline-block", "inline-block"),
    ("display", "inline", "inline"),
    ("display", "none", "hidden"),
    ("flex-direction", "row", "flex-row"),
    ("flex-direction", "row-reverse", "flex-row-reverse"),
    ("flex-direction", "column", "flex-col"),
    ("flex-direction", "column-reverse", "flex-col-reverse"),
    ("flex-wrap", "wrap", "flex-wrap"),
    ("flex-wrap", "wrap-reverse", "flex-wrap-reverse"),
    ("flex-wrap", "nowrap", "flex-nowrap"),
    ("justify-content", "flex-start", "justify-start"),
    ("justify-content", "flex-end", "justify-end"),
    ("justify-content", "center", "justify-center"),
    ("justify-content", "space-between", "justify-between"),
    ("justify-content", "space-around", "justify-around"),
    ("justify-content", "space-evenly", "justify-evenly"),
    ("align-items", "flex-start", "items-start"),
    ("align-items", "flex-end", "items-end"),
    ("align-items", "center", "items-center"),
    ("align-items", "baseline", "items-baseline"),
    ("align-items", "stretch", "items-stretch"),
    ("align-self", "auto", "self-auto"),
    ("align-self", "flex-start", "self-start"),
    ("align-self", "flex-end", "self-end"),
    ("align-self", "center", "self-center"),
    ("align-self", "stretch", "self-stretch"),
    ("align-self", "baseline", "self-baseline"),
    ("overflow", "hidden", "overflow-hidden"),
    ("overflow", "visible", "overflow-visible"),
    ("overflow", "auto", "overflow-auto"),
    ("overflow", "scroll", "overflow-scroll"),
    ("text-align", "left", "text-left"),
    ("text-align", "center", "text-center"),
    ("text-align", "right", "text-right"),
    ("text-align", "justify", "text-justify"),
    ("white-space", "normal", "whitespace-normal"),
    ("white-space", "nowrap", "whitespace-nowrap"),
    ("white-space", "pre", "whitespace-pre"),
    ("white-space", "pre-wrap", "whitespace-pre-wrap"),
    ("white-space", "pre-line", "whitespace-pre-line"),
    ("box-sizing", "border-box", "box-border"),
    ("box-sizing", "content-box", "box-content"),
    ("position", "absolute", "absolute"),
    ("position", "relative", "relative"),
    ("position", "fixed", "fixed"),
    ("position", "static", "static"),
    ("flex-grow", "1", "grow"),
    ("flex-grow", "0", "grow-0"),
    ("flex-shrink", "0", "shrink-0"),
    ("flex-shrink", "1", "shrink"),
    ("flex-basis", "0", "basis-0"),
    ("flex-basis", "auto", "basis-auto"),
    ("font-style", "italic", "italic"),
    ("font-style", "normal", "not-italic"),
    ("text-transform", "uppercase", "uppercase"),
    ("text-transform", "lowercase", "lowercase"),
    ("text-transform", "capitalize", "capitalize"),
    ("text-overflow", "ellipsis", "text-ellipsis"),
    ("outline-style", "solid", "outline"),
    ("outline-style", "dashed", "outline-dashed"),
];

/// How a scalar property's value is matched against a named scale.
#[derive(Clone, Copy)]
enum Scale {
    Spacing,
    /// Spacing plus `full` (100%) and `auto`.
    Size,
    FontSize,
    FontWeight,
    LineHeight,
    Tracking,
    Radius,
    OutlineWidth,
    /// Stacking order: `z-0` to `z-50` in steps of ten.
    ZIndex,
    /// Only `0`; everything else is arbitrary.
    ZeroOnly,
    ArbitraryOnly,
}

/// Scalar properties: class prefix and scale.
const SCALAR_CLASSES: &[(&str, &str, Scale)] = &[
    ("gap", "gap", Scale::Spacing),
    ("row-gap", "gap-y", Scale::Spacing),
    ("column-gap", "gap-x", Scale::Spacing),
    ("padding", "p", Scale::Spacing),
    ("padding-top", "pt", Scale::Spacing),
    ("padding-right", "pr", Scale::Spacing),
    ("padding-bottom", "pb", Scale::Spacing),
    ("padding-left", "pl", Scale::Spacing),
    ("margin", "m", Scale::Spacing),
    ("margin-top", "mt", Scale::Spacing),
    ("margin-right", "mr", Scale::Spacing),
    ("margin-bottom", "mb", Scale::Spacing),
    ("margin-left", "ml", Scale::Spacing),
    ("width", "w", Scale::Size),
    ("height", "h", Scale::Size),
    ("min-width", "min-w", Scale::ZeroOnly),
    ("min-height", "min-h", Scale::ZeroOnly),
    ("font-size", "text", Scale::FontSize),
    ("line-height", "leading", Scale::LineHeight),
    ("letter-spacing", "tracking", Scale::Tracking),
    ("font-weight", "font", Scale::FontWeight),
    ("border-radius", "rounded", Scale::Radius),
    ("outline", "outline", Scale::ArbitraryOnly),
    ("outline-width", "outline-w", Scale::OutlineWidth),
    ("outline-offset", "outline-offset", Scale::ZeroOnly),
    ("z-index", "z", Scale::ZIndex),
];

/// Shorthand families: when a block sets a shorthand and any of its
/// longhands, the whole family stays inline.
const FAMILIES: &[(&str, &[&str])] = &[
    ("padding", &["padding-top", "padding-right", "padding-bottom", "padding-left"]),
    ("margin", &["margin-top", "margin-right", "margin-bottom", "margin-left"]),
    ("gap", &["row-gap", "column-gap"]),
    (
        "border-radius",
        &[
            "border-top-left-radius",
            "border-top-right-radius",
            "border-bottom-right-radius",
            "border-bottom-left-radius",
        ],
    ),
    ("outline", &["outline-width", "outline-style", "outline-color"]),
];

/// Prefixes generated class names start with; semantic names must not
/// collide with them.
const RESERVED_PREFIXES: &[&str] = &[
    "sc", "debug", "flex", "justify", "items", "self", "overflow", "whitespace", "box", "grow",
    "shrink", "basis",
];

/// Whether `name` could be (or shadow) a generated utility or shared class.
pub fn is_reserved_class(name: &str) -> bool {
    let matches_prefix = |prefix: &str| {
        name == prefix
            || name
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('-'))
    };
    KEYWORD_CLASSES.iter().any(|(_, _, class)| *class == name)
        || SCALAR_CLASSES.iter().any(|(_, prefix, _)| matches_prefix(*prefix))
        || RESERVED_PREFIXES.iter().any(|prefix| matches_prefix(*prefix))
}

fn is_safe_value(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '.' | '%' | '#' | '-' | ',' | '(' | ')' | ' ')
        })
}

fn arbitrary(prefix: &str, value: &str) -> Option<String> {
    is_safe_value(value).then(|| format!("{}-[{}]", prefix, value.replace(' ', "_")))
}

fn scaled(prefix: &str, suffix: &str) -> String {
    format!("{}-{}", prefix, suffix)
}

fn scalar_class(prop: &str, prefix: &str, scale: Scale, value: &str) -> Option<String> {
    let px = px_token(value);
    let named = match scale {
        Scale::Spacing => match px {
            Some(v) if v < 0.0 && prop.starts_with("margin") => {
                spacing_step(-v).map(|step| format!("-{}", scaled(prefix, &step)))
            }
            Some(v) => spacing_step(v).map(|step| scaled(prefix, &step)),
            None => None,
        },
        Scale::Size => match value {
            "100%" => Some(scaled(prefix, "full")),
            "auto" => Some(scaled(prefix, "auto")),
            _ => px.and_then(spacing_step).map(|step| scaled(prefix, &step)),
        },
        Scale::FontSize => px.and_then(font_size_name).map(|name| scaled(prefix, name)),
        Scale::FontWeight => font_weight_name(value).map(|name| scaled(prefix, name)),
        Scale::LineHeight => match value {
            "normal" => Some(scaled(prefix, "normal")),
            _ => px.filter(|v| *v > 0.0).and_then(spacing_step).map(|step| scaled(prefix, &step)),
        },
        Scale::Tracking => match px {
            Some(v) if v == 0.0 => Some(scaled(prefix, "normal")),
            _ => None,
        },
        Scale::Radius => px.and_then(radius_name).map(|name| match name {
            Some(name) => scaled(prefix, name),
            None => prefix.to_string(),
        }),
        Scale::OutlineWidth => px.and_then(outline_width_step).map(|step| scaled("outline", step)),
        Scale::ZIndex => match value {
            "auto" | "0" | "10" | "20" | "30" | "40" | "50" => Some(scaled(prefix, value)),
            _ => None,
        },
        Scale::ZeroOnly => match px {
            Some(v) if v == 0.0 => Some(scaled(prefix, "0")),
            _ => None,
        },
        Scale::ArbitraryOnly => None,
    };
    named.or_else(|| arbitrary(prefix, value))
}

/// Maps declaration blocks to utility classes, memoized per build.
///
/// Every class the extractor hands out is recorded with its rule body so
/// that [`UtilityExtractor::stylesheet`] emits exactly the rules the
/// document uses.
#[derive(Debug, Default)]
pub struct UtilityExtractor {
    cache: HashMap<String, Arc<UtilityClasses>>,
    used: BTreeMap<String, String>,
    hits: usize,
    misses: usize,
}

impl UtilityExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `css` into utility classes and residual declarations.
    ///
    /// Repeated calls with the same string return the same shared result.
    pub fn extract(&mut self, css: &str) -> Arc<UtilityClasses> {
        if let Some(cached) = self.cache.get(css) {
            self.hits += 1;
            return Arc::clone(cached);
        }
        self.misses += 1;
        let result = Arc::new(self.compute(css));
        self.cache.insert(css.to_string(), Arc::clone(&result));
        result
    }

    fn compute(&mut self, css: &str) -> UtilityClasses {
        let decls = Declarations::parse(css);
        let guarded: Vec<&str> = FAMILIES
            .iter()
            .filter(|(shorthand, longhands)| {
                decls.contains(shorthand) && longhands.iter().any(|l| decls.contains(l))
            })
            .flat_map(|(shorthand, longhands)| std::iter::once(*shorthand).chain(longhands.iter().copied()))
            .collect();

        let mut class_names = Vec::new();
        let mut remaining = Declarations::new();
        for (prop, value) in decls.iter() {
            let class = if guarded.iter().any(|g| *g == prop) {
                None
            } else {
                self.class_for(prop, value)
            };
            match class {
                Some(class) => {
                    self.used
                        .entry(class.clone())
                        .or_insert_with(|| format!("{}:{};", prop, value));
                    class_names.push(class);
                }
                None => remaining.set(prop, value),
            }
        }
        UtilityClasses { class_names, remaining_css: remaining.to_css() }
    }

    fn class_for(&self, prop: &str, value: &str) -> Option<String> {
        if let Some((_, _, class)) = KEYWORD_CLASSES
            .iter()
            .find(|(p, v, _)| *p == prop && *v == value)
        {
            return Some(class.to_string());
        }
        let (_, prefix, scale) = SCALAR_CLASSES.iter().find(|(p, _, _)| *p == prop)?;
        scalar_class(prop, prefix, *scale, value)
    }

    /// Number of distinct utility classes handed out so far.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// `(hits, misses)` of the memo cache.
    pub fn cache_stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    /// One rule per used class, sorted by class name.
    pub fn stylesheet(&self) -> String {
        self.used
            .iter()
            .map(|(class, body)| format!(".{}{{{}}}", escape_class(class), body))
            .join("\n")
    }
}
