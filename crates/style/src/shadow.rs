//! Parsing and re-serialization of `box-shadow` lists.
use crate::parsers::{length_token, split_top_level, split_top_level_whitespace, StyleParseError};
use itertools::Itertools;

/// One entry of a `box-shadow` list.
///
/// Lengths and color keep their original token text so that re-emitting a
/// shadow (as a `box-shadow` or as a `drop-shadow()` filter) never changes
/// its formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadow {
    pub inset: bool,
    pub offset_x: String,
    pub offset_y: String,
    pub blur: Option<String>,
    pub spread: Option<String>,
    pub color: Option<String>,
}

impl Shadow {
    /// Parses a single shadow entry such as `inset 0 1px 2px #000`.
    pub fn parse(entry: &str) -> Result<Shadow, StyleParseError> {
        let mut inset = false;
        let mut lengths = Vec::new();
        let mut color = None;
        for token in split_top_level_whitespace(entry) {
            if token.eq_ignore_ascii_case("inset") {
                inset = true;
            } else if length_token(token).is_some() {
                lengths.push(token.to_string());
            } else if color.is_none() {
                color = Some(token.to_string());
            } else {
                return Err(StyleParseError::InvalidValue {
                    property: "box-shadow".to_string(),
                    value: entry.to_string(),
                });
            }
        }
        if !(2..=4).contains(&lengths.len()) {
            return Err(StyleParseError::InvalidValue {
                property: "box-shadow".to_string(),
                value: entry.to_string(),
            });
        }
        let mut lengths = lengths.into_iter();
        Ok(Shadow {
            inset,
            offset_x: lengths.next().unwrap_or_default(),
            offset_y: lengths.next().unwrap_or_default(),
            blur: lengths.next(),
            spread: lengths.next(),
            color,
        })
    }

    /// Parses a complete `box-shadow` value. `none` yields an empty list.
    pub fn parse_list(value: &str) -> Result<Vec<Shadow>, StyleParseError> {
        if value.trim().eq_ignore_ascii_case("none") {
            return Ok(Vec::new());
        }
        split_top_level(value, ',')
            .into_iter()
            .map(Shadow::parse)
            .collect()
    }

    /// The entry as it would appear inside a `box-shadow` value.
    pub fn to_css(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(6);
        if self.inset {
            parts.push("inset");
        }
        parts.push(&self.offset_x);
        parts.push(&self.offset_y);
        parts.extend(self.blur.as_deref());
        parts.extend(self.spread.as_deref());
        parts.extend(self.color.as_deref());
        parts.join(" ")
    }

    /// The equivalent `drop-shadow()` filter function. Spread has no
    /// drop-shadow counterpart and is not carried over.
    pub fn to_drop_shadow(&self) -> String {
        let parts = [
            Some(self.offset_x.as_str()),
            Some(self.offset_y.as_str()),
            self.blur.as_deref(),
            self.color.as_deref(),
        ];
        format!("drop-shadow({})", parts.iter().flatten().join(" "))
    }
}

/// Serializes shadows back into a `box-shadow` value.
pub fn shadow_list_to_css(shadows: &[Shadow]) -> String {
    shadows.iter().map(Shadow::to_css).join(", ")
}
