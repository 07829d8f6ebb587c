//! Low-level nom parser functions for the CSS values this pipeline emits.
//!
//! Only the grammar the pipeline itself produces is understood: plain
//! numbers, lengths in `px`/`em`/`rem`/`%`, and comma- or
//! whitespace-separated lists whose items may contain parenthesised groups
//! such as `rgba(0,0,0,.5)` or `url(data:...)`.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit0, digit1, one_of};
use nom::combinator::{all_consuming, opt, value};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Percent,
    /// A bare number; only meaningful for `0`.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

// --- Helper Parsers ---

/// Parses a signed decimal number such as `-4`, `.5`, or `12.75`.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    let (rest, sign) = opt(one_of("+-")).parse(input)?;
    let (rest, whole) = digit0(rest)?;
    let (rest, fraction) = opt(preceded(char('.'), digit1)).parse(rest)?;
    if whole.is_empty() && fraction.is_none() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Digit,
        )));
    }
    let text = format!(
        "{}{}.{}",
        if sign == Some('-') { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        fraction.unwrap_or("0")
    );
    let number = text.parse::<f64>().map_err(|_| {
        nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Float))
    })?;
    Ok((rest, number))
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        value(LengthUnit::Px, tag("px")),
        value(LengthUnit::Rem, tag("rem")),
        value(LengthUnit::Em, tag("em")),
        value(LengthUnit::Percent, tag("%")),
    ))
    .parse(input)
}

/// Parses a length token. A unitless number is only accepted when it is zero.
pub fn parse_length(input: &str) -> IResult<&str, Length> {
    let (rest, number) = parse_number(input)?;
    let (rest, unit) = opt(parse_unit).parse(rest)?;
    match unit {
        Some(unit) => Ok((rest, Length { value: number, unit })),
        None if number == 0.0 => Ok((rest, Length { value: 0.0, unit: LengthUnit::None })),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Parses a complete token as a length; trailing input is an error.
pub fn length_token(token: &str) -> Option<Length> {
    all_consuming(parse_length)
        .parse(token.trim())
        .ok()
        .map(|(_, length)| length)
}

/// Parses a complete token as a pixel value (`12px`, `-4.5px`, or `0`).
pub fn px_token(token: &str) -> Option<f64> {
    match length_token(token)? {
        Length { value, unit: LengthUnit::Px | LengthUnit::None } => Some(value),
        _ => None,
    }
}

/// Parses a complete token as a plain number.
pub fn number_token(token: &str) -> Option<f64> {
    all_consuming(parse_number)
        .parse(token.trim())
        .ok()
        .map(|(_, n)| n)
}

// --- List splitting ---

/// Splits `input` on `separator` wherever it is not nested inside
/// parentheses or quotes. Empty pieces are dropped and pieces are trimmed.
pub fn split_top_level(input: &str, separator: char) -> Vec<&str> {
    split_where(input, |c| c == separator)
}

/// Splits `input` on runs of whitespace outside parentheses and quotes.
pub fn split_top_level_whitespace(input: &str) -> Vec<&str> {
    split_where(input, char::is_whitespace)
}

fn split_where(input: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (idx, c) in input.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, c) if depth == 0 && is_separator(c) => {
                pieces.push(&input[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    pieces.push(&input[start..]);
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}
