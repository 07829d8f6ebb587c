//! Replacement of `matrix(...)` transforms by their shortest equivalent.
use nom::bytes::complete::tag;
use nom::character::complete::{char, multispace0};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use scenemark_style::parsers::parse_number;
use scenemark_style::{decompose_matrix, Declarations};

fn matrix_args(input: &str) -> IResult<&str, Vec<f64>> {
    delimited(
        (tag("matrix"), multispace0, char('('), multispace0),
        separated_list1((multispace0, char(','), multispace0), parse_number),
        (multispace0, char(')')),
    )
    .parse(input)
}

/// Parses a lone `matrix(a, b, c, d, e, f)` value.
pub fn parse_matrix(value: &str) -> Option<[f64; 6]> {
    let (_, args) = all_consuming(matrix_args).parse(value.trim()).ok()?;
    args.try_into().ok()
}

/// Rewrites a `transform:matrix(...)` declaration in place using
/// [`decompose_matrix`]. An identity transform is removed together with its
/// `transform-origin`, which has no effect without a transform. Any other
/// transform value is left alone.
pub fn simplify_transform(css: &mut Declarations) {
    let Some(value) = css.get("transform") else {
        if css.get("transform-origin").is_some() {
            css.remove("transform-origin");
        }
        return;
    };
    let Some([a, b, c, d, e, f]) = parse_matrix(value) else {
        return;
    };
    let simplified = decompose_matrix(a, b, c, d, e, f);
    if simplified.is_empty() {
        css.remove("transform");
        css.remove("transform-origin");
    } else {
        css.set_in_place("transform", simplified);
    }
}
