//! CSS value normalization for the scenemark pipeline.
//!
//! Everything in here is pure: numbers in, canonical CSS text out. The
//! layout translator, the optimizer, and the composition lowering all format
//! values through these helpers; equal inputs always produce byte-identical
//! CSS.

pub mod declarations;
pub mod dimension;
pub mod flex;
pub mod font;
pub mod matrix;
pub mod parsers;
pub mod shadow;
pub mod shorthand;
pub mod units;

pub use declarations::Declarations;
pub use dimension::{Dimension, Padding};
pub use flex::{
    AlignItems, AlignSelf, BoxSizing, Display, FlexBasis, FlexDirection, FlexWrap, JustifyContent,
    Overflow, Position,
};
pub use font::{FontStyle, FontWeight};
pub use matrix::decompose_matrix;
pub use parsers::StyleParseError;
pub use shadow::Shadow;
pub use shorthand::{collapse_box, collapse_hex, css_color};
pub use units::{format_alpha, format_number, format_percent, normalize_angle, normalize_length};
