//! Sizes that may be intrinsic, and four-sided padding.
use crate::shorthand::collapse_box;
use crate::units::normalize_length;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A box extent: a pixel length, or `auto` for intrinsic sizing.
///
/// Serialized as a bare number or the string `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    Px(f64),
    #[default]
    Auto,
}

impl Dimension {
    pub fn px(self) -> Option<f64> {
        match self {
            Dimension::Px(v) => Some(v),
            Dimension::Auto => None,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Dimension::Px(v) => serializer.serialize_f64(*v),
            Dimension::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DimensionVisitor;
        impl de::Visitor<'_> for DimensionVisitor {
            type Value = Dimension;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number of pixels or the string 'auto'")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Dimension, E> {
                Ok(Dimension::Px(v as f64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dimension, E> {
                if v.eq_ignore_ascii_case("auto") {
                    Ok(Dimension::Auto)
                } else {
                    Err(E::custom(format!("invalid dimension '{}'", v)))
                }
            }
        }
        deserializer.deserialize_any(DimensionVisitor)
    }
}

/// Padding in pixels, wire names `t`, `r`, `b`, `l`.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Padding {
    #[serde(default)]
    pub t: f64,
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub l: f64,
}

impl Padding {
    pub fn all(value: f64) -> Self {
        Self { t: value, r: value, b: value, l: value }
    }

    pub fn is_zero(&self) -> bool {
        [self.t, self.r, self.b, self.l].iter().all(|v| v.abs() < 1e-10)
    }

    /// The collapsed `padding` shorthand value, e.g. `8px 16px`.
    pub fn to_css(&self) -> String {
        collapse_box([self.t, self.r, self.b, self.l].map(normalize_length))
    }
}
