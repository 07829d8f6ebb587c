//! Font weight and style, as written in design-tool font style names.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::REGULAR
    }
}

impl FontWeight {
    pub const REGULAR: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// Parse the weight part of a style name such as `"Semi Bold Italic"`.
    ///
    /// Returns `None` when the name has no recognizable weight word; a name
    /// that is only a slant (`"Italic"`) is regular weight.
    pub fn from_style_name(style: &str) -> Option<FontWeight> {
        let compact: String = style
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        if let Ok(numeric) = compact.parse::<u16>() {
            return (1..=1000).contains(&numeric).then_some(FontWeight(numeric));
        }
        let without_slant = compact.replace("italic", "").replace("oblique", "");
        const NAMES: &[(&str, u16)] = &[
            ("extralight", 200),
            ("ultralight", 200),
            ("extrabold", 800),
            ("ultrabold", 800),
            ("semibold", 600),
            ("demibold", 600),
            ("hairline", 100),
            ("thin", 100),
            ("light", 300),
            ("regular", 400),
            ("normal", 400),
            ("book", 400),
            ("medium", 500),
            ("bold", 700),
            ("black", 900),
            ("heavy", 900),
        ];
        if without_slant.is_empty() {
            return (!compact.is_empty()).then_some(FontWeight::REGULAR);
        }
        NAMES
            .iter()
            .find(|(name, _)| without_slant.contains(name))
            .map(|(_, weight)| FontWeight(*weight))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn from_style_name(style: &str) -> FontStyle {
        let lower = style.to_ascii_lowercase();
        if lower.contains("italic") || lower.contains("oblique") {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}
