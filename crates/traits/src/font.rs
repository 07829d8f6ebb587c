//! Font collection: turning the fonts a document uses into `<head>` links.

use itertools::Itertools;
use scenemark_style::{FontStyle, FontWeight};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A font face requested by a text segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontRequest {
    pub family: String,
    pub weight: u16,
    pub italic: bool,
}

impl FontRequest {
    pub fn new(family: impl Into<String>, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            weight: weight.0,
            italic: style == FontStyle::Italic,
        }
    }
}

/// Produces the `<link>` (or `<style>`) tags that make requested fonts
/// available to the document.
pub trait FontCollector: Send + Sync + Debug {
    fn head_links(&self, fonts: &[FontRequest]) -> Vec<String>;
}

/// Emits nothing; the page relies on locally installed fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFontCollector;

impl FontCollector for NoFontCollector {
    fn head_links(&self, _fonts: &[FontRequest]) -> Vec<String> {
        Vec::new()
    }
}

/// Formats a single Google Fonts `css2` stylesheet link.
#[derive(Debug, Clone)]
pub struct GoogleFontsCollector {
    base_url: String,
    display: String,
}

impl Default for GoogleFontsCollector {
    fn default() -> Self {
        Self {
            base_url: "https://fonts.googleapis.com/css2".to_string(),
            display: "swap".to_string(),
        }
    }
}

impl GoogleFontsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The `css2` query URL, or `None` when no fonts are requested.
    pub fn stylesheet_url(&self, fonts: &[FontRequest]) -> Option<String> {
        let mut families: BTreeMap<&str, Vec<(bool, u16)>> = BTreeMap::new();
        for font in fonts {
            if font.family.trim().is_empty() {
                continue;
            }
            families
                .entry(font.family.as_str())
                .or_default()
                .push((font.italic, font.weight));
        }
        if families.is_empty() {
            return None;
        }
        let params = families
            .into_iter()
            .map(|(family, mut faces)| {
                faces.sort_unstable();
                faces.dedup();
                let family = urlencoding::encode(family).replace("%20", "+");
                let tuples = faces
                    .iter()
                    .map(|(italic, weight)| format!("{},{}", u8::from(*italic), weight))
                    .join(";");
                format!("family={}:ital,wght@{}", family, tuples)
            })
            .join("&");
        Some(format!("{}?{}&display={}", self.base_url, params, self.display))
    }
}

impl FontCollector for GoogleFontsCollector {
    fn head_links(&self, fonts: &[FontRequest]) -> Vec<String> {
        let Some(url) = self.stylesheet_url(fonts) else {
            return Vec::new();
        };
        log::debug!("Requesting {} font faces from Google Fonts", fonts.len());
        vec![
            r#"<link rel="preconnect" href="https://fonts.googleapis.com">"#.to_string(),
            r#"<link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>"#.to_string(),
            format!(r#"<link rel="stylesheet" href="{}">"#, url.replace('&', "&amp;")),
        ]
    }
}
