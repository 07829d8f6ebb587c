//! AssetUrlProvider trait for rewriting asset references.
//!
//! Rendered HTML and CSS refer to images as `images/<hash>.png` and to
//! vector assets as `svgs/<file>`. A provider maps those local references to
//! final URLs (a CDN, a data URI, an upload bucket) without the renderer
//! knowing where assets end up.

use std::collections::HashMap;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Svg,
}

impl AssetKind {
    /// The local directory references of this kind live in.
    pub fn directory(self) -> &'static str {
        match self {
            AssetKind::Image => "images",
            AssetKind::Svg => "svgs",
        }
    }
}

/// Resolves a local asset reference to its final URL.
///
/// `id` is the file name inside the asset directory (`<hash>.png`,
/// `<stem>.svg`). `data` carries the asset bytes when the renderer has them
/// (always for SVG, never for images). Returning `None` leaves the reference
/// untouched.
pub trait AssetUrlProvider: Send + Sync + Debug {
    fn resolve(&self, id: &str, kind: AssetKind, data: Option<&[u8]>) -> Option<String>;
}

/// Prepends a base URL to every reference.
#[derive(Debug, Clone)]
pub struct PrefixAssetProvider {
    base: String,
}

impl PrefixAssetProvider {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }
}

impl AssetUrlProvider for PrefixAssetProvider {
    fn resolve(&self, id: &str, kind: AssetKind, _data: Option<&[u8]>) -> Option<String> {
        Some(format!("{}/{}/{}", self.base, kind.directory(), id))
    }
}

/// Resolves from a pre-populated table; unknown ids stay untouched.
#[derive(Debug, Clone, Default)]
pub struct MapAssetProvider {
    urls: HashMap<(AssetKind, String), String>,
}

impl MapAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: AssetKind, id: impl Into<String>, url: impl Into<String>) {
        self.urls.insert((kind, id.into()), url.into());
    }

    pub fn with(mut self, kind: AssetKind, id: impl Into<String>, url: impl Into<String>) -> Self {
        self.insert(kind, id, url);
        self
    }
}

impl AssetUrlProvider for MapAssetProvider {
    fn resolve(&self, id: &str, kind: AssetKind, _data: Option<&[u8]>) -> Option<String> {
        self.urls.get(&(kind, id.to_string())).cloned()
    }
}
