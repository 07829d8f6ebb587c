//! Rewriting of local asset references through an [`AssetUrlProvider`].
use crate::renderer::SvgAsset;
use regex::{Captures, Regex};
use scenemark_traits::{AssetKind, AssetUrlProvider};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// A local reference directly after an attribute quote or `url(`.
static ASSET_REF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(["'(])(images|svgs)/([A-Za-z0-9_.\-]+)"#)
        .expect("BUG: invalid ASSET_REF_RE regex literal")
});

/// Replaces every `images/<id>` and `svgs/<file>` reference in `text` with
/// the provider's URL. References the provider declines stay as they are.
pub fn rewrite_asset_urls(
    text: &str,
    provider: &dyn AssetUrlProvider,
    assets: &[SvgAsset],
) -> String {
    ASSET_REF_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let kind = match &caps[2] {
                "images" => AssetKind::Image,
                _ => AssetKind::Svg,
            };
            let id = &caps[3];
            let data = match kind {
                AssetKind::Svg => assets
                    .iter()
                    .find(|asset| asset.file == id)
                    .map(|asset| asset.markup.as_bytes()),
                AssetKind::Image => None,
            };
            match provider.resolve(id, kind, data) {
                Some(url) => format!("{}{}", &caps[1], url),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// The distinct `images/<id>` references in `texts`, sorted.
pub fn image_references<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut ids = BTreeSet::new();
    for text in texts {
        for caps in ASSET_REF_RE.captures_iter(text) {
            if &caps[2] == "images" {
                ids.insert(caps[3].to_string());
            }
        }
    }
    ids.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenemark_traits::{MapAssetProvider, PrefixAssetProvider};

    #[test]
    fn test_prefix_provider_rewrites_html_and_css() {
        let provider = PrefixAssetProvider::new("https://cdn.example.com/");
        let html = r#"<img src="svgs/1-2.svg" alt="">"#;
        let css = ".a{background:url(images/abc123.png) center / cover no-repeat;}";
        assert_eq!(
            rewrite_asset_urls(html, &provider, &[]),
            r#"<img src="https://cdn.example.com/svgs/1-2.svg" alt="">"#
        );
        assert_eq!(
            rewrite_asset_urls(css, &provider, &[]),
            ".a{background:url(https://cdn.example.com/images/abc123.png) center / cover no-repeat;}"
        );
    }

    #[test]
    fn test_declined_references_are_untouched() {
        let provider = MapAssetProvider::new().with(AssetKind::Image, "known.png", "/k.png");
        let css = "background:url(images/known.png),url(images/other.png);";
        assert_eq!(
            rewrite_asset_urls(css, &provider, &[]),
            "background:url(/k.png),url(images/other.png);"
        );
    }

    #[test]
    fn test_svg_data_is_passed_to_provider() {
        #[derive(Debug)]
        struct DataUri;
        impl AssetUrlProvider for DataUri {
            fn resolve(&self, id: &str, kind: AssetKind, data: Option<&[u8]>) -> Option<String> {
                assert_eq!(kind, AssetKind::Svg);
                assert_eq!(id, "a.svg");
                data.map(|bytes| format!("data:{}", bytes.len()))
            }
        }
        let assets = vec![SvgAsset { file: "a.svg".into(), markup: "<svg/>".into() }];
        assert_eq!(
            rewrite_asset_urls(r#"src="svgs/a.svg""#, &DataUri, &assets),
            r#"src="data:6""#
        );
    }

    #[test]
    fn test_image_references_are_collected_once() {
        let css = "background:url(images/b.png),url(images/a.png);";
        let html = r#"<img src="svgs/x.svg"><div style="background:url(images/b.png)"></div>"#;
        assert_eq!(image_references([css, html]), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_bare_words_are_not_references() {
        let provider = PrefixAssetProvider::new("x");
        assert_eq!(rewrite_asset_urls("see images/a.png", &provider, &[]), "see images/a.png");
    }
}
