//! Small helpers for asserting on generated markup.
use regex::Regex;

/// Number of non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The `<style>` block contents of a full page.
pub fn style_block(html: &str) -> &str {
    let start = html.find("<style>").map(|i| i + "<style>".len()).unwrap_or(0);
    let end = html[start..].find("</style>").map(|i| start + i).unwrap_or(html.len());
    &html[start..end]
}

/// The class attribute of the element carrying `data-layer-id="<id>"`.
pub fn classes_of_layer(html: &str, id: &str) -> Option<String> {
    let pattern = format!(r#"<div class="([^"]*)"[^>]*data-layer-id="{}""#, regex::escape(id));
    let re = Regex::new(&pattern).ok()?;
    re.captures(html).map(|caps| caps[1].to_string())
}

/// Every `sc-<n>` class referenced in the markup.
pub fn shared_classes(html: &str) -> Vec<String> {
    let re = Regex::new(r"\bsc-\d+\b").expect("valid regex");
    let mut found: Vec<String> = re.find_iter(html).map(|m| m.as_str().to_string()).collect();
    found.sort();
    found.dedup();
    found
}
