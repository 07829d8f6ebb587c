//! Wrapping rendered markup into a page and assembling its stylesheet.
use crate::options::RenderMode;
use itertools::Itertools;
use quick_xml::escape::escape;

/// Rules every content render starts with.
pub const CONTENT_BASE_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}
.scene{position:relative;overflow:hidden}
.scene img{display:block;width:100%;height:100%}";

/// Rules of the debug overlay.
pub const DEBUG_BASE_CSS: &str = "\
*{margin:0;padding:0;box-sizing:border-box}
.debug-root{position:relative}
.debug-box{outline:1px solid rgba(255,0,80,.6);outline-offset:-1px}
.debug-box:hover{background:rgba(255,0,80,.12)}
.debug-slot{outline:1px dashed rgba(0,120,255,.5)}
.debug-mask{outline:1px dashed rgba(160,0,255,.8)}
.debug-text,.debug-text *{color:transparent!important}
.debug-svg{display:block;width:100%;height:100%;overflow:visible;color:rgba(255,0,80,.8)}";

pub fn base_css(mode: RenderMode) -> &'static str {
    match mode {
        RenderMode::Content => CONTENT_BASE_CSS,
        RenderMode::Debug => DEBUG_BASE_CSS,
    }
}

/// Joins the non-empty stylesheet sections with newlines.
pub fn join_css<'a>(sections: impl IntoIterator<Item = &'a str>) -> String {
    sections
        .into_iter()
        .map(str::trim)
        .filter(|section| !section.is_empty())
        .join("\n")
}

/// A standalone HTML page around `body`.
pub fn wrap_document(title: &str, head_links: &[String], css: &str, body: &str) -> String {
    let mut page = String::with_capacity(body.len() + css.len() + 256);
    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape(title)));
    for link in head_links {
        page.push_str(link);
        page.push('\n');
    }
    page.push_str("<style>\n");
    page.push_str(css);
    page.push_str("\n</style>\n</head>\n<body>\n");
    page.push_str(body);
    page.push_str("\n</body>\n</html>\n");
    page
}
