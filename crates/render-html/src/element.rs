//! The intermediate element tree built before serialization.
//!
//! Rendering happens in two passes: the tree is built with every element's
//! residual inline CSS, then the shared-class pool is computed over all
//! residuals and the tree is serialized against it.
use quick_xml::escape::escape;
use scenemark_optimize::SharedClassPool;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Body {
    Empty,
    Children(Vec<Element>),
    /// Already escaped markup.
    Html(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attrs: Vec<(&'static str, String)>,
    /// Declarations left after utility extraction, canonical form.
    pub residual: String,
    pub body: Body,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self { tag, classes: Vec::new(), attrs: Vec::new(), residual: String::new(), body: Body::Empty }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.body {
            Body::Children(children) => children.push(child),
            body => *body = Body::Children(vec![child]),
        }
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "img")
    }

    /// Pushes every non-empty residual in the subtree, depth first.
    pub fn collect_residuals<'a>(&'a self, out: &mut Vec<&'a str>) {
        if !self.residual.is_empty() {
            out.push(&self.residual);
        }
        if let Body::Children(children) = &self.body {
            for child in children {
                child.collect_residuals(out);
            }
        }
    }

    pub fn write_html(&self, pool: &SharedClassPool, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);

        let shared = pool.class_for(&self.residual);
        let classes = self.classes.iter().map(String::as_str).chain(shared);
        let class_attr = classes.collect::<Vec<_>>().join(" ");
        if !class_attr.is_empty() {
            push_attr(out, "class", &class_attr);
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if shared.is_none() && !self.residual.is_empty() {
            push_attr(out, "style", &self.residual);
        }
        out.push('>');

        if self.is_void() {
            return;
        }
        match &self.body {
            Body::Empty => {}
            Body::Html(html) => out.push_str(html),
            Body::Children(children) => {
                for child in children {
                    child.write_html(pool, out);
                }
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}
