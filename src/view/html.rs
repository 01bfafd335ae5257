//! Minimal HTML element builder.
//!
//! Every dynamic fragment shown in the page goes through [`Element`], which
//! escapes all text and attribute values on write. User-entered strings can
//! therefore never break out of the markup they are rendered into.

/// A child of an [`Element`]: either a nested element or escaped text.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element under construction.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Starts a new element with the given tag name.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute. The value is escaped when rendered.
    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Appends a child element.
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Appends a text child. The text is escaped when rendered.
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_string()));
        self
    }

    /// Renders the element and its children to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');

        if is_void(self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(element) => element.write(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escapes the five HTML metacharacters.
pub fn escape_html(value: &str) -> String {
    let mut out = String::new();
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Void elements take no children and no closing tag.
fn is_void(tag: &str) -> bool {
    matches!(tag, "hr" | "br" | "img" | "input" | "meta" | "link")
}
