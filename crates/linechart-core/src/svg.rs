// File: crates/linechart-core/src/svg.rs
// Summary: Append-only SVG element tree and its one-pass serializer.

use std::fmt::Write;

/// A child of an element: either a nested element or escaped text content.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One SVG element with ordered attributes and children.
///
/// Built with chained calls and serialized once by [`Element::to_markup`];
/// attribute order is preserved exactly as added.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Values that can be written as an attribute.
pub trait AttrValue {
    fn to_attr(&self) -> String;
}

impl AttrValue for f64 {
    fn to_attr(&self) -> String { fmt_num(*self) }
}

impl AttrValue for i32 {
    fn to_attr(&self) -> String { self.to_string() }
}

impl AttrValue for usize {
    fn to_attr(&self) -> String { self.to_string() }
}

impl AttrValue for &str {
    fn to_attr(&self) -> String { (*self).to_string() }
}

impl AttrValue for String {
    fn to_attr(&self) -> String { self.clone() }
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, key: &'static str, value: impl AttrValue) -> Self {
        self.attrs.push((key, value.to_attr()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn name(&self) -> &str { self.name }

    /// Raw (unescaped) value of the first attribute named `key`.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Concatenated direct text children, unescaped.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Direct element children, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Serialize with two-space indentation, one element per line.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out, 0);
        out
    }

    fn write_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = write!(out, "<{}", self.name);
        for (key, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", key, xml_escape(value));
        }

        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }

        // Text-only elements stay on one line so whitespace never leaks into labels.
        if self.children.iter().all(|n| matches!(n, Node::Text(_))) {
            out.push('>');
            for node in &self.children {
                if let Node::Text(t) = node {
                    out.push_str(&xml_escape(t));
                }
            }
            let _ = writeln!(out, "</{}>", self.name);
            return;
        }

        out.push_str(">\n");
        for node in &self.children {
            match node {
                Node::Element(e) => e.write_into(out, depth + 1),
                Node::Text(t) => {
                    for _ in 0..=depth {
                        out.push_str("  ");
                    }
                    out.push_str(&xml_escape(t));
                    out.push('\n');
                }
            }
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        let _ = writeln!(out, "</{}>", self.name);
    }
}

/// Format a number the way it appears in markup: shortest round-trip
/// decimal, no trailing `.0`, and never `-0`.
pub fn fmt_num(value: f64) -> String {
    let v = value + 0.0;
    if v == v.trunc() && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}

/// Escape the five XML special characters for text content and attributes.
pub fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
