//! Node to markup serialization.

use std::fmt::Write;

use crate::node::{ElementNode, Node};

/// HTML elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Markup dialect written by the serializer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputFormat {
    /// XML: childless elements are self-closed (`<iframe />`).
    #[default]
    Xml,
    /// HTML5: explicit end tags, void elements left open (`<br>`).
    Html,
}

/// Writes nodes as markup text.
///
/// Text and attribute values are escaped. [`Node::Raw`] is written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer {
    format: OutputFormat,
}

impl Serializer {
    /// Create a serializer for the given format.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Serialize a node to a string.
    #[must_use]
    pub fn serialize(&self, node: &Node) -> String {
        let mut out = String::new();
        self.write_node(node, &mut out);
        out
    }

    pub(crate) fn write_node(&self, node: &Node, out: &mut String) {
        match node {
            Node::Element(element) => self.write_element(element, out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    self.write_node(child, out);
                }
            }
        }
    }

    fn write_element(&self, element: &ElementNode, out: &mut String) {
        let tag = element.tag();
        out.push('<');
        out.push_str(tag);
        for (key, value) in element.attributes() {
            write!(out, r#" {key}="{}""#, escape_attr(value)).unwrap();
        }

        let childless = element.children().is_empty();
        match self.format {
            OutputFormat::Xml if childless => {
                out.push_str(" />");
                return;
            }
            OutputFormat::Html if childless && VOID_ELEMENTS.contains(&tag) => {
                out.push('>');
                return;
            }
            _ => out.push('>'),
        }

        for child in element.children() {
            self.write_node(child, out);
        }
        write!(out, "</{tag}>").unwrap();
    }
}

fn escape_text(text: &str) -> String {
    escape(text, false)
}

fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            '\'' if escape_quotes => result.push_str("&apos;"),
            _ => result.push(ch),
        }
    }
    result
}
