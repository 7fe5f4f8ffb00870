//! Target document that rendered nodes are created for and inserted into.

#![allow(clippy::unused_self)] // Node factories take &self to mirror the DOM document API

use crate::error::MarkupError;
use crate::node::{ElementNode, Node};
use crate::parser::parse_fragment;
use crate::serializer::{OutputFormat, Serializer};

/// How unescaped markup strings are inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkupMode {
    /// Parse into nodes; markup that does not parse is kept as one raw node.
    #[default]
    Parse,
    /// Always keep the string as one raw node.
    Verbatim,
}

/// Document options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Output dialect.
    pub format: OutputFormat,
    /// Markup string insertion mode.
    pub markup: MarkupMode,
}

/// Target tree for rendered elements.
///
/// Provides node creation, the unsafe insertion operations used by elements
/// that carry raw content, and a body that rendered nodes are appended to.
#[derive(Debug, Clone, Default)]
pub struct Document {
    options: DocumentOptions,
    body: Vec<Node>,
}

impl Document {
    /// Create an empty document with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given options.
    #[must_use]
    pub fn with_options(options: DocumentOptions) -> Self {
        Self {
            options,
            body: Vec::new(),
        }
    }

    /// Create a detached element.
    #[must_use]
    pub fn create_element(&self, tag: &str) -> ElementNode {
        ElementNode::new(tag)
    }

    /// Create a detached text node.
    #[must_use]
    pub fn create_text_node(&self, text: &str) -> Node {
        Node::Text(text.to_owned())
    }

    /// Create an empty fragment.
    #[must_use]
    pub fn create_fragment(&self) -> Node {
        Node::Fragment(Vec::new())
    }

    /// Parse a markup string into a fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the markup is not well-formed.
    pub fn parse_fragment(&self, markup: &str) -> Result<Node, MarkupError> {
        parse_fragment(markup).map(Node::Fragment)
    }

    /// Append a copy of a prebuilt node to `parent` without escaping.
    pub fn insert_fragment(&self, parent: &mut ElementNode, fragment: &Node) {
        parent.append_child(fragment.clone());
    }

    /// Append a markup string to `parent` without escaping.
    ///
    /// Never fails: in [`MarkupMode::Parse`], markup that does not parse is
    /// logged and inserted as a single raw node.
    pub fn insert_markup(&self, parent: &mut ElementNode, markup: &str) {
        match self.options.markup {
            MarkupMode::Verbatim => parent.append_child(Node::Raw(markup.to_owned())),
            MarkupMode::Parse => match self.parse_fragment(markup) {
                Ok(fragment) => parent.append_child(fragment),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        parent = parent.tag(),
                        "markup is not well-formed, inserting it unparsed"
                    );
                    parent.append_child(Node::Raw(markup.to_owned()));
                }
            },
        }
    }

    /// Append a node to the document body.
    pub fn append(&mut self, node: Node) {
        match node {
            Node::Fragment(children) => self.body.extend(children),
            node => self.body.push(node),
        }
    }

    /// Nodes appended so far.
    #[must_use]
    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Serialize a node with this document's output format.
    #[must_use]
    pub fn serialize(&self, node: &Node) -> String {
        Serializer::new(self.options.format).serialize(node)
    }

    /// Serialize the whole body.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let serializer = Serializer::new(self.options.format);
        let mut out = String::new();
        for node in &self.body {
            serializer.write_node(node, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_markup_parse_mode() {
        let document = Document::new();
        let mut div = document.create_element("div");
        document.insert_markup(&mut div, "<b>hi</b>");

        assert_eq!(div.children().len(), 1);
        assert_eq!(div.children()[0].as_element().unwrap().tag(), "b");
        assert_eq!(div.inner_markup(OutputFormat::Xml), "<b>hi</b>");
    }

    #[test]
    fn test_insert_markup_parse_mode_keeps_character_data() {
        let document = Document::new();
        let mut div = document.create_element("div");
        let markup = "<script>if (a > b) { t(\"&amp;\"); }</script><![CDATA[<x>]]>&bogus;";
        document.insert_markup(&mut div, markup);

        assert_eq!(div.children()[0].as_element().unwrap().tag(), "script");
        assert_eq!(div.inner_markup(OutputFormat::Xml), markup);
    }

    #[test]
    fn test_insert_markup_verbatim_mode() {
        let document = Document::with_options(DocumentOptions {
            markup: MarkupMode::Verbatim,
            ..DocumentOptions::default()
        });
        let mut div = document.create_element("div");
        document.insert_markup(&mut div, "<b>hi</b>");

        assert_eq!(div.children(), &[Node::Raw("<b>hi</b>".to_owned())]);
    }

    #[test]
    fn test_insert_malformed_markup_falls_back_to_raw() {
        let document = Document::new();
        let mut div = document.create_element("div");
        document.insert_markup(&mut div, "line one<br>line two");

        assert_eq!(
            div.children(),
            &[Node::Raw("line one<br>line two".to_owned())]
        );
    }

    #[test]
    fn test_insert_fragment_copies() {
        let document = Document::new();
        let fragment = document.parse_fragment("<i>x</i><i>y</i>").unwrap();
        let mut div = document.create_element("div");
        document.insert_fragment(&mut div, &fragment);

        assert_eq!(div.children().len(), 2);
        assert_eq!(div.inner_markup(OutputFormat::Xml), "<i>x</i><i>y</i>");
        assert!(matches!(fragment, Node::Fragment(ref nodes) if nodes.len() == 2));
    }

    #[test]
    fn test_append_and_to_markup() {
        let mut document = Document::with_options(DocumentOptions {
            format: OutputFormat::Html,
            ..DocumentOptions::default()
        });
        let p = document.create_element("p");
        let empty = document.create_fragment();
        let text = document.create_text_node("a & b");
        document.append(p.into());
        document.append(empty);
        document.append(text);

        assert_eq!(document.body().len(), 2);
        assert_eq!(document.to_markup(), "<p></p>a &amp; b");
    }
}
