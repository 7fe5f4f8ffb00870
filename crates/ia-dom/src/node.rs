//! Nodes of the target markup tree.

use crate::serializer::{OutputFormat, Serializer};
use crate::text::is_text_empty;

/// A node in the target tree.
///
/// `Raw` holds markup that is written out verbatim, without escaping. It is
/// only produced by the unsafe insertion paths on [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with attributes and children.
    Element(ElementNode),
    /// Text content, escaped on output.
    Text(String),
    /// Unescaped markup.
    Raw(String),
    /// Ordered group of nodes with no wrapper of its own.
    Fragment(Vec<Node>),
}

impl Node {
    /// Whether the node carries no content worth rendering.
    ///
    /// Elements are never blank. Text and raw markup are blank when
    /// [`is_text_empty`] holds; fragments when every child is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Element(_) => false,
            Self::Text(text) | Self::Raw(text) => is_text_empty(text),
            Self::Fragment(children) => children.iter().all(Self::is_blank),
        }
    }

    /// Borrow the element, if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Whether this is an empty fragment.
    #[must_use]
    pub fn is_empty_fragment(&self) -> bool {
        matches!(self, Self::Fragment(children) if children.is_empty())
    }
}

impl From<ElementNode> for Node {
    fn from(element: ElementNode) -> Self {
        Self::Element(element)
    }
}

/// Element node: tag, attributes in insertion order, children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl ElementNode {
    /// Create an element with the given tag and nothing else.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Element tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(key, _)| *key == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Append a child. Fragments are flattened into their children.
    pub fn append_child(&mut self, node: impl Into<Node>) {
        match node.into() {
            Node::Fragment(children) => {
                for child in children {
                    self.append_child(child);
                }
            }
            node => self.children.push(node),
        }
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child nodes that are elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Serialized children, without this element's own tags.
    #[must_use]
    pub fn inner_markup(&self, format: OutputFormat) -> String {
        let serializer = Serializer::new(format);
        let mut out = String::new();
        for child in &self.children {
            serializer.write_node(child, &mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = ElementNode::new("iframe");
        element.set_attribute("src", "a");
        element.set_attribute("width", "10");
        element.set_attribute("src", "b");

        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("src", "b"), ("width", "10")]);
    }

    #[test]
    fn test_append_fragment_flattens() {
        let mut element = ElementNode::new("div");
        element.append_child(Node::Fragment(vec![
            Node::Text("a".to_owned()),
            Node::Fragment(vec![Node::Text("b".to_owned())]),
        ]));

        assert_eq!(
            element.children(),
            &[Node::Text("a".to_owned()), Node::Text("b".to_owned())]
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(Node::Text("  \n".to_owned()).is_blank());
        assert!(Node::Raw(String::new()).is_blank());
        assert!(Node::Fragment(Vec::new()).is_blank());
        assert!(Node::Fragment(vec![Node::Text(" ".to_owned())]).is_blank());
        assert!(!Node::Element(ElementNode::new("img")).is_blank());
        assert!(!Node::Raw("<b>hi</b>".to_owned()).is_blank());
    }

    #[test]
    fn test_child_elements() {
        let mut figure = ElementNode::new("figure");
        figure.append_child(Node::Text(String::new()));
        figure.append_child(ElementNode::new("iframe"));

        let tags: Vec<_> = figure.child_elements().map(ElementNode::tag).collect();
        assert_eq!(tags, vec!["iframe"]);
    }
}
