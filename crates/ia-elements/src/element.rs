//! Render contract shared by every element.
//!
//! An element decides for itself whether it is worth rendering
//! ([`Element::is_valid`]). Invalid elements still render: they produce
//! [`Element::empty_node`], so assembling a document never fails because one
//! element is only partially configured.
//!
//! Elements that can carry unescaped content implement
//! [`RawContentElement`] on top, which stores the content in a
//! [`RawContent`] and provides the `attach_*` builders.

use ia_dom::{Document, Node, is_text_empty};

/// A renderable document element.
pub trait Element {
    /// Whether the element has enough content to render.
    ///
    /// Recomputed on every call.
    fn is_valid(&self) -> bool;

    /// Render the element as exactly one node for `document`.
    ///
    /// Implementations check [`is_valid`](Self::is_valid) first and return
    /// [`empty_node`](Self::empty_node) when it fails. Rendering does not
    /// change the element, so repeated calls give equal nodes.
    fn to_node(&self, document: &Document) -> Node;

    /// Placeholder rendered in place of an invalid element.
    ///
    /// Defaults to an empty fragment, which serializes to nothing.
    fn empty_node(&self, document: &Document) -> Node {
        document.create_fragment()
    }

    /// Render and serialize with the document's output format.
    fn render(&self, document: &Document) -> String {
        document.serialize(&self.to_node(document))
    }
}

/// Unescaped content attached to an element.
///
/// Both forms may be set at once; [`resolve`](Self::resolve) decides which
/// one is used. The content is trusted as-is. Nothing is sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawContent {
    fragment: Option<Node>,
    markup: Option<String>,
}

/// The raw content an element should render, after precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsafeContent<'a> {
    /// A prebuilt node tree.
    Fragment(&'a Node),
    /// A literal markup string.
    Markup(&'a str),
    /// Nothing usable is attached.
    None,
}

impl RawContent {
    /// Store a prebuilt node, replacing any previous one.
    pub fn set_fragment(&mut self, fragment: Node) {
        self.fragment = Some(fragment);
    }

    /// Store a markup string, replacing any previous one.
    pub fn set_markup(&mut self, markup: impl Into<String>) {
        self.markup = Some(markup.into());
    }

    /// Attached fragment, as stored.
    #[must_use]
    pub fn fragment(&self) -> Option<&Node> {
        self.fragment.as_ref()
    }

    /// Attached markup string, as stored.
    #[must_use]
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Pick the content to render.
    ///
    /// A non-blank fragment wins over non-blank markup. Blank values are
    /// treated as absent, using the same rule as every other blank check.
    #[must_use]
    pub fn resolve(&self) -> UnsafeContent<'_> {
        if let Some(fragment) = self.fragment.as_ref().filter(|node| !node.is_blank()) {
            return UnsafeContent::Fragment(fragment);
        }
        match self.markup.as_deref() {
            Some(markup) if !is_text_empty(markup) => UnsafeContent::Markup(markup),
            _ => UnsafeContent::None,
        }
    }

    /// Whether any usable content is attached.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !matches!(self.resolve(), UnsafeContent::None)
    }
}

/// Input accepted by [`RawContentElement::with_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawHtml {
    /// Prebuilt node tree.
    Fragment(Node),
    /// Markup string.
    Markup(String),
}

impl From<Node> for RawHtml {
    fn from(node: Node) -> Self {
        Self::Fragment(node)
    }
}

impl From<String> for RawHtml {
    fn from(markup: String) -> Self {
        Self::Markup(markup)
    }
}

impl From<&str> for RawHtml {
    fn from(markup: &str) -> Self {
        Self::Markup(markup.to_owned())
    }
}

/// Element that carries unescaped content.
///
/// The caller asserts attached content is safe to embed verbatim; the
/// consumer is expected to sandbox it.
pub trait RawContentElement: Element + Sized {
    /// Stored raw content.
    fn raw_content(&self) -> &RawContent;

    /// Mutable access to the stored raw content.
    fn raw_content_mut(&mut self) -> &mut RawContent;

    /// Attach a prebuilt node for unescaped insertion.
    #[must_use]
    fn attach_raw_fragment(mut self, fragment: Node) -> Self {
        self.raw_content_mut().set_fragment(fragment);
        self
    }

    /// Attach a markup string for unescaped insertion.
    #[must_use]
    fn attach_raw_markup_text(mut self, markup: impl Into<String>) -> Self {
        self.raw_content_mut().set_markup(markup);
        self
    }

    /// Attach either form, routed by type.
    #[must_use]
    fn with_html(self, html: impl Into<RawHtml>) -> Self {
        match html.into() {
            RawHtml::Fragment(fragment) => self.attach_raw_fragment(fragment),
            RawHtml::Markup(markup) => self.attach_raw_markup_text(markup),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Element with no attributes of its own: a bare `div` of raw content.
    #[derive(Default)]
    struct Snippet {
        raw: RawContent,
    }

    impl Element for Snippet {
        fn is_valid(&self) -> bool {
            self.raw.is_present()
        }

        fn to_node(&self, document: &Document) -> Node {
            if !self.is_valid() {
                return self.empty_node(document);
            }
            let mut div = document.create_element("div");
            match self.raw.resolve() {
                UnsafeContent::Fragment(fragment) => document.insert_fragment(&mut div, fragment),
                UnsafeContent::Markup(markup) => document.insert_markup(&mut div, markup),
                UnsafeContent::None => {}
            }
            div.into()
        }
    }

    impl RawContentElement for Snippet {
        fn raw_content(&self) -> &RawContent {
            &self.raw
        }

        fn raw_content_mut(&mut self) -> &mut RawContent {
            &mut self.raw
        }
    }

    fn text(value: &str) -> Node {
        Node::Text(value.to_owned())
    }

    #[test]
    fn test_resolve_nothing_attached() {
        assert_eq!(RawContent::default().resolve(), UnsafeContent::None);
    }

    #[test]
    fn test_resolve_fragment_wins_over_markup() {
        let mut raw = RawContent::default();
        raw.set_markup("<b>text</b>");
        raw.set_fragment(text("fragment"));

        assert_eq!(raw.resolve(), UnsafeContent::Fragment(&text("fragment")));
    }

    #[test]
    fn test_resolve_blank_fragment_falls_through() {
        let mut raw = RawContent::default();
        raw.set_fragment(Node::Fragment(vec![text("  ")]));
        raw.set_markup("<b>text</b>");

        assert_eq!(raw.resolve(), UnsafeContent::Markup("<b>text</b>"));
    }

    #[test]
    fn test_resolve_blank_markup_is_absent() {
        let mut raw = RawContent::default();
        raw.set_markup(" \n ");

        assert_eq!(raw.resolve(), UnsafeContent::None);
        assert!(!raw.is_present());
        assert_eq!(raw.markup(), Some(" \n "));
    }

    #[test]
    fn test_attach_overwrites() {
        let snippet = Snippet::default()
            .attach_raw_markup_text("first")
            .attach_raw_markup_text("second");

        assert_eq!(snippet.raw_content().markup(), Some("second"));
    }

    #[test]
    fn test_with_html_routes_by_type() {
        let from_str = Snippet::default().with_html("<i>x</i>");
        assert_eq!(from_str.raw_content().markup(), Some("<i>x</i>"));
        assert!(from_str.raw_content().fragment().is_none());

        let from_node = Snippet::default().with_html(text("x"));
        assert_eq!(from_node.raw_content().fragment(), Some(&text("x")));
        assert!(from_node.raw_content().markup().is_none());
    }

    #[test]
    fn test_default_validity_policy() {
        assert!(!Snippet::default().is_valid());
        assert!(!Snippet::default().attach_raw_markup_text("").is_valid());
        assert!(Snippet::default().attach_raw_markup_text("x").is_valid());
        assert!(Snippet::default().attach_raw_fragment(text("x")).is_valid());
    }

    #[test]
    fn test_invalid_renders_empty_node() {
        let document = Document::new();
        let node = Snippet::default().to_node(&document);

        assert!(node.is_empty_fragment());
        assert_eq!(Snippet::default().render(&document), "");
    }

    #[test]
    fn test_render_uses_document_format() {
        let document = Document::new();
        let snippet = Snippet::default().attach_raw_markup_text("<br />");

        assert_eq!(snippet.render(&document), "<div><br /></div>");
    }
}
