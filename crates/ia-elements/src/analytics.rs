//! Analytics tracking code for an article.
//!
//! Renders as:
//!
//! ```text
//! <figure class="op-tracker">
//!   <iframe src="https://www.example.com/trackingcode"></iframe>
//! </figure>
//! ```
//!
//! or, with inline tracking code:
//!
//! ```text
//! <figure class="op-tracker">
//!   <iframe><!-- full analytics code --></iframe>
//! </figure>
//! ```

use ia_dom::{Document, Node, is_text_empty};

use crate::element::{Element, RawContent, RawContentElement, UnsafeContent};

/// Class marking the container as a tracker.
pub const TRACKER_CLASS: &str = "op-tracker";

/// Analytics tracker element.
///
/// Valid when it has a non-blank `source` or usable raw content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analytics {
    source: String,
    raw: RawContent,
}

impl Analytics {
    /// Create a tracker with no source and no raw content.
    #[must_use]
    pub fn create() -> Self {
        Self {
            source: String::new(),
            raw: RawContent::default(),
        }
    }

    /// Set the URI the tracking frame loads. Stored as given.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// URI the tracking frame loads.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Element for Analytics {
    fn is_valid(&self) -> bool {
        !is_text_empty(&self.source) || self.raw.is_present()
    }

    fn to_node(&self, document: &Document) -> Node {
        if !self.is_valid() {
            tracing::debug!("analytics tracker has no source or content, rendering empty node");
            return self.empty_node(document);
        }

        let mut figure = document.create_element("figure");
        let mut iframe = document.create_element("iframe");

        if !is_text_empty(&self.source) {
            iframe.set_attribute("src", &self.source);
        }

        // Frame content goes in unescaped; readers sandbox the iframe.
        match self.raw.resolve() {
            UnsafeContent::Fragment(fragment) => document.insert_fragment(&mut iframe, fragment),
            UnsafeContent::Markup(markup) => document.insert_markup(&mut iframe, markup),
            UnsafeContent::None => iframe.append_child(document.create_text_node("")),
        }

        figure.append_child(iframe);
        figure.set_attribute("class", TRACKER_CLASS);
        figure.into()
    }
}

impl RawContentElement for Analytics {
    fn raw_content(&self) -> &RawContent {
        &self.raw
    }

    fn raw_content_mut(&mut self) -> &mut RawContent {
        &mut self.raw
    }
}
