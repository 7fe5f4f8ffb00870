//! Validated Instant Articles elements.
//!
//! Every element implements [`Element`]: a validity gate plus rendering
//! into an [`ia_dom::Document`]. Elements that carry unescaped content also
//! implement [`RawContentElement`].
//!
//! # Example
//!
//! ```
//! use ia_dom::Document;
//! use ia_elements::{Analytics, Element, RawContentElement};
//!
//! let document = Document::new();
//!
//! let tracker = Analytics::create().with_source("https://example.com/track");
//! assert_eq!(
//!     tracker.render(&document),
//!     r#"<figure class="op-tracker"><iframe src="https://example.com/track"></iframe></figure>"#
//! );
//!
//! let inline = Analytics::create().attach_raw_markup_text("<b>hi</b>");
//! assert!(inline.is_valid());
//!
//! // Nothing configured: renders an empty placeholder instead of failing.
//! assert!(!Analytics::create().is_valid());
//! assert_eq!(Analytics::create().render(&document), "");
//! ```

mod analytics;
mod element;

pub use analytics::{Analytics, TRACKER_CLASS};
pub use element::{Element, RawContent, RawContentElement, RawHtml, UnsafeContent};
