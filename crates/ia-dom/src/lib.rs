//! Target markup tree for Instant Articles elements.
//!
//! Elements render into a [`Document`]: they create nodes through it, insert
//! raw content with its unescaped insertion operations, and serialize with
//! its [`OutputFormat`].
//!
//! # Example
//!
//! ```
//! use ia_dom::{Document, Node};
//!
//! let mut document = Document::new();
//! let mut figure = document.create_element("figure");
//! figure.set_attribute("class", "op-tracker");
//! document.insert_markup(&mut figure, "<b>hi</b>");
//! document.append(Node::from(figure));
//!
//! assert_eq!(
//!     document.to_markup(),
//!     r#"<figure class="op-tracker"><b>hi</b></figure>"#
//! );
//! ```

mod document;
mod entities;
mod error;
mod node;
mod parser;
mod serializer;
mod text;

pub use document::{Document, DocumentOptions, MarkupMode};
pub use error::MarkupError;
pub use node::{ElementNode, Node};
pub use serializer::{OutputFormat, Serializer};
pub use text::is_text_empty;
