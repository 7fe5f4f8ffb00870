//! Markup string to node parsing.

use std::io::BufRead;

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::entities::html_entities_to_unicode;
use crate::error::MarkupError;
use crate::node::{ElementNode, Node};

/// Element wrapped around the input so fragments with several roots parse.
const WRAPPER: &str = "ia-fragment";

/// Parse a markup string into a list of nodes.
///
/// The input must be well-formed XML. Only the element structure is parsed:
/// character data, entity references, CDATA sections and comments are kept
/// as raw nodes exactly as written, so inline scripts survive serialization
/// unchanged. Declarations and processing instructions are dropped.
pub(crate) fn parse_fragment(markup: &str) -> Result<Vec<Node>, MarkupError> {
    let wrapped = format!("<{WRAPPER}>{markup}</{WRAPPER}>");

    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => break,
            Event::Eof => return Ok(Vec::new()),
            _ => {}
        }
        buf.clear();
    }

    read_children(&mut reader)
}

/// Read nodes until the end tag of the current element.
fn read_children<R: BufRead>(reader: &mut Reader<R>) -> Result<Vec<Node>, MarkupError> {
    let mut buf = Vec::new();
    let mut nodes = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let mut element = start_element(reader, &e)?;
                for child in read_children(reader)? {
                    element.append_child(child);
                }
                nodes.push(Node::Element(element));
            }
            Event::Empty(e) => {
                nodes.push(Node::Element(start_element(reader, &e)?));
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?;
                push_raw(&mut nodes, &text);
            }
            Event::GeneralRef(e) => {
                let name = reader.decoder().decode(&e)?;
                push_raw(&mut nodes, &format!("&{name};"));
            }
            Event::CData(e) => {
                let data = reader.decoder().decode(&e)?;
                push_raw(&mut nodes, &format!("<![CDATA[{data}]]>"));
            }
            Event::Comment(e) => {
                let comment = reader.decoder().decode(&e)?;
                push_raw(&mut nodes, &format!("<!--{comment}-->"));
            }
            Event::End(_) | Event::Eof => return Ok(nodes),
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn start_element<R: BufRead>(
    reader: &Reader<R>,
    e: &BytesStart,
) -> Result<ElementNode, MarkupError> {
    let name = e.name();
    let tag = reader.decoder().decode(name.as_ref())?;
    let mut element = ElementNode::new(tag);
    for attr in e.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        let value = reader.decoder().decode(&attr.value)?;
        let value = html_entities_to_unicode(&value);
        element.set_attribute(key, unescape(&value)?);
    }
    Ok(element)
}

/// Append raw markup, merging with a preceding raw node.
fn push_raw(nodes: &mut Vec<Node>, markup: &str) {
    if let Some(Node::Raw(last)) = nodes.last_mut() {
        last.push_str(markup);
    } else {
        nodes.push(Node::Raw(markup.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(value: &str) -> Node {
        Node::Raw(value.to_owned())
    }

    #[test]
    fn test_parse_simple_element() {
        let nodes = parse_fragment("<b>hi</b>").unwrap();

        assert_eq!(nodes.len(), 1);
        let b = nodes[0].as_element().unwrap();
        assert_eq!(b.tag(), "b");
        assert_eq!(b.children(), &[raw("hi")]);
    }

    #[test]
    fn test_parse_multiple_roots_and_text() {
        let nodes = parse_fragment("before<br />after<i>x</i>").unwrap();

        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0], raw("before"));
        assert_eq!(nodes[1].as_element().unwrap().tag(), "br");
        assert_eq!(nodes[2], raw("after"));
        assert_eq!(nodes[3].as_element().unwrap().tag(), "i");
    }

    #[test]
    fn test_parse_attributes_in_order() {
        let nodes = parse_fragment(r#"<img src="a.png" alt="x &amp; y&nbsp;z" />"#).unwrap();

        let img = nodes[0].as_element().unwrap();
        let attrs: Vec<_> = img.attributes().collect();
        assert_eq!(attrs, vec![("src", "a.png"), ("alt", "x & y\u{00a0}z")]);
    }

    #[test]
    fn test_parse_keeps_text_as_written() {
        let nodes = parse_fragment("a &lt; b&nbsp;c &bogus; > d").unwrap();

        assert_eq!(nodes, vec![raw("a &lt; b&nbsp;c &bogus; > d")]);
    }

    #[test]
    fn test_parse_keeps_comments() {
        let nodes = parse_fragment("<!-- tracking code -->").unwrap();

        assert_eq!(nodes, vec![raw("<!-- tracking code -->")]);
    }

    #[test]
    fn test_parse_keeps_cdata() {
        let nodes = parse_fragment("<script><![CDATA[if (a < b) {}]]></script>").unwrap();

        let script = nodes[0].as_element().unwrap();
        assert_eq!(script.children(), &[raw("<![CDATA[if (a < b) {}]]>")]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_fragment("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mismatched_tags_fails() {
        assert!(parse_fragment("<b><i>x</b></i>").is_err());
    }
}
