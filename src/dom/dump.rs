// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tree serializations used for conformance checking and text
//! extraction.

use std::fmt::Write;

use tendril::StrTendril;

use crate::dom::{Document, NodeData, NodeId};
use crate::tag::TagSet;
use crate::tag_set;
use crate::Ns;

/// Dump the children of `root` in the html5lib tree-construction
/// format: one node per `| `-prefixed line, two spaces of indent per
/// depth, attributes sorted by name, template contents under a
/// `content` pseudo-node.
pub fn to_test_format_of(doc: &Document, root: NodeId) -> String {
    let mut buf = String::new();
    for child in doc.children(root) {
        dump_node(doc, &mut buf, 1, child);
    }
    // Drop the trailing newline; fixture files do not have one.
    buf.pop();
    buf
}

/// Dump a whole document, starting at the document node.
pub fn to_test_format(doc: &Document) -> String {
    to_test_format_of(doc, Document::DOCUMENT_NODE_ID)
}

fn dump_node(doc: &Document, buf: &mut String, indent: usize, id: NodeId) {
    buf.push('|');
    buf.extend(std::iter::repeat(' ').take(indent));

    let node = &doc[id];
    match node.data {
        NodeData::Document | NodeData::Fragment { .. } | NodeData::Hole => {
            panic!("unexpected node in dump")
        },

        NodeData::Doctype {
            ref name,
            ref public_id,
            ref system_id,
            ..
        } => {
            buf.push_str("<!DOCTYPE ");
            if let Some(name) = name {
                buf.push_str(name);
            }
            if public_id.is_some() || system_id.is_some() {
                let _ = write!(
                    buf,
                    " \"{}\" \"{}\"",
                    public_id.as_deref().unwrap_or(""),
                    system_id.as_deref().unwrap_or("")
                );
            }
            buf.push_str(">\n");
        },

        NodeData::Text(ref contents) => {
            buf.push('"');
            buf.push_str(contents);
            buf.push_str("\"\n");
        },

        NodeData::Comment(ref contents) => {
            buf.push_str("<!-- ");
            buf.push_str(contents);
            buf.push_str(" -->\n");
        },

        NodeData::Elem(ref elem) => {
            buf.push('<');
            match elem.name.ns {
                Ns::Svg => buf.push_str("svg "),
                Ns::MathMl => buf.push_str("math "),
                _ => (),
            }
            buf.push_str(&elem.name.local);
            buf.push_str(">\n");

            let mut attrs: Vec<_> = elem.attrs.iter().collect();
            attrs.sort_by(|x, y| x.name.local.cmp(&y.name.local));

            for attr in attrs {
                buf.push('|');
                buf.extend(std::iter::repeat(' ').take(indent + 2));
                if let Some(prefix) = attr.name.ns.dump_prefix() {
                    buf.push_str(prefix);
                    buf.push(' ');
                }
                let _ = writeln!(buf, "{}=\"{}\"", attr.name.local, attr.value);
            }
        },
    }

    for child in doc.children(id) {
        dump_node(doc, buf, indent + 2, child);
    }

    if let NodeData::Elem(ref elem) = node.data {
        if let Some(contents) = elem.template_contents {
            buf.push('|');
            buf.extend(std::iter::repeat(' ').take(indent + 2));
            buf.push_str("content\n");
            for child in doc.children(contents) {
                dump_node(doc, buf, indent + 4, child);
            }
        }
    }
}

/// Phrasing-level tags whose boundaries do not separate text runs.
const INLINE: TagSet = tag_set!(A B Big Br Code Em Font I Img Nobr Rb Rp Rt Rtc Ruby S Small
    Span Strike Strong Sub Sup Tt U Var Wbr);

/// Elements whose character data is not reader text.
const OPAQUE: TagSet = tag_set!(Script Style Template Title);

/// Extract readable text below `root`.
///
/// Text runs from sibling block-level elements are joined with a single
/// space; inline-element boundaries contribute nothing, so spacing
/// inside a paragraph is exactly what the markup contained. Leading and
/// trailing whitespace of the final result is trimmed.
pub fn to_text(doc: &Document, root: NodeId) -> String {
    let mut out = String::new();
    collect_text(doc, root, &mut out);
    let trimmed = out.trim_matches(|c: char| c.is_ascii_whitespace());
    trimmed.to_string()
}

fn collect_text(doc: &Document, id: NodeId, out: &mut String) {
    match doc[id].data {
        NodeData::Text(ref t) => out.push_str(t),
        NodeData::Comment(_) | NodeData::Doctype { .. } | NodeData::Hole => {},
        NodeData::Elem(ref elem) => {
            if OPAQUE.contains(elem.tag_id) {
                return;
            }
            let block = elem.name.ns != Ns::Html || !INLINE.contains(elem.tag_id);
            if block {
                block_separator(out);
            }
            for child in doc.children(id) {
                collect_text(doc, child, out);
            }
            if block {
                block_separator(out);
            }
        },
        NodeData::Document | NodeData::Fragment { .. } => {
            for child in doc.children(id) {
                collect_text(doc, child, out);
            }
        },
    }
}

fn block_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with(|c: char| c.is_ascii_whitespace()) {
        out.push(' ');
    }
}

/// Convenience wrapper returning a tendril, matching the string type
/// used elsewhere in the tree.
pub fn text_content(doc: &Document, root: NodeId) -> StrTendril {
    doc.text(root).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Attribute, QualName};

    #[test]
    fn dump_shapes() {
        let mut doc = Document::new();
        let html = doc.create_element(QualName::html("html"), vec![]);
        doc.append(Document::DOCUMENT_NODE_ID, html);
        let body = doc.create_element(
            QualName::html("body"),
            vec![
                Attribute {
                    name: QualName::new(crate::Ns::None, "z".into()),
                    value: "1".into(),
                },
                Attribute {
                    name: QualName::new(crate::Ns::None, "a".into()),
                    value: "2".into(),
                },
            ],
        );
        doc.append(html, body);
        let t = doc.create_node(NodeData::Text("hi".into()));
        doc.append(body, t);
        let c = doc.create_node(NodeData::Comment("note".into()));
        doc.append(body, c);

        assert_eq!(
            to_test_format(&doc),
            "| <html>\n|   <body>\n|     a=\"2\"\n|     z=\"1\"\n|     \"hi\"\n|     <!-- note -->"
        );
    }

    #[test]
    fn text_spacing() {
        let mut doc = Document::new();
        let body = doc.create_element(QualName::html("body"), vec![]);
        doc.append(Document::DOCUMENT_NODE_ID, body);

        let p = doc.create_element(QualName::html("p"), vec![]);
        doc.append(body, p);
        let strong = doc.create_element(QualName::html("strong"), vec![]);
        doc.append(p, strong);
        let hello = doc.create_node(NodeData::Text("Hello".into()));
        doc.append(strong, hello);
        let rest = doc.create_node(NodeData::Text(", World!".into()));
        doc.append(p, rest);

        let div = doc.create_element(QualName::html("div"), vec![]);
        doc.append(body, div);
        let more = doc.create_node(NodeData::Text("Next".into()));
        doc.append(div, more);

        // No space inside the inline boundary; one space between blocks.
        assert_eq!(to_text(&doc, body), "Hello, World! Next");
    }
}
