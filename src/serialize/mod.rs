// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Round-trippable HTML serialization.
//!
//! The core emission rules (void elements, raw-text elements, the
//! leading-newline quirk of `pre`/`textarea`/`listing`, escaping) are
//! fixed; everything else is a [`SerializeOpts`] knob exercised by the
//! html5lib serializer fixtures.

use std::io::{self, Write};

use crate::dom::{Document, NodeData, NodeId};
use crate::tag::{TagId, TagSet};
use crate::tag_set;
use crate::Ns;

/// Whether to write the node itself, or only its children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalScope {
    IncludeNode,
    ChildrenOnly,
}

/// How attribute values are quoted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AttrValueQuoting {
    Always,
    /// Leave the value unquoted when it is non-empty and contains no
    /// whitespace, quotes, backticks, `=` or `>`.
    WhenNeeded,
}

#[derive(Copy, Clone)]
pub struct SerializeOpts {
    /// Is scripting enabled? Affects whether `<noscript>` content is
    /// treated as raw text.
    pub scripting_enabled: bool,

    pub traversal_scope: TraversalScope,

    pub quote_attr_values: AttrValueQuoting,

    /// `"` or `'`.
    pub quote_char: char,

    /// Emit `<br/>` instead of `<br>` for void elements.
    pub use_trailing_solidus: bool,

    /// Emit `selected` instead of `selected="selected"` for the known
    /// boolean attributes.
    pub minimize_boolean_attributes: bool,

    /// Also escape `<` and `>` inside attribute values.
    pub escape_lt_in_attrs: bool,

    /// Escape text inside RCDATA elements (`title`, `textarea`). When
    /// false their content is emitted verbatim, like raw text.
    pub escape_rcdata: bool,

    /// Collapse whitespace runs outside `pre`, `textarea`, `script`
    /// and `style`.
    pub strip_whitespace: bool,

    /// Ensure a `<meta charset=…>` declaring `encoding` inside `<head>`,
    /// dropping any charset declarations already present.
    pub inject_meta_charset: bool,

    /// The encoding name used by `inject_meta_charset`.
    pub encoding: Option<&'static str>,
}

impl Default for SerializeOpts {
    fn default() -> SerializeOpts {
        SerializeOpts {
            scripting_enabled: true,
            traversal_scope: TraversalScope::ChildrenOnly,
            quote_attr_values: AttrValueQuoting::Always,
            quote_char: '"',
            use_trailing_solidus: false,
            minimize_boolean_attributes: false,
            escape_lt_in_attrs: false,
            escape_rcdata: true,
            strip_whitespace: false,
            inject_meta_charset: false,
            encoding: None,
        }
    }
}

const VOID_ELEMENTS: TagSet = tag_set!(Area Base Basefont Bgsound Br Col Embed Frame Hr Img
    Input Keygen Link Meta Param Source Track Wbr);

const RAW_TEXT: TagSet = tag_set!(Script Style Xmp Iframe Noembed Noframes Plaintext);

const RCDATA: TagSet = tag_set!(Title Textarea);

const PRE_LIKE: TagSet = tag_set!(Pre Textarea Listing);

const WHITESPACE_PRESERVING: TagSet = tag_set!(Pre Textarea Script Style);

fn is_boolean_attribute(name: &str) -> bool {
    matches!(
        name,
        "allowfullscreen"
            | "async"
            | "autofocus"
            | "autoplay"
            | "checked"
            | "compact"
            | "controls"
            | "declare"
            | "default"
            | "defer"
            | "disabled"
            | "formnovalidate"
            | "hidden"
            | "ismap"
            | "itemscope"
            | "loop"
            | "multiple"
            | "muted"
            | "nohref"
            | "nomodule"
            | "noresize"
            | "noshade"
            | "novalidate"
            | "nowrap"
            | "open"
            | "readonly"
            | "required"
            | "reversed"
            | "scoped"
            | "seamless"
            | "selected"
    )
}

/// Serialize the subtree at `node` to `writer`.
pub fn serialize<W: Write>(
    writer: &mut W,
    doc: &Document,
    node: NodeId,
    opts: SerializeOpts,
) -> io::Result<()> {
    let mut ser = Serializer::new(writer, opts);
    match opts.traversal_scope {
        TraversalScope::IncludeNode => ser.serialize_node(doc, node)?,
        TraversalScope::ChildrenOnly => {
            for child in doc.children(node) {
                ser.serialize_node(doc, child)?;
            }
        },
    }
    Ok(())
}

/// Serialize to an owned string.
pub fn serialize_to_string(doc: &Document, node: NodeId, opts: SerializeOpts) -> String {
    let mut out = Vec::new();
    serialize(&mut out, doc, node, opts).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("serializer emitted invalid UTF-8")
}

struct ElemInfo {
    html_id: Option<TagId>,
    ignore_children: bool,
    processed_first_child: bool,
}

struct Serializer<'wr, Wr> {
    writer: &'wr mut Wr,
    opts: SerializeOpts,
    stack: Vec<ElemInfo>,
}

impl<'wr, Wr: Write> Serializer<'wr, Wr> {
    fn new(writer: &'wr mut Wr, opts: SerializeOpts) -> Serializer<'wr, Wr> {
        Serializer {
            writer,
            opts,
            stack: vec![ElemInfo {
                html_id: None,
                ignore_children: false,
                processed_first_child: false,
            }],
        }
    }

    fn parent(&mut self) -> &mut ElemInfo {
        self.stack.last_mut().expect("no parent ElemInfo")
    }

    fn serialize_node(&mut self, doc: &Document, id: NodeId) -> io::Result<()> {
        match doc[id].data {
            NodeData::Elem(ref elem) => {
                if self.opts.inject_meta_charset && declares_charset(doc, id) {
                    return Ok(());
                }

                self.start_elem(doc, id)?;

                let inject_here = self.opts.inject_meta_charset
                    && doc[id].is_elem(Ns::Html, TagId::Head);
                if inject_here {
                    if let Some(encoding) = self.opts.encoding {
                        write!(self.writer, "<meta charset={}{}{}",
                            self.opts.quote_char, encoding, self.opts.quote_char)?;
                        self.writer.write_all(b">")?;
                        self.parent().processed_first_child = true;
                    }
                }

                let contents = elem.template_contents;
                match contents {
                    Some(contents) => {
                        for child in doc.children(contents) {
                            self.serialize_node(doc, child)?;
                        }
                    },
                    None => {
                        for child in doc.children(id) {
                            self.serialize_node(doc, child)?;
                        }
                    },
                }

                self.end_elem(doc, id)
            },

            NodeData::Doctype { ref name, .. } => {
                self.write_doctype(name.as_deref().unwrap_or(""))
            },

            NodeData::Text(ref contents) => self.write_text(contents),

            NodeData::Comment(ref contents) => self.write_comment(contents),

            NodeData::Document | NodeData::Fragment { .. } => {
                for child in doc.children(id) {
                    self.serialize_node(doc, child)?;
                }
                Ok(())
            },

            NodeData::Hole => Ok(()),
        }
    }

    fn start_elem(&mut self, doc: &Document, id: NodeId) -> io::Result<()> {
        let elem = doc[id].as_element().expect("not an element");
        let html_id = (elem.name.ns == Ns::Html).then_some(elem.tag_id);

        if self.parent().ignore_children {
            self.stack.push(ElemInfo {
                html_id,
                ignore_children: true,
                processed_first_child: false,
            });
            return Ok(());
        }

        self.writer.write_all(b"<")?;
        self.writer.write_all(elem.name.local.as_bytes())?;
        for attr in &elem.attrs {
            self.writer.write_all(b" ")?;
            self.write_attr_name(&attr.name)?;

            if self.opts.minimize_boolean_attributes
                && attr.name.ns == Ns::None
                && is_boolean_attribute(&attr.name.local)
                && (attr.value.is_empty() || attr.value.eq_ignore_ascii_case(&attr.name.local))
            {
                continue;
            }

            self.writer.write_all(b"=")?;
            self.write_attr_value(&attr.value)?;
        }

        let ignore_children = elem.name.ns == Ns::Html && VOID_ELEMENTS.contains(elem.tag_id);
        if ignore_children && self.opts.use_trailing_solidus {
            self.writer.write_all(b"/")?;
        }
        self.writer.write_all(b">")?;

        self.parent().processed_first_child = true;

        self.stack.push(ElemInfo {
            html_id,
            ignore_children,
            processed_first_child: false,
        });

        Ok(())
    }

    fn end_elem(&mut self, doc: &Document, id: NodeId) -> io::Result<()> {
        let elem = doc[id].as_element().expect("not an element");
        let info = self.stack.pop().expect("no ElemInfo");
        if info.ignore_children {
            return Ok(());
        }

        self.writer.write_all(b"</")?;
        self.writer.write_all(elem.name.local.as_bytes())?;
        self.writer.write_all(b">")
    }

    fn write_attr_name(&mut self, name: &crate::QualName) -> io::Result<()> {
        let prefix = match name.ns {
            Ns::XLink => "xlink:",
            Ns::Xml => "xml:",
            Ns::XmlNs if &*name.local != "xmlns" => "xmlns:",
            _ => "",
        };
        self.writer.write_all(prefix.as_bytes())?;
        self.writer.write_all(name.local.as_bytes())
    }

    fn write_attr_value(&mut self, value: &str) -> io::Result<()> {
        let needs_quotes = value.is_empty()
            || value.contains(|c: char| {
                matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '=' | '>' | '`' | '"' | '\'')
            });

        match self.opts.quote_attr_values {
            AttrValueQuoting::WhenNeeded if !needs_quotes => {
                self.write_escaped_attr(value, '\0')
            },
            _ => {
                let q = self.opts.quote_char;
                write!(self.writer, "{q}")?;
                self.write_escaped_attr(value, q)?;
                write!(self.writer, "{q}")
            },
        }
    }

    fn write_escaped_attr(&mut self, text: &str, quote_char: char) -> io::Result<()> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_all(b"&amp;")?,
                '\u{00A0}' => self.writer.write_all(b"&nbsp;")?,
                '"' if quote_char == '"' => self.writer.write_all(b"&quot;")?,
                '\'' if quote_char == '\'' => self.writer.write_all(b"&#39;")?,
                '<' if self.opts.escape_lt_in_attrs => self.writer.write_all(b"&lt;")?,
                '>' if self.opts.escape_lt_in_attrs => self.writer.write_all(b"&gt;")?,
                c => write!(self.writer, "{c}")?,
            }
        }
        Ok(())
    }

    fn write_escaped_text(&mut self, text: &str) -> io::Result<()> {
        for c in text.chars() {
            match c {
                '&' => self.writer.write_all(b"&amp;")?,
                '\u{00A0}' => self.writer.write_all(b"&nbsp;")?,
                '<' => self.writer.write_all(b"&lt;")?,
                '>' => self.writer.write_all(b"&gt;")?,
                c => write!(self.writer, "{c}")?,
            }
        }
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let parent_id = self.parent().html_id;

        let prepend_lf = text.starts_with('\n') && {
            let parent = self.parent();
            !parent.processed_first_child
                && parent.html_id.is_some_and(|id| PRE_LIKE.contains(id))
        };
        if prepend_lf {
            self.writer.write_all(b"\n")?;
        }
        self.parent().processed_first_child = true;

        let escape = match parent_id {
            Some(id) if RAW_TEXT.contains(id) => false,
            Some(id) if RCDATA.contains(id) => self.opts.escape_rcdata,
            Some(TagId::Noscript) => !self.opts.scripting_enabled,
            _ => true,
        };

        let stripped;
        let text = if self.opts.strip_whitespace
            && !parent_id.is_some_and(|id| WHITESPACE_PRESERVING.contains(id))
        {
            stripped = collapse_whitespace(text);
            &stripped
        } else {
            text
        };

        if escape {
            self.write_escaped_text(text)
        } else {
            self.writer.write_all(text.as_bytes())
        }
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        self.parent().processed_first_child = true;
        self.writer.write_all(b"<!--")?;
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"-->")
    }

    fn write_doctype(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_all(b"<!DOCTYPE ")?;
        self.writer.write_all(name.as_bytes())?;
        self.writer.write_all(b">")
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C') {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

/// Does this element declare a document encoding?
fn declares_charset(doc: &Document, id: NodeId) -> bool {
    let Some(elem) = doc[id].as_element() else {
        return false;
    };
    if !doc[id].is_elem(Ns::Html, TagId::Meta) {
        return false;
    }
    if elem.attr("charset").is_some() {
        return true;
    }
    elem.attr("http-equiv")
        .is_some_and(|v| v.eq_ignore_ascii_case("content-type"))
        && elem.attr("content").is_some()
}
