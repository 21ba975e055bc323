// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A self-contained WHATWG HTML5 parser.
//!
//! The pipeline is byte stream → [encoding sniffer](encoding) → code
//! points → [tokenizer] → tokens → [tree builder](tree_builder) → an
//! arena [`Document`](dom::Document). Two serializers close the loop: a
//! round-trippable HTML emitter in [`serialize`] and the line-based tree
//! dump used by the html5lib conformance suite in [`dom::dump`].
//!
//! Most callers only need the [`driver`] entry points:
//!
//! ```ignore
//! let result = html5kit::parse_document("<p>Hello</p>", Default::default())?;
//! println!("{}", html5kit::dump::to_test_format(&result.document));
//! ```

#![allow(clippy::new_without_default)]

#[macro_use]
mod macros;

pub mod data;
pub mod dom;
pub mod driver;
pub mod encoding;
pub mod error;
pub mod serialize;
pub mod tag;
pub mod tokenizer;
pub mod tree_builder;

mod util {
    pub mod buffer_queue;
    pub mod smallcharset;
    pub mod str;
}

pub use util::buffer_queue::BufferQueue;
pub use util::smallcharset::SmallCharSet;

pub use dom::dump;
pub use dom::{Document, Node, NodeData, NodeId};
pub use driver::{
    parse_document, parse_document_bytes, parse_fragment, parse_fragment_bytes, tokenize,
    tokenize_to, FatalError, FragmentContext, ParseOpts, ParseResult,
};
pub use error::ParseError;
pub use tag::{TagId, TagSet};

/// Re-export of the tendril crate, the string storage used throughout.
pub mod tendril {
    pub use ::tendril::*;
}

pub use ::tendril::StrTendril;

/// A qualified (namespace + local) name for elements and attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualName {
    pub ns: Ns,
    pub local: StrTendril,
}

impl QualName {
    #[inline]
    pub fn new(ns: Ns, local: StrTendril) -> QualName {
        QualName { ns, local }
    }

    pub fn html(local: &str) -> QualName {
        QualName {
            ns: Ns::Html,
            local: StrTendril::from_slice(local),
        }
    }
}

/// The namespaces the HTML parsing algorithm can produce.
///
/// `None` is the attribute default; `XLink`/`Xml`/`XmlNs` only appear on
/// attributes adjusted inside foreign content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ns {
    None,
    Html,
    Svg,
    MathMl,
    XLink,
    Xml,
    XmlNs,
}

impl Ns {
    /// The namespace URL, as used in DOM APIs.
    pub fn url(self) -> &'static str {
        match self {
            Ns::None => "",
            Ns::Html => "http://www.w3.org/1999/xhtml",
            Ns::Svg => "http://www.w3.org/2000/svg",
            Ns::MathMl => "http://www.w3.org/1998/Math/MathML",
            Ns::XLink => "http://www.w3.org/1999/xlink",
            Ns::Xml => "http://www.w3.org/XML/1998/namespace",
            Ns::XmlNs => "http://www.w3.org/2000/xmlns/",
        }
    }

    /// The prefix used by the html5lib tree dump (`xlink href="…"`).
    pub fn dump_prefix(self) -> Option<&'static str> {
        match self {
            Ns::XLink => Some("xlink"),
            Ns::Xml => Some("xml"),
            Ns::XmlNs => Some("xmlns"),
            _ => None,
        }
    }
}

/// A tag attribute. The namespace is `Ns::None` except for attributes
/// adjusted inside foreign content (`xlink:href` and friends).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: QualName,
    pub value: StrTendril,
}

/// A 1-based source position, tracked by the tokenizer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub line: u64,
    pub column: u64,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}
