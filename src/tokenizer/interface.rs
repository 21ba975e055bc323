// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tokens the tokenizer emits and the sink trait that consumes them.

use tendril::StrTendril;

use crate::error::ParseError;
use crate::tag::TagId;
use crate::tokenizer::states;
use crate::{Attribute, Ns, Position};

pub use self::TagKind::{EndTag, StartTag};

/// A `<!DOCTYPE …>` token.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub struct Doctype {
    pub name: Option<StrTendril>,
    pub public_id: Option<StrTendril>,
    pub system_id: Option<StrTendril>,
    pub force_quirks: bool,
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A start- or end-tag token.
///
/// `name` is the ASCII-lowercased tag name; `id` is its interned
/// [`TagId`], computed once at emit time so downstream dispatch never
/// compares strings for predefined tags.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: StrTendril,
    pub id: TagId,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    /// Are two tags the same, ignoring attribute order and the
    /// self-closing flag? Used by the active-formatting "Noah's Ark"
    /// clause.
    pub fn equiv_modulo_attr_order(&self, other: &Tag) -> bool {
        if (self.kind != other.kind) || (self.name != other.name) {
            return false;
        }

        if self.attrs.len() != other.attrs.len() {
            return false;
        }
        self.attrs.iter().all(|a| {
            other
                .attrs
                .iter()
                .any(|b| a.name == b.name && a.value == b.value)
        })
    }

    /// Value of an (un-namespaced) attribute, if present.
    pub fn get_attribute(&self, name: &str) -> Option<&StrTendril> {
        self.attrs
            .iter()
            .find(|attr| attr.name.ns == Ns::None && &*attr.name.local == name)
            .map(|attr| &attr.value)
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum Token {
    Doctype(Doctype),
    Tag(Tag),
    Comment(StrTendril),
    Characters(StrTendril),
    NullCharacter,
    Eof,
    Error(ParseError),
}

/// What the sink wants the tokenizer to do after a token, including the
/// raw-text mode feedback loop described by the tree construction rules.
#[derive(Debug, PartialEq)]
#[must_use]
pub enum TokenSinkResult<Handle> {
    Continue,
    /// A `</script>` completed; the caller should run the script.
    Script(Handle),
    Plaintext,
    RawData(states::RawKind),
}

/// Types which can receive tokens from the tokenizer.
pub trait TokenSink {
    type Handle;

    fn process_token(&mut self, token: Token, pos: Position) -> TokenSinkResult<Self::Handle>;

    /// Tokenization reached the end of the input.
    fn end(&mut self) {}

    /// Used in the markup declaration open state to decide whether
    /// `<![CDATA[` opens a real CDATA section. The default keeps CDATA
    /// sections as bogus comments, which is correct outside foreign
    /// content.
    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        false
    }
}
