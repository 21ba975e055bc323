// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The HTML5 tree builder: consumes tokens, maintains the stacks the
//! parsing algorithm requires, and grows an arena [`Document`].

use std::borrow::Cow;
use std::collections::VecDeque;
use std::mem;

use log::{debug, warn};
use tendril::StrTendril;

use self::tag_sets::*;
use self::types::*;

use crate::dom::{Document, NodeData, NodeId};
use crate::error::ParseError;
use crate::tag::{TagId, TagSet};
use crate::tokenizer::states as tok_state;
use crate::tokenizer::states::RawKind;
use crate::tokenizer::{self, Doctype, EndTag, StartTag, Tag, TokenSink, TokenSinkResult};
use crate::util::str::is_ascii_whitespace;
use crate::{Attribute, Ns, Position, QualName};

mod data;
mod rules;
mod tag_sets;
mod types;

/// A document's quirks mode, set by doctype classification.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Debug)]
pub enum QuirksMode {
    Quirks,
    LimitedQuirks,
    NoQuirks,
}

/// Tree builder options, with an impl for `Default`.
#[derive(Copy, Clone)]
pub struct TreeBuilderOpts {
    /// Is scripting enabled? Affects how `<noscript>` is parsed.
    pub scripting_enabled: bool,

    /// Is this document the `srcdoc` of an `<iframe>`? Affects the
    /// quirks heuristics for absent or bad doctypes.
    pub iframe_srcdoc: bool,

    /// Drop the DOCTYPE (if any) from the tree?
    pub drop_doctype: bool,

    /// Initial quirks mode. Default: NoQuirks.
    pub quirks_mode: QuirksMode,
}

impl Default for TreeBuilderOpts {
    fn default() -> TreeBuilderOpts {
        TreeBuilderOpts {
            scripting_enabled: false,
            iframe_srcdoc: false,
            drop_doctype: false,
            quirks_mode: QuirksMode::NoQuirks,
        }
    }
}

enum NodeOrText {
    AppendNode(NodeId),
    AppendText(StrTendril),
}
use NodeOrText::{AppendNode, AppendText};

pub(crate) enum PushFlag {
    Push,
    NoPush,
}
use PushFlag::{NoPush, Push};

enum Bookmark {
    Replace(NodeId),
    InsertAfter(NodeId),
}

/// The HTML tree builder.
pub struct TreeBuilder {
    opts: TreeBuilderOpts,

    /// The document being built.
    pub doc: Document,

    /// Parse errors, in order of occurrence.
    errors: Vec<ParseError>,

    /// Insertion mode.
    mode: InsertionMode,

    /// Original insertion mode, used by Text and InTableText modes.
    orig_mode: Option<InsertionMode>,

    /// Stack of template insertion modes.
    template_modes: Vec<InsertionMode>,

    /// Pending table character tokens.
    pending_table_text: Vec<(SplitStatus, StrTendril)>,

    /// Quirks mode as set by the doctype.
    quirks_mode: QuirksMode,

    /// Stack of open elements, most recently added at end.
    open_elems: Vec<NodeId>,

    /// List of active formatting elements.
    active_formatting: Vec<FormatEntry>,

    /// Head element pointer.
    head_elem: Option<NodeId>,

    /// Form element pointer.
    form_elem: Option<NodeId>,

    /// Frameset-ok flag.
    frameset_ok: bool,

    /// Ignore a following U+000A LINE FEED?
    ignore_lf: bool,

    /// Is foster parenting enabled?
    foster_parenting: bool,

    /// The context element for the fragment parsing algorithm.
    context_elem: Option<NodeId>,

    /// Position of the token being processed, for error records.
    pos: Position,
}

impl TreeBuilder {
    /// Create a new tree builder for a full document parse.
    pub fn new(opts: TreeBuilderOpts) -> TreeBuilder {
        TreeBuilder {
            opts,
            doc: Document::new(),
            errors: vec![],
            mode: InsertionMode::Initial,
            orig_mode: None,
            template_modes: vec![],
            pending_table_text: vec![],
            quirks_mode: opts.quirks_mode,
            open_elems: vec![],
            active_formatting: vec![],
            head_elem: None,
            form_elem: None,
            frameset_ok: true,
            ignore_lf: false,
            foster_parenting: false,
            context_elem: None,
            pos: Position::START,
        }
    }

    /// Create a new tree builder for fragment parsing with the given
    /// context element name.
    pub fn new_for_fragment(opts: TreeBuilderOpts, context: QualName) -> TreeBuilder {
        let mut tb = TreeBuilder::new(opts);

        // The context element exists for scope/reset purposes but is
        // never linked into the document.
        let context_elem = tb.doc.create_element(context, vec![]);
        let context_is_template = tb.doc[context_elem].is_elem(Ns::Html, TagId::Template);
        tb.context_elem = Some(context_elem);
        if context_is_template {
            tb.template_modes.push(InsertionMode::InTemplate);
        }

        // A new html element is the root, and the only element on the
        // stack of open elements.
        tb.create_root(vec![]);
        tb.mode = tb.reset_insertion_mode();

        tb
    }

    /// The tokenizer state the fragment context element calls for.
    pub fn tokenizer_state_for_context_elem(&self) -> tok_state::State {
        let Some(context_elem) = self.context_elem else {
            return tok_state::Data;
        };
        let elem = self.doc[context_elem].as_element().expect("no context element");
        if elem.name.ns != Ns::Html {
            return tok_state::Data;
        }
        match elem.tag_id {
            TagId::Title | TagId::Textarea => tok_state::RawData(tok_state::Rcdata),

            TagId::Style
            | TagId::Xmp
            | TagId::Iframe
            | TagId::Noembed
            | TagId::Noframes => tok_state::RawData(tok_state::Rawtext),

            TagId::Script => tok_state::RawData(tok_state::ScriptData),

            TagId::Noscript => {
                if self.opts.scripting_enabled {
                    tok_state::RawData(tok_state::Rawtext)
                } else {
                    tok_state::Data
                }
            },

            TagId::Plaintext => tok_state::Plaintext,

            _ => tok_state::Data,
        }
    }

    /// Consume the builder, returning the document, the recorded
    /// errors, and the final quirks mode.
    pub fn finish(self) -> (Document, Vec<ParseError>, QuirksMode) {
        (self.doc, self.errors, self.quirks_mode)
    }

    /// The quirks mode decided so far.
    pub fn quirks_mode(&self) -> QuirksMode {
        self.quirks_mode
    }

    fn parse_error(&mut self, code: impl Into<Cow<'static, str>>) {
        self.errors.push(ParseError::new(code, self.pos));
    }

    fn debug_step(&self, mode: InsertionMode, token: &Token) {
        debug!("processing {token:?} in insertion mode {mode:?}");
    }

    fn process_to_completion(&mut self, mut token: Token) -> TokenSinkResult<NodeId> {
        // Queue of additional tokens yet to be processed. This stays
        // empty in the common case where we don't split whitespace.
        let mut more_tokens = VecDeque::new();

        loop {
            let should_have_acknowledged_self_closing_flag = matches!(
                token,
                Token::Tag(Tag {
                    self_closing: true,
                    kind: StartTag,
                    ..
                })
            );
            let result = if self.is_foreign(&token) {
                self.step_foreign(token)
            } else {
                let mode = self.mode;
                self.step(mode, token)
            };
            match result {
                ProcessResult::Done => {
                    if should_have_acknowledged_self_closing_flag {
                        self.parse_error("non-void-html-element-start-tag-with-trailing-solidus");
                    }
                    let Some(new_token) = more_tokens.pop_front() else {
                        return TokenSinkResult::Continue;
                    };
                    token = new_token;
                },
                ProcessResult::DoneAckSelfClosing => {
                    let Some(new_token) = more_tokens.pop_front() else {
                        return TokenSinkResult::Continue;
                    };
                    token = new_token;
                },
                ProcessResult::Reprocess(m, t) => {
                    self.mode = m;
                    token = t;
                },
                ProcessResult::SplitWhitespace(mut buf) => {
                    let p = buf.pop_front_char_run(is_ascii_whitespace);
                    let Some((first, is_ws)) = p else {
                        let Some(new_token) = more_tokens.pop_front() else {
                            return TokenSinkResult::Continue;
                        };
                        token = new_token;
                        continue;
                    };
                    let status = if is_ws {
                        SplitStatus::Whitespace
                    } else {
                        SplitStatus::NotWhitespace
                    };
                    token = Token::Characters(status, first);

                    if buf.len32() > 0 {
                        more_tokens.push_back(Token::Characters(SplitStatus::NotSplit, buf));
                    }
                },
                ProcessResult::Script(node) => {
                    assert!(more_tokens.is_empty());
                    return TokenSinkResult::Script(node);
                },
                ProcessResult::ToPlaintext => {
                    assert!(more_tokens.is_empty());
                    return TokenSinkResult::Plaintext;
                },
                ProcessResult::ToRawData(k) => {
                    assert!(more_tokens.is_empty());
                    return TokenSinkResult::RawData(k);
                },
            }
        }
    }

    /// Are we parsing an HTML fragment?
    pub fn is_fragment(&self) -> bool {
        self.context_elem.is_some()
    }

    //
    // Element identity helpers.
    //

    fn elem_name(&self, id: NodeId) -> (Ns, TagId) {
        let elem = self.doc[id].as_element().expect("not an element");
        (elem.name.ns, elem.tag_id)
    }

    fn html_elem_named(&self, node: NodeId, tag: TagId) -> bool {
        debug_assert!(tag != TagId::Other);
        self.doc[node].is_elem(Ns::Html, tag)
    }

    /// Does this element match the (possibly non-predefined) tag name?
    fn node_matches_tag(&self, node: NodeId, tag: &Tag) -> bool {
        let Some(elem) = self.doc[node].as_element() else {
            return false;
        };
        elem.name.ns == Ns::Html
            && elem.tag_id == tag.id
            && (tag.id != TagId::Other || elem.name.local == tag.name)
    }

    fn current_node(&self) -> NodeId {
        *self.open_elems.last().expect("no current element")
    }

    fn adjusted_current_node(&self) -> NodeId {
        if self.open_elems.len() == 1 {
            if let Some(ctx) = self.context_elem {
                return ctx;
            }
        }
        self.current_node()
    }

    fn current_node_in(&self, set: TagSet) -> bool {
        let (ns, id) = self.elem_name(self.current_node());
        ns == Ns::Html && set.contains(id)
    }

    fn current_node_named(&self, tag: TagId) -> bool {
        self.html_elem_named(self.current_node(), tag)
    }

    /// Get the first element on the stack, which is the `<html>`
    /// element.
    fn html_elem(&self) -> NodeId {
        self.open_elems[0]
    }

    /// Get the second element on the stack, if it's an HTML body
    /// element.
    fn body_elem(&self) -> Option<NodeId> {
        if self.open_elems.len() <= 1 {
            return None;
        }
        let node = self.open_elems[1];
        if self.html_elem_named(node, TagId::Body) {
            Some(node)
        } else {
            None
        }
    }

    //
    // Scope queries.
    //

    fn in_scope<P>(&self, scope: Scope, pred: P) -> bool
    where
        P: Fn(&Self, NodeId) -> bool,
    {
        for &node in self.open_elems.iter().rev() {
            if pred(self, node) {
                return true;
            }
            let (ns, id) = self.elem_name(node);
            if scope.contains(ns, id) {
                return false;
            }
        }

        // supposed to be impossible, because <html> is always in scope
        false
    }

    fn in_scope_named(&self, scope: Scope, tag: TagId) -> bool {
        self.in_scope(scope, |this, node| this.html_elem_named(node, tag))
    }

    fn elem_in(&self, node: NodeId, set: TagSet) -> bool {
        let (ns, id) = self.elem_name(node);
        ns == Ns::Html && set.contains(id)
    }

    fn elem_special(&self, node: NodeId) -> bool {
        let (ns, id) = self.elem_name(node);
        SPECIAL.contains(ns, id)
    }

    fn in_html_elem_named(&self, tag: TagId) -> bool {
        self.open_elems
            .iter()
            .any(|&node| self.html_elem_named(node, tag))
    }

    //
    // Stack manipulation.
    //

    fn push(&mut self, elem: NodeId) {
        self.open_elems.push(elem);
    }

    fn pop(&mut self) -> NodeId {
        self.open_elems.pop().expect("no current element")
    }

    fn remove_from_stack(&mut self, elem: NodeId) {
        if let Some(position) = self.open_elems.iter().rposition(|&x| x == elem) {
            self.open_elems.remove(position);
        }
    }

    // Pop elements until the current element is in the set.
    fn pop_until_current(&mut self, tag_set: TagSet) {
        while !self.current_node_in(tag_set) {
            self.open_elems.pop();
        }
    }

    // Pop elements until an element matching the predicate has been
    // popped. Returns the number of elements popped.
    fn pop_until<P>(&mut self, pred: P) -> usize
    where
        P: Fn(&Self, NodeId) -> bool,
    {
        let mut n = 0;
        loop {
            n += 1;
            match self.open_elems.pop() {
                None => break,
                Some(elem) => {
                    if pred(self, elem) {
                        break;
                    }
                },
            }
        }
        n
    }

    fn pop_until_named(&mut self, tag: TagId) -> usize {
        self.pop_until(|this, elem| this.html_elem_named(elem, tag))
    }

    fn pop_until_in(&mut self, set: TagSet) -> usize {
        self.pop_until(|this, elem| this.elem_in(elem, set))
    }

    /// Pop elements until one with the given name has been popped.
    /// Signal an error if it was not the first one.
    fn expect_to_close(&mut self, tag: TagId) {
        if self.pop_until_named(tag) != 1 {
            self.parse_error("unexpected-end-tag");
        }
    }

    //
    // Implied end tags.
    //

    fn generate_implied_end_tags(&mut self, set: TagSet) {
        loop {
            let Some(&elem) = self.open_elems.last() else {
                return;
            };
            let (ns, id) = self.elem_name(elem);
            if !(ns == Ns::Html && set.contains(id)) {
                return;
            }
            self.pop();
        }
    }

    fn generate_implied_end_except(&mut self, except: TagId) {
        self.generate_implied_end_tags(CURSORY_IMPLIED_END.without(except));
    }

    fn close_p_element(&mut self) {
        self.generate_implied_end_tags(CURSORY_IMPLIED_END.without(TagId::P));
        self.expect_to_close(TagId::P);
    }

    fn close_p_element_in_button_scope(&mut self) {
        if self.in_scope_named(BUTTON_SCOPE, TagId::P) {
            self.close_p_element();
        }
    }

    fn close_the_cell(&mut self) {
        self.generate_implied_end_tags(CURSORY_IMPLIED_END);
        if self.pop_until_in(TD_TH) != 1 {
            self.parse_error("unexpected-cell-end-tag");
        }
        self.clear_active_formatting_to_marker();
    }

    /// Signal an error depending on the state of the stack of open
    /// elements at the end of the body.
    fn check_body_end(&mut self) {
        for i in 0..self.open_elems.len() {
            let elem = self.open_elems[i];
            if !self.elem_in(elem, BODY_END_OK) {
                self.parse_error("expected-closing-tag-but-got-eof");
                return;
            }
        }
    }

    //
    // Insertion.
    //

    /// Find the appropriate place for inserting a node, honoring foster
    /// parenting and template contents.
    fn appropriate_place_for_insertion(&self, override_target: Option<NodeId>) -> InsertionPoint {
        let target = override_target.unwrap_or_else(|| self.current_node());
        if !(self.foster_parenting && self.elem_in(target, FOSTER_TARGET)) {
            if self.html_elem_named(target, TagId::Template) {
                // No foster parenting (inside template).
                let contents = self.template_contents_of(target);
                return InsertionPoint::LastChild(contents);
            }
            // No foster parenting (the common case).
            return InsertionPoint::LastChild(target);
        }

        // Foster parenting.
        let mut iter = self.open_elems.iter().rev().peekable();
        while let Some(&elem) = iter.next() {
            if self.html_elem_named(elem, TagId::Template) {
                let contents = self.template_contents_of(elem);
                return InsertionPoint::LastChild(contents);
            } else if self.html_elem_named(elem, TagId::Table) {
                return InsertionPoint::TableFosterParenting {
                    table: elem,
                    prev_element: **iter.peek().unwrap(),
                };
            }
        }
        InsertionPoint::LastChild(self.html_elem())
    }

    fn template_contents_of(&self, elem: NodeId) -> NodeId {
        self.doc[elem]
            .as_element()
            .and_then(|e| e.template_contents)
            .expect("not a template element")
    }

    fn insert_at(&mut self, insertion_point: InsertionPoint, child: NodeOrText) {
        match insertion_point {
            InsertionPoint::LastChild(parent) => self.append_to(parent, child),
            InsertionPoint::TableFosterParenting {
                table,
                prev_element,
            } => {
                if self.doc[table].parent().is_some() {
                    self.insert_before_sibling(table, child)
                } else {
                    self.append_to(prev_element, child)
                }
            },
        }
    }

    fn append_to(&mut self, parent: NodeId, child: NodeOrText) {
        let id = match child {
            AppendText(text) => {
                // Merge into a preceding text node if there is one.
                if let Some(last) = self.doc[parent].last_child() {
                    if let NodeData::Text(ref mut t) = self.doc[last].data {
                        t.push_tendril(&text);
                        return;
                    }
                }
                self.doc.create_node(NodeData::Text(text))
            },
            AppendNode(node) => node,
        };
        self.doc.append(parent, id);
    }

    fn insert_before_sibling(&mut self, sibling: NodeId, child: NodeOrText) {
        let id = match child {
            AppendText(text) => {
                if let Some(prev) = self.doc[sibling].prev_sibling() {
                    if let NodeData::Text(ref mut t) = self.doc[prev].data {
                        t.push_tendril(&text);
                        return;
                    }
                }
                self.doc.create_node(NodeData::Text(text))
            },
            AppendNode(node) => node,
        };
        self.doc.insert_before(sibling, id);
    }

    // Insert at the "appropriate place for inserting a node".
    fn insert_appropriately(&mut self, child: NodeOrText, override_target: Option<NodeId>) {
        let insertion_point = self.appropriate_place_for_insertion(override_target);
        self.insert_at(insertion_point, child);
    }

    fn append_text(&mut self, text: StrTendril) -> ProcessResult {
        self.insert_appropriately(AppendText(text), None);
        ProcessResult::Done
    }

    fn append_comment(&mut self, text: StrTendril) -> ProcessResult {
        let comment = self.doc.create_node(NodeData::Comment(text));
        self.insert_appropriately(AppendNode(comment), None);
        ProcessResult::Done
    }

    fn append_comment_to_doc(&mut self, text: StrTendril) -> ProcessResult {
        let comment = self.doc.create_node(NodeData::Comment(text));
        self.doc.append(Document::DOCUMENT_NODE_ID, comment);
        ProcessResult::Done
    }

    fn append_comment_to_html(&mut self, text: StrTendril) -> ProcessResult {
        let target = self.html_elem();
        let comment = self.doc.create_node(NodeData::Comment(text));
        self.doc.append(target, comment);
        ProcessResult::Done
    }

    //
    // Creating and inserting elements.
    //

    fn create_root(&mut self, attrs: Vec<Attribute>) {
        let elem = self.doc.create_element(QualName::html("html"), attrs);
        self.push(elem);
        self.doc.append(Document::DOCUMENT_NODE_ID, elem);
    }

    fn insert_element(
        &mut self,
        push: PushFlag,
        ns: Ns,
        name: StrTendril,
        attrs: Vec<Attribute>,
    ) -> NodeId {
        let qname = QualName::new(ns, name);
        let elem = self.doc.create_element(qname, attrs);

        let insertion_point = self.appropriate_place_for_insertion(None);
        self.insert_at(insertion_point, AppendNode(elem));

        match push {
            Push => self.push(elem),
            NoPush => (),
        }
        elem
    }

    fn insert_element_for(&mut self, tag: Tag) -> NodeId {
        self.insert_element(Push, Ns::Html, tag.name, tag.attrs)
    }

    fn insert_and_pop_element_for(&mut self, tag: Tag) -> NodeId {
        self.insert_element(NoPush, Ns::Html, tag.name, tag.attrs)
    }

    fn insert_phantom(&mut self, tag: TagId) -> NodeId {
        self.insert_element(Push, Ns::Html, StrTendril::from_slice(tag.name()), vec![])
    }

    /// Add any attributes the element doesn't already have, preserving
    /// existing values. Used by stray `<html>` and `<body>` tags.
    fn add_attrs_if_missing(&mut self, target: NodeId, attrs: Vec<Attribute>) {
        let elem = self.doc[target].as_element_mut().expect("not an element");
        for attr in attrs {
            if !elem.attrs.iter().any(|a| a.name == attr.name) {
                elem.attrs.push(attr);
            }
        }
    }

    //
    // Raw text elements.
    //

    // Switch to `Text` insertion mode, save the old mode, and switch
    // the tokenizer to a raw-data state. The latter only takes effect
    // after the current `process_token` returns!
    fn to_raw_text_mode(&mut self, k: RawKind) -> ProcessResult {
        self.orig_mode = Some(self.mode);
        self.mode = InsertionMode::Text;
        ProcessResult::ToRawData(k)
    }

    // The generic raw text / RCDATA parsing algorithm.
    fn parse_raw_data(&mut self, tag: Tag, k: RawKind) -> ProcessResult {
        self.insert_element_for(tag);
        self.to_raw_text_mode(k)
    }

    //
    // Active formatting elements.
    //

    fn clear_active_formatting_to_marker(&mut self) {
        loop {
            match self.active_formatting.pop() {
                None | Some(FormatEntry::Marker) => break,
                _ => (),
            }
        }
    }

    fn position_in_active_formatting(&self, element: NodeId) -> Option<usize> {
        self.active_formatting.iter().position(|n| match n {
            FormatEntry::Marker => false,
            FormatEntry::Element(handle, _) => *handle == element,
        })
    }

    /// Iterate (index, node, tag) from the end to the last marker.
    fn active_formatting_end_to_marker(
        &self,
    ) -> impl Iterator<Item = (usize, NodeId, &Tag)> + '_ {
        self.active_formatting
            .iter()
            .enumerate()
            .rev()
            .map_while(|(i, entry)| match entry {
                FormatEntry::Marker => None,
                FormatEntry::Element(h, t) => Some((i, *h, t)),
            })
    }

    fn is_marker_or_open(&self, entry: &FormatEntry) -> bool {
        match *entry {
            FormatEntry::Marker => true,
            FormatEntry::Element(node, _) => self.open_elems.iter().rev().any(|&n| n == node),
        }
    }

    fn reconstruct_active_formatting_elements(&mut self) {
        {
            let Some(last) = self.active_formatting.last() else {
                return;
            };
            if self.is_marker_or_open(last) {
                return;
            }
        }

        // Step 3: rewind to the latest entry that is a marker or open.
        let mut entry_index = self.active_formatting.len() - 1;
        loop {
            if entry_index == 0 {
                break;
            }
            entry_index -= 1;
            if self.is_marker_or_open(&self.active_formatting[entry_index]) {
                entry_index += 1;
                break;
            }
        }

        // Steps 8-10: recreate each remaining entry and advance.
        loop {
            let tag = match self.active_formatting[entry_index] {
                FormatEntry::Element(_, ref t) => t.clone(),
                FormatEntry::Marker => {
                    panic!("Found marker during formatting element reconstruction")
                },
            };

            let new_element =
                self.insert_element(Push, Ns::Html, tag.name.clone(), tag.attrs.clone());
            self.active_formatting[entry_index] = FormatEntry::Element(new_element, tag);

            if entry_index == self.active_formatting.len() - 1 {
                break;
            }
            entry_index += 1;
        }
    }

    fn create_formatting_element_for(&mut self, tag: Tag) -> NodeId {
        // The "Noah's Ark" clause: at most three identical entries
        // since the last marker.
        let mut first_match = None;
        let mut matches = 0usize;
        for (i, _, old_tag) in self.active_formatting_end_to_marker() {
            if tag.equiv_modulo_attr_order(old_tag) {
                first_match = Some(i);
                matches += 1;
            }
        }

        if matches >= 3 {
            self.active_formatting
                .remove(first_match.expect("matches with no index"));
        }

        let elem = self.insert_element(Push, Ns::Html, tag.name.clone(), tag.attrs.clone());
        self.active_formatting
            .push(FormatEntry::Element(elem, tag));
        elem
    }

    //
    // The adoption agency algorithm.
    //

    fn adoption_agency(&mut self, subject: TagId) {
        // 1.
        if self.current_node_named(subject)
            && self
                .position_in_active_formatting(self.current_node())
                .is_none()
        {
            self.pop();
            return;
        }

        // 2. 3. 4.
        for _ in 0..8 {
            // 5.
            let maybe_fmt_entry = self
                .active_formatting_end_to_marker()
                .find(|&(_, _, tag)| tag.id == subject)
                .map(|(i, h, t)| (i, h, t.clone()));

            let Some((fmt_elem_index, fmt_elem, fmt_elem_tag)) = maybe_fmt_entry else {
                return self.process_end_tag_in_body(Tag {
                    kind: EndTag,
                    name: StrTendril::from_slice(subject.name()),
                    id: subject,
                    self_closing: false,
                    attrs: vec![],
                });
            };

            let Some(fmt_elem_stack_index) =
                self.open_elems.iter().rposition(|&n| n == fmt_elem)
            else {
                self.parse_error("adoption-agency-1.3");
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            // 7.
            if !self.in_scope(DEFAULT_SCOPE, |_, n| n == fmt_elem) {
                self.parse_error("adoption-agency-4.4");
                return;
            }

            // 8.
            if self.current_node() != fmt_elem {
                self.parse_error("adoption-agency-1.3");
            }

            // 9.
            let maybe_furthest_block = self
                .open_elems
                .iter()
                .enumerate()
                .skip(fmt_elem_stack_index)
                .find(|&(_, &open_element)| self.elem_special(open_element))
                .map(|(i, &h)| (i, h));

            let Some((furthest_block_index, furthest_block)) = maybe_furthest_block else {
                // 10.
                self.open_elems.truncate(fmt_elem_stack_index);
                self.active_formatting.remove(fmt_elem_index);
                return;
            };

            // 11.
            let common_ancestor = self.open_elems[fmt_elem_stack_index - 1];

            // 12.
            let mut bookmark = Bookmark::Replace(fmt_elem);

            // 13.
            let mut node;
            let mut node_index = furthest_block_index;
            let mut last_node = furthest_block;

            // 13.1.
            let mut inner_counter = 0;
            loop {
                // 13.2.
                inner_counter += 1;

                // 13.3.
                node_index -= 1;
                node = self.open_elems[node_index];

                // 13.4.
                if node == fmt_elem {
                    break;
                }

                // 13.5.
                if inner_counter > 3 {
                    if let Some(position) = self.position_in_active_formatting(node) {
                        self.active_formatting.remove(position);
                    }
                    self.open_elems.remove(node_index);
                    continue;
                }

                let Some(node_formatting_index) = self.position_in_active_formatting(node)
                else {
                    // 13.6.
                    self.open_elems.remove(node_index);
                    continue;
                };

                // 13.7.
                let tag = match self.active_formatting[node_formatting_index] {
                    FormatEntry::Element(h, ref t) => {
                        assert_eq!(h, node);
                        t.clone()
                    },
                    FormatEntry::Marker => panic!("Found marker during adoption agency"),
                };
                let new_element = self
                    .doc
                    .create_element(QualName::new(Ns::Html, tag.name.clone()), tag.attrs.clone());
                self.open_elems[node_index] = new_element;
                self.active_formatting[node_formatting_index] =
                    FormatEntry::Element(new_element, tag);
                node = new_element;

                // 13.8.
                if last_node == furthest_block {
                    bookmark = Bookmark::InsertAfter(node);
                }

                // 13.9.
                self.doc.unlink(last_node);
                self.doc.append(node, last_node);

                // 13.10.
                last_node = node;

                // 13.11.
            }

            // 14.
            self.doc.unlink(last_node);
            self.insert_appropriately(AppendNode(last_node), Some(common_ancestor));

            // 15.
            let new_element = self.doc.create_element(
                QualName::new(Ns::Html, fmt_elem_tag.name.clone()),
                fmt_elem_tag.attrs.clone(),
            );
            let new_entry = FormatEntry::Element(new_element, fmt_elem_tag);

            // 16.
            self.doc.reparent_children(furthest_block, new_element);

            // 17.
            self.doc.append(furthest_block, new_element);

            // 18.
            match bookmark {
                Bookmark::Replace(to_replace) => {
                    let index = self
                        .position_in_active_formatting(to_replace)
                        .expect("bookmark not found in active formatting elements");
                    self.active_formatting[index] = new_entry;
                },
                Bookmark::InsertAfter(previous) => {
                    let index = self
                        .position_in_active_formatting(previous)
                        .expect("bookmark not found in active formatting elements")
                        + 1;
                    self.active_formatting.insert(index, new_entry);
                    let old_index = self
                        .position_in_active_formatting(fmt_elem)
                        .expect("formatting element not found in active formatting elements");
                    self.active_formatting.remove(old_index);
                },
            }

            // 19.
            self.remove_from_stack(fmt_elem);
            let new_furthest_block_index = self
                .open_elems
                .iter()
                .position(|&n| n == furthest_block)
                .expect("furthest block missing from open element stack");
            self.open_elems
                .insert(new_furthest_block_index + 1, new_element);

            // 20.
        }
    }

    fn process_end_tag_in_body(&mut self, tag: Tag) {
        // Look back for a matching open element.
        let mut match_idx = None;
        let mut hit_special = false;
        for (i, &elem) in self.open_elems.iter().enumerate().rev() {
            if self.node_matches_tag(elem, &tag) {
                match_idx = Some(i);
                break;
            }

            if self.elem_special(elem) {
                hit_special = true;
                break;
            }
        }

        if hit_special {
            self.parse_error("unexpected-end-tag");
            return;
        }

        let Some(match_idx) = match_idx else {
            // Impossible in practice, because the root <html> element
            // is special.
            self.unexpected(&Token::Tag(tag));
            return;
        };

        self.generate_implied_end_except(tag.id);

        if match_idx != self.open_elems.len() - 1 {
            // mis-nested tags
            self.parse_error("unexpected-end-tag");
        }
        self.open_elems.truncate(match_idx);
    }

    fn handle_misnested_a_tags(&mut self) {
        let Some(node) = self
            .active_formatting_end_to_marker()
            .find(|&(_, n, _)| self.html_elem_named(n, TagId::A))
            .map(|(_, n, _)| n)
        else {
            return;
        };

        self.parse_error("unexpected-start-tag-implies-end-tag");
        self.adoption_agency(TagId::A);
        if let Some(index) = self.position_in_active_formatting(node) {
            self.active_formatting.remove(index);
        }
        self.remove_from_stack(node);
    }

    //
    // Mode bookkeeping.
    //

    fn unexpected(&mut self, token: &Token) -> ProcessResult {
        let code: Cow<'static, str> = match token {
            Token::Tag(Tag {
                kind: StartTag, ..
            }) => "unexpected-start-tag".into(),
            Token::Tag(Tag { kind: EndTag, .. }) => "unexpected-end-tag".into(),
            Token::Comment(_) => "unexpected-comment".into(),
            Token::Characters(..) => "unexpected-character".into(),
            Token::NullCharacter => "unexpected-null-character".into(),
            Token::Eof => "unexpected-eof".into(),
        };
        self.parse_error(code);
        ProcessResult::Done
    }

    fn stop_parsing(&mut self) -> ProcessResult {
        ProcessResult::Done
    }

    fn set_quirks_mode(&mut self, mode: QuirksMode) {
        self.quirks_mode = mode;
    }

    // Check <input> tags for type=hidden.
    fn is_type_hidden(&self, tag: &Tag) -> bool {
        match tag.get_attribute("type") {
            None => false,
            Some(v) => v.eq_ignore_ascii_case("hidden"),
        }
    }

    fn foster_parent_in_body(&mut self, token: Token) -> ProcessResult {
        warn!("foster parenting text or misplaced element");
        self.foster_parenting = true;
        let res = self.step(InsertionMode::InBody, token);
        self.foster_parenting = false;
        res
    }

    fn process_chars_in_table(&mut self, token: Token) -> ProcessResult {
        if self.current_node_in(TABLE_OUTER) {
            assert!(self.pending_table_text.is_empty());
            self.orig_mode = Some(self.mode);
            ProcessResult::Reprocess(InsertionMode::InTableText, token)
        } else {
            self.parse_error("unexpected-character-in-table");
            self.foster_parent_in_body(token)
        }
    }

    /// <https://html.spec.whatwg.org/multipage/#reset-the-insertion-mode-appropriately>
    fn reset_insertion_mode(&self) -> InsertionMode {
        for (i, &stack_node) in self.open_elems.iter().enumerate().rev() {
            let mut node = stack_node;
            let last = i == 0usize;
            if last {
                if let Some(ctx) = self.context_elem {
                    node = ctx;
                }
            }
            let (ns, id) = self.elem_name(node);
            if ns != Ns::Html {
                continue;
            }
            match id {
                TagId::Select => {
                    for &ancestor in self.open_elems[0..i].iter().rev() {
                        if self.html_elem_named(ancestor, TagId::Template) {
                            return InsertionMode::InSelect;
                        } else if self.html_elem_named(ancestor, TagId::Table) {
                            return InsertionMode::InSelectInTable;
                        }
                    }
                    return InsertionMode::InSelect;
                },
                TagId::Td | TagId::Th => {
                    if !last {
                        return InsertionMode::InCell;
                    }
                },
                TagId::Tr => return InsertionMode::InRow,
                TagId::Tbody | TagId::Thead | TagId::Tfoot => {
                    return InsertionMode::InTableBody;
                },
                TagId::Caption => return InsertionMode::InCaption,
                TagId::Colgroup => return InsertionMode::InColumnGroup,
                TagId::Table => return InsertionMode::InTable,
                TagId::Template => return *self.template_modes.last().unwrap(),
                TagId::Head => {
                    if !last {
                        return InsertionMode::InHead;
                    }
                },
                TagId::Body => return InsertionMode::InBody,
                TagId::Frameset => return InsertionMode::InFrameset,
                TagId::Html => match self.head_elem {
                    None => return InsertionMode::BeforeHead,
                    Some(_) => return InsertionMode::AfterHead,
                },
                _ => (),
            }
        }
        InsertionMode::InBody
    }

    //
    // Foreign content.
    //

    fn is_foreign(&self, token: &Token) -> bool {
        if let Token::Eof = *token {
            return false;
        }

        if self.open_elems.is_empty() {
            return false;
        }

        let current = self.adjusted_current_node();
        let (ns, id) = self.elem_name(current);
        if ns == Ns::Html {
            return false;
        }

        if ns == Ns::MathMl && MATHML_TEXT_INTEGRATION.contains(id) {
            match *token {
                Token::Characters(..) | Token::NullCharacter => return false,
                Token::Tag(Tag {
                    kind: StartTag,
                    id: tid,
                    ..
                }) if !matches!(tid, TagId::Mglyph | TagId::Malignmark) => {
                    return false;
                },
                _ => (),
            }
        }

        if ns == Ns::Svg && SVG_HTML_INTEGRATION.contains(id) {
            match *token {
                Token::Characters(..) | Token::NullCharacter => return false,
                Token::Tag(Tag { kind: StartTag, .. }) => return false,
                _ => (),
            }
        }

        if ns == Ns::MathMl && id == TagId::AnnotationXml {
            if let Token::Tag(Tag {
                kind: StartTag,
                id: TagId::Svg,
                ..
            }) = *token
            {
                return false;
            }
            if matches!(
                *token,
                Token::Characters(..) | Token::NullCharacter | Token::Tag(Tag { kind: StartTag, .. })
            ) {
                let elem = self.doc[current].as_element().unwrap();
                return !elem.is_annotation_xml_integration_point();
            }
        }

        true
    }

    fn enter_foreign(&mut self, mut tag: Tag, ns: Ns) -> ProcessResult {
        match ns {
            Ns::MathMl => adjust_mathml_attributes(&mut tag),
            Ns::Svg => adjust_svg_attributes(&mut tag),
            _ => (),
        }
        adjust_foreign_attributes(&mut tag);

        if tag.self_closing {
            self.insert_element(NoPush, ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(Push, ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    fn foreign_start_tag(&mut self, mut tag: Tag) -> ProcessResult {
        let (current_ns, _) = self.elem_name(self.adjusted_current_node());
        match current_ns {
            Ns::MathMl => adjust_mathml_attributes(&mut tag),
            Ns::Svg => {
                adjust_svg_tag_name(&mut tag);
                adjust_svg_attributes(&mut tag);
            },
            _ => (),
        }
        adjust_foreign_attributes(&mut tag);
        if tag.self_closing {
            self.insert_element(NoPush, current_ns, tag.name, tag.attrs);
            ProcessResult::DoneAckSelfClosing
        } else {
            self.insert_element(Push, current_ns, tag.name, tag.attrs);
            ProcessResult::Done
        }
    }

    fn unexpected_start_tag_in_foreign_content(&mut self, tag: Tag) -> ProcessResult {
        self.parse_error("unexpected-html-element-in-foreign-content");
        while !self.current_node_is_html_or_integration_point() {
            self.pop();
        }
        self.step(self.mode, Token::Tag(tag))
    }

    fn current_node_is_html_or_integration_point(&self) -> bool {
        let node = self.current_node();
        let (ns, id) = self.elem_name(node);
        match ns {
            Ns::Html => true,
            Ns::MathMl => {
                MATHML_TEXT_INTEGRATION.contains(id)
                    || self.doc[node]
                        .as_element()
                        .is_some_and(|e| e.is_annotation_xml_integration_point())
            },
            Ns::Svg => SVG_HTML_INTEGRATION.contains(id),
            _ => false,
        }
    }
}

impl TokenSink for TreeBuilder {
    type Handle = NodeId;

    fn process_token(
        &mut self,
        token: tokenizer::Token,
        pos: Position,
    ) -> TokenSinkResult<NodeId> {
        self.pos = pos;
        let ignore_lf = mem::take(&mut self.ignore_lf);

        // Handle `Error` and `Doctype`; convert everything else to the
        // local `Token` type.
        let token = match token {
            tokenizer::Token::Error(e) => {
                self.errors.push(e);
                return TokenSinkResult::Continue;
            },

            tokenizer::Token::Doctype(dt) => {
                if self.mode == InsertionMode::Initial {
                    let (err, quirk) = data::doctype_error_and_quirks(&dt, self.opts.iframe_srcdoc);
                    if err {
                        self.parse_error("unknown-doctype");
                    }
                    let Doctype {
                        name,
                        public_id,
                        system_id,
                        force_quirks,
                    } = dt;
                    if !self.opts.drop_doctype {
                        let doctype = self.doc.create_node(NodeData::Doctype {
                            name,
                            public_id,
                            system_id,
                            force_quirks,
                        });
                        self.doc.append(Document::DOCUMENT_NODE_ID, doctype);
                    }
                    self.set_quirks_mode(quirk);

                    self.mode = InsertionMode::BeforeHtml;
                } else {
                    self.parse_error("unexpected-doctype");
                }
                return TokenSinkResult::Continue;
            },

            tokenizer::Token::Tag(x) => Token::Tag(x),
            tokenizer::Token::Comment(x) => Token::Comment(x),
            tokenizer::Token::NullCharacter => Token::NullCharacter,
            tokenizer::Token::Eof => Token::Eof,

            tokenizer::Token::Characters(mut x) => {
                if ignore_lf && x.starts_with('\n') {
                    x.pop_front(1);
                }
                if x.is_empty() {
                    return TokenSinkResult::Continue;
                }
                Token::Characters(SplitStatus::NotSplit, x)
            },
        };

        self.process_to_completion(token)
    }

    fn end(&mut self) {
        self.open_elems.clear();
    }

    fn adjusted_current_node_present_but_not_in_html_namespace(&self) -> bool {
        !self.open_elems.is_empty() && self.elem_name(self.adjusted_current_node()).0 != Ns::Html
    }
}

//
// Foreign-content name and attribute fixups.
//

static SVG_TAG_FIXUPS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "altglyph" => "altGlyph",
    "altglyphdef" => "altGlyphDef",
    "altglyphitem" => "altGlyphItem",
    "animatecolor" => "animateColor",
    "animatemotion" => "animateMotion",
    "animatetransform" => "animateTransform",
    "clippath" => "clipPath",
    "feblend" => "feBlend",
    "fecolormatrix" => "feColorMatrix",
    "fecomponenttransfer" => "feComponentTransfer",
    "fecomposite" => "feComposite",
    "feconvolvematrix" => "feConvolveMatrix",
    "fediffuselighting" => "feDiffuseLighting",
    "fedisplacementmap" => "feDisplacementMap",
    "fedistantlight" => "feDistantLight",
    "fedropshadow" => "feDropShadow",
    "feflood" => "feFlood",
    "fefunca" => "feFuncA",
    "fefuncb" => "feFuncB",
    "fefuncg" => "feFuncG",
    "fefuncr" => "feFuncR",
    "fegaussianblur" => "feGaussianBlur",
    "feimage" => "feImage",
    "femerge" => "feMerge",
    "femergenode" => "feMergeNode",
    "femorphology" => "feMorphology",
    "feoffset" => "feOffset",
    "fepointlight" => "fePointLight",
    "fespecularlighting" => "feSpecularLighting",
    "fespotlight" => "feSpotLight",
    "fetile" => "feTile",
    "feturbulence" => "feTurbulence",
    "foreignobject" => "foreignObject",
    "glyphref" => "glyphRef",
    "lineargradient" => "linearGradient",
    "radialgradient" => "radialGradient",
    "textpath" => "textPath",
};

static SVG_ATTR_FIXUPS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "attributename" => "attributeName",
    "attributetype" => "attributeType",
    "basefrequency" => "baseFrequency",
    "baseprofile" => "baseProfile",
    "calcmode" => "calcMode",
    "clippathunits" => "clipPathUnits",
    "diffuseconstant" => "diffuseConstant",
    "edgemode" => "edgeMode",
    "filterunits" => "filterUnits",
    "glyphref" => "glyphRef",
    "gradienttransform" => "gradientTransform",
    "gradientunits" => "gradientUnits",
    "kernelmatrix" => "kernelMatrix",
    "kernelunitlength" => "kernelUnitLength",
    "keypoints" => "keyPoints",
    "keysplines" => "keySplines",
    "keytimes" => "keyTimes",
    "lengthadjust" => "lengthAdjust",
    "limitingconeangle" => "limitingConeAngle",
    "markerheight" => "markerHeight",
    "markerunits" => "markerUnits",
    "markerwidth" => "markerWidth",
    "maskcontentunits" => "maskContentUnits",
    "maskunits" => "maskUnits",
    "numoctaves" => "numOctaves",
    "pathlength" => "pathLength",
    "patterncontentunits" => "patternContentUnits",
    "patterntransform" => "patternTransform",
    "patternunits" => "patternUnits",
    "pointsatx" => "pointsAtX",
    "pointsaty" => "pointsAtY",
    "pointsatz" => "pointsAtZ",
    "preservealpha" => "preserveAlpha",
    "preserveaspectratio" => "preserveAspectRatio",
    "primitiveunits" => "primitiveUnits",
    "refx" => "refX",
    "refy" => "refY",
    "repeatcount" => "repeatCount",
    "repeatdur" => "repeatDur",
    "requiredextensions" => "requiredExtensions",
    "requiredfeatures" => "requiredFeatures",
    "specularconstant" => "specularConstant",
    "specularexponent" => "specularExponent",
    "spreadmethod" => "spreadMethod",
    "startoffset" => "startOffset",
    "stddeviation" => "stdDeviation",
    "stitchtiles" => "stitchTiles",
    "surfacescale" => "surfaceScale",
    "systemlanguage" => "systemLanguage",
    "tablevalues" => "tableValues",
    "targetx" => "targetX",
    "targety" => "targetY",
    "textlength" => "textLength",
    "viewbox" => "viewBox",
    "viewtarget" => "viewTarget",
    "xchannelselector" => "xChannelSelector",
    "ychannelselector" => "yChannelSelector",
    "zoomandpan" => "zoomAndPan",
};

fn adjust_svg_tag_name(tag: &mut Tag) {
    if let Some(fixed) = SVG_TAG_FIXUPS.get(&*tag.name) {
        tag.name = StrTendril::from_slice(fixed);
    }
}

fn adjust_svg_attributes(tag: &mut Tag) {
    for attr in &mut tag.attrs {
        if let Some(fixed) = SVG_ATTR_FIXUPS.get(&*attr.name.local) {
            attr.name.local = StrTendril::from_slice(fixed);
        }
    }
}

fn adjust_mathml_attributes(tag: &mut Tag) {
    for attr in &mut tag.attrs {
        if &*attr.name.local == "definitionurl" {
            attr.name.local = StrTendril::from_slice("definitionURL");
        }
    }
}

fn adjust_foreign_attributes(tag: &mut Tag) {
    for attr in &mut tag.attrs {
        let (ns, local) = match &*attr.name.local {
            "xlink:actuate" => (Ns::XLink, "actuate"),
            "xlink:arcrole" => (Ns::XLink, "arcrole"),
            "xlink:href" => (Ns::XLink, "href"),
            "xlink:role" => (Ns::XLink, "role"),
            "xlink:show" => (Ns::XLink, "show"),
            "xlink:title" => (Ns::XLink, "title"),
            "xlink:type" => (Ns::XLink, "type"),
            "xml:lang" => (Ns::Xml, "lang"),
            "xml:space" => (Ns::Xml, "space"),
            "xmlns" => (Ns::XmlNs, "xmlns"),
            "xmlns:xlink" => (Ns::XmlNs, "xlink"),
            _ => continue,
        };
        attr.name = QualName::new(ns, StrTendril::from_slice(local));
    }
}
