// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The tree construction rules: one `match` arm per insertion mode and
//! token class.

use tendril::StrTendril;

use crate::tag::{TagId, TagSet};
use crate::tag_set;
use crate::tokenizer::states::{Rawtext, Rcdata, ScriptData};
use crate::tokenizer::{EndTag, StartTag, Tag};
use crate::tree_builder::tag_sets::*;
use crate::tree_builder::types::*;
use crate::tree_builder::{QuirksMode, TreeBuilder};
use crate::Ns;

fn any_not_whitespace(x: &StrTendril) -> bool {
    x.chars().any(|c| !c.is_ascii_whitespace())
}

impl TreeBuilder {
    pub(crate) fn step(&mut self, mode: InsertionMode, token: Token) -> ProcessResult {
        self.debug_step(mode, &token);

        match mode {
            InsertionMode::Initial => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment_to_doc(text),
                token => {
                    if !self.opts.iframe_srcdoc {
                        self.expected_doctype_but_got(&token);
                        self.set_quirks_mode(QuirksMode::Quirks);
                    }
                    ProcessResult::Reprocess(InsertionMode::BeforeHtml, token)
                },
            },

            InsertionMode::BeforeHtml => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment_to_doc(text),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => {
                        self.create_root(tag.attrs);
                        self.mode = InsertionMode::BeforeHead;
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Head | TagId::Body | TagId::Html | TagId::Br) => {
                        self.before_html_anything_else(Token::Tag(tag))
                    },

                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),

                    _ => self.before_html_anything_else(Token::Tag(tag)),
                },

                token => self.before_html_anything_else(token),
            },

            InsertionMode::BeforeHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => ProcessResult::Done,
                Token::Comment(text) => self.append_comment(text),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, TagId::Head) => {
                        self.head_elem = Some(self.insert_element_for(tag));
                        self.mode = InsertionMode::InHead;
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Head | TagId::Body | TagId::Html | TagId::Br) => {
                        self.before_head_anything_else(Token::Tag(tag))
                    },

                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),

                    _ => self.before_head_anything_else(Token::Tag(tag)),
                },

                token => self.before_head_anything_else(token),
            },

            InsertionMode::InHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (
                        StartTag,
                        TagId::Base | TagId::Basefont | TagId::Bgsound | TagId::Link | TagId::Meta,
                    ) => {
                        // FIXME: handle <meta charset=...> and
                        // <meta http-equiv="Content-Type">
                        self.insert_and_pop_element_for(tag);
                        ProcessResult::DoneAckSelfClosing
                    },

                    (StartTag, TagId::Title) => self.parse_raw_data(tag, Rcdata),

                    (StartTag, TagId::Noframes | TagId::Style | TagId::Noscript) => {
                        if (!self.opts.scripting_enabled) && (tag.id == TagId::Noscript) {
                            self.insert_element_for(tag);
                            self.mode = InsertionMode::InHeadNoscript;
                            ProcessResult::Done
                        } else {
                            self.parse_raw_data(tag, Rawtext)
                        }
                    },

                    (StartTag, TagId::Script) => self.parse_raw_data(tag, ScriptData),

                    (EndTag, TagId::Head) => {
                        self.pop();
                        self.mode = InsertionMode::AfterHead;
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Body | TagId::Html | TagId::Br) => {
                        self.in_head_anything_else(Token::Tag(tag))
                    },

                    (StartTag, TagId::Template) => {
                        self.insert_element_for(tag);
                        self.active_formatting.push(FormatEntry::Marker);
                        self.frameset_ok = false;
                        self.mode = InsertionMode::InTemplate;
                        self.template_modes.push(InsertionMode::InTemplate);
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Template) => {
                        if !self.in_html_elem_named(TagId::Template) {
                            self.unexpected(&Token::Tag(tag));
                        } else {
                            self.generate_implied_end_tags(THOROUGH_IMPLIED_END);
                            self.expect_to_close(TagId::Template);
                            self.clear_active_formatting_to_marker();
                            self.template_modes.pop();
                            self.mode = self.reset_insertion_mode();
                        }
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Head) => self.unexpected(&Token::Tag(tag)),
                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),

                    _ => self.in_head_anything_else(Token::Tag(tag)),
                },

                token => self.in_head_anything_else(token),
            },

            InsertionMode::InHeadNoscript => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InHead, token)
                },

                Token::Comment(_) => self.step(InsertionMode::InHead, token),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, TagId::Noscript) => {
                        self.pop();
                        self.mode = InsertionMode::InHead;
                        ProcessResult::Done
                    },

                    (
                        StartTag,
                        TagId::Basefont
                        | TagId::Bgsound
                        | TagId::Link
                        | TagId::Meta
                        | TagId::Noframes
                        | TagId::Style,
                    ) => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    (EndTag, TagId::Br) => self.in_head_noscript_anything_else(Token::Tag(tag)),

                    (StartTag, TagId::Head | TagId::Noscript) => {
                        self.unexpected(&Token::Tag(tag))
                    },
                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),

                    _ => self.in_head_noscript_anything_else(Token::Tag(tag)),
                },

                token => self.in_head_noscript_anything_else(token),
            },

            InsertionMode::AfterHead => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, TagId::Body) => {
                        self.insert_element_for(tag);
                        self.frameset_ok = false;
                        self.mode = InsertionMode::InBody;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Frameset) => {
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InFrameset;
                        ProcessResult::Done
                    },

                    (
                        StartTag,
                        TagId::Base
                        | TagId::Basefont
                        | TagId::Bgsound
                        | TagId::Link
                        | TagId::Meta
                        | TagId::Noframes
                        | TagId::Script
                        | TagId::Style
                        | TagId::Template
                        | TagId::Title,
                    ) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        let head = self.head_elem.expect("no head element");
                        self.push(head);
                        let result = self.step(InsertionMode::InHead, Token::Tag(tag));
                        self.remove_from_stack(head);
                        result
                    },

                    (EndTag, TagId::Template) => self.step(InsertionMode::InHead, Token::Tag(tag)),

                    (EndTag, TagId::Body | TagId::Html | TagId::Br) => {
                        self.after_head_anything_else(Token::Tag(tag))
                    },

                    (StartTag, TagId::Head) => self.unexpected(&Token::Tag(tag)),
                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),

                    _ => self.after_head_anything_else(Token::Tag(tag)),
                },

                token => self.after_head_anything_else(token),
            },

            InsertionMode::InBody => match token {
                Token::NullCharacter => self.unexpected(&token),

                Token::Characters(_, text) => {
                    self.reconstruct_active_formatting_elements();
                    if any_not_whitespace(&text) {
                        self.frameset_ok = false;
                    }
                    self.append_text(text)
                },

                Token::Comment(text) => self.append_comment(text),

                Token::Eof => {
                    if !self.template_modes.is_empty() {
                        self.step(InsertionMode::InTemplate, token)
                    } else {
                        self.check_body_end();
                        self.stop_parsing()
                    }
                },

                Token::Tag(tag) => self.step_in_body_tag(tag),
            },

            InsertionMode::Text => match token {
                Token::Characters(_, text) => self.append_text(text),

                Token::Eof => {
                    self.unexpected(&token);
                    self.pop();
                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },

                Token::Tag(tag) if tag.kind == EndTag => {
                    let node = self.pop();
                    self.mode = self.orig_mode.take().unwrap();
                    if tag.id == TagId::Script {
                        return ProcessResult::Script(node);
                    }
                    ProcessResult::Done
                },

                // Start tags and the rest are impossible in Text mode.
                _ => panic!("impossible case in Text mode"),
            },

            InsertionMode::InTable => match token {
                Token::NullCharacter | Token::Characters(..) => self.process_chars_in_table(token),

                Token::Comment(text) => self.append_comment(text),

                Token::Eof => self.step(InsertionMode::InBody, token),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Caption) => {
                        self.pop_until_current(TABLE_CONTEXT);
                        self.active_formatting.push(FormatEntry::Marker);
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InCaption;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Colgroup) => {
                        self.pop_until_current(TABLE_CONTEXT);
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InColumnGroup;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Col) => {
                        self.pop_until_current(TABLE_CONTEXT);
                        self.insert_phantom(TagId::Colgroup);
                        ProcessResult::Reprocess(InsertionMode::InColumnGroup, Token::Tag(tag))
                    },

                    (StartTag, TagId::Tbody | TagId::Tfoot | TagId::Thead) => {
                        self.pop_until_current(TABLE_CONTEXT);
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InTableBody;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Td | TagId::Th | TagId::Tr) => {
                        self.pop_until_current(TABLE_CONTEXT);
                        self.insert_phantom(TagId::Tbody);
                        ProcessResult::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                    },

                    (StartTag, TagId::Table) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        if self.in_scope_named(TABLE_SCOPE, TagId::Table) {
                            self.pop_until_named(TagId::Table);
                            ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    },

                    (EndTag, TagId::Table) => {
                        if self.in_scope_named(TABLE_SCOPE, TagId::Table) {
                            self.pop_until_named(TagId::Table);
                            self.mode = self.reset_insertion_mode();
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (
                        EndTag,
                        TagId::Body
                        | TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Html
                        | TagId::Tbody
                        | TagId::Td
                        | TagId::Tfoot
                        | TagId::Th
                        | TagId::Thead
                        | TagId::Tr,
                    ) => self.unexpected(&Token::Tag(tag)),

                    (StartTag, TagId::Style | TagId::Script | TagId::Template)
                    | (EndTag, TagId::Template) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    (StartTag, TagId::Input) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        if self.is_type_hidden(&tag) {
                            self.insert_and_pop_element_for(tag);
                            ProcessResult::DoneAckSelfClosing
                        } else {
                            self.foster_parent_in_body(Token::Tag(tag))
                        }
                    },

                    (StartTag, TagId::Form) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        if !self.in_html_elem_named(TagId::Template) && self.form_elem.is_none() {
                            self.form_elem = Some(self.insert_and_pop_element_for(tag));
                        }
                        ProcessResult::Done
                    },

                    _ => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        self.foster_parent_in_body(Token::Tag(tag))
                    },
                },
            },

            InsertionMode::InTableText => match token {
                Token::NullCharacter => self.unexpected(&token),

                Token::Characters(split, text) => {
                    self.pending_table_text.push((split, text));
                    ProcessResult::Done
                },

                token => {
                    let pending = std::mem::take(&mut self.pending_table_text);
                    let contains_nonspace = pending.iter().any(|&(split, ref text)| match split {
                        SplitStatus::Whitespace => false,
                        SplitStatus::NotWhitespace => true,
                        SplitStatus::NotSplit => any_not_whitespace(text),
                    });

                    if contains_nonspace {
                        self.parse_error("foster-parenting-character-in-table");
                        for (split, text) in pending.into_iter() {
                            match self.foster_parent_in_body(Token::Characters(split, text)) {
                                ProcessResult::Done => (),
                                _ => panic!("not prepared to handle this!"),
                            }
                        }
                    } else {
                        for (_, text) in pending.into_iter() {
                            self.append_text(text);
                        }
                    }

                    ProcessResult::Reprocess(self.orig_mode.take().unwrap(), token)
                },
            },

            InsertionMode::InCaption => match token {
                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (
                        StartTag,
                        TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Tbody
                        | TagId::Td
                        | TagId::Tfoot
                        | TagId::Th
                        | TagId::Thead
                        | TagId::Tr,
                    )
                    | (EndTag, TagId::Table | TagId::Caption) => {
                        if self.in_scope_named(TABLE_SCOPE, TagId::Caption) {
                            self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                            self.expect_to_close(TagId::Caption);
                            self.clear_active_formatting_to_marker();
                            match tag {
                                Tag {
                                    kind: EndTag,
                                    id: TagId::Caption,
                                    ..
                                } => {
                                    self.mode = InsertionMode::InTable;
                                    ProcessResult::Done
                                },
                                _ => ProcessResult::Reprocess(
                                    InsertionMode::InTable,
                                    Token::Tag(tag),
                                ),
                            }
                        } else {
                            self.unexpected(&Token::Tag(tag));
                            ProcessResult::Done
                        }
                    },

                    (
                        EndTag,
                        TagId::Body
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Html
                        | TagId::Tbody
                        | TagId::Td
                        | TagId::Tfoot
                        | TagId::Th
                        | TagId::Thead
                        | TagId::Tr,
                    ) => self.unexpected(&Token::Tag(tag)),

                    _ => self.step(InsertionMode::InBody, Token::Tag(tag)),
                },

                token => self.step(InsertionMode::InBody, token),
            },

            InsertionMode::InColumnGroup => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Eof => self.step(InsertionMode::InBody, token),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, TagId::Col) => {
                        self.insert_and_pop_element_for(tag);
                        ProcessResult::DoneAckSelfClosing
                    },

                    (EndTag, TagId::Colgroup) => {
                        if self.current_node_named(TagId::Colgroup) {
                            self.pop();
                            self.mode = InsertionMode::InTable;
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Col) => self.unexpected(&Token::Tag(tag)),

                    (StartTag, TagId::Template) | (EndTag, TagId::Template) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.in_column_group_anything_else(Token::Tag(tag)),
                },

                token => self.in_column_group_anything_else(token),
            },

            InsertionMode::InTableBody => match token {
                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Tr) => {
                        self.pop_until_current(TABLE_BODY_CONTEXT);
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InRow;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Th | TagId::Td) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        self.pop_until_current(TABLE_BODY_CONTEXT);
                        self.insert_phantom(TagId::Tr);
                        ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                    },

                    (EndTag, TagId::Tbody | TagId::Tfoot | TagId::Thead) => {
                        if self.in_scope_named(TABLE_SCOPE, tag.id) {
                            self.pop_until_current(TABLE_BODY_CONTEXT);
                            self.pop();
                            self.mode = InsertionMode::InTable;
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (
                        StartTag,
                        TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Tbody
                        | TagId::Tfoot
                        | TagId::Thead,
                    )
                    | (EndTag, TagId::Table) => {
                        const TABLE_OUTER_SECTIONS: TagSet = tag_set!(Table Tbody Tfoot);
                        if self.in_scope(TABLE_SCOPE, |this, e| {
                            this.elem_in(e, TABLE_OUTER_SECTIONS)
                        }) {
                            self.pop_until_current(TABLE_BODY_CONTEXT);
                            self.pop();
                            ProcessResult::Reprocess(InsertionMode::InTable, Token::Tag(tag))
                        } else {
                            self.unexpected(&Token::Tag(tag))
                        }
                    },

                    (
                        EndTag,
                        TagId::Body
                        | TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Html
                        | TagId::Td
                        | TagId::Th
                        | TagId::Tr,
                    ) => self.unexpected(&Token::Tag(tag)),

                    _ => self.step(InsertionMode::InTable, Token::Tag(tag)),
                },

                token => self.step(InsertionMode::InTable, token),
            },

            InsertionMode::InRow => match token {
                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Th | TagId::Td) => {
                        self.pop_until_current(TABLE_ROW_CONTEXT);
                        self.insert_element_for(tag);
                        self.mode = InsertionMode::InCell;
                        self.active_formatting.push(FormatEntry::Marker);
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Tr) => {
                        if self.in_scope_named(TABLE_SCOPE, TagId::Tr) {
                            self.pop_until_current(TABLE_ROW_CONTEXT);
                            let node = self.pop();
                            debug_assert!(self.html_elem_named(node, TagId::Tr));
                            self.mode = InsertionMode::InTableBody;
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (
                        StartTag,
                        TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Tbody
                        | TagId::Tfoot
                        | TagId::Thead
                        | TagId::Tr,
                    )
                    | (EndTag, TagId::Table) => {
                        if self.in_scope_named(TABLE_SCOPE, TagId::Tr) {
                            self.pop_until_current(TABLE_ROW_CONTEXT);
                            let node = self.pop();
                            debug_assert!(self.html_elem_named(node, TagId::Tr));
                            ProcessResult::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                        } else {
                            self.unexpected(&Token::Tag(tag))
                        }
                    },

                    (EndTag, TagId::Tbody | TagId::Tfoot | TagId::Thead) => {
                        if self.in_scope_named(TABLE_SCOPE, tag.id) {
                            if self.in_scope_named(TABLE_SCOPE, TagId::Tr) {
                                self.pop_until_current(TABLE_ROW_CONTEXT);
                                let node = self.pop();
                                debug_assert!(self.html_elem_named(node, TagId::Tr));
                                ProcessResult::Reprocess(
                                    InsertionMode::InTableBody,
                                    Token::Tag(tag),
                                )
                            } else {
                                ProcessResult::Done
                            }
                        } else {
                            self.unexpected(&Token::Tag(tag))
                        }
                    },

                    (
                        EndTag,
                        TagId::Body
                        | TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Html
                        | TagId::Td
                        | TagId::Th,
                    ) => self.unexpected(&Token::Tag(tag)),

                    _ => self.step(InsertionMode::InTable, Token::Tag(tag)),
                },

                token => self.step(InsertionMode::InTable, token),
            },

            InsertionMode::InCell => match token {
                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (EndTag, TagId::Td | TagId::Th) => {
                        if self.in_scope_named(TABLE_SCOPE, tag.id) {
                            self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                            self.expect_to_close(tag.id);
                            self.clear_active_formatting_to_marker();
                            self.mode = InsertionMode::InRow;
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (
                        StartTag,
                        TagId::Caption
                        | TagId::Col
                        | TagId::Colgroup
                        | TagId::Tbody
                        | TagId::Td
                        | TagId::Tfoot
                        | TagId::Th
                        | TagId::Thead
                        | TagId::Tr,
                    ) => {
                        if self.in_scope(TABLE_SCOPE, |this, n| this.elem_in(n, TD_TH)) {
                            self.close_the_cell();
                            ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                        } else {
                            self.unexpected(&Token::Tag(tag))
                        }
                    },

                    (
                        EndTag,
                        TagId::Body | TagId::Caption | TagId::Col | TagId::Colgroup | TagId::Html,
                    ) => self.unexpected(&Token::Tag(tag)),

                    (EndTag, TagId::Table | TagId::Tbody | TagId::Tfoot | TagId::Thead | TagId::Tr) => {
                        if self.in_scope_named(TABLE_SCOPE, tag.id) {
                            self.close_the_cell();
                            ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                        } else {
                            self.unexpected(&Token::Tag(tag))
                        }
                    },

                    _ => self.step(InsertionMode::InBody, Token::Tag(tag)),
                },

                token => self.step(InsertionMode::InBody, token),
            },

            InsertionMode::InSelect => match token {
                Token::NullCharacter => self.unexpected(&token),
                Token::Characters(_, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Eof => self.step(InsertionMode::InBody, token),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, TagId::Option) => {
                        if self.current_node_named(TagId::Option) {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Optgroup) => {
                        if self.current_node_named(TagId::Option) {
                            self.pop();
                        }
                        if self.current_node_named(TagId::Optgroup) {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Hr) => {
                        if self.current_node_named(TagId::Option) {
                            self.pop();
                        }
                        if self.current_node_named(TagId::Optgroup) {
                            self.pop();
                        }
                        self.insert_element_for(tag);
                        self.pop();
                        ProcessResult::DoneAckSelfClosing
                    },

                    (EndTag, TagId::Optgroup) => {
                        if self.open_elems.len() >= 2
                            && self.current_node_named(TagId::Option)
                            && self.html_elem_named(
                                self.open_elems[self.open_elems.len() - 2],
                                TagId::Optgroup,
                            )
                        {
                            self.pop();
                        }
                        if self.current_node_named(TagId::Optgroup) {
                            self.pop();
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Option) => {
                        if self.current_node_named(TagId::Option) {
                            self.pop();
                        } else {
                            self.unexpected(&Token::Tag(tag));
                        }
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Select) | (EndTag, TagId::Select) => {
                        let in_scope = self.in_scope_named(SELECT_SCOPE, TagId::Select);

                        if !in_scope || tag.kind == StartTag {
                            self.unexpected(&Token::Tag(tag));
                        }

                        if in_scope {
                            self.pop_until_named(TagId::Select);
                            self.mode = self.reset_insertion_mode();
                        }
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Input | TagId::Keygen | TagId::Textarea) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        if self.in_scope_named(SELECT_SCOPE, TagId::Select) {
                            self.pop_until_named(TagId::Select);
                            ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    },

                    (StartTag, TagId::Script | TagId::Template) | (EndTag, TagId::Template) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.unexpected(&Token::Tag(tag)),
                },
            },

            InsertionMode::InSelectInTable => match token {
                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (
                        StartTag,
                        TagId::Caption
                        | TagId::Table
                        | TagId::Tbody
                        | TagId::Tfoot
                        | TagId::Thead
                        | TagId::Tr
                        | TagId::Td
                        | TagId::Th,
                    ) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        // In the fragment case the context <select> is
                        // not on the stack; reprocessing would loop.
                        if self.in_scope_named(SELECT_SCOPE, TagId::Select) {
                            self.pop_until_named(TagId::Select);
                            ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    },

                    (
                        EndTag,
                        TagId::Caption
                        | TagId::Table
                        | TagId::Tbody
                        | TagId::Tfoot
                        | TagId::Thead
                        | TagId::Tr
                        | TagId::Td
                        | TagId::Th,
                    ) => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        if self.in_scope_named(TABLE_SCOPE, tag.id)
                            && self.in_scope_named(SELECT_SCOPE, TagId::Select)
                        {
                            self.pop_until_named(TagId::Select);
                            ProcessResult::Reprocess(self.reset_insertion_mode(), Token::Tag(tag))
                        } else {
                            ProcessResult::Done
                        }
                    },

                    _ => self.step(InsertionMode::InSelect, Token::Tag(tag)),
                },

                token => self.step(InsertionMode::InSelect, token),
            },

            InsertionMode::InTemplate => match token {
                Token::Characters(_, _) => self.step(InsertionMode::InBody, token),
                Token::Comment(_) => self.step(InsertionMode::InBody, token),
                Token::NullCharacter => self.step(InsertionMode::InBody, token),

                Token::Eof => {
                    if !self.in_html_elem_named(TagId::Template) {
                        self.stop_parsing()
                    } else {
                        self.unexpected(&token);
                        self.pop_until_named(TagId::Template);
                        self.clear_active_formatting_to_marker();
                        self.template_modes.pop();
                        self.mode = self.reset_insertion_mode();
                        ProcessResult::Reprocess(self.reset_insertion_mode(), token)
                    }
                },

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (
                        StartTag,
                        TagId::Base
                        | TagId::Basefont
                        | TagId::Bgsound
                        | TagId::Link
                        | TagId::Meta
                        | TagId::Noframes
                        | TagId::Script
                        | TagId::Style
                        | TagId::Template
                        | TagId::Title,
                    )
                    | (EndTag, TagId::Template) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    (
                        StartTag,
                        TagId::Caption | TagId::Colgroup | TagId::Tbody | TagId::Tfoot | TagId::Thead,
                    ) => {
                        self.template_modes.pop();
                        self.template_modes.push(InsertionMode::InTable);
                        ProcessResult::Reprocess(InsertionMode::InTable, Token::Tag(tag))
                    },

                    (StartTag, TagId::Col) => {
                        self.template_modes.pop();
                        self.template_modes.push(InsertionMode::InColumnGroup);
                        ProcessResult::Reprocess(InsertionMode::InColumnGroup, Token::Tag(tag))
                    },

                    (StartTag, TagId::Tr) => {
                        self.template_modes.pop();
                        self.template_modes.push(InsertionMode::InTableBody);
                        ProcessResult::Reprocess(InsertionMode::InTableBody, Token::Tag(tag))
                    },

                    (StartTag, TagId::Td | TagId::Th) => {
                        self.template_modes.pop();
                        self.template_modes.push(InsertionMode::InRow);
                        ProcessResult::Reprocess(InsertionMode::InRow, Token::Tag(tag))
                    },

                    (StartTag, _) => {
                        self.template_modes.pop();
                        self.template_modes.push(InsertionMode::InBody);
                        ProcessResult::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                    },

                    (EndTag, _) => self.unexpected(&Token::Tag(tag)),
                },
            },

            InsertionMode::AfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_html(text),

                Token::Eof => self.stop_parsing(),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, TagId::Html) => {
                        if self.is_fragment() {
                            self.unexpected(&Token::Tag(tag));
                        } else {
                            self.mode = InsertionMode::AfterAfterBody;
                        }
                        ProcessResult::Done
                    },

                    _ => {
                        self.unexpected(&Token::Tag(tag.clone()));
                        ProcessResult::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                    },
                },

                token => {
                    self.unexpected(&token);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            InsertionMode::InFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Eof => {
                    if self.open_elems.len() != 1 {
                        self.unexpected(&token);
                    }
                    self.stop_parsing()
                },

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (StartTag, TagId::Frameset) => {
                        self.insert_element_for(tag);
                        ProcessResult::Done
                    },

                    (EndTag, TagId::Frameset) => {
                        if self.open_elems.len() == 1 {
                            self.unexpected(&Token::Tag(tag));
                        } else {
                            self.pop();
                            if !self.is_fragment() && !self.current_node_named(TagId::Frameset) {
                                self.mode = InsertionMode::AfterFrameset;
                            }
                        }
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Frame) => {
                        self.insert_and_pop_element_for(tag);
                        ProcessResult::DoneAckSelfClosing
                    },

                    (StartTag, TagId::Noframes) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.unexpected(&Token::Tag(tag)),
                },

                token => self.unexpected(&token),
            },

            InsertionMode::AfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, text) => self.append_text(text),
                Token::Comment(text) => self.append_comment(text),

                Token::Eof => self.stop_parsing(),

                Token::Tag(tag) => match (tag.kind, tag.id) {
                    (StartTag, TagId::Html) => self.step(InsertionMode::InBody, Token::Tag(tag)),

                    (EndTag, TagId::Html) => {
                        self.mode = InsertionMode::AfterAfterFrameset;
                        ProcessResult::Done
                    },

                    (StartTag, TagId::Noframes) => {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    },

                    _ => self.unexpected(&Token::Tag(tag)),
                },

                token => self.unexpected(&token),
            },

            InsertionMode::AfterAfterBody => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_doc(text),

                Token::Eof => self.stop_parsing(),

                Token::Tag(tag) => {
                    if tag.kind == StartTag && tag.id == TagId::Html {
                        self.step(InsertionMode::InBody, Token::Tag(tag))
                    } else {
                        self.unexpected(&Token::Tag(tag.clone()));
                        ProcessResult::Reprocess(InsertionMode::InBody, Token::Tag(tag))
                    }
                },

                token => {
                    self.unexpected(&token);
                    ProcessResult::Reprocess(InsertionMode::InBody, token)
                },
            },

            InsertionMode::AfterAfterFrameset => match token {
                Token::Characters(SplitStatus::NotSplit, text) => {
                    ProcessResult::SplitWhitespace(text)
                },
                Token::Characters(SplitStatus::Whitespace, _) => {
                    self.step(InsertionMode::InBody, token)
                },
                Token::Comment(text) => self.append_comment_to_doc(text),

                Token::Eof => self.stop_parsing(),

                Token::Tag(tag) => {
                    if tag.kind == StartTag && tag.id == TagId::Html {
                        self.step(InsertionMode::InBody, Token::Tag(tag))
                    } else if tag.kind == StartTag && tag.id == TagId::Noframes {
                        self.step(InsertionMode::InHead, Token::Tag(tag))
                    } else {
                        self.unexpected(&Token::Tag(tag))
                    }
                },

                token => self.unexpected(&token),
            },
        }
    }

    //
    // Shared "anything else" actions.
    //

    fn before_html_anything_else(&mut self, token: Token) -> ProcessResult {
        self.create_root(vec![]);
        ProcessResult::Reprocess(InsertionMode::BeforeHead, token)
    }

    fn before_head_anything_else(&mut self, token: Token) -> ProcessResult {
        self.head_elem = Some(self.insert_phantom(TagId::Head));
        ProcessResult::Reprocess(InsertionMode::InHead, token)
    }

    fn in_head_anything_else(&mut self, token: Token) -> ProcessResult {
        self.pop();
        ProcessResult::Reprocess(InsertionMode::AfterHead, token)
    }

    fn in_head_noscript_anything_else(&mut self, token: Token) -> ProcessResult {
        self.unexpected(&token);
        self.pop();
        ProcessResult::Reprocess(InsertionMode::InHead, token)
    }

    fn after_head_anything_else(&mut self, token: Token) -> ProcessResult {
        self.insert_phantom(TagId::Body);
        ProcessResult::Reprocess(InsertionMode::InBody, token)
    }

    fn in_column_group_anything_else(&mut self, token: Token) -> ProcessResult {
        if self.current_node_named(TagId::Colgroup) {
            self.pop();
            ProcessResult::Reprocess(InsertionMode::InTable, token)
        } else {
            self.unexpected(&token)
        }
    }

    fn expected_doctype_but_got(&mut self, token: &Token) {
        let code = match token {
            Token::Tag(Tag { kind: StartTag, .. }) => "expected-doctype-but-got-start-tag",
            Token::Tag(Tag { kind: EndTag, .. }) => "expected-doctype-but-got-end-tag",
            Token::Characters(..) | Token::NullCharacter => "expected-doctype-but-got-character",
            Token::Eof => "expected-doctype-but-got-eof",
            Token::Comment(_) => "expected-doctype-but-got-comment",
        };
        self.parse_error(code);
    }

    //
    // InBody tag dispatch, by far the biggest decision table.
    //

    fn step_in_body_tag(&mut self, tag: Tag) -> ProcessResult {
        const BLOCK_OPENERS: TagSet = tag_set!(Address Article Aside Blockquote Center Details
            Dialog Dir Div Dl Fieldset Figcaption Figure Footer Header Hgroup Main Menu Nav Ol
            P Search Section Summary Ul);

        const BLOCK_CLOSERS: TagSet = tag_set!(Address Article Aside Blockquote Button Center
            Details Dialog Dir Div Dl Fieldset Figcaption Figure Footer Header Hgroup Listing
            Main Menu Nav Ol Pre Search Section Summary Ul);

        const FORMATTING: TagSet =
            tag_set!(B Big Code Em Font I S Small Strike Strong Tt U);

        const FORMATTING_CLOSERS: TagSet =
            tag_set!(A B Big Code Em Font I Nobr S Small Strike Strong Tt U);

        match (tag.kind, tag.id) {
            (StartTag, TagId::Html) => {
                self.unexpected(&Token::Tag(tag.clone()));
                if !self.in_html_elem_named(TagId::Template) {
                    let top = self.html_elem();
                    self.add_attrs_if_missing(top, tag.attrs);
                }
                ProcessResult::Done
            },

            (
                StartTag,
                TagId::Base
                | TagId::Basefont
                | TagId::Bgsound
                | TagId::Link
                | TagId::Meta
                | TagId::Noframes
                | TagId::Script
                | TagId::Style
                | TagId::Template
                | TagId::Title,
            )
            | (EndTag, TagId::Template) => self.step(InsertionMode::InHead, Token::Tag(tag)),

            (StartTag, TagId::Body) => {
                self.unexpected(&Token::Tag(tag.clone()));
                match self.body_elem() {
                    Some(node)
                        if self.open_elems.len() != 1
                            && !self.in_html_elem_named(TagId::Template) =>
                    {
                        self.frameset_ok = false;
                        self.add_attrs_if_missing(node, tag.attrs)
                    },
                    _ => {},
                }
                ProcessResult::Done
            },

            (StartTag, TagId::Frameset) => {
                self.unexpected(&Token::Tag(tag.clone()));
                if !self.frameset_ok {
                    return ProcessResult::Done;
                }

                let Some(body) = self.body_elem() else {
                    return ProcessResult::Done;
                };
                self.doc.unlink(body);

                self.open_elems.truncate(1);
                self.insert_element_for(tag);
                self.mode = InsertionMode::InFrameset;
                ProcessResult::Done
            },

            (EndTag, TagId::Body) => {
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Body) {
                    self.check_body_end();
                    self.mode = InsertionMode::AfterBody;
                } else {
                    self.parse_error("unexpected-end-tag");
                }
                ProcessResult::Done
            },

            (EndTag, TagId::Html) => {
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Body) {
                    self.check_body_end();
                    ProcessResult::Reprocess(InsertionMode::AfterBody, Token::Tag(tag))
                } else {
                    self.parse_error("unexpected-end-tag");
                    ProcessResult::Done
                }
            },

            (StartTag, id) if BLOCK_OPENERS.contains(id) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::H1 | TagId::H2 | TagId::H3 | TagId::H4 | TagId::H5 | TagId::H6) => {
                self.close_p_element_in_button_scope();
                if self.current_node_in(HEADING) {
                    self.parse_error("unexpected-start-tag");
                    self.pop();
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Pre | TagId::Listing) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                self.ignore_lf = true;
                self.frameset_ok = false;
                ProcessResult::Done
            },

            (StartTag, TagId::Form) => {
                if self.form_elem.is_some() && !self.in_html_elem_named(TagId::Template) {
                    self.parse_error("unexpected-start-tag");
                } else {
                    self.close_p_element_in_button_scope();
                    let elem = self.insert_element_for(tag);
                    if !self.in_html_elem_named(TagId::Template) {
                        self.form_elem = Some(elem);
                    }
                }
                ProcessResult::Done
            },

            (StartTag, TagId::Li | TagId::Dd | TagId::Dt) => {
                const CLOSE_LIST: TagSet = tag_set!(Li);
                const CLOSE_DEFN: TagSet = tag_set!(Dd Dt);
                const EXTRA_SPECIAL: Scope = Scope {
                    html: SPECIAL
                        .html
                        .without(TagId::Address)
                        .without(TagId::Div)
                        .without(TagId::P),
                    ..SPECIAL
                };
                let list = tag.id == TagId::Li;

                self.frameset_ok = false;

                let mut to_close = None;
                for &node in self.open_elems.iter().rev() {
                    let (ns, id) = self.elem_name(node);
                    let can_close = ns == Ns::Html
                        && if list {
                            CLOSE_LIST.contains(id)
                        } else {
                            CLOSE_DEFN.contains(id)
                        };
                    if can_close {
                        to_close = Some(id);
                        break;
                    }
                    if EXTRA_SPECIAL.contains(ns, id) {
                        break;
                    }
                }

                if let Some(id) = to_close {
                    self.generate_implied_end_except(id);
                    self.expect_to_close(id);
                }

                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Plaintext) => {
                self.close_p_element_in_button_scope();
                self.insert_element_for(tag);
                ProcessResult::ToPlaintext
            },

            (StartTag, TagId::Button) => {
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Button) {
                    self.parse_error("unexpected-start-tag-implies-end-tag");
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    self.pop_until_named(TagId::Button);
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok = false;
                ProcessResult::Done
            },

            (EndTag, id) if BLOCK_CLOSERS.contains(id) => {
                if !self.in_scope_named(DEFAULT_SCOPE, id) {
                    self.unexpected(&Token::Tag(tag));
                } else {
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    self.expect_to_close(id);
                }
                ProcessResult::Done
            },

            (EndTag, TagId::Form) => {
                if !self.in_html_elem_named(TagId::Template) {
                    let Some(node) = self.form_elem.take() else {
                        self.parse_error("unexpected-end-tag");
                        return ProcessResult::Done;
                    };
                    if !self.in_scope(DEFAULT_SCOPE, |_, n| n == node) {
                        self.parse_error("unexpected-end-tag");
                        return ProcessResult::Done;
                    }
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    let current = self.current_node();
                    self.remove_from_stack(node);
                    if current != node {
                        self.parse_error("end-tag-too-early-ignored");
                    }
                } else {
                    if !self.in_scope_named(DEFAULT_SCOPE, TagId::Form) {
                        self.parse_error("unexpected-end-tag");
                        return ProcessResult::Done;
                    }
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    if !self.current_node_named(TagId::Form) {
                        self.parse_error("end-tag-too-early-ignored");
                    }
                    self.pop_until_named(TagId::Form);
                }
                ProcessResult::Done
            },

            (EndTag, TagId::P) => {
                if !self.in_scope_named(BUTTON_SCOPE, TagId::P) {
                    self.parse_error("unexpected-end-tag");
                    self.insert_phantom(TagId::P);
                }
                self.close_p_element();
                ProcessResult::Done
            },

            (EndTag, TagId::Li | TagId::Dd | TagId::Dt) => {
                let in_scope = if tag.id == TagId::Li {
                    self.in_scope_named(LIST_ITEM_SCOPE, TagId::Li)
                } else {
                    self.in_scope_named(DEFAULT_SCOPE, tag.id)
                };
                if in_scope {
                    self.generate_implied_end_except(tag.id);
                    self.expect_to_close(tag.id);
                } else {
                    self.parse_error("unexpected-end-tag");
                }
                ProcessResult::Done
            },

            (EndTag, TagId::H1 | TagId::H2 | TagId::H3 | TagId::H4 | TagId::H5 | TagId::H6) => {
                if self.in_scope(DEFAULT_SCOPE, |this, n| this.elem_in(n, HEADING)) {
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    if !self.current_node_named(tag.id) {
                        self.parse_error("end-tag-too-early");
                    }
                    self.pop_until_in(HEADING);
                } else {
                    self.parse_error("unexpected-end-tag");
                }
                ProcessResult::Done
            },

            (StartTag, TagId::A) => {
                self.handle_misnested_a_tags();
                self.reconstruct_active_formatting_elements();
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, id) if FORMATTING.contains(id) => {
                self.reconstruct_active_formatting_elements();
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Nobr) => {
                self.reconstruct_active_formatting_elements();
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Nobr) {
                    self.parse_error("unexpected-start-tag-implies-end-tag");
                    self.adoption_agency(TagId::Nobr);
                    self.reconstruct_active_formatting_elements();
                }
                self.create_formatting_element_for(tag);
                ProcessResult::Done
            },

            (EndTag, id) if FORMATTING_CLOSERS.contains(id) => {
                self.adoption_agency(id);
                ProcessResult::Done
            },

            (StartTag, TagId::Applet | TagId::Marquee | TagId::Object) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.active_formatting.push(FormatEntry::Marker);
                self.frameset_ok = false;
                ProcessResult::Done
            },

            (EndTag, TagId::Applet | TagId::Marquee | TagId::Object) => {
                if !self.in_scope_named(DEFAULT_SCOPE, tag.id) {
                    self.unexpected(&Token::Tag(tag));
                } else {
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                    self.expect_to_close(tag.id);
                    self.clear_active_formatting_to_marker();
                }
                ProcessResult::Done
            },

            (StartTag, TagId::Table) => {
                if self.quirks_mode != QuirksMode::Quirks {
                    self.close_p_element_in_button_scope();
                }
                self.insert_element_for(tag);
                self.frameset_ok = false;
                self.mode = InsertionMode::InTable;
                ProcessResult::Done
            },

            (EndTag, TagId::Br) => {
                self.unexpected(&Token::Tag(tag.clone()));
                self.step_in_body_tag(Tag {
                    kind: StartTag,
                    attrs: vec![],
                    ..tag
                })
            },

            (
                StartTag,
                TagId::Area
                | TagId::Br
                | TagId::Embed
                | TagId::Img
                | TagId::Keygen
                | TagId::Wbr
                | TagId::Input,
            ) => {
                let keep_frameset_ok = match tag.id {
                    TagId::Input => self.is_type_hidden(&tag),
                    _ => false,
                };
                self.reconstruct_active_formatting_elements();
                self.insert_and_pop_element_for(tag);
                if !keep_frameset_ok {
                    self.frameset_ok = false;
                }
                ProcessResult::DoneAckSelfClosing
            },

            (StartTag, TagId::Param | TagId::Source | TagId::Track) => {
                self.insert_and_pop_element_for(tag);
                ProcessResult::DoneAckSelfClosing
            },

            (StartTag, TagId::Hr) => {
                self.close_p_element_in_button_scope();
                self.insert_and_pop_element_for(tag);
                self.frameset_ok = false;
                ProcessResult::DoneAckSelfClosing
            },

            (StartTag, TagId::Image) => {
                self.unexpected(&Token::Tag(tag.clone()));
                self.step_in_body_tag(Tag {
                    name: StrTendril::from_slice("img"),
                    id: TagId::Img,
                    ..tag
                })
            },

            (StartTag, TagId::Textarea) => {
                self.ignore_lf = true;
                self.frameset_ok = false;
                self.parse_raw_data(tag, Rcdata)
            },

            (StartTag, TagId::Xmp) => {
                self.close_p_element_in_button_scope();
                self.reconstruct_active_formatting_elements();
                self.frameset_ok = false;
                self.parse_raw_data(tag, Rawtext)
            },

            (StartTag, TagId::Iframe) => {
                self.frameset_ok = false;
                self.parse_raw_data(tag, Rawtext)
            },

            (StartTag, TagId::Noembed) => self.parse_raw_data(tag, Rawtext),

            (StartTag, TagId::Noscript) => {
                if self.opts.scripting_enabled {
                    self.parse_raw_data(tag, Rawtext)
                } else {
                    self.reconstruct_active_formatting_elements();
                    self.insert_element_for(tag);
                    ProcessResult::Done
                }
            },

            (StartTag, TagId::Select) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                self.frameset_ok = false;
                // NB: mode == InBody but possibly self.mode != mode, if
                // we're processing "as in the rules for InBody".
                self.mode = match self.mode {
                    InsertionMode::InTable
                    | InsertionMode::InCaption
                    | InsertionMode::InTableBody
                    | InsertionMode::InRow
                    | InsertionMode::InCell => InsertionMode::InSelectInTable,
                    _ => InsertionMode::InSelect,
                };
                ProcessResult::Done
            },

            (StartTag, TagId::Optgroup | TagId::Option) => {
                if self.current_node_named(TagId::Option) {
                    self.pop();
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Rb | TagId::Rtc) => {
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Ruby) {
                    self.generate_implied_end_tags(CURSORY_IMPLIED_END);
                }
                if !self.current_node_named(TagId::Ruby) {
                    self.unexpected(&Token::Tag(tag.clone()));
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Rp | TagId::Rt) => {
                if self.in_scope_named(DEFAULT_SCOPE, TagId::Ruby) {
                    self.generate_implied_end_except(TagId::Rtc);
                }
                if !self.current_node_named(TagId::Rtc) && !self.current_node_named(TagId::Ruby) {
                    self.unexpected(&Token::Tag(tag.clone()));
                }
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (StartTag, TagId::Math) => self.enter_foreign(tag, Ns::MathMl),

            (StartTag, TagId::Svg) => self.enter_foreign(tag, Ns::Svg),

            (
                StartTag,
                TagId::Caption
                | TagId::Col
                | TagId::Colgroup
                | TagId::Frame
                | TagId::Head
                | TagId::Tbody
                | TagId::Td
                | TagId::Tfoot
                | TagId::Th
                | TagId::Thead
                | TagId::Tr,
            ) => {
                self.unexpected(&Token::Tag(tag));
                ProcessResult::Done
            },

            (StartTag, _) => {
                self.reconstruct_active_formatting_elements();
                self.insert_element_for(tag);
                ProcessResult::Done
            },

            (EndTag, _) => {
                self.process_end_tag_in_body(tag);
                ProcessResult::Done
            },
        }
    }

    //
    // Foreign content rules.
    //

    pub(crate) fn step_foreign(&mut self, token: Token) -> ProcessResult {
        match token {
            Token::NullCharacter => {
                self.unexpected(&token);
                self.append_text(StrTendril::from_slice("\u{fffd}"))
            },

            Token::Characters(_, text) => {
                if any_not_whitespace(&text) {
                    self.frameset_ok = false;
                }
                self.append_text(text)
            },

            Token::Comment(text) => self.append_comment(text),

            Token::Eof => panic!("impossible case in foreign content"),

            Token::Tag(tag) => match (tag.kind, tag.id) {
                (StartTag, id) if FOREIGN_BREAKOUT.contains(id) => {
                    self.unexpected_start_tag_in_foreign_content(tag)
                },

                (EndTag, TagId::Br | TagId::P) => {
                    self.unexpected_start_tag_in_foreign_content(tag)
                },

                (StartTag, TagId::Font) => {
                    let unexpected = tag.attrs.iter().any(|attr| {
                        attr.name.ns == Ns::None
                            && matches!(&*attr.name.local, "color" | "face" | "size")
                    });
                    if unexpected {
                        self.unexpected_start_tag_in_foreign_content(tag)
                    } else {
                        self.foreign_start_tag(tag)
                    }
                },

                (StartTag, _) => self.foreign_start_tag(tag),

                (EndTag, _) => {
                    let mut first = true;
                    let mut stack_idx = self.open_elems.len() - 1;
                    loop {
                        if stack_idx == 0 {
                            return ProcessResult::Done;
                        }

                        let node = self.open_elems[stack_idx];
                        let (html, eq) = {
                            let elem = self.doc[node].as_element().unwrap();
                            (
                                elem.name.ns == Ns::Html,
                                elem.name.local.eq_ignore_ascii_case(&tag.name),
                            )
                        };
                        if !first && html {
                            let mode = self.mode;
                            return self.step(mode, Token::Tag(tag));
                        }

                        if eq {
                            self.open_elems.truncate(stack_idx);
                            return ProcessResult::Done;
                        }

                        if first {
                            self.unexpected(&Token::Tag(tag.clone()));
                            first = false;
                        }
                        stack_idx -= 1;
                    }
                },
            },
        }
    }
}
