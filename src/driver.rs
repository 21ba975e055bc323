// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The public entry points: parse a document or fragment, or run just
//! the tokenizer.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use tendril::StrTendril;

use crate::dom::{Document, NodeData, NodeId};
use crate::encoding;
use crate::error::ParseError;
use crate::tokenizer::{
    BufferQueue, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts, TokenizerResult,
};
use crate::tree_builder::{QuirksMode, TreeBuilder, TreeBuilderOpts};
use crate::{Ns, Position, QualName};

/// All the options for a parse.
#[derive(Clone, Default)]
pub struct ParseOpts {
    pub tokenizer: TokenizerOpts,
    pub tree_builder: TreeBuilderOpts,

    /// Encoding label supplied by the transport layer (e.g. an HTTP
    /// `Content-Type` charset), consulted when parsing bytes.
    pub transport_encoding: Option<String>,

    /// Keep the parse error list in the result? Without this (and
    /// without `strict`) errors are discarded.
    pub collect_errors: bool,

    /// Fail on the first parse error instead of recovering.
    pub strict: bool,
}

/// The context element for a fragment parse.
#[derive(Clone, Debug)]
pub struct FragmentContext {
    pub tag_name: String,
    pub ns: Ns,
}

impl FragmentContext {
    pub fn new(tag_name: &str) -> FragmentContext {
        FragmentContext {
            tag_name: tag_name.to_string(),
            ns: Ns::Html,
        }
    }

    pub fn with_ns(tag_name: &str, ns: Ns) -> FragmentContext {
        FragmentContext {
            tag_name: tag_name.to_string(),
            ns,
        }
    }
}

/// Errors that abort a parse before a tree is produced.
#[derive(Debug)]
pub enum FatalError {
    /// Strict mode was on and the input had a parse error.
    Strict(ParseError),
    /// The fragment context tag name is not a valid element name.
    UnknownContext(String),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::Strict(err) => write!(f, "parse error in strict mode: {err}"),
            FatalError::UnknownContext(name) => {
                write!(f, "unknown fragment context element: {name:?}")
            },
        }
    }
}

impl std::error::Error for FatalError {}

/// A successful parse.
pub struct ParseResult {
    pub document: Document,
    /// The document node, or the fragment node for fragment parses.
    pub root: NodeId,
    /// Parse errors, in order of occurrence; empty unless
    /// `collect_errors` was set.
    pub errors: Vec<ParseError>,
    /// Name of the sniffed encoding, for byte input.
    pub encoding: Option<&'static str>,
    pub quirks_mode: QuirksMode,
}

/// Parse a complete document from a string.
pub fn parse_document(input: &str, opts: ParseOpts) -> Result<ParseResult, FatalError> {
    let tb = TreeBuilder::new(opts.tree_builder);
    let result = run(tb, input, opts.tokenizer.clone(), &opts)?;
    Ok(result)
}

/// Parse a complete document from bytes, running the encoding sniffer.
pub fn parse_document_bytes(input: &[u8], opts: ParseOpts) -> Result<ParseResult, FatalError> {
    let (enc, _confidence) = encoding::sniff(
        input,
        opts.transport_encoding.as_ref().map(|s| s.as_bytes()),
    );
    let decoded = encoding::decode(input, enc);
    let mut result = parse_document(&decoded, opts)?;
    result.encoding = Some(enc.name());
    Ok(result)
}

/// Parse a fragment in the given context, per the fragment parsing
/// algorithm. The result's `root` is a fragment node holding the parsed
/// children.
pub fn parse_fragment(
    input: &str,
    context: FragmentContext,
    opts: ParseOpts,
) -> Result<ParseResult, FatalError> {
    let name = validate_context_name(&context)?;
    let qname = QualName::new(context.ns, name);

    let tb = TreeBuilder::new_for_fragment(opts.tree_builder, qname.clone());
    let mut tok_opts = opts.tokenizer.clone();
    tok_opts.initial_state = Some(tb.tokenizer_state_for_context_elem());
    if context.ns == Ns::Html {
        tok_opts.last_start_tag_name = Some(context.tag_name.to_ascii_lowercase());
    }

    let mut result = run(tb, input, tok_opts, &opts)?;

    // Re-home the children of the synthetic <html> root under a
    // fragment node; that node is the fragment's root.
    let fragment = result.document.create_node(NodeData::Fragment {
        context: Some(qname),
    });
    if let Some(root) = result.document.root_element() {
        result.document.reparent_children(root, fragment);
    }
    result.root = fragment;
    Ok(result)
}

/// Byte-input variant of [`parse_fragment`].
pub fn parse_fragment_bytes(
    input: &[u8],
    context: FragmentContext,
    opts: ParseOpts,
) -> Result<ParseResult, FatalError> {
    let (enc, _confidence) = encoding::sniff(
        input,
        opts.transport_encoding.as_ref().map(|s| s.as_bytes()),
    );
    let decoded = encoding::decode(input, enc);
    let mut result = parse_fragment(&decoded, context, opts)?;
    result.encoding = Some(enc.name());
    Ok(result)
}

fn validate_context_name(context: &FragmentContext) -> Result<StrTendril, FatalError> {
    let name = &context.tag_name;
    let ok = !name.is_empty()
        && name.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !ok {
        return Err(FatalError::UnknownContext(name.clone()));
    }
    if context.ns == Ns::Html {
        Ok(StrTendril::from_slice(&name.to_ascii_lowercase()))
    } else {
        Ok(StrTendril::from_slice(name))
    }
}

fn run(
    tb: TreeBuilder,
    input: &str,
    tok_opts: TokenizerOpts,
    opts: &ParseOpts,
) -> Result<ParseResult, FatalError> {
    let mut tok = Tokenizer::new(tb, tok_opts);
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(input));

    // Scripts are not executed; a `</script>` pause just resumes.
    while let TokenizerResult::Script(_) = tok.feed(&mut queue) {}
    tok.end();

    let (document, mut errors, quirks_mode) = tok.sink.finish();

    if opts.strict {
        if let Some(first) = errors.into_iter().next() {
            return Err(FatalError::Strict(first));
        }
        errors = vec![];
    } else if !opts.collect_errors {
        errors.clear();
    }

    Ok(ParseResult {
        document,
        root: Document::DOCUMENT_NODE_ID,
        errors,
        encoding: None,
        quirks_mode,
    })
}

/// Run a custom [`TokenSink`] over the tokenized input and return it.
pub fn tokenize_to<Sink: TokenSink>(sink: Sink, input: &str, opts: TokenizerOpts) -> Sink {
    let mut tok = Tokenizer::new(sink, opts);
    let mut queue = BufferQueue::new();
    queue.push_back(StrTendril::from_slice(input));
    while let TokenizerResult::Script(_) = tok.feed(&mut queue) {}
    tok.end();
    tok.sink
}

/// The token stream for a piece of input, as an iterator. This is the
/// tokenizer sub-interface the streaming event APIs build on; the whole
/// input is tokenized in one pass.
pub fn tokenize(input: &str, opts: TokenizerOpts) -> Tokens {
    let sink = tokenize_to(Collector::new(), input, opts);
    Tokens {
        tokens: sink.tokens,
    }
}

/// Iterator over tokens; see [`tokenize`].
pub struct Tokens {
    tokens: VecDeque<(Token, Position)>,
}

impl Tokens {
    /// The tokens remaining, with their source positions.
    pub fn with_positions(self) -> impl Iterator<Item = (Token, Position)> {
        self.tokens.into_iter()
    }
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front().map(|(token, _)| token)
    }
}

struct Collector {
    tokens: VecDeque<(Token, Position)>,
}

impl Collector {
    fn new() -> Collector {
        Collector {
            tokens: VecDeque::new(),
        }
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&mut self, token: Token, pos: Position) -> TokenSinkResult<()> {
        self.tokens.push_back((token, pos));
        TokenSinkResult::Continue
    }
}

/// Convenience: parse and return only the dumpable error codes, used by
/// conformance checks that compare error sets.
pub fn parse_errors(input: &str, mut opts: ParseOpts) -> Vec<Cow<'static, str>> {
    opts.collect_errors = true;
    opts.strict = false;
    match parse_document(input, opts) {
        Ok(result) => result.errors.into_iter().map(|e| e.code).collect(),
        Err(_) => vec![],
    }
}
