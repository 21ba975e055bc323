// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end parses checked against exact tree dumps, plus a dump
//! round-trip and a crash-resistance sweep.

use html5kit::driver::{
    parse_document, parse_document_bytes, parse_fragment, tokenize, FatalError, FragmentContext,
    ParseOpts,
};
use html5kit::dump::{to_test_format_of, to_text};
use html5kit::tokenizer::{Token, TokenizerOpts};
use html5kit::tree_builder::QuirksMode;
use html5kit::{Attribute, Document, NodeData, Ns, QualName};

fn dump_of(input: &str) -> String {
    let result = parse_document(input, ParseOpts::default()).unwrap();
    to_test_format_of(&result.document, result.root)
}

fn collecting() -> ParseOpts {
    ParseOpts {
        collect_errors: true,
        ..Default::default()
    }
}

#[test]
fn simple_document() {
    let input = "<html><head></head><body><p>Hello</p></body></html>";
    let result = parse_document(input, ParseOpts::default()).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <p>
|       \"Hello\""
    );
    assert_eq!(to_text(&result.document, result.root), "Hello");
    assert!(result.errors.is_empty());
}

#[test]
fn bare_text_gets_a_body() {
    let result = parse_document("Hello", collecting()).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     \"Hello\""
    );
    assert_eq!(to_text(&result.document, result.root), "Hello");
    assert!(result
        .errors
        .iter()
        .any(|e| e.code == "expected-doctype-but-got-character"));
    assert_eq!(result.quirks_mode, QuirksMode::Quirks);
}

#[test]
fn table_repair_and_foster_parenting() {
    let input = "<table><tr><tr><td><td><span><th><span>X";
    let result = parse_document(input, ParseOpts::default()).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <table>
|       <tbody>
|         <tr>
|         <tr>
|           <td>
|           <td>
|             <span>
|           <th>
|             <span>
|               \"X\""
    );
    assert_eq!(to_text(&result.document, result.root), "X");
}

#[test]
fn template_contents_are_separate() {
    let result = parse_document("<body><template>Hello</template>", ParseOpts::default()).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <template>
|       content
|         \"Hello\""
    );
    // Template content is not reader text of the main tree.
    assert_eq!(to_text(&result.document, result.root), "");
}

#[test]
fn token_stream_starts_with_doctype() {
    let mut tokens = tokenize(
        "<!DOCTYPE html><html><body>Hi</body></html>",
        TokenizerOpts::default(),
    );
    match tokens.next() {
        Some(Token::Doctype(dt)) => {
            assert_eq!(dt.name.as_deref(), Some("html"));
            assert_eq!(dt.public_id, None);
            assert_eq!(dt.system_id, None);
            assert!(!dt.force_quirks);
        },
        other => panic!("expected a doctype token, got {other:?}"),
    }
}

#[test]
fn numeric_references_in_text() {
    assert_eq!(
        dump_of("&#60;div&#62;"),
        "\
| <html>
|   <head>
|   <body>
|     \"<div>\""
    );
}

#[test]
fn duplicate_attribute_keeps_first() {
    let result = parse_document("<p id=\"a\" id=\"b\">Test</p>", collecting()).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <p>
|       id=\"a\"
|       \"Test\""
    );
    assert!(result.errors.iter().any(|e| e.code == "duplicate-attribute"));
}

#[test]
fn fragment_in_tbody_context() {
    let result = parse_fragment(
        "<tr><td>Cell 1</td><td>Cell 2</td></tr>",
        FragmentContext::new("tbody"),
        ParseOpts::default(),
    )
    .unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <tr>
|   <td>
|     \"Cell 1\"
|   <td>
|     \"Cell 2\""
    );
    // A single <tr> child under the fragment root.
    assert_eq!(result.document.children(result.root).count(), 1);
}

#[test]
fn select_fragment_regression() {
    // Tables inside a select-context fragment once recursed forever.
    let result = parse_fragment(
        "<table></table><li><table></table>",
        FragmentContext::new("select"),
        ParseOpts::default(),
    )
    .unwrap();
    assert_eq!(to_test_format_of(&result.document, result.root), "");
}

#[test]
fn fragment_contexts_terminate() {
    let contexts = [
        "div", "table", "tbody", "tr", "template", "select", "svg", "math", "script", "style",
        "title", "textarea", "xmp", "iframe", "noembed", "noframes", "noscript", "plaintext",
    ];
    let inputs = [
        "x",
        "<table><li><table>",
        "<b><i></b></i>",
        "</plaintext><div>&amp",
        "<![CDATA[x]]>",
    ];
    for context in contexts {
        let ns = match context {
            "svg" => Ns::Svg,
            "math" => Ns::MathMl,
            _ => Ns::Html,
        };
        for input in inputs {
            let result = parse_fragment(
                input,
                FragmentContext::with_ns(context, ns),
                ParseOpts::default(),
            );
            assert!(result.is_ok(), "fragment parse failed for {context}/{input}");
        }
    }
}

#[test]
fn unknown_fragment_context_is_fatal() {
    let err = parse_fragment("x", FragmentContext::new(""), ParseOpts::default());
    assert!(matches!(err, Err(FatalError::UnknownContext(_))));

    let err = parse_fragment("x", FragmentContext::new("not a name"), ParseOpts::default());
    assert!(matches!(err, Err(FatalError::UnknownContext(_))));
}

#[test]
fn strict_mode_aborts() {
    let opts = ParseOpts {
        strict: true,
        ..Default::default()
    };
    match parse_document("<p id=a id=b>", opts) {
        Err(FatalError::Strict(err)) => {
            // The duplicate attribute fires in the tokenizer, before
            // the tag ever reaches tree construction.
            assert_eq!(err.code, "duplicate-attribute");
            assert_eq!(err.line, 1);
        },
        other => panic!("expected strict failure, got {:?}", other.is_ok()),
    }

    let opts = ParseOpts {
        strict: true,
        ..Default::default()
    };
    assert!(parse_document("<!DOCTYPE html><p>fine</p>", opts).is_ok());
}

#[test]
fn bytes_entry_reports_encoding() {
    let result = parse_document_bytes(b"<meta charset=utf-8><p>ok</p>", ParseOpts::default())
        .unwrap();
    assert_eq!(result.encoding, Some("UTF-8"));

    let result = parse_document_bytes(b"caf\xe9", ParseOpts::default()).unwrap();
    assert_eq!(result.encoding, Some("windows-1252"));
    assert_eq!(to_text(&result.document, result.root), "café");
}

#[test]
fn adoption_agency_misnesting() {
    assert_eq!(
        dump_of("<b><i>x</b>y</i>"),
        "\
| <html>
|   <head>
|   <body>
|     <b>
|       <i>
|         \"x\"
|     <i>
|       \"y\""
    );
}

#[test]
fn foreign_content_dump() {
    assert_eq!(
        dump_of("<svg><foreignObject><div>x</div></foreignObject></svg>"),
        "\
| <html>
|   <head>
|   <body>
|     <svg svg>
|       <svg foreignObject>
|         <div>
|           \"x\""
    );
}

#[test]
fn svg_attribute_adjustment() {
    assert_eq!(
        dump_of("<svg viewbox=\"0 0 1 1\" xlink:href=\"#x\"></svg>"),
        "\
| <html>
|   <head>
|   <body>
|     <svg svg>
|       xlink href=\"#x\"
|       viewBox=\"0 0 1 1\""
    );
}

#[test]
fn scripting_flag_changes_noscript() {
    let mut opts = collecting();
    opts.tree_builder.scripting_enabled = true;
    let result = parse_document("<body><noscript><p>x</p></noscript>", opts).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <noscript>
|       \"<p>x</p>\""
    );

    let mut opts = collecting();
    opts.tree_builder.scripting_enabled = false;
    let result = parse_document("<body><noscript><p>x</p></noscript>", opts).unwrap();
    assert_eq!(
        to_test_format_of(&result.document, result.root),
        "\
| <html>
|   <head>
|   <body>
|     <noscript>
|       <p>
|         \"x\""
    );
}

#[test]
fn every_node_is_reachable_and_parented() {
    let input = "<!DOCTYPE html><div><p>a<b>b</b><table><td>c</td></table></div><!--done-->";
    let result = parse_document(input, ParseOpts::default()).unwrap();
    let doc = &result.document;

    let mut stack = vec![Document::DOCUMENT_NODE_ID];
    while let Some(id) = stack.pop() {
        for child in doc.children(id) {
            assert_eq!(doc[child].parent(), Some(id));
            stack.push(child);
        }
    }
}

#[test]
fn clone_node_matches_dump() {
    let input = "<div id=x><p>a</p><p>b</p></div>";
    let result = parse_document(input, ParseOpts::default()).unwrap();
    let mut doc = result.document;
    let body = doc
        .children(doc.root_element().unwrap())
        .nth(1)
        .expect("no body");
    let div = doc.children(body).next().expect("no div");

    let before = to_test_format_of(&doc, body);
    let copy = doc.clone_node(div, true);
    let holder = doc.create_node(NodeData::Fragment { context: None });
    doc.append(holder, copy);

    assert_eq!(to_test_format_of(&doc, holder), before);
}

//
// Dump round-trip: rebuild a tree from its dump and re-dump it.
//

fn from_test_format(dump: &str) -> Document {
    let mut doc = Document::new();
    // (indent, node) pairs; parents are the deepest shallower entry.
    let mut stack: Vec<(usize, html5kit::NodeId)> = vec![(0, Document::DOCUMENT_NODE_ID)];

    for line in dump.lines() {
        let line = line.strip_prefix('|').expect("dump line without |");
        let indent = line.len() - line.trim_start_matches(' ').len();
        let content = &line[indent..];

        // Attribute lines attach to the current element.
        if !content.starts_with('<') && !content.starts_with('"') && content != "content" {
            let (name, rest) = content.split_once("=\"").expect("bad attribute line");
            let value = rest.strip_suffix('"').expect("bad attribute line");
            let (ns, local) = match name.split_once(' ') {
                Some(("xlink", l)) => (Ns::XLink, l),
                Some(("xml", l)) => (Ns::Xml, l),
                Some(("xmlns", l)) => (Ns::XmlNs, l),
                _ => (Ns::None, name),
            };
            let &(_, elem) = stack.last().unwrap();
            doc[elem]
                .as_element_mut()
                .expect("attribute outside element")
                .attrs
                .push(Attribute {
                    name: QualName::new(ns, local.into()),
                    value: value.into(),
                });
            continue;
        }

        while stack.last().map_or(false, |&(d, _)| d >= indent) {
            stack.pop();
        }
        let parent = stack.last().unwrap().1;

        if content == "content" {
            let contents = doc[parent]
                .as_element()
                .and_then(|e| e.template_contents)
                .expect("content outside template");
            stack.push((indent, contents));
            continue;
        }

        let node = if let Some(rest) = content.strip_prefix("<!DOCTYPE ") {
            let rest = rest.strip_suffix('>').unwrap();
            let (name, ids) = match rest.split_once(" \"") {
                None => (rest, None),
                Some((name, ids)) => (name, Some(ids)),
            };
            let (public_id, system_id) = match ids {
                None => (None, None),
                Some(ids) => {
                    let ids = ids.strip_suffix('"').unwrap();
                    let (public, system) = ids.split_once("\" \"").unwrap();
                    (Some(public.into()), Some(system.into()))
                },
            };
            doc.create_node(NodeData::Doctype {
                name: (!name.is_empty()).then(|| name.into()),
                public_id,
                system_id,
                force_quirks: false,
            })
        } else if let Some(rest) = content.strip_prefix("<!-- ") {
            let text = rest.strip_suffix(" -->").unwrap();
            doc.create_node(NodeData::Comment(text.into()))
        } else if let Some(rest) = content.strip_prefix('"') {
            let text = rest.strip_suffix('"').unwrap();
            doc.create_node(NodeData::Text(text.into()))
        } else {
            let name = content
                .strip_prefix('<')
                .and_then(|c| c.strip_suffix('>'))
                .expect("bad element line");
            let (ns, local) = if let Some(l) = name.strip_prefix("svg ") {
                (Ns::Svg, l)
            } else if let Some(l) = name.strip_prefix("math ") {
                (Ns::MathMl, l)
            } else {
                (Ns::Html, name)
            };
            doc.create_element(QualName::new(ns, local.into()), vec![])
        };

        doc.append(parent, node);
        stack.push((indent, node));
    }

    doc
}

#[test]
fn dump_round_trips() {
    let inputs = [
        "<!DOCTYPE html><p class=a>x</p>",
        "<table><td>x</td></table>",
        "<template><b>y</b></template>",
        "<svg xlink:href=\"#\"><circle/></svg>",
        "<!-- c --><p>z</p>",
    ];
    for input in inputs {
        let dump = dump_of(input);
        let rebuilt = from_test_format(&dump);
        assert_eq!(
            to_test_format_of(&rebuilt, Document::DOCUMENT_NODE_ID),
            dump,
            "round trip failed for {input}"
        );
    }
}

//
// Crash resistance: arbitrary inputs must terminate without panicking.
//

struct Lcg(u64);

impl Lcg {
    fn next_byte(&mut self) -> u8 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u8
    }
}

#[test]
fn arbitrary_bytes_parse_without_panic() {
    let mut lcg = Lcg(0x5eed);
    for _ in 0..500 {
        let len = (lcg.next_byte() as usize) % 64;
        let bytes: Vec<u8> = (0..len).map(|_| lcg.next_byte()).collect();
        let result = parse_document_bytes(&bytes, ParseOpts::default());
        assert!(result.is_ok());
    }
}

#[test]
fn markup_soup_parses_without_panic() {
    let pieces = [
        "<", ">", "</", "<!", "&", "&#", "&#x", "&amp", ";", "\"", "'", "=", "table", "b", "i",
        "select", "template", "svg", "math", "tr", "td", "--", "]]>", "<![CDATA[", "\0", " ",
        "<!DOCTYPE", "p", "/", "\r\n",
    ];
    let mut lcg = Lcg(0xf00d);
    for _ in 0..300 {
        let n = 1 + (lcg.next_byte() as usize) % 24;
        let input: String = (0..n)
            .map(|_| pieces[(lcg.next_byte() as usize) % pieces.len()])
            .collect();
        let result = parse_document(&input, ParseOpts::default());
        assert!(result.is_ok(), "failed on {input:?}");
    }
}
