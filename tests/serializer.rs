// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serializer round-trips and option coverage.

use html5kit::driver::{parse_document, parse_fragment, FragmentContext, ParseOpts};
use html5kit::serialize::{serialize_to_string, AttrValueQuoting, SerializeOpts, TraversalScope};
use html5kit::Document;

fn parse_and_serialize(input: &str) -> String {
    parse_and_serialize_opts(input, SerializeOpts::default())
}

fn parse_and_serialize_opts(input: &str, opts: SerializeOpts) -> String {
    let result = parse_fragment(input, FragmentContext::new("body"), ParseOpts::default())
        .expect("parse failed");
    serialize_to_string(&result.document, result.root, opts)
}

macro_rules! test_fn {
    ($f:ident, $name:ident, $input:expr, $output:expr) => {
        #[test]
        fn $name() {
            assert_eq!($output, &*$f($input));
        }
    };

    // Shorthand for $output = $input
    ($f:ident, $name:ident, $input:expr) => {
        test_fn!($f, $name, $input, $input);
    };
}

macro_rules! test {
    ($($t:tt)*) => {
        test_fn!(parse_and_serialize, $($t)*);
    };
}

test!(empty, r#""#);
test!(fuzz, "<a a=\r\n", "");
test!(smoke_test, r#"<p><i>Hello</i>, World!</p>"#);

test!(misnest, r#"<p><i>Hello!</p>, World!</i>"#,
    r#"<p><i>Hello!</i></p><i>, World!</i>"#);

test!(attr_literal, r#"<base foo="<'>">"#);
test!(attr_escape_amp, r#"<base foo="&amp;">"#);
test!(attr_escape_amp_2, r#"<base foo=&amp>"#, r#"<base foo="&amp;">"#);
test!(attr_escape_nbsp, "<base foo=x\u{a0}y>", r#"<base foo="x&nbsp;y">"#);
test!(attr_escape_quot, r#"<base foo='"'>"#, r#"<base foo="&quot;">"#);
test!(attr_escape_several, r#"<span foo=3 title='test "with" &amp;quot;'>"#,
    r#"<span foo="3" title="test &quot;with&quot; &amp;quot;"></span>"#);

test!(text_literal, r#"<p>"'"</p>"#);
test!(text_escape_amp, r#"<p>&amp;</p>"#);
test!(text_escape_amp_2, r#"<p>&amp</p>"#, r#"<p>&amp;</p>"#);
test!(text_escape_nbsp, "<p>x\u{a0}y</p>", r#"<p>x&nbsp;y</p>"#);
test!(text_escape_lt, r#"<p>&lt;</p>"#);
test!(text_escape_gt, r#"<p>&gt;</p>"#);
test!(text_escape_gt2, r#"<p>></p>"#, r#"<p>&gt;</p>"#);

test!(script_literal, r#"<script>(x & 1) < 2; y > "foo" + 'bar'</script>"#);
test!(style_literal, r#"<style>(x & 1) < 2; y > "foo" + 'bar'</style>"#);
test!(xmp_literal, r#"<xmp>(x & 1) < 2; y > "foo" + 'bar'</xmp>"#);
test!(iframe_literal, r#"<iframe>(x & 1) < 2; y > "foo" + 'bar'</iframe>"#);
test!(noembed_literal, r#"<noembed>(x & 1) < 2; y > "foo" + 'bar'</noembed>"#);
test!(noframes_literal, r#"<noframes>(x & 1) < 2; y > "foo" + 'bar'</noframes>"#);

test!(pre_lf_0, "<pre>foo bar</pre>");
test!(pre_lf_1, "<pre>\nfoo bar</pre>", "<pre>foo bar</pre>");
test!(pre_lf_2, "<pre>\n\nfoo bar</pre>");

test!(textarea_lf_0, "<textarea>foo bar</textarea>");
test!(textarea_lf_1, "<textarea>\nfoo bar</textarea>", "<textarea>foo bar</textarea>");
test!(textarea_lf_2, "<textarea>\n\nfoo bar</textarea>");

test!(listing_lf_0, "<listing>foo bar</listing>");
test!(listing_lf_1, "<listing>\nfoo bar</listing>", "<listing>foo bar</listing>");
test!(listing_lf_2, "<listing>\n\nfoo bar</listing>");

test!(comment_1, r#"<p>hi <!--world--></p>"#);
test!(comment_2, r#"<p>hi <!-- world--></p>"#);
test!(comment_3, r#"<p>hi <!--world --></p>"#);
test!(comment_4, r#"<p>hi <!-- world --></p>"#);

test!(attr_ns_1, r#"<svg xmlns="bleh"></svg>"#);
test!(attr_ns_2, r#"<svg xmlns:foo="bleh"></svg>"#);
test!(attr_ns_3, r#"<svg xmlns:xlink="bleh"></svg>"#);
test!(attr_ns_4, r#"<svg xlink:href="bleh"></svg>"#);

#[test]
fn doctype() {
    let result = parse_document("<!doctype html>", ParseOpts::default()).unwrap();
    let mut doc = result.document;
    let root = doc.root_element().expect("no root");
    doc.unlink(root); // keep only the doctype
    assert_eq!(
        serialize_to_string(&doc, Document::DOCUMENT_NODE_ID, SerializeOpts::default()),
        "<!DOCTYPE html>"
    );
}

#[test]
fn include_node_scope() {
    let result = parse_fragment(
        "<p>text</p>",
        FragmentContext::new("body"),
        ParseOpts::default(),
    )
    .unwrap();
    let doc = &result.document;
    let p = doc.children(result.root).next().expect("no <p>");
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    assert_eq!(serialize_to_string(doc, p, opts), "<p>text</p>");
}

#[test]
fn trailing_solidus() {
    let opts = SerializeOpts {
        use_trailing_solidus: true,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts("<img src=x><br>", opts),
        r#"<img src="x"/><br/>"#
    );
}

#[test]
fn quote_when_needed() {
    let opts = SerializeOpts {
        quote_attr_values: AttrValueQuoting::WhenNeeded,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts(r#"<base a="simple" b="two words" c="">"#, opts),
        r#"<base a=simple b="two words" c="">"#
    );
}

#[test]
fn single_quote_char() {
    let opts = SerializeOpts {
        quote_char: '\'',
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts(r#"<base foo="don't">"#, opts),
        r#"<base foo='don&#39;t'>"#
    );
}

#[test]
fn minimize_boolean_attributes() {
    let opts = SerializeOpts {
        minimize_boolean_attributes: true,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts(r#"<input checked="checked" type="checkbox">"#, opts),
        r#"<input checked type="checkbox">"#
    );
}

#[test]
fn escape_lt_in_attrs() {
    let opts = SerializeOpts {
        escape_lt_in_attrs: true,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts(r#"<base foo="a<b>c">"#, opts),
        r#"<base foo="a&lt;b&gt;c">"#
    );
}

#[test]
fn escape_rcdata_off() {
    let opts = SerializeOpts {
        escape_rcdata: false,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts("<title>a &amp; b</title>", opts),
        "<title>a & b</title>"
    );
}

#[test]
fn strip_whitespace() {
    let opts = SerializeOpts {
        strip_whitespace: true,
        ..Default::default()
    };
    assert_eq!(
        parse_and_serialize_opts("<p>a   b\n\tc</p><pre>a   b</pre>", opts),
        "<p>a b c</p><pre>a   b</pre>"
    );
}

#[test]
fn inject_meta_charset() {
    let result = parse_document(
        "<html><head><meta charset=latin1><title>t</title></head><body></body></html>",
        ParseOpts::default(),
    )
    .unwrap();
    let opts = SerializeOpts {
        inject_meta_charset: true,
        encoding: Some("utf-8"),
        ..Default::default()
    };
    let out = serialize_to_string(&result.document, result.root, opts);
    assert_eq!(
        out,
        r#"<html><head><meta charset="utf-8"><title>t</title></head><body></body></html>"#
    );
}

#[test]
fn noscript_raw_depends_on_scripting() {
    let mut parse_opts = ParseOpts::default();
    parse_opts.tree_builder.scripting_enabled = true;
    let result = parse_fragment("<noscript>&amp;</noscript>", {
        FragmentContext::new("body")
    }, parse_opts)
    .unwrap();

    // Parsed with scripting on, the contents are a raw text node.
    let scripting_on = SerializeOpts::default();
    assert_eq!(
        serialize_to_string(&result.document, result.root, scripting_on),
        "<noscript>&amp;</noscript>"
    );

    let scripting_off = SerializeOpts {
        scripting_enabled: false,
        ..Default::default()
    };
    assert_eq!(
        serialize_to_string(&result.document, result.root, scripting_off),
        "<noscript>&amp;amp;</noscript>"
    );
}
