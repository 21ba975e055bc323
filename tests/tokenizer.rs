// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! html5lib tokenizer conformance runner, plus a handful of inline
//! smoke tests that run without the fixture checkout.

mod foreach_html5lib_test;
use foreach_html5lib_test::foreach_html5lib_test;

use html5kit::tendril::{SliceExt, StrTendril};
use html5kit::tokenizer::states::{CdataSection, Data, Plaintext, RawData};
use html5kit::tokenizer::states::{Rawtext, Rcdata, ScriptData};
use html5kit::tokenizer::{
    BufferQueue, Doctype, EndTag, StartTag, Tag, Token, TokenSink, TokenSinkResult, Tokenizer,
    TokenizerOpts,
};
use html5kit::{Attribute, Ns, Position, QualName, TagId};
use serde_json::{Map, Value};
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use util::runner::{run_all, Test};

mod util {
    pub mod runner;
}

// some large testcases hang forever without an upper-bound of splits
const MAX_SPLITS: usize = 1000;

// Return all ways of splitting the string into at most n
// possibly-empty pieces.
fn splits(s: &str, n: usize) -> Vec<Vec<StrTendril>> {
    if n == 1 {
        return vec![vec![s.to_tendril()]];
    }

    let mut out = vec![];
    for p in s.char_indices().map(|(n, _)| n).chain(Some(s.len())) {
        let y = &s[p..];
        for mut x in splits(&s[..p], n - 1).into_iter() {
            x.push(y.to_tendril());
            out.push(x);
        }
    }

    out.extend(splits(s, n - 1));
    out.truncate(MAX_SPLITS);
    out
}

struct TokenLogger {
    tokens: Vec<Token>,
    errors: Vec<String>,
    current_str: StrTendril,
}

impl TokenLogger {
    fn new() -> TokenLogger {
        TokenLogger {
            tokens: vec![],
            errors: vec![],
            current_str: StrTendril::new(),
        }
    }

    // Push anything other than character tokens.
    fn push(&mut self, token: Token) {
        self.finish_str();
        self.tokens.push(token);
    }

    fn finish_str(&mut self) {
        if !self.current_str.is_empty() {
            let s = std::mem::take(&mut self.current_str);
            self.tokens.push(Token::Characters(s));
        }
    }

    fn get_tokens(mut self) -> (Vec<Token>, Vec<String>) {
        self.finish_str();
        (self.tokens, self.errors)
    }
}

impl TokenSink for TokenLogger {
    type Handle = ();

    fn process_token(&mut self, token: Token, _pos: Position) -> TokenSinkResult<()> {
        match token {
            Token::Characters(b) => {
                self.current_str.push_slice(&b);
            },

            Token::NullCharacter => {
                self.current_str.push_char('\0');
            },

            Token::Error(err) => {
                self.errors.push(err.code.into_owned());
            },

            Token::Tag(mut t) => {
                // The spec seems to indicate that one can emit
                // erroneous end tags with attrs, but the test cases
                // don't contain them.
                match t.kind {
                    EndTag => {
                        t.self_closing = false;
                        t.attrs = vec![];
                    },
                    _ => t.attrs.sort_by(|a1, a2| a1.name.local.cmp(&a2.name.local)),
                }
                self.push(Token::Tag(t));
            },

            Token::Eof => (),

            _ => self.push(token),
        }
        TokenSinkResult::Continue
    }
}

fn tokenize(input: Vec<StrTendril>, opts: TokenizerOpts) -> (Vec<Token>, Vec<String>) {
    let sink = TokenLogger::new();
    let mut tok = Tokenizer::new(sink, opts);
    let mut buffer = BufferQueue::new();
    for chunk in input.into_iter() {
        buffer.push_back(chunk);
        let _ = tok.feed(&mut buffer);
    }
    let _ = tok.feed(&mut buffer);
    tok.end();
    tok.sink.get_tokens()
}

trait JsonExt: Sized {
    fn get_str(&self) -> String;
    fn get_tendril(&self) -> StrTendril;
    fn get_nullable_tendril(&self) -> Option<StrTendril>;
    fn get_bool(&self) -> bool;
    fn get_obj(&self) -> &Map<String, Self>;
    fn get_list(&self) -> &Vec<Self>;
    fn find(&self, key: &str) -> &Self;
}

impl JsonExt for Value {
    fn get_str(&self) -> String {
        match *self {
            Value::String(ref s) => s.to_string(),
            _ => panic!("Value::get_str: not a String"),
        }
    }

    fn get_tendril(&self) -> StrTendril {
        match *self {
            Value::String(ref s) => s.to_tendril(),
            _ => panic!("Value::get_tendril: not a String"),
        }
    }

    fn get_nullable_tendril(&self) -> Option<StrTendril> {
        match *self {
            Value::Null => None,
            Value::String(ref s) => Some(s.to_tendril()),
            _ => panic!("Value::get_nullable_tendril: not a String"),
        }
    }

    fn get_bool(&self) -> bool {
        match *self {
            Value::Bool(b) => b,
            _ => panic!("Value::get_bool: not a Bool"),
        }
    }

    fn get_obj(&self) -> &Map<String, Value> {
        match self {
            Value::Object(m) => m,
            _ => panic!("Value::get_obj: not an Object"),
        }
    }

    fn get_list(&self) -> &Vec<Value> {
        match self {
            Value::Array(m) => m,
            _ => panic!("Value::get_list: not an Array"),
        }
    }

    fn find(&self, key: &str) -> &Value {
        self.get_obj().get(key).unwrap()
    }
}

// Parse a JSON object (other than "ParseError") to a token.
fn json_to_token(js: &Value) -> Token {
    let parts = js.get_list();
    let args: Vec<&Value> = parts[1..].iter().collect();
    match &*parts[0].get_str() {
        "DOCTYPE" => Token::Doctype(Doctype {
            name: args[0].get_nullable_tendril(),
            public_id: args[1].get_nullable_tendril(),
            system_id: args[2].get_nullable_tendril(),
            force_quirks: !args[3].get_bool(),
        }),

        "StartTag" => {
            let name = args[0].get_tendril();
            let id = TagId::from_name_any_case(&name);
            Token::Tag(Tag {
                kind: StartTag,
                name,
                id,
                attrs: args[1]
                    .get_obj()
                    .iter()
                    .map(|(k, v)| Attribute {
                        name: QualName::new(Ns::None, k.to_tendril()),
                        value: v.get_tendril(),
                    })
                    .collect(),
                self_closing: match args.get(2) {
                    Some(b) => b.get_bool(),
                    None => false,
                },
            })
        },

        "EndTag" => {
            let name = args[0].get_tendril();
            let id = TagId::from_name_any_case(&name);
            Token::Tag(Tag {
                kind: EndTag,
                name,
                id,
                attrs: vec![],
                self_closing: false,
            })
        },

        "Comment" => Token::Comment(args[0].get_tendril()),

        "Character" => Token::Characters(args[0].get_tendril()),

        _ => panic!("don't understand token {parts:?}"),
    }
}

// Parse the "output" field of the test case into a vector of tokens.
fn json_to_tokens(js_tokens: &Value, js_errors: &[Value]) -> (Vec<Token>, Vec<String>) {
    // A TokenLogger so that character tokens are combined the same way.
    let mut sink = TokenLogger::new();
    for tok in js_tokens.get_list().iter() {
        assert_eq!(
            sink.process_token(json_to_token(tok), Position::START),
            TokenSinkResult::Continue
        );
    }

    for err in js_errors {
        sink.errors.push(err.find("code").get_str());
    }

    sink.get_tokens()
}

// Undo the escaping in "doubleEscaped" tests.
fn unescape(s: &str) -> Option<String> {
    let mut out = String::with_capacity(s.len());
    let mut it = s.chars().peekable();
    loop {
        match it.next() {
            None => return Some(out),
            Some('\\') => {
                if it.peek() != Some(&'u') {
                    panic!("can't understand escape");
                }
                let _ = it.next();
                let hex: String = it.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    // Some of the tests use lone surrogates, which we
                    // cannot represent in UTF-8 input.
                    None => return None,
                    Some(c) => out.push(c),
                }
            },
            Some(c) => out.push(c),
        }
    }
}

fn unescape_json(js: &Value) -> Value {
    match js {
        // unwrap is OK here because the spec'd *output* of the
        // tokenizer never contains a lone surrogate.
        Value::String(s) => Value::String(unescape(s).unwrap()),
        Value::Array(xs) => Value::Array(xs.iter().map(unescape_json).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::new();
            for (k, v) in obj.iter() {
                new_obj.insert(k.clone(), unescape_json(v));
            }
            Value::Object(new_obj)
        },
        _ => js.clone(),
    }
}

fn mk_test(
    desc: String,
    input: String,
    expect: Value,
    expect_errors: Vec<Value>,
    opts: TokenizerOpts,
) -> Test {
    Test {
        name: desc,
        skip: false,
        test: Box::new(move || {
            // Split up the input at different points to test
            // incremental tokenization.
            let insplits = splits(&input, 3);
            for input in insplits.into_iter() {
                let (tokens, errors) = tokenize(input.clone(), opts.clone());
                let (expect_toks, expect_errs) = json_to_tokens(&expect, &expect_errors);
                if tokens != expect_toks {
                    panic!("\ninput: {input:?}\ngot: {tokens:?}\nexpected: {expect_toks:?}");
                }
                // Error *sets* must agree when the fixture lists them.
                if !expect_errs.is_empty() {
                    for code in &expect_errs {
                        if !errors.contains(code) {
                            panic!(
                                "\ninput: {input:?}\nmissing error {code:?}, got {errors:?}"
                            );
                        }
                    }
                }
            }
        }),
    }
}

fn mk_tests(tests: &mut Vec<Test>, filename: &str, js: &Value, xml_coercion: bool) {
    let obj = js.get_obj();
    let mut input = js.find("input").get_str();
    let mut expect = js.find("output").clone();
    let expect_errors = js
        .get("errors")
        .map(JsonExt::get_list)
        .map(Vec::as_slice)
        .unwrap_or_default();
    let desc = format!("tok: {}: {}", filename, js.find("description").get_str());

    // "Double-escaped" tests require additional processing of the
    // input and output.
    if obj.get("doubleEscaped").map_or(false, |j| j.get_bool()) {
        match unescape(&input) {
            None => return,
            Some(i) => input = i,
        }
        expect = unescape_json(&expect);
    }

    // Some tests have a last start tag name.
    let start_tag = obj.get("lastStartTag").map(|s| s.get_str());

    // Some tests want to start in a state other than Data.
    let state_overrides = match obj.get("initialStates") {
        Some(Value::Array(xs)) => xs
            .iter()
            .map(|s| {
                Some(match &s.get_str()[..] {
                    "PLAINTEXT state" => Plaintext,
                    "RAWTEXT state" => RawData(Rawtext),
                    "RCDATA state" => RawData(Rcdata),
                    "Script data state" => RawData(ScriptData),
                    "CDATA section state" => CdataSection,
                    "Data state" => Data,
                    s => panic!("don't know state {s}"),
                })
            })
            .collect(),
        None => vec![None],
        _ => panic!("don't understand initialStates value"),
    };

    for state in state_overrides.into_iter() {
        let mut newdesc = desc.clone();
        if let Some(s) = state {
            newdesc = format!("{newdesc} (in state {s:?})");
        };

        tests.push(mk_test(
            newdesc,
            input.clone(),
            expect.clone(),
            expect_errors.to_owned(),
            TokenizerOpts {
                initial_state: state,
                last_start_tag_name: start_tag.clone(),
                xml_coercion,

                // Not discarding a BOM is what the test suite expects;
                // see html5lib/html5lib-tests#2
                discard_bom: false,
            },
        ));
    }
}

fn tests(src_dir: &Path) -> Vec<Test> {
    let mut tests = vec![];

    let mut add_test = |path: &Path, mut file: File| {
        let mut s = String::new();
        file.read_to_string(&mut s).expect("file reading error");
        let js: Value = serde_json::from_str(&s).expect("json parse error");
        let filename = path.file_name().unwrap().to_str().unwrap();

        if let Some(Value::Array(lst)) = js.get_obj().get("tests") {
            for test in lst.iter() {
                mk_tests(&mut tests, filename, test, false);
            }
        }
        if let Some(Value::Array(lst)) = js.get_obj().get("xmlViolationTests") {
            for test in lst.iter() {
                mk_tests(&mut tests, filename, test, true);
            }
        }
    };

    foreach_html5lib_test(src_dir, "tokenizer", OsStr::new("test"), &mut add_test);

    tests
}

//
// A few inline cases so this suite is useful without the fixtures.
//

fn quick(input: &str) -> (Vec<Token>, Vec<String>) {
    tokenize(vec![input.to_tendril()], TokenizerOpts::default())
}

fn inline_tests() -> Vec<Test> {
    fn t(name: &str, f: impl Fn() + 'static) -> Test {
        Test {
            name: format!("tok inline: {name}"),
            skip: false,
            test: Box::new(f),
        }
    }

    vec![
        t("simple tag with attribute", || {
            let (tokens, errors) = quick("<div class=a>x</div>");
            assert!(errors.is_empty());
            assert_eq!(tokens.len(), 3);
            match &tokens[0] {
                Token::Tag(tag) => {
                    assert_eq!(tag.kind, StartTag);
                    assert_eq!(&*tag.name, "div");
                    assert_eq!(tag.id, TagId::Div);
                    assert_eq!(tag.attrs.len(), 1);
                    assert_eq!(&*tag.attrs[0].name.local, "class");
                    assert_eq!(&*tag.attrs[0].value, "a");
                },
                other => panic!("expected start tag, got {other:?}"),
            }
            assert_eq!(tokens[1], Token::Characters("x".to_tendril()));
        }),
        t("numeric character references", || {
            let (tokens, _) = quick("&#60;div&#62;");
            assert_eq!(tokens, vec![Token::Characters("<div>".to_tendril())]);
        }),
        t("named reference with and without semicolon", || {
            let (tokens, errors) = quick("&amp;&amp x");
            assert_eq!(tokens, vec![Token::Characters("&& x".to_tendril())]);
            assert!(errors
                .iter()
                .any(|e| e == "missing-semicolon-after-character-reference"));
        }),
        t("ambiguous ampersand in attribute", || {
            let (tokens, _) = quick("<a href=\"?a&ampb\">");
            match &tokens[0] {
                Token::Tag(tag) => assert_eq!(&*tag.attrs[0].value, "?a&ampb"),
                other => panic!("expected tag, got {other:?}"),
            }
        }),
        t("windows-1252 numeric remapping", || {
            let (tokens, errors) = quick("&#x80;");
            assert_eq!(tokens, vec![Token::Characters("\u{20ac}".to_tendril())]);
            assert!(errors.iter().any(|e| e == "control-character-reference"));
        }),
        t("duplicate attribute dropped", || {
            let (tokens, errors) = quick("<p id=\"a\" id=\"b\">");
            match &tokens[0] {
                Token::Tag(tag) => {
                    assert_eq!(tag.attrs.len(), 1);
                    assert_eq!(&*tag.attrs[0].value, "a");
                },
                other => panic!("expected tag, got {other:?}"),
            }
            assert_eq!(errors, vec!["duplicate-attribute".to_string()]);
        }),
        t("eof in tag", || {
            let (tokens, errors) = quick("<div foo=bar");
            assert_eq!(tokens, vec![]);
            assert_eq!(errors, vec!["eof-in-tag".to_string()]);
        }),
        t("plaintext swallows everything", || {
            let (tokens, _) = tokenize(
                vec!["</x><y>".to_tendril()],
                TokenizerOpts {
                    initial_state: Some(Plaintext),
                    ..Default::default()
                },
            );
            assert_eq!(tokens, vec![Token::Characters("</x><y>".to_tendril())]);
        }),
        t("appropriate end tag leaves rawtext", || {
            let (tokens, _) = tokenize(
                vec!["x</wrong></title>y".to_tendril()],
                TokenizerOpts {
                    initial_state: Some(RawData(Rcdata)),
                    last_start_tag_name: Some("title".to_string()),
                    ..Default::default()
                },
            );
            assert_eq!(tokens.len(), 3);
            assert_eq!(tokens[0], Token::Characters("x</wrong>".to_tendril()));
            assert!(matches!(&tokens[1], Token::Tag(tag) if tag.kind == EndTag
                && &*tag.name == "title"));
            assert_eq!(tokens[2], Token::Characters("y".to_tendril()));
        }),
        t("doctype with ids", || {
            let (tokens, _) = quick(
                "<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \
                 \"http://www.w3.org/TR/html4/strict.dtd\">",
            );
            match &tokens[0] {
                Token::Doctype(dt) => {
                    assert_eq!(dt.name.as_deref(), Some("html"));
                    assert_eq!(dt.public_id.as_deref(), Some("-//W3C//DTD HTML 4.01//EN"));
                    assert_eq!(
                        dt.system_id.as_deref(),
                        Some("http://www.w3.org/TR/html4/strict.dtd")
                    );
                    assert!(!dt.force_quirks);
                },
                other => panic!("expected doctype, got {other:?}"),
            }
        }),
        t("comment end bang", || {
            let (tokens, errors) = quick("<!--c--!>");
            assert_eq!(tokens, vec![Token::Comment("c".to_tendril())]);
            assert_eq!(errors, vec!["incorrectly-closed-comment".to_string()]);
        }),
        t("script double escape", || {
            let (tokens, _) = tokenize(
                vec!["<!--<script>alert('</script>')</script>".to_tendril()],
                TokenizerOpts {
                    initial_state: Some(RawData(ScriptData)),
                    last_start_tag_name: Some("script".to_string()),
                    ..Default::default()
                },
            );
            // The inner </script> ends double-escaped mode; the final
            // one produces the end tag.
            assert!(tokens
                .iter()
                .any(|t| matches!(t, Token::Tag(tag) if tag.kind == EndTag)));
        }),
    ]
}

fn main() {
    let mut all = tests(Path::new(env!("CARGO_MANIFEST_DIR")));
    all.extend(inline_tests());
    run_all(all);
}
