// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! html5lib tree-construction conformance runner.

mod foreach_html5lib_test;
use foreach_html5lib_test::foreach_html5lib_test;

use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::BufRead;
use std::path::Path;
use std::{io, mem};

use html5kit::driver::{parse_document, parse_fragment, FragmentContext, ParseOpts};
use html5kit::dump::to_test_format_of;
use html5kit::Ns;

use util::runner::{run_all, Test};

mod util {
    pub mod runner;
}

fn parse_tests<It: Iterator<Item = String>>(mut lines: It) -> Vec<HashMap<String, String>> {
    let mut tests = vec![];
    let mut test = HashMap::new();
    let mut key: Option<String> = None;
    let mut val = String::new();

    macro_rules! finish_val ( () => (
        match key.take() {
            None => (),
            Some(key) => {
                assert!(test.insert(key, mem::take(&mut val)).is_none());
            }
        }
    ));

    macro_rules! finish_test ( () => (
        if !test.is_empty() {
            tests.push(mem::take(&mut test));
        }
    ));

    loop {
        match lines.next() {
            None => break,
            Some(line) => {
                if let Some(rest) = line.strip_prefix('#') {
                    finish_val!();
                    if line == "#data" {
                        finish_test!();
                    }
                    key = Some(rest.to_owned());
                } else {
                    val.push_str(&line);
                    val.push('\n');
                }
            },
        }
    }

    finish_val!();
    finish_test!();
    tests
}

fn context_from_field(field: &str) -> FragmentContext {
    if let Some(cx) = field.strip_prefix("svg ") {
        FragmentContext::with_ns(cx, Ns::Svg)
    } else if let Some(cx) = field.strip_prefix("math ") {
        FragmentContext::with_ns(cx, Ns::MathMl)
    } else {
        FragmentContext::new(field)
    }
}

fn make_test(tests: &mut Vec<Test>, filename: &str, idx: usize, fields: HashMap<String, String>) {
    let scripting_flags = &[false, true];
    let scripting_flags = if fields.contains_key("script-off") {
        &scripting_flags[0..1]
    } else if fields.contains_key("script-on") {
        &scripting_flags[1..2]
    } else {
        &scripting_flags[0..2]
    };
    let name = format!("tb: {filename}-{idx}");
    for scripting_enabled in scripting_flags {
        let test = make_test_desc_with_scripting_flag(&name, &fields, *scripting_enabled);
        tests.push(test);
    }
}

fn make_test_desc_with_scripting_flag(
    name: &str,
    fields: &HashMap<String, String>,
    scripting_enabled: bool,
) -> Test {
    let get_field = |key| {
        let field: &String = fields.get(key).expect("missing field");
        field.trim_end_matches('\n').to_string()
    };

    let mut data = fields.get("data").expect("missing data").to_string();
    data.pop();
    let expected = get_field("document");
    let context = fields
        .get("document-fragment")
        .map(|field| context_from_field(field.trim_end_matches('\n')));
    let mut name = name.to_owned();
    if scripting_enabled {
        name.push_str(" (scripting enabled)");
    } else {
        name.push_str(" (scripting disabled)");
    };

    Test {
        name,
        skip: false,
        test: Box::new(move || {
            let mut opts = ParseOpts::default();
            opts.tree_builder.scripting_enabled = scripting_enabled;
            let result = match context {
                None => parse_document(&data, opts).expect("parse failed"),
                Some(ref context) => {
                    parse_fragment(&data, context.clone(), opts).expect("parse failed")
                },
            };
            let dump = to_test_format_of(&result.document, result.root);

            if dump != expected {
                panic!("\ninput: {data}\ngot:\n{dump}\nexpected:\n{expected}\n");
            }
        }),
    }
}

fn tests(src_dir: &Path) -> Vec<Test> {
    let mut tests = vec![];

    foreach_html5lib_test(
        src_dir,
        "tree-construction",
        OsStr::new("dat"),
        |path, file| {
            let buf = io::BufReader::new(file);
            let lines = buf.lines().map(|res| res.expect("couldn't read"));
            let data = parse_tests(lines);

            for (i, test) in data.into_iter().enumerate() {
                make_test(
                    &mut tests,
                    path.file_name().unwrap().to_str().unwrap(),
                    i,
                    test,
                );
            }
        },
    );

    tests
}

fn main() {
    run_all(tests(Path::new(env!("CARGO_MANIFEST_DIR"))));
}
