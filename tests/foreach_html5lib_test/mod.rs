// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::env;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Locate an html5lib-tests checkout: `$HTML5LIB_TESTS`, or an
/// `html5lib-tests` directory next to the crate.
fn fixture_root(src_dir: &Path) -> PathBuf {
    if let Ok(dir) = env::var("HTML5LIB_TESTS") {
        return PathBuf::from(dir);
    }
    src_dir.join("html5lib-tests")
}

/// Call `mk` for every fixture file with the given extension under the
/// given subdirectory. Missing checkouts are skipped, not an error: the
/// unit suites still run without the conformance corpus.
pub fn foreach_html5lib_test<Mk>(src_dir: &Path, subdir: &str, ext: &OsStr, mut mk: Mk)
where
    Mk: FnMut(&Path, fs::File),
{
    let test_dir_path = fixture_root(src_dir).join(subdir);

    match fs::read_dir(&test_dir_path) {
        Ok(test_files) => {
            for entry in test_files {
                let path = entry.unwrap().path();
                if path.extension() == Some(ext) {
                    let file = fs::File::open(&path).unwrap();
                    mk(&path, file);
                }
            }
        },
        Err(_) => {
            println!(
                "note: no fixtures at {}; set HTML5LIB_TESTS to run the conformance corpus",
                test_dir_path.display()
            );
        },
    }
}
