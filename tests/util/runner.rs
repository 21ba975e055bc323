// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Simple container for storing tests for later execution, for the
//! fixture-driven suites that run with `harness = false`.

pub struct Test {
    pub name: String,
    pub skip: bool,
    pub test: Box<dyn Fn()>,
}

impl Test {
    /// Invoke the stored test function.
    ///
    /// A status message is printed if the wrapped closure completes or
    /// is marked as skipped. The test should panic to report failure.
    pub fn run(&self) {
        print!("test {} ...", self.name);
        if self.skip {
            println!(" SKIPPED");
        } else {
            (self.test)();
            println!(" ok");
        }
    }
}

pub fn run_all(tests: Vec<Test>) {
    let mut ran = 0usize;
    let mut skipped = 0usize;
    for test in &tests {
        test.run();
        if test.skip {
            skipped += 1;
        } else {
            ran += 1;
        }
    }
    println!("ran {ran} tests, {skipped} skipped");
}
