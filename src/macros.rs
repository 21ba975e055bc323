// Copyright 2026 the html5kit Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

macro_rules! unwrap_or_return {
    ($opt:expr) => {{
        let Some(x) = $opt else {
            return;
        };
        x
    }};
    ($opt:expr, $retval:expr) => {{
        let Some(x) = $opt else {
            return $retval;
        };
        x
    }};
}

/// Build a [`SmallCharSet`](crate::SmallCharSet) from character literals.
/// Only code points below 64 may be members.
macro_rules! small_char_set ( ($($e:expr)+) => (
    $crate::SmallCharSet {
        bits: $( (1 << ($e as usize)) )|+
    }
));
