// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Character classes of the term syntax, and escape handling for
//! strings and quoted atoms.

pub fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// First character of an unquoted atom.
pub fn is_atom_start(c: char) -> bool {
    c.is_lowercase() || c == '_'
}

/// Any further character of an unquoted atom.
pub fn is_atom_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '@'
}

/// Whether `s` can be written as an atom without quotes.
pub fn is_bare_atom(s: &str) -> bool {
    let mut cs = s.chars();
    match cs.next() {
        Some(c) if is_atom_start(c) => cs.all(is_atom_char),
        _ => false
    }
}

pub fn is_number_start(c: char) -> bool {
    c == '-' || is_digit(c)
}

// Applied one after the other over the whole body, not as a single
// left-to-right scan; "\\n" therefore ends up as a newline.
const ESCAPES: [(&str, &str); 5] = [
    ("\\\"", "\""),
    ("\\\\", "\\"),
    ("\\n", "\n"),
    ("\\r", "\r"),
    ("\\t", "\t"),
];

/// Replace the escape sequences in the body of a string or quoted
/// atom. Backslashes followed by anything else (including `'`) are
/// kept as they are.
pub fn unescape(body: &str) -> String {
    let mut out = body.to_string();
    for (from, to) in ESCAPES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}
