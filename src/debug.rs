// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging the rebarterm library

use crate::value::{Atom, Term};

fn tagged(tag: &str, rest: impl IntoIterator<Item = Term>) -> Term {
    let mut vals: Vec<Term> = vec![Term::atom(tag)];
    vals.extend(rest);
    Term::Tuple(vals)
}

fn bool_atom(b: bool) -> Term {
    Term::atom(if b { "true" } else { "false" })
}

impl Term {
    /// A term describing the structure of `self`, with the variant of
    /// every node made explicit, e.g. `{atom, "x", true}` for `'x'`.
    pub fn dump(&self) -> Term {
        match self {
            Term::Atom(Atom { name, quoted }) => {
                tagged("atom", [Term::String(name.clone()), bool_atom(*quoted)])
            }
            Term::String(s) => tagged("string", [Term::String(s.clone())]),
            Term::Integer(n) => tagged("integer", [Term::Integer(*n)]),
            Term::Float(x) => tagged("float", [Term::Float(*x)]),
            Term::Tuple(v) => {
                tagged("tuple", [Term::List(v.iter().map(Term::dump).collect())])
            }
            Term::List(v) => {
                tagged("list", [Term::List(v.iter().map(Term::dump).collect())])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_shows_quoting() {
        let t = Term::List(vec![Term::quoted_atom("x"), Term::Integer(1)]);
        assert_eq!(t.dump().to_string(),
                   "{list, [{atom, \"x\", true}, {integer, 1}]}");
    }
}
