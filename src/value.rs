// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory representation of parsed terms.

//! [Term](Term) is a closed set of six variants. Equality is
//! structural: variants never compare equal to each other (not even
//! `Integer(42)` and `Float(42.0)`, or an empty list and an empty
//! tuple), and atoms compare by name only, ignoring how they were
//! quoted.

use crate::chars::is_bare_atom;
use crate::number::fmt_float;
use kstring::KString;
use std::fmt::{Display, Write};

#[derive(Debug, Clone)]
pub struct Atom {
    pub name: KString,
    /// Written as `'name'`. Only affects rendering; names that can't
    /// be written bare are quoted regardless.
    pub quoted: bool,
}

impl Atom {
    /// Quoted only if the name can't be written bare.
    pub fn new(name: &str) -> Atom {
        Atom {
            name: KString::from_ref(name),
            quoted: !is_bare_atom(name),
        }
    }

    pub fn new_quoted(name: &str) -> Atom {
        Atom {
            name: KString::from_ref(name),
            quoted: true,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Atom) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        if self.quoted || !is_bare_atom(&self.name) {
            f.write_fmt(format_args!("'{}'", self.name))
        } else {
            f.write_str(&self.name)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// Tuples
    Curly,
    /// Lists
    Square,
}

impl Bracket {
    pub fn opening(self) -> char {
        match self {
            Bracket::Curly => '{',
            Bracket::Square => '[',
        }
    }
    pub fn closing(self) -> char {
        match self {
            Bracket::Curly => '}',
            Bracket::Square => ']',
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Atom(Atom),
    /// Escapes are already resolved.
    String(KString),
    Integer(i64),
    Float(f64),
    Tuple(Vec<Term>),
    List(Vec<Term>),
}

impl Term {
    pub fn atom(name: &str) -> Term {
        Term::Atom(Atom::new(name))
    }

    pub fn quoted_atom(name: &str) -> Term {
        Term::Atom(Atom::new_quoted(name))
    }

    pub fn string(s: &str) -> Term {
        Term::String(KString::from_ref(s))
    }

    pub fn sequence(bracket: Bracket, elements: Vec<Term>) -> Term {
        match bracket {
            Bracket::Curly => Term::Tuple(elements),
            Bracket::Square => Term::List(elements),
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(a) => Some(a),
            _ => None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Term::String(s) => Some(s),
            _ => None
        }
    }

    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Term::List(v) => Some(v),
            _ => None
        }
    }

    pub fn as_tuple(&self) -> Option<&[Term]> {
        match self {
            Term::Tuple(v) => Some(v),
            _ => None
        }
    }

    /// A tuple of at least two elements whose first element is an
    /// atom, split into that atom and the rest: `{name, value...}`.
    pub fn as_named_tuple(&self) -> Option<(&Atom, &[Term])> {
        match self {
            Term::Tuple(v) if v.len() >= 2 => {
                v[0].as_atom().map(|a| (a, &v[1..]))
            }
            _ => None
        }
    }

    /// Same as `==`.
    pub fn compare(&self, other: &Term) -> bool {
        self == other
    }
}

fn fmt_sequence(f: &mut std::fmt::Formatter<'_>,
                bracket: Bracket,
                v: &[Term])
                -> Result<(), std::fmt::Error> {
    f.write_char(bracket.opening())?;
    for (i, item) in v.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    f.write_char(bracket.closing())
}

/// Single line rendering. Strings are written between double quotes
/// as stored, without escaping.
impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Term::Atom(a) => a.fmt(f),
            Term::String(s) => f.write_fmt(format_args!("\"{}\"", s)),
            Term::Integer(n) => f.write_fmt(format_args!("{}", n)),
            Term::Float(x) => fmt_float(f, *x),
            Term::Tuple(v) => fmt_sequence(f, Bracket::Curly, v),
            Term::List(v) => fmt_sequence(f, Bracket::Square, v),
        }
    }
}
