// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A whole parsed file: its top-level terms in source order, plus the
//! text they were parsed from.

use crate::format;
use crate::parse::{terms, ParseErrorWithPos};
use crate::settings::{ReadSettings, DEFAULT_READ_SETTINGS};
use crate::value::Term;

#[derive(Debug, Clone)]
pub struct Config {
    raw: String,
    terms: Vec<Term>,
}

/// Parse all `.`-terminated terms in `text`. Empty input, or input
/// with only whitespace and comments, gives an empty `Config`.
pub fn parse(text: &str) -> Result<Config, ParseErrorWithPos> {
    parse_with(text, &DEFAULT_READ_SETTINGS)
}

pub fn parse_with(
    text: &str,
    settings: &ReadSettings
) -> Result<Config, ParseErrorWithPos> {
    let terms = terms(text, settings).collect::<Result<Vec<Term>, _>>()?;
    tracing::debug!(terms = terms.len(), bytes = text.len(),
                    "parsed configuration");
    Ok(Config {
        raw: text.to_string(),
        terms,
    })
}

impl Config {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Term by term equality; the raw text is not compared.
    pub fn same_terms(&self, other: &Config) -> bool {
        self.terms == other.terms
    }

    pub fn format(&self, indent: usize) -> String {
        format::format(self, indent)
    }

    /// The elements (including the name) of the first top-level
    /// tuple starting with the atom `name`. Quoting of the atom is
    /// not taken into account.
    pub fn get_tuple(&self, name: &str) -> Option<&[Term]> {
        self.terms.iter().find_map(|t| match t {
            Term::Tuple(v) => match v.first() {
                Some(Term::Atom(a)) if a.as_str() == name => Some(&v[..]),
                _ => None
            },
            _ => None
        })
    }

    /// Like `get_tuple` but without the name; `None` if the tuple
    /// holds nothing else.
    pub fn get_tuple_values(&self, name: &str) -> Option<&[Term]> {
        match self.get_tuple(name) {
            Some(v) if v.len() > 1 => Some(&v[1..]),
            _ => None
        }
    }

    /// The single value of `{name, Value}`.
    pub fn get_value(&self, name: &str) -> Option<&Term> {
        match self.get_tuple_values(name) {
            Some([value]) => Some(value),
            _ => None
        }
    }

    /// The list elements of `{name, [...]}`.
    pub fn get_list(&self, name: &str) -> Option<&[Term]> {
        self.get_value(name).and_then(Term::as_list)
    }

    pub fn deps(&self) -> Option<&[Term]> {
        self.get_list("deps")
    }

    pub fn erl_opts(&self) -> Option<&[Term]> {
        self.get_list("erl_opts")
    }

    pub fn plugins(&self) -> Option<&[Term]> {
        self.get_list("plugins")
    }

    pub fn project_plugins(&self) -> Option<&[Term]> {
        self.get_list("project_plugins")
    }

    pub fn profiles(&self) -> Option<&[Term]> {
        self.get_list("profiles")
    }

    pub fn relx(&self) -> Option<&[Term]> {
        self.get_list("relx")
    }

    pub fn shell(&self) -> Option<&[Term]> {
        self.get_list("shell")
    }

    pub fn overrides(&self) -> Option<&[Term]> {
        self.get_list("overrides")
    }

    pub fn xref_checks(&self) -> Option<&[Term]> {
        self.get_list("xref_checks")
    }

    pub fn dialyzer(&self) -> Option<&[Term]> {
        self.get_list("dialyzer")
    }

    pub fn minimum_otp_vsn(&self) -> Option<&str> {
        self.get_value("minimum_otp_vsn").and_then(Term::as_str)
    }
}
