// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Indented rendering of terms.
//!
//! Each node is either written on one line or broken into a block
//! with one element per line:
//!
//! * `{name, Value}` stays on one line when `Value` is simple (see
//!   [is_simple](is_simple)).
//! * Any other tuple starting with an atom keeps its elements on the
//!   line of the name, though each of them may break itself.
//! * Lists of up to three simple elements stay on one line.
//! * Everything else becomes a block.

use crate::config::Config;
use crate::value::{Bracket, Term};
use std::fmt::Write;

/// Whether `t` is small enough to be written inline: scalars always
/// are, lists of up to 3 and tuples of up to 2 simple elements too.
pub fn is_simple(t: &Term) -> bool {
    match t {
        Term::Atom(_) | Term::String(_) | Term::Integer(_) | Term::Float(_) => true,
        Term::List(v) => v.len() <= 3 && v.iter().all(is_simple),
        Term::Tuple(v) => v.len() <= 2 && v.iter().all(is_simple),
    }
}

fn push_indent(out: &mut String, level: usize, indent: usize) {
    for _ in 0..level * indent {
        out.push(' ');
    }
}

// Writing into a String can't fail.
fn push_display(out: &mut String, t: &impl std::fmt::Display) {
    let _ = write!(out, "{}", t);
}

fn write_block(out: &mut String,
               bracket: Bracket,
               v: &[Term],
               level: usize,
               indent: usize) {
    out.push(bracket.opening());
    out.push('\n');
    for (i, item) in v.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        push_indent(out, level + 1, indent);
        write_term(out, item, level + 1, indent);
    }
    out.push('\n');
    push_indent(out, level, indent);
    out.push(bracket.closing());
}

fn write_term(out: &mut String, t: &Term, level: usize, indent: usize) {
    match t {
        Term::Atom(_) | Term::String(_) | Term::Integer(_) | Term::Float(_) => {
            push_display(out, t)
        }
        Term::Tuple(v) if v.is_empty() => out.push_str("{}"),
        Term::Tuple(v) => {
            if let Some((name, rest)) = t.as_named_tuple() {
                if rest.len() == 1 && is_simple(&rest[0]) {
                    push_display(out, t)
                } else {
                    out.push('{');
                    push_display(out, name);
                    for item in rest {
                        out.push_str(", ");
                        write_term(out, item, level + 1, indent);
                    }
                    out.push('}');
                }
            } else {
                write_block(out, Bracket::Curly, v, level, indent)
            }
        }
        Term::List(v) if v.is_empty() => out.push_str("[]"),
        Term::List(v) => {
            if v.len() <= 3 && v.iter().all(is_simple) {
                push_display(out, t)
            } else {
                write_block(out, Bracket::Square, v, level, indent)
            }
        }
    }
}

/// Render `t` at nesting depth `level`, i.e. with blocks indented by
/// `level * indent` spaces. The first line is not indented.
pub fn format_term(t: &Term, level: usize, indent: usize) -> String {
    let mut out = String::new();
    write_term(&mut out, t, level, indent);
    out
}

/// Each term followed by `.` and a newline, with an empty line
/// between terms. No terms give an empty string. A top-level
/// integer is separated from its `.`, which would otherwise be read
/// back as a decimal point.
pub fn format_terms<'t>(
    terms: impl IntoIterator<Item = &'t Term>,
    indent: usize
) -> String {
    let mut out = String::new();
    for (i, t) in terms.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_term(&mut out, t, 0, indent);
        if let Term::Integer(_) = t {
            out.push(' ');
        }
        out.push_str(".\n");
    }
    out
}

pub fn format(config: &Config, indent: usize) -> String {
    format_terms(config.terms(), indent)
}
