// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This is a parser and formatter for the subset of Erlang term
//! syntax used in `rebar.config` files:
//!
//! * `config::parse` turns text into a `Config`, the ordered
//!   sequence of its `.`-terminated top-level terms. Terms are atoms
//!   (bare or `'quoted'`), `"strings"`, 64-bit integers, floats,
//!   `{tuples}` and `[lists]`; `%` starts a comment running to the
//!   end of the line.
//!
//! * Errors carry the line and column they were detected at; parsing
//!   stops at the first one.
//!
//! * `format::format` renders a `Config` back to indented text that
//!   parses to equal terms again (but is not necessarily byte-equal
//!   to the input: comments and original layout are lost).
//!
//! * `read` wraps the above for byte streams and files.
//!
//! Not supported: the rest of Erlang (maps, binaries, improper lists,
//! expressions), or re-escaping when writing: strings and quoted
//! atoms are written as stored, so a `"` inside a string, a `'`
//! inside a quoted atom, or a name ending in a backslash (`'x\\'`
//! reads as `x\`) does not read back.
//!
//! ```
//! let config = rebarterm::config::parse("{deps, [cowboy]}.").unwrap();
//! assert_eq!(config.deps().map(|d| d.len()), Some(1));
//! assert_eq!(config.format(4), "{deps, [cowboy]}.\n");
//! ```

pub mod chars;
pub mod config;
pub mod context;
pub mod cursor;
pub mod debug;
pub mod drain;
pub mod format;
pub mod number;
pub mod parse;
pub mod pos;
pub mod read;
pub mod settings;
pub mod value;
