// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Recursive descent parser turning text into [Term](../value/enum.Term.html)
//! trees. Each term is chosen by its first character alone; the first
//! error ends parsing. See [config](../config/index.html) if
//! interested in whole files rather than single terms.

use crate::chars::{is_atom_char, is_atom_start, is_digit, is_number_start,
                   unescape};
use crate::cursor::Cursor;
use crate::number::{Digits, float_from_lexeme};
use crate::pos::Pos;
use crate::settings::ReadSettings;
use crate::value::{Atom, Bracket, Term};
use genawaiter::rc::Gen;
use kstring::KString;
use num::BigInt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("missing closing '{0}'")]
    UnclosedBracket(char),
    #[error("expected ',' or '{0}', got '{1}'")]
    ExpectedCommaOrClose(char, char),
    #[error("expected '.' after term")]
    ExpectedDot,
    #[error("unterminated {0}")]
    Unterminated(&'static str),
    #[error("expected digit")]
    ExpectedDigit,
    #[error("expected digit after decimal point")]
    ExpectedFractionDigit,
    #[error("expected digit in exponent")]
    ExpectedExponentDigit,
    #[error("nesting too deep")]
    NestingTooDeep,
    #[error("integer {0} does not fit in 64 bits")]
    IntegerOutOfRange(BigInt),
    #[error("float {0} is out of range")]
    FloatOutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input does not follow the term syntax.
    Syntax,
    /// A well-formed number literal has no 64-bit representation.
    NumericConversion,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(match self {
            ErrorKind::Syntax => "syntax error",
            ErrorKind::NumericConversion => "numeric conversion error",
        })
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::IntegerOutOfRange(_)
                | ParseError::FloatOutOfRange(_) => ErrorKind::NumericConversion,
            _ => ErrorKind::Syntax,
        }
    }

    pub fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p
        }
    }
}

#[derive(Error, Debug)]
#[error("{} at {pos}: {err}", .err.kind())]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos
}

trait At<T> {
    fn at(self, p: Pos) -> Result<T, ParseErrorWithPos>;
}

impl<T> At<T> for Result<T, ParseError> {
    fn at(self, p: Pos) -> Result<T, ParseErrorWithPos> {
        match self {
            Err(e) => Err(e.at(p)),
            Ok(v) => Ok(v)
        }
    }
}

pub struct Parser<'s> {
    cursor: Cursor<'s>,
    max_depth: u32,
}

impl<'s> Parser<'s> {
    pub fn new(text: &'s str, settings: &ReadSettings) -> Parser<'s> {
        Parser {
            cursor: Cursor::new(text),
            max_depth: settings.max_depth,
        }
    }

    pub fn pos(&self) -> Pos {
        self.cursor.pos()
    }

    /// Parse the term starting at the current character. Nothing
    /// before it is skipped.
    pub fn parse_term(&mut self) -> Result<Term, ParseErrorWithPos> {
        self.term(self.max_depth)
    }

    /// Skip whitespace and comments, then parse one term and its
    /// terminating `.`. Returns `None` once nothing but whitespace
    /// and comments is left.
    pub fn next_term(&mut self) -> Option<Result<Term, ParseErrorWithPos>> {
        self.cursor.skip_trivia();
        if self.cursor.is_at_end() {
            None
        } else {
            Some(self.dot_terminated_term())
        }
    }

    fn dot_terminated_term(&mut self) -> Result<Term, ParseErrorWithPos> {
        let t = self.parse_term()?;
        self.cursor.skip_trivia();
        if self.cursor.eat('.') {
            Ok(t)
        } else {
            Err(self.cursor.error(ParseError::ExpectedDot))
        }
    }

    fn term(&mut self, depth_fuel: u32) -> Result<Term, ParseErrorWithPos> {
        match self.cursor.current() {
            None => Err(self.cursor.error(ParseError::UnexpectedEof)),
            Some('{') => self.sequence(Bracket::Curly, depth_fuel),
            Some('[') => self.sequence(Bracket::Square, depth_fuel),
            Some('"') => {
                let s = self.delimited('"', "string")?;
                Ok(Term::String(KString::from_string(s)))
            }
            Some('\'') => {
                let s = self.delimited('\'', "quoted atom")?;
                Ok(Term::Atom(Atom {
                    name: KString::from_string(s),
                    quoted: true,
                }))
            }
            Some(c) if is_number_start(c) => self.number(),
            Some(c) if is_atom_start(c) => Ok(self.bare_atom()),
            Some(c) => Err(self.cursor.error(ParseError::UnexpectedChar(c))),
        }
    }

    // Elements separated by ',', no trailing comma: a ',' directly
    // before the closing bracket fails because the bracket can't
    // start a term.
    fn sequence(
        &mut self,
        bracket: Bracket,
        depth_fuel: u32
    ) -> Result<Term, ParseErrorWithPos> {
        if depth_fuel == 0 {
            return Err(self.cursor.error(ParseError::NestingTooDeep))
        }
        self.cursor.advance();
        self.cursor.skip_trivia();
        let mut v = Vec::new();
        if self.cursor.eat(bracket.closing()) {
            return Ok(Term::sequence(bracket, v))
        }
        loop {
            v.push(self.term(depth_fuel - 1)?);
            self.cursor.skip_trivia();
            match self.cursor.current() {
                Some(',') => {
                    self.cursor.advance();
                    self.cursor.skip_trivia();
                }
                Some(c) if c == bracket.closing() => {
                    self.cursor.advance();
                    return Ok(Term::sequence(bracket, v))
                }
                Some(c) => {
                    return Err(self.cursor.error(
                        ParseError::ExpectedCommaOrClose(bracket.closing(), c)))
                }
                None => {
                    return Err(self.cursor.error(
                        ParseError::UnclosedBracket(bracket.closing())))
                }
            }
        }
    }

    // The body of a string or quoted atom, escapes resolved. A
    // backslash protects the next character from ending the body.
    fn delimited(
        &mut self,
        delimiter: char,
        what: &'static str
    ) -> Result<String, ParseErrorWithPos> {
        let startpos = self.cursor.pos();
        self.cursor.advance();
        let start = self.cursor.offset();
        loop {
            match self.cursor.current() {
                None => return Err(ParseError::Unterminated(what).at(startpos)),
                Some('\\') => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() {
                        return Err(ParseError::Unterminated(what).at(startpos))
                    }
                    self.cursor.advance();
                }
                Some(c) if c == delimiter => {
                    let body = self.cursor.slice_from(start);
                    self.cursor.advance();
                    return Ok(unescape(body))
                }
                Some(_) => self.cursor.advance(),
            }
        }
    }

    fn eat_digits(&mut self) -> bool {
        let start = self.cursor.offset();
        self.cursor.advance_while(is_digit);
        self.cursor.offset() > start
    }

    // -?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?
    fn number(&mut self) -> Result<Term, ParseErrorWithPos> {
        let startpos = self.cursor.pos();
        let start = self.cursor.offset();
        let is_neg = self.cursor.eat('-');
        let mut digits = Digits::default();
        let mut seen_digit = false;
        while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(10)) {
            digits.push(d);
            seen_digit = true;
            self.cursor.advance();
        }
        if !seen_digit {
            return Err(self.cursor.error(ParseError::ExpectedDigit))
        }
        let mut is_float = false;
        if self.cursor.eat('.') {
            if !self.eat_digits() {
                return Err(self.cursor.error(ParseError::ExpectedFractionDigit))
            }
            is_float = true;
        }
        if matches!(self.cursor.current(), Some('e') | Some('E')) {
            self.cursor.advance();
            if !self.cursor.eat('+') {
                self.cursor.eat('-');
            }
            if !self.eat_digits() {
                return Err(self.cursor.error(ParseError::ExpectedExponentDigit))
            }
            is_float = true;
        }
        if is_float {
            float_from_lexeme(self.cursor.slice_from(start))
                .map(Term::Float)
                .at(startpos)
        } else {
            digits.to_i64(is_neg)
                .map(Term::Integer)
                .at(startpos)
        }
    }

    fn bare_atom(&mut self) -> Term {
        let start = self.cursor.offset();
        self.cursor.advance();
        self.cursor.advance_while(is_atom_char);
        Term::Atom(Atom {
            name: KString::from_ref(self.cursor.slice_from(start)),
            quoted: false,
        })
    }
}

/// The top-level terms of `text`, each of which must be followed by
/// a `.`, produced lazily. Ends after the first error.
pub fn terms<'s>(
    text: &'s str,
    settings: &'s ReadSettings,
)
    -> impl Iterator<Item = Result<Term, ParseErrorWithPos>> + 's
{
    Gen::new(|co| async move {
        let mut parser = Parser::new(text, settings);
        while let Some(r) = parser.next_term() {
            match r {
                Ok(t) => {
                    tracing::trace!(pos = %parser.pos(), "parsed top-level term");
                    co.yield_(Ok(t)).await;
                }
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
            }
        }
    }).into_iter()
}
