// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Position tracking over an in-memory input string.

use crate::chars::is_whitespace_char;
use crate::parse::{ParseError, ParseErrorWithPos};
use crate::pos::Pos;

#[derive(Debug, Clone)]
pub struct Cursor<'s> {
    text: &'s str,
    /// Byte offset into `text`, always on a char boundary.
    offset: usize,
    pos: Pos,
}

impl<'s> Cursor<'s> {
    pub fn new(text: &'s str) -> Cursor<'s> {
        Cursor {
            text,
            offset: 0,
            pos: Pos::START,
        }
    }

    /// The character under the cursor, `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Step over the current character; does nothing at end of input.
    pub fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.offset += c.len_utf8();
            self.pos = if c == '\n' {
                Pos { line: self.pos.line + 1, col: 1 }
            } else {
                Pos { line: self.pos.line, col: self.pos.col + 1 }
            };
        }
    }

    /// Step over `c` if it is the current character.
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == Some(c) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current character.
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// The text between byte offset `start` and the cursor.
    pub fn slice_from(&self, start: usize) -> &'s str {
        &self.text[start..self.offset]
    }

    pub fn skip_whitespace(&mut self) {
        self.advance_while(is_whitespace_char);
    }

    /// On `%`, skip to and past the next newline (or to the end).
    pub fn skip_line_comment(&mut self) {
        if self.current() == Some('%') {
            self.advance_while(|c| c != '\n');
            self.advance();
        }
    }

    /// Skip any mix of whitespace and line comments.
    pub fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            if self.current() == Some('%') {
                self.skip_line_comment();
            } else {
                return;
            }
        }
    }

    /// Tag `err` with the current position.
    pub fn error(&self, err: ParseError) -> ParseErrorWithPos {
        err.at(self.pos)
    }
}
