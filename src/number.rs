// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of numeric literals to the fixed-width values stored in
//! terms, and their rendering.

use crate::parse::ParseError;
use num::{BigInt, ToPrimitive};

/// Digits are accumulated without bound so that an out-of-range
/// literal can be reported with its full value.
#[derive(Debug, Default)]
pub struct Digits(BigInt);

impl Digits {
    pub fn push(&mut self, d: u32) {
        self.0 = std::mem::take(&mut self.0) * 10u32 + d;
    }

    pub fn to_i64(self, is_neg: bool) -> Result<i64, ParseError> {
        let n = if is_neg { -self.0 } else { self.0 };
        n.to_i64().ok_or(ParseError::IntegerOutOfRange(n))
    }
}

/// `lexeme` has already been checked against the number syntax.
pub fn float_from_lexeme(lexeme: &str) -> Result<f64, ParseError> {
    match lexeme.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(ParseError::FloatOutOfRange(lexeme.to_string())),
    }
}

/// Shortest representation that reads back to the same value; always
/// contains a `.` or an exponent so it is not taken for an integer.
pub fn fmt_float(f: &mut std::fmt::Formatter<'_>, x: f64)
                 -> Result<(), std::fmt::Error> {
    f.write_fmt(format_args!("{:?}", x))
}
