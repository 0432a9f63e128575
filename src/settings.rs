// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for both reading (parsing) and writing (formatting)
//! terms.

#[derive(Debug, Clone)]
pub struct ReadSettings {
    /// Maximum nesting of tuples and lists. Deeper input is rejected
    /// with `ParseError::NestingTooDeep` rather than exhausting the
    /// stack.
    pub max_depth: u32,
}

pub const DEFAULT_READ_SETTINGS: ReadSettings = ReadSettings {
    max_depth: 500, // the stack overflows around 1200 with default settings on Linux
};

impl Default for ReadSettings {
    fn default() -> Self {
        DEFAULT_READ_SETTINGS
    }
}

#[derive(Debug, Clone)]
pub struct WriteSettings {
    /// Spaces per nesting level.
    pub indent: usize,
}

pub const REBAR_WRITE_SETTINGS: WriteSettings = WriteSettings {
    indent: 4,
};

impl Default for WriteSettings {
    fn default() -> Self {
        REBAR_WRITE_SETTINGS
    }
}
