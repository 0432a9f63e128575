// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Describing where input came from (or output goes to), for error
//! messages. Positions within the text are carried by the errors
//! themselves.

use std::{path::PathBuf, fmt::{Formatter, Debug, Display}};

pub trait Context : Debug + Send + Sync {
    /// Format the source, to be put before a colon and the error
    /// reason. Does not include the colon.
    fn format_source(&self, f: &mut Formatter<'_>)
                     -> Result<(), std::fmt::Error>;
    /// Same as `format_source` but as a string.
    fn to_source_string(&self) -> String {
        format!("{}", &Helper(self))
    }
}

// Hack to get access to a Formatter, since Formatter::new is
// inaccessible:
struct Helper<'t, T: Context + ?Sized>(&'t T);
impl<'t, T: Context + ?Sized> Display for Helper<'t, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.0.format_source(f)
    }
}


#[derive(Debug)]
pub struct FileContext {
    pub path: PathBuf
}

impl Context for FileContext {
    fn format_source(&self, f: &mut Formatter<'_>)
                     -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("{:?}", &self.path))
    }
}

/// A source without a path, like stdin.
#[derive(Debug)]
pub struct SpecialContext {
    pub name: String
}

impl Context for SpecialContext {
    fn format_source(&self, f: &mut Formatter<'_>)
                     -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("({})", &self.name))
    }
}
