// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading configurations from byte streams and files, and writing
//! them back formatted.

use crate::config::{parse, Config};
use crate::context::{self, Context};
use crate::drain::drain_to_string;
use crate::format::format;
use crate::parse::ParseErrorWithPos;
use crate::settings::WriteSettings;
use std::fmt::{Formatter, Display};
use std::io::{Read, Write};
use std::path::Path;
use std::fs::File;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("{0}")]
    Parse(#[from] ParseErrorWithPos),
    #[error("{0}")]
    IO(#[from] std::io::Error),
}

impl ReadError {
    pub fn parse_error(&self) -> Option<&ParseErrorWithPos> {
        match self {
            ReadError::Parse(e) => Some(e),
            ReadError::IO(_) => None
        }
    }
}

/// A `ReadError` together with a description of the source it
/// happened in.
#[derive(Error, Debug)]
pub struct ReadErrorWithContext {
    err: ReadError,
    container: Box<dyn Context>
}

impl ReadErrorWithContext {
    pub fn error(&self) -> &ReadError {
        &self.err
    }

    pub fn into_error(self) -> ReadError {
        self.err
    }
}

impl Display for ReadErrorWithContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.container.format_source(f)?;
        f.write_fmt(format_args!(": {}", self.err))
    }
}

trait WithContext<T> {
    fn with_context(
        self,
        container: impl FnOnce() -> Box<dyn Context>
    ) -> Result<T, ReadErrorWithContext>;
}

impl<T, E: Into<ReadError>> WithContext<T> for Result<T, E> {
    fn with_context(
        self,
        container: impl FnOnce() -> Box<dyn Context>
    ) -> Result<T, ReadErrorWithContext> {
        match self {
            Err(e) => Err(ReadErrorWithContext {
                err: e.into(),
                container: container()
            }),
            Ok(v) => Ok(v)
        }
    }
}

fn file_context(path: &Path) -> Box<dyn Context> {
    Box::new(context::FileContext { path: path.to_path_buf() })
}

fn special_context(name: &str) -> Box<dyn Context> {
    Box::new(context::SpecialContext { name: name.to_string() })
}

/// Read everything from `fh`, then parse it.
pub fn read_all(
    fh: impl Read,
) -> Result<Config, ReadError>
{
    let text = drain_to_string(fh)?;
    Ok(parse(&text)?)
}

/// Same as `read_all`, errors mention `name` as the source.
pub fn read_named(
    fh: impl Read,
    name: &str
) -> Result<Config, ReadErrorWithContext>
{
    read_all(fh).with_context(|| special_context(name))
}

pub fn read_file(path: &Path) -> Result<Config, ReadErrorWithContext> {
    tracing::debug!(path = ?path, "reading configuration");
    let fh = File::open(path).with_context(|| file_context(path))?;
    read_all(fh).with_context(|| file_context(path))
}

/// Write the formatted terms of `config`.
pub fn write_all(
    out: impl Write,
    config: &Config,
    settings: &WriteSettings
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    out.write_all(format(config, settings.indent).as_bytes())?;
    out.flush()
}

pub fn write_file(
    path: &Path,
    config: &Config,
    settings: &WriteSettings
) -> Result<(), std::io::Error> {
    tracing::debug!(path = ?path, terms = config.len(), "writing configuration");
    write_all(File::create(path)?, config, settings)
}
