// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Get the complete contents of anything implementing `Read` as a
//! string; the parser only works on text that is fully in memory.

use std::io::{self, Read};
use utf8::{BufReadDecoder, BufReadDecoderError};

/// Invalid UTF-8 is reported as an `io::ErrorKind::InvalidData` error.
pub fn drain_to_string<R>(fh: R) -> io::Result<String>
    where R: Read
{
    let mut inp = BufReadDecoder::new(io::BufReader::new(fh));
    let mut out = String::new();
    while let Some(r) = inp.next_strict() {
        match r {
            Ok(s) => out.push_str(s),
            Err(BufReadDecoderError::Io(e)) => return Err(e),
            Err(BufReadDecoderError::InvalidByteSequence(bytes)) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid UTF-8 sequence {:?} after {} bytes",
                            bytes, out.len())))
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_everything() {
        let input = "{a, \"ü\"}.\n".repeat(2000);
        assert_eq!(drain_to_string(input.as_bytes()).unwrap(), input);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let e = drain_to_string(&b"{a, \"\xff\"}."[..]).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
    }
}
