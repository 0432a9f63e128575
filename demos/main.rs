// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use rebarterm::config::{self, Config};
use rebarterm::read::{read_file, read_named, write_all};
use rebarterm::settings::WriteSettings;
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufWriter};
use std::path::PathBuf;
use anyhow::{Result, bail};


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Spaces per nesting level in the formatted output
    #[clap(short, long, value_parser, default_value_t = 4)]
    indent: usize,
    /// Print each top-level term on a single line instead
    #[clap(short, long, value_parser)]
    terms: bool,
    /// Print the structure of each term, showing variants and quoting
    #[clap(short, long, value_parser)]
    dump: bool,
    /// Verify that the formatted output parses back to equal terms,
    /// print nothing
    #[clap(long, value_parser)]
    check: bool,
    /// Log debugging information to stderr
    #[clap(short, long, value_parser)]
    verbose: bool,
    /// Path to the input file, `-` for stdin
    #[clap(value_parser, required(true))]
    input_path: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let config: Config =
        if args.input_path.as_os_str() == "-" {
            read_named(stdin().lock(), "stdin")?
        } else {
            read_file(&args.input_path)?
        };

    if args.check {
        let formatted = config.format(args.indent);
        let reparsed = config::parse(&formatted)?;
        if !reparsed.same_terms(&config) {
            bail!("formatting {:?} with indent {} changed its terms",
                  args.input_path, args.indent)
        }
    } else if args.dump {
        for t in config.terms() {
            println!("{}.", t.dump());
        }
    } else if args.terms {
        for t in config.terms() {
            println!("{}.", t);
        }
    } else {
        write_all(BufWriter::new(stdout()),
                  &config,
                  &WriteSettings { indent: args.indent })?;
    }
    Ok(())
}
