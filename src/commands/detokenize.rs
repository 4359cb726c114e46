//! ## Detokenize subcommand
//!
//! Lines are written as they are decoded, so a damaged program still
//! produces everything up to the first bad record.

use std::io::{BufReader,Read,Write};
use colored::Colorize;
use log::{error,info};
use super::CommandError;
use crate::lang::bbc::detokenizer::Detokenizer;
use crate::lang::bbc::reader::Program;
use crate::{STDRESULT,DYNERR};

fn write_lines<R: Read>(stream: R,number: bool) -> STDRESULT {
    let detok = Detokenizer::new();
    let mut out = std::io::stdout().lock();
    let mut count: usize = 0;
    for maybe_line in Program::new(stream,&detok) {
        match maybe_line {
            Ok(line) => {
                if number {
                    writeln!(out,"{} {}",line.number,line.text)?;
                } else {
                    writeln!(out,"{}",line.text)?;
                }
                count += 1;
            },
            Err(e) => {
                out.flush()?;
                error!("detokenize stopped after {} lines: {}",count,e);
                return Err(Box::new(e));
            }
        }
    }
    out.flush()?;
    info!("detokenized {} lines",count);
    if atty::is(atty::Stream::Stdout) {
        eprintln!("\u{2713} {} {}",count.to_string().green(),"lines".green());
    }
    Ok(())
}

/// Only a missing file is `FileNotFound`, anything else is passed up as is
fn open_error(path: &str,e: std::io::Error) -> DYNERR {
    error!("could not open {}: {}",path,e);
    match e.kind() {
        std::io::ErrorKind::NotFound => Box::new(CommandError::FileNotFound),
        _ => Box::new(e)
    }
}

pub fn detokenize(cmd: &clap::ArgMatches) -> STDRESULT {
    let number = cmd.get_flag("number");
    if let Some(path) = cmd.get_one::<String>("file") {
        let file = match std::fs::File::open(path) {
            Ok(f) => f,
            Err(e) => return Err(open_error(path,e))
        };
        return write_lines(BufReader::new(file),number);
    }
    if atty::is(atty::Stream::Stdin) {
        error!("line entry is not supported for `detokenize`, please pipe something in");
        return Err(Box::new(CommandError::InvalidCommand));
    }
    write_lines(std::io::stdin().lock(),number)
}
