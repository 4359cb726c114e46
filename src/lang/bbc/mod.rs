//! # BBC BASIC V module
//!
//! Tokenized BBC BASIC V programs are a sequence of records, each starting with
//! a carriage return, a big endian line number, and a length byte.  The record body
//! holds ASCII text with keywords replaced by bytes at or above 0x7f, some of which
//! are escapes that select a second byte from a smaller table.
//!
//! * `reader` frames the records and produces the lazy `Program` iterator
//! * `detokenizer` expands one record body into text
//! * `token_maps` holds the fixed tables

mod token_maps;
#[cfg(test)]
mod detokenize_test;
pub mod detokenizer;
pub mod reader;

use std::fmt;
use thiserror::Error;

/// Byte that must start every record
pub const FRAME_MARKER: u8 = 0x0d;
/// Line number high byte that marks the end of the program
pub const END_MARKER: u8 = 0xff;

/// The table a token byte is resolved against.
/// Anything but `Root` lasts for exactly one resolved token.
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub enum EscapeContext {
    Root,
    EscFunction,
    EscCommand,
    EscStatement
}

impl EscapeContext {
    /// The escape context selected by a token identifier, if it is an escape prefix
    pub fn from_prefix(tok: &str) -> Option<Self> {
        match tok {
            "TESCFN" => Some(Self::EscFunction),
            "TESCCOM" => Some(Self::EscCommand),
            "TESCSTMT" => Some(Self::EscStatement),
            _ => None
        }
    }
}

impl fmt::Display for EscapeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f,"root"),
            Self::EscFunction => write!(f,"function escape"),
            Self::EscCommand => write!(f,"command escape"),
            Self::EscStatement => write!(f,"statement escape")
        }
    }
}

#[derive(Error,Debug)]
pub enum FormatError {
    #[error("Missing line start indicator")]
    MissingFrameMarker,
    #[error("Program ended while processing line")]
    Truncated,
    #[error("Line length {0} is shorter than the line header")]
    BadLength(u8),
    #[error("Unrecognized token {0:#04x} in {1} context")]
    UnknownToken(u8,EscapeContext),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}

/// One decoded program line
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Line {
    pub number: u16,
    pub text: String
}
