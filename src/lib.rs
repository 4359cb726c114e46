//! # `bbckit` main library
//! 
//! This library turns tokenized BBC BASIC V programs back into source text.
//! 
//! ## Architecture
//! 
//! Decoding is split in two stages that run one line at a time:
//! * `lang::bbc::reader::LineReader` frames the records of the input stream
//! * `lang::bbc::detokenizer::Detokenizer` expands a record body into text
//! 
//! `lang::bbc::reader::Program` combines the two into a lazy iterator over
//! decoded lines.  Nothing is shared between lines, so independent programs
//! can be decoded in parallel with a shared `Detokenizer`.
//! 
//! ```
//! let img = [0x0d,0x00,0x0a,0x05,0xf1,0x0d,0xff];
//! let code = bbckit::lang::bbc::reader::detokenize(&img).expect("bad program");
//! assert_eq!(code,"PRINT\n");
//! ```

pub mod lang;
pub mod commands;

type DYNERR = Box<dyn std::error::Error>;
type STDRESULT = Result<(),Box<dyn std::error::Error>>;
