//! Module containing the record reader for tokenized BBC BASIC V programs
//!
//! Each record is `0x0d, line_hi, line_lo, len` followed by `len-4` body bytes.
//! A line high byte of 0xff ends the program, nothing after it is read.

use std::io;
use std::io::Read;
use log::{debug,trace};
use super::detokenizer::Detokenizer;
use super::{FormatError,Line,FRAME_MARKER,END_MARKER};

const HEADER_LEN: u8 = 4;

/// One framed record, the body is still tokenized
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Record {
    pub number: u16,
    pub body: Vec<u8>
}

fn fill<R: Read>(stream: &mut R,buf: &mut [u8]) -> Result<(),FormatError> {
    match stream.read_exact(buf) {
        Ok(()) => Ok(()),
        Err(e) if e.kind()==io::ErrorKind::UnexpectedEof => Err(FormatError::Truncated),
        Err(e) => Err(FormatError::Io(e))
    }
}

/// Pulls records from a byte stream one at a time
pub struct LineReader<R: Read> {
    stream: R
}

impl<R: Read> LineReader<R> {
    pub fn new(stream: R) -> Self {
        Self { stream }
    }
    /// Give back the stream, positioned just after the last byte consumed
    pub fn into_inner(self) -> R {
        self.stream
    }
    fn read_byte(&mut self) -> Result<u8,FormatError> {
        let mut buf = [0u8;1];
        fill(&mut self.stream,&mut buf)?;
        Ok(buf[0])
    }
    /// Read the next record, or `None` if the end of program marker was found.
    /// Any failure leaves the stream in an unspecified position.
    pub fn next_record(&mut self) -> Result<Option<Record>,FormatError> {
        if self.read_byte()? != FRAME_MARKER {
            return Err(FormatError::MissingFrameMarker);
        }
        let hi = self.read_byte()?;
        if hi == END_MARKER {
            debug!("end of program marker");
            return Ok(None);
        }
        let lo = self.read_byte()?;
        let len = self.read_byte()?;
        if len < HEADER_LEN {
            return Err(FormatError::BadLength(len));
        }
        let mut body = vec![0u8;(len - HEADER_LEN) as usize];
        fill(&mut self.stream,&mut body)?;
        let number = u16::from_be_bytes([hi,lo]);
        debug!("line {} with {} body bytes",number,body.len());
        trace!("body {}",hex::encode(&body));
        Ok(Some(Record { number, body }))
    }
}

/// Lazy sequence of decoded lines.
/// Stops after the end of program marker or after yielding the first error.
pub struct Program<'a,R: Read> {
    reader: LineReader<R>,
    detok: &'a Detokenizer,
    done: bool
}

impl<'a,R: Read> Program<'a,R> {
    pub fn new(stream: R,detok: &'a Detokenizer) -> Self {
        Self {
            reader: LineReader::new(stream),
            detok,
            done: false
        }
    }
}

impl<'a,R: Read> Iterator for Program<'a,R> {
    type Item = Result<Line,FormatError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let ans = match self.reader.next_record() {
            Ok(Some(rec)) => self.detok.expand(&rec.body).map(|text| Line { number: rec.number, text }),
            Ok(None) => {
                self.done = true;
                return None;
            },
            Err(e) => Err(e)
        };
        if ans.is_err() {
            self.done = true;
        }
        Some(ans)
    }
}

/// Detokenize a whole program held in memory, one output line per record
pub fn detokenize(img: &[u8]) -> Result<String,FormatError> {
    let detok = Detokenizer::new();
    let mut code = String::new();
    for line in Program::new(img,&detok) {
        code += &line?.text;
        code += "\n";
    }
    Ok(code)
}
