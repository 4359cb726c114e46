//! Module containing the BBC BASIC V detokenizer

use std::collections::HashMap;
use log::trace;
use super::token_maps;
use super::{EscapeContext,FormatError};

const QUOTE: u8 = 0x22;
const FIRST_TOKEN: u8 = 0x7f;
const LINE_NUMBER_TOK: &str = "TCONST";

/// Per-line state of the expander, starts as `(Normal, Root)` on every line.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct ExpansionState {
    pub in_string: bool,
    pub context: EscapeContext
}

impl ExpansionState {
    pub fn new() -> Self {
        Self {
            in_string: false,
            context: EscapeContext::Root
        }
    }
}

impl Default for ExpansionState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a single body byte turned into
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Step {
    Literal(char),
    Keyword(&'static str),
    Escape(EscapeContext),
    /// an encoded line number occupies the next three bytes
    LineNumber
}

/// Decode the three bytes that follow the line number token.
/// The first byte, after XOR with 0x54, carries the top two bits of the low and high bytes.
pub fn decode_line_number(operand: [u8;3]) -> u16 {
    let mix = operand[0] ^ 0x54;
    let lo = (operand[1] & 0x3f) | ((mix << 2) & 0xc0);
    let hi = (operand[2] & 0x3f) | ((mix << 4) & 0xc0);
    u16::from_be_bytes([hi,lo])
}

/// Handles detokenization of BBC BASIC V line bodies.
/// The tables are fixed, so one instance can be shared by any number of decoders.
pub struct Detokenizer
{
    keywords: HashMap<&'static str,&'static str>,
    root_map: HashMap<u8,&'static str>,
    function_map: HashMap<u8,&'static str>,
    command_map: HashMap<u8,&'static str>,
    statement_map: HashMap<u8,&'static str>
}

impl Detokenizer
{
    /// Create a new `Detokenizer` structure
    pub fn new() -> Self
    {
        Self {
            keywords: HashMap::from(token_maps::KEYWORDS),
            root_map: HashMap::from(token_maps::ROOT_MAP),
            function_map: HashMap::from(token_maps::FUNCTION_MAP),
            command_map: HashMap::from(token_maps::COMMAND_MAP),
            statement_map: HashMap::from(token_maps::STATEMENT_MAP)
        }
    }
    fn byte_map(&self,ctx: EscapeContext) -> &HashMap<u8,&'static str> {
        match ctx {
            EscapeContext::Root => &self.root_map,
            EscapeContext::EscFunction => &self.function_map,
            EscapeContext::EscCommand => &self.command_map,
            EscapeContext::EscStatement => &self.statement_map
        }
    }
    /// Advance the state machine by one byte.
    /// Literal bytes leave the escape context alone, a resolved token puts it back to `Root`.
    pub fn step(&self,state: &mut ExpansionState,byte: u8) -> Result<Step,FormatError> {
        if byte < FIRST_TOKEN || state.in_string {
            if byte == QUOTE {
                state.in_string = !state.in_string;
            }
            return Ok(Step::Literal(char::from(byte)));
        }
        let ctx = state.context;
        let tok = match self.byte_map(ctx).get(&byte) {
            Some(tok) => *tok,
            None => return Err(FormatError::UnknownToken(byte,ctx))
        };
        if ctx == EscapeContext::Root {
            if let Some(esc) = EscapeContext::from_prefix(tok) {
                state.context = esc;
                return Ok(Step::Escape(esc));
            }
        }
        state.context = EscapeContext::Root;
        if tok == LINE_NUMBER_TOK {
            return Ok(Step::LineNumber);
        }
        match self.keywords.get(tok) {
            Some(word) => Ok(Step::Keyword(*word)),
            // limit sentinels are in the byte maps but have no text
            None => Err(FormatError::UnknownToken(byte,ctx))
        }
    }
    /// Expand one record body into text.  Bytes that are not tokens are taken as Latin-1.
    pub fn expand(&self,body: &[u8]) -> Result<String,FormatError> {
        let mut state = ExpansionState::new();
        let mut code = String::new();
        let mut iter = body.iter();
        while let Some(byte) = iter.next() {
            match self.step(&mut state,*byte)? {
                Step::Literal(c) => code.push(c),
                Step::Keyword(word) => code += word,
                Step::Escape(esc) => trace!("escape to {} table",esc),
                Step::LineNumber => {
                    let mut operand = [0u8;3];
                    for b in operand.iter_mut() {
                        *b = *iter.next().ok_or(FormatError::Truncated)?;
                    }
                    code += &u16::to_string(&decode_line_number(operand));
                }
            }
        }
        Ok(code)
    }
}

impl Default for Detokenizer {
    fn default() -> Self {
        Self::new()
    }
}
