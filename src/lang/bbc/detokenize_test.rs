#[cfg(test)]
use super::detokenizer::Detokenizer;
#[cfg(test)]
use super::FormatError;
#[cfg(test)]
use hex;

#[cfg(test)]
fn test_expander(hex_tokens: &str, expected: &str) {
	let body = hex::decode(hex_tokens).expect("hex error");
	let detok = Detokenizer::new();
	let actual = detok.expand(&body).expect("detokenization error");
	assert_eq!(actual,expected);
}

#[cfg(test)]
fn test_expander_err(hex_tokens: &str) -> FormatError {
	let body = hex::decode(hex_tokens).expect("hex error");
	let detok = Detokenizer::new();
	match detok.expand(&body) {
		Ok(s) => panic!("expected an error but got {}",s),
		Err(e) => e
	}
}

mod literals {
	use super::super::detokenizer::Detokenizer;
	#[test]
	fn assignment() {
		super::test_expander("413D31", "A=1");
	}
	#[test]
	fn all_ascii_passes_through() {
		let body: Vec<u8> = (0..0x7f).collect();
		let expected: String = body.iter().map(|b| char::from(*b)).collect();
		let detok = Detokenizer::new();
		assert_eq!(detok.expand(&body).expect("detokenization error"),expected);
	}
	#[test]
	fn empty_body() {
		super::test_expander("", "");
	}
}

mod strings {
	#[test]
	fn print_string() {
		super::test_expander("F1202248454C4C4F22", "PRINT \"HELLO\"");
	}
	#[test]
	fn tokens_inside_string() {
		// E5 would be GOTO outside the quotes
		super::test_expander("F122E5C78E22", "PRINT\"\u{e5}\u{c7}\u{8e}\"");
	}
	#[test]
	fn quote_parity() {
		super::test_expander("F1224122E5224222", "PRINT\"A\"GOTO\"B\"");
	}
	#[test]
	fn unterminated_string() {
		super::test_expander("F12241E5", "PRINT\"A\u{e5}");
	}
}

mod root_tokens {
	#[test]
	fn goto() {
		super::test_expander("E5", "GOTO");
	}
	#[test]
	fn otherwise() {
		super::test_expander("7F", "OTHERWISE");
	}
	#[test]
	fn for_loop() {
		super::test_expander("E320493D3120B8203130", "FOR I=1 TO 10");
	}
	#[test]
	fn string_function() {
		super::test_expander("41243DC042242C3229", "A$=LEFT$(B$,2)");
	}
	#[test]
	fn procedure() {
		super::test_expander("DD20F2666F6F", "DEF PROCfoo");
	}
	#[test]
	fn colour_winner() {
		super::test_expander("FB2031", "COLOR 1");
	}
	#[test]
	fn pseudo_variable_statements() {
		super::test_expander("D03D26393030", "PAGE=&900");
		super::test_expander("D13D30", "TIME=0");
		super::test_expander("D2D3", "LOMEMHIMEM");
	}
}

mod escapes {
	#[test]
	fn command() {
		super::test_expander("C78E", "APPEND");
	}
	#[test]
	fn function() {
		super::test_expander("C68F", "BEAT");
	}
	#[test]
	fn statement() {
		super::test_expander("C88E20583A", "CASE X:");
		super::test_expander("C895", "WHILE");
	}
	#[test]
	fn context_resets_after_token() {
		// second 8E is root OPENIN, not a second APPEND
		super::test_expander("C78E8E", "APPENDOPENIN");
	}
	#[test]
	fn literal_keeps_context() {
		super::test_expander("C7418E", "AAPPEND");
	}
	#[test]
	fn string_keeps_context() {
		super::test_expander("C72241228E", "\"A\"APPEND");
	}
	#[test]
	fn escape_then_root() {
		super::test_expander("C89520E5", "WHILE GOTO");
	}
}

mod line_numbers {
	#[test]
	fn goto_100() {
		super::test_expander("E5208D446440", "GOTO 100");
	}
	#[test]
	fn gosub_1000() {
		super::test_expander("E48D646843", "GOSUB1000");
	}
	#[test]
	fn decode() {
		use super::super::detokenizer::decode_line_number;
		assert_eq!(decode_line_number([0x54,0x4a,0x40]),10);
		assert_eq!(decode_line_number([0x44,0x64,0x40]),100);
		assert_eq!(decode_line_number([0x64,0x68,0x43]),1000);
	}
	#[test]
	fn truncated_operand() {
		let e = super::test_expander_err("E58D4464");
		assert!(matches!(e,super::FormatError::Truncated));
	}
}

mod errors {
	use super::super::EscapeContext;
	use super::super::FormatError;
	#[test]
	fn unknown_command() {
		let e = super::test_expander_err("C7A1");
		assert!(matches!(e,FormatError::UnknownToken(0xa1,EscapeContext::EscCommand)));
	}
	#[test]
	fn limit_sentinel() {
		let e = super::test_expander_err("C690");
		assert!(matches!(e,FormatError::UnknownToken(0x90,EscapeContext::EscFunction)));
	}
	#[test]
	fn install_bad() {
		let e = super::test_expander_err("C89A");
		assert!(matches!(e,FormatError::UnknownToken(0x9a,EscapeContext::EscStatement)));
	}
	#[test]
	fn escape_is_not_nested() {
		let e = super::test_expander_err("C7C7");
		assert!(matches!(e,FormatError::UnknownToken(0xc7,EscapeContext::EscCommand)));
	}
}

mod state_machine {
	use super::super::detokenizer::{Detokenizer,ExpansionState,Step};
	use super::super::EscapeContext;
	#[test]
	fn initial_state() {
		let state = ExpansionState::new();
		assert!(!state.in_string);
		assert_eq!(state.context,EscapeContext::Root);
		assert_eq!(state,ExpansionState::default());
	}
	#[test]
	fn escape_transitions() {
		let detok = Detokenizer::new();
		let mut state = ExpansionState::new();
		assert_eq!(detok.step(&mut state,0xc7).expect("step failed"),Step::Escape(EscapeContext::EscCommand));
		assert_eq!(state.context,EscapeContext::EscCommand);
		assert_eq!(detok.step(&mut state,0x8e).expect("step failed"),Step::Keyword("APPEND"));
		assert_eq!(state.context,EscapeContext::Root);
	}
	#[test]
	fn quote_toggles() {
		let detok = Detokenizer::new();
		let mut state = ExpansionState::new();
		assert_eq!(detok.step(&mut state,b'"').expect("step failed"),Step::Literal('"'));
		assert!(state.in_string);
		assert_eq!(detok.step(&mut state,0xe5).expect("step failed"),Step::Literal('\u{e5}'));
		assert!(state.in_string);
		assert_eq!(detok.step(&mut state,b'"').expect("step failed"),Step::Literal('"'));
		assert!(!state.in_string);
	}
	#[test]
	fn line_number_token() {
		let detok = Detokenizer::new();
		let mut state = ExpansionState::new();
		assert_eq!(detok.step(&mut state,0x8d).expect("step failed"),Step::LineNumber);
		assert_eq!(state.context,EscapeContext::Root);
	}
	#[test]
	fn repeatable() {
		let detok = Detokenizer::new();
		let body = [0xf1,0x20,0xc7,0x8e,0x22,0xe5,0x22];
		let first = detok.expand(&body).expect("detokenization error");
		assert_eq!(first,detok.expand(&body).expect("detokenization error"));
	}
}

mod tables {
	use std::collections::HashMap;
	use super::super::token_maps;
	use super::super::EscapeContext;
	#[test]
	fn no_duplicate_keywords() {
		let map = HashMap::from(token_maps::KEYWORDS);
		assert_eq!(map.len(),token_maps::KEYWORDS.len());
	}
	#[test]
	fn root_covers_upper_half() {
		let map = HashMap::from(token_maps::ROOT_MAP);
		for b in 0x7f..=0xff {
			assert!(map.contains_key(&b),"missing root token {:#04x}",b);
		}
	}
	#[test]
	fn every_identifier_resolves() {
		let keywords = HashMap::from(token_maps::KEYWORDS);
		let unresolved = ["TCONST","TTWOCOMMLIMIT","TTWOFUNCLIMIT","TTWOSTMTLIMIT","TINSTALLBAD"];
		let all = token_maps::ROOT_MAP.iter()
			.chain(token_maps::FUNCTION_MAP.iter())
			.chain(token_maps::COMMAND_MAP.iter())
			.chain(token_maps::STATEMENT_MAP.iter());
		for (_,tok) in all {
			assert!(keywords.contains_key(tok) || unresolved.contains(tok) || EscapeContext::from_prefix(tok).is_some(),
				"no text for {}",tok);
		}
	}
}
