//! Tokenizer for the reference engine.

use crate::PostfixFunction;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
	Number(f64),
	Ident(String),
	Plus,
	Minus,
	Star,
	Slash,
	Caret,
	Open(char),
	Close(char),
	Comma,
	Postfix(PostfixFunction),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
	pub kind: TokenKind,
	/// Char offset of the token start.
	pub pos: usize,
}

pub(crate) fn closing_for(open: char) -> char {
	match open {
		'[' => ']',
		'{' => '}',
		_ => ')',
	}
}

pub(crate) fn tokenize(input: &str) -> Result<Vec<Token>> {
	let chars: Vec<char> = input.chars().collect();
	let mut tokens = Vec::new();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];
		let pos = i;

		if c.is_whitespace() {
			i += 1;
			continue;
		}

		if c.is_ascii_digit() || (c == '.' && chars.get(i + 1).is_some_and(char::is_ascii_digit)) {
			let (value, len) = lex_number(&chars[i..], pos)?;
			tokens.push(Token {
				kind: TokenKind::Number(value),
				pos,
			});
			i += len;
			continue;
		}

		if c.is_alphabetic() || c == '_' {
			let start = i;
			while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
				i += 1;
			}
			let word: String = chars[start..i].iter().collect();
			let word = if word == "π" { "pi".to_string() } else { word };
			tokens.push(Token {
				kind: TokenKind::Ident(word),
				pos,
			});
			continue;
		}

		let rest: String = chars[i..chars.len().min(i + 2)].iter().collect();
		if let Some(postfix) = PostfixFunction::match_prefix(&rest) {
			tokens.push(Token {
				kind: TokenKind::Postfix(postfix),
				pos,
			});
			i += postfix.symbol().chars().count();
			continue;
		}

		let kind = match c {
			'+' => TokenKind::Plus,
			'-' | '−' => TokenKind::Minus,
			'*' | '×' | '·' => TokenKind::Star,
			'/' | '÷' => TokenKind::Slash,
			'^' => TokenKind::Caret,
			'(' | '[' | '{' => TokenKind::Open(c),
			')' | ']' | '}' => TokenKind::Close(c),
			',' => TokenKind::Comma,
			other => return Err(EngineError::parse(format!("unexpected character '{other}'"), pos)),
		};
		tokens.push(Token { kind, pos });
		i += 1;
	}

	Ok(tokens)
}

fn lex_number(chars: &[char], pos: usize) -> Result<(f64, usize)> {
	let mut len = 0;
	let mut seen_dot = false;
	while len < chars.len() {
		match chars[len] {
			d if d.is_ascii_digit() => len += 1,
			'.' if !seen_dot => {
				seen_dot = true;
				len += 1;
			}
			_ => break,
		}
	}

	// Exponent only when digits follow, so `2e` stays `2 * e`.
	if matches!(chars.get(len), Some('e' | 'E')) {
		let mut exp_len = 1;
		if matches!(chars.get(len + exp_len), Some('+' | '-')) {
			exp_len += 1;
		}
		if chars.get(len + exp_len).is_some_and(char::is_ascii_digit) {
			len += exp_len;
			while chars.get(len).is_some_and(char::is_ascii_digit) {
				len += 1;
			}
		}
	}

	let literal: String = chars[..len].iter().collect();
	if chars.get(len) == Some(&'.') {
		return Err(EngineError::parse(format!("malformed number '{literal}.'"), pos));
	}
	literal
		.parse::<f64>()
		.map(|value| (value, len))
		.map_err(|_| EngineError::parse(format!("malformed number '{literal}'"), pos))
}
