//! Token classification for caret-aware insertion.


use crate::{Function, PostfixFunction};

/// Bracket pairs offered as single buttons; inserting one leaves the caret
/// between the brackets.
pub const OPEN_GROUP_SYMBOLS: [&str; 3] = ["()", "[]", "{}"];

const OPEN_GROUP_CHARS: [&str; 3] = ["(", "[", "{"];

/// Symbols that close a group.
pub const CLOSE_GROUP_SYMBOLS: [&str; 3] = [")", "]", "}"];

const CONSTANTS: [&str; 3] = ["pi", "π", "e"];

/// Syntactic class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathType {
	Digit,
	Dot,
	PostfixFunction,
	UnaryOperation,
	BinaryOperation,
	OpenGroup,
	CloseGroup,
	Comma,
	Function,
	Operator,
	Constant,
	Identifier,
	Whitespace,
	Text,
}

/// Classification of the token at an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedToken {
	pub kind: MathType,
	/// Token length in chars.
	pub length: usize,
}

impl ClassifiedToken {
	const fn new(kind: MathType, length: usize) -> Self {
		Self { kind, length }
	}
}

/// Token classifier port.
pub trait TokenClassifier: Send + Sync {
	/// Classifies the token starting at char `offset` of `text`.
	///
	/// In strict mode a name only matches when it is not immediately followed
	/// by another identifier character, and unknown words are [`MathType::Text`].
	/// Non-strict mode accepts prefix matches and reports unknown words as
	/// [`MathType::Identifier`].
	fn classify(&self, text: &str, offset: usize, strict: bool) -> ClassifiedToken;

	/// Group tokens that should leave the caret just after their opener.
	fn open_group_symbols(&self) -> &[&'static str];

	/// Returns true when `token` is exactly an open-group symbol.
	fn is_open_group(&self, token: &str) -> bool {
		self.open_group_symbols().contains(&token)
	}
}

/// Longest-match classifier over the reference engine's names.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathTypeClassifier;

fn is_ident_char(c: char) -> bool {
	c.is_alphanumeric() || c == '_'
}

impl MathTypeClassifier {
	fn names() -> impl Iterator<Item = (&'static str, MathType)> {
		Function::ALL
			.into_iter()
			.map(|f| (f.name(), if f.is_operator() { MathType::Operator } else { MathType::Function }))
			.chain(CONSTANTS.into_iter().map(|c| (c, MathType::Constant)))
	}

	fn match_name(rest: &[char], strict: bool) -> Option<ClassifiedToken> {
		Self::names()
			.filter_map(|(name, kind)| {
				let len = name.chars().count();
				let matches = rest.len() >= len && rest.iter().zip(name.chars()).all(|(a, b)| *a == b);
				let bounded = !strict || rest.get(len).is_none_or(|c| !is_ident_char(*c));
				(matches && bounded).then_some(ClassifiedToken::new(kind, len))
			})
			.max_by_key(|token| token.length)
	}

	fn is_unary_position(before: &[char]) -> bool {
		match before.iter().rev().find(|c| !c.is_whitespace()) {
			None => true,
			Some(c) => matches!(c, '(' | '[' | '{' | ',' | '+' | '-' | '−' | '*' | '×' | '/' | '÷' | '^'),
		}
	}
}

impl TokenClassifier for MathTypeClassifier {
	fn classify(&self, text: &str, offset: usize, strict: bool) -> ClassifiedToken {
		let chars: Vec<char> = text.chars().collect();
		let Some(&c) = chars.get(offset) else {
			return ClassifiedToken::new(MathType::Text, 0);
		};
		let rest = &chars[offset..];

		if c.is_whitespace() {
			return ClassifiedToken::new(MathType::Whitespace, 1);
		}
		if c.is_ascii_digit() {
			return ClassifiedToken::new(MathType::Digit, 1);
		}
		if c == '.' {
			return ClassifiedToken::new(MathType::Dot, 1);
		}

		let head: String = rest.iter().take(2).collect();
		if let Some(postfix) = PostfixFunction::match_prefix(&head) {
			return ClassifiedToken::new(MathType::PostfixFunction, postfix.symbol().chars().count());
		}

		let symbol = c.to_string();
		if OPEN_GROUP_CHARS.contains(&symbol.as_str()) {
			return ClassifiedToken::new(MathType::OpenGroup, 1);
		}
		if CLOSE_GROUP_SYMBOLS.contains(&symbol.as_str()) {
			return ClassifiedToken::new(MathType::CloseGroup, 1);
		}
		match c {
			',' => return ClassifiedToken::new(MathType::Comma, 1),
			'+' | '-' | '−' if Self::is_unary_position(&chars[..offset]) => {
				return ClassifiedToken::new(MathType::UnaryOperation, 1);
			}
			'+' | '-' | '−' | '*' | '×' | '·' | '/' | '÷' | '^' => {
				return ClassifiedToken::new(MathType::BinaryOperation, 1);
			}
			_ => {}
		}

		if let Some(token) = Self::match_name(rest, strict) {
			return token;
		}

		if is_ident_char(c) {
			let len = rest.iter().take_while(|c| is_ident_char(**c)).count();
			let kind = if strict { MathType::Text } else { MathType::Identifier };
			return ClassifiedToken::new(kind, len);
		}

		ClassifiedToken::new(MathType::Text, 1)
	}

	fn open_group_symbols(&self) -> &[&'static str] {
		&OPEN_GROUP_SYMBOLS
	}
}
