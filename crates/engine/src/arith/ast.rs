//! Expression tree and recursive-descent parser.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary | <implicit> unary)*
//! unary   := ('-' | '+') unary | power
//! power   := postfix ('^' unary)?
//! postfix := primary postfix_fn*
//! primary := number | ident | ident '(' args ')' | open expr close
//! ```

use std::collections::BTreeSet;
use std::f64::consts::{E, PI};

use super::lexer::{Token, TokenKind, closing_for};
use crate::error::{EngineError, Result};
use crate::{Function, PostfixFunction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
	Add,
	Sub,
	Mul,
	Div,
	Pow,
}

impl BinOp {
	pub fn symbol(self) -> &'static str {
		match self {
			Self::Add => "+",
			Self::Sub => "-",
			Self::Mul => "*",
			Self::Div => "/",
			Self::Pow => "^",
		}
	}

	pub fn precedence(self) -> u8 {
		match self {
			Self::Add | Self::Sub => 1,
			Self::Mul | Self::Div => 2,
			Self::Pow => 4,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
	Num(f64),
	Var(String),
	Neg(Box<Expr>),
	Binary(BinOp, Box<Expr>, Box<Expr>),
	Call(Function, Vec<Expr>),
	Postfix(PostfixFunction, Box<Expr>),
}

impl Expr {
	pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
		Self::Binary(op, Box::new(lhs), Box::new(rhs))
	}

	/// Free identifiers, sorted and deduplicated.
	pub fn variables(&self) -> Vec<String> {
		fn walk(expr: &Expr, out: &mut BTreeSet<String>) {
			match expr {
				Expr::Num(_) => {}
				Expr::Var(name) => {
					out.insert(name.clone());
				}
				Expr::Neg(inner) | Expr::Postfix(_, inner) => walk(inner, out),
				Expr::Binary(_, lhs, rhs) => {
					walk(lhs, out);
					walk(rhs, out);
				}
				Expr::Call(_, args) => args.iter().for_each(|arg| walk(arg, out)),
			}
		}

		let mut out = BTreeSet::new();
		walk(self, &mut out);
		out.into_iter().collect()
	}
}

/// Nesting limit for groups, calls, signs and exponents.
const MAX_DEPTH: usize = 256;

/// Token limit. Bounds the height of the parsed tree, which evaluation and
/// folding walk recursively.
const MAX_TOKENS: usize = 1024;

pub(crate) fn parse(tokens: &[Token], input_len: usize) -> Result<Expr> {
	if tokens.is_empty() {
		return Err(EngineError::parse("empty expression", 0));
	}
	if let Some(token) = tokens.get(MAX_TOKENS) {
		return Err(EngineError::parse("expression is too long", token.pos));
	}
	let mut parser = Parser {
		tokens,
		pos: 0,
		input_len,
		depth: 0,
	};
	let expr = parser.expr()?;
	match parser.peek() {
		None => Ok(expr),
		Some(token) => Err(EngineError::parse("unexpected token", token.pos)),
	}
}

struct Parser<'a> {
	tokens: &'a [Token],
	pos: usize,
	input_len: usize,
	depth: usize,
}

impl Parser<'_> {
	fn peek(&self) -> Option<&Token> {
		self.tokens.get(self.pos)
	}

	fn peek_kind(&self) -> Option<&TokenKind> {
		self.peek().map(|t| &t.kind)
	}

	fn next(&mut self) -> Result<&Token> {
		let token = self
			.tokens
			.get(self.pos)
			.ok_or_else(|| EngineError::parse("unexpected end of expression", self.input_len))?;
		self.pos += 1;
		Ok(token)
	}

	fn expr(&mut self) -> Result<Expr> {
		let mut lhs = self.term()?;
		loop {
			let op = match self.peek_kind() {
				Some(TokenKind::Plus) => BinOp::Add,
				Some(TokenKind::Minus) => BinOp::Sub,
				_ => return Ok(lhs),
			};
			self.pos += 1;
			let rhs = self.term()?;
			lhs = Expr::binary(op, lhs, rhs);
		}
	}

	fn term(&mut self) -> Result<Expr> {
		let mut lhs = self.unary()?;
		loop {
			let op = match self.peek_kind() {
				Some(TokenKind::Star) => {
					self.pos += 1;
					BinOp::Mul
				}
				Some(TokenKind::Slash) => {
					self.pos += 1;
					BinOp::Div
				}
				Some(TokenKind::Number(_) | TokenKind::Ident(_) | TokenKind::Open(_)) => BinOp::Mul,
				_ => return Ok(lhs),
			};
			let rhs = self.unary()?;
			lhs = Expr::binary(op, lhs, rhs);
		}
	}

	/// Entry point of every recursive descent; enforces [`MAX_DEPTH`].
	fn unary(&mut self) -> Result<Expr> {
		if self.depth >= MAX_DEPTH {
			let pos = self.peek().map_or(self.input_len, |t| t.pos);
			return Err(EngineError::parse("expression is nested too deeply", pos));
		}
		self.depth += 1;
		let expr = self.signed();
		self.depth -= 1;
		expr
	}

	fn signed(&mut self) -> Result<Expr> {
		match self.peek_kind() {
			Some(TokenKind::Minus) => {
				self.pos += 1;
				Ok(Expr::Neg(Box::new(self.unary()?)))
			}
			Some(TokenKind::Plus) => {
				self.pos += 1;
				self.unary()
			}
			_ => self.power(),
		}
	}

	fn power(&mut self) -> Result<Expr> {
		let base = self.postfix()?;
		if matches!(self.peek_kind(), Some(TokenKind::Caret)) {
			self.pos += 1;
			let exponent = self.unary()?;
			return Ok(Expr::binary(BinOp::Pow, base, exponent));
		}
		Ok(base)
	}

	fn postfix(&mut self) -> Result<Expr> {
		let mut expr = self.primary()?;
		while let Some(TokenKind::Postfix(function)) = self.peek_kind() {
			let function = *function;
			self.pos += 1;
			expr = Expr::Postfix(function, Box::new(expr));
		}
		Ok(expr)
	}

	fn primary(&mut self) -> Result<Expr> {
		let token = self.next()?.clone();
		match token.kind {
			TokenKind::Number(value) => Ok(Expr::Num(value)),
			TokenKind::Ident(name) => {
				if let Some(TokenKind::Open(open)) = self.peek_kind() {
					let open = *open;
					let function = Function::from_name(&name)
						.ok_or_else(|| EngineError::parse(format!("unknown function '{name}'"), token.pos))?;
					self.pos += 1;
					let args = self.arguments(open)?;
					check_arity(function, args.len(), token.pos)?;
					return Ok(Expr::Call(function, args));
				}
				if Function::from_name(&name).is_some() {
					return Err(EngineError::parse(format!("'{name}' requires arguments"), token.pos));
				}
				Ok(match name.as_str() {
					"pi" => Expr::Num(PI),
					"e" => Expr::Num(E),
					_ => Expr::Var(name),
				})
			}
			TokenKind::Open(open) => {
				let inner = self.expr()?;
				self.expect_close(open)?;
				Ok(inner)
			}
			_ => Err(EngineError::parse("expected a value", token.pos)),
		}
	}

	fn arguments(&mut self, open: char) -> Result<Vec<Expr>> {
		let mut args = Vec::new();
		if matches!(self.peek_kind(), Some(TokenKind::Close(_))) {
			self.expect_close(open)?;
			return Ok(args);
		}
		loop {
			args.push(self.expr()?);
			if matches!(self.peek_kind(), Some(TokenKind::Comma)) {
				self.pos += 1;
				continue;
			}
			self.expect_close(open)?;
			return Ok(args);
		}
	}

	fn expect_close(&mut self, open: char) -> Result<()> {
		let expected = closing_for(open);
		let end = self.input_len;
		let token = self.next().map_err(|_| EngineError::parse(format!("missing '{expected}'"), end))?;
		match token.kind {
			TokenKind::Close(c) if c == expected => Ok(()),
			_ => Err(EngineError::parse(format!("expected '{expected}'"), token.pos)),
		}
	}
}

fn check_arity(function: Function, count: usize, pos: usize) -> Result<()> {
	let (min, max) = function.arity();
	if count < min || max.is_some_and(|max| count > max) {
		return Err(EngineError::parse(
			format!("wrong number of arguments for '{}': {count}", function.name()),
			pos,
		));
	}
	Ok(())
}
