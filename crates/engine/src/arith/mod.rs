//! Reference arithmetic engine.
//!
//! Stands in for the symbolic engine: `numeric` evaluates to a number,
//! `simplify` constant-folds and keeps free identifiers, `elementary`
//! additionally rewrites `tan` and `sqrt` before folding.

mod ast;
mod eval;
mod format;
mod lexer;

use calcpp_primitives::{GenericResult, OperationKind};
use parking_lot::RwLock;
use tracing::trace;

use self::ast::Expr;
use crate::error::Result;
use crate::{Engine, EngineConfig, EngineResult, MAX_PRECISION};

/// Numeric engine with constant folding.
#[derive(Debug, Default)]
pub struct ArithmeticEngine {
	config: RwLock<EngineConfig>,
}

impl ArithmeticEngine {
	/// Creates an engine; precision is capped at [`MAX_PRECISION`].
	pub fn new(mut config: EngineConfig) -> Self {
		config.precision = config.precision.min(MAX_PRECISION);
		Self {
			config: RwLock::new(config),
		}
	}

	fn parse(expression: &str) -> Result<Expr> {
		let tokens = lexer::tokenize(expression)?;
		ast::parse(&tokens, expression.chars().count())
	}

	fn numeric_result(value: f64, config: &EngineConfig) -> EngineResult {
		let plain = format::format_number(value, config.precision, None);
		EngineResult {
			text: format::format_number(value, config.precision, config.grouping_separator),
			user_operation: OperationKind::Numeric,
			generic: Some(GenericResult {
				expression: plain,
				variables: Vec::new(),
			}),
		}
	}
}

impl Engine for ArithmeticEngine {
	fn evaluate(&self, kind: OperationKind, expression: &str) -> Result<EngineResult> {
		let config = self.config.read().clone();
		let tree = Self::parse(expression)?;
		trace!(%kind, expression, "engine.evaluate");

		if kind == OperationKind::Numeric {
			let value = eval::eval(&tree, &config)?;
			return Ok(Self::numeric_result(value, &config));
		}

		let tree = match kind {
			OperationKind::Elementary => eval::elementary(tree),
			_ => tree,
		};
		match eval::fold(tree, &config)? {
			Expr::Num(value) => Ok(Self::numeric_result(value, &config)),
			folded => {
				let text = format::print_expr(&folded, config.precision);
				Ok(EngineResult {
					generic: Some(GenericResult {
						expression: text.clone(),
						variables: folded.variables(),
					}),
					text,
					user_operation: kind,
				})
			}
		}
	}

	fn is_valid_value(&self, text: &str) -> bool {
		let separator = self.config.read().grouping_separator;
		let normalized: String = text
			.trim()
			.chars()
			.filter(|c| Some(*c) != separator)
			.map(|c| if c == '−' { '-' } else { c })
			.collect();
		normalized.parse::<f64>().is_ok_and(f64::is_finite)
	}

	fn set_config(&self, mut config: EngineConfig) {
		config.precision = config.precision.min(MAX_PRECISION);
		*self.config.write() = config;
	}

	fn config(&self) -> EngineConfig {
		self.config.read().clone()
	}
}
