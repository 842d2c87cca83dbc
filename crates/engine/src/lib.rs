//! Math engine and token classifier ports.
//!
//! The evaluation pipeline talks to the math engine only through [`Engine`]
//! and to the token classifier only through [`TokenClassifier`]. This crate
//! also ships reference implementations of both:
//!
//! * [`ArithmeticEngine`]: numeric evaluation with constant folding for the
//!   `simplify` and `elementary` kinds.
//! * [`MathTypeClassifier`]: longest-match classification over the engine's
//!   known names.

pub mod arith;
pub mod classify;
pub mod config;
pub mod error;
pub mod function;
pub mod postfix;

pub use arith::ArithmeticEngine;
use calcpp_primitives::{GenericResult, OperationKind};
pub use classify::{ClassifiedToken, MathType, MathTypeClassifier, TokenClassifier};
pub use config::{AngleUnit, EngineConfig, MAX_PRECISION};
pub use error::{EngineError, Result};
pub use function::Function;
pub use postfix::PostfixFunction;

/// Successful engine output.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineResult {
	/// Rendered result text.
	pub text: String,
	/// Kind the engine actually applied; may differ from the requested one
	/// (a simplify that folds to a plain number reports `numeric`).
	pub user_operation: OperationKind,
	/// Symbolic handle for downstream consumers.
	pub generic: Option<GenericResult>,
}

/// Math engine port.
///
/// Evaluation must be deterministic for the same `(kind, expression)` and
/// engine configuration.
pub trait Engine: Send + Sync {
	/// Evaluates `expression` under `kind`.
	fn evaluate(&self, kind: OperationKind, expression: &str) -> Result<EngineResult>;

	/// Returns true when `text` is a plain value usable as a variable value.
	fn is_valid_value(&self, text: &str) -> bool;

	/// Replaces the engine configuration.
	fn set_config(&self, config: EngineConfig);

	/// Returns the current engine configuration.
	fn config(&self) -> EngineConfig;
}
