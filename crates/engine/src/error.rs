//! Errors raised by the math engine.

use thiserror::Error;

/// Engine failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
	/// Malformed input.
	#[error("syntax error at position {position}: {message}")]
	Parse {
		/// What the parser expected or found.
		message: String,
		/// Char offset of the offending token.
		position: usize,
	},

	/// Well-formed input that cannot be evaluated (domain error, unknown
	/// variable, overflow).
	#[error("{message}")]
	Eval {
		/// Domain explanation.
		message: String,
	},
}

impl EngineError {
	pub(crate) fn parse(message: impl Into<String>, position: usize) -> Self {
		Self::Parse {
			message: message.into(),
			position,
		}
	}

	pub(crate) fn eval(message: impl Into<String>) -> Self {
		Self::Eval { message: message.into() }
	}

	/// Message shown to the user in the error dialog.
	pub fn localized_message(&self) -> String {
		self.to_string()
	}

	/// Returns true for [`EngineError::Parse`].
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
