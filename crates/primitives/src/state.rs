use serde::{Deserialize, Serialize};

use crate::{OperationKind, Selection};

/// Captured editor contents: expression text and caret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorState {
	pub text: String,
	pub selection: Selection,
}

impl EditorState {
	pub fn new(text: impl Into<String>, selection: Selection) -> Self {
		let text = text.into();
		let selection = selection.clamp(text.chars().count());
		Self { text, selection }
	}

	/// Editor state with the caret at the end of `text`.
	pub fn at_end(text: impl Into<String>) -> Self {
		let text = text.into();
		let len = text.chars().count();
		Self {
			text,
			selection: Selection::point(len),
		}
	}
}

/// Opaque symbolic handle produced by the engine.
///
/// Kept for downstream consumers (plotting, variable creation); the
/// evaluation pipeline only stores and forwards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResult {
	/// Printed form of the result expression.
	pub expression: String,
	/// Free identifiers remaining in the result, sorted.
	pub variables: Vec<String>,
}

/// Rendered result area.
///
/// `error_message` is present iff `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
	pub text: String,
	pub operation: OperationKind,
	pub generic: Option<GenericResult>,
	pub valid: bool,
	pub error_message: Option<String>,
}

impl Default for DisplayState {
	fn default() -> Self {
		Self::blank(OperationKind::Numeric)
	}
}

impl DisplayState {
	/// Empty, valid display for `operation`.
	pub fn blank(operation: OperationKind) -> Self {
		Self {
			text: String::new(),
			operation,
			generic: None,
			valid: true,
			error_message: None,
		}
	}

	/// Valid display holding a successful result.
	pub fn success(text: impl Into<String>, operation: OperationKind, generic: Option<GenericResult>) -> Self {
		Self {
			text: text.into(),
			operation,
			generic,
			valid: true,
			error_message: None,
		}
	}
}
