use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a history snapshot.
///
/// Ids are handed out by the history store in append order and are never
/// reused, so a job can back-patch "its" snapshot even after other snapshots
/// were appended or the redo tail was truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotId(pub u64);

impl fmt::Display for SnapshotId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// User-visible message resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageId {
	/// Placeholder rendered when an evaluation fails with nothing to keep.
	SyntaxError,
	/// Confirmation after the result was copied to the clipboard.
	ResultCopied,
	/// The displayed result cannot be used (invalid or not a plain value).
	NotValidResult,
	/// There is no displayed result to turn into a variable.
	EmptyVarError,
}

impl MessageId {
	/// Resource key of the message.
	pub const fn key(self) -> &'static str {
		match self {
			Self::SyntaxError => "c_syntax_error",
			Self::ResultCopied => "c_result_copied",
			Self::NotValidResult => "c_not_valid_result",
			Self::EmptyVarError => "c_empty_var_error",
		}
	}

	/// Built-in English text.
	pub const fn default_text(self) -> &'static str {
		match self {
			Self::SyntaxError => "Syntax error",
			Self::ResultCopied => "Result copied to clipboard",
			Self::NotValidResult => "Result is not valid",
			Self::EmptyVarError => "Result is empty",
		}
	}
}
