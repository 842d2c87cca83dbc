use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Algorithm requested from (or applied by) the math engine.
///
/// The evaluation pipeline treats the kind opaquely: it is passed through to
/// the engine and recorded alongside the rendered result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
	/// Full numeric evaluation.
	#[default]
	Numeric,
	/// Symbolic simplification.
	Simplify,
	/// Rewrite into elementary functions.
	Elementary,
}

impl OperationKind {
	/// All kinds, in declaration order.
	pub const ALL: [Self; 3] = [Self::Numeric, Self::Simplify, Self::Elementary];

	/// Stable lowercase name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Numeric => "numeric",
			Self::Simplify => "simplify",
			Self::Elementary => "elementary",
		}
	}
}

impl fmt::Display for OperationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OperationKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|kind| kind.as_str().eq_ignore_ascii_case(s))
			.ok_or_else(|| format!("unknown operation kind: {s}"))
	}
}
