//! Errors surfaced by controller actions that hand results to other screens.

use calcpp_primitives::MessageId;
use thiserror::Error;

/// Rejected hand-off of the displayed result.
///
/// Every variant is reported to the user through the notifier before it is
/// returned; none of them changes calculator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ControllerError {
	/// The result is invalid or not a plain value.
	#[error("result cannot be stored in a variable")]
	InvalidResultForVarCreate,

	/// There is no result to store.
	#[error("result is empty")]
	EmptyResultForVarCreate,

	/// The result is invalid or does not have exactly one free variable.
	#[error("result cannot be plotted")]
	InvalidResultForPlot,
}

impl ControllerError {
	/// Message toasted for this error.
	pub const fn message_id(self) -> MessageId {
		match self {
			Self::InvalidResultForVarCreate | Self::InvalidResultForPlot => MessageId::NotValidResult,
			Self::EmptyResultForVarCreate => MessageId::EmptyVarError,
		}
	}
}
