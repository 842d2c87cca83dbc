//! Result display.

use calcpp_primitives::{DisplayState, GenericResult, OperationKind};

use crate::ports::View;

/// Last rendered result, its validity and the kind that produced it.
#[derive(Debug, Clone, Default)]
pub struct Display {
	state: DisplayState,
}

impl Display {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a result text; marks the display valid and clears the error.
	pub fn set_text(&mut self, text: impl Into<String>) {
		self.state.text = text.into();
		self.state.valid = true;
		self.state.error_message = None;
	}

	pub fn set_operation_kind(&mut self, operation: OperationKind) {
		self.state.operation = operation;
	}

	pub fn set_generic_result(&mut self, generic: Option<GenericResult>) {
		self.state.generic = generic;
	}

	/// Marking the display valid also drops any error message.
	pub fn set_valid(&mut self, valid: bool) {
		self.state.valid = valid;
		if valid {
			self.state.error_message = None;
		}
	}

	pub fn set_error_message(&mut self, message: Option<String>) {
		self.state.error_message = message;
	}

	pub fn text(&self) -> &str {
		&self.state.text
	}

	pub fn is_valid(&self) -> bool {
		self.state.valid
	}

	pub fn operation_kind(&self) -> OperationKind {
		self.state.operation
	}

	pub fn generic_result(&self) -> Option<&GenericResult> {
		self.state.generic.as_ref()
	}

	pub fn error_message(&self) -> Option<&str> {
		self.state.error_message.as_deref()
	}

	pub fn state(&self) -> DisplayState {
		self.state.clone()
	}

	pub fn restore(&mut self, state: &DisplayState) {
		self.state = state.clone();
	}

	pub fn redraw(&self, view: &dyn View) {
		view.redraw_display(&self.state);
	}
}
