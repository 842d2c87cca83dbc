//! Handing the displayed result to the clipboard and other screens.

use calcpp_primitives::MessageId;

use super::Controller;
use crate::error::ControllerError;
use crate::launch::{DisplayAction, LaunchRequest, MenuItem};

impl Controller {
	/// Copies a valid, non-empty result to the clipboard.
	///
	/// Returns whether anything was copied.
	pub fn copy_result(&self) -> bool {
		if !self.display.is_valid() || self.display.text().is_empty() {
			return false;
		}
		self.ports.clipboard.write_text(self.display.text());
		self.ports.notifier.toast(MessageId::ResultCopied);
		true
	}

	/// Opens the variable editor prefilled with the displayed result.
	pub fn create_var(&self) -> Result<(), ControllerError> {
		let value = self.display.text();
		if !self.display.is_valid() {
			return self.reject(ControllerError::InvalidResultForVarCreate);
		}
		if value.is_empty() {
			return self.reject(ControllerError::EmptyResultForVarCreate);
		}
		if !self.ports.engine.is_valid_value(value) {
			return self.reject(ControllerError::InvalidResultForVarCreate);
		}
		self.launch(LaunchRequest::CreateVar { value: value.to_string() });
		Ok(())
	}

	/// Plots a result with exactly one free variable.
	pub fn plot_graph(&self) -> Result<(), ControllerError> {
		match self.plot_request() {
			Some(request) => {
				self.launch(request);
				Ok(())
			}
			None => self.reject(ControllerError::InvalidResultForPlot),
		}
	}

	/// Forwards a screen request to the launcher.
	pub fn launch(&self, request: LaunchRequest) {
		tracing::debug!(screen = request.key(), "launch");
		self.ports.launcher.launch(request);
	}

	/// Decides what tapping the display brings up.
	pub fn on_display_clicked(&self) -> DisplayAction {
		if !self.display.is_valid() {
			return match self.display.error_message() {
				Some(message) => DisplayAction::ShowError(message.to_string()),
				None => DisplayAction::None,
			};
		}

		let items: Vec<MenuItem> = MenuItem::ALL.into_iter().filter(|item| self.is_menu_item_visible(*item)).collect();
		if items.is_empty() {
			DisplayAction::None
		} else {
			DisplayAction::Menu(items)
		}
	}

	/// Performs a result context menu entry.
	pub fn select_menu_item(&self, item: MenuItem) -> Result<(), ControllerError> {
		match item {
			MenuItem::Copy => {
				self.copy_result();
				Ok(())
			}
			MenuItem::ConvertToVar => self.create_var(),
			MenuItem::Plot => self.plot_graph(),
		}
	}

	fn is_menu_item_visible(&self, item: MenuItem) -> bool {
		let text = self.display.text();
		match item {
			MenuItem::Copy => !text.is_empty(),
			MenuItem::ConvertToVar => !text.is_empty() && self.ports.engine.is_valid_value(text),
			MenuItem::Plot => self.plot_request().is_some(),
		}
	}

	fn plot_request(&self) -> Option<LaunchRequest> {
		if !self.display.is_valid() {
			return None;
		}
		let generic = self.display.generic_result()?;
		match generic.variables.as_slice() {
			[variable] => Some(LaunchRequest::PlotGraph {
				expression: generic.expression.clone(),
				variable: variable.clone(),
			}),
			_ => None,
		}
	}

	fn reject(&self, error: ControllerError) -> Result<(), ControllerError> {
		tracing::debug!(%error, text = %self.display.text(), "result hand-off rejected");
		self.ports.notifier.toast(error.message_id());
		Err(error)
	}
}
