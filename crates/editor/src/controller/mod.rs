//! Public surface of the calculator core.
//!
//! The [`Controller`] owns the [`Editor`] and the [`Display`] and is driven
//! from a single foreground thread. Its behaviour is split across modules:
//!
//! - [`eval`] - job submission, execution and display rendering
//! - [`history`] - undo/redo, snapshot restore and hydration
//! - [`result`] - copy, variable creation, plotting and display clicks
//!
//! This module holds construction, lifecycle, text operations, digit-button
//! insertion and caret movement.

mod eval;
mod history;
mod result;

use std::sync::Arc;

use calcpp_engine::MathType;
use calcpp_primitives::{DisplayState, OperationKind};

use crate::config::{CalculatorConfig, Messages};
use crate::coordinator::Coordinator;
use crate::display::Display;
use crate::editor::Editor;
use crate::history::SharedHistory;
use crate::ports::ControllerPorts;

/// How a text operation triggers evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
	/// Post the job through the timer instead of running it inline.
	pub delayed: bool,
	pub kind: OperationKind,
	/// Evaluate even when the operation left the text unchanged.
	pub force_eval: bool,
}

impl Default for EvalOptions {
	fn default() -> Self {
		Self {
			delayed: true,
			kind: OperationKind::Numeric,
			force_eval: false,
		}
	}
}

/// Calculator controller.
pub struct Controller {
	editor: Editor,
	display: Display,
	history: SharedHistory,
	coordinator: Coordinator,
	ports: ControllerPorts,
	messages: Messages,
}

impl Controller {
	/// Creates a controller over `history`.
	///
	/// Call [`Controller::attach`] before handling input.
	pub fn new(ports: ControllerPorts, history: SharedHistory, config: &CalculatorConfig) -> Self {
		let coordinator = Coordinator::new(Arc::clone(&ports.timer), config.eval_delay());
		Self {
			editor: Editor::new(),
			display: Display::new(),
			history,
			coordinator,
			ports,
			messages: config.messages.clone(),
		}
	}

	/// Restores the last recorded snapshot, or records the initial empty
	/// state when history is empty.
	pub fn attach(&mut self) {
		let history = Arc::clone(&self.history);
		let mut history = history.lock();
		match history.last().cloned() {
			Some(last) => {
				tracing::debug!(id = %last.id, "controller.attach: restoring last snapshot");
				self.restore_snapshot(&last, &mut history);
			}
			None => {
				history.append(self.current_history_state());
				self.redraw();
			}
		}
	}

	/// Discards any pending evaluation.
	pub fn detach(&mut self) {
		self.coordinator.supersede();
		tracing::debug!("controller.detach");
	}

	pub fn editor(&self) -> &Editor {
		&self.editor
	}

	pub fn display(&self) -> &Display {
		&self.display
	}

	pub fn history(&self) -> &SharedHistory {
		&self.history
	}

	pub fn coordinator(&self) -> &Coordinator {
		&self.coordinator
	}

	/// Applies `op` with the default [`EvalOptions`].
	pub fn do_text_operation(&mut self, op: impl FnOnce(&mut Editor)) {
		self.do_text_operation_with(op, EvalOptions::default());
	}

	/// Applies `op` to the editor and evaluates if the text changed (or when
	/// forced).
	pub fn do_text_operation_with(&mut self, op: impl FnOnce(&mut Editor), options: EvalOptions) {
		let before = self.editor.text();
		op(&mut self.editor);
		let after = self.editor.text();
		tracing::trace!(%before, %after, "controller.text_operation");

		if options.force_eval || before != after {
			self.editor.redraw(&*self.ports.view);
			self.submit_evaluation(options.delayed, after, options.kind);
		}
	}

	/// Inserts a button token at the caret with a delayed evaluation.
	pub fn process_digit_button(&mut self, token: &str) {
		self.process_digit_button_with(token, true);
	}

	/// Inserts a button token at the caret.
	///
	/// Functions and operators get `()` appended with the caret between the
	/// parentheses, commas get a trailing space and group pairs leave the
	/// caret just after the opener.
	pub fn process_digit_button_with(&mut self, token: &str, delayed: bool) {
		if token.is_empty() {
			return;
		}

		let classifier = &self.ports.classifier;
		let (text, offset) = match classifier.classify(token, 0, false).kind {
			MathType::Function | MathType::Operator => (format!("{token}()"), -1),
			MathType::Comma => (format!("{token} "), 0),
			_ if classifier.is_open_group(token) => (token.to_string(), -1),
			_ => (token.to_string(), 0),
		};

		self.do_text_operation_with(
			|editor| {
				editor.insert_at_caret(&text);
				if offset != 0 {
					let selection = editor.selection().shifted(offset, editor.len_chars());
					editor.set_selection(selection.start(), selection.end());
				}
			},
			EvalOptions {
				delayed,
				..EvalOptions::default()
			},
		);
	}

	/// Empties editor and display and records the blank state.
	///
	/// Does nothing when both are already empty.
	pub fn clear(&mut self) {
		if self.editor.is_empty() && self.display.text().is_empty() {
			return;
		}
		self.coordinator.supersede();
		self.editor.clear();
		let kind = self.display.operation_kind();
		self.display.restore(&DisplayState::blank(kind));
		self.redraw();

		let state = self.current_history_state();
		self.history.lock().append(state);
	}

	pub fn set_cursor_on_start(&mut self) {
		self.editor.set_cursor(0);
		self.editor.redraw(&*self.ports.view);
	}

	pub fn set_cursor_on_end(&mut self) {
		self.editor.set_cursor(self.editor.len_chars());
		self.editor.redraw(&*self.ports.view);
	}

	pub fn move_cursor_left(&mut self) {
		let start = self.editor.selection_start();
		if start > 0 {
			self.editor.set_cursor(start - 1);
			self.editor.redraw(&*self.ports.view);
		}
	}

	pub fn move_cursor_right(&mut self) {
		let start = self.editor.selection_start();
		if start < self.editor.len_chars() {
			self.editor.set_cursor(start + 1);
			self.editor.redraw(&*self.ports.view);
		}
	}

	fn redraw(&self) {
		self.editor.redraw(&*self.ports.view);
		self.display.redraw(&*self.ports.view);
	}
}
