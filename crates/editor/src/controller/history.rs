//! Undo/redo and snapshot restore.

use std::sync::Arc;

use super::Controller;
use crate::history::{HistoryAction, HistoryStore, Snapshot};

impl Controller {
	/// Moves through history and restores the reached snapshot.
	///
	/// Returns false when the action was not available; that case is not an
	/// error since the UI is expected to disable the button.
	pub fn do_history_action(&mut self, action: HistoryAction) -> bool {
		let history = Arc::clone(&self.history);
		let mut history = history.lock();
		if !history.is_action_available(action) {
			tracing::trace!(%action, "history action unavailable");
			return false;
		}
		match history.do_action(action) {
			Ok(snapshot) => {
				self.restore_snapshot(&snapshot, &mut history);
				true
			}
			Err(error) => {
				tracing::trace!(%error, "history action failed");
				false
			}
		}
	}

	/// Loads `snapshot` into the editor and the display.
	pub fn set_current_history_state(&mut self, snapshot: &Snapshot) {
		let history = Arc::clone(&self.history);
		let mut history = history.lock();
		self.restore_snapshot(snapshot, &mut history);
	}

	/// Copies a snapshot into editor and display under the history lock,
	/// hydrating it when its display text is missing.
	pub(crate) fn restore_snapshot(&mut self, snapshot: &Snapshot, history: &mut HistoryStore) {
		tracing::debug!(id = %snapshot.id, text = %snapshot.state.editor.text, "restoring snapshot");
		self.coordinator.supersede();
		self.editor.restore(&snapshot.state.editor);
		self.display.restore(&snapshot.state.display);

		if !self.editor.is_empty() && self.display.text().is_empty() {
			self.hydrate(snapshot.id, self.display.operation_kind(), history);
		}

		self.redraw();
	}
}
