//! Linear undo/redo history of calculator snapshots.
//!
//! The store is an ordered sequence of [`Snapshot`]s plus a cursor pointing at
//! the current one. Appending after an undo truncates the redo tail; undo and
//! redo only move the cursor.
//!
//! Snapshots are immutable once appended with one exception: a finished
//! evaluation may back-patch the display state of the snapshot it was started
//! for, identified by [`SnapshotId`]. The editor state and the identity of a
//! snapshot never change.

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use calcpp_primitives::{DisplayState, EditorState, SnapshotId};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum number of retained snapshots.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// History store shared between the controller and whoever renders history.
///
/// All store operations are serialized under this one lock.
pub type SharedHistory = Arc<Mutex<HistoryStore>>;

/// Editor and display contents captured together.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryState {
	pub editor: EditorState,
	pub display: DisplayState,
}

impl HistoryState {
	pub fn new(editor: EditorState, display: DisplayState) -> Self {
		Self { editor, display }
	}
}

/// Recorded state at one point of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
	pub id: SnapshotId,
	pub timestamp: DateTime<Utc>,
	pub state: HistoryState,
}

/// Cursor movement requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryAction {
	Undo,
	Redo,
}

impl HistoryAction {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Undo => "undo",
			Self::Redo => "redo",
		}
	}
}

impl fmt::Display for HistoryAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// History store failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
	/// Nothing on the requested side of the cursor.
	#[error("no history to {0}")]
	NoHistory(HistoryAction),
}

/// Append-only snapshot timeline with an undo/redo cursor.
#[derive(Debug, Clone)]
pub struct HistoryStore {
	snapshots: Vec<Snapshot>,
	cursor: Option<usize>,
	next_id: u64,
	limit: usize,
}

impl Default for HistoryStore {
	fn default() -> Self {
		Self::with_limit(DEFAULT_HISTORY_LIMIT)
	}
}

impl HistoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store retaining at most `limit` snapshots (at least one).
	pub fn with_limit(limit: usize) -> Self {
		Self {
			snapshots: Vec::new(),
			cursor: None,
			next_id: 0,
			limit: limit.max(1),
		}
	}

	/// Wraps the store for sharing.
	pub fn into_shared(self) -> SharedHistory {
		Arc::new(Mutex::new(self))
	}

	/// Appends `state` as a new snapshot and moves the cursor onto it.
	///
	/// Any redo tail beyond the cursor is dropped first. When the limit is
	/// exceeded the oldest snapshot is evicted.
	pub fn append(&mut self, state: HistoryState) -> SnapshotId {
		if let Some(cursor) = self.cursor {
			let dropped = self.snapshots.len() - (cursor + 1);
			if dropped > 0 {
				tracing::trace!(dropped, "history.truncate_redo");
				self.snapshots.truncate(cursor + 1);
			}
		}

		let id = SnapshotId(self.next_id);
		self.next_id += 1;
		self.snapshots.push(Snapshot {
			id,
			timestamp: Utc::now(),
			state,
		});

		if self.snapshots.len() > self.limit {
			let evicted = self.snapshots.len() - self.limit;
			self.snapshots.drain(..evicted);
		}
		self.cursor = Some(self.snapshots.len() - 1);

		tracing::debug!(%id, len = self.snapshots.len(), "history.append");
		id
	}

	/// Snapshot under the cursor.
	pub fn current(&self) -> Option<&Snapshot> {
		self.cursor.and_then(|cursor| self.snapshots.get(cursor))
	}

	/// Most recently appended snapshot, regardless of the cursor.
	pub fn last(&self) -> Option<&Snapshot> {
		self.snapshots.last()
	}

	pub fn can_undo(&self) -> bool {
		self.cursor.is_some_and(|cursor| cursor > 0)
	}

	pub fn can_redo(&self) -> bool {
		self.cursor.is_some_and(|cursor| cursor + 1 < self.snapshots.len())
	}

	/// Moves the cursor back and returns the snapshot it now points at.
	pub fn undo(&mut self) -> Result<&Snapshot, HistoryError> {
		match self.cursor {
			Some(cursor) if cursor > 0 => {
				self.cursor = Some(cursor - 1);
				tracing::debug!(cursor = cursor - 1, "history.undo");
				Ok(&self.snapshots[cursor - 1])
			}
			_ => Err(HistoryError::NoHistory(HistoryAction::Undo)),
		}
	}

	/// Moves the cursor forward and returns the snapshot it now points at.
	pub fn redo(&mut self) -> Result<&Snapshot, HistoryError> {
		match self.cursor {
			Some(cursor) if cursor + 1 < self.snapshots.len() => {
				self.cursor = Some(cursor + 1);
				tracing::debug!(cursor = cursor + 1, "history.redo");
				Ok(&self.snapshots[cursor + 1])
			}
			_ => Err(HistoryError::NoHistory(HistoryAction::Redo)),
		}
	}

	pub fn is_action_available(&self, action: HistoryAction) -> bool {
		match action {
			HistoryAction::Undo => self.can_undo(),
			HistoryAction::Redo => self.can_redo(),
		}
	}

	/// Performs `action` and returns a copy of the newly current snapshot.
	pub fn do_action(&mut self, action: HistoryAction) -> Result<Snapshot, HistoryError> {
		let snapshot = match action {
			HistoryAction::Undo => self.undo()?,
			HistoryAction::Redo => self.redo()?,
		};
		Ok(snapshot.clone())
	}

	/// Replaces the display state of snapshot `id`.
	///
	/// Returns false when the snapshot is gone (evicted or truncated).
	pub fn patch_display(&mut self, id: SnapshotId, display: DisplayState) -> bool {
		match self.snapshots.iter_mut().find(|snapshot| snapshot.id == id) {
			Some(snapshot) => {
				let text = &display.text;
				tracing::trace!(%id, text = %text, "history.patch_display");
				snapshot.state.display = display;
				true
			}
			None => {
				tracing::trace!(%id, "history.patch_display: snapshot gone");
				false
			}
		}
	}

	pub fn get(&self, id: SnapshotId) -> Option<&Snapshot> {
		self.snapshots.iter().find(|snapshot| snapshot.id == id)
	}

	/// Index of the current snapshot.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn len(&self) -> usize {
		self.snapshots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.snapshots.is_empty()
	}

	/// Snapshots from oldest to newest.
	pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
		self.snapshots.iter()
	}
}
