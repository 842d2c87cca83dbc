//! Expression editor: text plus caret.

use calcpp_primitives::{CharIdx, EditorState, Selection};
use ropey::Rope;

use crate::ports::View;

/// User's current expression and caret.
///
/// Selection indices are always clamped to `0..=len` (in chars).
#[derive(Debug, Clone, Default)]
pub struct Editor {
	text: Rope,
	selection: Selection,
}

impl Editor {
	pub fn new() -> Self {
		Self::default()
	}

	/// Current expression text.
	pub fn text(&self) -> String {
		self.text.to_string()
	}

	/// Length in chars.
	pub fn len_chars(&self) -> CharIdx {
		self.text.len_chars()
	}

	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Replaces the text and places the caret at its end.
	pub fn set_text(&mut self, text: &str) {
		self.text = Rope::from_str(text);
		self.selection = Selection::point(self.text.len_chars());
	}

	/// Inserts `s` at the selection start.
	///
	/// Any selected text is kept; both selection ends move past the inserted
	/// text.
	pub fn insert_at_caret(&mut self, s: &str) {
		let at = self.selection.start();
		self.text.insert(at, s);
		let inserted = s.chars().count() as isize;
		self.selection = self.selection.shifted(inserted, self.text.len_chars());
	}

	/// Deletes the selection, or the char before a cursor.
	pub fn erase(&mut self) {
		let (start, end) = if self.selection.is_point() {
			let end = self.selection.start();
			(end.saturating_sub(1), end)
		} else {
			(self.selection.start(), self.selection.end())
		};
		if start < end {
			self.text.remove(start..end);
		}
		self.selection = Selection::point(start);
	}

	/// Sets a cursor at `pos` (clamped).
	pub fn set_cursor(&mut self, pos: CharIdx) {
		self.set_selection(pos, pos);
	}

	/// Sets the selection `start..end` (clamped, either order).
	pub fn set_selection(&mut self, start: CharIdx, end: CharIdx) {
		self.selection = Selection::new(start, end).clamp(self.text.len_chars());
	}

	pub fn selection(&self) -> Selection {
		self.selection
	}

	pub fn selection_start(&self) -> CharIdx {
		self.selection.start()
	}

	pub fn selection_end(&self) -> CharIdx {
		self.selection.end()
	}

	pub fn clear(&mut self) {
		self.text = Rope::new();
		self.selection = Selection::point(0);
	}

	/// Captures text and caret.
	pub fn state(&self) -> EditorState {
		EditorState {
			text: self.text(),
			selection: self.selection,
		}
	}

	/// Restores text and caret from a captured state.
	pub fn restore(&mut self, state: &EditorState) {
		self.text = Rope::from_str(&state.text);
		self.selection = state.selection.clamp(self.text.len_chars());
	}

	pub fn redraw(&self, view: &dyn View) {
		view.redraw_editor(&self.state());
	}
}
