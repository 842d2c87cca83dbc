use serde::{Deserialize, Serialize};


/// A position in the expression text, measured in characters (not bytes).
pub type CharIdx = usize;

/// Caret of the expression editor: a cursor or a selected range.
///
/// Always normalized so that `start <= end`. A zero-width selection is a plain
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
	start: CharIdx,
	end: CharIdx,
}

impl Selection {
	/// Creates a selection spanning `a..b` in either order.
	pub fn new(a: CharIdx, b: CharIdx) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	/// Creates a zero-width cursor.
	pub fn point(pos: CharIdx) -> Self {
		Self { start: pos, end: pos }
	}

	/// Inclusive start of the selection.
	#[inline]
	pub fn start(&self) -> CharIdx {
		self.start
	}

	/// Exclusive end of the selection.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.end
	}

	/// Returns true for a zero-width cursor.
	#[inline]
	pub fn is_point(&self) -> bool {
		self.start == self.end
	}

	/// Clamps both ends into `0..=len`.
	#[must_use]
	pub fn clamp(self, len: CharIdx) -> Self {
		Self::new(self.start.min(len), self.end.min(len))
	}

	/// Moves both ends by `delta`, saturating at zero and at `len`.
	#[must_use]
	pub fn shifted(self, delta: isize, len: CharIdx) -> Self {
		let shift = |pos: CharIdx| pos.saturating_add_signed(delta).min(len);
		Self::new(shift(self.start), shift(self.end))
	}
}
