//! Stdout-backed collaborator ports.

use calcpp_editor::{Clipboard, LaunchRequest, Launcher, Messages, Notifier, View};
use calcpp_primitives::{DisplayState, EditorState, MessageId};
use parking_lot::Mutex;

/// Renders the expression with a caret marker and the result below it.
#[derive(Debug, Default)]
pub struct TerminalView {
	quiet: bool,
}

impl TerminalView {
	/// View that only keeps state for one-shot evaluation.
	pub fn quiet() -> Self {
		Self { quiet: true }
	}
}

/// Expression text with `|` at the caret, or `[..]` around a selection.
pub fn render_editor(state: &EditorState) -> String {
	let chars: Vec<char> = state.text.chars().collect();
	let (start, end) = (state.selection.start(), state.selection.end());
	let head: String = chars[..start].iter().collect();
	let tail: String = chars[end..].iter().collect();
	if start == end {
		format!("{head}|{tail}")
	} else {
		let selected: String = chars[start..end].iter().collect();
		format!("{head}[{selected}]{tail}")
	}
}

/// Result line: `= text` when valid, `~ text (error)` otherwise.
pub fn render_display(state: &DisplayState) -> String {
	match (&state.error_message, state.valid) {
		(Some(message), false) => format!("~ {} ({message})", state.text),
		_ => format!("= {} [{}]", state.text, state.operation),
	}
}

impl View for TerminalView {
	fn redraw_editor(&self, state: &EditorState) {
		if !self.quiet {
			println!("  {}", render_editor(state));
		}
	}

	fn redraw_display(&self, state: &DisplayState) {
		if !self.quiet {
			println!("{}", render_display(state));
		}
	}
}

/// In-process clipboard; the terminal has no system clipboard integration.
#[derive(Debug, Default)]
pub struct TerminalClipboard {
	contents: Mutex<Option<String>>,
}

impl TerminalClipboard {
	pub fn contents(&self) -> Option<String> {
		self.contents.lock().clone()
	}
}

impl Clipboard for TerminalClipboard {
	fn write_text(&self, text: &str) {
		*self.contents.lock() = Some(text.to_string());
	}
}

/// Prints localized toasts to stderr.
#[derive(Debug)]
pub struct TerminalNotifier {
	messages: Messages,
}

impl TerminalNotifier {
	pub fn new(messages: Messages) -> Self {
		Self { messages }
	}
}

impl Notifier for TerminalNotifier {
	fn toast(&self, message: MessageId) {
		eprintln!("* {}", self.messages.text(message));
	}
}

/// Reports screen requests; auxiliary screens do not exist in the terminal.
#[derive(Debug, Default)]
pub struct TerminalLauncher;

impl Launcher for TerminalLauncher {
	fn launch(&self, request: LaunchRequest) {
		match serde_json::to_string(&request) {
			Ok(json) => println!("-> {} {json}", request.key()),
			Err(error) => tracing::warn!(%error, "launch request not serializable"),
		}
	}
}
