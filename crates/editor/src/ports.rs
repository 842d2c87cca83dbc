//! Collaborator ports injected into the [`Controller`](crate::Controller).

use std::sync::Arc;

use calcpp_engine::{Engine, TokenClassifier};
use calcpp_primitives::{DisplayState, EditorState, MessageId};
use calcpp_worker::Timer;

use crate::coordinator::PendingJob;
use crate::launch::LaunchRequest;

/// Timer posting evaluation jobs back to the foreground thread.
pub type JobTimer = Arc<dyn Timer<PendingJob>>;

/// Clipboard sink.
pub trait Clipboard: Send + Sync {
	fn write_text(&self, text: &str);
}

/// User-visible confirmations and errors.
pub trait Notifier: Send + Sync {
	fn toast(&self, message: MessageId);
}

/// Opens auxiliary screens.
pub trait Launcher: Send + Sync {
	fn launch(&self, request: LaunchRequest);
}

/// Rendering surface for the editor and the display.
pub trait View: Send + Sync {
	fn redraw_editor(&self, state: &EditorState);
	fn redraw_display(&self, state: &DisplayState);
}

/// Everything a controller talks to.
#[derive(Clone)]
pub struct ControllerPorts {
	pub engine: Arc<dyn Engine>,
	pub classifier: Arc<dyn TokenClassifier>,
	pub timer: JobTimer,
	pub clipboard: Arc<dyn Clipboard>,
	pub notifier: Arc<dyn Notifier>,
	pub launcher: Arc<dyn Launcher>,
	pub view: Arc<dyn View>,
}
