#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use calcpp_editor::{
	CalculatorConfig, Clipboard, Controller, ControllerPorts, HistoryStore, Launcher, LaunchRequest, Notifier, PendingJob,
	SharedHistory, View,
};
use calcpp_engine::{ArithmeticEngine, Engine, EngineConfig, EngineResult, MathTypeClassifier, Result};
use calcpp_primitives::{DisplayState, EditorState, MessageId, OperationKind};
use calcpp_worker::ManualTimer;
use parking_lot::Mutex;

/// Arithmetic engine that records every call.
#[derive(Default)]
pub struct RecordingEngine {
	inner: ArithmeticEngine,
	pub calls: Mutex<Vec<(OperationKind, String)>>,
}

impl RecordingEngine {
	pub fn call_count(&self) -> usize {
		self.calls.lock().len()
	}

	pub fn expressions(&self) -> Vec<String> {
		self.calls.lock().iter().map(|(_, expression)| expression.clone()).collect()
	}
}

impl Engine for RecordingEngine {
	fn evaluate(&self, kind: OperationKind, expression: &str) -> Result<EngineResult> {
		self.calls.lock().push((kind, expression.to_string()));
		self.inner.evaluate(kind, expression)
	}

	fn is_valid_value(&self, text: &str) -> bool {
		self.inner.is_valid_value(text)
	}

	fn set_config(&self, config: EngineConfig) {
		self.inner.set_config(config);
	}

	fn config(&self) -> EngineConfig {
		self.inner.config()
	}
}

#[derive(Default)]
pub struct RecordingClipboard {
	pub texts: Mutex<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
	fn write_text(&self, text: &str) {
		self.texts.lock().push(text.to_string());
	}
}

#[derive(Default)]
pub struct RecordingNotifier {
	pub toasts: Mutex<Vec<MessageId>>,
}

impl Notifier for RecordingNotifier {
	fn toast(&self, message: MessageId) {
		self.toasts.lock().push(message);
	}
}

#[derive(Default)]
pub struct RecordingLauncher {
	pub requests: Mutex<Vec<LaunchRequest>>,
}

impl Launcher for RecordingLauncher {
	fn launch(&self, request: LaunchRequest) {
		self.requests.lock().push(request);
	}
}

#[derive(Default)]
pub struct RecordingView {
	pub editor: Mutex<Vec<EditorState>>,
	pub display: Mutex<Vec<DisplayState>>,
}

impl RecordingView {
	pub fn display_redraws(&self) -> usize {
		self.display.lock().len()
	}
}

impl View for RecordingView {
	fn redraw_editor(&self, state: &EditorState) {
		self.editor.lock().push(state.clone());
	}

	fn redraw_display(&self, state: &DisplayState) {
		self.display.lock().push(state.clone());
	}
}

/// Attached controller wired to recording fakes and a manual timer.
pub struct Harness {
	pub controller: Controller,
	pub timer: ManualTimer<PendingJob>,
	pub history: SharedHistory,
	pub engine: Arc<RecordingEngine>,
	pub clipboard: Arc<RecordingClipboard>,
	pub notifier: Arc<RecordingNotifier>,
	pub launcher: Arc<RecordingLauncher>,
	pub view: Arc<RecordingView>,
}

impl Harness {
	pub fn new() -> Self {
		Self::with_history(HistoryStore::new(), CalculatorConfig::default())
	}

	pub fn with_config(config: CalculatorConfig) -> Self {
		Self::with_history(HistoryStore::with_limit(config.history_limit), config)
	}

	pub fn with_history(store: HistoryStore, config: CalculatorConfig) -> Self {
		let _ = tracing_subscriber::fmt::try_init();

		let timer = ManualTimer::new();
		let engine = Arc::new(RecordingEngine::default());
		engine.set_config(config.engine.clone());
		let clipboard = Arc::new(RecordingClipboard::default());
		let notifier = Arc::new(RecordingNotifier::default());
		let launcher = Arc::new(RecordingLauncher::default());
		let view = Arc::new(RecordingView::default());
		let history = store.into_shared();

		let ports = ControllerPorts {
			engine: engine.clone(),
			classifier: Arc::new(MathTypeClassifier),
			timer: Arc::new(timer.clone()),
			clipboard: clipboard.clone(),
			notifier: notifier.clone(),
			launcher: launcher.clone(),
			view: view.clone(),
		};
		let mut controller = Controller::new(ports, Arc::clone(&history), &config);
		controller.attach();

		Self {
			controller,
			timer,
			history,
			engine,
			clipboard,
			notifier,
			launcher,
			view,
		}
	}

	/// Delivers every job due after `by` and returns how many ran.
	pub fn advance(&mut self, by: Duration) -> usize {
		let jobs = self.timer.advance(by);
		let count = jobs.len();
		for job in jobs {
			self.controller.run_job(job);
		}
		count
	}

	/// Lets every posted job run.
	pub fn settle(&mut self) {
		loop {
			let jobs = self.timer.drain();
			if jobs.is_empty() {
				break;
			}
			for job in jobs {
				self.controller.run_job(job);
			}
		}
	}

	pub fn type_tokens(&mut self, tokens: &[&str]) {
		for token in tokens {
			self.controller.process_digit_button(token);
		}
	}

	pub fn history_len(&self) -> usize {
		self.history.lock().len()
	}

	pub fn display_text(&self) -> String {
		self.controller.display().text().to_string()
	}

	pub fn editor_text(&self) -> String {
		self.controller.editor().text()
	}
}
