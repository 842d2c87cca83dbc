//! Evaluation submission and display rendering.

use calcpp_engine::EngineConfig;
use calcpp_primitives::{DisplayState, MessageId, OperationKind, SnapshotId};

use super::Controller;
use crate::coordinator::{Evaluation, JobOutcome, JobTarget, PendingJob};
use crate::history::{HistoryState, HistoryStore};

impl Controller {
	/// Evaluates the editor text numerically, inline.
	pub fn evaluate(&mut self) {
		self.evaluate_as(OperationKind::Numeric);
	}

	/// Evaluates the editor text under `kind`, inline.
	pub fn evaluate_as(&mut self, kind: OperationKind) {
		let expression = self.editor.text();
		self.submit_evaluation(false, expression, kind);
	}

	pub fn simplify(&mut self) {
		self.evaluate_as(OperationKind::Simplify);
	}

	/// Runs a job delivered by the timer.
	///
	/// A job that is no longer current is dropped without touching the
	/// display or history.
	pub fn run_job(&mut self, job: PendingJob) {
		let Some(rendered) = self.execute(&job) else {
			return;
		};
		if let JobTarget::Snapshot(id) = job.target {
			self.history.lock().patch_display(id, rendered);
		}
	}

	/// Applies a new engine configuration and re-renders the current text.
	///
	/// The current snapshot is patched in place when it still describes the
	/// editor contents; no snapshot is appended.
	pub fn on_engine_config_changed(&mut self, config: EngineConfig) {
		tracing::debug!(?config, "engine config changed");
		self.ports.engine.set_config(config);

		let expression = self.editor.text();
		let job = self.coordinator.enqueue(expression.as_str(), self.display.operation_kind(), JobTarget::Detached);
		let Some(rendered) = self.execute(&job) else {
			return;
		};
		let mut history = self.history.lock();
		let current = history
			.current()
			.filter(|snapshot| snapshot.state.editor.text == expression)
			.map(|snapshot| snapshot.id);
		if let Some(id) = current {
			history.patch_display(id, rendered);
		}
	}

	/// Configuration the engine currently runs with.
	pub fn engine_config(&self) -> EngineConfig {
		self.ports.engine.config()
	}

	/// Editor and display captured together.
	pub fn current_history_state(&self) -> HistoryState {
		HistoryState::new(self.editor.state(), self.display.state())
	}

	/// Starts an evaluation of `expression` that records a new snapshot.
	///
	/// Delayed: the snapshot is appended right away and the job back-patches
	/// it after the debounce. Inline: the job runs first and the snapshot is
	/// appended with the rendered display.
	pub(crate) fn submit_evaluation(&mut self, delayed: bool, expression: String, kind: OperationKind) {
		let mut placeholder = self.current_history_state();

		if delayed {
			let id = self.history.lock().append(placeholder);
			let job = self.coordinator.enqueue(expression, kind, JobTarget::Snapshot(id));
			self.coordinator.dispatch(job);
		} else {
			let job = self.coordinator.enqueue(expression, kind, JobTarget::Detached);
			if let Some(rendered) = self.execute(&job) {
				placeholder.display = rendered;
			}
			self.history.lock().append(placeholder);
		}
	}

	/// Synchronously evaluates a restored snapshot that has editor text but
	/// no display text, patching it through the held history lock.
	pub(crate) fn hydrate(&mut self, id: SnapshotId, kind: OperationKind, history: &mut HistoryStore) {
		let expression = self.editor.text();
		tracing::debug!(%id, %expression, "hydrating snapshot");
		let job = self.coordinator.enqueue(expression, kind, JobTarget::Snapshot(id));
		if let Some(rendered) = self.execute(&job) {
			history.patch_display(id, rendered);
		}
	}

	/// Runs `job` and renders it if it stayed current.
	fn execute(&mut self, job: &PendingJob) -> Option<DisplayState> {
		match self.coordinator.run(job, &*self.ports.engine) {
			JobOutcome::Superseded => None,
			JobOutcome::Completed(evaluation) => {
				self.render(job.kind, evaluation);
				self.display.redraw(&*self.ports.view);
				Some(self.display.state())
			}
		}
	}

	fn render(&mut self, requested: OperationKind, evaluation: Evaluation) {
		match evaluation {
			Evaluation::Empty => self.display.restore(&DisplayState::blank(requested)),
			Evaluation::Success(_) if self.editor.is_empty() => {
				self.display.restore(&DisplayState::blank(requested));
			}
			Evaluation::Success(result) => {
				self.display.set_text(result.text);
				self.display.set_operation_kind(result.user_operation);
				self.display.set_generic_result(result.generic);
			}
			Evaluation::Failure(error) => {
				if self.display.text().is_empty() {
					self.display.set_text(self.messages.text(MessageId::SyntaxError));
				}
				self.display.set_operation_kind(requested);
				self.display.set_generic_result(None);
				self.display.set_valid(false);
				self.display.set_error_message(Some(error.localized_message()));
			}
		}
	}
}
