//! Evaluation coordinator: debounce and latest-wins supersession.
//!
//! Every evaluation request becomes a [`PendingJob`] stamped with a fresh
//! generation from a [`GenerationClock`]. The pending slot remembers the
//! generation of the most recently enqueued job; a job is current iff its
//! generation is still in the slot.
//!
//! # Two checks
//!
//! A running job reads the slot under its lock twice:
//!
//! 1. before calling the engine, so a superseded job skips the engine call;
//! 2. before committing, where the slot is also cleared.
//!
//! The lock is released while the engine runs. A newer job enqueued in that
//! window replaces the generation and the older job discards its result at
//! the second check. The newer job re-evaluates the fresh text, so the only
//! cost is a missed render of a transient state.
//!
//! # Scheduling
//!
//! Delayed jobs are posted through the [`Timer`](calcpp_worker::Timer) port
//! and reach [`Controller::run_job`](crate::Controller::run_job) on the
//! foreground thread. A zero delay still goes through the timer and therefore
//! always implies a tick boundary. Non-delayed jobs run inline.


use std::sync::Arc;
use std::time::Duration;

use calcpp_engine::{Engine, EngineError, EngineResult};
use calcpp_primitives::{OperationKind, SnapshotId};
use calcpp_worker::GenerationClock;
use parking_lot::Mutex;

use crate::ports::JobTimer;

/// Where a finished job writes its rendered display state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobTarget {
	/// Back-patch the history snapshot with this id.
	Snapshot(SnapshotId),
	/// The caller keeps the snapshot and patches it itself.
	Detached,
}

/// One evaluation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingJob {
	pub generation: u64,
	pub expression: String,
	pub kind: OperationKind,
	pub target: JobTarget,
}

/// Engine outcome of a job that stayed current.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
	/// Blank expression; the engine was not called.
	Empty,
	Success(EngineResult),
	Failure(EngineError),
}

/// Result of running a job.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
	/// A newer job took the slot; nothing may be rendered.
	Superseded,
	/// The job was still current at commit time and cleared the slot.
	Completed(Evaluation),
}

#[derive(Debug, Default)]
struct PendingSlot {
	current: Option<u64>,
}

/// Pending-job register plus the timer that delivers delayed jobs.
///
/// Clones share the slot and the generation clock.
#[derive(Clone)]
pub struct Coordinator {
	slot: Arc<Mutex<PendingSlot>>,
	clock: GenerationClock,
	timer: JobTimer,
	delay: Duration,
}

impl Coordinator {
	pub fn new(timer: JobTimer, delay: Duration) -> Self {
		Self {
			slot: Arc::new(Mutex::new(PendingSlot::default())),
			clock: GenerationClock::new(),
			timer,
			delay,
		}
	}

	/// Debounce applied to delayed jobs.
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Creates a job and makes it the current one.
	pub fn enqueue(&self, expression: impl Into<String>, kind: OperationKind, target: JobTarget) -> PendingJob {
		let generation = self.clock.next();
		let job = PendingJob {
			generation,
			expression: expression.into(),
			kind,
			target,
		};
		let previous = self.slot.lock().current.replace(generation);
		tracing::trace!(generation, ?previous, kind = %kind, "coordinator.enqueue");
		job
	}

	/// Posts `job` through the timer after the debounce delay.
	pub fn dispatch(&self, job: PendingJob) {
		tracing::trace!(generation = job.generation, delay_ms = self.delay.as_millis() as u64, "coordinator.dispatch");
		self.timer.post_delayed(job, self.delay);
	}

	/// Drops whatever job is pending; it will be discarded when it runs.
	pub fn supersede(&self) {
		if let Some(generation) = self.slot.lock().current.take() {
			tracing::trace!(generation, "coordinator.supersede");
		}
	}

	pub fn has_pending(&self) -> bool {
		self.slot.lock().current.is_some()
	}

	pub fn is_current(&self, generation: u64) -> bool {
		self.slot.lock().current == Some(generation)
	}

	/// Runs the latest-wins protocol for `job` against `engine`.
	pub fn run(&self, job: &PendingJob, engine: &dyn Engine) -> JobOutcome {
		if !self.is_current(job.generation) {
			tracing::trace!(generation = job.generation, "job superseded before evaluation");
			return JobOutcome::Superseded;
		}

		let evaluation = if job.expression.is_empty() {
			Evaluation::Empty
		} else {
			tracing::debug!(expression = %job.expression, kind = %job.kind, generation = job.generation, "evaluating");
			match engine.evaluate(job.kind, &job.expression) {
				Ok(result) => Evaluation::Success(result),
				Err(error) => {
					tracing::debug!(expression = %job.expression, %error, "evaluation failed");
					Evaluation::Failure(error)
				}
			}
		};

		let mut slot = self.slot.lock();
		if slot.current != Some(job.generation) {
			tracing::trace!(generation = job.generation, "job superseded after evaluation");
			return JobOutcome::Superseded;
		}
		slot.current = None;
		JobOutcome::Completed(evaluation)
	}
}
