//! Delayed posting back to the foreground thread.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Port for posting an item to the foreground after `delay`.
///
/// A zero delay still implies a tick boundary: the item is never delivered
/// re-entrantly from inside `post_delayed`.
pub trait Timer<T>: Send + Sync {
	fn post_delayed(&self, item: T, delay: Duration);
}

/// Tokio-backed timer.
///
/// Each post spawns a sleeper on the runtime; when it wakes the item is sent
/// to the foreground receiver returned by [`TokioTimer::channel`]. Dropping
/// the last clone of the timer (or calling [`TokioTimer::shutdown`]) cancels
/// sleepers that have not fired yet.
#[derive(Debug)]
pub struct TokioTimer<T> {
	handle: Handle,
	tx: mpsc::UnboundedSender<T>,
	cancel: CancellationToken,
}

impl<T: Send + 'static> TokioTimer<T> {
	/// Creates a timer spawning on `handle` and its foreground receiver.
	pub fn channel(handle: Handle) -> (Self, mpsc::UnboundedReceiver<T>) {
		let (tx, rx) = mpsc::unbounded_channel();
		let timer = Self {
			handle,
			tx,
			cancel: CancellationToken::new(),
		};
		(timer, rx)
	}

	/// Cancels all sleepers that have not fired yet.
	pub fn shutdown(&self) {
		self.cancel.cancel();
	}
}

impl<T> Drop for TokioTimer<T> {
	fn drop(&mut self) {
		self.cancel.cancel();
	}
}

impl<T: Send + 'static> Timer<T> for TokioTimer<T> {
	fn post_delayed(&self, item: T, delay: Duration) {
		let tx = self.tx.clone();
		let cancel = self.cancel.clone();
		tracing::trace!(delay_ms = delay.as_millis() as u64, "timer.post_delayed");
		self.handle.spawn(async move {
			tokio::select! {
				_ = cancel.cancelled() => {}
				_ = tokio::time::sleep(delay) => {
					if tx.send(item).is_err() {
						tracing::trace!("timer receiver dropped");
					}
				}
			}
		});
	}
}

#[derive(Debug)]
struct Posted<T> {
	due: Duration,
	item: T,
}

#[derive(Debug)]
struct ManualState<T> {
	now: Duration,
	queue: VecDeque<Posted<T>>,
}

/// Timer driven by an explicit virtual clock.
///
/// Items stay queued until [`ManualTimer::advance`] moves the clock past their
/// due time (or [`ManualTimer::drain`] flushes everything). Items with equal
/// due times are delivered in post order. Clones share the same queue.
#[derive(Debug)]
pub struct ManualTimer<T> {
	state: Arc<Mutex<ManualState<T>>>,
}

impl<T> Clone for ManualTimer<T> {
	fn clone(&self) -> Self {
		Self {
			state: Arc::clone(&self.state),
		}
	}
}

impl<T> Default for ManualTimer<T> {
	fn default() -> Self {
		Self {
			state: Arc::new(Mutex::new(ManualState {
				now: Duration::ZERO,
				queue: VecDeque::new(),
			})),
		}
	}
}

impl<T> ManualTimer<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Moves the virtual clock forward and returns the items now due.
	pub fn advance(&self, by: Duration) -> Vec<T> {
		let mut state = self.state.lock();
		state.now += by;
		let now = state.now;
		let mut due = Vec::new();
		let mut kept = VecDeque::with_capacity(state.queue.len());
		for posted in state.queue.drain(..) {
			if posted.due <= now {
				due.push(posted);
			} else {
				kept.push_back(posted);
			}
		}
		state.queue = kept;
		due.sort_by_key(|posted| posted.due);
		due.into_iter().map(|posted| posted.item).collect()
	}

	/// Returns every queued item regardless of due time, jumping the clock to
	/// the latest due time.
	pub fn drain(&self) -> Vec<T> {
		let latest = {
			let state = self.state.lock();
			state.queue.iter().map(|posted| posted.due).max().unwrap_or(state.now)
		};
		let now = self.state.lock().now;
		self.advance(latest.saturating_sub(now))
	}

	/// Number of queued items.
	pub fn pending(&self) -> usize {
		self.state.lock().queue.len()
	}

	/// Current virtual time.
	pub fn now(&self) -> Duration {
		self.state.lock().now
	}
}

impl<T: Send> Timer<T> for ManualTimer<T> {
	fn post_delayed(&self, item: T, delay: Duration) {
		let mut state = self.state.lock();
		let due = state.now + delay;
		state.queue.push_back(Posted { due, item });
	}
}
