//! Scheduling primitives for the calculator's foreground thread.
//!
//! * [`GenerationClock`]: monotonic generation ids for supersession checks.
//! * [`Timer`]: port for posting an item back to the foreground after a delay.
//! * [`TokioTimer`]: tokio-backed timer delivering items over a channel.
//! * [`ManualTimer`]: virtual-clock timer for deterministic tests and hosts
//!   that drive their own event loop.

mod timer;
mod token;

pub use timer::{ManualTimer, Timer, TokioTimer};
pub use token::GenerationClock;
