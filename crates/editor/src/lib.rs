#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Calculator core: the evaluation pipeline and history state machine.
//!
//! This crate mediates between the user-visible expression editor, the math
//! engine and a linear undo/redo history.
//!
//! # Main Types
//!
//! - [`Controller`] - Public surface: text operations, evaluation, history, caret
//! - [`Editor`] - Expression text and caret
//! - [`Display`] - Last rendered result and its validity
//! - [`HistoryStore`] - Append-only snapshot timeline with an undo/redo cursor
//! - [`Coordinator`] - Pending-job register enforcing latest-wins evaluation
//!
//! # Data Flow
//!
//! ```text
//! input ─► Controller ─► Editor (text op)
//!                 │
//!                 └─► Coordinator ─► Timer ─► Controller::run_job ─► Engine
//!                                                      │
//!                                   Display ◄──────────┤
//!                                   HistoryStore ◄─────┘ (back-patch)
//! ```
//!
//! All Editor and Display mutation happens on the foreground thread that owns
//! the [`Controller`]. The pending slot and the history store each sit behind
//! their own lock.

pub mod config;
pub mod controller;
pub mod coordinator;
pub mod display;
pub mod editor;
pub mod error;
pub mod history;
pub mod launch;
pub mod ports;

pub use config::{CalculatorConfig, ConfigError, Messages};
pub use controller::{Controller, EvalOptions};
pub use coordinator::{Coordinator, Evaluation, JobOutcome, JobTarget, PendingJob};
pub use display::Display;
pub use editor::Editor;
pub use error::ControllerError;
pub use history::{HistoryAction, HistoryError, HistoryState, HistoryStore, SharedHistory, Snapshot};
pub use launch::{DisplayAction, LaunchRequest, MenuItem};
pub use ports::{Clipboard, ControllerPorts, JobTimer, Launcher, Notifier, View};
