//! Interactive loop driving the controller from stdin.
//!
//! The loop owns the [`Controller`] and is the foreground thread: it
//! multiplexes input lines with evaluation jobs delivered by the timer, so
//! every editor and display mutation happens here.

pub mod command;
pub mod terminal;

use std::sync::Arc;

use anyhow::Context;
use calcpp_editor::{Controller, DisplayAction, PendingJob, Snapshot};
use calcpp_engine::EngineConfig;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use self::command::{Command, HELP};
use self::terminal::TerminalClipboard;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

/// REPL state.
pub struct Repl {
	controller: Controller,
	jobs: UnboundedReceiver<PendingJob>,
	clipboard: Arc<TerminalClipboard>,
}

impl Repl {
	pub fn new(controller: Controller, jobs: UnboundedReceiver<PendingJob>, clipboard: Arc<TerminalClipboard>) -> Self {
		Self {
			controller,
			jobs,
			clipboard,
		}
	}

	/// Runs until `:quit` or end of input.
	pub async fn run(mut self) -> anyhow::Result<()> {
		let mut lines = BufReader::new(tokio::io::stdin()).lines();
		loop {
			tokio::select! {
				job = self.jobs.recv() => match job {
					Some(job) => self.controller.run_job(job),
					None => break,
				},
				line = lines.next_line() => {
					let Some(line) = line.context("reading stdin")? else {
						break;
					};
					match Command::parse(&line) {
						Ok(Some(command)) => {
							if self.execute(command) == Flow::Quit {
								break;
							}
						}
						Ok(None) => {}
						Err(error) => eprintln!("{error}"),
					}
				}
			}
		}

		self.settle().await;
		self.controller.detach();
		Ok(())
	}

	/// Lets the pending evaluation finish so piped input prints its result.
	async fn settle(&mut self) {
		while self.controller.coordinator().has_pending() {
			match self.jobs.recv().await {
				Some(job) => self.controller.run_job(job),
				None => break,
			}
		}
	}

	pub fn execute(&mut self, command: Command) -> Flow {
		tracing::trace!(?command, "repl.execute");
		let controller = &mut self.controller;
		match command {
			Command::Tokens(tokens) => {
				for token in &tokens {
					controller.process_digit_button(token);
				}
			}
			Command::Evaluate => controller.evaluate(),
			Command::EvaluateAs(kind) => controller.evaluate_as(kind),
			Command::History(action) => {
				if !controller.do_history_action(action) {
					eprintln!("nothing to {action}");
				}
			}
			Command::Clear => controller.clear(),
			Command::Erase => controller.do_text_operation(|editor| editor.erase()),
			Command::Left => controller.move_cursor_left(),
			Command::Right => controller.move_cursor_right(),
			Command::Home => controller.set_cursor_on_start(),
			Command::End => controller.set_cursor_on_end(),
			Command::Copy => {
				if controller.copy_result()
					&& let Some(text) = self.clipboard.contents()
				{
					println!("copied {text}");
				}
			}
			Command::CreateVar => {
				let _ = controller.create_var();
			}
			Command::Plot => {
				let _ = controller.plot_graph();
			}
			Command::Click => match controller.on_display_clicked() {
				DisplayAction::Menu(items) => println!("menu: {items:?}"),
				DisplayAction::ShowError(message) => println!("error: {message}"),
				DisplayAction::None => {}
			},
			Command::PrintHistory => {
				let snapshots: Vec<Snapshot> = controller.history().lock().iter().cloned().collect();
				match serde_json::to_string_pretty(&snapshots) {
					Ok(json) => println!("{json}"),
					Err(error) => tracing::warn!(%error, "history not serializable"),
				}
			}
			Command::Launch(request) => controller.launch(request),
			Command::SetPrecision(precision) => {
				let config = EngineConfig {
					precision,
					..controller.engine_config()
				};
				controller.on_engine_config_changed(config);
			}
			Command::SetAngle(angle_unit) => {
				let config = EngineConfig {
					angle_unit,
					..controller.engine_config()
				};
				controller.on_engine_config_changed(config);
			}
			Command::Help => println!("{HELP}"),
			Command::Quit => return Flow::Quit,
		}
		Flow::Continue
	}
}
