//! `calcpp`: terminal calculator with live evaluation and undo history.

mod cli;
mod repl;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use calcpp_editor::{CalculatorConfig, Controller, ControllerPorts, EvalOptions, HistoryStore};
use calcpp_engine::{ArithmeticEngine, MathTypeClassifier};
use calcpp_worker::TokioTimer;
use clap::Parser;
use cli::Cli;
use repl::Repl;
use repl::terminal::{TerminalClipboard, TerminalLauncher, TerminalNotifier, TerminalView};
use tokio::runtime::Handle;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = match cli.config_path() {
		Some(path) => CalculatorConfig::load(&path).with_context(|| format!("loading {}", path.display()))?,
		None => CalculatorConfig::default(),
	};
	info!(eval_delay_ms = config.eval_delay_ms, history_limit = config.history_limit, "starting calcpp");

	let (timer, jobs) = TokioTimer::channel(Handle::current());
	let clipboard = Arc::new(TerminalClipboard::default());
	let view = match cli.eval {
		Some(_) => TerminalView::quiet(),
		None => TerminalView::default(),
	};
	let ports = ControllerPorts {
		engine: Arc::new(ArithmeticEngine::new(config.engine.clone())),
		classifier: Arc::new(MathTypeClassifier),
		timer: Arc::new(timer),
		clipboard: clipboard.clone(),
		notifier: Arc::new(TerminalNotifier::new(config.messages.clone())),
		launcher: Arc::new(TerminalLauncher),
		view: Arc::new(view),
	};
	let history = HistoryStore::with_limit(config.history_limit).into_shared();
	let mut controller = Controller::new(ports, history, &config);
	controller.attach();

	if let Some(expression) = cli.eval {
		controller.do_text_operation_with(
			|editor| editor.set_text(&expression),
			EvalOptions {
				delayed: false,
				..EvalOptions::default()
			},
		);
		let display = controller.display();
		if !display.is_valid() {
			bail!("{}", display.error_message().unwrap_or(display.text()));
		}
		println!("{}", display.text());
		return Ok(());
	}

	Repl::new(controller, jobs, clipboard).run().await
}

/// Installs the global subscriber.
///
/// `CALCPP_LOG_DIR` redirects logs to a per-process file; otherwise they go
/// to stderr. `RUST_LOG` overrides the default filter.
fn setup_tracing(verbose: bool) {
	use std::fs::OpenOptions;

	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = || {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| {
			if verbose {
				EnvFilter::new("calcpp=debug,info")
			} else {
				EnvFilter::new("calcpp=info,warn")
			}
		})
	};

	if let Some(log_dir) = std::env::var("CALCPP_LOG_DIR").ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("calcpp.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry().with(filter()).with(file_layer).init();
			info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::fmt()
		.with_env_filter(filter())
		.with_writer(std::io::stderr)
		.init();
}
