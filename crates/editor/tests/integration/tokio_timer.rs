use std::sync::Arc;
use std::time::Duration;

use calcpp_editor::{CalculatorConfig, Clipboard, Controller, ControllerPorts, HistoryStore, Launcher, LaunchRequest, Notifier};
use calcpp_engine::{ArithmeticEngine, MathTypeClassifier};
use calcpp_primitives::MessageId;
use calcpp_worker::TokioTimer;
use tokio::runtime::Handle;

use crate::common::RecordingView;

struct Silent;

impl Clipboard for Silent {
	fn write_text(&self, _: &str) {}
}

impl Notifier for Silent {
	fn toast(&self, _: MessageId) {}
}

impl Launcher for Silent {
	fn launch(&self, _: LaunchRequest) {}
}

#[tokio::test(start_paused = true)]
async fn tokio_timer_delivers_only_the_latest_job() {
	let config = CalculatorConfig {
		eval_delay_ms: 30,
		..CalculatorConfig::default()
	};
	let (timer, mut rx) = TokioTimer::channel(Handle::current());
	let view = Arc::new(RecordingView::default());
	let ports = ControllerPorts {
		engine: Arc::new(ArithmeticEngine::default()),
		classifier: Arc::new(MathTypeClassifier),
		timer: Arc::new(timer),
		clipboard: Arc::new(Silent),
		notifier: Arc::new(Silent),
		launcher: Arc::new(Silent),
		view: view.clone(),
	};
	let history = HistoryStore::new().into_shared();
	let mut controller = Controller::new(ports, history.clone(), &config);
	controller.attach();

	controller.process_digit_button("4");
	tokio::time::sleep(Duration::from_millis(10)).await;
	controller.process_digit_button("2");

	while controller.coordinator().has_pending() {
		let job = rx.recv().await.expect("timer channel open");
		controller.run_job(job);
	}

	assert_eq!(controller.display().text(), "42");
	assert_eq!(view.display_redraws(), 2, "initial draw plus one result");
	assert_eq!(history.lock().last().map(|s| s.state.display.text.clone()), Some("42".to_string()));
}
