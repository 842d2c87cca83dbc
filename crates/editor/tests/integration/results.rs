use calcpp_editor::{ControllerError, DisplayAction, LaunchRequest, MenuItem};
use calcpp_primitives::MessageId;
use pretty_assertions::assert_eq;

use crate::common::Harness;

fn evaluated(text: &str) -> Harness {
	let mut h = Harness::new();
	h.controller.do_text_operation(|editor| editor.set_text(text));
	h.settle();
	h
}

#[test]
fn copy_result_writes_clipboard_and_confirms() {
	let h = evaluated("2+2");
	assert!(h.controller.copy_result());
	assert_eq!(*h.clipboard.texts.lock(), vec!["4".to_string()]);
	assert_eq!(*h.notifier.toasts.lock(), vec![MessageId::ResultCopied]);
}

#[test]
fn copy_result_ignores_invalid_or_empty_display() {
	let h = Harness::new();
	assert!(!h.controller.copy_result());

	let h = evaluated("2+");
	assert!(!h.controller.copy_result());
	assert!(h.clipboard.texts.lock().is_empty());
	assert!(h.notifier.toasts.lock().is_empty());
}

#[test]
fn create_var_launches_with_plain_value() {
	let h = evaluated("6*7");
	assert_eq!(h.controller.create_var(), Ok(()));
	assert_eq!(*h.launcher.requests.lock(), vec![LaunchRequest::CreateVar { value: "42".into() }]);
}

#[test]
fn create_var_rejections_toast_without_state_change() {
	let h = Harness::new();
	assert_eq!(h.controller.create_var(), Err(ControllerError::EmptyResultForVarCreate));

	let h = evaluated("1+");
	let before = h.controller.current_history_state();
	assert_eq!(h.controller.create_var(), Err(ControllerError::InvalidResultForVarCreate));
	assert_eq!(h.controller.current_history_state(), before);

	let mut h = evaluated("x*2");
	h.controller.simplify();
	assert!(h.controller.display().is_valid());
	assert_eq!(h.controller.create_var(), Err(ControllerError::InvalidResultForVarCreate));
	assert_eq!(*h.notifier.toasts.lock(), vec![MessageId::NotValidResult]);
	assert!(h.launcher.requests.lock().is_empty());
}

#[test]
fn plot_requires_single_free_variable() {
	let mut h = evaluated("x*2");
	h.controller.simplify();
	assert_eq!(h.controller.plot_graph(), Ok(()));
	let requests = h.launcher.requests.lock();
	assert!(matches!(requests.as_slice(), [LaunchRequest::PlotGraph { variable, .. }] if variable == "x"));
	drop(requests);

	let h = evaluated("3");
	assert_eq!(h.controller.plot_graph(), Err(ControllerError::InvalidResultForPlot));
	assert_eq!(*h.notifier.toasts.lock(), vec![MessageId::NotValidResult]);
}

#[test]
fn display_click_offers_applicable_items() {
	let h = evaluated("3");
	assert_eq!(h.controller.on_display_clicked(), DisplayAction::Menu(vec![MenuItem::Copy, MenuItem::ConvertToVar]));

	let mut h = evaluated("x*2");
	h.controller.simplify();
	assert_eq!(h.controller.on_display_clicked(), DisplayAction::Menu(vec![MenuItem::Copy, MenuItem::Plot]));

	assert_eq!(Harness::new().controller.on_display_clicked(), DisplayAction::None);
}

#[test]
fn display_click_on_error_shows_message() {
	let h = evaluated("1/0");
	let DisplayAction::ShowError(message) = h.controller.on_display_clicked() else {
		panic!("expected error dialog");
	};
	assert!(message.contains("zero"));
}

#[test]
fn menu_items_dispatch_to_actions() {
	let h = evaluated("5");
	assert_eq!(h.controller.select_menu_item(MenuItem::Copy), Ok(()));
	assert_eq!(h.controller.select_menu_item(MenuItem::ConvertToVar), Ok(()));
	assert_eq!(*h.clipboard.texts.lock(), vec!["5".to_string()]);
	assert_eq!(*h.launcher.requests.lock(), vec![LaunchRequest::CreateVar { value: "5".into() }]);
}

#[test]
fn launch_forwards_screen_requests() {
	let h = Harness::new();
	h.controller.launch(LaunchRequest::ShowSettings);
	assert_eq!(*h.launcher.requests.lock(), vec![LaunchRequest::ShowSettings]);
}
