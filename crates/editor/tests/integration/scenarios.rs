use calcpp_editor::{CalculatorConfig, HistoryAction, HistoryState, HistoryStore};
use calcpp_primitives::{DisplayState, EditorState, OperationKind, Selection};
use pretty_assertions::assert_eq;

use crate::common::Harness;

#[test]
fn inserted_digit_is_evaluated_after_the_tick() {
	let mut h = Harness::new();
	assert_eq!(h.history_len(), 1);

	h.controller.process_digit_button("7");
	assert_eq!(h.history_len(), 2, "delayed evaluation appends its snapshot up front");
	assert_eq!(h.display_text(), "");
	assert_eq!(h.engine.call_count(), 0);

	h.settle();
	let display = h.controller.display();
	assert_eq!(display.text(), "7");
	assert!(display.is_valid());
	assert_eq!(display.operation_kind(), OperationKind::Numeric);
	assert_eq!(h.history_len(), 2);

	let history = h.history.lock();
	let last = history.last().expect("snapshot");
	assert_eq!(last.state.editor.text, "7");
	assert_eq!(last.state.display.text, "7", "snapshot is back-patched");
}

#[test]
fn equals_on_malformed_input_shows_syntax_error() {
	let mut h = Harness::new();
	h.controller.do_text_operation(|editor| editor.set_text("1+"));
	h.controller.evaluate();

	let display = h.controller.display();
	assert_eq!(display.text(), "Syntax error");
	assert!(!display.is_valid());
	assert!(display.error_message().is_some_and(|message| !message.is_empty()));

	h.settle();
	assert_eq!(h.engine.call_count(), 1, "the superseded delayed job never reaches the engine");
	assert_eq!(h.display_text(), "Syntax error");
}

#[test]
fn localized_syntax_error_placeholder() {
	let mut config = CalculatorConfig::default();
	config.messages.syntax_error = Some("Erreur".into());
	let mut h = Harness::with_config(config);
	h.controller.process_digit_button_with("*", false);
	assert_eq!(h.display_text(), "Erreur");
}

#[test]
fn undo_and_redo_restore_snapshots() {
	let mut h = Harness::new();
	h.type_tokens(&["2", "*", "3"]);
	h.settle();
	h.controller.evaluate();
	assert_eq!(h.display_text(), "6");
	let evaluated = h.controller.current_history_state();

	assert!(h.controller.do_history_action(HistoryAction::Undo));
	assert_eq!(h.editor_text(), "2*3");
	assert_eq!(h.display_text(), "6");

	assert!(h.controller.do_history_action(HistoryAction::Redo));
	assert_eq!(h.controller.current_history_state(), evaluated);
	assert!(!h.controller.do_history_action(HistoryAction::Redo));
}

#[test]
fn function_button_places_caret_inside_parens() {
	let mut h = Harness::new();
	h.controller.process_digit_button("sin");
	assert_eq!(h.editor_text(), "sin()");
	assert_eq!(h.controller.editor().selection(), Selection::point(4));
}

#[test]
fn rapid_inserts_render_once() {
	let mut h = Harness::new();
	let redraws = h.view.display_redraws();

	h.type_tokens(&["1", "2"]);
	h.settle();

	assert_eq!(h.display_text(), "12");
	assert_eq!(h.engine.expressions(), vec!["12".to_string()]);
	assert_eq!(h.view.display_redraws(), redraws + 1);
}

#[test]
fn loading_unevaluated_snapshot_hydrates_it() {
	let mut store = HistoryStore::new();
	let id = store.append(HistoryState::new(EditorState::at_end("5+5"), DisplayState::default()));
	let h = Harness::with_history(store, CalculatorConfig::default());

	assert_eq!(h.editor_text(), "5+5");
	assert_eq!(h.display_text(), "10");
	assert_eq!(h.engine.call_count(), 1);
	assert_eq!(h.history_len(), 1, "hydration never appends");

	let history = h.history.lock();
	assert_eq!(history.get(id).map(|s| s.state.display.text.as_str()), Some("10"));
}

#[test]
fn undo_into_superseded_snapshot_hydrates_it() {
	let mut h = Harness::new();
	h.type_tokens(&["9", "+"]);
	h.settle();
	assert_eq!(h.engine.call_count(), 1);

	// "9" was superseded by "9+" before it ran, so its snapshot has no result.
	assert!(h.controller.do_history_action(HistoryAction::Undo));
	assert_eq!(h.editor_text(), "9");
	assert_eq!(h.display_text(), "9");
	assert_eq!(h.engine.call_count(), 2);

	let history = h.history.lock();
	assert_eq!(history.current().map(|s| s.state.display.text.as_str()), Some("9"));
}

#[test]
fn snapshot_with_result_is_not_reevaluated() {
	let mut h = Harness::new();
	h.type_tokens(&["4"]);
	h.settle();
	h.type_tokens(&["2"]);
	h.settle();
	let calls = h.engine.call_count();

	assert!(h.controller.do_history_action(HistoryAction::Undo));
	assert_eq!(h.display_text(), "4");
	assert_eq!(h.engine.call_count(), calls);
}
