use std::time::Duration;

use calcpp_editor::{CalculatorConfig, EvalOptions, HistoryAction};
use calcpp_engine::{ArithmeticEngine, Engine, EngineConfig};
use calcpp_primitives::{OperationKind, Selection};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::Harness;

#[test]
fn clear_from_non_empty_appends_one_blank_snapshot() {
	let mut h = Harness::new();
	h.type_tokens(&["8"]);
	h.settle();
	let len = h.history_len();

	h.controller.clear();
	assert_eq!(h.editor_text(), "");
	assert_eq!(h.display_text(), "");
	assert_eq!(h.history_len(), len + 1);

	h.controller.clear();
	assert_eq!(h.history_len(), len + 1, "clearing a blank state records nothing");
}

#[test]
fn clear_supersedes_pending_job() {
	let mut h = Harness::new();
	h.type_tokens(&["3"]);
	h.controller.clear();
	h.settle();

	assert_eq!(h.display_text(), "");
	assert_eq!(h.engine.call_count(), 0);
}

#[test]
fn failure_keeps_previous_result_greyed() {
	let mut h = Harness::new();
	h.type_tokens(&["1"]);
	h.settle();
	h.type_tokens(&["/"]);
	h.settle();

	let display = h.controller.display();
	assert_eq!(display.text(), "1");
	assert!(!display.is_valid());
	assert_eq!(display.generic_result(), None);
	assert!(display.error_message().is_some());
}

#[test]
fn domain_error_carries_engine_message() {
	let mut h = Harness::new();
	h.controller.do_text_operation(|editor| editor.set_text("1/0"));
	h.settle();

	let display = h.controller.display();
	assert!(!display.is_valid());
	assert_eq!(display.text(), "Syntax error");
	assert!(display.error_message().is_some_and(|message| message.contains("zero")));
}

#[test]
fn empty_expression_blanks_display_without_engine() {
	let mut h = Harness::new();
	h.controller.evaluate_as(OperationKind::Simplify);

	let display = h.controller.display();
	assert_eq!(display.text(), "");
	assert!(display.is_valid());
	assert_eq!(display.operation_kind(), OperationKind::Simplify);
	assert_eq!(h.engine.call_count(), 0);
}

#[test]
fn unchanged_text_does_not_evaluate_unless_forced() {
	let mut h = Harness::new();
	h.controller.do_text_operation(|editor| editor.set_cursor(0));
	assert_eq!(h.timer.pending(), 0);
	assert_eq!(h.history_len(), 1);

	h.controller.do_text_operation_with(
		|_| {},
		EvalOptions {
			force_eval: true,
			..EvalOptions::default()
		},
	);
	assert_eq!(h.timer.pending(), 1);
	assert_eq!(h.history_len(), 2);
}

#[test]
fn caret_moves_are_clamped() {
	let mut h = Harness::new();
	h.type_tokens(&["1", "2"]);

	h.controller.move_cursor_right();
	assert_eq!(h.controller.editor().selection(), Selection::point(2));

	h.controller.set_cursor_on_start();
	h.controller.move_cursor_left();
	assert_eq!(h.controller.editor().selection(), Selection::point(0));

	h.controller.move_cursor_right();
	assert_eq!(h.controller.editor().selection(), Selection::point(1));
	h.controller.set_cursor_on_end();
	assert_eq!(h.controller.editor().selection(), Selection::point(2));
}

#[test]
fn debounce_waits_for_configured_delay() {
	let config = CalculatorConfig {
		eval_delay_ms: 50,
		..CalculatorConfig::default()
	};
	let mut h = Harness::with_config(config);
	h.type_tokens(&["5"]);

	assert_eq!(h.advance(Duration::from_millis(49)), 0);
	h.type_tokens(&["0"]);
	assert_eq!(h.advance(Duration::from_millis(1)), 1, "first job fires but is stale");
	assert_eq!(h.display_text(), "");
	assert_eq!(h.advance(Duration::from_millis(49)), 1);
	assert_eq!(h.display_text(), "50");
	assert_eq!(h.engine.expressions(), vec!["50".to_string()]);
}

#[test]
fn detach_drops_pending_job() {
	let mut h = Harness::new();
	h.type_tokens(&["6"]);
	h.controller.detach();
	h.settle();
	assert_eq!(h.display_text(), "");
	assert!(!h.controller.coordinator().has_pending());
}

#[test]
fn engine_config_change_rerenders_in_place() {
	let mut h = Harness::new();
	h.controller.do_text_operation(|editor| editor.set_text("1/3"));
	h.settle();
	assert_eq!(h.display_text(), "0.3333333333");
	let len = h.history_len();

	h.controller.on_engine_config_changed(EngineConfig {
		precision: 3,
		..EngineConfig::default()
	});

	assert_eq!(h.display_text(), "0.333");
	assert_eq!(h.history_len(), len);
	let history = h.history.lock();
	assert_eq!(history.current().map(|s| s.state.display.text.as_str()), Some("0.333"));
}

#[test]
fn undo_redo_on_fresh_history_is_ignored() {
	let mut h = Harness::new();
	assert!(!h.controller.do_history_action(HistoryAction::Undo));
	assert!(!h.controller.do_history_action(HistoryAction::Redo));
	assert_eq!(h.history_len(), 1);
}

fn token() -> impl Strategy<Value = &'static str> {
	prop::sample::select(vec!["1", "2", "7", "+", "-", "*", "/", "(", ")", ".", "sqrt", "pi", ","])
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn quiescent_display_matches_engine(bursts in prop::collection::vec(prop::collection::vec(token(), 1..5), 1..6)) {
		let mut h = Harness::new();
		let reference = ArithmeticEngine::default();
		for burst in &bursts {
			let redraws = h.view.display_redraws();
			h.type_tokens(burst);
			h.settle();
			prop_assert!(h.view.display_redraws() - redraws <= 1, "at most one render per burst");
		}

		let text = h.editor_text();
		let display = h.controller.display();
		if text.is_empty() {
			prop_assert_eq!(display.text(), "");
		} else {
			match reference.evaluate(OperationKind::Numeric, &text) {
				Ok(result) => {
					prop_assert!(display.is_valid());
					prop_assert_eq!(display.text(), result.text.as_str());
				}
				Err(error) => {
					prop_assert!(!display.is_valid());
					let expected = error.localized_message();
					prop_assert_eq!(display.error_message(), Some(expected.as_str()));
				}
			}
		}
		prop_assert!(!h.controller.coordinator().has_pending());
	}

	#[test]
	fn undo_then_redo_is_identity(tokens in prop::collection::vec(token(), 2..8)) {
		let mut h = Harness::new();
		for token in &tokens {
			h.type_tokens(&[*token]);
			h.settle();
		}
		let before = h.controller.current_history_state();
		if h.controller.do_history_action(HistoryAction::Undo) {
			prop_assert!(h.controller.do_history_action(HistoryAction::Redo));
			prop_assert_eq!(h.controller.current_history_state(), before);
		}
	}
}
