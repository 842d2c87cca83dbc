use calcpp_primitives::{DisplayState, EditorState, OperationKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{DEFAULT_HISTORY_LIMIT, HistoryAction, HistoryError, HistoryState, HistoryStore};

fn state(text: &str, result: &str) -> HistoryState {
	HistoryState::new(
		EditorState::at_end(text),
		DisplayState::success(result, OperationKind::Numeric, None),
	)
}

#[test]
fn append_moves_cursor_to_new_snapshot() {
	let mut store = HistoryStore::new();
	assert!(store.current().is_none());
	assert!(!store.can_undo());

	let first = store.append(state("1", "1"));
	let second = store.append(state("12", "12"));
	assert_eq!(store.len(), 2);
	assert_eq!(store.current().map(|s| s.id), Some(second));
	assert_eq!(store.last().map(|s| s.id), Some(second));
	assert_ne!(first, second);
	assert!(store.can_undo());
	assert!(!store.can_redo());
}

#[test]
fn undo_redo_walks_the_timeline() {
	let mut store = HistoryStore::new();
	store.append(state("1", "1"));
	store.append(state("1+", "1"));
	store.append(state("1+2", "3"));

	assert_eq!(store.undo().map(|s| s.state.editor.text.clone()), Ok("1+".to_string()));
	assert_eq!(store.undo().map(|s| s.state.editor.text.clone()), Ok("1".to_string()));
	assert_eq!(store.undo().err(), Some(HistoryError::NoHistory(HistoryAction::Undo)));
	assert_eq!(store.redo().map(|s| s.state.editor.text.clone()), Ok("1+".to_string()));
	assert_eq!(store.cursor(), Some(1));
	assert_eq!(store.len(), 3);
}

#[test]
fn append_after_undo_truncates_redo_tail() {
	let mut store = HistoryStore::new();
	store.append(state("1", "1"));
	let dropped = store.append(state("2", "2"));
	store.undo().expect("undo");

	let replacement = store.append(state("3", "3"));
	assert_eq!(store.len(), 2);
	assert!(store.get(dropped).is_none());
	assert_eq!(store.current().map(|s| s.id), Some(replacement));
	assert!(!store.can_redo());
}

#[test]
fn empty_store_has_no_history() {
	let mut store = HistoryStore::new();
	assert_eq!(store.do_action(HistoryAction::Undo), Err(HistoryError::NoHistory(HistoryAction::Undo)));
	assert_eq!(store.do_action(HistoryAction::Redo), Err(HistoryError::NoHistory(HistoryAction::Redo)));
	assert!(!store.is_action_available(HistoryAction::Redo));
}

#[test]
fn patch_display_keeps_identity_and_editor_state() {
	let mut store = HistoryStore::new();
	let id = store.append(state("5+5", ""));
	store.append(state("5+5*", ""));
	let before = store.get(id).cloned().expect("snapshot");

	assert!(store.patch_display(id, DisplayState::success("10", OperationKind::Numeric, None)));

	let after = store.get(id).expect("snapshot");
	assert_eq!(after.id, before.id);
	assert_eq!(after.timestamp, before.timestamp);
	assert_eq!(after.state.editor, before.state.editor);
	assert_eq!(after.state.display.text, "10");
}

#[test]
fn patch_display_of_evicted_snapshot_is_ignored() {
	let mut store = HistoryStore::with_limit(2);
	let evicted = store.append(state("1", "1"));
	store.append(state("2", "2"));
	store.append(state("3", "3"));

	assert_eq!(store.len(), 2);
	assert!(!store.patch_display(evicted, DisplayState::default()));
}

#[test]
fn limit_evicts_oldest_and_keeps_cursor_on_last() {
	let mut store = HistoryStore::new();
	for i in 0..DEFAULT_HISTORY_LIMIT + 10 {
		store.append(state(&i.to_string(), &i.to_string()));
	}
	assert_eq!(store.len(), DEFAULT_HISTORY_LIMIT);
	assert_eq!(store.cursor(), Some(DEFAULT_HISTORY_LIMIT - 1));
	assert_eq!(store.iter().next().map(|s| s.state.editor.text.as_str()), Some("10"));
}

#[derive(Debug, Clone)]
enum Op {
	Append(u8),
	Undo,
	Redo,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		3 => any::<u8>().prop_map(Op::Append),
		1 => Just(Op::Undo),
		1 => Just(Op::Redo),
	]
}

proptest! {
	#[test]
	fn append_never_rewrites_earlier_snapshots(ops in prop::collection::vec(op(), 1..60)) {
		let mut store = HistoryStore::new();
		for op in ops {
			match op {
				Op::Append(n) => {
					let kept: Vec<_> = match store.cursor() {
						Some(cursor) => store.iter().take(cursor + 1).cloned().collect(),
						None => Vec::new(),
					};
					store.append(state(&n.to_string(), ""));
					let prefix: Vec<_> = store.iter().take(kept.len()).cloned().collect();
					prop_assert_eq!(prefix, kept);
					prop_assert_eq!(store.cursor(), Some(store.len() - 1));
				}
				Op::Undo => { let _ = store.undo(); }
				Op::Redo => { let _ = store.redo(); }
			}
		}
	}

	#[test]
	fn undo_then_redo_restores_current(texts in prop::collection::vec("[0-9+*]{0,6}", 2..20)) {
		let mut store = HistoryStore::new();
		for text in &texts {
			store.append(state(text, text));
		}
		let current = store.current().cloned();
		store.undo().expect("undo");
		let restored = store.redo().cloned().expect("redo");
		prop_assert_eq!(Some(restored), current);
	}
}
