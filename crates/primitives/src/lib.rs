//! Core value types for the calculator: caret selections, operation kinds,
//! editor and display state, and identifiers.

/// Snapshot and message identifiers.
pub mod ids;
/// Engine operation kinds.
pub mod operation;
/// Caret and selection types for the expression editor.
pub mod selection;
/// Plain editor and display state values.
pub mod state;

pub use ids::{MessageId, SnapshotId};
pub use operation::OperationKind;
pub use selection::{CharIdx, Selection};
pub use state::{DisplayState, EditorState, GenericResult};
