//! Form edit-session layer.
//!
//! # Responsibility
//! - Track the open-form state machine and its working draft.
//! - Own the dirty/validity conjunction that gates the save action.

pub mod edit_session;
