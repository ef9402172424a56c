//! Core record-management logic for Roster.
//! This crate is the single source of truth for business invariants.

pub mod controller;
pub mod logging;
pub mod model;
pub mod search;
pub mod session;
pub mod store;

pub use controller::{TableController, TableView};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    sample_records, FieldEdit, Record, RecordDraft, RecordField, RecordId,
};
pub use model::validate::{validate_draft, validate_draft_now, ValidationReport};
pub use search::filter::{filter_records, sort_records, SortDirection, SortSpec};
pub use session::edit_session::{EditSession, SessionError, SessionResult, SessionState};
pub use store::record_store::{RecordStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
