//! Thin controller wiring display-surface events to core state.
//!
//! # Responsibility
//! - Dispatch inbound events (search, sort, form, delete) to the session,
//!   store and filter layers.
//! - Derive the complete render projection on demand.
//!
//! # Invariants
//! - The controller is the only writer of the current store value; events
//!   run to completion one at a time.
//! - The view is recomputed per call and never cached across mutations.

use crate::model::record::{FieldEdit, Record, RecordDraft, RecordField, RecordId};
use crate::model::validate::ValidationReport;
use crate::search::filter::{filter_records, sort_records, SortDirection, SortSpec};
use crate::session::edit_session::{EditSession, SessionResult};
use crate::store::record_store::{RecordStore, StoreError, StoreResult};
use log::info;

/// Render-ready projection of the current core state.
///
/// Everything the display surface needs for one frame: table rows, form
/// draft, inline errors and control flags.
#[derive(Debug, Clone)]
pub struct TableView {
    /// Filtered, optionally sorted rows.
    pub rows: Vec<Record>,
    /// Working form draft, `None` while no form is open.
    pub draft: Option<RecordDraft>,
    /// Per-field inline error messages for the open form.
    pub field_errors: ValidationReport,
    /// Whether the save control is enabled.
    pub can_save: bool,
    /// Whether the modal form is open.
    pub modal_open: bool,
}

/// Event facade over store, session and view derivation.
#[derive(Debug, Clone, Default)]
pub struct TableController {
    store: RecordStore,
    session: EditSession,
    search_term: String,
    sort: Option<SortSpec>,
}

impl TableController {
    /// Creates a controller over an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller over a pre-populated store.
    pub fn with_store(store: RecordStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    /// Current authoritative collection value.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Replaces the active search term; takes effect on the next `view()`.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Requests column ordering for subsequent views.
    pub fn sort(&mut self, field: RecordField, direction: SortDirection) {
        self.sort = Some(SortSpec { field, direction });
    }

    /// Restores collection order for subsequent views.
    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Opens the form for a new record.
    pub fn open_for_create(&mut self) {
        self.session.open_for_create();
    }

    /// Opens the form over the record with this id.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when the id is stale; the session is left
    ///   unchanged and the caller may surface a non-fatal notice.
    pub fn open_for_edit(&mut self, id: RecordId) -> StoreResult<()> {
        let Some(record) = self.store.get(id) else {
            info!("event=edit_open_skipped module=controller status=not_found id={id}");
            return Err(StoreError::NotFound(id));
        };
        self.session.open_for_edit(record);
        Ok(())
    }

    /// Forwards one form field change to the session draft.
    pub fn update_field(&mut self, edit: FieldEdit) {
        self.session.update_field(edit);
    }

    /// Commits the open form and swaps in the new collection value.
    ///
    /// The display surface keeps the save control disabled while
    /// `TableView::can_save` is false, so an error here indicates a caller
    /// bug rather than user input to report.
    pub fn save(&mut self) -> SessionResult<Record> {
        let (next, record) = self.session.commit(&self.store)?;
        self.store = next;
        Ok(record)
    }

    /// Closes the open form and discards its draft.
    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Deletes the record with this id; a stale id is an idempotent no-op.
    pub fn delete(&mut self, id: RecordId) {
        self.store = self.store.delete(id);
    }

    /// Derives the current render projection: rows filtered by the search
    /// term, then sorted when a column order is active, plus form state.
    pub fn view(&self) -> TableView {
        let filtered = filter_records(self.store.records(), &self.search_term);
        let rows = match self.sort {
            Some(spec) => sort_records(&filtered, spec.field, spec.direction),
            None => filtered,
        };

        TableView {
            rows,
            draft: self.session.draft().cloned(),
            field_errors: self.session.validation(),
            can_save: self.session.can_save(),
            modal_open: self.session.is_open(),
        }
    }
}
