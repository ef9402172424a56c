//! Edit-session state machine for the record form.
//!
//! # Responsibility
//! - Track which record (if any) is being edited and the working draft.
//! - Gate the save action on the draft being both valid and dirty.
//!
//! # Invariants
//! - At most one draft exists at a time; it is discarded on cancel and on
//!   successful commit.
//! - `can_save()` is derived on demand from (draft, baseline, validation)
//!   and never stored, so it cannot go stale.
//! - `commit` mutates the store only while the save gate is open.

use crate::model::record::{FieldEdit, Record, RecordDraft, RecordId};
use crate::model::validate::{validate_draft_now, ValidationReport};
use crate::store::record_store::{RecordStore, StoreError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Edit-session failure.
#[derive(Debug)]
pub enum SessionError {
    /// `commit` was called while the save gate is closed. The display
    /// surface disables the save control in that state, so reaching this
    /// is a caller bug, not a user-facing failure.
    SaveNotAllowed,
    /// Store-level failure while committing.
    Store(StoreError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SaveNotAllowed => write!(f, "commit attempted while saving is not allowed"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SaveNotAllowed => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Which form the session currently serves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No form open, no draft held.
    #[default]
    Closed,
    /// Creating a record from an initially empty draft.
    CreatingNew,
    /// Editing the record with this id; the baseline is its field values.
    EditingExisting(RecordId),
}

/// Form edit session: state, working draft and dirtiness baseline.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: SessionState,
    draft: RecordDraft,
    baseline: RecordDraft,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns whether a form is currently open.
    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    /// Working draft while a form is open, `None` otherwise.
    pub fn draft(&self) -> Option<&RecordDraft> {
        self.is_open().then_some(&self.draft)
    }

    /// Opens the form for a new record with an empty draft.
    pub fn open_for_create(&mut self) {
        self.state = SessionState::CreatingNew;
        self.draft = RecordDraft::default();
        self.baseline = RecordDraft::default();
    }

    /// Opens the form over an existing record; the record's field values
    /// become both the working draft and the dirtiness baseline.
    pub fn open_for_edit(&mut self, record: &Record) {
        let draft = RecordDraft::from_record(record);
        self.state = SessionState::EditingExisting(record.id);
        self.baseline = draft.clone();
        self.draft = draft;
    }

    /// Applies one field patch to the working draft.
    ///
    /// Ignored with a warning when no form is open; the display surface
    /// should not emit field events outside a form.
    pub fn update_field(&mut self, edit: FieldEdit) {
        if !self.is_open() {
            warn!(
                "event=field_edit_ignored module=session status=rejected field={} reason=session_closed",
                edit.field()
            );
            return;
        }
        self.draft.apply(edit);
    }

    /// Per-field errors for the current draft; empty when no form is open.
    pub fn validation(&self) -> ValidationReport {
        if !self.is_open() {
            return ValidationReport::default();
        }
        validate_draft_now(&self.draft)
    }

    /// Returns whether the draft meaningfully differs from its baseline.
    ///
    /// Create mode has no baseline to diff against, so the draft counts as
    /// dirty once every field holds a value; edit mode compares against the
    /// opened record's fields.
    pub fn is_dirty(&self) -> bool {
        match self.state {
            SessionState::Closed => false,
            SessionState::CreatingNew => self.draft.is_fully_populated(),
            SessionState::EditingExisting(_) => self.draft != self.baseline,
        }
    }

    /// Save gate: the draft validates cleanly and is dirty.
    ///
    /// Recomputed from scratch on every call; the controller mirrors this
    /// into the view after each event.
    pub fn can_save(&self) -> bool {
        self.is_open() && self.is_dirty() && self.validation().is_valid()
    }

    /// Commits the draft against `store`, producing the next store value and
    /// the created/updated record, and closes the form.
    ///
    /// # Contract
    /// - Legal only while `can_save()` holds; otherwise the session is left
    ///   untouched and `SessionError::SaveNotAllowed` is returned.
    /// - Create mode appends under a fresh id; edit mode replaces the record
    ///   opened by `open_for_edit`.
    pub fn commit(&mut self, store: &RecordStore) -> SessionResult<(RecordStore, Record)> {
        if !self.can_save() {
            warn!("event=commit_rejected module=session status=rejected reason=save_gate_closed");
            return Err(SessionError::SaveNotAllowed);
        }

        let (next, record) = match self.state {
            SessionState::CreatingNew => store.create(&self.draft)?,
            SessionState::EditingExisting(id) => store.update(id, &self.draft)?,
            // Unreachable behind can_save, which requires an open form.
            SessionState::Closed => return Err(SessionError::SaveNotAllowed),
        };

        info!(
            "event=draft_committed module=session status=ok id={}",
            record.id
        );
        self.close();
        Ok((next, record))
    }

    /// Closes the form and discards the draft without touching the store.
    pub fn cancel(&mut self) {
        if self.is_open() {
            info!("event=session_cancelled module=session status=ok");
        }
        self.close();
    }

    fn close(&mut self) {
        self.state = SessionState::Closed;
        self.draft = RecordDraft::default();
        self.baseline = RecordDraft::default();
    }
}
