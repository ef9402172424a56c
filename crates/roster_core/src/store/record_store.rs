//! In-memory record collection with immutable-update semantics.
//!
//! # Responsibility
//! - Own the canonical record collection.
//! - Expose create/update/delete as pure transformations producing a new
//!   collection value.
//!
//! # Invariants
//! - Write paths validate the draft before constructing a record.
//! - Record ids stay unique within one collection value.
//! - An existing store value is never modified by a mutation; callers swap
//!   in the returned value.

use crate::model::record::{Record, RecordDraft, RecordId};
use crate::model::validate::{validate_draft_now, ValidationReport};
use log::info;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store mutation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Draft fields failed domain validation.
    Validation(ValidationReport),
    /// No record carries the targeted id.
    NotFound(RecordId),
    /// Seed data carries the same id twice.
    DuplicateId(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(report) => write!(f, "{report}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl Error for StoreError {}

impl From<ValidationReport> for StoreError {
    fn from(value: ValidationReport) -> Self {
        Self::Validation(value)
    }
}

/// Authoritative in-memory record collection.
///
/// Mutations return a new `RecordStore` value; the receiver is left intact.
/// The collection is small by design, so whole-collection copies per
/// mutation are acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store over pre-built records, typically seed data.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when two records share an id.
    /// - `StoreError::Validation` when a record would not pass draft
    ///   validation; pre-built data gets no trust advantage over form input.
    pub fn from_records(records: Vec<Record>) -> StoreResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            let report = validate_draft_now(&RecordDraft::from_record(record));
            if !report.is_valid() {
                return Err(StoreError::Validation(report));
            }
        }
        Ok(Self { records })
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks up one record by id.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns whether a record with this id exists.
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validates the draft, assigns a fresh unique id and appends the new
    /// record, producing the next collection value.
    ///
    /// # Contract
    /// - The session layer already gates saves on validity; validation here
    ///   is defense in depth, not the primary gate.
    /// - The returned record's id is distinct from every existing id.
    pub fn create(&self, draft: &RecordDraft) -> StoreResult<(Self, Record)> {
        let record = self.record_from_draft(self.fresh_id(), draft)?;

        let mut records = self.records.clone();
        records.push(record.clone());
        info!(
            "event=record_created module=store status=ok id={} total={}",
            record.id,
            records.len()
        );
        Ok((Self { records }, record))
    }

    /// Replaces the record with the matching id by a new record carrying the
    /// same id and the draft's fields, producing the next collection value.
    pub fn update(&self, id: RecordId, draft: &RecordDraft) -> StoreResult<(Self, Record)> {
        if !self.contains(id) {
            return Err(StoreError::NotFound(id));
        }
        let updated = self.record_from_draft(id, draft)?;

        let records = self
            .records
            .iter()
            .map(|record| {
                if record.id == id {
                    updated.clone()
                } else {
                    record.clone()
                }
            })
            .collect();
        info!("event=record_updated module=store status=ok id={id}");
        Ok((Self { records }, updated))
    }

    /// Removes the record with the matching id, producing the next
    /// collection value. Removing an absent id is an idempotent no-op.
    pub fn delete(&self, id: RecordId) -> Self {
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|record| record.id != id)
            .cloned()
            .collect();

        if records.len() == self.records.len() {
            info!("event=record_delete_skipped module=store status=ok id={id}");
        } else {
            info!(
                "event=record_deleted module=store status=ok id={id} total={}",
                records.len()
            );
        }
        Self { records }
    }

    fn record_from_draft(&self, id: RecordId, draft: &RecordDraft) -> StoreResult<Record> {
        let report = validate_draft_now(draft);
        if !report.is_valid() {
            return Err(StoreError::Validation(report));
        }
        // A valid draft always converts; treat a failed conversion as the
        // validation failure it would have been.
        Record::from_draft(id, draft).ok_or(StoreError::Validation(report))
    }

    /// Generates an id not present in this collection.
    ///
    /// v4 collisions are improbable, but uniqueness is a store invariant, so
    /// it is checked rather than assumed from the generator.
    fn fresh_id(&self) -> RecordId {
        let mut id = Uuid::new_v4();
        while self.contains(id) {
            id = Uuid::new_v4();
        }
        id
    }
}
