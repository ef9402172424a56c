//! Person record domain model.
//!
//! # Responsibility
//! - Define the canonical record managed by the store.
//! - Define the draft shape edited through the form, and the typed field
//!   patches the form emits.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - A `Record` reaches the store only through a validated draft; direct
//!   construction is reserved for seed data and tests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every record in the collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;

/// Canonical person record displayed as one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable opaque ID used for row identity and mutation targeting.
    pub id: RecordId,
    /// Display name: 1-20 Latin/Cyrillic letters or hyphens.
    pub name: String,
    /// Age in whole years, within `[0, 100]`.
    pub age: u8,
    /// Birth date; never later than "today" at validation time.
    pub birth_date: NaiveDate,
}

impl Record {
    /// Creates a record with a generated stable ID.
    ///
    /// Does not validate field contents; the store validates every draft
    /// before a record enters the collection.
    pub fn new(name: impl Into<String>, age: u8, birth_date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4(), name, age, birth_date)
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by seed data and tests where identity must be deterministic.
    pub fn with_id(id: RecordId, name: impl Into<String>, age: u8, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            birth_date,
        }
    }

    /// Builds a record from a draft under a caller-chosen ID.
    ///
    /// Returns `None` when the draft is missing a field or the age does not
    /// fit the record type. Callers validate the draft first, so `None` here
    /// signals a caller bug rather than user input to report.
    pub fn from_draft(id: RecordId, draft: &RecordDraft) -> Option<Self> {
        let age = u8::try_from(draft.age?).ok()?;
        Some(Self {
            id,
            name: draft.name.trim().to_string(),
            age,
            birth_date: draft.birth_date?,
        })
    }
}

/// Field keys for per-field error reporting and data-column sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordField {
    Name,
    Age,
    BirthDate,
}

impl RecordField {
    /// Stable lowercase field name used in error output and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::BirthDate => "birth_date",
        }
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress candidate record edited through the form.
///
/// Fields stay optional/raw so the draft can hold partial or invalid input
/// while the form is open; validation decides what may be committed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Raw name text; trimmed at entry by [`RecordDraft::apply`].
    pub name: String,
    /// Age input; wide integer type so out-of-range input stays reportable.
    pub age: Option<i64>,
    /// Birth date input.
    pub birth_date: Option<NaiveDate>,
}

impl RecordDraft {
    /// Builds the draft/baseline pair source for editing an existing record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            age: Some(i64::from(record.age)),
            birth_date: Some(record.birth_date),
        }
    }

    /// Applies one typed field patch in place.
    ///
    /// Name values are trimmed here so dirtiness comparison against the
    /// baseline is whitespace-insensitive, matching form input handling.
    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.name = value.trim().to_string(),
            FieldEdit::Age(value) => self.age = value,
            FieldEdit::BirthDate(value) => self.birth_date = value,
        }
    }

    /// Returns whether every field holds a non-empty value.
    ///
    /// Used as the dirtiness rule for create mode: a new record with any
    /// empty field has no meaningful baseline to diff against.
    pub fn is_fully_populated(&self) -> bool {
        !self.name.trim().is_empty() && self.age.is_some() && self.birth_date.is_some()
    }
}

/// Typed single-field patch emitted by the form surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldEdit {
    Name(String),
    Age(Option<i64>),
    BirthDate(Option<NaiveDate>),
}

impl FieldEdit {
    /// Field key targeted by this patch.
    pub fn field(&self) -> RecordField {
        match self {
            Self::Name(_) => RecordField::Name,
            Self::Age(_) => RecordField::Age,
            Self::BirthDate(_) => RecordField::BirthDate,
        }
    }
}

/// Built-in demo dataset used by the CLI probe and tests.
pub fn sample_records() -> Vec<Record> {
    [
        ("Mike", 32, (1990, 10, 22)),
        ("John", 42, (1996, 7, 1)),
        ("Bob", 89, (2010, 8, 10)),
        ("Mari", 9, (1989, 8, 10)),
    ]
    .into_iter()
    .map(|(name, age, (year, month, day))| {
        let birth_date = NaiveDate::from_ymd_opt(year, month, day).expect("valid seed birth date");
        Record::new(name, age, birth_date)
    })
    .collect()
}
