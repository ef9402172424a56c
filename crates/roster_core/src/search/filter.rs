//! In-memory table filtering and column sorting.
//!
//! # Responsibility
//! - Derive the displayed row subset from the full collection and the
//!   current search term.
//! - Provide stable column ordering on request.
//!
//! # Invariants
//! - Filtering preserves collection order and never mutates the input.
//! - A blank term matches every record.
//! - Matching is a full rescan per call. Acceptable for the small
//!   collections this core manages; a scaling limit, not a defect.

use crate::model::record::{Record, RecordField};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort order requested for one data column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One column-sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: RecordField,
    pub direction: SortDirection,
}

/// Returns the order-preserving subsequence of records matching `term`.
///
/// A record matches when at least one of its stringified field values
/// (id, name, age, ISO birth date) contains the lowercased term as a
/// substring. A blank term matches everything.
pub fn filter_records(records: &[Record], term: &str) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .cloned()
        .collect()
}

/// Returns the records reordered by one column, leaving the input intact.
///
/// The sort is stable: records comparing equal keep their original relative
/// order. Descending order reverses the comparison, not the result, so ties
/// stay stable in both directions.
pub fn sort_records(records: &[Record], field: RecordField, direction: SortDirection) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, field);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn matches_term(record: &Record, needle: &str) -> bool {
    searchable_values(record)
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

/// Stringified field values a record is matched against.
///
/// The opaque id participates on purpose: it is a visible row value on the
/// display surface like every other column.
fn searchable_values(record: &Record) -> [String; 4] {
    [
        record.id.to_string(),
        record.birth_date.format("%Y-%m-%d").to_string(),
        record.name.clone(),
        record.age.to_string(),
    ]
}

fn compare_by_field(a: &Record, b: &Record, field: RecordField) -> Ordering {
    match field {
        RecordField::BirthDate => a.birth_date.cmp(&b.birth_date),
        // Unicode lowercasing covers the Latin/Cyrillic alphabet the
        // validator admits; no locale collation tables needed.
        RecordField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        RecordField::Age => a.age.cmp(&b.age),
    }
}
