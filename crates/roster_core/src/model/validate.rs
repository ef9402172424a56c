//! Draft validation rules.
//!
//! # Responsibility
//! - Check a candidate draft field-by-field against domain rules.
//! - Produce an ordered per-field error report for inline form display.
//!
//! # Invariants
//! - Rules apply independently per field; the first failing rule wins, so at
//!   most one message is reported per field.
//! - `validate_draft` is pure: the reference date is an explicit argument.

use crate::model::record::{RecordDraft, RecordField};
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

const NAME_MAX_CHARS: usize = 20;
const AGE_RANGE: std::ops::RangeInclusive<i64> = 0..=100;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-zА-Яа-яЁё-]+$").expect("valid name regex"));

/// Per-field validation outcome.
///
/// Field order is stable so rendered error lists do not jump around between
/// recomputations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<RecordField, Vec<String>>,
}

impl ValidationReport {
    /// Returns whether every field's error list is empty.
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Ordered error messages for one field; empty when the field is clean.
    pub fn errors_for(&self, field: RecordField) -> &[String] {
        self.errors.get(&field).map_or(&[], Vec::as_slice)
    }

    fn push(&mut self, field: RecordField, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        if first {
            write!(f, "no validation errors")?;
        }
        Ok(())
    }
}

/// Validates a draft against the domain rules using `today` as the upper
/// bound for the birth date.
///
/// # Contract
/// - name: trimmed; required, at most 20 characters, Latin/Cyrillic letters
///   and hyphens only.
/// - age: required integer within `[0, 100]`.
/// - birth_date: required, not later than `today`.
/// - A draft is committable iff the returned report `is_valid()`.
pub fn validate_draft(draft: &RecordDraft, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = draft.name.trim();
    if name.is_empty() {
        report.push(RecordField::Name, "name is required");
    } else if name.chars().count() > NAME_MAX_CHARS {
        report.push(RecordField::Name, "name must be at most 20 characters");
    } else if !NAME_RE.is_match(name) {
        report.push(RecordField::Name, "name may contain only letters and hyphens");
    }

    match draft.age {
        None => report.push(RecordField::Age, "age is required"),
        Some(age) if !AGE_RANGE.contains(&age) => {
            report.push(RecordField::Age, "age must be between 0 and 100");
        }
        Some(_) => {}
    }

    match draft.birth_date {
        None => report.push(RecordField::BirthDate, "birth date is required"),
        Some(date) if date > today => {
            report.push(RecordField::BirthDate, "birth date cannot be in the future");
        }
        Some(_) => {}
    }

    report
}

/// Validates a draft against the current local date.
pub fn validate_draft_now(draft: &RecordDraft) -> ValidationReport {
    validate_draft(draft, Local::now().date_naive())
}
