use chrono::NaiveDate;
use roster_core::{
    sample_records, EditSession, FieldEdit, RecordStore, SessionError, SessionState, StoreError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seeded_store() -> RecordStore {
    RecordStore::from_records(sample_records()).unwrap()
}

fn fill_valid_draft(session: &mut EditSession) {
    session.update_field(FieldEdit::Name("Bob".to_string()));
    session.update_field(FieldEdit::Age(Some(30)));
    session.update_field(FieldEdit::BirthDate(Some(date(2000, 1, 1))));
}

#[test]
fn new_session_is_closed_with_no_draft() {
    let session = EditSession::new();

    assert_eq!(session.state(), SessionState::Closed);
    assert!(!session.is_open());
    assert!(session.draft().is_none());
    assert!(!session.is_dirty());
    assert!(!session.can_save());
    assert!(session.validation().is_valid());
}

#[test]
fn open_for_create_starts_from_an_empty_draft() {
    let mut session = EditSession::new();

    session.open_for_create();

    assert_eq!(session.state(), SessionState::CreatingNew);
    assert!(session.is_open());
    let draft = session.draft().unwrap();
    assert!(draft.name.is_empty());
    assert!(draft.age.is_none());
    assert!(draft.birth_date.is_none());
    assert!(!session.is_dirty());
    assert!(!session.can_save());
}

#[test]
fn create_draft_is_not_dirty_until_fully_populated() {
    let mut session = EditSession::new();
    session.open_for_create();

    session.update_field(FieldEdit::Name("Bob".to_string()));
    assert!(!session.is_dirty());

    session.update_field(FieldEdit::Age(Some(30)));
    assert!(!session.is_dirty());

    session.update_field(FieldEdit::BirthDate(Some(date(2000, 1, 1))));
    assert!(session.is_dirty());
    assert!(session.can_save());
}

#[test]
fn invalid_name_blocks_save_even_when_fully_populated() {
    let mut session = EditSession::new();
    session.open_for_create();
    fill_valid_draft(&mut session);
    session.update_field(FieldEdit::Name("Bob!".to_string()));

    assert!(session.is_dirty());
    assert!(!session.validation().is_valid());
    assert!(!session.can_save());
}

#[test]
fn open_for_edit_starts_clean_against_its_baseline() {
    let store = seeded_store();
    let mike = &store.records()[0];
    let mut session = EditSession::new();

    session.open_for_edit(mike);

    assert_eq!(session.state(), SessionState::EditingExisting(mike.id));
    assert_eq!(session.draft().unwrap().name, "Mike");
    assert!(!session.is_dirty());
    assert!(!session.can_save());
}

#[test]
fn restoring_original_values_clears_dirtiness() {
    let store = seeded_store();
    let mike = &store.records()[0];
    let mut session = EditSession::new();
    session.open_for_edit(mike);

    session.update_field(FieldEdit::Age(Some(33)));
    assert!(session.is_dirty());
    assert!(session.can_save());

    session.update_field(FieldEdit::Age(Some(i64::from(mike.age))));
    assert!(!session.is_dirty());
    assert!(!session.can_save());
}

#[test]
fn commit_in_create_mode_appends_with_a_fresh_id() {
    let store = seeded_store();
    let mut session = EditSession::new();
    session.open_for_create();
    fill_valid_draft(&mut session);

    let (next, record) = session.commit(&store).unwrap();

    assert_eq!(next.len(), store.len() + 1);
    assert!(!store.contains(record.id));
    assert!(next.contains(record.id));
    assert_eq!(record.name, "Bob");
    assert_eq!(session.state(), SessionState::Closed);
    assert!(session.draft().is_none());
}

#[test]
fn commit_in_edit_mode_replaces_the_opened_record() {
    let store = seeded_store();
    let mike = store.records()[0].clone();
    let mut session = EditSession::new();
    session.open_for_edit(&mike);
    session.update_field(FieldEdit::Age(Some(33)));

    let (next, record) = session.commit(&store).unwrap();

    assert_eq!(record.id, mike.id);
    assert_eq!(record.age, 33);
    assert_eq!(record.name, "Mike");
    assert_eq!(next.len(), store.len());
    assert_eq!(next.get(mike.id).unwrap().age, 33);
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn commit_with_closed_save_gate_is_rejected() {
    let store = seeded_store();
    let mut session = EditSession::new();

    // Closed session.
    let err = session.commit(&store).unwrap_err();
    assert!(matches!(err, SessionError::SaveNotAllowed));

    // Open but clean session.
    session.open_for_edit(&store.records()[0]);
    let err = session.commit(&store).unwrap_err();
    assert!(matches!(err, SessionError::SaveNotAllowed));

    // Dirty but invalid draft.
    session.update_field(FieldEdit::Name("Bob!".to_string()));
    let err = session.commit(&store).unwrap_err();
    assert!(matches!(err, SessionError::SaveNotAllowed));

    // The session stays open for correction after a rejected commit.
    assert!(session.is_open());
}

#[test]
fn cancel_discards_the_draft_without_store_changes() {
    let store = seeded_store();
    let before = store.clone();
    let mut session = EditSession::new();
    session.open_for_edit(&store.records()[0]);
    session.update_field(FieldEdit::Age(Some(99)));

    session.cancel();

    assert_eq!(session.state(), SessionState::Closed);
    assert!(session.draft().is_none());
    assert_eq!(store, before);
}

#[test]
fn field_edits_on_a_closed_session_are_ignored() {
    let mut session = EditSession::new();

    session.update_field(FieldEdit::Name("Bob".to_string()));

    assert!(session.draft().is_none());
    assert!(!session.can_save());
}

#[test]
fn reopening_for_create_resets_a_previous_draft() {
    let mut session = EditSession::new();
    session.open_for_create();
    fill_valid_draft(&mut session);

    session.open_for_create();

    let draft = session.draft().unwrap();
    assert!(draft.name.is_empty());
    assert!(!session.is_dirty());
}

#[test]
fn store_error_surfaces_through_commit() {
    // Open against a record from one store value, commit against a store
    // where that record no longer exists.
    let store = seeded_store();
    let mike = store.records()[0].clone();
    let without_mike = store.delete(mike.id);

    let mut session = EditSession::new();
    session.open_for_edit(&mike);
    session.update_field(FieldEdit::Age(Some(33)));

    let err = session.commit(&without_mike).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Store(StoreError::NotFound(id)) if id == mike.id
    ));
}
