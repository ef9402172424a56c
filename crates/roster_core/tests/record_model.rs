use chrono::NaiveDate;
use roster_core::{sample_records, FieldEdit, Record, RecordDraft, RecordField};
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn record_new_generates_distinct_ids() {
    let first = Record::new("Mike", 32, date(1990, 10, 22));
    let second = Record::new("Mike", 32, date(1990, 10, 22));

    assert!(!first.id.is_nil());
    assert_ne!(first.id, second.id);
}

#[test]
fn from_draft_requires_every_field() {
    let id = Uuid::new_v4();
    let mut draft = RecordDraft {
        name: "  Mike  ".to_string(),
        age: Some(32),
        birth_date: Some(date(1990, 10, 22)),
    };

    let record = Record::from_draft(id, &draft).unwrap();
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Mike");
    assert_eq!(record.age, 32);
    assert_eq!(record.birth_date, date(1990, 10, 22));

    draft.age = None;
    assert!(Record::from_draft(id, &draft).is_none());

    draft.age = Some(300);
    assert!(Record::from_draft(id, &draft).is_none());
}

#[test]
fn draft_apply_trims_name_and_replaces_fields() {
    let mut draft = RecordDraft::default();

    draft.apply(FieldEdit::Name("  Anna-Maria ".to_string()));
    draft.apply(FieldEdit::Age(Some(30)));
    draft.apply(FieldEdit::BirthDate(Some(date(1995, 3, 14))));

    assert_eq!(draft.name, "Anna-Maria");
    assert_eq!(draft.age, Some(30));
    assert_eq!(draft.birth_date, Some(date(1995, 3, 14)));
    assert!(draft.is_fully_populated());

    draft.apply(FieldEdit::Age(None));
    assert!(!draft.is_fully_populated());
}

#[test]
fn field_edit_reports_its_target_field() {
    assert_eq!(FieldEdit::Name(String::new()).field(), RecordField::Name);
    assert_eq!(FieldEdit::Age(None).field(), RecordField::Age);
    assert_eq!(FieldEdit::BirthDate(None).field(), RecordField::BirthDate);
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = Record::with_id(id, "Mike", 32, date(1990, 10, 22));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["name"], "Mike");
    assert_eq!(json["age"], 32);
    assert_eq!(json["birth_date"], "1990-10-22");

    let decoded: Record = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn field_names_use_snake_case_on_the_wire() {
    assert_eq!(
        serde_json::to_value(RecordField::BirthDate).unwrap(),
        serde_json::json!("birth_date")
    );
    assert_eq!(RecordField::BirthDate.as_str(), "birth_date");
}

#[test]
fn sample_records_hold_the_demo_dataset() {
    let records = sample_records();

    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, ["Mike", "John", "Bob", "Mari"]);
    assert_eq!(records[0].age, 32);
    assert_eq!(records[0].birth_date, date(1990, 10, 22));

    let mut ids: Vec<_> = records.iter().map(|record| record.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
}
