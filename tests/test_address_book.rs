//! Integration tests for address book operations.

mod common;

use chrono::NaiveDate;
use common::{alexander_book, sample_book};
use contact_book::{AddressBook, AddressBookError, ValidationError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_alexander_walkthrough() {
    let mut book = alexander_book();
    let rows: Vec<String> = book.show_records().collect();
    assert_eq!(
        rows,
        vec!["Alexander | abc@gmail.com | 111111111 111111112 111111113 | 30-09-2022"]
    );

    book.record_mut("Alexander")
        .unwrap()
        .del_phone("111111112")
        .unwrap();
    let rows: Vec<String> = book.show_records().collect();
    assert_eq!(
        rows,
        vec!["Alexander | abc@gmail.com | 111111111 111111113 | 30-09-2022"]
    );
    assert_eq!(book.get("Alexander").unwrap().phones().len(), 2);

    book.del_record("Alexander").unwrap();
    assert!(book.is_empty());
    assert_eq!(book.show_records().count(), 0);
}

#[test]
fn test_duplicate_record_keeps_single_entry() {
    let mut book = AddressBook::default();
    book.add_record("Alex").unwrap();

    let err = book.add_record("Alex").unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(book.iter().filter(|r| r.name().as_str() == "Alex").count(), 1);
}

#[test]
fn test_names_are_case_sensitive_keys() {
    let mut book = AddressBook::default();
    book.add_record("Alex").unwrap();
    book.add_record("alex").unwrap();
    assert_eq!(book.len(), 2);
}

#[test]
fn test_delete_missing_phone_leaves_record_unchanged() {
    let mut book = alexander_book();
    let record = book.record_mut("Alexander").unwrap();

    let err = record.del_phone("999999999").unwrap_err();
    assert!(matches!(err, AddressBookError::PhoneNotFound { .. }));
    assert_eq!(record.phones().len(), 3);
}

#[test]
fn test_invalid_input_is_reported_as_invalid_format() {
    let mut book = alexander_book();
    let record = book.record_mut("Alexander").unwrap();

    let err = record.set_birthday("30-09").unwrap_err();
    assert!(matches!(
        err,
        AddressBookError::InvalidFormat(ValidationError::MalformedDate(_))
    ));

    let err = record.set_birthday("01-01-2999").unwrap_err();
    assert!(matches!(
        err,
        AddressBookError::InvalidFormat(ValidationError::BirthdayNotInPast(_))
    ));

    assert_eq!(record.birthday().unwrap().to_string(), "30-09-2022");
}

#[test]
fn test_search_email_ignores_case() {
    let mut book = AddressBook::default();
    book.add_record("Alex")
        .unwrap()
        .set_email("abc@def.com")
        .unwrap();
    book.add_record("Boris").unwrap();

    let results = book.search("ABC");
    assert_eq!(results.len(), 1);
    assert!(results[0].contains(" Name: Alex\n"));
    assert!(results[0].contains(" Email: abc@def.com\n"));
}

#[test]
fn test_search_by_each_field() {
    let book = sample_book();

    let names = |query: &str| -> Vec<String> {
        book.search(query)
            .into_iter()
            .map(|block| block.lines().nth(1).unwrap_or_default().to_string())
            .collect()
    };

    assert_eq!(names("борис"), vec![" Name: Борис"]);
    assert_eq!(names("example.ORG"), vec![" Name: Борис"]);
    assert_eq!(names("50 123"), vec![" Name: Борис"]);
    assert_eq!(names("02-2000"), vec![" Name: Chloe"]);
    assert_eq!(names("11111111"), vec![" Name: Alexander"]);
    assert!(names("zzz").is_empty());
}

#[test]
fn test_search_keeps_insertion_order() {
    let book = sample_book();
    let results = book.search("");
    assert_eq!(results.len(), 4);
    assert!(results[0].contains("Alexander"));
    assert!(results[3].contains("Dmytro"));
    assert_eq!(
        results[3],
        "\n Name: Dmytro\n Phones: No records\n Birthday: No records\n Email: No records\n"
    );
}

#[test]
fn test_days_to_birthday_for_every_day_of_year() {
    let book = alexander_book();
    let record = book.get("Alexander").unwrap();

    let mut today = date(2025, 1, 1);
    while today < date(2026, 1, 1) {
        let days = record.days_to_birthday_from(today).unwrap();
        let next = if today <= date(2025, 9, 30) {
            date(2025, 9, 30)
        } else {
            date(2026, 9, 30)
        };
        assert_eq!(days, (next - today).num_days(), "today {today}");
        today = today.succ_opt().unwrap();
    }
}

#[test]
fn test_contacts_with_days_to_bday() {
    let book = sample_book();

    assert_eq!(
        book.contacts_with_days_to_bday_from(0, date(2025, 9, 30)),
        vec!["Alexander, 30-09-2022"]
    );
    // Leap-day birthday is celebrated on Feb 28 in 2025
    assert_eq!(
        book.contacts_with_days_to_bday_from(1, date(2025, 2, 27)),
        vec!["Chloe, 29-02-2000"]
    );
    assert!(book
        .contacts_with_days_to_bday_from(5, date(2025, 2, 27))
        .is_empty());
}
