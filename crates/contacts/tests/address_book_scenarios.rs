use chrono::{Datelike, NaiveDate, Weekday};
use contactbook_contacts::{AddressBook, Record, UpcomingBirthday};
use contactbook_core::{ContactError, ValidationError};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.set_birthday("23.04.1996").unwrap();
    john.add_phone("1234567890").unwrap();
    john.add_phone("5555555555").unwrap();
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210").unwrap();
    book.add_record(jane);

    book
}

#[test]
fn scripted_session() {
    let mut book = sample_book();
    assert_eq!(
        book.to_string(),
        "Contact name : John, phones: 1234567890;5555555555\n\
         Contact name : Jane, phones: 9876543210"
    );

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 5555555555; 1112223333"
    );

    john.remove_phone("1112223333");
    assert_eq!(john.to_string(), "Contact name: John, phones: 5555555555");

    let found = john.find_phone("5555555555").unwrap();
    assert_eq!(format!("{}: {}", john.name(), found), "John: 5555555555");

    book.delete("Jane").unwrap();
    assert!(book.find("Jane").is_none());
    assert_eq!(
        book.delete("Jane"),
        Err(ContactError::KeyNotFound("Jane".into()))
    );
}

#[test]
fn birthday_query_over_sample_book() {
    let book = sample_book();
    assert_eq!(
        book.upcoming_birthdays(date(2024, 4, 20), 7),
        vec![UpcomingBirthday {
            name: "John".into(),
            congratulation_date: date(2024, 4, 23),
        }]
    );
    assert!(book.upcoming_birthdays(date(2024, 4, 24), 7).is_empty());
}

#[test]
fn validation_errors_surface_through_contact_error() {
    fn add(book: &mut AddressBook, name: &str, phone: &str) -> Result<(), ContactError> {
        let mut record = Record::new(name);
        record.add_phone(phone)?;
        book.add_record(record);
        Ok(())
    }

    let mut book = AddressBook::new();
    let err = add(&mut book, "Bob", "12-34").unwrap_err();
    assert_eq!(
        err,
        ContactError::Validation(ValidationError::InvalidPhone("12-34".into()))
    );
    assert!(book.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every reported contact's birthday is within the window and
    /// every congratulation date is a weekday no earlier than today.
    #[test]
    fn reported_birthdays_respect_window(
        today_offset in 0i64..3650,
        window in 0u32..30,
        birthdays in prop::collection::vec((1u32..=12, 1u32..=28), 0..20),
    ) {
        let today = date(2020, 1, 1) + chrono::Duration::days(today_offset);
        let mut book = AddressBook::new();
        for (i, (m, d)) in birthdays.iter().enumerate() {
            let mut record = Record::new(format!("c{i}"));
            record.set_birthday(&format!("{d:02}.{m:02}.1990")).unwrap();
            book.add_record(record);
        }

        for upcoming in book.upcoming_birthdays(today, window) {
            let congratulate = upcoming.congratulation_date;
            prop_assert!(congratulate >= today);
            prop_assert!(!matches!(congratulate.weekday(), Weekday::Sat | Weekday::Sun));
            // Shifting adds at most two days.
            prop_assert!((congratulate - today).num_days() <= i64::from(window) + 2);
        }
    }
}
