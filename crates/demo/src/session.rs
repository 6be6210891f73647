//! Scripted walk through the address book API.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use contactbook_contacts::{AddressBook, Record, UpcomingBirthday};

/// Everything the session printed, in order.
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Transcript {
    fn say(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(%line, "transcript");
        self.lines.push(line);
    }
}

/// Populate a book with two contacts, edit and look up phones, report
/// upcoming birthdays, then delete one contact.
pub fn run(today: NaiveDate, window_days: u32) -> Result<(AddressBook, Transcript)> {
    let mut book = AddressBook::new();
    let mut out = Transcript::default();

    let mut john = Record::new("John");
    john.set_birthday("23.04.1996")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    if let Some(birthday) = john.birthday() {
        out.say(birthday.to_string());
    }
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane);
    tracing::info!(contacts = book.len(), "address book populated");

    out.say(book.to_string());

    let john = book.find_mut("John").context("John was just added")?;
    john.edit_phone("1234567890", "1112223333")?;
    john.remove_phone("1112223333");
    out.say(john.to_string());

    if let Some(phone) = john.find_phone("5555555555") {
        out.say(format!("{}: {}", john.name(), phone));
    }

    // Rejected input is reported, not fatal.
    if let Err(e) = john.add_phone("555-5555") {
        tracing::warn!(error = %e, input = e.input(), "phone rejected");
        out.say(e.to_string());
    }

    let upcoming = book.upcoming_birthdays(today, window_days);
    tracing::info!(
        %today,
        window_days,
        count = upcoming.len(),
        "upcoming birthdays computed"
    );
    for entry in &upcoming {
        out.say(entry.to_string());
    }
    out.say(upcoming_json(&upcoming)?);

    let removed = book.delete("Jane")?;
    tracing::info!(name = %removed.name(), "contact deleted");

    if let Err(e) = book.delete("Jane") {
        tracing::warn!(error = %e, "delete failed");
        out.say(e.to_string());
    }

    Ok((book, out))
}

fn upcoming_json(upcoming: &[UpcomingBirthday]) -> Result<String> {
    serde_json::to_string_pretty(upcoming).context("serializing upcoming birthdays")
}
