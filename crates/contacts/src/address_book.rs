use std::collections::HashMap;

use chrono::NaiveDate;

use contactbook_core::{ContactError, ContactResult};

use crate::birthdays::{
    DEFAULT_WINDOW_DAYS, UpcomingBirthday, congratulation_date, next_occurrence,
};
use crate::record::Record;

/// All contacts, keyed by name.
///
/// Iteration follows the order in which names were first added. Adding a
/// record under a name that is already present replaces the stored record in
/// place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store `record` under its name, replacing any record already there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// `ContactError::KeyNotFound` if there is no such record; the book is
    /// left untouched.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| ContactError::key_not_found(name))?;
        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Contacts whose next birthday is between `today` and `today +
    /// window_days`, inclusive.
    ///
    /// Birthdays on a weekend are congratulated the following Monday. The
    /// shifted date may land past the window; it is still reported. Results
    /// follow book order, not date order.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let window = 0..=i64::from(window_days);

        self.iter()
            .filter_map(|record| {
                let occurrence = next_occurrence(record.birthday()?, today)?;
                if !window.contains(&(occurrence - today).num_days()) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: congratulation_date(occurrence)?,
                })
            })
            .collect()
    }

    /// [`Self::upcoming_birthdays`] over the next [`DEFAULT_WINDOW_DAYS`] days.
    pub fn upcoming_birthdays_default(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(today, DEFAULT_WINDOW_DAYS)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl core::fmt::Display for AddressBook {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
            write!(
                f,
                "Contact name : {}, phones: {}",
                record.name(),
                phones.join(";")
            )?;
        }
        Ok(())
    }
}
