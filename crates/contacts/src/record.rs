use serde::{Deserialize, Serialize};

use contactbook_core::ValidationError;

use crate::field::{Birthday, Name, Phone};

/// One contact: a name, its phone numbers in insertion order, and an optional
/// birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set (or replace) the birthday. A malformed date leaves the current one
    /// in place.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Append a phone. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// First phone whose digits equal `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Remove the first phone equal to `raw`; no-op if there is none.
    pub fn remove_phone(&mut self, raw: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == raw) {
            self.phones.remove(pos);
        }
    }

    /// Replace `old` with `new`.
    ///
    /// The new number is appended at the end of the list and only then is the
    /// first `old` removed, so the edited phone moves to the back.
    ///
    /// # Errors
    ///
    /// - `PhoneNotFound` if `old` is not on the record.
    /// - `InvalidPhone` if `new` is malformed.
    ///
    /// Either way the phone list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if self.find_phone(old).is_none() {
            return Err(ValidationError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old);
        Ok(())
    }
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{phone}")?;
        }
        Ok(())
    }
}
