//! Birthday scheduling: next occurrence and weekend-to-Monday shift.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::field::{Birthday, dmy_date};

/// Default look-ahead for [`crate::AddressBook::upcoming_birthdays_default`].
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the business day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(with = "dmy_date")]
    pub congratulation_date: NaiveDate,
}

impl core::fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            Birthday::from_date(self.congratulation_date)
        )
    }
}

/// The first occurrence of `birthday` on or after `today`.
///
/// Uses this year's date unless it has already passed, in which case next
/// year's.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Move a Saturday or Sunday forward to the following Monday. Weekdays are
/// returned as-is.
pub fn congratulation_date(occurrence: NaiveDate) -> Option<NaiveDate> {
    match occurrence.weekday() {
        Weekday::Sat | Weekday::Sun => {
            let days_ahead = (7 - occurrence.weekday().num_days_from_monday()) % 7;
            occurrence.checked_add_days(Days::new(u64::from(days_ahead)))
        }
        _ => Some(occurrence),
    }
}
