//! Contact book domain module.
//!
//! Validated contact fields, per-contact records, and the address book with
//! its upcoming-birthday query. Pure, deterministic domain logic (no IO, no
//! clock access, no logging): "today" is always passed in by the caller.

pub mod address_book;
pub mod birthdays;
pub mod field;
pub mod record;

pub use address_book::AddressBook;
pub use birthdays::{DEFAULT_WINDOW_DAYS, UpcomingBirthday, congratulation_date, next_occurrence};
pub use field::{Birthday, DATE_FORMAT, Name, Phone};
pub use record::Record;
