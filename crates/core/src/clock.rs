//! Source of "today" for date-relative queries.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
///
/// Domain queries take the date as a plain argument; this port is for the
/// outer layers that have to decide where "today" comes from.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the operating system.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
