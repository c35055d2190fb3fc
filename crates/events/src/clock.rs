//! Source of the "today" anchor used by date-range filters.

use chrono::{Local, NaiveDate};

/// Supplies the current calendar day.
pub trait Clock: core::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Local calendar day of the host machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one day (tests, demos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
