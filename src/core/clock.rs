use chrono::{Local, NaiveDate};

/// Source of "today" for contributions recorded without an explicit
/// date. The ledger takes this as an injected dependency so tests can
/// pin the calendar instead of reading the system time.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The process-local wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
