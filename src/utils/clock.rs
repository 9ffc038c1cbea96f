use chrono::{Local, NaiveDateTime};

#[cfg(test)]
use mockall::automock;

/// Represents an entity responsible for providing the current moment across
/// the application. This allows tests to pin time.
///
/// Timestamps are naive local datetimes because that is what the on-disk
/// document stores.
#[cfg_attr(test, automock)]
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
