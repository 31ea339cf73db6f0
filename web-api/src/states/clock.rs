use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Local calendar of the service, used for "today" and report timestamps.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    timezone: Tz,
}

impl Clock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
