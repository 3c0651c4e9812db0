use chrono::{Local, NaiveDateTime};

/// Clock abstracts access to the current instant so resolvers remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock instant, without timezone conversion.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
