use chrono::{DateTime, Utc};

/// Source of wall-clock time for token freshness checks.
///
/// Read afresh on every check; callers never hold on to a reading across a
/// renewal.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
