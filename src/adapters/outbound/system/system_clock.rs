use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};

/// Wall-clock time in UTC
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
