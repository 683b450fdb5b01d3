use std::time::{SystemTime, UNIX_EPOCH};

use ledger_protocol::common::Timestamp;

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp {
            seconds: elapsed.as_secs() as i64,
            nanos: elapsed.subsec_nanos() as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub Timestamp);

impl FixedClock {
    pub fn at_seconds(seconds: i64) -> Self {
        Self(Timestamp { seconds, nanos: 0 })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}
