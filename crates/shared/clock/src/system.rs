use beacon_core::Timestamp;
use beacon_ports::Clock;
use chrono::Utc;

/// Wall-clock time source used when stamping snapshot captures
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
