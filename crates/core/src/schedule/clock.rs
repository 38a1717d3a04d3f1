//! Generation-moment source.

use chrono::{DateTime, FixedOffset, Local};

/// Provides "now" in the user's local offset.
pub trait Clock: Send + Sync {
    /// Current instant with the local UTC offset.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
