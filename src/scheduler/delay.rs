//! Pause inserted between consecutive batches.

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterBatchDelay(Duration);

impl InterBatchDelay {
    pub const NONE: InterBatchDelay = InterBatchDelay(Duration::ZERO);

    pub fn new(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn is_enabled(&self) -> bool {
        !self.0.is_zero()
    }

    /// Suspend for the configured duration. Returns immediately when disabled.
    pub async fn pause(&self) {
        if self.is_enabled() {
            tokio::time::sleep(self.0).await;
        }
    }
}

impl From<Duration> for InterBatchDelay {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}
