use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time between rotations.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(2500);

/// How long an exiting word stays in the DOM. Must match the stylesheet's
/// `is-entering`/`is-exiting` transition duration.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);

/// Rotation cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimingOptions {
    /// Milliseconds between rotations.
    pub interval_ms: u64,
    /// Milliseconds before an exiting word element is removed.
    pub transition_ms: u64,
}

impl TimingOptions {
    /// Rotation interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Exit transition length as a [`Duration`].
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            interval_ms: ROTATION_INTERVAL.as_millis() as u64,
            transition_ms: TRANSITION_DURATION.as_millis() as u64,
        }
    }
}
