/// Whether the rotator has a rotation scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorState {
    /// A timer is armed; the next rotation will happen on its own.
    Running,
    /// No timer is armed.
    Paused,
}

/// Inputs that drive the rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatorEvent {
    /// The armed rotation timer came due.
    TimerFired,
    /// The user clicked the host element.
    Click,
}
