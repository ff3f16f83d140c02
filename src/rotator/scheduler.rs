//! One-shot timer seam.
//!
//! The rotator never talks to a clock directly; it arms and cancels timers
//! through a [`Scheduler`]. Whoever owns the scheduler is responsible for
//! calling [`WordRotator::rotate_word`](super::WordRotator::rotate_word)
//! when an armed timer comes due.

use std::time::Duration;

use crate::error::RotatorError;

/// Arms and cancels one-shot timers.
pub trait Scheduler {
    /// Opaque handle identifying an armed timer.
    type Handle;

    /// Arm a timer that fires once after `delay`.
    fn schedule(&mut self, delay: Duration)
        -> Result<Self::Handle, RotatorError>;

    /// Cancel a timer. Cancelling one that already fired is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Identifier of a timer armed on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Deterministic scheduler driven by a virtual clock.
///
/// Nothing fires on its own: callers pop due timers with
/// [`fire_next`](Self::fire_next) and then run the rotation themselves.
/// Used by the terminal preview and by tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<(TimerId, Duration)>,
}

impl ManualScheduler {
    /// Create a scheduler with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers currently armed.
    #[must_use]
    pub fn armed(&self) -> usize {
        self.pending.len()
    }

    /// Time remaining until the earliest armed timer.
    #[must_use]
    pub fn until_next(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|&(_, due)| due.saturating_sub(self.now))
            .min()
    }

    /// Advance the clock to the earliest armed timer and disarm it.
    ///
    /// Returns how far the clock moved, or `None` if nothing is armed.
    pub fn fire_next(&mut self) -> Option<Duration> {
        self.fire_next_timer().map(|(_, elapsed)| elapsed)
    }

    /// Like [`fire_next`](Self::fire_next), also naming the timer that
    /// fired. Timers due at the same instant fire in the order they were
    /// armed.
    pub fn fire_next_timer(&mut self) -> Option<(TimerId, Duration)> {
        let (pos, &(_, due)) = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, entry)| entry.1)?;
        let (id, _) = self.pending.remove(pos);
        let elapsed = due.saturating_sub(self.now);
        self.now = self.now.max(due);
        Some((id, elapsed))
    }

    /// Advance the clock without firing anything.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(&mut self, delay: Duration) -> Result<TimerId, RotatorError> {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push((id, self.now + delay));
        Ok(id)
    }

    fn cancel(&mut self, handle: TimerId) {
        self.pending.retain(|&(id, _)| id != handle);
    }
}
