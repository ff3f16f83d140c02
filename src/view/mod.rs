//! View seam: how a rotation is made visible.
//!
//! A rotation is two-phase. The incoming word is inserted in the entering
//! phase and only then activated, so the stylesheet sees a class change
//! after insertion and runs its transition. The outgoing word is moved to
//! the exiting phase and removed after the transition duration.
//!
//! [`WordStage`] is an in-memory implementation that models the host's
//! children; the DOM implementation lives in `crate::web`.

mod stage;

use std::time::Duration;

pub use stage::{SlotId, WordPhase, WordSlot, WordStage};

use crate::error::RotatorError;

/// Target of the rotator's view updates.
pub trait WordView {
    /// Handle to one rendered word.
    type Item;

    /// The word currently displayed (active), if any.
    fn current(&mut self) -> Option<Self::Item>;

    /// Create the element for `word` in the entering phase and insert it.
    fn insert_entering(&mut self, word: &str)
        -> Result<Self::Item, RotatorError>;

    /// Move an inserted item from entering to active. Implementations must
    /// make sure the insertion has been laid out before switching.
    fn activate(&mut self, item: &Self::Item) -> Result<(), RotatorError>;

    /// Move an item to the exiting phase and remove it after `remove_after`.
    /// Removal is deferred and not awaited.
    fn exit(
        &mut self,
        item: Self::Item,
        remove_after: Duration,
    ) -> Result<(), RotatorError>;

    /// Remove an item immediately, without a transition. Used to take back
    /// an inserted word when a rotation fails partway.
    fn discard(&mut self, item: Self::Item);

    /// Signal the page that the rotator is live. Called once at start.
    fn mark_ready(&mut self) -> Result<(), RotatorError>;
}
