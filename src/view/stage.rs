use std::time::Duration;

use super::WordView;
use crate::error::RotatorError;

/// Transition phase of a rendered word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPhase {
    /// Inserted, not yet activated.
    Entering,
    /// The displayed word.
    Active,
    /// Transitioning out; removed when its timer runs down.
    Exiting,
}

/// Identifier of a slot on a [`WordStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u64);

/// One rendered word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSlot {
    /// Stable identifier.
    pub id: SlotId,
    /// Text shown.
    pub word: String,
    /// Current phase.
    pub phase: WordPhase,
    /// Time left before removal, for exiting slots.
    pub remove_in: Option<Duration>,
}

/// In-memory stand-in for the host element's children.
///
/// Pending removals run down when the owner calls
/// [`advance`](Self::advance).
#[derive(Debug, Default)]
pub struct WordStage {
    slots: Vec<WordSlot>,
    next_id: u64,
    ready: bool,
}

impl WordStage {
    /// A stage already showing `initial`, as server-rendered markup would.
    #[must_use]
    pub fn new(initial: Option<&str>) -> Self {
        let mut stage = Self::default();
        if let Some(word) = initial {
            let id = stage.push(word, WordPhase::Entering);
            stage.set_phase(id, WordPhase::Active);
        }
        stage
    }

    /// Every slot, in insertion order.
    #[must_use]
    pub fn slots(&self) -> &[WordSlot] {
        &self.slots
    }

    /// Number of rendered words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Text of the active word.
    #[must_use]
    pub fn active_word(&self) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| slot.phase == WordPhase::Active)
            .map(|slot| slot.word.as_str())
    }

    /// Number of slots in `phase`.
    #[must_use]
    pub fn count(&self, phase: WordPhase) -> usize {
        self.slots.iter().filter(|slot| slot.phase == phase).count()
    }

    /// Whether [`mark_ready`](WordView::mark_ready) has run.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Let `elapsed` pass, dropping exiting slots whose time is up.
    pub fn advance(&mut self, elapsed: Duration) {
        for slot in &mut self.slots {
            if let Some(left) = slot.remove_in.as_mut() {
                *left = left.saturating_sub(elapsed);
            }
        }
        self.slots.retain(|slot| slot.remove_in != Some(Duration::ZERO));
    }

    /// Drop every slot, as if the host's children were cleared externally.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn push(&mut self, word: &str, phase: WordPhase) -> SlotId {
        let id = SlotId(self.next_id);
        self.next_id += 1;
        self.slots.push(WordSlot {
            id,
            word: word.to_owned(),
            phase,
            remove_in: None,
        });
        id
    }

    fn slot_mut(&mut self, id: SlotId) -> Result<&mut WordSlot, RotatorError> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or_else(|| RotatorError::Dom(format!("{id:?} is not rendered")))
    }

    fn set_phase(&mut self, id: SlotId, phase: WordPhase) {
        if let Ok(slot) = self.slot_mut(id) {
            slot.phase = phase;
        }
    }
}

impl WordView for WordStage {
    type Item = SlotId;

    fn current(&mut self) -> Option<SlotId> {
        self.slots
            .iter()
            .find(|slot| slot.phase == WordPhase::Active)
            .map(|slot| slot.id)
    }

    fn insert_entering(&mut self, word: &str) -> Result<SlotId, RotatorError> {
        Ok(self.push(word, WordPhase::Entering))
    }

    fn activate(&mut self, item: &SlotId) -> Result<(), RotatorError> {
        self.slot_mut(*item)?.phase = WordPhase::Active;
        Ok(())
    }

    fn exit(
        &mut self,
        item: SlotId,
        remove_after: Duration,
    ) -> Result<(), RotatorError> {
        let slot = self.slot_mut(item)?;
        slot.phase = WordPhase::Exiting;
        slot.remove_in = Some(remove_after);
        Ok(())
    }

    fn discard(&mut self, item: SlotId) {
        self.slots.retain(|slot| slot.id != item);
    }

    fn mark_ready(&mut self) -> Result<(), RotatorError> {
        self.ready = true;
        Ok(())
    }
}
