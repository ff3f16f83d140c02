//! The word rotation state machine.
//!
//! [`WordRotator`] owns the word list, the current index and at most one
//! armed timer. It is `Running` while a timer is armed and `Paused`
//! otherwise. A fired timer rotates and re-arms; a click toggles.
//!
//! Timers and rendering sit behind the [`Scheduler`] and
//! [`WordView`](crate::view::WordView) traits so the same machine drives the
//! DOM in the browser and the in-memory stage in tests.

pub mod scheduler;
mod state;

pub use scheduler::{ManualScheduler, Scheduler, TimerId};
pub use state::{RotatorEvent, RotatorState};

use crate::error::RotatorError;
use crate::options::TimingOptions;
use crate::view::WordView;
use crate::words::WordList;

/// Cycles a [`WordList`] through a view on a timer.
pub struct WordRotator<S: Scheduler, V: WordView> {
    words: WordList,
    current: usize,
    timer: Option<S::Handle>,
    timing: TimingOptions,
    scheduler: S,
    view: V,
}

impl<S: Scheduler, V: WordView> WordRotator<S, V> {
    /// Create a paused rotator showing the first word. Call
    /// [`start`](Self::start) to arm the first rotation.
    #[must_use]
    pub fn new(
        words: WordList,
        timing: TimingOptions,
        scheduler: S,
        view: V,
    ) -> Self {
        Self {
            words,
            current: 0,
            timer: None,
            timing,
            scheduler,
            view,
        }
    }

    /// Mark the page ready and arm the first rotation.
    pub fn start(&mut self) -> Result<RotatorState, RotatorError> {
        self.view.mark_ready()?;
        self.schedule_word()?;
        log::debug!(
            "word rotator started with {} words, {:?}",
            self.words.len(),
            self.state()
        );
        Ok(self.state())
    }

    /// Dispatch an event to the matching transition.
    pub fn handle(
        &mut self,
        event: RotatorEvent,
    ) -> Result<RotatorState, RotatorError> {
        match event {
            RotatorEvent::TimerFired => self.rotate_word()?,
            RotatorEvent::Click => {
                let _ = self.toggle_animation()?;
            }
        }
        Ok(self.state())
    }

    /// Show the next word and arm the following rotation.
    ///
    /// Called when the armed timer fires; the fired handle is dropped first.
    /// On a view error the inserted word is discarded and the rotation is
    /// abandoned without re-arming, leaving the rotator paused.
    pub fn rotate_word(&mut self) -> Result<(), RotatorError> {
        self.timer = None;
        let Some(next) = self.words.next_index(self.current) else {
            return Ok(());
        };
        let word = self.words.get(next).unwrap_or_default();

        let previous = self.view.current();
        let entering = self.view.insert_entering(word)?;
        let transition = self.timing.transition();
        let shown = self.view.activate(&entering).and_then(|()| {
            let Some(item) = previous else {
                log::warn!("no displayed word to retire before '{word}'");
                return Ok(());
            };
            self.view.exit(item, transition)
        });
        if let Err(e) = shown {
            self.view.discard(entering);
            return Err(e);
        }

        log::debug!("rotated to word {next} '{word}'");
        self.current = next;
        self.schedule_word()
    }

    /// Arm a rotation one interval from now, replacing any armed timer.
    ///
    /// Does nothing for an empty word list.
    pub fn schedule_word(&mut self) -> Result<(), RotatorError> {
        if self.words.is_empty() {
            return Ok(());
        }
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
        self.timer = Some(self.scheduler.schedule(self.timing.interval())?);
        Ok(())
    }

    /// Pause if running, otherwise resume with a fresh interval.
    pub fn toggle_animation(&mut self) -> Result<RotatorState, RotatorError> {
        match self.state() {
            RotatorState::Running => self.pause(),
            RotatorState::Paused => self.resume()?,
        }
        Ok(self.state())
    }

    /// Cancel the armed timer. A no-op when already paused.
    pub fn pause(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
            log::debug!("word rotator paused at word {}", self.current);
        }
    }

    /// Arm a fresh interval if paused. A no-op when already running.
    pub fn resume(&mut self) -> Result<(), RotatorError> {
        if self.timer.is_none() {
            self.schedule_word()?;
            log::debug!("word rotator resumed at word {}", self.current);
        }
        Ok(())
    }

    /// Whether a rotation is scheduled.
    #[must_use]
    pub fn state(&self) -> RotatorState {
        if self.timer.is_some() {
            RotatorState::Running
        } else {
            RotatorState::Paused
        }
    }

    /// Index of the displayed word.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The displayed word, if the list is non-empty.
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current)
    }

    /// The word list in rotation order.
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// The scheduler, for drivers that fire timers themselves.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<S: Scheduler, V: WordView> std::fmt::Debug for WordRotator<S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordRotator")
            .field("words", &self.words.len())
            .field("current", &self.current)
            .field("state", &self.state())
            .field("timing", &self.timing)
            .finish_non_exhaustive()
    }
}
