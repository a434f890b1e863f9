//! Typing-text animation.
//!
//! [`TypingAnimator`] is the state machine: it types a word one character
//! at a time, holds the full word, deletes it, then moves to the next word
//! and starts over. [`TypingLoop`] drives an animator from a
//! [`Scheduler`], keeping exactly one pending task alive at a time.

use crate::{config::TypingTimings, error::Error, schedule::Scheduler};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

const MIN_STEP: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TypingPhase {
    Typing,
    PauseFull,
    Deleting,
}

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    words: Vec<String>,
    word_index: usize,
    visible: usize,
    phase: TypingPhase,
    timings: TypingTimings,
    until_next: Duration,
}

impl TypingAnimator {
    pub fn new(words: Vec<String>, timings: TypingTimings) -> Result<Self, Error> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let timings = TypingTimings {
            type_delay: timings.type_delay.max(MIN_STEP),
            delete_delay: timings.delete_delay.max(MIN_STEP),
            full_word_pause: timings.full_word_pause.max(MIN_STEP),
        };

        Ok(Self {
            words,
            word_index: 0,
            visible: 0,
            phase: TypingPhase::Typing,
            until_next: timings.type_delay,
            timings,
        })
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    /// The visible prefix of the current word.
    pub fn text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.visible) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    /// Delay before the next transition is due.
    pub fn delay(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => self.timings.type_delay,
            TypingPhase::PauseFull => self.timings.full_word_pause,
            TypingPhase::Deleting => self.timings.delete_delay,
        }
    }

    /// Performs one transition and returns the delay until the next one.
    pub fn step(&mut self) -> Duration {
        let word_len = self.current_word().chars().count();

        match self.phase {
            TypingPhase::Typing => {
                if self.visible < word_len {
                    self.visible += 1;
                }
                if self.visible >= word_len {
                    self.phase = TypingPhase::PauseFull;
                }
            }
            TypingPhase::PauseFull => {
                self.phase = TypingPhase::Deleting;
            }
            TypingPhase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.word_index = (self.word_index + 1) % self.words.len();
                    self.phase = TypingPhase::Typing;
                }
            }
        }

        self.until_next = self.delay();
        self.until_next
    }

    /// Replays `elapsed` time, stepping as many times as it covers.
    pub fn advance(&mut self, mut elapsed: Duration) {
        while elapsed >= self.until_next {
            elapsed -= self.until_next;
            self.step();
        }
        self.until_next -= elapsed;
    }
}

struct LoopState<S: Scheduler> {
    animator: TypingAnimator,
    scheduler: S,
    pending: Option<S::Task>,
    on_text: Rc<dyn Fn(String)>,
}

/// Drives a [`TypingAnimator`] with a single cancellable task.
///
/// Dropping the loop cancels the pending task. Tasks only hold a weak
/// reference, so a timer that fires late cannot reach a dropped view.
pub struct TypingLoop<S: Scheduler + 'static> {
    state: Rc<RefCell<LoopState<S>>>,
}

impl<S: Scheduler + 'static> TypingLoop<S> {
    pub fn new(animator: TypingAnimator, scheduler: S, on_text: impl Fn(String) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(LoopState {
                animator,
                scheduler,
                pending: None,
                on_text: Rc::new(on_text),
            })),
        }
    }

    /// Emits the current text and schedules the next step. No-op while
    /// already running.
    pub fn start(&self) {
        let (text, on_text) = {
            let state = self.state.borrow();
            if state.pending.is_some() {
                return;
            }
            (state.animator.text().to_string(), Rc::clone(&state.on_text))
        };

        schedule_next(&self.state);
        on_text(text);
    }

    pub fn stop(&self) {
        let pending = self.state.borrow_mut().pending.take();
        drop(pending);
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn text(&self) -> String {
        self.state.borrow().animator.text().to_string()
    }
}

fn schedule_next<S: Scheduler + 'static>(state: &Rc<RefCell<LoopState<S>>>) {
    let weak = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    let delay = guard.animator.delay();
    let task = guard.scheduler.schedule(delay, Box::new(move || tick(&weak)));
    guard.pending = Some(task);
}

fn tick<S: Scheduler + 'static>(weak: &Weak<RefCell<LoopState<S>>>) {
    let Some(state) = weak.upgrade() else {
        return;
    };

    let (text, on_text) = {
        let mut guard = state.borrow_mut();
        if guard.pending.is_none() {
            return;
        }
        guard.animator.step();
        (guard.animator.text().to_string(), Rc::clone(&guard.on_text))
    };

    schedule_next(&state);
    on_text(text);
}
