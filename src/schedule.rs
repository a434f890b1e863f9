use std::time::Duration;

/// Runs a task once after a delay.
///
/// The returned task handle owns the pending work: dropping it cancels the
/// task if it has not fired yet.
pub trait Scheduler {
    type Task;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Task;
}

#[cfg(target_arch = "wasm32")]
pub use browser::TimeoutScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::Scheduler;
    use gloo_timers::callback::Timeout;
    use std::time::Duration;

    /// `setTimeout`-backed scheduler. Dropping the [`Timeout`] clears it.
    #[derive(Clone, Copy, Default)]
    pub struct TimeoutScheduler;

    impl Scheduler for TimeoutScheduler {
        type Task = Timeout;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, task)
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::Scheduler;
    use std::{
        cell::{Cell, RefCell},
        rc::Rc,
        time::Duration,
    };

    struct Entry {
        id: u64,
        due: Duration,
        cancelled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        entries: Vec<Entry>,
    }

    /// Virtual clock for driving scheduled work in tests.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualTask {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualTask {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Task = ManualTask;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> ManualTask {
            let cancelled = Rc::new(Cell::new(false));
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.entries.push(Entry {
                id,
                due,
                cancelled: Rc::clone(&cancelled),
                task,
            });
            ManualTask { cancelled }
        }
    }

    impl ManualScheduler {
        pub(crate) fn now(&self) -> Duration {
            self.queue.borrow().now
        }

        pub(crate) fn pending(&self) -> usize {
            self.queue
                .borrow()
                .entries
                .iter()
                .filter(|entry| !entry.cancelled.get())
                .count()
        }

        /// Moves the clock forward, running every live task that comes due.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.now() + by;
            while let Some(entry) = self.pop_due(target) {
                self.queue.borrow_mut().now = entry.due;
                (entry.task)();
            }
            self.queue.borrow_mut().now = target;
        }

        /// Runs every queued task, cancelled or not, as a timer that fires
        /// after its owner gave up on it would.
        pub(crate) fn fire_stale(&self) {
            let entries = std::mem::take(&mut self.queue.borrow_mut().entries);
            for entry in entries {
                (entry.task)();
            }
        }

        fn pop_due(&self, target: Duration) -> Option<Entry> {
            let mut queue = self.queue.borrow_mut();
            queue.entries.retain(|entry| !entry.cancelled.get());
            let position = queue
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.due <= target)
                .min_by_key(|(_, entry)| (entry.due, entry.id))
                .map(|(position, _)| position)?;
            Some(queue.entries.remove(position))
        }
    }
}
