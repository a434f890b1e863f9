//! Single-threaded publish/subscribe cell.
//!
//! An [`Observable`] holds one value and a list of subscribers. Views keep
//! the [`Subscription`] returned by [`Observable::subscribe`] for as long
//! as they are mounted; dropping it removes the subscriber.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<dyn Fn(T)>;

struct Shared<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

pub struct Observable<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: Copy + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.shared.borrow().value
    }

    /// Stores `value` and notifies subscribers if it changed.
    pub fn set(&self, value: T) {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.value == value {
                return;
            }
            shared.value = value;
        }
        self.notify();
    }

    pub fn update(&self, f: impl FnOnce(T) -> T) -> T {
        let next = f(self.get());
        self.set(next);
        next
    }

    pub fn subscribe(&self, listener: impl Fn(T) + 'static) -> Subscription {
        let id = {
            let mut shared = self.shared.borrow_mut();
            let id = shared.next_id;
            shared.next_id += 1;
            shared.listeners.push((id, Rc::new(listener)));
            id
        };

        let weak: Weak<RefCell<Shared<T>>> = Rc::downgrade(&self.shared);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared
                        .borrow_mut()
                        .listeners
                        .retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.borrow().listeners.len()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }

    fn notify(&self) {
        let listeners: Vec<(u64, Listener<T>)> = self.shared.borrow().listeners.clone();

        for (id, listener) in listeners {
            // Earlier listeners may have unsubscribed this one or written a
            // newer value.
            let (live, value) = {
                let shared = self.shared.borrow();
                let live = shared.listeners.iter().any(|(other, _)| *other == id);
                (live, shared.value)
            };
            if live {
                listener(value);
            }
        }
    }
}

/// Handle for one subscriber. Unsubscribes on drop.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
