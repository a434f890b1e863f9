//! Open/closed state for modals and menus, plus the page scroll lock a
//! modal holds while it is open.

use std::{cell::RefCell, rc::Rc};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Escape,
    Navigation,
}

impl CloseReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CloseButton => "close_button",
            Self::Backdrop => "backdrop",
            Self::Escape => "escape",
            Self::Navigation => "navigation",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OverlayState {
    open: bool,
}

impl OverlayState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn opened(self) -> Self {
        Self { open: true }
    }

    /// Closes the overlay. Returns the reason only when this actually
    /// closed something.
    pub fn closed(self, reason: CloseReason) -> (Self, Option<CloseReason>) {
        (Self { open: false }, self.open.then_some(reason))
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }
}

/// Where the page scroll setting lives (the body's `overflow` style in the
/// browser).
pub trait ScrollSurface {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

const LOCKED_OVERFLOW: &str = "hidden";

struct LockState {
    holders: usize,
    saved: Option<String>,
}

/// Reference-counted page scroll lock.
///
/// The first guard saves the surface's current value and disables
/// scrolling; the last guard to drop puts the saved value back.
pub struct ScrollLock {
    surface: Rc<dyn ScrollSurface>,
    state: Rc<RefCell<LockState>>,
}

impl Clone for ScrollLock {
    fn clone(&self) -> Self {
        Self {
            surface: Rc::clone(&self.surface),
            state: Rc::clone(&self.state),
        }
    }
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ScrollLock {
    pub fn new(surface: Rc<dyn ScrollSurface>) -> Self {
        Self {
            surface,
            state: Rc::new(RefCell::new(LockState {
                holders: 0,
                saved: None,
            })),
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        if state.holders == 0 {
            state.saved = Some(self.surface.overflow());
            self.surface.set_overflow(LOCKED_OVERFLOW);
        }
        state.holders += 1;

        ScrollLockGuard { lock: self.clone() }
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().holders > 0
    }

    fn release(&self) {
        let mut state = self.state.borrow_mut();
        state.holders = state.holders.saturating_sub(1);
        if state.holders == 0 {
            if let Some(saved) = state.saved.take() {
                self.surface.set_overflow(&saved);
            }
        }
    }
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeBody {
        overflow: RefCell<String>,
        writes: RefCell<usize>,
    }

    impl FakeBody {
        fn with(value: &str) -> Rc<Self> {
            Rc::new(Self {
                overflow: RefCell::new(value.to_string()),
                writes: RefCell::new(0),
            })
        }
    }

    impl ScrollSurface for FakeBody {
        fn overflow(&self) -> String {
            self.overflow.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
            *self.writes.borrow_mut() += 1;
        }
    }

    #[test]
    fn open_then_close_restores_prior_value() {
        let body = FakeBody::with("auto");
        let lock = ScrollLock::new(body.clone());

        let guard = lock.acquire();
        assert_eq!(body.overflow(), "hidden");
        assert!(lock.is_locked());

        drop(guard);
        assert_eq!(body.overflow(), "auto");
        assert!(!lock.is_locked());
    }

    #[test]
    fn empty_prior_value_is_restored_as_empty() {
        let body = FakeBody::with("");
        let lock = ScrollLock::new(body.clone());

        drop(lock.acquire());

        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn nested_guards_unlock_on_last_release() {
        let body = FakeBody::with("scroll");
        let lock = ScrollLock::new(body.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        drop(first);
        assert_eq!(body.overflow(), "hidden");

        drop(second);
        assert_eq!(body.overflow(), "scroll");
        assert_eq!(*body.writes.borrow(), 2);
    }

    #[test]
    fn clones_share_one_lock() {
        let body = FakeBody::with("auto");
        let lock = ScrollLock::new(body.clone());
        let handle = lock.clone();

        let guard = handle.acquire();
        assert!(lock.is_locked());
        assert!(lock == handle);

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn overlay_close_reports_reason_once() {
        let state = OverlayState::default().opened();
        assert!(state.is_open());

        let (state, reason) = state.closed(CloseReason::Escape);
        assert!(!state.is_open());
        assert_eq!(reason, Some(CloseReason::Escape));

        let (_, reason) = state.closed(CloseReason::Backdrop);
        assert_eq!(reason, None);
    }

    #[test]
    fn toggle_flips_menu() {
        let menu = OverlayState::default();
        assert!(menu.toggled().is_open());
        assert!(!menu.toggled().toggled().is_open());
    }
}
