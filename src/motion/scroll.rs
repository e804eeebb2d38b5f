//! Page scroll plumbing: the shared scroll lock and a detach-on-drop
//! scroll listener.
//!
//! The lock is a plain counted flag owned by the app root and handed to
//! whichever view needs it; the DOM side (body overflow) is applied by
//! that view, while the flag itself stays testable without a browser.
//! Releasing is tied to guard drop, so a view that unmounts abnormally
//! still restores scrolling.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Shared scroll-lock flag. Clones refer to the same flag; the page
/// counts as locked while at least one guard is alive.
#[derive(Clone, Default, Debug)]
pub struct ScrollLock {
    holds: Rc<Cell<u32>>,
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.holds, &other.holds)
    }
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_engaged(&self) -> bool {
        self.holds.get() > 0
    }

    /// Engages the lock for the guard's lifetime.
    pub fn engage(&self) -> ScrollLockGuard {
        self.holds.set(self.holds.get() + 1);
        ScrollLockGuard {
            holds: Rc::clone(&self.holds),
        }
    }
}

#[must_use = "the lock releases as soon as the guard drops"]
pub struct ScrollLockGuard {
    holds: Rc<Cell<u32>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.holds.set(self.holds.get().saturating_sub(1));
    }
}

/// Mirrors the lock onto the document body. Kept out of the guard so the
/// flag stays DOM-free.
pub fn set_body_overflow(value: &str) {
    if let Some(style) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.style())
    {
        let _ = style.set_property("overflow", value);
    }
}

/// A window scroll subscription that detaches itself on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach<F>(on_scroll: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn guard_engages_and_releases() {
        let lock = ScrollLock::new();
        assert!(!lock.is_engaged());

        let guard = lock.engage();
        assert!(lock.is_engaged());

        drop(guard);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn clones_see_the_same_flag() {
        let lock = ScrollLock::new();
        let shared = lock.clone();

        let _guard = lock.engage();
        assert!(shared.is_engaged());
        assert_eq!(lock, shared);
        assert_ne!(lock, ScrollLock::new());
    }

    #[test]
    fn nested_guards_release_in_any_order() {
        let lock = ScrollLock::new();
        let first = lock.engage();
        let second = lock.engage();

        drop(first);
        assert!(lock.is_engaged(), "still held by the second guard");
        drop(second);
        assert!(!lock.is_engaged());
    }

    #[test]
    fn abnormal_exit_still_releases() {
        let lock = ScrollLock::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = lock.engage();
            panic!("view tore down mid-flight");
        }));
        assert!(result.is_err());
        assert!(!lock.is_engaged());
    }
}
