//! Owned handles for scheduled work.
//!
//! Components schedule delayed work through a [`TimerRegistry`] instead of
//! raw timeouts: every pending timer is owned by the registry, a fired
//! timer removes its own slot, and dropping the registry cancels whatever
//! is still pending. [`FrameTask`] does the same for a single
//! `requestAnimationFrame` callback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Identifies one scheduled timer. Handles are never reused, so a stale
/// handle cancels nothing instead of cancelling a stranger.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimerHandle(u64);

struct SlotMap<T> {
    next_id: u64,
    active: HashMap<u64, T>,
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotMap<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            active: HashMap::new(),
        }
    }

    fn insert_with(&mut self, make: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let value = make(id);
        self.active.insert(id, value);
        id
    }

    fn remove(&mut self, id: u64) -> Option<T> {
        self.active.remove(&id)
    }

    fn clear(&mut self) {
        self.active.clear();
    }

    fn len(&self) -> usize {
        self.active.len()
    }
}

/// A fired or cancelled slot releases itself here. The registry may be
/// gone by the time a timer fires; that is fine, the slot died with it.
fn release<T>(slots: &Weak<RefCell<SlotMap<T>>>, id: u64) {
    if let Some(slots) = slots.upgrade() {
        slots.borrow_mut().remove(id);
    }
}

/// Registry of pending timeouts. Clones share the same slots, so a
/// callback can capture a clone and cancel through it. Dropping the last
/// clone clears every pending timeout.
#[derive(Clone, Default)]
pub struct TimerRegistry {
    slots: Rc<RefCell<SlotMap<Timeout>>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `action` once after `delay_ms`. The returned handle cancels
    /// the timer while it is still pending.
    pub fn after<F>(&self, delay_ms: u32, action: F) -> TimerHandle
    where
        F: FnOnce() + 'static,
    {
        let weak = Rc::downgrade(&self.slots);
        let id = self.slots.borrow_mut().insert_with(|id| {
            Timeout::new(delay_ms, move || {
                // Vacate the slot before running so the action sees this
                // timer as no longer pending.
                release(&weak, id);
                action();
            })
        });
        TimerHandle(id)
    }

    /// Cancels a pending timer. Handles that already fired, or were
    /// cancelled before, are a no-op.
    pub fn cancel(&self, handle: TimerHandle) {
        self.slots.borrow_mut().remove(handle.0);
    }

    /// Cancels everything still pending.
    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
    }

    pub fn pending(&self) -> usize {
        self.slots.borrow().len()
    }
}

/// One `requestAnimationFrame` callback, cancelled on drop. Used to defer
/// a state change to the frame after a mount so CSS transitions get a
/// starting position to animate from.
pub struct FrameTask {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl FrameTask {
    pub fn request<F>(action: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut action = Some(action);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(action) = action.take() {
                action();
            }
        }) as Box<dyn FnMut()>);
        let id = web_sys::window()?
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        // Cancelling a frame that already ran is harmless.
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_are_never_reused() {
        let mut slots: SlotMap<&str> = SlotMap::new();
        let a = slots.insert_with(|_| "hero");
        slots.remove(a);
        let b = slots.insert_with(|_| "story");
        assert_ne!(a, b);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn remove_is_a_no_op_for_unknown_ids() {
        let mut slots: SlotMap<u32> = SlotMap::new();
        let id = slots.insert_with(|_| 7);
        assert_eq!(slots.remove(id), Some(7));
        assert_eq!(slots.remove(id), None);
        assert_eq!(slots.remove(999), None);
    }

    #[test]
    fn clear_empties_every_slot() {
        let mut slots: SlotMap<u32> = SlotMap::new();
        for n in 0..4 {
            slots.insert_with(|_| n);
        }
        assert_eq!(slots.len(), 4);
        slots.clear();
        assert_eq!(slots.len(), 0);
    }

    #[test]
    fn release_vacates_the_fired_slot() {
        let slots = Rc::new(RefCell::new(SlotMap::new()));
        let id = slots.borrow_mut().insert_with(|_| "pending");
        let weak = Rc::downgrade(&slots);

        release(&weak, id);
        assert_eq!(slots.borrow().len(), 0);

        // Releasing again finds nothing to do.
        release(&weak, id);
        assert_eq!(slots.borrow().len(), 0);
    }

    #[test]
    fn release_after_registry_dropped_is_safe() {
        let slots = Rc::new(RefCell::new(SlotMap::new()));
        let id = slots.borrow_mut().insert_with(|_| "pending");
        let weak = Rc::downgrade(&slots);
        drop(slots);
        release(&weak, id);
    }

    #[test]
    fn slots_track_their_count() {
        let mut slots: SlotMap<u32> = SlotMap::new();
        let first = slots.insert_with(|_| 1);
        slots.insert_with(|_| 2);
        assert_eq!(slots.len(), 2);
        slots.remove(first);
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn cancelling_an_unknown_handle_is_a_no_op() {
        // No timeout is ever scheduled here, so this runs off-wasm too.
        let registry = TimerRegistry::new();
        registry.cancel(TimerHandle(7));
        assert_eq!(registry.pending(), 0);
    }
}
