//! Fire-once visibility tracking for scroll-triggered sections.
//!
//! [`RegionSet`] is the bookkeeping: each observed region carries a
//! visibility threshold and fires at most once, no matter how the
//! reported fraction oscillates afterwards. [`SectionObserver`] wires a
//! `RegionSet` to the browser's `IntersectionObserver`, falling back to
//! firing immediately when the API is missing so content is never stuck
//! hidden.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

/// Fraction of a section that must be on screen before its reveal runs.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RegionId(usize);

struct VisibilityRegion {
    threshold: f64,
    has_fired: bool,
}

/// Threshold bookkeeping for a set of observed regions, independent of
/// any DOM observer.
#[derive(Default)]
pub struct RegionSet {
    next_id: usize,
    regions: HashMap<RegionId, VisibilityRegion>,
}

impl RegionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region and returns its handle.
    pub fn observe(&mut self, threshold: f64) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(
            id,
            VisibilityRegion {
                threshold,
                has_fired: false,
            },
        );
        id
    }

    /// Feeds an observed visibility fraction to a region. Returns true
    /// exactly once, the first time the fraction reaches the region's
    /// threshold; fired and unknown regions always answer false.
    pub fn report(&mut self, id: RegionId, fraction: f64) -> bool {
        match self.regions.get_mut(&id) {
            Some(region) if !region.has_fired && fraction >= region.threshold => {
                region.has_fired = true;
                true
            }
            _ => false,
        }
    }

    /// Stops tracking a region. Unknown ids are a no-op, so callers can
    /// unobserve during teardown without checking what already fired.
    pub fn unobserve(&mut self, id: RegionId) {
        self.regions.remove(&id);
    }

    pub fn is_tracked(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn tracked(&self) -> usize {
        self.regions.len()
    }
}

struct ObservedTarget {
    element: Element,
    id: RegionId,
    on_visible: Callback<()>,
}

/// Watches section elements and runs each one's callback the first time
/// it crosses the visibility threshold. Dropping the observer (or
/// calling [`disconnect`](Self::disconnect)) detaches everything.
pub struct SectionObserver {
    threshold: f64,
    observer: Option<IntersectionObserver>,
    regions: Rc<RefCell<RegionSet>>,
    targets: Rc<RefCell<Vec<ObservedTarget>>>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl SectionObserver {
    pub fn new(threshold: f64) -> Self {
        let regions = Rc::new(RefCell::new(RegionSet::new()));
        let targets: Rc<RefCell<Vec<ObservedTarget>>> = Rc::new(RefCell::new(Vec::new()));

        if !observer_supported() {
            return Self {
                threshold,
                observer: None,
                regions,
                targets,
                _callback: None,
            };
        }

        let cb_regions = Rc::clone(&regions);
        let cb_targets = Rc::clone(&targets);
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let mut fired = Vec::new();
                {
                    let mut regions = cb_regions.borrow_mut();
                    let mut targets = cb_targets.borrow_mut();
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let element = entry.target();
                        let Some(pos) = targets.iter().position(|t| t.element == element) else {
                            continue;
                        };
                        if regions.report(targets[pos].id, entry.intersection_ratio()) {
                            observer.unobserve(&element);
                            fired.push(targets.remove(pos).on_visible);
                        }
                    }
                }
                // Emit outside the borrows: a callback may re-render and
                // touch this observer again.
                for on_visible in fired {
                    on_visible.emit(());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok();

        Self {
            threshold,
            observer,
            regions,
            targets,
            _callback: Some(callback),
        }
    }

    /// Starts watching an element. Without observer support the callback
    /// runs right away instead of being deferred forever.
    pub fn observe(&self, element: Element, on_visible: Callback<()>) {
        let id = self.regions.borrow_mut().observe(self.threshold);
        match &self.observer {
            Some(observer) => {
                self.targets.borrow_mut().push(ObservedTarget {
                    element: element.clone(),
                    id,
                    on_visible,
                });
                observer.observe(&element);
            }
            None => {
                self.regions.borrow_mut().report(id, 1.0);
                on_visible.emit(());
            }
        }
    }

    pub fn disconnect(&self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        let mut regions = self.regions.borrow_mut();
        for target in self.targets.borrow_mut().drain(..) {
            regions.unobserve(target.id);
        }
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_at_threshold() {
        let mut regions = RegionSet::new();
        let id = regions.observe(DEFAULT_THRESHOLD);

        assert!(!regions.report(id, 0.0));
        assert!(!regions.report(id, 0.29));
        assert!(regions.report(id, 0.3), "fires at exactly the threshold");
        assert!(!regions.report(id, 0.9), "never fires twice");
    }

    #[test]
    fn oscillating_fraction_does_not_refire() {
        let mut regions = RegionSet::new();
        let id = regions.observe(0.5);

        assert!(regions.report(id, 0.8));
        assert!(!regions.report(id, 0.1));
        assert!(!regions.report(id, 0.9));
        assert!(regions.is_tracked(id), "fired regions stay known");
    }

    #[test]
    fn regions_fire_independently() {
        let mut regions = RegionSet::new();
        let story = regions.observe(0.3);
        let intro = regions.observe(0.3);

        assert!(regions.report(story, 0.4));
        assert!(!regions.report(intro, 0.1));
        assert!(regions.report(intro, 0.35));
    }

    #[test]
    fn unobserve_silences_a_region() {
        let mut regions = RegionSet::new();
        let id = regions.observe(0.3);
        regions.unobserve(id);

        assert!(!regions.is_tracked(id));
        assert!(!regions.report(id, 1.0));
        assert_eq!(regions.tracked(), 0);
    }

    #[test]
    fn unobserve_of_unknown_region_is_a_no_op() {
        let mut regions = RegionSet::new();
        let id = regions.observe(0.3);
        regions.unobserve(id);
        regions.unobserve(id);
        assert_eq!(regions.tracked(), 0);
    }

    #[test]
    fn zero_threshold_fires_on_any_report() {
        let mut regions = RegionSet::new();
        let id = regions.observe(0.0);
        assert!(regions.report(id, 0.0));
    }
}
