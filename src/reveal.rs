//! Fade-in reveal: intersection-triggered for scrolled content, timer-driven
//! for hero elements already on screen at load.
//!
//! Both triggers funnel into one [`reveal`] operation that adds the
//! `visible` class. Nothing removes the class, so visibility is monotonic by
//! construction. Revealed elements are unobserved; re-observation has
//! nothing left to do.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use gloo_timers::callback::Timeout;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::consts::{CLASS_VISIBLE, FADE_ROOT_MARGIN, FADE_THRESHOLD, HERO_BASE_DELAY_MS, HERO_STAGGER_MS};
use crate::page::Page;

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

// --- DOM-free core ---

/// Delay before the hero element at `index` is revealed.
#[must_use]
pub fn hero_delay(index: u32) -> u32 {
    HERO_BASE_DELAY_MS + index * HERO_STAGGER_MS
}

/// Whether a trigger should reveal the element right now. Reveals fire only
/// on entry into view and only once; there is no un-reveal transition.
#[must_use]
pub fn newly_visible(intersecting: bool, already_visible: bool) -> bool {
    intersecting && !already_visible
}

// --- DOM glue ---

/// Mark an element revealed. The single mutation point for visibility.
pub fn reveal(element: &Element) {
    let _ = element.class_list().add_1(CLASS_VISIBLE);
}

fn is_revealed(element: &Element) -> bool {
    element.class_list().contains(CLASS_VISIBLE)
}

/// Observe all fade-in elements and reveal each as it enters the viewport
/// (10% visible, 50px bottom margin). The observer and its callback live for
/// the page lifetime.
pub fn start_observer(page: &Page) {
    if page.fade_elements.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if newly_visible(entry.is_intersecting(), is_revealed(&target)) {
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(FADE_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for element in &page.fade_elements {
        observer.observe(element);
    }
}

/// Reveal hero elements on a staggered schedule shortly after load, without
/// waiting for an intersection that may never fire for content already in
/// view. Fire-once timers, leaked for the page lifetime.
pub fn schedule_hero(page: &Page) {
    for (index, element) in (0u32..).zip(page.hero_fade_elements.iter()) {
        let element = element.clone();
        Timeout::new(hero_delay(index), move || reveal(&element)).forget();
    }
}
