//! One-shot initialization: DOM-ready gating, the listener registration
//! table, and the initial synchronous styling pass.
//!
//! Listeners are collected into an explicit ordered table before any of them
//! is attached, so registration order (which fixes dispatch order among
//! listeners on the same target) is auditable in one place rather than
//! implicit in scattered `addEventListener` calls.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, wasm_bindgen};
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent};

use crate::page::Page;
use crate::{nav, reveal, sections, theme};

/// Module entry, invoked by the wasm loader. Defers to [`init`] on
/// `DOMContentLoaded` when the document is still loading, otherwise runs it
/// immediately.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(init);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
        on_ready.forget();
    } else {
        init();
    }
}

/// Wire every behavior to the page. Runs exactly once per page load.
pub fn init() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(page) = Page::resolve(&document) else {
        return;
    };

    theme::init(&page);
    theme::watch_system(&page);

    attach(registrations(&page));

    // One synchronous pass so the page is styled correctly before the first
    // user-triggered scroll event.
    nav::sync_scrolled_class(&page);
    sections::update_active_link(&page);

    reveal::start_observer(&page);
    reveal::schedule_hero(&page);

    log::info!(
        "behavior layer ready: {} nav links, {} fade elements ({} hero)",
        page.nav_links.len(),
        page.fade_elements.len(),
        page.hero_fade_elements.len()
    );
}

/// One row of the registration table.
struct Registration {
    target: EventTarget,
    event: &'static str,
    /// Scroll listeners are registered passive; they never call
    /// `preventDefault`.
    passive: bool,
    handler: Closure<dyn FnMut(Event)>,
}

fn on(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Registration {
    Registration { target: target.clone(), event, passive: false, handler: Closure::new(handler) }
}

fn passive(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Registration {
    Registration { target: target.clone(), event, passive: true, handler: Closure::new(handler) }
}

/// Build the full listener table in dispatch order. Optional elements that
/// are missing from the page simply contribute no rows.
fn registrations(page: &Page) -> Vec<Registration> {
    let mut table = Vec::new();

    if let Some(toggle) = &page.theme_toggle {
        let page = page.clone();
        table.push(on(toggle, "click", move |_| theme::toggle(&page)));
    }

    if let Some(window) = web_sys::window() {
        let scrolled_page = page.clone();
        table.push(passive(&window, "scroll", move |_| {
            nav::sync_scrolled_class(&scrolled_page);
        }));
        let active_page = page.clone();
        table.push(passive(&window, "scroll", move |_| {
            sections::update_active_link(&active_page);
        }));
    }

    if let Some(toggle) = &page.nav_toggle {
        let page = page.clone();
        table.push(on(toggle, "click", move |_| nav::toggle_menu(&page)));
    }

    for link in &page.nav_links {
        let page = page.clone();
        let captured = link.clone();
        table.push(on(link, "click", move |event| {
            nav::handle_link_click(&page, &captured, &event);
        }));
    }

    if let Some(back_to_top) = &page.back_to_top {
        table.push(on(back_to_top, "click", |event| {
            nav::handle_back_to_top(&event);
        }));
    }

    {
        let keydown_page = page.clone();
        table.push(on(&page.document, "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                nav::handle_keydown(&keydown_page, key_event);
            }
        }));
    }

    // Outside-click close runs after the per-link handlers for the same
    // click, which have already closed the menu themselves.
    {
        let click_page = page.clone();
        table.push(on(&page.document, "click", move |event| {
            nav::handle_document_click(&click_page, &event);
        }));
    }

    table
}

/// Attach the table in order. Closures are leaked; listeners live for the
/// page lifetime and are never removed.
fn attach(table: Vec<Registration>) {
    for Registration { target, event, passive, handler } in table {
        if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                handler.as_ref().unchecked_ref(),
                &options,
            );
        } else {
            let _ =
                target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
        handler.forget();
    }
}
