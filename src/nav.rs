//! Navigation: navbar scroll state, the mobile menu, anchor smooth
//! scrolling, and the back-to-top control.
//!
//! The menu's source of truth is the `active` class on the menu panel; the
//! [`MenuState`] type models the open/closed transitions and the body
//! scroll-lock value so the state machine is testable without a DOM. Every
//! close path (toggle, outside click, Escape, anchor navigation) funnels
//! through [`close_menu`].

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node, ScrollBehavior, ScrollToOptions};

use crate::consts::{CLASS_ACTIVE, CLASS_SCROLLED, SCROLL_THRESHOLD};
use crate::page::{Page, scroll_y};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

// --- DOM-free core ---

/// Whether the navbar should carry the `scrolled` class at this position.
/// The boundary value itself does not count as scrolled.
#[must_use]
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Extract the target id from an in-page anchor href. Anything that does not
/// start with `#` is external and falls through to default navigation.
#[must_use]
pub fn hash_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Scroll offset that puts `element_top` just below the fixed navbar.
#[must_use]
pub fn scroll_target(element_top: f64, nav_height: f64) -> f64 {
    element_top - nav_height
}

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[must_use]
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Body `overflow` value: page scroll is locked iff the menu is open.
    #[must_use]
    pub fn overflow(self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

// --- DOM glue ---

/// Track the `scrolled` class on the navbar. Idempotent; re-run on every
/// scroll event and once at startup.
pub fn sync_scrolled_class(page: &Page) {
    let Some(navbar) = &page.navbar else { return };
    let Some(position) = scroll_y() else { return };
    let classes = navbar.class_list();
    if is_scrolled(position) {
        let _ = classes.add_1(CLASS_SCROLLED);
    } else {
        let _ = classes.remove_1(CLASS_SCROLLED);
    }
}

/// Whether the mobile menu is currently open, read from the menu panel.
#[must_use]
pub fn menu_is_open(page: &Page) -> bool {
    page.nav_menu
        .as_ref()
        .is_some_and(|menu| menu.class_list().contains(CLASS_ACTIVE))
}

fn apply_menu_state(page: &Page, state: MenuState) {
    set_active(page.nav_toggle.as_ref(), state.open);
    set_active(page.nav_menu.as_ref(), state.open);
    if let Some(body) = &page.body {
        let _ = body.style().set_property("overflow", state.overflow());
    }
}

fn set_active(element: Option<&HtmlElement>, active: bool) {
    let Some(element) = element else { return };
    let classes = element.class_list();
    if active {
        let _ = classes.add_1(CLASS_ACTIVE);
    } else {
        let _ = classes.remove_1(CLASS_ACTIVE);
    }
}

/// Flip the mobile menu and the scroll lock together.
pub fn toggle_menu(page: &Page) {
    apply_menu_state(page, MenuState { open: menu_is_open(page) }.toggled());
}

/// Force the menu closed and unlock scrolling. Safe when already closed.
pub fn close_menu(page: &Page) {
    apply_menu_state(page, MenuState::default());
}

/// Intercept clicks on in-page anchors: close the menu and smooth-scroll to
/// the target, offset by the navbar height. External hrefs are untouched and
/// unresolvable ids are a silent no-op.
pub fn handle_link_click(page: &Page, link: &Element, event: &Event) {
    let Some(href) = link.get_attribute("href") else { return };
    let Some(target_id) = hash_target(&href) else { return };
    event.prevent_default();

    let Some(target) = page
        .document
        .get_element_by_id(target_id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    close_menu(page);
    smooth_scroll_to(scroll_target(
        f64::from(target.offset_top()),
        page.nav_height(),
    ));
}

/// Back-to-top control: smooth-scroll to the very top.
pub fn handle_back_to_top(event: &Event) {
    event.prevent_default();
    smooth_scroll_to(0.0);
}

/// Close the menu when a click lands outside both the toggle and the panel.
pub fn handle_document_click(page: &Page, event: &Event) {
    if !menu_is_open(page) {
        return;
    }
    let (Some(menu), Some(toggle)) = (&page.nav_menu, &page.nav_toggle) else {
        return;
    };
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<Node>().ok());
    let inside = |element: &HtmlElement| {
        target
            .as_ref()
            .is_some_and(|node| element.contains(Some(node)))
    };
    if !inside(menu) && !inside(toggle) {
        close_menu(page);
    }
}

/// Escape closes the menu when open.
pub fn handle_keydown(page: &Page, event: &KeyboardEvent) {
    if event.key() == "Escape" && menu_is_open(page) {
        close_menu(page);
    }
}

/// Animated scroll to an absolute vertical offset.
pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else { return };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
