//! Light/dark theme selection, persistence, and OS preference watching.
//!
//! Precedence: an explicit user choice (persisted in localStorage) beats the
//! OS color-scheme signal, which beats the light default. Only explicit
//! toggles persist — a user who never toggles keeps following OS changes.
//! Storage failures are swallowed; the theme is cosmetic.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::MediaQueryListEvent;

use crate::consts::{MEDIA_DARK, THEME_ATTR, THEME_STORAGE_KEY};
use crate::page::Page;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A named visual mode applied to the whole page via `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Theme to apply at load time: saved choice first, OS signal otherwise.
#[must_use]
pub fn initial_theme(saved: Option<Theme>, system: Theme) -> Theme {
    saved.unwrap_or(system)
}

/// Interpret the `data-theme` attribute. A missing or unrecognized value
/// counts as light, so a stray attribute edit still toggles sensibly.
#[must_use]
pub fn theme_from_attr(attr: Option<&str>) -> Theme {
    attr.and_then(Theme::parse).unwrap_or_default()
}

/// OS-level color-scheme preference; light when the query is unavailable.
#[must_use]
pub fn system_theme() -> Theme {
    web_sys::window()
        .and_then(|window| window.match_media(MEDIA_DARK).ok().flatten())
        .map_or(Theme::Light, |query| {
            if query.matches() {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
}

/// Persisted explicit choice, `None` if the user never toggled (or storage
/// is unavailable or holds garbage).
#[must_use]
pub fn saved_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let value = storage.get_item(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::parse(&value)
}

/// Set `data-theme` on the document root without persisting. Used for
/// OS-derived themes so they keep tracking future OS changes.
pub fn apply(page: &Page, theme: Theme) {
    let _ = page.root.set_attribute(THEME_ATTR, theme.as_str());
}

/// The theme currently applied to the document root. Single source of truth
/// for both [`toggle`] and initialization.
#[must_use]
pub fn current_theme(page: &Page) -> Theme {
    theme_from_attr(page.root.get_attribute(THEME_ATTR).as_deref())
}

/// Apply and persist an explicit choice.
pub fn set_theme(page: &Page, theme: Theme) {
    apply(page, theme);
    if let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
    log::debug!("theme set to {}", theme.as_str());
}

/// Flip whatever is visually applied and persist the result.
pub fn toggle(page: &Page) {
    set_theme(page, current_theme(page).flip());
}

/// Apply the load-time theme. Never writes storage.
pub fn init(page: &Page) {
    apply(page, initial_theme(saved_theme(), system_theme()));
}

/// Re-apply the system theme on OS preference changes, but only while the
/// user has no saved choice. The listener lives for the page lifetime.
pub fn watch_system(page: &Page) {
    let Some(query) = web_sys::window().and_then(|window| window.match_media(MEDIA_DARK).ok().flatten())
    else {
        return;
    };
    let page = page.clone();
    let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
        if saved_theme().is_none() {
            let system = if event.matches() { Theme::Dark } else { Theme::Light };
            apply(&page, system);
            log::debug!("followed OS theme change to {}", system.as_str());
        }
    });
    let _ = query.add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
    listener.forget();
}
