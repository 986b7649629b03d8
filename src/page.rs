//! The [`Page`] context — every DOM element the behavior layer touches,
//! resolved once at startup and cloned into event closures.
//!
//! Optional elements stay `None` when absent from the page; the feature they
//! power simply never activates. Nothing here reports a missing element.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::consts::{
    ID_NAV_MENU, ID_NAV_TOGGLE, ID_NAVBAR, ID_THEME_TOGGLE, SEL_BACK_TO_TOP, SEL_FADE,
    SEL_HERO_FADE, SEL_NAV_LINKS,
};

/// DOM references shared by all behavior components.
///
/// Built once by [`crate::boot::init`]. Element handles are cheap JS object
/// references, so the whole struct clones freely into `'static` closures.
#[derive(Clone)]
pub struct Page {
    pub document: Document,
    /// `<html>` — carries the `data-theme` attribute.
    pub root: Element,
    pub body: Option<HtmlElement>,
    pub navbar: Option<HtmlElement>,
    pub nav_toggle: Option<HtmlElement>,
    pub nav_menu: Option<HtmlElement>,
    pub theme_toggle: Option<HtmlElement>,
    pub back_to_top: Option<Element>,
    pub nav_links: Vec<Element>,
    pub fade_elements: Vec<Element>,
    pub hero_fade_elements: Vec<Element>,
}

impl Page {
    /// Resolve all element handles. Returns `None` only when the document has
    /// no root element, which never happens in a real browser.
    #[must_use]
    pub fn resolve(document: &Document) -> Option<Self> {
        let root = document.document_element()?;
        Some(Self {
            root,
            body: document.body(),
            navbar: html_by_id(document, ID_NAVBAR),
            nav_toggle: html_by_id(document, ID_NAV_TOGGLE),
            nav_menu: html_by_id(document, ID_NAV_MENU),
            theme_toggle: html_by_id(document, ID_THEME_TOGGLE),
            back_to_top: query_all(document, SEL_BACK_TO_TOP).into_iter().next(),
            nav_links: query_all(document, SEL_NAV_LINKS),
            fade_elements: query_all(document, SEL_FADE),
            hero_fade_elements: query_all(document, SEL_HERO_FADE),
            document: document.clone(),
        })
    }

    /// Rendered height of the fixed navbar, 0 when there is none.
    #[must_use]
    pub fn nav_height(&self) -> f64 {
        self.navbar
            .as_ref()
            .map_or(0.0, |navbar| f64::from(navbar.offset_height()))
    }
}

/// Current vertical scroll position, `None` outside a browser.
#[must_use]
pub fn scroll_y() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
}

/// Run a selector and collect the matches as elements.
#[must_use]
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
