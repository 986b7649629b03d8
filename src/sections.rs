//! Active-section tracking: which `section[id]` the viewport is in, and the
//! matching `active` class on the nav links.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::consts::{CLASS_ACTIVE, SECTION_LOOKAHEAD, SEL_SECTIONS};
use crate::page::{Page, query_all, scroll_y};

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

/// Geometry of one `section[id]`, in page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section the probe position falls into, first match in DOM
/// order. The probe leads the scroll position by the navbar height plus the
/// lookahead margin. `None` when the position precedes or follows every
/// section; the caller leaves the previous active link untouched in that
/// case.
#[must_use]
pub fn active_section<'a>(
    scroll_y: f64,
    nav_height: f64,
    sections: &'a [Section],
) -> Option<&'a str> {
    let probe = scroll_y + nav_height + SECTION_LOOKAHEAD;
    sections
        .iter()
        .find(|section| probe >= section.top && probe < section.top + section.height)
        .map(|section| section.id.as_str())
}

/// Read current section geometry from the document. Re-read on every scroll
/// tick since layout can change under us.
#[must_use]
pub fn collect_sections(page: &Page) -> Vec<Section> {
    query_all(&page.document, SEL_SECTIONS)
        .into_iter()
        .filter_map(|element| {
            let element = element.dyn_into::<HtmlElement>().ok()?;
            Some(Section {
                id: element.id(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Mark the nav link for the current section active and clear the rest.
/// At most one link holds the class afterwards.
pub fn update_active_link(page: &Page) {
    let Some(position) = scroll_y() else { return };
    let sections = collect_sections(page);
    let Some(current) = active_section(position, page.nav_height(), &sections) else {
        return;
    };
    let target_href = format!("#{current}");
    for link in &page.nav_links {
        let classes = link.class_list();
        if link.get_attribute("href").as_deref() == Some(target_href.as_str()) {
            let _ = classes.add_1(CLASS_ACTIVE);
        } else {
            let _ = classes.remove_1(CLASS_ACTIVE);
        }
    }
}
