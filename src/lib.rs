//! Behavior layer for the portfolio site.
//!
//! This crate is compiled to WebAssembly and attached to the static page. It
//! owns everything the page does after load: theme selection and persistence,
//! the responsive navigation menu, smooth scrolling to in-page anchors,
//! active-section highlighting, and scroll-triggered fade-in animation. All
//! state lives in the DOM (CSS classes, the `data-theme` attribute, one
//! localStorage key); the crate itself holds no long-lived state beyond the
//! event listeners it registers at startup.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`boot`] | One-shot initialization and the listener registration table |
//! | [`page`] | [`page::Page`] context — DOM lookups resolved once at startup |
//! | [`theme`] | Light/dark theme precedence, persistence, OS watching |
//! | [`nav`] | Navbar scroll state, mobile menu, anchor smooth scroll |
//! | [`sections`] | Active-section tracking from section geometry |
//! | [`reveal`] | Fade-in reveal via intersection observation and hero timers |
//! | [`consts`] | Numeric constants and the DOM contract strings |
//!
//! Modules with non-trivial logic keep a DOM-free core (plain data and pure
//! functions, tested natively) separate from the thin web-sys glue around it.

pub mod boot;
pub mod consts;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod sections;
pub mod theme;
