//! Shared constants: numeric thresholds and the DOM contract strings.

// ── Scroll behavior ─────────────────────────────────────────────

/// Vertical scroll distance past which the navbar gets the `scrolled` class.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Lookahead added to the scroll position when matching the active section,
/// so a section becomes active slightly before its top reaches the navbar.
pub const SECTION_LOOKAHEAD: f64 = 100.0;

// ── Fade-in animation ───────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const FADE_THRESHOLD: f64 = 0.1;

/// Root margin for the intersection observer — shrinks the trigger zone by
/// 50px at the bottom so elements reveal once meaningfully on screen.
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Delay before the first hero element is revealed after load.
pub const HERO_BASE_DELAY_MS: u32 = 100;

/// Additional delay per subsequent hero element.
pub const HERO_STAGGER_MS: u32 = 100;

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key for the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Attribute on the document root that carries the applied theme.
pub const THEME_ATTR: &str = "data-theme";

/// Media query used for the OS-level color-scheme signal.
pub const MEDIA_DARK: &str = "(prefers-color-scheme: dark)";

// ── DOM contract ────────────────────────────────────────────────

pub const ID_NAVBAR: &str = "navbar";
pub const ID_NAV_TOGGLE: &str = "navToggle";
pub const ID_NAV_MENU: &str = "navMenu";
pub const ID_THEME_TOGGLE: &str = "themeToggle";

pub const SEL_NAV_LINKS: &str = ".nav-link";
pub const SEL_FADE: &str = ".fade-in";
pub const SEL_HERO_FADE: &str = ".hero .fade-in";
pub const SEL_BACK_TO_TOP: &str = ".back-to-top";
pub const SEL_SECTIONS: &str = "section[id]";

/// State class shared by the nav toggle, menu panel, and nav links.
pub const CLASS_ACTIVE: &str = "active";
/// Navbar state class once the page is scrolled past the threshold.
pub const CLASS_SCROLLED: &str = "scrolled";
/// Marks a fade-in element as revealed. Added once, never removed.
pub const CLASS_VISIBLE: &str = "visible";
