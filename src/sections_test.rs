use super::*;

fn section(id: &str, top: f64, height: f64) -> Section {
    Section { id: id.to_string(), top, height }
}

/// Three non-overlapping sections, navbar height 80, lookahead 100: the
/// probe position is scroll_y + 180.
fn fixture() -> Vec<Section> {
    vec![
        section("about", 400.0, 600.0),
        section("projects", 1000.0, 800.0),
        section("contact", 1800.0, 500.0),
    ]
}

const NAV_HEIGHT: f64 = 80.0;

#[test]
fn position_before_all_sections_matches_nothing() {
    // probe = 180, first section starts at 400.
    assert_eq!(active_section(0.0, NAV_HEIGHT, &fixture()), None);
}

#[test]
fn position_inside_first_section() {
    // probe = 480.
    assert_eq!(active_section(300.0, NAV_HEIGHT, &fixture()), Some("about"));
}

#[test]
fn position_inside_middle_section() {
    // probe = 1200.
    assert_eq!(
        active_section(1020.0, NAV_HEIGHT, &fixture()),
        Some("projects")
    );
}

#[test]
fn position_past_all_sections_matches_nothing() {
    // probe = 5180, last section ends at 2300. Previous active link stays.
    assert_eq!(active_section(5000.0, NAV_HEIGHT, &fixture()), None);
}

#[test]
fn section_top_boundary_is_inclusive() {
    // probe = exactly 1000 lands in "projects", not between sections.
    assert_eq!(
        active_section(820.0, NAV_HEIGHT, &fixture()),
        Some("projects")
    );
}

#[test]
fn section_end_boundary_is_exclusive() {
    // "about" ends at 1000; probe = 1000 already belongs to "projects".
    assert_eq!(
        active_section(819.999, NAV_HEIGHT, &fixture()),
        Some("about")
    );
}

#[test]
fn overlapping_sections_resolve_to_first_in_dom_order() {
    let overlapping = vec![
        section("a", 0.0, 1000.0),
        section("b", 500.0, 1000.0),
    ];
    // probe = 780 falls inside both; DOM order wins.
    assert_eq!(active_section(600.0, NAV_HEIGHT, &overlapping), Some("a"));
}

#[test]
fn no_sections_matches_nothing() {
    assert_eq!(active_section(1000.0, NAV_HEIGHT, &[]), None);
}

#[test]
fn exactly_one_section_matches_in_non_overlapping_fixture() {
    // Single-active-link invariant at the geometry level: sweep a range of
    // positions and count matches per position.
    let sections = fixture();
    for step in 0..200 {
        let position = f64::from(step) * 15.0;
        let probe = position + NAV_HEIGHT + 100.0;
        let matches = sections
            .iter()
            .filter(|s| probe >= s.top && probe < s.top + s.height)
            .count();
        assert!(matches <= 1, "position {position} matched {matches} sections");
        let expected = sections
            .iter()
            .find(|s| probe >= s.top && probe < s.top + s.height)
            .map(|s| s.id.as_str());
        assert_eq!(active_section(position, NAV_HEIGHT, &sections), expected);
    }
}
