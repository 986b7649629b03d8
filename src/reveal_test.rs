use super::*;

// --- Hero stagger schedule ---

#[test]
fn first_hero_element_waits_the_base_delay() {
    assert_eq!(hero_delay(0), 100);
}

#[test]
fn stagger_adds_one_step_per_element() {
    assert_eq!(hero_delay(1), 200);
    assert_eq!(hero_delay(3), 400);
}

#[test]
fn delays_are_strictly_increasing() {
    for index in 0..20 {
        assert!(hero_delay(index) < hero_delay(index + 1));
    }
}

// --- Reveal decision ---

#[test]
fn entering_view_reveals_an_unrevealed_element() {
    assert!(newly_visible(true, false));
}

#[test]
fn entering_view_again_does_nothing_once_revealed() {
    assert!(!newly_visible(true, true));
}

#[test]
fn leaving_view_never_requests_a_change() {
    // Monotonicity: no combination of inputs produces an un-reveal; the only
    // action the decision can request is adding the visible mark.
    assert!(!newly_visible(false, false));
    assert!(!newly_visible(false, true));
}
