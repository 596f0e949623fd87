// Host-side tests for the floating-text lifecycle state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod text {
    include!("../src/core/text.rs");
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use text::*;

#[test]
fn relocation_stays_inside_the_viewport() {
    let mut entity = FloatingText::new("hello".into(), 10.0, 10.0);
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..100 {
        let (x, y) = entity.relocate_tick(800.0, 600.0, &mut rng).unwrap();
        assert!((0.0..=800.0).contains(&x));
        assert!((0.0..=600.0).contains(&y));
        assert_eq!(entity.position(), (x, y));
    }
}

#[test]
fn begin_dissolve_fires_once() {
    let mut entity = FloatingText::new("hello".into(), 0.0, 0.0);
    assert_eq!(entity.state(), TextState::Active);

    assert!(entity.begin_dissolve());
    assert_eq!(entity.state(), TextState::Dissolving);

    // Repeated hover events must not restart anything.
    assert!(!entity.begin_dissolve());
    assert_eq!(entity.state(), TextState::Dissolving);
}

#[test]
fn stale_relocation_tick_after_dissolve_is_a_no_op() {
    let mut entity = FloatingText::new("hello".into(), 42.0, 24.0);
    let mut rng = StdRng::seed_from_u64(2);

    entity.begin_dissolve();
    assert_eq!(entity.relocate_tick(800.0, 600.0, &mut rng), None);
    assert_eq!(entity.position(), (42.0, 24.0));
}

#[test]
fn strip_removes_one_leading_character_per_tick() {
    let mut entity = FloatingText::new("abc".into(), 0.0, 0.0);
    entity.begin_dissolve();

    assert_eq!(entity.strip_tick(), StripOutcome::Stripped);
    assert_eq!(entity.text(), "bc");
    assert_eq!(entity.strip_tick(), StripOutcome::Stripped);
    assert_eq!(entity.text(), "c");
    assert_eq!(entity.strip_tick(), StripOutcome::Finished);
    assert_eq!(entity.text(), "");
    assert_eq!(entity.state(), TextState::Removed);
}

#[test]
fn strip_handles_multibyte_characters() {
    let mut entity = FloatingText::new("日本語".into(), 0.0, 0.0);
    entity.begin_dissolve();

    assert_eq!(entity.strip_tick(), StripOutcome::Stripped);
    assert_eq!(entity.text(), "本語");
    assert_eq!(entity.strip_tick(), StripOutcome::Stripped);
    assert_eq!(entity.strip_tick(), StripOutcome::Finished);
}

#[test]
fn strip_is_idle_outside_dissolving() {
    let mut active = FloatingText::new("hi".into(), 0.0, 0.0);
    assert_eq!(active.strip_tick(), StripOutcome::Idle);
    assert_eq!(active.text(), "hi");

    let mut removed = FloatingText::new("x".into(), 0.0, 0.0);
    removed.begin_dissolve();
    assert_eq!(removed.strip_tick(), StripOutcome::Finished);
    // A stale strip tick after removal does nothing.
    assert_eq!(removed.strip_tick(), StripOutcome::Idle);
    assert_eq!(removed.state(), TextState::Removed);
}

#[test]
fn empty_text_finishes_on_first_strip() {
    let mut entity = FloatingText::new(String::new(), 0.0, 0.0);
    entity.begin_dissolve();
    assert_eq!(entity.strip_tick(), StripOutcome::Finished);
    assert_eq!(entity.state(), TextState::Removed);
}
