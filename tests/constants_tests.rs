// Host-side sanity checks for scene and timing constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}
mod text {
    include!("../src/core/text.rs");
}

use constants::*;
use particles::*;
use text::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_consistent() {
    assert!(PARTICLE_COUNT > 0);
    assert!(PARTICLE_HALF_EXTENT > 0.0);
    assert!(BASE_FALL_SPEED > 0.0);
    assert!(POINTER_SPEED_GAIN > 0.0);

    // The respawn band must match the spawn cube, or particles would
    // teleport outside it on their first wrap.
    assert_eq!(FLOOR_Y, -PARTICLE_HALF_EXTENT);
    assert_eq!(CEILING_Y, PARTICLE_HALF_EXTENT);
    assert!(PARTICLE_SIZE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn text_timers_are_ordered() {
    assert!(RELOCATE_INTERVAL_MS > 0);
    assert!(DISSOLVE_DELAY_MS > 0);
    assert!(STRIP_INTERVAL_MS > 0);

    // Dissolution must start before the next relocation would have fired,
    // and strip faster than text drifts.
    assert!(DISSOLVE_DELAY_MS < RELOCATE_INTERVAL_MS);
    assert!(STRIP_INTERVAL_MS < RELOCATE_INTERVAL_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_planes_bracket_the_scene() {
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZNEAR < CAMERA_ZFAR);
    // The far plane must cover the full particle cube from the eye.
    assert!(CAMERA_ZFAR > 2.0 * PARTICLE_HALF_EXTENT);
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);
}

#[test]
fn asset_urls_are_distinct_glb_files() {
    let urls = [INITIAL_MODEL_URL, SWAP_MODEL_URL, CORNER_MODEL_URL];
    for url in urls {
        assert!(url.ends_with(".glb"));
    }
    assert_ne!(INITIAL_MODEL_URL, SWAP_MODEL_URL);
}

#[test]
fn corner_placements_cover_all_four_corners() {
    assert_eq!(CORNER_PLACEMENTS.len(), 4);
    for ([x, _, z], _) in CORNER_PLACEMENTS {
        assert_eq!(x.abs(), 50.0);
        assert_eq!(z.abs(), 50.0);
    }
    // One replica per quadrant
    let mut signs: Vec<(bool, bool)> = CORNER_PLACEMENTS
        .iter()
        .map(|([x, _, z], _)| (*x > 0.0, *z > 0.0))
        .collect();
    signs.sort();
    signs.dedup();
    assert_eq!(signs.len(), 4);
}
