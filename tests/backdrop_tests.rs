// Host-side tests for backdrop plane sizing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod backdrop {
    include!("../src/core/backdrop.rs");
}

use backdrop::*;

#[test]
fn wide_image_spans_the_viewport_width() {
    // 2:1 image in a 4:3 viewport
    let (w, h) = fit_plane_size(2000.0, 1000.0, 800.0, 600.0);
    assert_eq!(w, 800.0);
    assert_eq!(h, 400.0);
}

#[test]
fn tall_image_spans_the_viewport_height() {
    // 1:2 image in a 4:3 viewport
    let (w, h) = fit_plane_size(500.0, 1000.0, 800.0, 600.0);
    assert_eq!(w, 300.0);
    assert_eq!(h, 600.0);
}

#[test]
fn matching_aspect_fills_the_viewport() {
    let (w, h) = fit_plane_size(1600.0, 1200.0, 800.0, 600.0);
    assert_eq!((w, h), (800.0, 600.0));
}

#[test]
fn fit_preserves_the_image_aspect_ratio() {
    let cases = [
        (1920.0, 1080.0, 800.0, 600.0),
        (1080.0, 1920.0, 800.0, 600.0),
        (640.0, 480.0, 2560.0, 1080.0),
    ];
    for (iw, ih, vw, vh) in cases {
        let (w, h) = fit_plane_size(iw, ih, vw, vh);
        assert!(w <= vw && h <= vh);
        assert!((w / h - iw / ih).abs() < 1e-4);
    }
}

#[test]
fn degenerate_dimensions_collapse_to_zero() {
    assert_eq!(fit_plane_size(0.0, 1000.0, 800.0, 600.0), (0.0, 0.0));
    assert_eq!(fit_plane_size(1000.0, 1000.0, 0.0, 600.0), (0.0, 0.0));
}

#[test]
fn plane_sits_behind_the_particle_cube() {
    assert!(BACKDROP_PLANE_Z < -250.0);
}
