// Host-side tests for the orbit camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod camera {
    include!("../src/camera.rs");
}

use camera::*;
use glam::Vec3;

fn test_camera() -> OrbitCamera {
    OrbitCamera::from_eye(
        Vec3::new(15.0, 40.0, 100.0),
        Vec3::ZERO,
        45f32.to_radians(),
        0.1,
        3000.0,
    )
}

#[test]
fn from_eye_reproduces_the_eye_position() {
    let cam = test_camera();
    let eye = cam.eye();
    assert!((eye - Vec3::new(15.0, 40.0, 100.0)).length() < 1e-3);
}

#[test]
fn orbit_preserves_distance_to_target() {
    let mut cam = test_camera();
    let d0 = cam.eye().length();

    cam.rotate(40.0, -25.0);
    for _ in 0..120 {
        cam.update(1.0 / 60.0);
    }
    let d1 = cam.eye().length();
    assert!((d0 - d1).abs() < 1e-2);
}

#[test]
fn drag_velocity_decays_to_rest() {
    let mut cam = test_camera();
    cam.rotate(100.0, 0.0);

    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    let settled = cam.eye();

    // Another few seconds without input must not move the camera further.
    for _ in 0..600 {
        cam.update(1.0 / 60.0);
    }
    assert!((cam.eye() - settled).length() < 1e-2);
}

#[test]
fn pitch_never_crosses_the_poles() {
    let mut cam = test_camera();
    for _ in 0..100 {
        cam.rotate(0.0, 1000.0);
        cam.update(1.0 / 60.0);
    }
    let eye = cam.eye();
    // Even at the clamp the view keeps a horizontal component for look_at.
    assert!(eye.x.abs() + eye.z.abs() > 1e-3);
    assert!(cam.view_matrix().is_finite());
}

#[test]
fn view_proj_handles_degenerate_aspect() {
    let cam = test_camera();
    assert!(cam.view_proj(0.0).is_finite());
    assert!(cam.view_proj(16.0 / 9.0).is_finite());
}
