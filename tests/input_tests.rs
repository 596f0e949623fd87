// Host-side tests for pointer speed tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn first_sample_reports_zero_speed() {
    let mut tracker = PointerTracker::new();
    assert_eq!(tracker.current_speed(), 0.0);

    tracker.on_pointer_move(120.0, 80.0, 1000.0);
    assert_eq!(tracker.current_speed(), 0.0);
}

#[test]
fn speed_is_distance_over_elapsed_ms() {
    let mut tracker = PointerTracker::new();
    tracker.on_pointer_move(0.0, 0.0, 1000.0);

    // 3-4-5 triangle: 5 px over 2 ms
    tracker.on_pointer_move(3.0, 4.0, 1002.0);
    assert!((tracker.current_speed() - 2.5).abs() < 1e-6);
}

#[test]
fn stationary_pointer_reads_zero() {
    let mut tracker = PointerTracker::new();
    tracker.on_pointer_move(50.0, 50.0, 0.0);
    tracker.on_pointer_move(50.0, 50.0, 16.0);
    assert_eq!(tracker.current_speed(), 0.0);
}

#[test]
fn identical_timestamps_do_not_divide_by_zero() {
    let mut tracker = PointerTracker::new();
    tracker.on_pointer_move(0.0, 0.0, 500.0);
    tracker.on_pointer_move(10.0, 0.0, 500.0);

    assert_eq!(tracker.current_speed(), 0.0);
    assert!(tracker.current_speed().is_finite());
}

#[test]
fn most_recent_interval_wins() {
    let mut tracker = PointerTracker::new();
    tracker.on_pointer_move(0.0, 0.0, 0.0);

    // Fast interval, then a slow one: only the slow one is visible.
    tracker.on_pointer_move(100.0, 0.0, 10.0);
    assert!((tracker.current_speed() - 10.0).abs() < 1e-4);

    tracker.on_pointer_move(101.0, 0.0, 20.0);
    assert!((tracker.current_speed() - 0.1).abs() < 1e-4);
}

#[test]
fn drag_state_defaults_inactive() {
    let drag = DragState::default();
    assert!(!drag.active);
}
