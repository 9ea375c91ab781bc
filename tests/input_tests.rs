// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn drag_reports_deltas_for_the_captured_pointer() {
    let mut drag = DragState::default();
    assert_eq!(drag.drag_to(1, Vec2::new(5.0, 5.0)), None);

    drag.begin(1, Vec2::new(10.0, 20.0));
    assert_eq!(drag.drag_to(1, Vec2::new(13.0, 18.0)), Some(Vec2::new(3.0, -2.0)));
    assert_eq!(drag.drag_to(1, Vec2::new(13.0, 18.0)), Some(Vec2::ZERO));
    // another pointer is ignored
    assert_eq!(drag.drag_to(2, Vec2::new(0.0, 0.0)), None);

    drag.end(2);
    assert!(drag.active);
    drag.end(1);
    assert!(!drag.active);
    assert_eq!(drag.drag_to(1, Vec2::new(20.0, 20.0)), None);
}

#[test]
fn wheel_down_zooms_out() {
    let step = 0.95;
    assert!(wheel_zoom_factor(100.0, 100.0, step) > 1.0);
    assert!(wheel_zoom_factor(-100.0, 100.0, step) < 1.0);
    assert!((wheel_zoom_factor(-100.0, 100.0, step) - step).abs() < 1e-6);
    assert_eq!(wheel_zoom_factor(0.0, 100.0, step), 1.0);
}

#[test]
fn wheel_opposite_notches_cancel() {
    let out = wheel_zoom_factor(240.0, 100.0, 0.95);
    let back = wheel_zoom_factor(-240.0, 100.0, 0.95);
    assert!((out * back - 1.0).abs() < 1e-5);
}

#[test]
fn wheel_ignores_bad_input() {
    assert_eq!(wheel_zoom_factor(f64::NAN, 100.0, 0.95), 1.0);
    assert_eq!(wheel_zoom_factor(f64::INFINITY, 100.0, 0.95), 1.0);
    assert_eq!(wheel_zoom_factor(50.0, 0.0, 0.95), 1.0);
}
