// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use whip_core::gesture::normalize_pointer;

#[test]
fn rect_center_is_midpoint() {
    let c = rect_center(100.0, 50.0, 200.0, 100.0);
    assert_eq!(c, Vec2::new(200.0, 100.0));
}

#[test]
fn missing_window_size_gives_unusable_viewport() {
    assert!(!viewport_from(None, Some(800.0)).is_usable());
    assert!(!viewport_from(Some(1024.0), None).is_usable());
    let vp = viewport_from(Some(1024.0), Some(768.0));
    assert!(vp.is_usable());
    assert_eq!(vp.center(), Vec2::new(512.0, 384.0));
}

#[test]
fn element_center_and_pointer_share_one_space() {
    // element at the right edge of a 1200x900 page
    let vp = viewport_from(Some(1200.0), Some(900.0));
    let origin = rect_center(1000.0, 400.0, 200.0, 100.0);
    let pos = normalize_pointer(origin + Vec2::new(-400.0, 0.0), origin, vp).unwrap();
    assert!((pos.x + 1.0).abs() < 1e-6);
    assert_eq!(pos.y, 0.0);
}
