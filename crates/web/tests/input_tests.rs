// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use flowwave_core::Mode;
use input::*;

#[test]
fn client_to_canvas_subtracts_rect_origin() {
    let p = client_to_canvas(150.0, 90.0, 50.0, 40.0);
    assert_eq!(p, glam::Vec2::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_allows_points_outside() {
    // coordinates left of / above the canvas go negative
    let p = client_to_canvas(10.0, 5.0, 50.0, 40.0);
    assert_eq!(p, glam::Vec2::new(-40.0, -35.0));
}

#[test]
fn key_action_maps_shortcuts() {
    assert_eq!(key_action("r"), Some(KeyAction::Reset));
    assert_eq!(key_action("R"), Some(KeyAction::Reset));
    assert_eq!(key_action("f"), Some(KeyAction::Select(Mode::Fluid)));
    assert_eq!(key_action("Q"), Some(KeyAction::Select(Mode::Quantum)));
    assert_eq!(key_action("m"), Some(KeyAction::Toggle));
}

#[test]
fn key_action_ignores_other_keys() {
    for key in ["a", "x", " ", "Enter", "Escape", "ArrowUp", "1", ""] {
        assert_eq!(key_action(key), None, "key {:?}", key);
    }
}
