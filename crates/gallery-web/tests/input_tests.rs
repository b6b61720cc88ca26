// Host-side tests for the pure picking and pointer math.
// The crate itself is wasm-only, so the module is included directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use gallery_core::{sphere_positions, BASE_DISTANCE_FACTOR, SPHERE_RADIUS};
use glam::{Quat, Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_hit_reports_the_near_surface() {
    let t = ray_sphere(
        Vec3::ZERO,
        Vec3::Z,
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    let t = t.expect("ray straight at the sphere must hit");
    assert!((t - 3.0).abs() < 1e-4, "expected near intersection, got {t}");
}

#[test]
fn ray_sphere_miss_returns_none() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_sphere_behind_the_origin_is_ignored() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn pointer_offset_maps_corners_and_center() {
    let w = 800.0;
    let h = 600.0;
    assert_eq!(pointer_offset(0.0, 0.0, w, h), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_offset(w, h, w, h), Vec2::new(1.0, -1.0));
    let center = pointer_offset(w / 2.0, h / 2.0, w, h);
    assert!(center.length() < 1e-6);
}

#[test]
fn pointer_is_neutral_until_the_first_move() {
    // A fresh mouse sits at (0, 0) in canvas pixels, which must read as the
    // neutral center, not the top-left corner, or the idle parallax drifts
    // to a full corner tilt on page load.
    let mouse = MouseState::default();
    assert_eq!(mouse.offset(800.0, 600.0), Vec2::ZERO);

    // After a real move, (0, 0) genuinely is the top-left corner.
    let mouse = MouseState {
        x: 0.0,
        y: 0.0,
        down: false,
        moved: true,
    };
    assert_eq!(mouse.offset(800.0, 600.0), Vec2::new(-1.0, 1.0));
}

#[test]
fn pointer_offset_clamps_outside_the_canvas() {
    let p = pointer_offset(-50.0, 900.0, 800.0, 600.0);
    assert_eq!(p, Vec2::new(-1.0, -1.0));
}

#[test]
fn center_screen_ray_points_down_the_view_axis() {
    let distance = SPHERE_RADIUS * BASE_DISTANCE_FACTOR;
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, distance);
    assert!((ro - Vec3::new(0.0, 0.0, distance)).length() < 1e-5);
    assert!((rd - Vec3::NEG_Z).length() < 1e-3, "center ray was {rd}");
}

#[test]
fn pick_hits_the_item_in_front_of_the_camera() {
    let positions = sphere_positions(48, SPHERE_RADIUS);
    let distance = SPHERE_RADIUS * BASE_DISTANCE_FACTOR;

    // Rotate item 7 to face the camera, then shoot through screen center.
    let idx = 7;
    let rotation = Quat::from_rotation_arc(positions[idx].normalize(), Vec3::Z);
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, distance);
    assert_eq!(pick_image(ro, rd, rotation, &positions), Some(idx));
}

#[test]
fn pick_prefers_the_nearest_of_two_aligned_items() {
    // Two points on the view axis; the nearer one (larger z) must win.
    let positions = vec![Vec3::new(0.0, 0.0, -SPHERE_RADIUS), Vec3::new(0.0, 0.0, SPHERE_RADIUS)];
    let distance = SPHERE_RADIUS * BASE_DISTANCE_FACTOR;
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 400.0, 300.0, distance);
    assert_eq!(pick_image(ro, rd, Quat::IDENTITY, &positions), Some(1));
}

#[test]
fn pick_misses_empty_or_off_target_layouts() {
    let distance = SPHERE_RADIUS * BASE_DISTANCE_FACTOR;
    let (ro, rd) = screen_to_world_ray(800.0, 600.0, 0.0, 0.0, distance);
    assert_eq!(pick_image(ro, rd, Quat::IDENTITY, &[]), None);
    // A corner ray at this field of view passes wide of a single centered card.
    let positions = vec![Vec3::ZERO];
    assert_eq!(pick_image(ro, rd, Quat::IDENTITY, &positions), None);
}
