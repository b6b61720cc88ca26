// Host-side tests for the Fibonacci sphere layout.

use gallery_core::{sphere_positions, SPHERE_RADIUS};
use glam::Vec3;

#[test]
fn all_points_sit_on_the_sphere() {
    let positions = sphere_positions(48, SPHERE_RADIUS);
    assert_eq!(positions.len(), 48);
    for (i, p) in positions.iter().enumerate() {
        assert!(
            (p.length() - SPHERE_RADIUS).abs() < 1e-4,
            "point {i} off the sphere: |p| = {}",
            p.length()
        );
    }
}

#[test]
fn zero_items_yields_empty_layout() {
    assert!(sphere_positions(0, SPHERE_RADIUS).is_empty());
}

#[test]
fn single_item_lands_on_the_top_pole() {
    let positions = sphere_positions(1, SPHERE_RADIUS);
    assert_eq!(positions.len(), 1);
    let expected = Vec3::new(0.0, SPHERE_RADIUS, 0.0);
    assert!((positions[0] - expected).length() < 1e-5);
}

#[test]
fn non_positive_radius_yields_empty_layout() {
    assert!(sphere_positions(10, 0.0).is_empty());
    assert!(sphere_positions(10, -3.0).is_empty());
}

#[test]
fn layout_is_deterministic() {
    let a = sphere_positions(48, SPHERE_RADIUS);
    let b = sphere_positions(48, SPHERE_RADIUS);
    assert_eq!(a, b, "same inputs must produce bit-identical layouts");
}

#[test]
fn radius_scales_the_whole_layout() {
    let positions = sphere_positions(4, 10.0);
    for p in &positions {
        assert!((p.length() - 10.0).abs() < 1e-4);
    }
}

#[test]
fn points_spread_from_top_to_bottom() {
    let positions = sphere_positions(48, SPHERE_RADIUS);
    // First point at the top, last at the bottom.
    assert!((positions[0].y - SPHERE_RADIUS).abs() < 1e-4);
    assert!((positions[47].y + SPHERE_RADIUS).abs() < 1e-4);
    // y strictly decreases along the spiral.
    for w in positions.windows(2) {
        assert!(w[1].y < w[0].y, "y did not decrease along the spiral");
    }
}

#[test]
fn neighbors_are_not_clustered() {
    let positions = sphere_positions(48, SPHERE_RADIUS);
    // Golden-angle spirals keep consecutive points well apart; a collapsed
    // layout would show near-zero gaps.
    for w in positions.windows(2) {
        assert!(
            (w[1] - w[0]).length() > 0.5,
            "consecutive points nearly coincide"
        );
    }
}
