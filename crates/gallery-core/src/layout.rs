//! Golden-spiral sphere layout.
//!
//! Positions are a pure function of `(count, radius)` and are index-aligned
//! with the caller's item list. The `y` term depends on the item's index
//! within the whole set, so any count change requires recomputing every
//! point; there is no incremental patching.

use glam::Vec3;

/// Distribute `count` points approximately evenly over a sphere surface
/// using the golden angle.
///
/// Every returned point has magnitude `radius`. Degenerate inputs (zero
/// count, non-positive radius) yield an empty vec; a single point lands on
/// the north pole rather than dividing by zero.
pub fn sphere_positions(count: usize, radius: f32) -> Vec<Vec3> {
    if count == 0 || radius <= 0.0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![Vec3::new(0.0, radius, 0.0)];
    }

    // Golden angle, pi * (3 - sqrt 5)
    let phi = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    let span = count as f32 - 1.0;

    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / span) * 2.0;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = phi * i as f32;
            Vec3::new(theta.cos() * ring, y, theta.sin() * ring) * radius
        })
        .collect()
}
