// Host-side tests for the viewport interaction controller.

use gallery_core::{
    sphere_positions, FrameInput, ViewportState, BASE_DISTANCE_FACTOR, DEFAULT_ZOOM,
    PULSE_AMPLITUDE, SPHERE_RADIUS, ZOOM_RANGE_FACTOR,
};
use glam::{Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn idle_input(elapsed: f32) -> FrameInput {
    FrameInput {
        dt: DT,
        elapsed,
        pointer: Vec2::ZERO,
        selected: None,
        zoom: DEFAULT_ZOOM,
        radius: SPHERE_RADIUS,
    }
}

fn layout() -> Vec<Vec3> {
    sphere_positions(48, SPHERE_RADIUS)
}

#[test]
fn idle_yaw_advances_every_frame() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let mut prev = state.yaw();
    for frame in 0..300 {
        state.advance(&idle_input(frame as f32 * DT), &positions);
        let yaw = state.yaw();
        assert!(yaw > prev, "yaw did not advance at frame {frame}");
        prev = yaw;
    }
}

#[test]
fn parallax_tilt_converges_toward_the_pointer() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let mut input = idle_input(0.0);
    input.pointer = Vec2::new(1.0, 0.0);
    for frame in 0..600 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &positions);
    }
    // Pointer hard right adds up to MAX_TILT of extra yaw on top of the
    // ambient spin (600 frames of spin contribute only 0.2 rad).
    assert!(
        state.yaw() > 0.35,
        "tilt never built up: yaw = {}",
        state.yaw()
    );
}

#[test]
fn focus_rotates_the_selected_item_to_face_the_camera() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let idx = 10;
    let mut input = idle_input(0.0);
    input.selected = Some(idx);
    let dir = positions[idx].normalize();

    let mut prev_angle = (state.group_rotation() * dir).angle_between(Vec3::Z);
    for frame in 0..400 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &positions);
        let angle = (state.group_rotation() * dir).angle_between(Vec3::Z);
        assert!(
            angle <= prev_angle + 1e-5,
            "focus convergence regressed at frame {frame}: {angle} > {prev_angle}"
        );
        prev_angle = angle;
    }
    assert!(
        prev_angle < 0.01,
        "selected item never faced the camera: residual {prev_angle} rad"
    );
}

#[test]
fn focus_does_not_snap_away_from_the_current_pose() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    // Build up a full parallax tilt first.
    let mut input = idle_input(0.0);
    input.pointer = Vec2::new(1.0, 1.0);
    for frame in 0..600 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &positions);
    }
    let before = state.group_rotation();

    // Select whichever item is already closest to facing the camera, so the
    // first focused frame's blend step is tiny and any jump would come from
    // dropping the tilt.
    let idx = (0..positions.len())
        .min_by(|&a, &b| {
            let aa = (before * positions[a].normalize()).angle_between(Vec3::Z);
            let ab = (before * positions[b].normalize()).angle_between(Vec3::Z);
            aa.partial_cmp(&ab).unwrap()
        })
        .unwrap();
    input.selected = Some(idx);
    state.advance(&input, &positions);
    let after = state.group_rotation();

    // One blend step can legitimately move the pose a little; dropping a
    // built-up tilt would jump by the full tilt magnitude (> 0.5 rad).
    assert!(
        before.angle_between(after) < 0.2,
        "entering focus jumped by {} rad",
        before.angle_between(after)
    );
}

#[test]
fn camera_distance_moves_monotonically_without_overshoot() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let mut input = idle_input(0.0);
    input.zoom = 1.0;
    let target = SPHERE_RADIUS * BASE_DISTANCE_FACTOR - SPHERE_RADIUS * ZOOM_RANGE_FACTOR;

    let mut prev = state.camera_distance();
    for frame in 0..600 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &positions);
        let d = state.camera_distance();
        assert!(d <= prev + 1e-5, "distance overshot upward at frame {frame}");
        assert!(d >= target - 1e-3, "distance undershot the target");
        prev = d;
    }
    assert!((prev - target).abs() < 0.05, "distance never settled: {prev}");
}

#[test]
fn out_of_range_selection_behaves_like_idle() {
    let positions = layout();
    let mut with_bogus = ViewportState::new(SPHERE_RADIUS);
    let mut without = ViewportState::new(SPHERE_RADIUS);
    for frame in 0..120 {
        let mut a = idle_input(frame as f32 * DT);
        a.selected = Some(positions.len() + 5);
        let b = idle_input(frame as f32 * DT);
        with_bogus.advance(&a, &positions);
        without.advance(&b, &positions);
    }
    assert!(
        with_bogus
            .group_rotation()
            .angle_between(without.group_rotation())
            < 1e-5
    );
    assert_eq!(with_bogus.camera_distance(), without.camera_distance());
}

#[test]
fn selected_scale_pulses_and_relaxes_after_deselect() {
    let positions = layout();
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let idx = 3;
    let mut input = idle_input(0.0);
    input.selected = Some(idx);

    let mut saw_above = false;
    let mut saw_below = false;
    for frame in 0..600 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &positions);
        let s = state.scales()[idx];
        assert!((s - 1.0).abs() <= PULSE_AMPLITUDE + 1e-5);
        saw_above |= s > 1.0 + PULSE_AMPLITUDE * 0.5;
        saw_below |= s < 1.0 - PULSE_AMPLITUDE * 0.5;
        // Unselected items stay at rest scale.
        assert!((state.scales()[0] - 1.0).abs() < 1e-5);
    }
    assert!(saw_above && saw_below, "scale never oscillated");

    input.selected = None;
    for frame in 0..300 {
        input.elapsed = (600 + frame) as f32 * DT;
        state.advance(&input, &positions);
    }
    assert!(
        (state.scales()[idx] - 1.0).abs() < 1e-3,
        "scale did not relax after deselect"
    );
}

#[test]
fn empty_layout_is_harmless() {
    let mut state = ViewportState::new(SPHERE_RADIUS);
    let mut input = idle_input(0.0);
    input.selected = Some(0);
    for frame in 0..10 {
        input.elapsed = frame as f32 * DT;
        state.advance(&input, &[]);
    }
    assert!(state.scales().is_empty());
}

#[test]
fn scales_track_layout_growth() {
    let mut state = ViewportState::new(SPHERE_RADIUS);
    state.advance(&idle_input(0.0), &sphere_positions(4, SPHERE_RADIUS));
    assert_eq!(state.scales().len(), 4);
    state.advance(&idle_input(DT), &sphere_positions(48, SPHERE_RADIUS));
    assert_eq!(state.scales().len(), 48);
}
