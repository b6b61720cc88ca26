//! Per-frame viewport interaction controller.
//!
//! Owns the continuous interpolation state for the image sphere: the group
//! orientation, the camera distance, and per-item animated scales. Two
//! modes, distinguished by whether an item is selected:
//!
//! - idle: ambient yaw spin plus dampened pointer parallax
//! - focused: slerp the whole arrangement until the selected item's layout
//!   direction faces the camera (`+Z`)
//!
//! The state is an explicit value object advanced once per rendered frame.
//! It has exactly one writer (the frame tick) and never performs I/O.

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::constants::{
    BASE_DISTANCE_FACTOR, DEFAULT_FOOTPRINT, DEFAULT_OPACITY, FOCUS_BLEND, IDLE_SPIN_RATE,
    MAX_TILT, PARALLAX_BLEND, PULSE_AMPLITUDE, PULSE_SPEED, SCALE_RELAX_BLEND,
    SELECTED_FOOTPRINT, SELECTED_OPACITY, ZOOM_BLEND, ZOOM_RANGE_FACTOR,
};

/// Everything the controller needs for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Seconds since startup, drives the selection pulse.
    pub elapsed: f32,
    /// Pointer offset in `[-1, 1]` on both axes, +y up.
    pub pointer: Vec2,
    /// Index of the selected item, if any.
    pub selected: Option<usize>,
    /// Normalized zoom control in `[0, 1]`.
    pub zoom: f32,
    /// Sphere radius the layout was computed with.
    pub radius: f32,
}

/// Continuous interpolation state threaded through every frame.
#[derive(Clone, Debug)]
pub struct ViewportState {
    orientation: Quat,
    // Parallax rig (pitch, yaw) in radians, composed on top of `orientation`
    // so ambient spin keeps working from any starting pose.
    tilt: Vec2,
    camera_distance: f32,
    scales: Vec<f32>,
    focused: bool,
}

impl ViewportState {
    pub fn new(radius: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            tilt: Vec2::ZERO,
            camera_distance: radius * BASE_DISTANCE_FACTOR,
            scales: Vec::new(),
            focused: false,
        }
    }

    /// Rotation applied to the whole group of images this frame.
    pub fn group_rotation(&self) -> Quat {
        self.tilt_quat() * self.orientation
    }

    pub fn camera_distance(&self) -> f32 {
        self.camera_distance
    }

    /// Per-item animated scales, index-aligned with the layout points.
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    /// Yaw component of the displayed rotation, for diagnostics and tests.
    pub fn yaw(&self) -> f32 {
        self.group_rotation().to_euler(EulerRot::YXZ).0
    }

    fn tilt_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.tilt.y, self.tilt.x, 0.0)
    }

    /// Advance the interpolation state by one frame.
    ///
    /// An out-of-range selection or an empty layout falls back to idle
    /// behavior for the frame rather than failing.
    pub fn advance(&mut self, input: &FrameInput, positions: &[Vec3]) {
        let selected = input.selected.filter(|&i| i < positions.len());

        match selected {
            Some(idx) => {
                if !self.focused {
                    // Fold the parallax rig into the base orientation so the
                    // slerp starts from the rotation currently on screen.
                    self.orientation = self.tilt_quat() * self.orientation;
                    self.tilt = Vec2::ZERO;
                    self.focused = true;
                }
                let dir = positions[idx].normalize_or_zero();
                if dir.length_squared() > 0.0 {
                    let target = Quat::from_rotation_arc(dir, Vec3::Z);
                    self.orientation = self.orientation.slerp(target, FOCUS_BLEND).normalize();
                }
            }
            None => {
                self.focused = false;
                // Ambient spin: constant angular velocity around world Y.
                let spin = Quat::from_rotation_y(input.dt * IDLE_SPIN_RATE);
                self.orientation = (spin * self.orientation).normalize();
                // Dampened pointer parallax, never an instantaneous snap.
                let target = Vec2::new(input.pointer.y, input.pointer.x) * MAX_TILT;
                self.tilt += (target - self.tilt) * PARALLAX_BLEND;
            }
        }

        // Zoom-driven camera distance is smoothed in both modes.
        let target_distance =
            input.radius * BASE_DISTANCE_FACTOR - input.zoom * input.radius * ZOOM_RANGE_FACTOR;
        self.camera_distance += (target_distance - self.camera_distance) * ZOOM_BLEND;

        // Selected item pulses; everything else relaxes back to rest scale.
        self.scales.resize(positions.len(), 1.0);
        for (i, scale) in self.scales.iter_mut().enumerate() {
            if selected == Some(i) {
                *scale = 1.0 + (input.elapsed * PULSE_SPEED).sin() * PULSE_AMPLITUDE;
            } else {
                *scale += (1.0 - *scale) * SCALE_RELAX_BLEND;
            }
        }
    }
}

/// Card footprint (world-unit width/height); larger while selected.
pub fn footprint(selected: bool) -> Vec2 {
    if selected {
        Vec2::from(SELECTED_FOOTPRINT)
    } else {
        Vec2::from(DEFAULT_FOOTPRINT)
    }
}

/// Card opacity; a static two-value rule, not animated.
pub fn opacity(selected: bool) -> f32 {
    if selected {
        SELECTED_OPACITY
    } else {
        DEFAULT_OPACITY
    }
}
