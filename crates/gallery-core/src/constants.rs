// Shared layout/interaction tuning constants used by core logic and the web
// frontend.

// Scene layout
pub const SPHERE_RADIUS: f32 = 7.0; // world-space radius of the image sphere
pub const INITIAL_IMAGE_COUNT: usize = 48; // images per generated set

// Idle-mode motion
pub const IDLE_SPIN_RATE: f32 = 0.02; // ambient yaw, rad/s
pub const MAX_TILT: f32 = 0.4; // pointer parallax extent, rad
pub const PARALLAX_BLEND: f32 = 0.04; // per-frame lerp toward the pointer tilt

// Focused-mode motion
pub const FOCUS_BLEND: f32 = 0.08; // per-frame slerp toward the selected item

// Camera distance
pub const BASE_DISTANCE_FACTOR: f32 = 3.0; // rest distance, in sphere radii
pub const ZOOM_RANGE_FACTOR: f32 = 2.2; // how far zoom=1 pulls in, in radii
pub const ZOOM_BLEND: f32 = 0.06; // per-frame lerp toward the zoom target
pub const DEFAULT_ZOOM: f32 = 0.4;

// Per-item presentation
pub const PULSE_SPEED: f32 = 3.0; // selected-item pulse, rad/s
pub const PULSE_AMPLITUDE: f32 = 0.04;
pub const SCALE_RELAX_BLEND: f32 = 0.1; // relaxation back to rest scale
pub const SELECTED_FOOTPRINT: [f32; 2] = [2.6, 3.4]; // card size, world units
pub const DEFAULT_FOOTPRINT: [f32; 2] = [1.6, 2.2];
pub const SELECTED_OPACITY: f32 = 1.0;
pub const DEFAULT_OPACITY: f32 = 0.85;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 1.1; // ray-sphere radius for card picking

// Camera projection
pub const CAMERA_FOVY: f32 = 0.872_665; // 50 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
