use gallery_core::constants::{CAMERA_FOVY, CAMERA_ZFAR, CAMERA_ZNEAR, PICK_SPHERE_RADIUS};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    /// Set by the first pointer event; `(0, 0)` before that means "no
    /// pointer yet", not the top-left corner.
    pub moved: bool,
}

impl MouseState {
    /// Normalized pointer offset for the parallax rig: neutral center until
    /// the pointer has actually moved.
    pub fn offset(&self, width: f32, height: f32) -> Vec2 {
        if self.moved {
            pointer_offset(self.x, self.y, width, height)
        } else {
            Vec2::ZERO
        }
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Canvas pixel coordinates to a normalized pointer offset in `[-1, 1]`,
/// +y up, the convention the viewport controller's parallax expects.
#[inline]
pub fn pointer_offset(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    let w = width.max(1.0);
    let h = height.max(1.0);
    Vec2::new(
        ((x / w) * 2.0 - 1.0).clamp(-1.0, 1.0),
        (1.0 - (y / h) * 2.0).clamp(-1.0, 1.0),
    )
}

/// Compute a world-space ray from canvas pixel coordinates, for the fixed
/// look-at camera sitting on `+Z` at `camera_distance`.
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
    camera_distance: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let aspect = width / height.max(1.0);
    let proj = Mat4::perspective_rh(CAMERA_FOVY, aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, camera_distance), Vec3::ZERO, Vec3::Y);
    let inv = (proj * view).inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = Vec3::new(0.0, 0.0, camera_distance);
    let rd = (p1 - ro).normalize();
    (ro, rd)
}

/// Nearest image card hit by the ray, testing each rotated layout point as
/// a small sphere. Returns the index in layout order.
pub fn pick_image(
    ray_origin: Vec3,
    ray_dir: Vec3,
    rotation: Quat,
    positions: &[Vec3],
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, p) in positions.iter().enumerate() {
        let center = rotation * *p;
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, PICK_SPHERE_RADIUS) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
