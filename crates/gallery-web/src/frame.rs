//! Per-frame tick: advance the viewport controller, rebuild instance data,
//! and draw. One `requestAnimationFrame` callback re-arms itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gallery_core::{
    footprint, opacity, sphere_positions, Camera, Gallery, ImageInstance, ViewportState,
    FrameInput, SPHERE_RADIUS,
};
use glam::{Quat, Vec3};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::input::MouseState;
use crate::render::GpuState;
use crate::textures::TextureCache;

/// Scene data shared between the frame loop and the pointer handlers, which
/// need the current rotation and camera distance to cast pick rays.
pub struct SceneShared {
    pub positions: Vec<Vec3>,
    pub rotation: Quat,
    pub camera_distance: f32,
}

impl SceneShared {
    pub fn new(radius: f32) -> Self {
        Self {
            positions: Vec::new(),
            rotation: Quat::IDENTITY,
            camera_distance: radius * gallery_core::BASE_DISTANCE_FACTOR,
        }
    }
}

pub struct GpuParts {
    pub state: GpuState<'static>,
    pub textures: Rc<RefCell<TextureCache>>,
}

pub struct FrameContext {
    pub gallery: Rc<RefCell<Gallery>>,
    pub viewport: ViewportState,
    pub scene: Rc<RefCell<SceneShared>>,
    pub mouse: Rc<RefCell<MouseState>>,
    pub zoom: Rc<Cell<f32>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuParts>,
    pub layout_revision: Option<u64>,
    pub started_at: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = now.duration_since(self.started_at).as_secs_f32();

        let gallery = self.gallery.borrow();

        // Re-run the layout only when the item set actually changed.
        if self.layout_revision != Some(gallery.revision()) {
            let positions = sphere_positions(gallery.len(), SPHERE_RADIUS);
            log::info!("[layout] arranged {} images on the sphere", positions.len());
            self.scene.borrow_mut().positions = positions;
            self.layout_revision = Some(gallery.revision());
        }

        let mouse = *self.mouse.borrow();
        let pointer = mouse.offset(self.canvas.width() as f32, self.canvas.height() as f32);

        let selected = gallery.selected_index();
        let frame_input = FrameInput {
            dt,
            elapsed,
            pointer,
            selected,
            zoom: self.zoom.get(),
            radius: SPHERE_RADIUS,
        };
        {
            let mut scene = self.scene.borrow_mut();
            self.viewport.advance(&frame_input, &scene.positions);
            scene.rotation = self.viewport.group_rotation();
            scene.camera_distance = self.viewport.camera_distance();
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };

        for item in gallery.items() {
            TextureCache::request(&gpu.textures, &item.id, &item.source);
        }

        let scene = self.scene.borrow();
        let rotation = scene.rotation;

        // Back-to-front for alpha blending: camera sits on +Z, so farther
        // cards have smaller rotated z.
        let mut order: Vec<usize> = (0..scene.positions.len()).collect();
        order.sort_by(|&a, &b| {
            let za = (rotation * scene.positions[a]).z;
            let zb = (rotation * scene.positions[b]).z;
            za.partial_cmp(&zb).unwrap_or(std::cmp::Ordering::Equal)
        });

        let scales = self.viewport.scales();
        let items = gallery.items();
        let mut instances = Vec::with_capacity(order.len());
        let mut bind_groups = Vec::with_capacity(order.len());
        let textures = gpu.textures.borrow();
        for &i in &order {
            let is_selected = selected == Some(i);
            instances.push(ImageInstance::new(
                scene.positions[i],
                scales.get(i).copied().unwrap_or(1.0),
                footprint(is_selected),
                opacity(is_selected),
            ));
            bind_groups.push(textures.bind_group_for(&items[i].id));
        }
        drop(textures);

        let width = self.canvas.width();
        let height = self.canvas.height();
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let camera = Camera::at_distance(scene.camera_distance, aspect);

        gpu.state.resize_if_needed(width, height);
        if let Err(e) = gpu.state.render(&camera, rotation, &instances, &bind_groups) {
            log::error!("[frame] render error: {e:?}");
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // The canvas lives for the whole page; leaking it gives the surface a
    // 'static borrow.
    let canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(canvas).await {
        Ok(state) => Some(state),
        Err(e) => {
            log::error!("[gpu] init failed, rendering disabled: {e:#}");
            None
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        request_animation_frame(&f);
    }) as Box<dyn FnMut()>));
    request_animation_frame(&g);
}

fn request_animation_frame(f: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(window) = web::window() {
        if let Some(cb) = f.borrow().as_ref() {
            _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    if let Some(window) = web::window() {
        let canvas = canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
